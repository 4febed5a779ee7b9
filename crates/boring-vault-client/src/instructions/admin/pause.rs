use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::Instruction;
use anchor_lang::InstructionData;

use crate::instructions::{authority_accounts, Pause, Unpause};

pub fn create_pause_instruction(signer: &Pubkey, vault_id: u64) -> Instruction {
    Instruction {
        program_id: crate::ID,
        accounts: authority_accounts(signer, vault_id),
        data: Pause { vault_id }.data(),
    }
}

pub fn create_unpause_instruction(signer: &Pubkey, vault_id: u64) -> Instruction {
    Instruction {
        program_id: crate::ID,
        accounts: authority_accounts(signer, vault_id),
        data: Unpause { vault_id }.data(),
    }
}
