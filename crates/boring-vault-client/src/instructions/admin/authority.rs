use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::Instruction;
use anchor_lang::InstructionData;

use crate::instructions::{authority_accounts, AcceptAuthority, TransferAuthority};

/// First step of a two-step authority handover: records `pending_authority`.
pub fn create_transfer_authority_instruction(
    signer: &Pubkey,
    vault_id: u64,
    pending_authority: &Pubkey,
) -> Instruction {
    Instruction {
        program_id: crate::ID,
        accounts: authority_accounts(signer, vault_id),
        data: TransferAuthority {
            vault_id,
            pending_authority: *pending_authority,
        }
        .data(),
    }
}

/// Second step, signed by the pending authority.
pub fn create_accept_authority_instruction(signer: &Pubkey, vault_id: u64) -> Instruction {
    Instruction {
        program_id: crate::ID,
        accounts: authority_accounts(signer, vault_id),
        data: AcceptAuthority { vault_id }.data(),
    }
}
