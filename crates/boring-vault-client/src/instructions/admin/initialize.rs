use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::{AccountMeta, Instruction};
use anchor_lang::{system_program, InstructionData};

use crate::{instructions::Initialize, utils::get_program_config_pda};

/// Creates the program config. The program account itself must co-sign, so
/// only the holder of the program keypair can initialize.
pub fn create_initialize_instruction(authority: &Pubkey, signer: &Pubkey) -> Instruction {
    let accounts = vec![
        AccountMeta::new(*signer, true),
        AccountMeta::new(crate::ID, true),
        AccountMeta::new(get_program_config_pda(), false),
        AccountMeta::new_readonly(system_program::ID, false),
    ];

    Instruction {
        program_id: crate::ID,
        accounts,
        data: Initialize { authority: *authority }.data(),
    }
}
