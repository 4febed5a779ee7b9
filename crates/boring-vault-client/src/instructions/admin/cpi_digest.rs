use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::{AccountMeta, Instruction};
use anchor_lang::{system_program, InstructionData};

use crate::{
    instructions::{CloseCpiDigest, CpiDigestArgs, InitializeCpiDigest},
    states::Operators,
    utils::{get_cpi_digest_pda, get_vault_state_pda},
};

/// Whitelists a strategist call by creating its digest account.
pub fn create_initialize_cpi_digest_instruction(
    signer: &Pubkey,
    vault_id: u64,
    digest: [u8; 32],
    operators: Operators,
) -> Instruction {
    let accounts = vec![
        AccountMeta::new(*signer, true),
        AccountMeta::new_readonly(system_program::ID, false),
        AccountMeta::new(get_vault_state_pda(vault_id), false),
        AccountMeta::new(get_cpi_digest_pda(vault_id, &digest), false),
    ];

    Instruction {
        program_id: crate::ID,
        accounts,
        data: InitializeCpiDigest {
            args: CpiDigestArgs {
                vault_id,
                cpi_digest: digest,
                operators,
            },
        }
        .data(),
    }
}

/// Revokes a whitelisted call; rent goes back to the signer.
pub fn create_close_cpi_digest_instruction(signer: &Pubkey, vault_id: u64, digest: [u8; 32]) -> Instruction {
    let accounts = vec![
        AccountMeta::new(*signer, true),
        AccountMeta::new_readonly(get_vault_state_pda(vault_id), false),
        AccountMeta::new(get_cpi_digest_pda(vault_id, &digest), false),
    ];

    Instruction {
        program_id: crate::ID,
        accounts,
        data: CloseCpiDigest {
            vault_id,
            cpi_digest: digest,
        }
        .data(),
    }
}
