use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::{AccountMeta, Instruction};
use anchor_lang::InstructionData;

use crate::{
    instructions::{Manage, ManageArgs, ViewCpiDigest, ViewCpiDigestArgs},
    manage::ExternalInstruction,
    utils::{get_vault_pda, get_vault_state_pda},
};

/// Executes `eix` from the vault sub-account. `cpi_digest` must be the
/// digest account that whitelists the call.
pub fn create_manage_instruction<E: ExternalInstruction + ?Sized>(
    signer: &Pubkey,
    eix: &E,
    cpi_digest: &Pubkey,
) -> Instruction {
    let vault_id = eix.vault_id();
    let sub_account = eix.sub_account();

    let mut accounts = vec![
        AccountMeta::new(*signer, true),
        AccountMeta::new(get_vault_state_pda(vault_id), false),
        AccountMeta::new(get_vault_pda(vault_id, sub_account), false),
        AccountMeta::new_readonly(*cpi_digest, false),
        AccountMeta::new_readonly(eix.ix_program_id(), false),
    ];
    accounts.extend(eix.ix_remaining_accounts());

    Instruction {
        program_id: crate::ID,
        accounts,
        data: Manage {
            args: ManageArgs {
                vault_id,
                sub_account,
                ix_data: eix.ix_data(),
            },
        }
        .data(),
    }
}

/// Read-only call whose return data is the digest the program computes for
/// `eix`. Only meaningful under simulation.
pub fn create_view_cpi_digest_instruction<E: ExternalInstruction + ?Sized>(eix: &E) -> Instruction {
    let mut accounts = vec![AccountMeta::new_readonly(eix.ix_program_id(), false)];
    accounts.extend(eix.ix_remaining_accounts());

    Instruction {
        program_id: crate::ID,
        accounts,
        data: ViewCpiDigest {
            args: ViewCpiDigestArgs {
                ix_data: eix.ix_data(),
                operators: eix.ix_operators(),
            },
        }
        .data(),
    }
}
