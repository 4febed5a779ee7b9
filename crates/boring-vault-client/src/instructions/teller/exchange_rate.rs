use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::{AccountMeta, Instruction};
use anchor_lang::InstructionData;

use crate::{
    instructions::{ClaimFeesInBase, UpdateExchangeRate},
    utils::{get_ata, get_share_mint_pda, get_vault_pda, get_vault_state_pda},
};

/// Publishes a new exchange rate. Signed by the exchange rate provider.
pub fn create_update_exchange_rate_instruction(
    signer: &Pubkey,
    vault_id: u64,
    new_exchange_rate: u64,
) -> Instruction {
    let vault_state = get_vault_state_pda(vault_id);
    let accounts = vec![
        AccountMeta::new_readonly(*signer, true),
        AccountMeta::new(vault_state, false),
        AccountMeta::new_readonly(get_share_mint_pda(&vault_state), false),
    ];

    Instruction {
        program_id: crate::ID,
        accounts,
        data: UpdateExchangeRate {
            vault_id,
            new_exchange_rate,
        }
        .data(),
    }
}

/// Pays accrued fees in the base asset from `sub_account` to the payout
/// address.
pub fn create_claim_fees_in_base_instruction(
    signer: &Pubkey,
    vault_id: u64,
    sub_account: u8,
    base_mint: &Pubkey,
    payout_address: &Pubkey,
    token_program: &Pubkey,
) -> Instruction {
    let vault = get_vault_pda(vault_id, sub_account);
    let accounts = vec![
        AccountMeta::new(*signer, true),
        AccountMeta::new_readonly(*base_mint, false),
        AccountMeta::new(get_vault_state_pda(vault_id), false),
        AccountMeta::new_readonly(vault, false),
        AccountMeta::new(get_ata(payout_address, base_mint, token_program), false),
        AccountMeta::new(get_ata(&vault, base_mint, token_program), false),
        AccountMeta::new_readonly(*token_program, false),
    ];

    Instruction {
        program_id: crate::ID,
        accounts,
        data: ClaimFeesInBase {
            vault_id,
            sub_account,
        }
        .data(),
    }
}
