use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::{AccountMeta, Instruction};
use anchor_lang::{system_program, InstructionData};
use anchor_spl::{associated_token, token_2022};

use crate::{
    instructions::{Deposit, DepositArgs, DepositSol},
    utils::{get_asset_data_pda, get_ata, get_share_mint_pda, get_vault_pda, get_vault_state_pda, NATIVE},
};

/// Accounts a deposit needs that the caller has to look up on chain.
#[derive(Debug, Clone, Copy)]
pub struct DepositAccounts {
    /// Sub-account the vault currently routes deposits to.
    pub deposit_sub_account: u8,
    /// Price feed from the asset's `AssetData`.
    pub price_feed: Pubkey,
}

/// Deposits native SOL and mints shares to the signer.
pub fn create_deposit_sol_instruction(
    signer: &Pubkey,
    accounts: DepositAccounts,
    args: DepositArgs,
) -> Instruction {
    let vault_state = get_vault_state_pda(args.vault_id);
    let share_mint = get_share_mint_pda(&vault_state);

    let accounts = vec![
        AccountMeta::new(*signer, true),
        AccountMeta::new_readonly(token_2022::ID, false),
        AccountMeta::new_readonly(system_program::ID, false),
        AccountMeta::new_readonly(associated_token::ID, false),
        AccountMeta::new(vault_state, false),
        AccountMeta::new(get_vault_pda(args.vault_id, accounts.deposit_sub_account), false),
        AccountMeta::new_readonly(get_asset_data_pda(&vault_state, &NATIVE), false),
        AccountMeta::new(share_mint, false),
        AccountMeta::new(get_ata(signer, &share_mint, &token_2022::ID), false),
        AccountMeta::new_readonly(accounts.price_feed, false),
    ];

    Instruction {
        program_id: crate::ID,
        accounts,
        data: DepositSol { args }.data(),
    }
}

/// Deposits an SPL token and mints shares to the signer.
///
/// # Arguments
/// * `signer` - Depositor and payer
/// * `mint` - Deposit asset mint
/// * `token_program` - Program that owns `mint` (Token or Token-2022)
/// * `accounts` - Deposit sub-account and price feed read from chain
/// * `args` - Amount in and minimum shares out
pub fn create_deposit_instruction(
    signer: &Pubkey,
    mint: &Pubkey,
    token_program: &Pubkey,
    accounts: DepositAccounts,
    args: DepositArgs,
) -> Instruction {
    let vault_state = get_vault_state_pda(args.vault_id);
    let share_mint = get_share_mint_pda(&vault_state);
    let vault = get_vault_pda(args.vault_id, accounts.deposit_sub_account);

    let accounts = vec![
        AccountMeta::new(*signer, true),
        AccountMeta::new_readonly(*token_program, false),
        AccountMeta::new_readonly(token_2022::ID, false),
        AccountMeta::new_readonly(system_program::ID, false),
        AccountMeta::new_readonly(associated_token::ID, false),
        AccountMeta::new(vault_state, false),
        AccountMeta::new_readonly(vault, false),
        AccountMeta::new_readonly(get_asset_data_pda(&vault_state, mint), false),
        AccountMeta::new_readonly(*mint, false),
        AccountMeta::new(get_ata(signer, mint, token_program), false),
        AccountMeta::new(get_ata(&vault, mint, token_program), false),
        AccountMeta::new(share_mint, false),
        AccountMeta::new(get_ata(signer, &share_mint, &token_2022::ID), false),
        AccountMeta::new_readonly(accounts.price_feed, false),
    ];

    Instruction {
        program_id: crate::ID,
        accounts,
        data: Deposit { args }.data(),
    }
}
