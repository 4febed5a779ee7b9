use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::{AccountMeta, Instruction};
use anchor_lang::{system_program, InstructionData};
use anchor_spl::{associated_token, token_2022};

use crate::{
    instructions::{Withdraw, WithdrawArgs},
    utils::{get_asset_data_pda, get_ata, get_share_mint_pda, get_vault_pda, get_vault_state_pda},
};

/// Burns shares and pays out `mint` from the withdraw sub-account.
pub fn create_withdraw_instruction(
    signer: &Pubkey,
    mint: &Pubkey,
    token_program: &Pubkey,
    withdraw_sub_account: u8,
    price_feed: &Pubkey,
    args: WithdrawArgs,
) -> Instruction {
    let vault_state = get_vault_state_pda(args.vault_id);
    let share_mint = get_share_mint_pda(&vault_state);
    let vault = get_vault_pda(args.vault_id, withdraw_sub_account);

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
        AccountMeta::new_readonly(*price_feed, false),
    ];

    Instruction {
        program_id: crate::ID,
        accounts,
        data: Withdraw { args }.data(),
    }
}
