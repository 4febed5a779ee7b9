//! Builders for the SPL and runtime programs the builder needs outside of
//! `manage`: associated token accounts, native SOL syncing and address lookup
//! tables.

use anchor_lang::prelude::Pubkey;
use anchor_lang::solana_program::instruction::Instruction;
use anchor_spl::associated_token::spl_associated_token_account::instruction::create_associated_token_account_idempotent;
use anchor_spl::token_2022::spl_token_2022::instruction::sync_native;
use eyre::{eyre, Result};
use solana_sdk::address_lookup_table::instruction::create_lookup_table;

/// Creates the associated token account of `owner` for `mint`, succeeding
/// if it already exists.
pub fn create_ata_idempotent_instruction(
    payer: &Pubkey,
    owner: &Pubkey,
    mint: &Pubkey,
    token_program: &Pubkey,
) -> Instruction {
    create_associated_token_account_idempotent(payer, owner, mint, token_program)
}

/// Brings a wrapped SOL account's token amount in line with its lamports.
/// Works for SPL Token and Token-2022 accounts.
pub fn create_sync_native_instruction(
    account: &Pubkey,
    token_program: &Pubkey,
) -> Result<Instruction> {
    sync_native(token_program, account)
        .map_err(|e| eyre!("SyncNative for {} under {}: {}", account, token_program, e))
}

/// Creates an address lookup table owned by `authority`. The authority does
/// not need to sign, so a PDA can own the table.
///
/// # Returns
/// * `(Instruction, Pubkey)` - The instruction and the table address it creates
pub fn create_lookup_table_instruction(
    authority: &Pubkey,
    payer: &Pubkey,
    recent_slot: u64,
) -> (Instruction, Pubkey) {
    create_lookup_table(*authority, *payer, recent_slot)
}
