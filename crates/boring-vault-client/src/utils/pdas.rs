use anchor_lang::prelude::*;
use anchor_spl::associated_token::get_associated_token_address_with_program_id;
use solana_sdk::address_lookup_table::instruction::derive_lookup_table_address;

use crate::utils::{
    ASSET_DATA_SEED, CONFIG_SEED, CPI_DIGEST_SEED,
    FARM_USER_STATE_SEED, KAMINO_FARMS_PROGRAM_ID, KAMINO_LEND_PROGRAM_ID,
    LENDING_MARKET_AUTHORITY_SEED, SHARE_TOKEN_SEED, USER_METADATA_SEED, VAULT_SEED,
    VAULT_STATE_SEED,
};

pub fn get_program_config_pda() -> Pubkey {
    Pubkey::find_program_address(&[CONFIG_SEED], &crate::ID).0
}

pub fn get_vault_state_pda(vault_id: u64) -> Pubkey {
    Pubkey::find_program_address(&[VAULT_STATE_SEED, &vault_id.to_le_bytes()], &crate::ID).0
}

/// Sub-account PDA that holds the vault's assets.
pub fn get_vault_pda(vault_id: u64, sub_account: u8) -> Pubkey {
    Pubkey::find_program_address(
        &[VAULT_SEED, &vault_id.to_le_bytes(), &[sub_account]],
        &crate::ID,
    )
    .0
}

pub fn get_share_mint_pda(vault_state: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(&[SHARE_TOKEN_SEED, vault_state.as_ref()], &crate::ID).0
}

pub fn get_asset_data_pda(vault_state: &Pubkey, mint: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(
        &[ASSET_DATA_SEED, vault_state.as_ref(), mint.as_ref()],
        &crate::ID,
    )
    .0
}

pub fn get_cpi_digest_pda(vault_id: u64, digest: &[u8; 32]) -> Pubkey {
    Pubkey::find_program_address(
        &[CPI_DIGEST_SEED, &vault_id.to_le_bytes(), digest],
        &crate::ID,
    )
    .0
}

pub fn get_user_metadata_pda(owner: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(&[USER_METADATA_SEED, owner.as_ref()], &KAMINO_LEND_PROGRAM_ID).0
}

/// Kamino obligation address. Vanilla obligations use the system program id
/// for both seed accounts.
pub fn get_obligation_pda(
    tag: u8,
    id: u8,
    owner: &Pubkey,
    lending_market: &Pubkey,
    seed_1: &Pubkey,
    seed_2: &Pubkey,
) -> Pubkey {
    Pubkey::find_program_address(
        &[
            &[tag],
            &[id],
            owner.as_ref(),
            lending_market.as_ref(),
            seed_1.as_ref(),
            seed_2.as_ref(),
        ],
        &KAMINO_LEND_PROGRAM_ID,
    )
    .0
}

pub fn get_vanilla_obligation_pda(tag: u8, id: u8, owner: &Pubkey, lending_market: &Pubkey) -> Pubkey {
    get_obligation_pda(
        tag,
        id,
        owner,
        lending_market,
        &anchor_lang::system_program::ID,
        &anchor_lang::system_program::ID,
    )
}

pub fn get_lending_market_authority(lending_market: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(
        &[LENDING_MARKET_AUTHORITY_SEED, lending_market.as_ref()],
        &KAMINO_LEND_PROGRAM_ID,
    )
    .0
}

/// Farms program user state tracking an obligation's stake in a reserve farm.
pub fn get_farm_user_state_pda(farm_state: &Pubkey, obligation: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(
        &[FARM_USER_STATE_SEED, farm_state.as_ref(), obligation.as_ref()],
        &KAMINO_FARMS_PROGRAM_ID,
    )
    .0
}

pub fn get_lookup_table_address(authority: &Pubkey, recent_slot: u64) -> (Pubkey, u8) {
    derive_lookup_table_address(authority, recent_slot)
}

pub fn get_ata(owner: &Pubkey, mint: &Pubkey, token_program: &Pubkey) -> Pubkey {
    get_associated_token_address_with_program_id(owner, mint, token_program)
}
