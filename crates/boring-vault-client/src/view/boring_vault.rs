use anchor_lang::prelude::*;
use anchor_lang::AccountDeserialize;
use eyre::{eyre, Result};
use pyth_solana_receiver_sdk::price_update::PriceUpdateV2;
use solana_sdk::{
    signature::{Keypair, Signer},
    transaction::Transaction,
};

use crate::{
    instructions::create_view_cpi_digest_instruction,
    manage::ExternalInstruction,
    states::{AssetData, BoringVault, CpiDigest, Operators, ProgramConfig},
    transport::Transport,
    utils::{
        get_asset_data_pda, get_cpi_digest_pda, get_program_config_pda, get_vault_state_pda,
    },
};

fn decode<T: AccountDeserialize>(data: &[u8], address: &Pubkey) -> Result<T> {
    T::try_deserialize(&mut &data[..]).map_err(|e| eyre!("Failed to decode account {}: {}", address, e))
}

/// Reads and decodes an Anchor account, `None` if it does not exist.
pub fn fetch_account<T: AccountDeserialize, R: Transport + ?Sized>(
    transport: &R,
    address: &Pubkey,
) -> Result<Option<T>> {
    match transport.get_account(address)? {
        Some(account) => decode(&account.data, address).map(Some),
        None => Ok(None),
    }
}

pub fn get_program_config<R: Transport + ?Sized>(transport: &R) -> Result<Option<ProgramConfig>> {
    fetch_account(transport, &get_program_config_pda())
}

/// Id the next deployed vault receives. 0 before the program is initialized.
pub fn next_vault_id<R: Transport + ?Sized>(transport: &R) -> Result<u64> {
    Ok(get_program_config(transport)?
        .map(|config| config.vault_count)
        .unwrap_or(0))
}

pub fn get_vault_state<R: Transport + ?Sized>(transport: &R, vault_id: u64) -> Result<BoringVault> {
    fetch_account(transport, &get_vault_state_pda(vault_id))?
        .ok_or_else(|| eyre!("Vault {} does not exist", vault_id))
}

pub fn get_asset_data<R: Transport + ?Sized>(
    transport: &R,
    vault_id: u64,
    mint: &Pubkey,
) -> Result<AssetData> {
    let vault_state = get_vault_state_pda(vault_id);
    fetch_account(transport, &get_asset_data_pda(&vault_state, mint))?
        .ok_or_else(|| eyre!("Vault {} has no asset data for {}", vault_id, mint))
}

/// Operators stored for a whitelisted digest, `None` if it is not
/// whitelisted.
pub fn get_cpi_digest_operators<R: Transport + ?Sized>(
    transport: &R,
    vault_id: u64,
    digest: &[u8; 32],
) -> Result<Option<Operators>> {
    let account: Option<CpiDigest> = fetch_account(transport, &get_cpi_digest_pda(vault_id, digest))?;
    Ok(account.map(|account| account.operators))
}

pub fn get_price_update<R: Transport + ?Sized>(transport: &R, price_feed: &Pubkey) -> Result<PriceUpdateV2> {
    fetch_account(transport, price_feed)?.ok_or_else(|| eyre!("Price feed {} does not exist", price_feed))
}

/// Asks the program for the digest of `eix` by simulating `view_cpi_digest`
/// with `signer` as fee payer.
pub fn view_cpi_digest<R, E>(transport: &R, signer: &Keypair, eix: &E) -> Result<[u8; 32]>
where
    R: Transport + ?Sized,
    E: ExternalInstruction + ?Sized,
{
    let instruction = create_view_cpi_digest_instruction(eix);
    let transaction = Transaction::new_signed_with_payer(
        &[instruction],
        Some(&signer.pubkey()),
        &[signer],
        transport.get_latest_blockhash()?,
    );

    let data = transport
        .simulate_return_data(&transaction)?
        .ok_or_else(|| eyre!("view_cpi_digest returned no data"))?;

    data.get(..32)
        .and_then(|bytes| <[u8; 32]>::try_from(bytes).ok())
        .ok_or_else(|| eyre!("view_cpi_digest returned {} bytes, expected 32", data.len()))
}
