use anchor_lang::prelude::Pubkey;
use anchor_lang::AccountDeserialize;
use anchor_spl::token_interface::{Mint, TokenAccount};
use anchor_spl::{token, token_2022};
use eyre::{eyre, Result};
use solana_sdk::account::Account;

use crate::{
    config::VaultConfig,
    transport::Transport,
    utils::{get_ata, get_vault_pda, WSOL_MINT},
};

fn check_token_owner(account: &Account, address: &Pubkey) -> Result<()> {
    if account.owner != token::ID && account.owner != token_2022::ID {
        return Err(eyre!(
            "{} is owned by {}, not a token program",
            address,
            account.owner
        ));
    }
    Ok(())
}

/// Decodes an SPL Token or Token-2022 account, extensions included.
pub fn decode_token_account(account: &Account, address: &Pubkey) -> Result<TokenAccount> {
    check_token_owner(account, address)?;
    TokenAccount::try_deserialize(&mut account.data.as_slice())
        .map_err(|e| eyre!("{} is not a token account: {}", address, e))
}

pub fn decode_mint(account: &Account, address: &Pubkey) -> Result<Mint> {
    check_token_owner(account, address)?;
    Mint::try_deserialize(&mut account.data.as_slice())
        .map_err(|e| eyre!("{} is not a mint: {}", address, e))
}

/// Token amount held by `token_account`, 0 if the account does not exist.
pub fn get_token_balance<R: Transport + ?Sized>(transport: &R, token_account: &Pubkey) -> Result<u64> {
    match transport.get_account(token_account)? {
        Some(account) => Ok(decode_token_account(&account, token_account)?.amount),
        None => Ok(0),
    }
}

pub fn get_mint_decimals<R: Transport + ?Sized>(transport: &R, mint: &Pubkey) -> Result<u8> {
    let account = transport
        .get_account(mint)?
        .ok_or_else(|| eyre!("Mint {} does not exist", mint))?;

    Ok(decode_mint(&account, mint)?.decimals)
}

/// Current supply of `mint`.
pub fn get_mint_supply<R: Transport + ?Sized>(transport: &R, mint: &Pubkey) -> Result<u64> {
    let account = transport
        .get_account(mint)?
        .ok_or_else(|| eyre!("Mint {} does not exist", mint))?;

    Ok(decode_mint(&account, mint)?.supply)
}

/// Token program that owns `mint`.
pub fn get_token_program<R: Transport + ?Sized>(transport: &R, mint: &Pubkey) -> Result<Pubkey> {
    let account = transport
        .get_account(mint)?
        .ok_or_else(|| eyre!("Mint {} does not exist", mint))?;
    check_token_owner(&account, mint)?;

    Ok(account.owner)
}

/// Sums each configured asset across every configured sub-account. Native
/// SOL held by the sub-accounts themselves counts towards wSOL, which gets an
/// entry of its own when it is not a configured asset.
pub fn get_sub_account_token_totals<R: Transport + ?Sized>(
    transport: &R,
    vault_config: &VaultConfig,
) -> Result<Vec<(Pubkey, u64)>> {
    let mut totals = Vec::with_capacity(vault_config.assets.len() + 1);

    for asset in &vault_config.assets {
        let mut total: u64 = 0;
        for sub_account in &vault_config.sub_accounts {
            let owner = get_vault_pda(vault_config.vault_id, *sub_account);
            let ata = get_ata(&owner, &asset.mint, &asset.token_program());
            total = total
                .checked_add(get_token_balance(transport, &ata)?)
                .ok_or_else(|| eyre!("Balance overflow for {}", asset.mint))?;
        }
        totals.push((asset.mint, total));
    }

    let mut lamports: u64 = 0;
    for sub_account in &vault_config.sub_accounts {
        let sub_account_pda = get_vault_pda(vault_config.vault_id, *sub_account);
        if let Some(account) = transport.get_account(&sub_account_pda)? {
            lamports = lamports
                .checked_add(account.lamports)
                .ok_or_else(|| eyre!("Balance overflow for native SOL"))?;
        }
    }

    match totals.iter_mut().find(|(mint, _)| *mint == WSOL_MINT) {
        Some((_, total)) => {
            *total = total
                .checked_add(lamports)
                .ok_or_else(|| eyre!("Balance overflow for {}", WSOL_MINT))?;
        }
        None if lamports > 0 => totals.push((WSOL_MINT, lamports)),
        None => {}
    }

    Ok(totals)
}
