use anchor_lang::prelude::Pubkey;
use anchor_lang::AccountDeserialize;
use eyre::{eyre, Result};

use crate::{
    states::{Obligation, Reserve},
    transport::Transport,
    utils::{get_vanilla_obligation_pda, get_vault_pda, KAMINO_LEND_PROGRAM_ID},
};

fn fetch_kamino_account<T: AccountDeserialize, R: Transport + ?Sized>(
    transport: &R,
    address: &Pubkey,
) -> Result<Option<T>> {
    let Some(account) = transport.get_account(address)? else {
        return Ok(None);
    };
    if account.owner != KAMINO_LEND_PROGRAM_ID {
        return Err(eyre!("{} is not owned by Kamino lend ({})", address, account.owner));
    }

    T::try_deserialize(&mut account.data.as_slice())
        .map(Some)
        .map_err(|e| eyre!("Failed to decode Kamino account {}: {}", address, e))
}

pub fn get_reserve<R: Transport + ?Sized>(transport: &R, reserve: &Pubkey) -> Result<Reserve> {
    fetch_kamino_account(transport, reserve)?
        .ok_or_else(|| eyre!("Reserve {} does not exist", reserve))
}

pub fn get_obligation<R: Transport + ?Sized>(transport: &R, obligation: &Pubkey) -> Result<Obligation> {
    fetch_kamino_account(transport, obligation)?
        .ok_or_else(|| eyre!("Obligation {} does not exist", obligation))
}

/// The sub-account's vanilla obligation `(tag, id)` in `lending_market`,
/// `None` before `init_obligation` lands.
pub fn get_sub_account_obligation<R: Transport + ?Sized>(
    transport: &R,
    vault_id: u64,
    sub_account: u8,
    lending_market: &Pubkey,
    tag: u8,
    id: u8,
) -> Result<Option<Obligation>> {
    let owner = get_vault_pda(vault_id, sub_account);
    let obligation = get_vanilla_obligation_pda(tag, id, &owner, lending_market);
    fetch_kamino_account(transport, &obligation)
}
