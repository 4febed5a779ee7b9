//! Digests of the standard strategies, computed locally so the matching
//! digest accounts can be created ahead of time.

use anchor_lang::prelude::Pubkey;
use eyre::{eyre, Result};

use crate::{
    components::digest_to_hex,
    config::KaminoConfig,
    manage::{ExternalInstruction, MintJitoSol, TransferSolBetweenSubAccounts},
};

fn pda_and_hex<E: ExternalInstruction>(eix: &E) -> Result<(Pubkey, String)> {
    let (pda, digest) = eix.digest_pda().map_err(|e| eyre!(e))?;
    Ok((pda, digest_to_hex(&digest)))
}

/// `liquidity_token_program` owns the lend reserve's liquidity mint.
pub fn get_lend_digest(
    kamino: &KaminoConfig,
    vault_id: u64,
    sub_account: u8,
    tag: u8,
    id: u8,
    liquidity_token_program: Pubkey,
) -> Result<(Pubkey, String)> {
    pda_and_hex(&kamino.lend_instruction(
        vault_id,
        sub_account,
        tag,
        id,
        0,
        liquidity_token_program,
    ))
}

/// The borrow digest pins the destination token account, so it differs
/// between SPL Token and Token-2022 mints.
pub fn get_borrow_digest(
    kamino: &KaminoConfig,
    vault_id: u64,
    sub_account: u8,
    tag: u8,
    id: u8,
    liquidity_token_program: Pubkey,
) -> Result<(Pubkey, String)> {
    pda_and_hex(&kamino.borrow_instruction(
        vault_id,
        sub_account,
        tag,
        id,
        0,
        liquidity_token_program,
    ))
}

pub fn get_jito_digest(vault_id: u64, sub_account: u8) -> Result<(Pubkey, String)> {
    pda_and_hex(&MintJitoSol {
        vault_id,
        sub_account,
        amount: 0,
    })
}

pub fn get_transfer_sol_digest(
    vault_id: u64,
    sub_account: u8,
    to_sub_account: u8,
) -> Result<(Pubkey, String)> {
    pda_and_hex(&TransferSolBetweenSubAccounts {
        vault_id,
        sub_account,
        to_sub_account,
        amount: 0,
    })
}
