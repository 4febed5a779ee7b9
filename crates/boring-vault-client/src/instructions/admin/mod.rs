pub use authority::*;
pub use cpi_digest::*;
pub use deploy::*;
pub use initialize::*;
pub use pause::*;
pub use update_asset_data::*;
pub use vault_config::*;

pub mod authority;
pub mod cpi_digest;
pub mod deploy;
pub mod initialize;
pub mod pause;
pub mod update_asset_data;
pub mod vault_config;

use anchor_lang::prelude::Pubkey;
use anchor_lang::solana_program::instruction::AccountMeta;

use crate::utils::get_vault_state_pda;

/// Accounts shared by the vault-authority setters: the signer and the
/// vault state it updates.
pub(crate) fn authority_accounts(signer: &Pubkey, vault_id: u64) -> Vec<AccountMeta> {
    vec![
        AccountMeta::new_readonly(*signer, true),
        AccountMeta::new(get_vault_state_pda(vault_id), false),
    ]
}
