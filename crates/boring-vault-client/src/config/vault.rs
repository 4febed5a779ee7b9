use std::path::Path;

use anchor_lang::prelude::Pubkey;
use anchor_spl::{token, token_2022};
use eyre::Result;
use serde::Deserialize;

use crate::config::{deserialize_pubkey, load_json};

#[derive(Debug, Deserialize, Clone)]
pub struct VaultAssetConfig {
    #[serde(deserialize_with = "deserialize_pubkey")]
    pub mint: Pubkey,
    pub decimals: u8,
    pub is_token_2022: bool,
}

impl VaultAssetConfig {
    pub fn token_program(&self) -> Pubkey {
        if self.is_token_2022 {
            token_2022::ID
        } else {
            token::ID
        }
    }
}

/// A deployed vault, its sub-accounts in use and the assets it holds.
#[derive(Debug, Deserialize, Clone)]
pub struct VaultConfig {
    pub vault_id: u64,
    pub sub_accounts: Vec<u8>,
    pub assets: Vec<VaultAssetConfig>,
}

impl VaultConfig {
    pub fn load(path: &Path) -> Result<Option<Self>> {
        load_json(path)
    }
}
