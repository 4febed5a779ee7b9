use std::path::PathBuf;

use eyre::Result;
use solana_client::rpc_client::RpcClient;
use solana_sdk::commitment_config::CommitmentConfig;

use crate::{builder::Builder, transport::Transport};

pub use json::*;
pub use kamino::*;
pub use vault::*;

pub mod json;
pub mod kamino;
pub mod vault;

pub const DEFAULT_RPC_URL: &str = "https://api.devnet.solana.com";
pub const DEFAULT_DATA_PATH: &str = "../data";
pub const DEFAULT_KAMINO_FILE: &str = "kamino.json";
pub const DEFAULT_VAULT_FILE: &str = "vaults.json";
pub const DEFAULT_LEND_PROFILE: &str = "jito";
pub const DEFAULT_BORROW_PROFILE: &str = "sol";

/// Where the builder connects and which strategy files it loads.
#[derive(Debug, Clone)]
pub struct BuilderConfig {
    pub rpc_url: String,
    pub data_path: String,
    pub kamino_file: String,
    pub vault_file: String,
    pub lend_profile: String,
    pub borrow_profile: String,
    pub commitment: CommitmentConfig,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            rpc_url: DEFAULT_RPC_URL.to_string(),
            data_path: DEFAULT_DATA_PATH.to_string(),
            kamino_file: DEFAULT_KAMINO_FILE.to_string(),
            vault_file: DEFAULT_VAULT_FILE.to_string(),
            lend_profile: DEFAULT_LEND_PROFILE.to_string(),
            borrow_profile: DEFAULT_BORROW_PROFILE.to_string(),
            commitment: CommitmentConfig::confirmed(),
        }
    }
}

impl BuilderConfig {
    pub fn with_rpc_url(mut self, rpc_url: impl Into<String>) -> Self {
        self.rpc_url = rpc_url.into();
        self
    }

    pub fn with_data_path(mut self, data_path: impl Into<String>) -> Self {
        self.data_path = data_path.into();
        self
    }

    pub fn with_kamino_file(mut self, kamino_file: impl Into<String>) -> Self {
        self.kamino_file = kamino_file.into();
        self
    }

    pub fn with_vault_file(mut self, vault_file: impl Into<String>) -> Self {
        self.vault_file = vault_file.into();
        self
    }

    pub fn with_lend_profile(mut self, lend_profile: impl Into<String>) -> Self {
        self.lend_profile = lend_profile.into();
        self
    }

    pub fn with_borrow_profile(mut self, borrow_profile: impl Into<String>) -> Self {
        self.borrow_profile = borrow_profile.into();
        self
    }

    pub fn with_commitment(mut self, commitment: CommitmentConfig) -> Self {
        self.commitment = commitment;
        self
    }

    pub fn kamino_path(&self) -> PathBuf {
        PathBuf::from(&self.data_path).join(&self.kamino_file)
    }

    pub fn vault_path(&self) -> PathBuf {
        PathBuf::from(&self.data_path).join(&self.vault_file)
    }

    /// Loads the strategy files and wraps `transport` in a builder. Missing
    /// files leave the matching config unset.
    pub fn build<T: Transport>(self, transport: T) -> Result<Builder<T>> {
        let kamino_config =
            KaminoConfig::load(&self.kamino_path(), &self.lend_profile, &self.borrow_profile)?;
        let vault_config = VaultConfig::load(&self.vault_path())?;

        Ok(Builder::new(transport)
            .with_kamino_config(kamino_config)
            .with_vault_config(vault_config))
    }

    /// Builds against an `RpcClient` for `rpc_url`.
    pub fn connect(self) -> Result<Builder<RpcClient>> {
        let client = RpcClient::new_with_commitment(self.rpc_url.clone(), self.commitment);
        self.build(client)
    }
}
