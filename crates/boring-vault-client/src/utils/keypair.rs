use std::path::PathBuf;

use eyre::{eyre, Result};
use solana_sdk::signature::{read_keypair_file, Keypair};

pub const DEFAULT_WALLET_PATH: &str = "~/.config/solana/id.json";

/// Reads a Solana CLI keypair file (a JSON array of 64 bytes).
pub fn read_keypair(path: &str) -> Result<Keypair> {
    let path = expand_home(path);
    read_keypair_file(&path)
        .map_err(|e| eyre!("Failed to read keypair {}: {}", path.display(), e))
}

/// Reads the keypair if the file exists, `None` otherwise.
pub fn read_optional_keypair(path: &str) -> Result<Option<Keypair>> {
    if !expand_home(path).exists() {
        return Ok(None);
    }
    read_keypair(path).map(Some)
}

/// Builds a keypair from raw 64-byte secret key material.
#[allow(deprecated)]
pub fn keypair_from_bytes(bytes: &[u8]) -> Result<Keypair> {
    Keypair::from_bytes(bytes).map_err(|e| eyre!("Invalid keypair bytes: {}", e))
}

fn expand_home(path: &str) -> PathBuf {
    match path.strip_prefix("~/") {
        Some(rest) => std::env::var_os("HOME")
            .map(|home| PathBuf::from(home).join(rest))
            .unwrap_or_else(|| PathBuf::from(path)),
        None => PathBuf::from(path),
    }
}
