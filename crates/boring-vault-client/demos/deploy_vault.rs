//! Deploys a wSOL-based vault with the local Solana CLI wallet as authority.
//!
//! cargo run --example deploy_vault

use boring_vault_client::{
    utils::{read_keypair, DEFAULT_WALLET_PATH, WSOL_MINT},
    BuilderConfig, MaybeSigner,
};
use solana_sdk::signature::Signer;

fn main() -> eyre::Result<()> {
    let wallet = read_keypair(DEFAULT_WALLET_PATH)?;
    let authority = wallet.pubkey();
    let mut builder = BuilderConfig::default().connect()?;

    let vault_id = builder.deploy(
        authority,
        MaybeSigner::Keypair(wallet.insecure_clone()),
        WSOL_MINT,
        "Boring SOL".to_string(),
        "bSOL".to_string(),
        None,
        1_000_000_000,
        None,
        10_050,
        9_950,
        3_600,
        Some(100),
        Some(1_000),
        None,
        None,
    )?;

    match builder.try_bundle_all(wallet) {
        Ok(signature) => println!("Deployed vault {}: {}", vault_id, signature),
        Err(e) => eprintln!("Deploy of vault {} failed: {:?}", vault_id, e),
    }

    Ok(())
}
