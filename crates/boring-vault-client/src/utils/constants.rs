use anchor_lang::{prelude::*, pubkey};

// Boring vault PDA seeds
pub const CONFIG_SEED: &[u8] = b"config";
pub const VAULT_STATE_SEED: &[u8] = b"boring-vault-state";
pub const VAULT_SEED: &[u8] = b"boring-vault";
pub const SHARE_TOKEN_SEED: &[u8] = b"share-token";
pub const ASSET_DATA_SEED: &[u8] = b"asset-data";
pub const CPI_DIGEST_SEED: &[u8] = b"cpi-digest";

// Kamino PDA seeds
pub const USER_METADATA_SEED: &[u8] = b"user_meta";
pub const LENDING_MARKET_AUTHORITY_SEED: &[u8] = b"lma";
pub const FARM_USER_STATE_SEED: &[u8] = b"user";

/// Mint key the vault program uses for native SOL deposits.
pub const NATIVE: Pubkey = Pubkey::new_from_array([0; 32]);
pub const WSOL_MINT: Pubkey = pubkey!("So11111111111111111111111111111111111111112");

pub const BPS_SCALE: u16 = 10_000;
pub const MAX_PLATFORM_FEE_BPS: u16 = 2_000;
pub const MAX_PERFORMANCE_FEE_BPS: u16 = 5_000;
pub const MAX_SHARE_PREMIUM_BPS: u16 = 1_000;

pub const MAX_NAME_LEN: usize = 32;
pub const MAX_SYMBOL_LEN: usize = 10;

/// Largest serialized transaction a validator accepts.
pub const MAX_TRANSACTION_SIZE: usize = 1232;

// Kamino
pub const KAMINO_LEND_PROGRAM_ID: Pubkey = pubkey!("KLend2g3cP87fffoy8q1mQqGKjrxjC8boSyAYavgmjD");
pub const KAMINO_FARMS_PROGRAM_ID: Pubkey = pubkey!("FarmsPZpWu9i7Kky8tPN37rs2TpmMrAZrC7S7vJa91Hr");
pub const SCOPE_PROGRAM_ID: Pubkey = pubkey!("HFn8GnPADiny6XqUoWE8uRPPxb29ikn4yTuPa9MF2fWJ");

// Jito stake pool
pub const STAKE_POOL_PROGRAM_ID: Pubkey = pubkey!("SPoo1Ku8WFXoNDMHPsrGSTSG1Y47rzgn41SLUNakuHy");
pub const JITO_STAKE_POOL: Pubkey = pubkey!("Jito4APyf642JPZPx3hGc6WWJ8zPKtRbRs4P815Awbb");
pub const JITO_STAKE_POOL_WITHDRAW_AUTHORITY: Pubkey =
    pubkey!("6iQKfEyhr3bZMotVkW6beNZz5CPAkiwvgV2CTje9pVSS");
pub const JITO_RESERVE_STAKE_ACCOUNT: Pubkey = pubkey!("BgKUXdS29YcHCFrPm5M8oLHiTzZaMDjsebggjoaQ6KFL");
pub const JITO_FEE_ACCOUNT: Pubkey = pubkey!("feeeFLLsam6xZJFc6UQFrHqkvVt4jfmVvi2BRLkUZ4i");
pub const JITO_SOL_MINT: Pubkey = pubkey!("J1toso1uCk3RLmjorhTtrVwY9HJ7X8V9yYac6Y7kGCPn");
