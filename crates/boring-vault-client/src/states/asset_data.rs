use anchor_lang::prelude::*;

/// Per-asset deposit/withdraw settings of a vault.
#[account]
#[derive(Debug, Default, PartialEq, Eq)]
pub struct AssetData {
    pub allow_deposits: bool,
    pub allow_withdrawals: bool,
    pub share_premium_bps: u16,
    pub is_pegged_to_base_asset: bool,
    pub price_feed: Pubkey,
    pub inverse_price_feed: bool,
    pub max_staleness: u64,
    pub min_samples: u32,
}
