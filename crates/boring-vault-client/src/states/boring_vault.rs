use anchor_lang::prelude::*;

#[account]
#[derive(Debug, Default)]
pub struct BoringVault {
    pub config: VaultState,
    pub teller: TellerState,
    pub manager: ManagerState,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default)]
pub struct VaultState {
    pub vault_id: u64,
    pub authority: Pubkey,
    pub pending_authority: Pubkey,
    pub paused: bool,
    pub share_mint: Pubkey,
    pub deposit_sub_account: u8,
    pub withdraw_sub_account: u8,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default)]
pub struct TellerState {
    pub base_asset: Pubkey,
    pub decimals: u8,
    pub exchange_rate_provider: Pubkey,
    /// Base asset per share, scaled by the base asset decimals.
    pub exchange_rate: u64,
    pub exchange_rate_high_water_mark: u64,
    pub fees_owed_in_base_asset: u64,
    pub total_shares_last_update: u64,
    pub last_update_timestamp: u64,
    pub payout_address: Pubkey,
    pub allowed_exchange_rate_change_upper_bound: u16,
    pub allowed_exchange_rate_change_lower_bound: u16,
    pub minimum_update_delay_in_seconds: u32,
    pub platform_fee_bps: u16,
    pub performance_fee_bps: u16,
    pub withdraw_authority: Pubkey,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default)]
pub struct ManagerState {
    pub strategist: Pubkey,
}
