use crate::utils::{mul_div, BoringVaultError, BPS_SCALE};

/// Shares minted for a deposit worth `value_in_base` base asset units.
///
/// # Arguments
/// * `value_in_base` - Deposit value in base asset smallest units
/// * `exchange_rate` - Base asset per share, scaled by `10^base_decimals`
/// * `base_decimals` - Decimals of the base asset (and of the share mint)
/// * `share_premium_bps` - Premium withheld from the minted shares
///
/// # Returns
/// * `Result<u64, BoringVaultError>` - Shares minted, rounded down
pub fn preview_deposit(
    value_in_base: u64,
    exchange_rate: u64,
    base_decimals: u8,
    share_premium_bps: u16,
) -> Result<u64, BoringVaultError> {
    if exchange_rate == 0 {
        return Err(BoringVaultError::ZeroExchangeRate);
    }
    if share_premium_bps > BPS_SCALE {
        return Err(BoringVaultError::PremiumExceeds);
    }

    let one_share = 10u64
        .checked_pow(base_decimals as u32)
        .ok_or(BoringVaultError::OverflowInMul)?;
    let shares = mul_div(value_in_base, one_share, exchange_rate)?;

    // shares * (10_000 - premium) / 10_000
    mul_div(
        shares,
        (BPS_SCALE - share_premium_bps) as u64,
        BPS_SCALE as u64,
    )
}

/// Base asset value redeemed by burning `share_amount` shares, rounded down.
pub fn preview_withdraw(
    share_amount: u64,
    exchange_rate: u64,
    base_decimals: u8,
) -> Result<u64, BoringVaultError> {
    let one_share = 10u64
        .checked_pow(base_decimals as u32)
        .ok_or(BoringVaultError::OverflowInMul)?;

    mul_div(share_amount, exchange_rate, one_share)
}

/// Applies slippage tolerance to a previewed amount, giving the minimum the
/// caller is willing to receive.
pub fn apply_slippage(amount: u64, slippage_bps: u16) -> Result<u64, BoringVaultError> {
    if slippage_bps > BPS_SCALE {
        return Err(BoringVaultError::FeeExceeds);
    }

    mul_div(amount, (BPS_SCALE - slippage_bps) as u64, BPS_SCALE as u64)
}
