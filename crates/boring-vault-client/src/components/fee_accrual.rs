use crate::{
    states::TellerState,
    utils::{mul_div, to_u64, BoringVaultError, BPS_SCALE, SECONDS_PER_YEAR, U256},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FeeAccrual {
    pub platform_fee: u64,
    pub performance_fee: u64,
}

impl FeeAccrual {
    pub fn total(&self) -> Result<u64, BoringVaultError> {
        self.platform_fee
            .checked_add(self.performance_fee)
            .ok_or(BoringVaultError::Overflow)
    }
}

/// Fees, in base asset units, that an exchange-rate update would accrue.
///
/// The platform fee is charged pro rata over the time since the last update
/// on the smaller of the last and current share supply, valued at the
/// smaller of the old and new rate. The performance fee is charged only on
/// the portion of the new rate above the high-water mark.
///
/// # Arguments
/// * `teller` - Current teller state of the vault
/// * `new_exchange_rate` - Rate the provider is about to publish
/// * `current_total_shares` - Share mint supply now
/// * `now` - Unix timestamp of the update
pub fn calculate_fees_owed(
    teller: &TellerState,
    new_exchange_rate: u64,
    current_total_shares: u64,
    now: u64,
) -> Result<FeeAccrual, BoringVaultError> {
    let one_share = 10u64
        .checked_pow(teller.decimals as u32)
        .ok_or(BoringVaultError::OverflowInMul)?;

    let shares = teller.total_shares_last_update.min(current_total_shares);
    let rate = teller.exchange_rate.min(new_exchange_rate);
    let assets = mul_div(shares, rate, one_share)?;

    // assets * platform_fee_bps * elapsed / (10_000 * SECONDS_PER_YEAR)
    let elapsed = now.saturating_sub(teller.last_update_timestamp);
    let platform_fee = to_u64(
        U256::from(assets) * U256::from(teller.platform_fee_bps) * U256::from(elapsed)
            / (U256::from(BPS_SCALE) * U256::from(SECONDS_PER_YEAR)),
    )?;

    let performance_fee = if new_exchange_rate > teller.exchange_rate_high_water_mark {
        let gain = mul_div(
            new_exchange_rate - teller.exchange_rate_high_water_mark,
            shares,
            one_share,
        )?;
        mul_div(gain, teller.performance_fee_bps as u64, BPS_SCALE as u64)?
    } else {
        0
    };

    Ok(FeeAccrual {
        platform_fee,
        performance_fee,
    })
}

/// Whether the program would accept `new_exchange_rate` without pausing
/// the vault: the change stays within the configured bounds and the minimum
/// delay since the last update has passed.
pub fn is_exchange_rate_update_within_bounds(
    teller: &TellerState,
    new_exchange_rate: u64,
    now: u64,
) -> Result<bool, BoringVaultError> {
    let upper = mul_div(
        teller.exchange_rate,
        teller.allowed_exchange_rate_change_upper_bound as u64,
        BPS_SCALE as u64,
    )?;
    let lower = mul_div(
        teller.exchange_rate,
        teller.allowed_exchange_rate_change_lower_bound as u64,
        BPS_SCALE as u64,
    )?;
    let earliest = teller
        .last_update_timestamp
        .saturating_add(teller.minimum_update_delay_in_seconds as u64);

    Ok(new_exchange_rate <= upper && new_exchange_rate >= lower && now >= earliest)
}
