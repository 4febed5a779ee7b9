use pyth_solana_receiver_sdk::price_update::PriceFeedMessage;

use crate::utils::{pow10, to_u64, BoringVaultError, U256};

/// Checks that a price was published no more than `max_staleness` seconds
/// before `now`. Prices stamped in the future are accepted.
pub fn check_price_freshness(
    message: &PriceFeedMessage,
    now: i64,
    max_staleness: u64,
) -> Result<(), BoringVaultError> {
    let age = now.saturating_sub(message.publish_time);
    if age > 0 && age as u64 > max_staleness {
        return Err(BoringVaultError::OracleDataTooOld);
    }

    Ok(())
}

/// Converts an asset amount into base asset units.
///
/// The feed quotes one asset in base asset terms (`price * 10^exponent`).
/// With `inverse` set the feed quotes one base asset in asset terms instead.
///
/// # Arguments
/// * `amount` - Amount of the asset in its smallest units
/// * `asset_decimals` - Decimals of the asset mint
/// * `base_decimals` - Decimals of the vault's base asset
/// * `price` - Feed message for the pair
/// * `inverse` - Whether the feed is quoted the other way around
///
/// # Returns
/// * `Result<u64, BoringVaultError>` - Value in base asset smallest units, rounded down
pub fn asset_value_in_base(
    amount: u64,
    asset_decimals: u8,
    base_decimals: u8,
    price: &PriceFeedMessage,
    inverse: bool,
) -> Result<u64, BoringVaultError> {
    if price.price <= 0 {
        return Err(BoringVaultError::InvalidPriceFeed);
    }
    let raw_price = U256::from(price.price as u64);
    let exp = pow10(price.exponent.unsigned_abs())?;

    // real_price = raw_price * 10^exponent
    //   direct:  value = amount * real_price * 10^base / 10^asset
    //   inverse: value = amount / real_price * 10^base / 10^asset
    let (price_num, price_den) = match (inverse, price.exponent < 0) {
        (false, true) => (raw_price, exp),
        (false, false) => (mul(raw_price, exp)?, U256::one()),
        (true, true) => (exp, raw_price),
        (true, false) => (U256::one(), mul(raw_price, exp)?),
    };

    let numerator = mul(mul(U256::from(amount), price_num)?, pow10(base_decimals as u32)?)?;
    let denominator = mul(price_den, pow10(asset_decimals as u32)?)?;

    if denominator.is_zero() {
        return Err(BoringVaultError::OverflowInDiv);
    }
    to_u64(numerator / denominator)
}

/// Converts base asset units back into an asset amount, rounding down.
pub fn base_value_in_asset(
    amount: u64,
    asset_decimals: u8,
    base_decimals: u8,
    price: &PriceFeedMessage,
    inverse: bool,
) -> Result<u64, BoringVaultError> {
    asset_value_in_base(amount, base_decimals, asset_decimals, price, !inverse)
}

fn mul(a: U256, b: U256) -> Result<U256, BoringVaultError> {
    a.checked_mul(b).ok_or(BoringVaultError::OverflowInMul)
}
