mod common;

use boring_vault_client::components::{
    asset_value_in_base, base_value_in_asset, check_price_freshness,
};
use common::price_message;

// --- direct feeds ---

#[test]
fn converts_sol_to_usdc() {
    // 1 SOL (9 dec) at 150.00000000 (exp -8) into a 6-decimal base:
    // 1e9 * 15_000_000_000 * 1e6 / (1e8 * 1e9) = 150_000_000
    let price = price_message(15_000_000_000, -8, 0);
    assert_eq!(asset_value_in_base(1_000_000_000, 9, 6, &price, false).unwrap(), 150_000_000);
}

#[test]
fn positive_exponent_scales_up() {
    // price 3 * 10^2 = 300 per unit
    let price = price_message(3, 2, 0);
    assert_eq!(asset_value_in_base(1, 0, 0, &price, false).unwrap(), 300);
}

#[test]
fn zero_amount_is_zero() {
    let price = price_message(15_000_000_000, -8, 0);
    assert_eq!(asset_value_in_base(0, 9, 6, &price, false).unwrap(), 0);
}

// --- inverse feeds ---

#[test]
fn inverse_feed_divides_by_price() {
    // feed says 1 base = 2.0 asset; 2 asset (9 dec) -> 1 base (9 dec)
    // 2e9 * 1e8 * 1e9 / (2e8 * 1e9) = 1e9
    let price = price_message(200_000_000, -8, 0);
    assert_eq!(asset_value_in_base(2_000_000_000, 9, 9, &price, true).unwrap(), 1_000_000_000);
}

#[test]
fn base_to_asset_reverses_direct_feed() {
    // 150 USDC back into SOL at 150: 150e6 * 1e8 * 1e9 / (1.5e10 * 1e6) = 1e9
    let price = price_message(15_000_000_000, -8, 0);
    assert_eq!(base_value_in_asset(150_000_000, 9, 6, &price, false).unwrap(), 1_000_000_000);
}

// --- bad prices ---

#[test]
fn zero_price_is_rejected() {
    let price = price_message(0, -8, 0);
    assert!(asset_value_in_base(1, 9, 6, &price, false).is_err());
}

#[test]
fn negative_price_is_rejected() {
    let price = price_message(-5, -8, 0);
    assert!(asset_value_in_base(1, 9, 6, &price, false).is_err());
}

// --- freshness ---

#[test]
fn recent_price_is_fresh() {
    let price = price_message(1, 0, 950);
    assert!(check_price_freshness(&price, 1_000, 60).is_ok());
}

#[test]
fn age_equal_to_limit_is_fresh() {
    let price = price_message(1, 0, 940);
    assert!(check_price_freshness(&price, 1_000, 60).is_ok());
}

#[test]
fn old_price_is_stale() {
    // age = 1_000 - 900 = 100 > 60
    let price = price_message(1, 0, 900);
    assert!(check_price_freshness(&price, 1_000, 60).is_err());
}

#[test]
fn future_price_is_accepted() {
    let price = price_message(1, 0, 1_100);
    assert!(check_price_freshness(&price, 1_000, 0).is_ok());
}
