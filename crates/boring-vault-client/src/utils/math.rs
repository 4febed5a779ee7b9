#![allow(clippy::assign_op_pattern, clippy::manual_div_ceil, clippy::ptr_offset_with_cast)]

use uint::construct_uint;

use crate::utils::BoringVaultError;

construct_uint! {
    pub struct U256(4);
}

pub const SECONDS_PER_YEAR: u64 = 31_536_000;

/// `a * b / c` rounded down, with a 256-bit intermediate.
pub fn mul_div(a: u64, b: u64, c: u64) -> Result<u64, BoringVaultError> {
    if c == 0 {
        return Err(BoringVaultError::OverflowInDiv);
    }
    to_u64(U256::from(a) * U256::from(b) / U256::from(c))
}

pub fn to_u64(value: U256) -> Result<u64, BoringVaultError> {
    if value > U256::from(u64::MAX) {
        return Err(BoringVaultError::OverflowInCast);
    }
    Ok(value.as_u64())
}

/// Returns 10^exp as U256, guarding against exponents past u128 range.
pub fn pow10(exp: u32) -> Result<U256, BoringVaultError> {
    if exp > 38 {
        return Err(BoringVaultError::OverflowInMul);
    }
    Ok(U256::from(10u128.pow(exp)))
}
