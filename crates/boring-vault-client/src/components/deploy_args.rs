use anchor_lang::prelude::Pubkey;

use crate::{
    components::{check_exchange_rate_bounds, check_fees, check_vault_name},
    instructions::DeployArgs,
    utils::BoringVaultError,
};

/// Fills in deploy defaults and validates the result.
///
/// Defaults: exchange rate provider, payout address and strategist fall back
/// to `authority`; both fees fall back to 0; the withdraw authority falls back
/// to the zero key, which leaves withdrawals permissionless.
///
/// # Returns
/// * `Result<DeployArgs, BoringVaultError>` - Arguments ready to encode
pub fn resolve_deploy_args(
    authority: Pubkey,
    name: String,
    symbol: String,
    exchange_rate_provider: Option<Pubkey>,
    exchange_rate: u64,
    payout_address: Option<Pubkey>,
    allowed_exchange_rate_change_upper_bound: u16,
    allowed_exchange_rate_change_lower_bound: u16,
    minimum_update_delay_in_seconds: u32,
    platform_fee_bps: Option<u16>,
    performance_fee_bps: Option<u16>,
    withdraw_authority: Option<Pubkey>,
    strategist: Option<Pubkey>,
) -> std::result::Result<DeployArgs, BoringVaultError> {
    if exchange_rate == 0 {
        return Err(BoringVaultError::ZeroExchangeRate);
    }
    check_vault_name(&name, &symbol)?;
    check_exchange_rate_bounds(
        allowed_exchange_rate_change_upper_bound,
        allowed_exchange_rate_change_lower_bound,
    )?;

    let platform_fee_bps = platform_fee_bps.unwrap_or(0);
    let performance_fee_bps = performance_fee_bps.unwrap_or(0);
    check_fees(platform_fee_bps, performance_fee_bps)?;

    Ok(DeployArgs {
        authority,
        name,
        symbol,
        exchange_rate_provider: exchange_rate_provider.unwrap_or(authority),
        exchange_rate,
        payout_address: payout_address.unwrap_or(authority),
        allowed_exchange_rate_change_upper_bound,
        allowed_exchange_rate_change_lower_bound,
        minimum_update_delay_in_seconds,
        platform_fee_bps,
        performance_fee_bps,
        withdraw_authority: withdraw_authority.unwrap_or_default(),
        strategist: strategist.unwrap_or(authority),
    })
}
