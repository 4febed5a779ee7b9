use crate::{
    states::{AssetData, BoringVault},
    utils::{
        BoringVaultError, BPS_SCALE, MAX_NAME_LEN, MAX_PERFORMANCE_FEE_BPS,
        MAX_PLATFORM_FEE_BPS, MAX_SHARE_PREMIUM_BPS, MAX_SYMBOL_LEN,
    },
};

/// Checks both fee rates against the program's caps.
/// Returns `FeeExceeds` if either is above its maximum.
pub fn check_fees(platform_fee_bps: u16, performance_fee_bps: u16) -> Result<(), BoringVaultError> {
    if platform_fee_bps > MAX_PLATFORM_FEE_BPS || performance_fee_bps > MAX_PERFORMANCE_FEE_BPS {
        return Err(BoringVaultError::FeeExceeds);
    }

    Ok(())
}

/// Bounds are relative to 10_000: the upper bound may not sit below par and
/// the lower bound may not sit above it.
pub fn check_exchange_rate_bounds(upper_bound: u16, lower_bound: u16) -> Result<(), BoringVaultError> {
    if upper_bound < BPS_SCALE || lower_bound > BPS_SCALE {
        return Err(BoringVaultError::InvalidExchangeRateBounds);
    }

    Ok(())
}

pub fn check_amount(amount: u64) -> Result<(), BoringVaultError> {
    if amount == 0 {
        return Err(BoringVaultError::ZeroAmount);
    }

    Ok(())
}

pub fn check_distinct_sub_accounts(from: u8, to: u8) -> Result<(), BoringVaultError> {
    if from == to {
        return Err(BoringVaultError::SameSubAccount);
    }

    Ok(())
}

pub fn check_share_premium(share_premium_bps: u16) -> Result<(), BoringVaultError> {
    if share_premium_bps > MAX_SHARE_PREMIUM_BPS {
        return Err(BoringVaultError::PremiumExceeds);
    }

    Ok(())
}

/// Name and symbol become share-mint metadata and are length limited.
pub fn check_vault_name(name: &str, symbol: &str) -> Result<(), BoringVaultError> {
    if name.len() > MAX_NAME_LEN || symbol.len() > MAX_SYMBOL_LEN {
        return Err(BoringVaultError::NameTooLong);
    }

    Ok(())
}

/// Rejects deposits the program would refuse anyway.
pub fn check_deposit_allowed(vault: &BoringVault, asset_data: &AssetData) -> Result<(), BoringVaultError> {
    if vault.config.paused {
        return Err(BoringVaultError::VaultPaused);
    }
    if !asset_data.allow_deposits {
        return Err(BoringVaultError::DepositsNotAllowed);
    }

    Ok(())
}

pub fn check_withdraw_allowed(vault: &BoringVault, asset_data: &AssetData) -> Result<(), BoringVaultError> {
    if vault.config.paused {
        return Err(BoringVaultError::VaultPaused);
    }
    if !asset_data.allow_withdrawals {
        return Err(BoringVaultError::WithdrawalsNotAllowed);
    }

    Ok(())
}
