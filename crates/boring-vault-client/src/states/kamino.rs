use anchor_lang::prelude::*;

use crate::manage::FARM_MODE_COLLATERAL;

// Kamino keeps these as zero-copy accounts with explicit padding, so their
// bytes read the same as a sequential borsh layout. Only the leading fields
// are declared; everything after them is left unread.
macro_rules! kamino_account {
    ($name:ident, $discriminator:expr) => {
        impl $name {
            pub const DISCRIMINATOR: [u8; 8] = $discriminator;
        }

        impl AccountDeserialize for $name {
            fn try_deserialize(buf: &mut &[u8]) -> anchor_lang::Result<Self> {
                if !buf.starts_with(&Self::DISCRIMINATOR) {
                    return Err(ErrorCode::AccountDiscriminatorMismatch.into());
                }
                Self::try_deserialize_unchecked(buf)
            }

            fn try_deserialize_unchecked(buf: &mut &[u8]) -> anchor_lang::Result<Self> {
                let mut data = buf.get(8..).ok_or(ErrorCode::AccountDidNotDeserialize)?;
                AnchorDeserialize::deserialize(&mut data)
                    .map_err(|_| ErrorCode::AccountDidNotDeserialize.into())
            }
        }
    };
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LastUpdate {
    pub slot: u64,
    pub stale: u8,
    pub price_status: u8,
    pub placeholder: [u8; 6],
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BigFractionBytes {
    pub value: [u64; 4],
    pub padding: [u64; 2],
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct ReserveLiquidity {
    pub mint_pubkey: Pubkey,
    pub supply_vault: Pubkey,
    pub fee_vault: Pubkey,
    pub available_amount: u64,
    pub borrowed_amount_sf: u128,
    pub market_price_sf: u128,
    pub market_price_last_updated_ts: u64,
    pub mint_decimals: u64,
    pub deposit_limit_crossed_timestamp: u64,
    pub borrow_limit_crossed_timestamp: u64,
    pub cumulative_borrow_rate_bsf: BigFractionBytes,
    pub accumulated_protocol_fees_sf: u128,
    pub accumulated_referrer_fees_sf: u128,
    pub pending_referrer_fees_sf: u128,
    pub absolute_referral_rate_sf: u128,
    pub token_program: Pubkey,
    pub padding2: [u64; 51],
    pub padding3: [u128; 32],
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct ReserveCollateral {
    pub mint_pubkey: Pubkey,
    pub mint_total_supply: u64,
    pub supply_vault: Pubkey,
    pub padding1: [u128; 32],
    pub padding2: [u128; 32],
}

/// Leading part of a Kamino lending reserve: its market, farms, liquidity
/// and collateral. The reserve config that follows is not decoded.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct Reserve {
    pub version: u64,
    pub last_update: LastUpdate,
    pub lending_market: Pubkey,
    pub farm_collateral: Pubkey,
    pub farm_debt: Pubkey,
    pub liquidity: ReserveLiquidity,
    pub reserve_liquidity_padding: [u64; 150],
    pub collateral: ReserveCollateral,
}

kamino_account!(Reserve, [43, 242, 204, 202, 26, 247, 59, 127]);

impl Reserve {
    pub fn is_stale(&self) -> bool {
        self.last_update.stale != 0
    }

    /// Farm state for `FARM_MODE_COLLATERAL` or `FARM_MODE_DEBT`, `None` when
    /// the reserve has none.
    pub fn farm(&self, mode: u8) -> Option<Pubkey> {
        let farm = if mode == FARM_MODE_COLLATERAL {
            self.farm_collateral
        } else {
            self.farm_debt
        };
        (farm != Pubkey::default()).then_some(farm)
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ObligationCollateral {
    pub deposit_reserve: Pubkey,
    pub deposited_amount: u64,
    pub market_value_sf: u128,
    pub borrowed_amount_against_this_collateral_in_elevation_group: u64,
    pub padding: [u64; 9],
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ObligationLiquidity {
    pub borrow_reserve: Pubkey,
    pub cumulative_borrow_rate_bsf: BigFractionBytes,
    pub padding: u64,
    pub borrowed_amount_sf: u128,
    pub market_value_sf: u128,
    pub borrow_factor_adjusted_market_value_sf: u128,
    pub borrowed_amount_outside_elevation_groups: u64,
    pub padding2: [u64; 7],
}

/// Leading part of a Kamino obligation: owner, deposit and borrow slots and
/// the aggregate values computed on the last refresh.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct Obligation {
    pub tag: u64,
    pub last_update: LastUpdate,
    pub lending_market: Pubkey,
    pub owner: Pubkey,
    pub deposits: [ObligationCollateral; 8],
    pub lowest_reserve_deposit_liquidation_ltv: u64,
    pub deposited_value_sf: u128,
    pub borrows: [ObligationLiquidity; 5],
    pub borrow_factor_adjusted_debt_value_sf: u128,
    pub borrowed_assets_market_value_sf: u128,
    pub allowed_borrow_value_sf: u128,
    pub unhealthy_borrow_value_sf: u128,
}

kamino_account!(Obligation, [168, 206, 141, 106, 88, 76, 172, 167]);

impl Obligation {
    /// Reserves in use, deposits first then borrows, in slot order. This is
    /// the trailing account list `refresh_obligation` expects.
    pub fn active_reserves(&self) -> Vec<Pubkey> {
        let deposits = self
            .deposits
            .iter()
            .map(|deposit| deposit.deposit_reserve);
        let borrows = self.borrows.iter().map(|borrow| borrow.borrow_reserve);

        deposits
            .chain(borrows)
            .filter(|reserve| *reserve != Pubkey::default())
            .collect()
    }
}
