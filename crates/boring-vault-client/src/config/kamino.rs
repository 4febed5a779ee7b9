use std::{collections::HashMap, path::Path};

use anchor_lang::prelude::Pubkey;
use eyre::{eyre, Result};
use serde::Deserialize;

use crate::{
    config::{deserialize_optional_pubkey, deserialize_pubkey, deserialize_pubkey_vec, load_json},
    manage::{KaminoBorrow, KaminoDeposit, RefreshPriceList, RefreshReserve},
};

/// Reserve and oracle accounts used when lending into Kamino.
#[derive(Debug, Deserialize, Clone)]
pub struct KaminoLendStrategyConfig {
    #[serde(deserialize_with = "deserialize_pubkey")]
    pub reserve: Pubkey,
    /// Reserves without a collateral farm leave this out.
    #[serde(default, deserialize_with = "deserialize_optional_pubkey")]
    pub reserve_farm_state: Option<Pubkey>,
    #[serde(deserialize_with = "deserialize_pubkey")]
    pub reserve_liquidity_mint: Pubkey,
    #[serde(deserialize_with = "deserialize_pubkey")]
    pub reserve_liquidity_supply: Pubkey,
    #[serde(deserialize_with = "deserialize_pubkey")]
    pub reserve_collateral_mint: Pubkey,
    #[serde(deserialize_with = "deserialize_pubkey")]
    pub reserve_destination_deposit_collateral: Pubkey,
    #[serde(deserialize_with = "deserialize_pubkey")]
    pub lending_market: Pubkey,
    #[serde(deserialize_with = "deserialize_pubkey")]
    pub oracle_prices: Pubkey,
    #[serde(deserialize_with = "deserialize_pubkey")]
    pub oracle_mapping: Pubkey,
    #[serde(deserialize_with = "deserialize_pubkey")]
    pub oracle_twaps: Pubkey,
    #[serde(deserialize_with = "deserialize_pubkey_vec")]
    pub price_accounts: Vec<Pubkey>,
    pub tokens: Vec<u16>,
}

/// Reserve accounts used when borrowing from Kamino.
#[derive(Debug, Deserialize, Clone)]
pub struct KaminoBorrowStrategyConfig {
    #[serde(deserialize_with = "deserialize_pubkey")]
    pub reserve: Pubkey,
    #[serde(default, deserialize_with = "deserialize_optional_pubkey")]
    pub reserve_farm_state: Option<Pubkey>,
    #[serde(deserialize_with = "deserialize_pubkey")]
    pub reserve_source_liquidity_mint: Pubkey,
    #[serde(deserialize_with = "deserialize_pubkey")]
    pub reserve_source_liquidity: Pubkey,
    #[serde(deserialize_with = "deserialize_pubkey")]
    pub reserve_source_liquidity_fee_receiver: Pubkey,
}

#[derive(Debug, Deserialize)]
struct KaminoProfile {
    lend: Option<KaminoLendStrategyConfig>,
    borrow: Option<KaminoBorrowStrategyConfig>,
}

/// The lend strategy of one profile and the borrow strategy of another,
/// e.g. lend JitoSOL and borrow SOL. Market and oracle accounts come from
/// the lend profile.
#[derive(Debug, Clone)]
pub struct KaminoConfig {
    pub lend: KaminoLendStrategyConfig,
    pub borrow: KaminoBorrowStrategyConfig,
    pub lending_market: Pubkey,
    pub oracle_prices: Pubkey,
    pub oracle_mapping: Pubkey,
    pub oracle_twaps: Pubkey,
    pub price_accounts: Vec<Pubkey>,
    pub tokens: Vec<u16>,
}

impl KaminoConfig {
    /// Loads `{"<profile>": {"lend": {...}, "borrow": {...}}, ...}`.
    /// Returns `None` if the file does not exist.
    pub fn load(path: &Path, lend_profile: &str, borrow_profile: &str) -> Result<Option<Self>> {
        let Some(mut profiles) = load_json::<HashMap<String, KaminoProfile>>(path)? else {
            return Ok(None);
        };

        let lend = profiles
            .get_mut(lend_profile)
            .and_then(|profile| profile.lend.take())
            .ok_or_else(|| {
                eyre!("No lend strategy for profile '{}' in {}", lend_profile, path.display())
            })?;
        let borrow = profiles
            .get_mut(borrow_profile)
            .and_then(|profile| profile.borrow.take())
            .ok_or_else(|| {
                eyre!("No borrow strategy for profile '{}' in {}", borrow_profile, path.display())
            })?;

        Ok(Some(Self::new(lend, borrow)))
    }

    pub fn new(lend: KaminoLendStrategyConfig, borrow: KaminoBorrowStrategyConfig) -> Self {
        Self {
            lending_market: lend.lending_market,
            oracle_prices: lend.oracle_prices,
            oracle_mapping: lend.oracle_mapping,
            oracle_twaps: lend.oracle_twaps,
            price_accounts: lend.price_accounts.clone(),
            tokens: lend.tokens.clone(),
            lend,
            borrow,
        }
    }
}

impl KaminoConfig {
    /// `liquidity_token_program` owns the lend reserve's liquidity mint.
    pub fn lend_instruction(
        &self,
        vault_id: u64,
        sub_account: u8,
        tag: u8,
        id: u8,
        amount: u64,
        liquidity_token_program: Pubkey,
    ) -> KaminoDeposit {
        KaminoDeposit {
            vault_id,
            sub_account,
            lending_market: self.lending_market,
            reserve: self.lend.reserve,
            reserve_liquidity_mint: self.lend.reserve_liquidity_mint,
            reserve_liquidity_supply: self.lend.reserve_liquidity_supply,
            reserve_collateral_mint: self.lend.reserve_collateral_mint,
            reserve_destination_deposit_collateral: self
                .lend
                .reserve_destination_deposit_collateral,
            reserve_farm_state: self.lend.reserve_farm_state,
            liquidity_token_program,
            tag,
            id,
            amount,
        }
    }

    /// `liquidity_token_program` owns the borrow reserve's liquidity mint.
    pub fn borrow_instruction(
        &self,
        vault_id: u64,
        sub_account: u8,
        tag: u8,
        id: u8,
        amount: u64,
        liquidity_token_program: Pubkey,
    ) -> KaminoBorrow {
        KaminoBorrow {
            vault_id,
            sub_account,
            lending_market: self.lending_market,
            reserve: self.borrow.reserve,
            reserve_source_liquidity_mint: self.borrow.reserve_source_liquidity_mint,
            reserve_source_liquidity: self.borrow.reserve_source_liquidity,
            reserve_source_liquidity_fee_receiver: self
                .borrow
                .reserve_source_liquidity_fee_receiver,
            reserve_farm_state: self.borrow.reserve_farm_state,
            liquidity_token_program,
            tag,
            id,
            amount,
        }
    }

    /// Refreshes for the borrow reserve and the lend reserve, in that order.
    /// Both price through Scope.
    pub fn refresh_reserve_instructions(
        &self,
        vault_id: u64,
        sub_account: u8,
    ) -> [RefreshReserve; 2] {
        [self.borrow.reserve, self.lend.reserve].map(|reserve| RefreshReserve {
            vault_id,
            sub_account,
            reserve,
            lending_market: self.lending_market,
            pyth_oracle: None,
            switchboard_price_oracle: None,
            switchboard_twap_oracle: None,
            scope_prices: Some(self.oracle_prices),
        })
    }

    pub fn refresh_price_list_instruction(
        &self,
        vault_id: u64,
        sub_account: u8,
    ) -> RefreshPriceList {
        RefreshPriceList {
            vault_id,
            sub_account,
            oracle_prices: self.oracle_prices,
            oracle_mapping: self.oracle_mapping,
            oracle_twaps: self.oracle_twaps,
            price_accounts: self.price_accounts.clone(),
            tokens: self.tokens.clone(),
        }
    }
}
