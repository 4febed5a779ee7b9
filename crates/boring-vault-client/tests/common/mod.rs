#![allow(dead_code)]

use std::{cell::RefCell, collections::HashMap};

use anchor_lang::prelude::Pubkey;
use anchor_lang::{AccountSerialize, AnchorSerialize};
use anchor_spl::token::{
    self,
    spl_token::state::{Account as SplAccount, AccountState, Mint as SplMint},
};
use boring_vault_client::{
    states::{
        AssetData, BigFractionBytes, BoringVault, LastUpdate, Obligation, ObligationCollateral,
        ObligationLiquidity, ProgramConfig, Reserve, ReserveCollateral, ReserveLiquidity,
    },
    utils::{get_asset_data_pda, get_program_config_pda, get_vault_state_pda, KAMINO_LEND_PROGRAM_ID},
    Transport,
};
use eyre::{eyre, Result};
use pyth_solana_receiver_sdk::price_update::{PriceFeedMessage, PriceUpdateV2, VerificationLevel};
use solana_sdk::{
    account::Account, hash::Hash, program_pack::Pack, signature::Signature,
    transaction::Transaction, transaction::VersionedTransaction,
};

/// In-memory chain: a fixed account set, a canned simulation result and a
/// log of what was sent.
#[derive(Default)]
pub struct MockChain {
    pub accounts: RefCell<HashMap<Pubkey, Account>>,
    pub return_data: RefCell<Option<Vec<u8>>>,
    pub simulations: RefCell<usize>,
    pub sent: RefCell<Vec<VersionedTransaction>>,
    pub fail_send: bool,
    pub slot: u64,
}

impl MockChain {
    pub fn new() -> Self {
        Self {
            slot: 250_000_000,
            ..Default::default()
        }
    }

    pub fn with_digest(self, digest: [u8; 32]) -> Self {
        *self.return_data.borrow_mut() = Some(digest.to_vec());
        self
    }

    pub fn set_account(&self, address: Pubkey, owner: Pubkey, data: Vec<u8>) {
        self.accounts.borrow_mut().insert(
            address,
            Account {
                lamports: 1_000_000,
                data,
                owner,
                executable: false,
                rent_epoch: 0,
            },
        );
    }

    pub fn set_anchor_account<T: AccountSerialize>(&self, address: Pubkey, value: &T) {
        let mut data = Vec::new();
        value.try_serialize(&mut data).unwrap();
        self.set_account(address, boring_vault_client::ID, data);
    }

    pub fn set_program_config(&self, vault_count: u64) {
        self.set_anchor_account(
            get_program_config_pda(),
            &ProgramConfig {
                authority: Pubkey::new_unique(),
                vault_count,
            },
        );
    }

    pub fn set_vault(&self, vault_id: u64, vault: &BoringVault) {
        self.set_anchor_account(get_vault_state_pda(vault_id), vault);
    }

    pub fn set_asset_data(&self, vault_id: u64, mint: &Pubkey, asset_data: &AssetData) {
        let vault_state = get_vault_state_pda(vault_id);
        self.set_anchor_account(get_asset_data_pda(&vault_state, mint), asset_data);
    }

    pub fn set_lamports(&self, address: Pubkey, lamports: u64) {
        self.accounts.borrow_mut().insert(
            address,
            Account {
                lamports,
                owner: anchor_lang::system_program::ID,
                ..Default::default()
            },
        );
    }

    pub fn set_mint(&self, mint: Pubkey, decimals: u8, token_program: Pubkey) {
        self.set_mint_with_supply(mint, decimals, 0, token_program);
    }

    pub fn set_mint_with_supply(&self, mint: Pubkey, decimals: u8, supply: u64, token_program: Pubkey) {
        let state = SplMint {
            decimals,
            supply,
            is_initialized: true,
            ..Default::default()
        };
        let mut data = vec![0u8; SplMint::LEN];
        SplMint::pack(state, &mut data).unwrap();
        self.set_account(mint, token_program, data);
    }

    pub fn set_token_account(&self, address: Pubkey, amount: u64) {
        self.set_token_account_under(address, amount, token::ID);
    }

    pub fn set_token_account_under(&self, address: Pubkey, amount: u64, token_program: Pubkey) {
        let state = SplAccount {
            amount,
            state: AccountState::Initialized,
            ..Default::default()
        };
        let mut data = vec![0u8; SplAccount::LEN];
        SplAccount::pack(state, &mut data).unwrap();
        self.set_account(address, token_program, data);
    }

    pub fn set_kamino_account<T: AnchorSerialize>(&self, address: Pubkey, discriminator: [u8; 8], value: &T) {
        let mut data = discriminator.to_vec();
        value.serialize(&mut data).unwrap();
        self.set_account(address, KAMINO_LEND_PROGRAM_ID, data);
    }

    pub fn set_reserve(&self, address: Pubkey, reserve: &Reserve) {
        self.set_kamino_account(address, Reserve::DISCRIMINATOR, reserve);
    }

    pub fn set_obligation(&self, address: Pubkey, obligation: &Obligation) {
        self.set_kamino_account(address, Obligation::DISCRIMINATOR, obligation);
    }

    pub fn set_price_feed(&self, address: Pubkey, price: i64, exponent: i32, publish_time: i64) {
        let update = PriceUpdateV2 {
            write_authority: Pubkey::new_unique(),
            verification_level: VerificationLevel::Full,
            price_message: price_message(price, exponent, publish_time),
            posted_slot: 0,
        };
        let mut data = Vec::new();
        update.try_serialize(&mut data).unwrap();
        self.set_account(address, Pubkey::new_unique(), data);
    }
}

impl Transport for MockChain {
    fn get_account(&self, pubkey: &Pubkey) -> Result<Option<Account>> {
        Ok(self.accounts.borrow().get(pubkey).cloned())
    }

    fn get_latest_blockhash(&self) -> Result<Hash> {
        Ok(Hash::new_from_array([7; 32]))
    }

    fn get_slot(&self) -> Result<u64> {
        Ok(self.slot)
    }

    fn simulate_return_data(&self, _transaction: &Transaction) -> Result<Option<Vec<u8>>> {
        *self.simulations.borrow_mut() += 1;
        Ok(self.return_data.borrow().clone())
    }

    fn send_and_confirm(&self, transaction: &VersionedTransaction) -> Result<Signature> {
        if self.fail_send {
            return Err(eyre!("node is behind"));
        }
        self.sent.borrow_mut().push(transaction.clone());
        Ok(transaction.signatures[0])
    }
}

pub fn price_message(price: i64, exponent: i32, publish_time: i64) -> PriceFeedMessage {
    PriceFeedMessage {
        feed_id: [1; 32],
        price,
        conf: 0,
        exponent,
        publish_time,
        prev_publish_time: publish_time,
        ema_price: price,
        ema_conf: 0,
    }
}

/// A live vault over `base_asset` with 9 decimals and a 1:1 exchange rate.
pub fn sample_vault(vault_id: u64, base_asset: Pubkey) -> BoringVault {
    let mut vault = BoringVault::default();
    vault.config.vault_id = vault_id;
    vault.config.authority = Pubkey::new_unique();
    vault.config.deposit_sub_account = 0;
    vault.config.withdraw_sub_account = 1;
    vault.teller.base_asset = base_asset;
    vault.teller.decimals = 9;
    vault.teller.exchange_rate = 1_000_000_000;
    vault.teller.exchange_rate_high_water_mark = 1_000_000_000;
    vault.teller.payout_address = Pubkey::new_unique();
    vault.teller.allowed_exchange_rate_change_upper_bound = 10_500;
    vault.teller.allowed_exchange_rate_change_lower_bound = 9_500;
    vault
}

pub fn open_asset(price_feed: Pubkey) -> AssetData {
    AssetData {
        allow_deposits: true,
        allow_withdrawals: true,
        share_premium_bps: 0,
        is_pegged_to_base_asset: false,
        price_feed,
        inverse_price_feed: false,
        max_staleness: 60,
        min_samples: 1,
    }
}

/// A fresh reserve in `lending_market` lending `mint`, with the given farms.
pub fn sample_reserve(lending_market: Pubkey, mint: Pubkey, farm_collateral: Pubkey, farm_debt: Pubkey) -> Reserve {
    Reserve {
        version: 1,
        last_update: LastUpdate::default(),
        lending_market,
        farm_collateral,
        farm_debt,
        liquidity: ReserveLiquidity {
            mint_pubkey: mint,
            supply_vault: Pubkey::new_unique(),
            fee_vault: Pubkey::new_unique(),
            available_amount: 5_000_000,
            borrowed_amount_sf: 0,
            market_price_sf: 0,
            market_price_last_updated_ts: 0,
            mint_decimals: 9,
            deposit_limit_crossed_timestamp: 0,
            borrow_limit_crossed_timestamp: 0,
            cumulative_borrow_rate_bsf: BigFractionBytes::default(),
            accumulated_protocol_fees_sf: 0,
            accumulated_referrer_fees_sf: 0,
            pending_referrer_fees_sf: 0,
            absolute_referral_rate_sf: 0,
            token_program: token::ID,
            padding2: [0; 51],
            padding3: [0; 32],
        },
        reserve_liquidity_padding: [0; 150],
        collateral: ReserveCollateral {
            mint_pubkey: Pubkey::new_unique(),
            mint_total_supply: 0,
            supply_vault: Pubkey::new_unique(),
            padding1: [0; 32],
            padding2: [0; 32],
        },
    }
}

/// An obligation owned by `owner` with one deposit slot per `deposits`
/// entry and one borrow slot per `borrows` entry.
pub fn sample_obligation(lending_market: Pubkey, owner: Pubkey, deposits: &[Pubkey], borrows: &[Pubkey]) -> Obligation {
    let empty_deposit = ObligationCollateral {
        deposit_reserve: Pubkey::default(),
        deposited_amount: 0,
        market_value_sf: 0,
        borrowed_amount_against_this_collateral_in_elevation_group: 0,
        padding: [0; 9],
    };
    let empty_borrow = ObligationLiquidity {
        borrow_reserve: Pubkey::default(),
        cumulative_borrow_rate_bsf: BigFractionBytes::default(),
        padding: 0,
        borrowed_amount_sf: 0,
        market_value_sf: 0,
        borrow_factor_adjusted_market_value_sf: 0,
        borrowed_amount_outside_elevation_groups: 0,
        padding2: [0; 7],
    };

    let mut obligation = Obligation {
        tag: 0,
        last_update: LastUpdate::default(),
        lending_market,
        owner,
        deposits: [empty_deposit; 8],
        lowest_reserve_deposit_liquidation_ltv: 0,
        deposited_value_sf: 0,
        borrows: [empty_borrow; 5],
        borrow_factor_adjusted_debt_value_sf: 0,
        borrowed_assets_market_value_sf: 0,
        allowed_borrow_value_sf: 0,
        unhealthy_borrow_value_sf: 0,
    };
    for (slot, reserve) in obligation.deposits.iter_mut().zip(deposits) {
        slot.deposit_reserve = *reserve;
        slot.deposited_amount = 1_000;
    }
    for (slot, reserve) in obligation.borrows.iter_mut().zip(borrows) {
        slot.borrow_reserve = *reserve;
    }
    obligation
}
