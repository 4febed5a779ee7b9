mod common;

use anchor_lang::prelude::Pubkey;
use anchor_spl::{token, token_2022};
use boring_vault_client::{
    components::digest_to_hex,
    config::{
        KaminoBorrowStrategyConfig, KaminoConfig, KaminoLendStrategyConfig, VaultAssetConfig,
        VaultConfig,
    },
    manage::{ExternalInstruction, MintJitoSol, TransferSolBetweenSubAccounts},
    utils::*,
    view,
};
use common::*;

// --- accounts ---

#[test]
fn next_vault_id_reads_program_config() {
    let chain = MockChain::new();
    assert_eq!(view::next_vault_id(&chain).unwrap(), 0);

    chain.set_program_config(12);
    assert_eq!(view::next_vault_id(&chain).unwrap(), 12);
}

#[test]
fn vault_state_round_trips_through_the_chain() {
    let chain = MockChain::new();
    chain.set_vault(2, &sample_vault(2, WSOL_MINT));

    let vault = view::get_vault_state(&chain, 2).unwrap();
    assert_eq!(vault.config.vault_id, 2);
    assert_eq!(vault.teller.base_asset, WSOL_MINT);
    assert!(view::get_vault_state(&chain, 3).is_err());
}

#[test]
fn garbage_account_data_is_a_decode_error() {
    let chain = MockChain::new();
    chain.set_account(get_vault_state_pda(0), boring_vault_client::ID, vec![1, 2, 3]);

    let err = view::get_vault_state(&chain, 0).unwrap_err();
    assert!(err.to_string().contains("Failed to decode account"));
}

// --- tokens ---

#[test]
fn missing_token_account_has_zero_balance() {
    let chain = MockChain::new();
    assert_eq!(view::get_token_balance(&chain, &Pubkey::new_unique()).unwrap(), 0);
}

#[test]
fn mint_reads_decimals_and_owner() {
    let chain = MockChain::new();
    let mint = Pubkey::new_unique();
    chain.set_mint(mint, 6, token_2022::ID);

    assert_eq!(view::get_mint_decimals(&chain, &mint).unwrap(), 6);
    assert_eq!(view::get_token_program(&chain, &mint).unwrap(), token_2022::ID);
}

#[test]
fn totals_sum_every_sub_account() {
    let chain = MockChain::new();
    let vault_config = VaultConfig {
        vault_id: 1,
        sub_accounts: vec![0, 1, 2],
        assets: vec![
            VaultAssetConfig { mint: JITO_SOL_MINT, decimals: 9, is_token_2022: false },
            VaultAssetConfig { mint: WSOL_MINT, decimals: 9, is_token_2022: false },
        ],
    };
    let ata = |sub_account| get_ata(&get_vault_pda(1, sub_account), &JITO_SOL_MINT, &token::ID);
    chain.set_token_account(ata(0), 400);
    chain.set_token_account(ata(2), 600);

    let totals = view::get_sub_account_token_totals(&chain, &vault_config).unwrap();

    // sub-account 1 holds nothing
    assert_eq!(totals, vec![(JITO_SOL_MINT, 1_000), (WSOL_MINT, 0)]);
}

#[test]
fn native_sol_of_sub_accounts_counts_as_wsol() {
    let chain = MockChain::new();
    let vault_config = VaultConfig {
        vault_id: 1,
        sub_accounts: vec![0, 1],
        assets: vec![VaultAssetConfig { mint: WSOL_MINT, decimals: 9, is_token_2022: false }],
    };
    chain.set_lamports(get_vault_pda(1, 0), 2_000_000_000);
    chain.set_token_account(get_ata(&get_vault_pda(1, 1), &WSOL_MINT, &token::ID), 500);

    let totals = view::get_sub_account_token_totals(&chain, &vault_config).unwrap();

    // 2 SOL held natively by sub-account 0 plus 500 wrapped in sub-account 1
    assert_eq!(totals, vec![(WSOL_MINT, 2_000_000_500)]);
}

#[test]
fn native_sol_gets_its_own_entry_when_wsol_is_not_configured() {
    let chain = MockChain::new();
    let vault_config = VaultConfig { vault_id: 4, sub_accounts: vec![3], assets: vec![] };
    chain.set_lamports(get_vault_pda(4, 3), 7_500);

    let totals = view::get_sub_account_token_totals(&chain, &vault_config).unwrap();
    assert_eq!(totals, vec![(WSOL_MINT, 7_500)]);
}

#[test]
fn empty_sub_accounts_report_nothing() {
    let chain = MockChain::new();
    let vault_config = VaultConfig { vault_id: 4, sub_accounts: vec![0, 1], assets: vec![] };
    assert!(view::get_sub_account_token_totals(&chain, &vault_config).unwrap().is_empty());
}

#[test]
fn token_2022_balance_is_read() {
    let chain = MockChain::new();
    let account = Pubkey::new_unique();
    chain.set_token_account_under(account, 42, token_2022::ID);
    assert_eq!(view::get_token_balance(&chain, &account).unwrap(), 42);
}

#[test]
fn token_account_under_foreign_owner_is_rejected() {
    let chain = MockChain::new();
    let account = Pubkey::new_unique();
    chain.set_token_account_under(account, 42, Pubkey::new_unique());

    let err = view::get_token_balance(&chain, &account).unwrap_err();
    assert!(err.to_string().contains("not a token program"));
}

#[test]
fn short_token_account_is_a_decode_error() {
    let chain = MockChain::new();
    let account = Pubkey::new_unique();
    chain.set_account(account, token::ID, vec![0; 40]);

    let err = view::get_token_balance(&chain, &account).unwrap_err();
    assert!(err.to_string().contains("is not a token account"));
}

#[test]
fn uninitialized_mint_is_a_decode_error() {
    let chain = MockChain::new();
    let mint = Pubkey::new_unique();
    chain.set_account(mint, token::ID, vec![0; 82]);
    assert!(view::get_mint_decimals(&chain, &mint).is_err());
}

// --- digests ---

#[test]
fn jito_digest_matches_any_amount() {
    let (pda, hex) = view::get_jito_digest(1, 0).unwrap();
    let eix = MintJitoSol { vault_id: 1, sub_account: 0, amount: 5_000 };
    let (expected_pda, digest) = eix.digest_pda().unwrap();

    assert_eq!(pda, expected_pda);
    assert_eq!(hex, digest_to_hex(&digest));
}

#[test]
fn transfer_digest_depends_on_destination() {
    let (to_one, _) = view::get_transfer_sol_digest(1, 0, 1).unwrap();
    let (to_two, _) = view::get_transfer_sol_digest(1, 0, 2).unwrap();
    assert_ne!(to_one, to_two);

    let eix = TransferSolBetweenSubAccounts { vault_id: 1, sub_account: 0, to_sub_account: 1, amount: 9 };
    assert_eq!(to_one, eix.digest_pda().unwrap().0);
}

#[test]
fn borrow_digest_depends_on_the_liquidity_token_program() {
    let kamino = KaminoConfig::new(
        KaminoLendStrategyConfig {
            reserve: Pubkey::new_unique(),
            reserve_farm_state: None,
            reserve_liquidity_mint: JITO_SOL_MINT,
            reserve_liquidity_supply: Pubkey::new_unique(),
            reserve_collateral_mint: Pubkey::new_unique(),
            reserve_destination_deposit_collateral: Pubkey::new_unique(),
            lending_market: Pubkey::new_unique(),
            oracle_prices: Pubkey::new_unique(),
            oracle_mapping: Pubkey::new_unique(),
            oracle_twaps: Pubkey::new_unique(),
            price_accounts: vec![],
            tokens: vec![],
        },
        KaminoBorrowStrategyConfig {
            reserve: Pubkey::new_unique(),
            reserve_farm_state: None,
            reserve_source_liquidity_mint: WSOL_MINT,
            reserve_source_liquidity: Pubkey::new_unique(),
            reserve_source_liquidity_fee_receiver: Pubkey::new_unique(),
        },
    );

    let (spl, _) = view::get_borrow_digest(&kamino, 0, 0, 0, 0, token::ID).unwrap();
    let (t22, _) = view::get_borrow_digest(&kamino, 0, 0, 0, 0, token_2022::ID).unwrap();
    assert_ne!(spl, t22);

    let eix = kamino.borrow_instruction(0, 0, 0, 0, 1, token_2022::ID);
    assert_eq!(t22, eix.digest_pda().unwrap().0);
}

// --- simulation ---

#[test]
fn view_cpi_digest_reads_return_data() {
    let chain = MockChain::new().with_digest([8; 32]);
    let eix = MintJitoSol { vault_id: 0, sub_account: 0, amount: 1 };

    let digest = view::view_cpi_digest(&chain, &solana_sdk::signature::Keypair::new(), &eix).unwrap();

    assert_eq!(digest, [8; 32]);
}

#[test]
fn view_cpi_digest_without_return_data_fails() {
    let chain = MockChain::new();
    let eix = MintJitoSol { vault_id: 0, sub_account: 0, amount: 1 };

    assert!(view::view_cpi_digest(&chain, &solana_sdk::signature::Keypair::new(), &eix).is_err());
}
