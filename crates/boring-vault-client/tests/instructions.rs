use anchor_lang::prelude::Pubkey;
use anchor_lang::{AnchorDeserialize, Discriminator};
use anchor_spl::{token, token_2022};
use boring_vault_client::{
    instructions::*,
    manage::TransferSol,
    states::{AssetData, Operator},
    utils::*,
};
use solana_sdk::{address_lookup_table, hash::hash};

fn sighash(name: &str) -> [u8; 8] {
    let mut out = [0u8; 8];
    out.copy_from_slice(&hash(format!("global:{}", name).as_bytes()).to_bytes()[..8]);
    out
}

// --- discriminators ---

#[test]
fn discriminators_match_instruction_names() {
    let cases: [(&[u8], &str); 24] = [
        (Initialize::DISCRIMINATOR, "initialize"),
        (Deploy::DISCRIMINATOR, "deploy"),
        (UpdateAssetData::DISCRIMINATOR, "update_asset_data"),
        (Pause::DISCRIMINATOR, "pause"),
        (Unpause::DISCRIMINATOR, "unpause"),
        (TransferAuthority::DISCRIMINATOR, "transfer_authority"),
        (AcceptAuthority::DISCRIMINATOR, "accept_authority"),
        (InitializeCpiDigest::DISCRIMINATOR, "initialize_cpi_digest"),
        (CloseCpiDigest::DISCRIMINATOR, "close_cpi_digest"),
        (ViewCpiDigest::DISCRIMINATOR, "view_cpi_digest"),
        (Manage::DISCRIMINATOR, "manage"),
        (UpdateExchangeRateProvider::DISCRIMINATOR, "update_exchange_rate_provider"),
        (SetWithdrawAuthority::DISCRIMINATOR, "set_withdraw_authority"),
        (SetPayout::DISCRIMINATOR, "set_payout"),
        (ConfigureExchangeRateUpdateBounds::DISCRIMINATOR, "configure_exchange_rate_update_bounds"),
        (SetFees::DISCRIMINATOR, "set_fees"),
        (SetStrategist::DISCRIMINATOR, "set_strategist"),
        (SetDepositSubAccount::DISCRIMINATOR, "set_deposit_sub_account"),
        (SetWithdrawSubAccount::DISCRIMINATOR, "set_withdraw_sub_account"),
        (UpdateExchangeRate::DISCRIMINATOR, "update_exchange_rate"),
        (ClaimFeesInBase::DISCRIMINATOR, "claim_fees_in_base"),
        (DepositSol::DISCRIMINATOR, "deposit_sol"),
        (Deposit::DISCRIMINATOR, "deposit"),
        (Withdraw::DISCRIMINATOR, "withdraw"),
    ];

    for (discriminator, name) in cases {
        assert_eq!(discriminator, sighash(name), "{}", name);
    }
}

// --- admin ---

#[test]
fn initialize_requires_program_signature() {
    let authority = Pubkey::new_unique();
    let signer = Pubkey::new_unique();
    let ix = create_initialize_instruction(&authority, &signer);

    assert_eq!(ix.program_id, boring_vault_client::ID);
    assert_eq!(ix.accounts[0].pubkey, signer);
    assert!(ix.accounts[0].is_signer);
    assert_eq!(ix.accounts[1].pubkey, boring_vault_client::ID);
    assert!(ix.accounts[1].is_signer);
    assert_eq!(ix.accounts[2].pubkey, get_program_config_pda());
    // discriminator ++ authority
    assert_eq!(&ix.data[..8], Initialize::DISCRIMINATOR);
    assert_eq!(&ix.data[8..], authority.as_ref());
}

#[test]
fn deploy_accounts_and_args() {
    let signer = Pubkey::new_unique();
    let base = Pubkey::new_unique();
    let args = DeployArgs {
        authority: signer,
        name: "Vault".to_string(),
        symbol: "V".to_string(),
        exchange_rate_provider: signer,
        exchange_rate: 1_000_000_000,
        payout_address: signer,
        allowed_exchange_rate_change_upper_bound: 10_500,
        allowed_exchange_rate_change_lower_bound: 9_500,
        minimum_update_delay_in_seconds: 3_600,
        platform_fee_bps: 10,
        performance_fee_bps: 20,
        withdraw_authority: Pubkey::default(),
        strategist: signer,
    };
    let ix = create_deploy_instruction(&signer, 4, &base, args.clone());

    let vault_state = get_vault_state_pda(4);
    let keys: Vec<Pubkey> = ix.accounts.iter().map(|meta| meta.pubkey).collect();
    assert_eq!(
        keys,
        vec![
            signer,
            get_program_config_pda(),
            vault_state,
            get_share_mint_pda(&vault_state),
            base,
            anchor_lang::system_program::ID,
            token_2022::ID,
        ]
    );
    assert!(ix.accounts[1].is_writable);
    assert!(!ix.accounts[4].is_writable);

    let decoded = DeployArgs::deserialize(&mut &ix.data[8..]).unwrap();
    assert_eq!(decoded, args);
}

#[test]
fn update_asset_data_targets_asset_pda() {
    let signer = Pubkey::new_unique();
    let mint = Pubkey::new_unique();
    let ix = create_update_asset_data_instruction(&signer, 2, &mint, AssetData::default());

    let vault_state = get_vault_state_pda(2);
    assert_eq!(ix.accounts[1].pubkey, vault_state);
    assert_eq!(ix.accounts[3].pubkey, mint);
    assert_eq!(ix.accounts[4].pubkey, get_asset_data_pda(&vault_state, &mint));
    assert!(ix.accounts[4].is_writable);
}

#[test]
fn authority_setters_share_account_shape() {
    let signer = Pubkey::new_unique();
    let ixs = [
        create_pause_instruction(&signer, 3),
        create_unpause_instruction(&signer, 3),
        create_accept_authority_instruction(&signer, 3),
        create_set_fees_instruction(&signer, 3, 1, 2),
        create_set_deposit_sub_account_instruction(&signer, 3, 1),
    ];

    for ix in ixs {
        assert_eq!(ix.accounts.len(), 2);
        assert!(ix.accounts[0].is_signer && !ix.accounts[0].is_writable);
        assert_eq!(ix.accounts[1].pubkey, get_vault_state_pda(3));
        assert!(ix.accounts[1].is_writable);
        // vault id follows the discriminator
        assert_eq!(&ix.data[8..16], &3u64.to_le_bytes());
    }
}

#[test]
fn bounds_are_encoded_in_order() {
    let ix = create_configure_exchange_rate_update_bounds_instruction(&Pubkey::new_unique(), 1, 10_500, 9_500, 60);
    // 8 disc + 8 vault_id + 2 upper + 2 lower + 4 delay
    assert_eq!(ix.data.len(), 24);
    assert_eq!(&ix.data[16..18], &10_500u16.to_le_bytes());
    assert_eq!(&ix.data[18..20], &9_500u16.to_le_bytes());
    assert_eq!(&ix.data[20..24], &60u32.to_le_bytes());
}

#[test]
fn cpi_digest_lifecycle_accounts() {
    let signer = Pubkey::new_unique();
    let digest = [5u8; 32];
    let init = create_initialize_cpi_digest_instruction(&signer, 9, digest, vec![Operator::Noop].into());
    let close = create_close_cpi_digest_instruction(&signer, 9, digest);

    assert_eq!(init.accounts[3].pubkey, get_cpi_digest_pda(9, &digest));
    assert_eq!(close.accounts[2].pubkey, get_cpi_digest_pda(9, &digest));
    assert!(!close.accounts[1].is_writable);
}

// --- teller ---

#[test]
fn deposit_sol_uses_native_asset_data() {
    let signer = Pubkey::new_unique();
    let feed = Pubkey::new_unique();
    let ix = create_deposit_sol_instruction(
        &signer,
        DepositAccounts { deposit_sub_account: 2, price_feed: feed },
        DepositArgs { vault_id: 1, deposit_amount: 10, min_mint_amount: 9 },
    );

    let vault_state = get_vault_state_pda(1);
    let share_mint = get_share_mint_pda(&vault_state);
    assert_eq!(ix.accounts[5].pubkey, get_vault_pda(1, 2));
    assert_eq!(ix.accounts[6].pubkey, get_asset_data_pda(&vault_state, &NATIVE));
    assert_eq!(ix.accounts[8].pubkey, get_ata(&signer, &share_mint, &token_2022::ID));
    assert_eq!(ix.accounts[9].pubkey, feed);
    assert_eq!(&ix.data[..8], DepositSol::DISCRIMINATOR);
}

#[test]
fn deposit_routes_tokens_into_deposit_sub_account() {
    let signer = Pubkey::new_unique();
    let mint = Pubkey::new_unique();
    let ix = create_deposit_instruction(
        &signer,
        &mint,
        &token::ID,
        DepositAccounts { deposit_sub_account: 0, price_feed: Pubkey::new_unique() },
        DepositArgs { vault_id: 1, deposit_amount: 10, min_mint_amount: 9 },
    );

    let vault = get_vault_pda(1, 0);
    assert_eq!(ix.accounts.len(), 14);
    assert_eq!(ix.accounts[1].pubkey, token::ID);
    assert_eq!(ix.accounts[9].pubkey, get_ata(&signer, &mint, &token::ID));
    assert_eq!(ix.accounts[10].pubkey, get_ata(&vault, &mint, &token::ID));
}

#[test]
fn withdraw_uses_withdraw_sub_account() {
    let signer = Pubkey::new_unique();
    let mint = Pubkey::new_unique();
    let ix = create_withdraw_instruction(
        &signer,
        &mint,
        &token::ID,
        3,
        &Pubkey::new_unique(),
        WithdrawArgs { vault_id: 1, share_amount: 5, min_asset_amount: 4 },
    );

    assert_eq!(ix.accounts[6].pubkey, get_vault_pda(1, 3));
    assert_eq!(&ix.data[..8], Withdraw::DISCRIMINATOR);
}

#[test]
fn claim_fees_pays_payout_ata() {
    let base = Pubkey::new_unique();
    let payout = Pubkey::new_unique();
    let ix = create_claim_fees_in_base_instruction(&Pubkey::new_unique(), 1, 0, &base, &payout, &token::ID);

    assert_eq!(ix.accounts[4].pubkey, get_ata(&payout, &base, &token::ID));
    assert_eq!(ix.accounts[5].pubkey, get_ata(&get_vault_pda(1, 0), &base, &token::ID));
}

// --- manage ---

#[test]
fn manage_prefixes_vault_accounts() {
    let signer = Pubkey::new_unique();
    let to = Pubkey::new_unique();
    let eix = TransferSol { vault_id: 6, sub_account: 1, to, amount: 42 };
    let cpi_digest = Pubkey::new_unique();
    let ix = create_manage_instruction(&signer, &eix, &cpi_digest);

    assert_eq!(ix.accounts[0].pubkey, signer);
    assert!(ix.accounts[0].is_signer && ix.accounts[0].is_writable);
    assert_eq!(ix.accounts[1].pubkey, get_vault_state_pda(6));
    assert_eq!(ix.accounts[2].pubkey, get_vault_pda(6, 1));
    assert_eq!(ix.accounts[3].pubkey, cpi_digest);
    assert!(!ix.accounts[3].is_writable);
    assert_eq!(ix.accounts[4].pubkey, anchor_lang::system_program::ID);
    // remaining: from, to, system program
    assert_eq!(ix.accounts.len(), 8);
    assert_eq!(ix.accounts[6].pubkey, to);

    let args = ManageArgs::deserialize(&mut &ix.data[8..]).unwrap();
    assert_eq!(args.vault_id, 6);
    assert_eq!(args.sub_account, 1);
    assert_eq!(&args.ix_data[..4], &[2, 0, 0, 0]);
    assert_eq!(&args.ix_data[4..], &42u64.to_le_bytes());
}

#[test]
fn view_digest_carries_operators() {
    let eix = TransferSol { vault_id: 6, sub_account: 1, to: Pubkey::new_unique(), amount: 42 };
    let ix = create_view_cpi_digest_instruction(&eix);

    assert_eq!(ix.accounts[0].pubkey, anchor_lang::system_program::ID);
    assert_eq!(ix.accounts.len(), 4);

    let args = ViewCpiDigestArgs::deserialize(&mut &ix.data[8..]).unwrap();
    assert_eq!(args.operators.operators.len(), 3);
}

// --- token / lookup tables ---

#[test]
fn ata_creation_is_idempotent_variant() {
    let payer = Pubkey::new_unique();
    let owner = Pubkey::new_unique();
    let ix = create_ata_idempotent_instruction(&payer, &owner, &WSOL_MINT, &token::ID);

    assert_eq!(ix.program_id, anchor_spl::associated_token::ID);
    assert_eq!(ix.data, vec![1]);
    assert_eq!(ix.accounts[1].pubkey, get_ata(&owner, &WSOL_MINT, &token::ID));
}

#[test]
fn sync_native_targets_the_wsol_account() {
    let account = Pubkey::new_unique();
    let ix = create_sync_native_instruction(&account, &token::ID).unwrap();

    assert_eq!(ix.program_id, token::ID);
    assert_eq!(ix.data, vec![17]);
    assert_eq!(ix.accounts.len(), 1);
    assert_eq!(ix.accounts[0].pubkey, account);
    assert!(ix.accounts[0].is_writable);
}

#[test]
fn sync_native_accepts_token_2022() {
    let ix = create_sync_native_instruction(&Pubkey::new_unique(), &token_2022::ID).unwrap();
    assert_eq!(ix.program_id, token_2022::ID);
}

#[test]
fn sync_native_rejects_other_programs() {
    assert!(create_sync_native_instruction(&Pubkey::new_unique(), &Pubkey::new_unique()).is_err());
}

#[test]
fn lookup_table_is_owned_by_a_non_signing_authority() {
    let authority = Pubkey::new_unique();
    let payer = Pubkey::new_unique();
    let (ix, table) = create_lookup_table_instruction(&authority, &payer, 77);
    let (expected, _) = get_lookup_table_address(&authority, 77);

    assert_eq!(table, expected);
    assert_eq!(ix.program_id, address_lookup_table::program::ID);
    assert_eq!(ix.accounts[0].pubkey, table);
    assert_eq!(ix.accounts[1].pubkey, authority);
    assert!(!ix.accounts[1].is_signer);
    assert_eq!(ix.accounts[2].pubkey, payer);
    assert!(ix.accounts[2].is_signer);
    // u32 variant 0 then the u64 slot
    assert_eq!(&ix.data[..4], &[0, 0, 0, 0]);
    assert_eq!(&ix.data[4..12], &77u64.to_le_bytes());
}
