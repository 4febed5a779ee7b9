use anchor_lang::prelude::Pubkey;
use anchor_lang::solana_program::instruction::AccountMeta;
use solana_sdk::hash::hash;
use boring_vault_client::{
    components::{compute_cpi_digest, digest_to_hex},
    manage::{ExternalInstruction, MintJitoSol, TransferSol, TransferSolBetweenSubAccounts},
    states::{Operator, Operators},
    utils::{get_cpi_digest_pda, BoringVaultError},
};

fn program() -> Pubkey {
    Pubkey::new_from_array([9; 32])
}

// --- recipe ---

#[test]
fn empty_recipe_hashes_program_id_only() {
    let digest = compute_cpi_digest(&program(), &[1, 2, 3], &[], &Operators::default()).unwrap();
    assert_eq!(digest, hash(program().as_ref()).to_bytes());
}

#[test]
fn noop_leaves_digest_unchanged() {
    let ops: Operators = vec![Operator::Noop, Operator::Noop].into();
    let digest = compute_cpi_digest(&program(), &[1, 2, 3], &[], &ops).unwrap();
    assert_eq!(digest, hash(program().as_ref()).to_bytes());
}

#[test]
fn steps_are_concatenated_then_hashed_once() {
    let key = Pubkey::new_from_array([4; 32]);
    let data = [10u8, 11, 12, 13];
    let accounts = vec![AccountMeta::new(key, false)];
    let ops: Operators = vec![
        Operator::IngestInstruction(1, 2),
        Operator::IngestAccount(0),
        Operator::IngestInstructionDataSize,
    ]
    .into();

    // H(program | data[1..3] | key | signer | writable | len as u64 LE)
    let mut preimage = program().to_bytes().to_vec();
    preimage.extend_from_slice(&data[1..3]);
    preimage.extend_from_slice(key.as_ref());
    preimage.extend_from_slice(&[0, 1]);
    preimage.extend_from_slice(&4u64.to_le_bytes());

    assert_eq!(
        compute_cpi_digest(&program(), &data, &accounts, &ops).unwrap(),
        hash(&preimage).to_bytes()
    );
}

#[test]
fn prefix_and_data_size() {
    let ops: Operators = vec![
        Operator::IngestInstruction(0, 2),
        Operator::IngestInstructionDataSize,
    ]
    .into();

    // H(program | 7 8 | 3u64 LE)
    let mut preimage = program().to_bytes().to_vec();
    preimage.extend_from_slice(&[7, 8]);
    preimage.extend_from_slice(&3u64.to_le_bytes());

    assert_eq!(
        compute_cpi_digest(&program(), &[7, 8, 9], &[], &ops).unwrap(),
        hash(&preimage).to_bytes()
    );
}

#[test]
fn operator_order_changes_the_digest() {
    let forward: Operators = vec![
        Operator::IngestInstruction(0, 1),
        Operator::IngestInstruction(1, 1),
    ]
    .into();
    let backward: Operators = vec![
        Operator::IngestInstruction(1, 1),
        Operator::IngestInstruction(0, 1),
    ]
    .into();

    let data = [1u8, 2];
    assert_ne!(
        compute_cpi_digest(&program(), &data, &[], &forward).unwrap(),
        compute_cpi_digest(&program(), &data, &[], &backward).unwrap()
    );
}

#[test]
fn account_flags_are_part_of_the_digest() {
    let key = Pubkey::new_from_array([4; 32]);
    let ops: Operators = vec![Operator::IngestAccount(0)].into();

    let writable = compute_cpi_digest(&program(), &[], &[AccountMeta::new(key, false)], &ops).unwrap();
    let readonly =
        compute_cpi_digest(&program(), &[], &[AccountMeta::new_readonly(key, false)], &ops).unwrap();
    assert_ne!(writable, readonly);
}

// --- bad operators ---

#[test]
fn range_past_data_end_fails() {
    let ops: Operators = vec![Operator::IngestInstruction(2, 4)].into();
    assert!(matches!(
        compute_cpi_digest(&program(), &[0; 5], &[], &ops),
        Err(BoringVaultError::InvalidOperatorRange)
    ));
}

#[test]
fn range_ending_exactly_at_data_end_is_fine() {
    let ops: Operators = vec![Operator::IngestInstruction(1, 4)].into();
    assert!(compute_cpi_digest(&program(), &[0; 5], &[], &ops).is_ok());
}

#[test]
fn missing_account_fails() {
    let ops: Operators = vec![Operator::IngestAccount(3)].into();
    let accounts = vec![AccountMeta::new(Pubkey::new_unique(), false)];
    assert!(matches!(
        compute_cpi_digest(&program(), &[], &accounts, &ops),
        Err(BoringVaultError::InvalidOperatorAccount)
    ));
}

// --- strategies ---

#[test]
fn transfer_digest_ignores_amount() {
    let to = Pubkey::new_unique();
    let small = TransferSol { vault_id: 1, sub_account: 0, to, amount: 1 };
    let large = TransferSol { vault_id: 1, sub_account: 0, to, amount: 5_000_000_000 };
    assert_eq!(small.digest().unwrap(), large.digest().unwrap());
}

#[test]
fn transfer_digest_pins_destination() {
    let a = TransferSol { vault_id: 1, sub_account: 0, to: Pubkey::new_unique(), amount: 1 };
    let b = TransferSol { vault_id: 1, sub_account: 0, to: Pubkey::new_unique(), amount: 1 };
    assert_ne!(a.digest().unwrap(), b.digest().unwrap());
}

#[test]
fn sub_account_transfer_digest_pins_target_sub_account() {
    let to_one = TransferSolBetweenSubAccounts { vault_id: 3, sub_account: 0, to_sub_account: 1, amount: 10 };
    let to_two = TransferSolBetweenSubAccounts { vault_id: 3, sub_account: 0, to_sub_account: 2, amount: 10 };
    assert_ne!(to_one.digest().unwrap(), to_two.digest().unwrap());
}

#[test]
fn jito_digest_ignores_amount() {
    let a = MintJitoSol { vault_id: 2, sub_account: 1, amount: 1 };
    let b = MintJitoSol { vault_id: 2, sub_account: 1, amount: 99 };
    assert_eq!(a.digest().unwrap(), b.digest().unwrap());
}

#[test]
fn digest_pda_matches_derivation() {
    let eix = MintJitoSol { vault_id: 2, sub_account: 1, amount: 1 };
    let (pda, digest) = eix.digest_pda().unwrap();
    assert_eq!(pda, get_cpi_digest_pda(2, &digest));
}

// --- hex ---

#[test]
fn hex_is_lowercase_and_64_chars() {
    let mut digest = [0u8; 32];
    digest[0] = 0xab;
    digest[31] = 0x0f;
    let hex = digest_to_hex(&digest);
    assert_eq!(hex.len(), 64);
    assert!(hex.starts_with("ab00"));
    assert!(hex.ends_with("0f"));
}
