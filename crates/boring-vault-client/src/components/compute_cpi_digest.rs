use anchor_lang::prelude::Pubkey;
use anchor_lang::solana_program::instruction::AccountMeta;
use solana_sdk::hash::hash;

use crate::{
    states::{Operator, Operators},
    utils::BoringVaultError,
};

/// Computes the digest that whitelists a strategist call.
///
/// The program id and every operator's selection are appended, in order, to
/// one buffer which is hashed once. Only the bytes and accounts the operators
/// select are pinned. Amounts and other unselected bytes may change freely
/// between calls that share a digest.
///
/// # Arguments
/// * `ix_program_id` - Program the vault will invoke
/// * `ix_data` - Instruction data passed to that program
/// * `accounts` - Remaining accounts in the order the program receives them
/// * `operators` - Recipe selecting which parts of the call are hashed
///
/// # Returns
/// * `Result<[u8; 32], BoringVaultError>` - The digest, or an error if an
///   operator points outside the data or the account list
pub fn compute_cpi_digest(
    ix_program_id: &Pubkey,
    ix_data: &[u8],
    accounts: &[AccountMeta],
    operators: &Operators,
) -> std::result::Result<[u8; 32], BoringVaultError> {
    let mut preimage = ix_program_id.to_bytes().to_vec();

    for operator in &operators.operators {
        match *operator {
            Operator::Noop => {}
            Operator::IngestInstruction(start, len) => {
                let start = start as usize;
                let end = start
                    .checked_add(len as usize)
                    .ok_or(BoringVaultError::Overflow)?;
                let bytes = ix_data
                    .get(start..end)
                    .ok_or(BoringVaultError::InvalidOperatorRange)?;
                preimage.extend_from_slice(bytes);
            }
            Operator::IngestAccount(index) => {
                let meta = accounts
                    .get(index as usize)
                    .ok_or(BoringVaultError::InvalidOperatorAccount)?;
                preimage.extend_from_slice(meta.pubkey.as_ref());
                preimage.push(meta.is_signer as u8);
                preimage.push(meta.is_writable as u8);
            }
            Operator::IngestInstructionDataSize => {
                preimage.extend_from_slice(&(ix_data.len() as u64).to_le_bytes());
            }
        }
    }

    Ok(hash(&preimage).to_bytes())
}

/// Lowercase hex rendering used when printing digests.
pub fn digest_to_hex(digest: &[u8; 32]) -> String {
    digest.iter().map(|b| format!("{:02x}", b)).collect()
}
