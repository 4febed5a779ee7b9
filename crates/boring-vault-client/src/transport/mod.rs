use anchor_lang::prelude::Pubkey;
use eyre::Result;
use solana_sdk::{
    account::Account, hash::Hash, signature::Signature, transaction::Transaction,
    transaction::VersionedTransaction,
};

mod rpc;

/// The chain access the builder needs. Implemented for `RpcClient`; tests
/// run the builder against an in-memory chain instead.
pub trait Transport {
    /// `None` when the account does not exist.
    fn get_account(&self, pubkey: &Pubkey) -> Result<Option<Account>>;

    fn get_latest_blockhash(&self) -> Result<Hash>;

    fn get_slot(&self) -> Result<u64>;

    /// Simulates `transaction` and returns the program return data, if any.
    fn simulate_return_data(&self, transaction: &Transaction) -> Result<Option<Vec<u8>>>;

    fn send_and_confirm(&self, transaction: &VersionedTransaction) -> Result<Signature>;

    fn account_exists(&self, pubkey: &Pubkey) -> Result<bool> {
        Ok(self.get_account(pubkey)?.is_some())
    }
}
