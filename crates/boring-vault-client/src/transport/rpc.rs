use anchor_lang::prelude::Pubkey;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use eyre::{eyre, Result, WrapErr};
use solana_client::rpc_client::RpcClient;
use solana_sdk::{
    account::Account, hash::Hash, signature::Signature, transaction::Transaction,
    transaction::VersionedTransaction,
};

use crate::transport::Transport;

impl Transport for RpcClient {
    fn get_account(&self, pubkey: &Pubkey) -> Result<Option<Account>> {
        let response = self
            .get_account_with_commitment(pubkey, self.commitment())
            .wrap_err_with(|| format!("Failed to fetch account {}", pubkey))?;

        Ok(response.value)
    }

    fn get_latest_blockhash(&self) -> Result<Hash> {
        RpcClient::get_latest_blockhash(self).wrap_err("Failed to fetch latest blockhash")
    }

    fn get_slot(&self) -> Result<u64> {
        RpcClient::get_slot(self).wrap_err("Failed to fetch slot")
    }

    fn simulate_return_data(&self, transaction: &Transaction) -> Result<Option<Vec<u8>>> {
        let response = self
            .simulate_transaction(transaction)
            .wrap_err("Simulation request failed")?;

        if let Some(err) = response.value.err {
            return Err(eyre!(
                "Simulation failed: {} (logs: {:?})",
                err,
                response.value.logs.unwrap_or_default()
            ));
        }

        match response.value.return_data {
            Some(return_data) => {
                let bytes = STANDARD
                    .decode(&return_data.data.0)
                    .wrap_err("Return data is not valid base64")?;
                Ok(Some(bytes))
            }
            None => Ok(None),
        }
    }

    fn send_and_confirm(&self, transaction: &VersionedTransaction) -> Result<Signature> {
        self.send_and_confirm_transaction(transaction)
            .wrap_err("Failed to send transaction")
    }
}
