use anchor_lang::prelude::*;
use anchor_spl::token;
use eyre::{eyre, Result};

use crate::{
    builder::Builder,
    components::{check_amount, check_distinct_sub_accounts},
    instructions::{create_ata_idempotent_instruction, create_sync_native_instruction},
    manage::{CloseAccount, CreateAccountWithSeed, TransferSol, TransferSolBetweenSubAccounts},
    transport::Transport,
    utils::{get_ata, get_vault_pda, MaybeSigner, WSOL_MINT},
};

impl<T: Transport> Builder<T> {
    pub fn transfer_sol_between_sub_accounts(
        &mut self,
        signer: MaybeSigner,
        authority: Option<MaybeSigner>,
        vault_id: u64,
        sub_account: u8,
        to_sub_account: u8,
        amount: u64,
    ) -> Result<()> {
        check_distinct_sub_accounts(sub_account, to_sub_account).map_err(|e| eyre!(e))?;
        check_amount(amount).map_err(|e| eyre!(e))?;

        msg!(
            "TransferSolBetweenSubAccounts {{vault_id: {}, from: {}, to: {}, amount: {}}}",
            vault_id,
            sub_account,
            to_sub_account,
            amount
        );

        let eix = TransferSolBetweenSubAccounts {
            vault_id,
            sub_account,
            to_sub_account,
            amount,
        };
        self.push_manage(&signer, authority.as_ref(), &eix)?;
        self.add_signers(signer, authority);

        Ok(())
    }

    /// Moves `amount` lamports into the sub-account's wSOL account and makes
    /// the token balance reflect them.
    pub fn wrap_sol(
        &mut self,
        signer: MaybeSigner,
        authority: Option<MaybeSigner>,
        vault_id: u64,
        sub_account: u8,
        amount: u64,
    ) -> Result<()> {
        check_amount(amount).map_err(|e| eyre!(e))?;

        let vault_pda = get_vault_pda(vault_id, sub_account);
        let wsol_ata = get_ata(&vault_pda, &WSOL_MINT, &token::ID);

        msg!(
            "WrapSol {{vault_id: {}, sub_account: {}, amount: {}}}",
            vault_id,
            sub_account,
            amount
        );

        let eix = TransferSol {
            vault_id,
            sub_account,
            to: wsol_ata,
            amount,
        };

        // Creating the account picks up the lamports already in it; an
        // existing account needs an explicit sync.
        self.all_or_nothing(|builder| {
            builder.push_manage(&signer, authority.as_ref(), &eix)?;
            if builder.transport.account_exists(&wsol_ata)? {
                builder
                    .instructions
                    .push(create_sync_native_instruction(&wsol_ata, &token::ID)?);
            } else {
                builder.instructions.push(create_ata_idempotent_instruction(
                    &signer.pubkey(),
                    &vault_pda,
                    &WSOL_MINT,
                    &token::ID,
                ));
            }
            Ok(())
        })?;
        self.add_signers(signer, authority);

        Ok(())
    }

    /// Closes the sub-account's wSOL account, returning every lamport to the
    /// sub-account.
    pub fn unwrap_sol(
        &mut self,
        signer: MaybeSigner,
        authority: Option<MaybeSigner>,
        vault_id: u64,
        sub_account: u8,
    ) -> Result<()> {
        let vault_pda = get_vault_pda(vault_id, sub_account);

        msg!("UnwrapSol {{vault_id: {}, sub_account: {}}}", vault_id, sub_account);

        let eix = CloseAccount {
            vault_id,
            sub_account,
            account: get_ata(&vault_pda, &WSOL_MINT, &token::ID),
            token_program: token::ID,
        };
        self.push_manage(&signer, authority.as_ref(), &eix)?;
        self.add_signers(signer, authority);

        Ok(())
    }

    /// Creates an account owned by `owner` at the address derived from the
    /// sub-account and `seed`, paid for by the sub-account.
    ///
    /// # Returns
    /// * `Result<Pubkey>` - Address of the new account
    pub fn create_account_with_seed(
        &mut self,
        signer: MaybeSigner,
        authority: Option<MaybeSigner>,
        vault_id: u64,
        sub_account: u8,
        seed: String,
        lamports: u64,
        space: u64,
        owner: Pubkey,
    ) -> Result<Pubkey> {
        let eix = CreateAccountWithSeed::new(vault_id, sub_account, seed, lamports, space, owner)
            .map_err(|e| eyre!(e))?;
        let address = eix.address();

        msg!(
            "CreateAccountWithSeed {{vault_id: {}, sub_account: {}, address: {}, space: {}, owner: {}}}",
            vault_id,
            sub_account,
            address,
            space,
            owner
        );

        self.push_manage(&signer, authority.as_ref(), &eix)?;
        self.add_signers(signer, authority);

        Ok(address)
    }
}
