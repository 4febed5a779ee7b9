use anchor_lang::prelude::*;
use anchor_spl::token;
use eyre::{eyre, Result};

use crate::{
    builder::Builder,
    components::check_amount,
    instructions::create_ata_idempotent_instruction,
    manage::MintJitoSol,
    transport::Transport,
    utils::{get_ata, get_vault_pda, MaybeSigner, JITO_SOL_MINT},
};

impl<T: Transport> Builder<T> {
    /// Stakes `amount` lamports of the sub-account into the Jito pool.
    pub fn mint_jito_sol(
        &mut self,
        signer: MaybeSigner,
        authority: Option<MaybeSigner>,
        vault_id: u64,
        sub_account: u8,
        amount: u64,
    ) -> Result<()> {
        check_amount(amount).map_err(|e| eyre!(e))?;

        let vault_pda = get_vault_pda(vault_id, sub_account);
        if !self
            .transport
            .account_exists(&get_ata(&vault_pda, &JITO_SOL_MINT, &token::ID))?
        {
            self.instructions.push(create_ata_idempotent_instruction(
                &signer.pubkey(),
                &vault_pda,
                &JITO_SOL_MINT,
                &token::ID,
            ));
        }

        msg!(
            "MintJitoSol {{vault_id: {}, sub_account: {}, amount: {}}}",
            vault_id,
            sub_account,
            amount
        );

        let eix = MintJitoSol {
            vault_id,
            sub_account,
            amount,
        };
        self.push_manage(&signer, authority.as_ref(), &eix)?;
        self.add_signers(signer, authority);

        Ok(())
    }
}
