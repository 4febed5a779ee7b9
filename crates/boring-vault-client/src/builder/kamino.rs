use anchor_lang::prelude::*;
use eyre::{eyre, Result};

use crate::{
    builder::Builder,
    components::check_amount,
    instructions::{create_ata_idempotent_instruction, create_lookup_table_instruction},
    manage::{
        ExternalInstruction, InitObligation, InitObligationFarmsForReserve, InitUserMetadata,
        RefreshObligation, RefreshObligationFarmsForReserve, FARM_MODE_COLLATERAL,
        FARM_MODE_DEBT,
    },
    transport::Transport,
    utils::{get_vault_pda, MaybeSigner},
    view,
};

impl<T: Transport> Builder<T> {
    /// Creates a lookup table owned by the sub-account and registers the
    /// sub-account as a Kamino user.
    pub fn init_user_metadata(
        &mut self,
        signer: MaybeSigner,
        authority: Option<MaybeSigner>,
        vault_id: u64,
        sub_account: u8,
    ) -> Result<()> {
        let vault_pda = get_vault_pda(vault_id, sub_account);
        let recent_slot = self.transport.get_slot()?;
        let (create_lookup_table, lookup_table) =
            create_lookup_table_instruction(&vault_pda, &signer.pubkey(), recent_slot);
        self.instructions.push(create_lookup_table);

        msg!(
            "InitUserMetadata {{vault_id: {}, sub_account: {}, lookup_table: {}}}",
            vault_id,
            sub_account,
            lookup_table
        );

        let eix = InitUserMetadata {
            vault_id,
            sub_account,
            lookup_table,
        };
        self.push_manage(&signer, authority.as_ref(), &eix)?;
        self.add_signers(signer, authority);

        Ok(())
    }

    pub fn init_obligation(
        &mut self,
        signer: MaybeSigner,
        authority: Option<MaybeSigner>,
        vault_id: u64,
        sub_account: u8,
        tag: u8,
        id: u8,
    ) -> Result<()> {
        let lending_market = self.kamino()?.lending_market;

        msg!(
            "InitObligation {{vault_id: {}, sub_account: {}, tag: {}, id: {}}}",
            vault_id,
            sub_account,
            tag,
            id
        );

        let eix = InitObligation {
            vault_id,
            sub_account,
            lending_market,
            tag,
            id,
        };
        self.push_manage(&signer, authority.as_ref(), &eix)?;
        self.add_signers(signer, authority);

        Ok(())
    }

    /// Joins the lend reserve's collateral farm (`FARM_MODE_COLLATERAL`) or the
    /// borrow reserve's debt farm (`FARM_MODE_DEBT`).
    pub fn init_obligation_farms_for_reserve(
        &mut self,
        signer: MaybeSigner,
        authority: Option<MaybeSigner>,
        vault_id: u64,
        sub_account: u8,
        tag: u8,
        id: u8,
        mode: u8,
    ) -> Result<()> {
        let (lending_market, reserve, reserve_farm_state) = self.reserve_farm(mode)?;
        let eix = InitObligationFarmsForReserve {
            vault_id,
            sub_account,
            lending_market,
            reserve,
            reserve_farm_state,
            tag,
            id,
            mode,
        };

        msg!(
            "InitObligationFarmsForReserve {{vault_id: {}, reserve: {}, mode: {}}}",
            vault_id,
            eix.reserve,
            mode
        );

        self.push_manage(&signer, authority.as_ref(), &eix)?;
        self.add_signers(signer, authority);

        Ok(())
    }

    /// Refreshes the borrow and lend reserves. Permissionless, so issued
    /// directly rather than through the vault.
    pub fn refresh_reserves(
        &mut self,
        signer: MaybeSigner,
        vault_id: u64,
        sub_account: u8,
    ) -> Result<()> {
        let refreshes = self
            .kamino()?
            .refresh_reserve_instructions(vault_id, sub_account);
        self.instructions
            .extend(refreshes.iter().map(|eix| eix.to_instruction()));
        self.add_signer(signer);

        Ok(())
    }

    pub fn refresh_price_list(
        &mut self,
        signer: MaybeSigner,
        vault_id: u64,
        sub_account: u8,
    ) -> Result<()> {
        let eix = self
            .kamino()?
            .refresh_price_list_instruction(vault_id, sub_account);
        self.instructions.push(eix.to_instruction());
        self.add_signer(signer);

        Ok(())
    }

    /// Refreshes the obligation against the reserves it currently holds,
    /// read from chain. Permissionless, so issued directly.
    pub fn refresh_obligation(
        &mut self,
        signer: MaybeSigner,
        vault_id: u64,
        sub_account: u8,
        tag: u8,
        id: u8,
    ) -> Result<()> {
        let eix = self.refresh_obligation_instruction(vault_id, sub_account, tag, id)?;
        self.instructions.push(eix.to_instruction());
        self.add_signer(signer);

        Ok(())
    }

    /// The sub-account is the crank, so this goes through the vault.
    pub fn refresh_obligation_farms_for_reserve(
        &mut self,
        signer: MaybeSigner,
        authority: Option<MaybeSigner>,
        vault_id: u64,
        sub_account: u8,
        tag: u8,
        id: u8,
        mode: u8,
    ) -> Result<()> {
        let (lending_market, reserve, reserve_farm_state) = self.reserve_farm(mode)?;
        let eix = RefreshObligationFarmsForReserve {
            vault_id,
            sub_account,
            lending_market,
            reserve,
            reserve_farm_state,
            tag,
            id,
            mode,
        };
        self.push_manage(&signer, authority.as_ref(), &eix)?;
        self.add_signers(signer, authority);

        Ok(())
    }

    /// Deposits `amount` of the lend reserve's liquidity mint as obligation
    /// collateral, after the refreshes Kamino requires.
    pub fn lend(
        &mut self,
        signer: MaybeSigner,
        authority: Option<MaybeSigner>,
        vault_id: u64,
        sub_account: u8,
        tag: u8,
        id: u8,
        amount: u64,
    ) -> Result<()> {
        check_amount(amount).map_err(|e| eyre!(e))?;
        let mint = self.kamino()?.lend.reserve_liquidity_mint;
        let token_program = view::get_token_program(&self.transport, &mint)?;
        let eix = self
            .kamino()?
            .lend_instruction(vault_id, sub_account, tag, id, amount, token_program);

        msg!(
            "KaminoLend {{vault_id: {}, reserve: {}, amount: {}, token_program: {}}}",
            vault_id,
            eix.reserve,
            amount,
            token_program
        );

        self.all_or_nothing(|builder| {
            builder.push_kamino_refreshes(
                &signer,
                authority.as_ref(),
                vault_id,
                sub_account,
                tag,
                id,
                FARM_MODE_COLLATERAL,
            )?;
            builder.push_manage(&signer, authority.as_ref(), &eix)
        })?;
        self.add_signers(signer, authority);

        Ok(())
    }

    /// Borrows `amount` from the borrow reserve into the sub-account, after
    /// the refreshes Kamino requires. The sub-account's token account is
    /// created first if needed.
    pub fn borrow(
        &mut self,
        signer: MaybeSigner,
        authority: Option<MaybeSigner>,
        vault_id: u64,
        sub_account: u8,
        tag: u8,
        id: u8,
        amount: u64,
    ) -> Result<()> {
        check_amount(amount).map_err(|e| eyre!(e))?;
        let mint = self.kamino()?.borrow.reserve_source_liquidity_mint;
        let token_program = view::get_token_program(&self.transport, &mint)?;
        let eix = self
            .kamino()?
            .borrow_instruction(vault_id, sub_account, tag, id, amount, token_program);

        msg!(
            "KaminoBorrow {{vault_id: {}, reserve: {}, amount: {}, token_program: {}}}",
            vault_id,
            eix.reserve,
            amount,
            token_program
        );

        self.all_or_nothing(|builder| {
            if !builder.transport.account_exists(&eix.destination())? {
                builder.instructions.push(create_ata_idempotent_instruction(
                    &signer.pubkey(),
                    &get_vault_pda(vault_id, sub_account),
                    &mint,
                    &token_program,
                ));
            }
            builder.push_kamino_refreshes(
                &signer,
                authority.as_ref(),
                vault_id,
                sub_account,
                tag,
                id,
                FARM_MODE_DEBT,
            )?;
            builder.push_manage(&signer, authority.as_ref(), &eix)
        })?;
        self.add_signers(signer, authority);

        Ok(())
    }

    // Scope prices, borrow and lend reserves, the obligation, then the
    // farm of the reserve being used when it has one. Kamino looks for the
    // reserve and obligation refreshes among the transaction's top-level
    // instructions.
    fn push_kamino_refreshes(
        &mut self,
        signer: &MaybeSigner,
        authority: Option<&MaybeSigner>,
        vault_id: u64,
        sub_account: u8,
        tag: u8,
        id: u8,
        farm_mode: u8,
    ) -> Result<()> {
        let kamino = self.kamino()?;
        let price_list = kamino.refresh_price_list_instruction(vault_id, sub_account);
        let reserves = kamino.refresh_reserve_instructions(vault_id, sub_account);
        let obligation = self.refresh_obligation_instruction(vault_id, sub_account, tag, id)?;

        self.instructions.push(price_list.to_instruction());
        self.instructions
            .extend(reserves.iter().map(|eix| eix.to_instruction()));
        self.instructions.push(obligation.to_instruction());

        if let (lending_market, reserve, Some(reserve_farm_state)) =
            self.strategy_reserve(farm_mode)?
        {
            let farms = RefreshObligationFarmsForReserve {
                vault_id,
                sub_account,
                lending_market,
                reserve,
                reserve_farm_state,
                tag,
                id,
                mode: farm_mode,
            };
            self.push_manage(signer, authority, &farms)?;
        }

        Ok(())
    }

    fn refresh_obligation_instruction(
        &self,
        vault_id: u64,
        sub_account: u8,
        tag: u8,
        id: u8,
    ) -> Result<RefreshObligation> {
        let lending_market = self.kamino()?.lending_market;
        let reserves = view::get_sub_account_obligation(
            &self.transport,
            vault_id,
            sub_account,
            &lending_market,
            tag,
            id,
        )?
        .map(|obligation| obligation.active_reserves())
        .unwrap_or_default();

        Ok(RefreshObligation {
            vault_id,
            sub_account,
            lending_market,
            tag,
            id,
            reserves,
        })
    }

    // Market, reserve and optional farm state of the lend strategy for
    // collateral farms, of the borrow strategy for debt farms.
    fn strategy_reserve(&self, mode: u8) -> Result<(Pubkey, Pubkey, Option<Pubkey>)> {
        let kamino = self.kamino()?;
        let (reserve, reserve_farm_state) = if mode == FARM_MODE_COLLATERAL {
            (kamino.lend.reserve, kamino.lend.reserve_farm_state)
        } else {
            (kamino.borrow.reserve, kamino.borrow.reserve_farm_state)
        };

        Ok((kamino.lending_market, reserve, reserve_farm_state))
    }

    fn reserve_farm(&self, mode: u8) -> Result<(Pubkey, Pubkey, Pubkey)> {
        let (lending_market, reserve, reserve_farm_state) = self.strategy_reserve(mode)?;
        let reserve_farm_state =
            reserve_farm_state.ok_or_else(|| eyre!("Reserve {} has no farm", reserve))?;

        Ok((lending_market, reserve, reserve_farm_state))
    }
}
