use std::time::{SystemTime, UNIX_EPOCH};

use anchor_lang::prelude::*;
use eyre::{eyre, Result};

use crate::{
    builder::Builder,
    components::{
        asset_value_in_base, base_value_in_asset, calculate_fees_owed, check_amount,
        check_deposit_allowed, check_exchange_rate_bounds, check_fees, check_price_freshness,
        check_share_premium, check_withdraw_allowed, is_exchange_rate_update_within_bounds,
        preview_deposit, preview_withdraw, resolve_deploy_args, FeeAccrual,
    },
    instructions::*,
    states::{AssetData, BoringVault},
    transport::Transport,
    utils::{get_share_mint_pda, get_vault_state_pda, BoringVaultError, MaybeSigner, NATIVE},
    view,
};

// Native SOL has no mint account to read decimals from.
const NATIVE_DECIMALS: u8 = 9;

fn unix_now() -> Result<i64> {
    let elapsed = SystemTime::now().duration_since(UNIX_EPOCH)?;
    Ok(elapsed.as_secs() as i64)
}

fn domain<V>(result: std::result::Result<V, BoringVaultError>) -> Result<V> {
    result.map_err(|e| eyre!(e))
}

impl<T: Transport> Builder<T> {
    /// Creates the program config. `program_signer` must be the program's
    /// own keypair.
    pub fn initialize(
        &mut self,
        authority: Pubkey,
        signer: MaybeSigner,
        program_signer: MaybeSigner,
    ) -> Result<()> {
        if program_signer.pubkey() != crate::ID {
            return Err(eyre!(BoringVaultError::ProgramSignerMismatch));
        }

        msg!("Initialize {{authority: {}}}", authority);

        self.instructions
            .push(create_initialize_instruction(&authority, &signer.pubkey()));
        self.add_signer(signer);
        self.add_signer(program_signer);

        Ok(())
    }

    /// Queues a vault deploy and returns the id it will receive. Deploys
    /// queued on the same builder get consecutive ids.
    pub fn deploy(
        &mut self,
        authority: Pubkey,
        signer: MaybeSigner,
        base_asset: Pubkey,
        name: String,
        symbol: String,
        exchange_rate_provider: Option<Pubkey>,
        exchange_rate: u64,
        payout_address: Option<Pubkey>,
        allowed_exchange_rate_change_upper_bound: u16,
        allowed_exchange_rate_change_lower_bound: u16,
        minimum_update_delay_in_seconds: u32,
        platform_fee_bps: Option<u16>,
        performance_fee_bps: Option<u16>,
        withdraw_authority: Option<Pubkey>,
        strategist: Option<Pubkey>,
    ) -> Result<u64> {
        let args = domain(resolve_deploy_args(
            authority,
            name,
            symbol,
            exchange_rate_provider,
            exchange_rate,
            payout_address,
            allowed_exchange_rate_change_upper_bound,
            allowed_exchange_rate_change_lower_bound,
            minimum_update_delay_in_seconds,
            platform_fee_bps,
            performance_fee_bps,
            withdraw_authority,
            strategist,
        ))?;

        let vault_id = self.next_vault_id()?;

        msg!(
            "Deploy {{vault_id: {}, base_asset: {}, name: {}, symbol: {}, exchange_rate: {}}}",
            vault_id,
            base_asset,
            args.name,
            args.symbol,
            args.exchange_rate
        );

        self.instructions.push(create_deploy_instruction(
            &signer.pubkey(),
            vault_id,
            &base_asset,
            args,
        ));
        self.pending_deploys += 1;
        self.add_signer(signer);

        Ok(vault_id)
    }

    pub fn update_asset_data(
        &mut self,
        signer: MaybeSigner,
        vault_id: u64,
        mint: Pubkey,
        allow_deposits: bool,
        allow_withdrawals: bool,
        share_premium_bps: u16,
        is_pegged_to_base_asset: bool,
        price_feed: Pubkey,
        inverse_price_feed: bool,
        max_staleness: u64,
        min_samples: u32,
    ) -> Result<()> {
        domain(check_share_premium(share_premium_bps))?;

        let asset_data = AssetData {
            allow_deposits,
            allow_withdrawals,
            share_premium_bps,
            is_pegged_to_base_asset,
            price_feed,
            inverse_price_feed,
            max_staleness,
            min_samples,
        };

        msg!(
            "UpdateAssetData {{vault_id: {}, mint: {}, allow_deposits: {}, allow_withdrawals: {}}}",
            vault_id,
            mint,
            allow_deposits,
            allow_withdrawals
        );

        self.instructions.push(create_update_asset_data_instruction(
            &signer.pubkey(),
            vault_id,
            &mint,
            asset_data,
        ));
        self.add_signer(signer);

        Ok(())
    }

    pub fn pause(&mut self, signer: MaybeSigner, vault_id: u64) -> Result<()> {
        msg!("Pause {{vault_id: {}}}", vault_id);
        self.instructions
            .push(create_pause_instruction(&signer.pubkey(), vault_id));
        self.add_signer(signer);
        Ok(())
    }

    pub fn unpause(&mut self, signer: MaybeSigner, vault_id: u64) -> Result<()> {
        msg!("Unpause {{vault_id: {}}}", vault_id);
        self.instructions
            .push(create_unpause_instruction(&signer.pubkey(), vault_id));
        self.add_signer(signer);
        Ok(())
    }

    /// First half of the two-step authority handover.
    pub fn transfer_authority(
        &mut self,
        signer: MaybeSigner,
        vault_id: u64,
        pending_authority: Pubkey,
    ) -> Result<()> {
        msg!(
            "TransferAuthority {{vault_id: {}, pending_authority: {}}}",
            vault_id,
            pending_authority
        );
        self.instructions.push(create_transfer_authority_instruction(
            &signer.pubkey(),
            vault_id,
            &pending_authority,
        ));
        self.add_signer(signer);
        Ok(())
    }

    /// Signed by the pending authority.
    pub fn accept_authority(&mut self, signer: MaybeSigner, vault_id: u64) -> Result<()> {
        msg!("AcceptAuthority {{vault_id: {}, new_authority: {}}}", vault_id, signer.pubkey());
        self.instructions
            .push(create_accept_authority_instruction(&signer.pubkey(), vault_id));
        self.add_signer(signer);
        Ok(())
    }

    pub fn close_cpi_digest(
        &mut self,
        signer: MaybeSigner,
        vault_id: u64,
        digest: [u8; 32],
    ) -> Result<()> {
        self.instructions.push(create_close_cpi_digest_instruction(
            &signer.pubkey(),
            vault_id,
            digest,
        ));
        self.add_signer(signer);
        Ok(())
    }

    pub fn update_exchange_rate_provider(
        &mut self,
        signer: MaybeSigner,
        vault_id: u64,
        new_provider: Pubkey,
    ) -> Result<()> {
        msg!(
            "UpdateExchangeRateProvider {{vault_id: {}, new_provider: {}}}",
            vault_id,
            new_provider
        );
        self.instructions
            .push(create_update_exchange_rate_provider_instruction(
                &signer.pubkey(),
                vault_id,
                &new_provider,
            ));
        self.add_signer(signer);
        Ok(())
    }

    /// The zero key makes withdrawals permissionless.
    pub fn set_withdraw_authority(
        &mut self,
        signer: MaybeSigner,
        vault_id: u64,
        new_authority: Pubkey,
    ) -> Result<()> {
        msg!(
            "SetWithdrawAuthority {{vault_id: {}, new_authority: {}}}",
            vault_id,
            new_authority
        );
        self.instructions.push(create_set_withdraw_authority_instruction(
            &signer.pubkey(),
            vault_id,
            &new_authority,
        ));
        self.add_signer(signer);
        Ok(())
    }

    pub fn set_payout(&mut self, signer: MaybeSigner, vault_id: u64, new_payout: Pubkey) -> Result<()> {
        msg!("SetPayout {{vault_id: {}, new_payout: {}}}", vault_id, new_payout);
        self.instructions.push(create_set_payout_instruction(
            &signer.pubkey(),
            vault_id,
            &new_payout,
        ));
        self.add_signer(signer);
        Ok(())
    }

    pub fn configure_exchange_rate_update_bounds(
        &mut self,
        signer: MaybeSigner,
        vault_id: u64,
        upper_bound: u16,
        lower_bound: u16,
        minimum_update_delay: u32,
    ) -> Result<()> {
        domain(check_exchange_rate_bounds(upper_bound, lower_bound))?;

        msg!(
            "ConfigureExchangeRateUpdateBounds {{vault_id: {}, upper_bound: {}, lower_bound: {}, minimum_update_delay: {}}}",
            vault_id,
            upper_bound,
            lower_bound,
            minimum_update_delay
        );

        self.instructions
            .push(create_configure_exchange_rate_update_bounds_instruction(
                &signer.pubkey(),
                vault_id,
                upper_bound,
                lower_bound,
                minimum_update_delay,
            ));
        self.add_signer(signer);
        Ok(())
    }

    pub fn set_fees(
        &mut self,
        signer: MaybeSigner,
        vault_id: u64,
        platform_fee_bps: u16,
        performance_fee_bps: u16,
    ) -> Result<()> {
        domain(check_fees(platform_fee_bps, performance_fee_bps))?;

        msg!(
            "SetFees {{vault_id: {}, platform_fee_bps: {}, performance_fee_bps: {}}}",
            vault_id,
            platform_fee_bps,
            performance_fee_bps
        );

        self.instructions.push(create_set_fees_instruction(
            &signer.pubkey(),
            vault_id,
            platform_fee_bps,
            performance_fee_bps,
        ));
        self.add_signer(signer);
        Ok(())
    }

    pub fn set_strategist(
        &mut self,
        signer: MaybeSigner,
        vault_id: u64,
        new_strategist: Pubkey,
    ) -> Result<()> {
        msg!("SetStrategist {{vault_id: {}, new_strategist: {}}}", vault_id, new_strategist);
        self.instructions.push(create_set_strategist_instruction(
            &signer.pubkey(),
            vault_id,
            &new_strategist,
        ));
        self.add_signer(signer);
        Ok(())
    }

    pub fn set_deposit_sub_account(
        &mut self,
        signer: MaybeSigner,
        vault_id: u64,
        new_sub_account: u8,
    ) -> Result<()> {
        msg!(
            "SetDepositSubAccount {{vault_id: {}, new_sub_account: {}}}",
            vault_id,
            new_sub_account
        );
        self.instructions.push(create_set_deposit_sub_account_instruction(
            &signer.pubkey(),
            vault_id,
            new_sub_account,
        ));
        self.add_signer(signer);
        Ok(())
    }

    pub fn set_withdraw_sub_account(
        &mut self,
        signer: MaybeSigner,
        vault_id: u64,
        new_sub_account: u8,
    ) -> Result<()> {
        msg!(
            "SetWithdrawSubAccount {{vault_id: {}, new_sub_account: {}}}",
            vault_id,
            new_sub_account
        );
        self.instructions.push(create_set_withdraw_sub_account_instruction(
            &signer.pubkey(),
            vault_id,
            new_sub_account,
        ));
        self.add_signer(signer);
        Ok(())
    }

    pub fn update_exchange_rate(
        &mut self,
        signer: MaybeSigner,
        vault_id: u64,
        new_exchange_rate: u64,
    ) -> Result<()> {
        if new_exchange_rate == 0 {
            return Err(eyre!(BoringVaultError::ZeroExchangeRate));
        }

        msg!(
            "UpdateExchangeRate {{vault_id: {}, new_exchange_rate: {}}}",
            vault_id,
            new_exchange_rate
        );

        self.instructions.push(create_update_exchange_rate_instruction(
            &signer.pubkey(),
            vault_id,
            new_exchange_rate,
        ));
        self.add_signer(signer);
        Ok(())
    }

    /// Pays owed fees in the base asset from `sub_account` to the vault's
    /// payout address.
    pub fn claim_fees_in_base(
        &mut self,
        signer: MaybeSigner,
        vault_id: u64,
        sub_account: u8,
    ) -> Result<()> {
        let vault = view::get_vault_state(&self.transport, vault_id)?;
        let base_asset = vault.teller.base_asset;
        let token_program = view::get_token_program(&self.transport, &base_asset)?;

        msg!(
            "ClaimFeesInBase {{vault_id: {}, sub_account: {}, fees_owed: {}}}",
            vault_id,
            sub_account,
            vault.teller.fees_owed_in_base_asset
        );

        self.instructions.push(create_claim_fees_in_base_instruction(
            &signer.pubkey(),
            vault_id,
            sub_account,
            &base_asset,
            &vault.teller.payout_address,
            &token_program,
        ));
        self.add_signer(signer);
        Ok(())
    }

    pub fn deposit_sol(
        &mut self,
        signer: MaybeSigner,
        vault_id: u64,
        amount: u64,
        min_mint_amount: u64,
    ) -> Result<()> {
        domain(check_amount(amount))?;
        let (vault, asset_data) = self.deposit_target(vault_id, &NATIVE)?;

        msg!(
            "DepositSol {{vault_id: {}, amount: {}, min_mint_amount: {}}}",
            vault_id,
            amount,
            min_mint_amount
        );

        self.instructions.push(create_deposit_sol_instruction(
            &signer.pubkey(),
            DepositAccounts {
                deposit_sub_account: vault.config.deposit_sub_account,
                price_feed: asset_data.price_feed,
            },
            DepositArgs {
                vault_id,
                deposit_amount: amount,
                min_mint_amount,
            },
        ));
        self.add_signer(signer);
        Ok(())
    }

    pub fn deposit(
        &mut self,
        signer: MaybeSigner,
        vault_id: u64,
        mint: Pubkey,
        amount: u64,
        min_mint_amount: u64,
    ) -> Result<()> {
        domain(check_amount(amount))?;
        let (vault, asset_data) = self.deposit_target(vault_id, &mint)?;
        let token_program = view::get_token_program(&self.transport, &mint)?;

        msg!(
            "Deposit {{vault_id: {}, mint: {}, amount: {}, min_mint_amount: {}}}",
            vault_id,
            mint,
            amount,
            min_mint_amount
        );

        self.instructions.push(create_deposit_instruction(
            &signer.pubkey(),
            &mint,
            &token_program,
            DepositAccounts {
                deposit_sub_account: vault.config.deposit_sub_account,
                price_feed: asset_data.price_feed,
            },
            DepositArgs {
                vault_id,
                deposit_amount: amount,
                min_mint_amount,
            },
        ));
        self.add_signer(signer);
        Ok(())
    }

    pub fn withdraw(
        &mut self,
        signer: MaybeSigner,
        vault_id: u64,
        mint: Pubkey,
        share_amount: u64,
        min_asset_amount: u64,
    ) -> Result<()> {
        domain(check_amount(share_amount))?;
        let vault = view::get_vault_state(&self.transport, vault_id)?;
        let asset_data = view::get_asset_data(&self.transport, vault_id, &mint)?;
        domain(check_withdraw_allowed(&vault, &asset_data))?;
        let token_program = view::get_token_program(&self.transport, &mint)?;

        msg!(
            "Withdraw {{vault_id: {}, mint: {}, share_amount: {}, min_asset_amount: {}}}",
            vault_id,
            mint,
            share_amount,
            min_asset_amount
        );

        self.instructions.push(create_withdraw_instruction(
            &signer.pubkey(),
            &mint,
            &token_program,
            vault.config.withdraw_sub_account,
            &asset_data.price_feed,
            WithdrawArgs {
                vault_id,
                share_amount,
                min_asset_amount,
            },
        ));
        self.add_signer(signer);
        Ok(())
    }

    /// Shares a deposit of `amount` of `mint` would mint at the current
    /// exchange rate and price. Use `apply_slippage` on the result to get a
    /// `min_mint_amount`.
    pub fn preview_deposit(&self, vault_id: u64, mint: Pubkey, amount: u64) -> Result<u64> {
        let vault = view::get_vault_state(&self.transport, vault_id)?;
        let asset_data = view::get_asset_data(&self.transport, vault_id, &mint)?;
        let value_in_base = self.convert_value(&vault, &asset_data, &mint, amount, false)?;

        domain(preview_deposit(
            value_in_base,
            vault.teller.exchange_rate,
            vault.teller.decimals,
            asset_data.share_premium_bps,
        ))
    }

    /// Amount of `mint` burning `share_amount` shares would pay out.
    pub fn preview_withdraw(&self, vault_id: u64, mint: Pubkey, share_amount: u64) -> Result<u64> {
        let vault = view::get_vault_state(&self.transport, vault_id)?;
        let asset_data = view::get_asset_data(&self.transport, vault_id, &mint)?;
        let base_value = domain(preview_withdraw(
            share_amount,
            vault.teller.exchange_rate,
            vault.teller.decimals,
        ))?;

        self.convert_value(&vault, &asset_data, &mint, base_value, true)
    }

    /// Fees publishing `new_exchange_rate` now would accrue, and whether the
    /// program would take the update without pausing the vault.
    pub fn preview_exchange_rate_update(
        &self,
        vault_id: u64,
        new_exchange_rate: u64,
    ) -> Result<(FeeAccrual, bool)> {
        if new_exchange_rate == 0 {
            return Err(eyre!(BoringVaultError::ZeroExchangeRate));
        }

        let vault = view::get_vault_state(&self.transport, vault_id)?;
        let share_mint = get_share_mint_pda(&get_vault_state_pda(vault_id));
        let total_shares = view::get_mint_supply(&self.transport, &share_mint)?;
        let now = u64::try_from(unix_now()?)?;

        let fees = domain(calculate_fees_owed(
            &vault.teller,
            new_exchange_rate,
            total_shares,
            now,
        ))?;
        let within_bounds = domain(is_exchange_rate_update_within_bounds(
            &vault.teller,
            new_exchange_rate,
            now,
        ))?;

        msg!(
            "PreviewExchangeRateUpdate {{vault_id: {}, platform_fee: {}, performance_fee: {}, within_bounds: {}}}",
            vault_id,
            fees.platform_fee,
            fees.performance_fee,
            within_bounds
        );
        Ok((fees, within_bounds))
    }

    fn deposit_target(&self, vault_id: u64, mint: &Pubkey) -> Result<(BoringVault, AssetData)> {
        let vault = view::get_vault_state(&self.transport, vault_id)?;
        let asset_data = view::get_asset_data(&self.transport, vault_id, mint)?;
        domain(check_deposit_allowed(&vault, &asset_data))?;
        Ok((vault, asset_data))
    }

    // Converts between `mint` and the base asset; `to_asset` flips the direction.
    fn convert_value(
        &self,
        vault: &BoringVault,
        asset_data: &AssetData,
        mint: &Pubkey,
        amount: u64,
        to_asset: bool,
    ) -> Result<u64> {
        if *mint == vault.teller.base_asset {
            return Ok(amount);
        }

        let base_decimals = vault.teller.decimals;
        let asset_decimals = if *mint == NATIVE {
            NATIVE_DECIMALS
        } else {
            view::get_mint_decimals(&self.transport, mint)?
        };

        if asset_data.is_pegged_to_base_asset {
            // 1:1 in whole units, rescaled between decimals
            let (from, to) = if to_asset {
                (base_decimals, asset_decimals)
            } else {
                (asset_decimals, base_decimals)
            };
            let from_scale = 10u64
                .checked_pow(from as u32)
                .ok_or_else(|| eyre!(BoringVaultError::OverflowInMul))?;
            let to_scale = 10u64
                .checked_pow(to as u32)
                .ok_or_else(|| eyre!(BoringVaultError::OverflowInMul))?;
            return domain(crate::utils::mul_div(amount, to_scale, from_scale));
        }

        let price_update = view::get_price_update(&self.transport, &asset_data.price_feed)?;
        let message = &price_update.price_message;
        domain(check_price_freshness(message, unix_now()?, asset_data.max_staleness))?;

        let inverse = asset_data.inverse_price_feed;
        domain(if to_asset {
            base_value_in_asset(amount, asset_decimals, base_decimals, message, inverse)
        } else {
            asset_value_in_base(amount, asset_decimals, base_decimals, message, inverse)
        })
    }
}
