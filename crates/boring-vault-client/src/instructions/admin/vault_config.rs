use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::Instruction;
use anchor_lang::InstructionData;

use crate::instructions::{
    authority_accounts, ConfigureExchangeRateUpdateBounds, SetDepositSubAccount, SetFees,
    SetPayout, SetStrategist, SetWithdrawAuthority, SetWithdrawSubAccount,
    UpdateExchangeRateProvider,
};

fn authority_instruction<T: InstructionData>(signer: &Pubkey, vault_id: u64, args: T) -> Instruction {
    Instruction {
        program_id: crate::ID,
        accounts: authority_accounts(signer, vault_id),
        data: args.data(),
    }
}

pub fn create_update_exchange_rate_provider_instruction(
    signer: &Pubkey,
    vault_id: u64,
    new_provider: &Pubkey,
) -> Instruction {
    authority_instruction(
        signer,
        vault_id,
        UpdateExchangeRateProvider {
            vault_id,
            new_provider: *new_provider,
        },
    )
}

/// Zero key makes withdrawals permissionless.
pub fn create_set_withdraw_authority_instruction(
    signer: &Pubkey,
    vault_id: u64,
    new_authority: &Pubkey,
) -> Instruction {
    authority_instruction(
        signer,
        vault_id,
        SetWithdrawAuthority {
            vault_id,
            new_authority: *new_authority,
        },
    )
}

pub fn create_set_payout_instruction(signer: &Pubkey, vault_id: u64, new_payout: &Pubkey) -> Instruction {
    authority_instruction(
        signer,
        vault_id,
        SetPayout {
            vault_id,
            new_payout: *new_payout,
        },
    )
}

pub fn create_configure_exchange_rate_update_bounds_instruction(
    signer: &Pubkey,
    vault_id: u64,
    upper_bound: u16,
    lower_bound: u16,
    minimum_update_delay: u32,
) -> Instruction {
    authority_instruction(
        signer,
        vault_id,
        ConfigureExchangeRateUpdateBounds {
            vault_id,
            upper_bound,
            lower_bound,
            minimum_update_delay,
        },
    )
}

pub fn create_set_fees_instruction(
    signer: &Pubkey,
    vault_id: u64,
    platform_fee_bps: u16,
    performance_fee_bps: u16,
) -> Instruction {
    authority_instruction(
        signer,
        vault_id,
        SetFees {
            vault_id,
            platform_fee_bps,
            performance_fee_bps,
        },
    )
}

pub fn create_set_strategist_instruction(
    signer: &Pubkey,
    vault_id: u64,
    new_strategist: &Pubkey,
) -> Instruction {
    authority_instruction(
        signer,
        vault_id,
        SetStrategist {
            vault_id,
            new_strategist: *new_strategist,
        },
    )
}

pub fn create_set_deposit_sub_account_instruction(
    signer: &Pubkey,
    vault_id: u64,
    new_sub_account: u8,
) -> Instruction {
    authority_instruction(
        signer,
        vault_id,
        SetDepositSubAccount {
            vault_id,
            new_sub_account,
        },
    )
}

pub fn create_set_withdraw_sub_account_instruction(
    signer: &Pubkey,
    vault_id: u64,
    new_sub_account: u8,
) -> Instruction {
    authority_instruction(
        signer,
        vault_id,
        SetWithdrawSubAccount {
            vault_id,
            new_sub_account,
        },
    )
}
