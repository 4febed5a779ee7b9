use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::AccountMeta;
use anchor_lang::system_program;
use anchor_spl::token;

use crate::{
    manage::{external_instruction_common, ExternalInstruction},
    states::{Operator, Operators},
    utils::{
        get_ata, get_vault_pda, JITO_FEE_ACCOUNT, JITO_RESERVE_STAKE_ACCOUNT, JITO_SOL_MINT,
        JITO_STAKE_POOL, JITO_STAKE_POOL_WITHDRAW_AUTHORITY, STAKE_POOL_PROGRAM_ID,
    },
};

// Stake pool `DepositSol`
const STAKE_POOL_DEPOSIT_SOL: u8 = 14;

/// Stakes sub-account SOL into the Jito stake pool, minting JitoSOL into the
/// sub-account's associated token account.
pub struct MintJitoSol {
    pub vault_id: u64,
    pub sub_account: u8,
    pub amount: u64,
}

impl ExternalInstruction for MintJitoSol {
    external_instruction_common!();

    fn ix_program_id(&self) -> Pubkey {
        STAKE_POOL_PROGRAM_ID
    }

    fn ix_data(&self) -> Vec<u8> {
        let mut data = vec![STAKE_POOL_DEPOSIT_SOL];
        data.extend_from_slice(&self.amount.to_le_bytes());
        data
    }

    fn ix_remaining_accounts(&self) -> Vec<AccountMeta> {
        let vault_pda = get_vault_pda(self.vault_id, self.sub_account);
        let jito_sol_ata = get_ata(&vault_pda, &JITO_SOL_MINT, &token::ID);

        vec![
            AccountMeta::new(JITO_STAKE_POOL, false),
            AccountMeta::new_readonly(JITO_STAKE_POOL_WITHDRAW_AUTHORITY, false),
            AccountMeta::new(JITO_RESERVE_STAKE_ACCOUNT, false),
            AccountMeta::new(vault_pda, false),    // depositor
            AccountMeta::new(jito_sol_ata, false), // pool tokens destination
            AccountMeta::new(JITO_FEE_ACCOUNT, false),
            AccountMeta::new(jito_sol_ata, false), // referral fee destination
            AccountMeta::new(JITO_SOL_MINT, false),
            AccountMeta::new_readonly(system_program::ID, false),
            AccountMeta::new_readonly(token::ID, false),
        ]
    }

    fn ix_operators(&self) -> Operators {
        Operators {
            operators: vec![
                Operator::IngestInstruction(0, 1),
                Operator::IngestAccount(3),
                Operator::IngestAccount(4),
                Operator::IngestInstructionDataSize,
            ],
        }
    }
}
