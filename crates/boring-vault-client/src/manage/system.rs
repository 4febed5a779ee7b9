use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::AccountMeta;
use anchor_lang::system_program;
use anchor_spl::token_2022::spl_token_2022::instruction::TokenInstruction;
#[allow(deprecated)]
use solana_sdk::system_instruction;

use crate::{
    manage::{external_instruction_common, ExternalInstruction},
    states::{Operator, Operators},
    utils::{get_vault_pda, BoringVaultError},
};

/// Moves lamports from a sub-account to any address.
pub struct TransferSol {
    pub vault_id: u64,
    pub sub_account: u8,
    pub to: Pubkey,
    pub amount: u64,
}

impl ExternalInstruction for TransferSol {
    external_instruction_common!();

    fn ix_program_id(&self) -> Pubkey {
        system_program::ID
    }

    fn ix_data(&self) -> Vec<u8> {
        let from = get_vault_pda(self.vault_id, self.sub_account);
        system_instruction::transfer(&from, &self.to, self.amount).data
    }

    fn ix_remaining_accounts(&self) -> Vec<AccountMeta> {
        let from = get_vault_pda(self.vault_id, self.sub_account);
        vec![
            AccountMeta::new(from, false),
            AccountMeta::new(self.to, false),
            AccountMeta::new_readonly(system_program::ID, false),
        ]
    }

    // Pins the destination, not the amount.
    fn ix_operators(&self) -> Operators {
        Operators {
            operators: vec![
                Operator::IngestInstruction(0, 4),
                Operator::IngestAccount(1),
                Operator::IngestInstructionDataSize,
            ],
        }
    }
}

/// Moves lamports between two sub-accounts of the same vault.
pub struct TransferSolBetweenSubAccounts {
    pub vault_id: u64,
    pub sub_account: u8,
    pub to_sub_account: u8,
    pub amount: u64,
}

impl ExternalInstruction for TransferSolBetweenSubAccounts {
    external_instruction_common!();

    fn ix_program_id(&self) -> Pubkey {
        system_program::ID
    }

    fn ix_data(&self) -> Vec<u8> {
        let from = get_vault_pda(self.vault_id, self.sub_account);
        let to = get_vault_pda(self.vault_id, self.to_sub_account);
        system_instruction::transfer(&from, &to, self.amount).data
    }

    fn ix_remaining_accounts(&self) -> Vec<AccountMeta> {
        let from = get_vault_pda(self.vault_id, self.sub_account);
        let to = get_vault_pda(self.vault_id, self.to_sub_account);
        vec![
            AccountMeta::new(from, false),
            AccountMeta::new(to, false),
            AccountMeta::new_readonly(system_program::ID, false),
        ]
    }

    fn ix_operators(&self) -> Operators {
        Operators {
            operators: vec![
                Operator::IngestInstruction(0, 4),
                Operator::IngestAccount(1),
                Operator::IngestInstructionDataSize,
            ],
        }
    }
}

/// Closes a token account owned by a sub-account, returning its lamports to
/// the sub-account. Closing the wSOL account unwraps SOL.
pub struct CloseAccount {
    pub vault_id: u64,
    pub sub_account: u8,
    pub account: Pubkey,
    pub token_program: Pubkey,
}

impl ExternalInstruction for CloseAccount {
    external_instruction_common!();

    fn ix_program_id(&self) -> Pubkey {
        self.token_program
    }

    fn ix_data(&self) -> Vec<u8> {
        TokenInstruction::CloseAccount.pack()
    }

    fn ix_remaining_accounts(&self) -> Vec<AccountMeta> {
        let vault_pda = get_vault_pda(self.vault_id, self.sub_account);
        vec![
            AccountMeta::new(self.account, false),       // account to close
            AccountMeta::new(vault_pda, false),          // destination
            AccountMeta::new_readonly(vault_pda, false), // owner
        ]
    }

    fn ix_operators(&self) -> Operators {
        Operators {
            operators: vec![
                Operator::IngestInstruction(0, 1),
                Operator::IngestAccount(1),
                Operator::IngestInstructionDataSize,
            ],
        }
    }
}

/// Creates an account at `Pubkey::create_with_seed(sub_account, seed, owner)`
/// funded by the sub-account, which is also the base.
pub struct CreateAccountWithSeed {
    vault_id: u64,
    sub_account: u8,
    seed: String,
    lamports: u64,
    space: u64,
    owner: Pubkey,
    address: Pubkey,
}

impl CreateAccountWithSeed {
    pub fn new(
        vault_id: u64,
        sub_account: u8,
        seed: String,
        lamports: u64,
        space: u64,
        owner: Pubkey,
    ) -> std::result::Result<Self, BoringVaultError> {
        let base = get_vault_pda(vault_id, sub_account);
        let address = Pubkey::create_with_seed(&base, &seed, &owner)
            .map_err(|_| BoringVaultError::InvalidSeed)?;

        Ok(Self {
            vault_id,
            sub_account,
            seed,
            lamports,
            space,
            owner,
            address,
        })
    }

    /// Address of the account being created.
    pub fn address(&self) -> Pubkey {
        self.address
    }
}

impl ExternalInstruction for CreateAccountWithSeed {
    external_instruction_common!();

    fn ix_program_id(&self) -> Pubkey {
        system_program::ID
    }

    fn ix_data(&self) -> Vec<u8> {
        let base = get_vault_pda(self.vault_id, self.sub_account);
        system_instruction::create_account_with_seed(
            &base,
            &self.address,
            &base,
            &self.seed,
            self.lamports,
            self.space,
            &self.owner,
        )
        .data
    }

    fn ix_remaining_accounts(&self) -> Vec<AccountMeta> {
        let base = get_vault_pda(self.vault_id, self.sub_account);
        vec![
            AccountMeta::new(base, false), // funder and base
            AccountMeta::new(self.address, false),
        ]
    }

    // Pins the funding sub-account; seed, size and owner may vary.
    fn ix_operators(&self) -> Operators {
        Operators {
            operators: vec![
                Operator::IngestInstruction(0, 4),
                Operator::IngestAccount(0),
                Operator::IngestInstructionDataSize,
            ],
        }
    }
}
