use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::{AccountMeta, Instruction};

use crate::{
    components::compute_cpi_digest,
    states::Operators,
    utils::{get_cpi_digest_pda, BoringVaultError},
};

pub use jito::*;
pub use kamino::*;
pub use system::*;

pub mod jito;
pub mod kamino;
pub mod system;

/// An instruction the vault executes on behalf of one of its sub-accounts
/// through `manage`.
pub trait ExternalInstruction {
    fn vault_id(&self) -> u64;
    fn sub_account(&self) -> u8;
    fn ix_program_id(&self) -> Pubkey;
    fn ix_data(&self) -> Vec<u8>;
    fn ix_remaining_accounts(&self) -> Vec<AccountMeta>;
    fn ix_operators(&self) -> Operators;

    /// The same call issued directly, without the vault in between. Used for
    /// permissionless cranks such as reserve refreshes.
    fn to_instruction(&self) -> Instruction {
        Instruction {
            program_id: self.ix_program_id(),
            accounts: self.ix_remaining_accounts(),
            data: self.ix_data(),
        }
    }

    fn digest(&self) -> std::result::Result<[u8; 32], BoringVaultError> {
        compute_cpi_digest(
            &self.ix_program_id(),
            &self.ix_data(),
            &self.ix_remaining_accounts(),
            &self.ix_operators(),
        )
    }

    /// Digest and the address of the account that whitelists it.
    fn digest_pda(&self) -> std::result::Result<(Pubkey, [u8; 32]), BoringVaultError> {
        let digest = self.digest()?;
        Ok((get_cpi_digest_pda(self.vault_id(), &digest), digest))
    }
}

macro_rules! external_instruction_common {
    () => {
        fn vault_id(&self) -> u64 {
            self.vault_id
        }

        fn sub_account(&self) -> u8 {
            self.sub_account
        }
    };
}
pub(crate) use external_instruction_common;
