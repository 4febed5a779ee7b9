use anchor_lang::prelude::*;

#[account]
#[derive(Debug, Default)]
pub struct ProgramConfig {
    pub authority: Pubkey,
    pub vault_count: u64,
}
