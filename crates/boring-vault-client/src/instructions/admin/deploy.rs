use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::{AccountMeta, Instruction};
use anchor_lang::{system_program, InstructionData};
use anchor_spl::token_2022;

use crate::{
    instructions::{Deploy, DeployArgs},
    utils::{get_program_config_pda, get_share_mint_pda, get_vault_state_pda},
};

/// Deploys vault `vault_id`, which must equal the config's current
/// `vault_count` when the instruction executes.
///
/// # Arguments
/// * `signer` - Payer for the new vault accounts
/// * `vault_id` - Id the program will assign
/// * `base_asset` - Mint the exchange rate is denominated in
/// * `args` - Resolved deploy arguments, see `resolve_deploy_args`
pub fn create_deploy_instruction(
    signer: &Pubkey,
    vault_id: u64,
    base_asset: &Pubkey,
    args: DeployArgs,
) -> Instruction {
    let vault_state = get_vault_state_pda(vault_id);
    let accounts = vec![
        AccountMeta::new(*signer, true),
        AccountMeta::new(get_program_config_pda(), false),
        AccountMeta::new(vault_state, false),
        AccountMeta::new(get_share_mint_pda(&vault_state), false),
        AccountMeta::new_readonly(*base_asset, false),
        AccountMeta::new_readonly(system_program::ID, false),
        AccountMeta::new_readonly(token_2022::ID, false),
    ];

    Instruction {
        program_id: crate::ID,
        accounts,
        data: Deploy { args }.data(),
    }
}
