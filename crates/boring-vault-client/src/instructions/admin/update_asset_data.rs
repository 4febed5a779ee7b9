use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::{AccountMeta, Instruction};
use anchor_lang::{system_program, InstructionData};

use crate::{
    instructions::{UpdateAssetData, UpdateAssetDataArgs},
    states::AssetData,
    utils::{get_asset_data_pda, get_vault_state_pda},
};

/// Creates or overwrites the asset data for `mint`. Use `NATIVE` for SOL.
pub fn create_update_asset_data_instruction(
    signer: &Pubkey,
    vault_id: u64,
    mint: &Pubkey,
    asset_data: AssetData,
) -> Instruction {
    let vault_state = get_vault_state_pda(vault_id);
    let accounts = vec![
        AccountMeta::new(*signer, true),
        AccountMeta::new_readonly(vault_state, false),
        AccountMeta::new_readonly(system_program::ID, false),
        AccountMeta::new_readonly(*mint, false),
        AccountMeta::new(get_asset_data_pda(&vault_state, mint), false),
    ];

    Instruction {
        program_id: crate::ID,
        accounts,
        data: UpdateAssetData {
            args: UpdateAssetDataArgs {
                vault_id,
                asset_data,
            },
        }
        .data(),
    }
}
