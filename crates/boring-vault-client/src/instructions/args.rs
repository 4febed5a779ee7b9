use anchor_lang::prelude::*;
use anchor_lang::{Discriminator, InstructionData};

use crate::states::{AssetData, Operators};

/// Implements `Discriminator` and `InstructionData` for an argument struct,
/// using the first 8 bytes of `sha256("global:<instruction name>")`.
macro_rules! instruction_data {
    ($name:ident, [$($byte:expr),* $(,)?]) => {
        impl Discriminator for $name {
            const DISCRIMINATOR: &'static [u8] = &[$($byte),*];
        }

        impl InstructionData for $name {}
    };
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct DeployArgs {
    pub authority: Pubkey,
    pub name: String,
    pub symbol: String,
    pub exchange_rate_provider: Pubkey,
    pub exchange_rate: u64,
    pub payout_address: Pubkey,
    pub allowed_exchange_rate_change_upper_bound: u16,
    pub allowed_exchange_rate_change_lower_bound: u16,
    pub minimum_update_delay_in_seconds: u32,
    pub platform_fee_bps: u16,
    pub performance_fee_bps: u16,
    pub withdraw_authority: Pubkey,
    pub strategist: Pubkey,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct UpdateAssetDataArgs {
    pub vault_id: u64,
    pub asset_data: AssetData,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug)]
pub struct DepositArgs {
    pub vault_id: u64,
    pub deposit_amount: u64,
    pub min_mint_amount: u64,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug)]
pub struct WithdrawArgs {
    pub vault_id: u64,
    pub share_amount: u64,
    pub min_asset_amount: u64,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct CpiDigestArgs {
    pub vault_id: u64,
    pub cpi_digest: [u8; 32],
    pub operators: Operators,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct ViewCpiDigestArgs {
    pub ix_data: Vec<u8>,
    pub operators: Operators,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct ManageArgs {
    pub vault_id: u64,
    pub sub_account: u8,
    pub ix_data: Vec<u8>,
}

// Instruction payloads

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct Initialize {
    pub authority: Pubkey,
}
instruction_data!(Initialize, [175, 175, 109, 31, 13, 152, 155, 237]);

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct Deploy {
    pub args: DeployArgs,
}
instruction_data!(Deploy, [67, 36, 143, 118, 36, 164, 92, 217]);

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct UpdateAssetData {
    pub args: UpdateAssetDataArgs,
}
instruction_data!(UpdateAssetData, [73, 69, 104, 229, 48, 169, 98, 67]);

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct Pause {
    pub vault_id: u64,
}
instruction_data!(Pause, [211, 22, 221, 251, 74, 121, 193, 47]);

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct Unpause {
    pub vault_id: u64,
}
instruction_data!(Unpause, [169, 144, 4, 38, 10, 141, 188, 255]);

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct TransferAuthority {
    pub vault_id: u64,
    pub pending_authority: Pubkey,
}
instruction_data!(TransferAuthority, [48, 169, 76, 72, 229, 180, 55, 161]);

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct AcceptAuthority {
    pub vault_id: u64,
}
instruction_data!(AcceptAuthority, [107, 86, 198, 91, 33, 12, 107, 160]);

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct InitializeCpiDigest {
    pub args: CpiDigestArgs,
}
instruction_data!(InitializeCpiDigest, [137, 9, 120, 93, 182, 194, 100, 147]);

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct CloseCpiDigest {
    pub vault_id: u64,
    pub cpi_digest: [u8; 32],
}
instruction_data!(CloseCpiDigest, [222, 229, 29, 88, 144, 101, 61, 79]);

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct ViewCpiDigest {
    pub args: ViewCpiDigestArgs,
}
instruction_data!(ViewCpiDigest, [243, 10, 27, 160, 175, 112, 119, 60]);

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct Manage {
    pub args: ManageArgs,
}
instruction_data!(Manage, [168, 141, 131, 54, 79, 150, 88, 36]);

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct UpdateExchangeRateProvider {
    pub vault_id: u64,
    pub new_provider: Pubkey,
}
instruction_data!(UpdateExchangeRateProvider, [77, 178, 71, 17, 210, 228, 196, 230]);

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct SetWithdrawAuthority {
    pub vault_id: u64,
    pub new_authority: Pubkey,
}
instruction_data!(SetWithdrawAuthority, [199, 146, 140, 67, 1, 90, 8, 222]);

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct SetPayout {
    pub vault_id: u64,
    pub new_payout: Pubkey,
}
instruction_data!(SetPayout, [55, 43, 132, 51, 227, 169, 242, 195]);

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct ConfigureExchangeRateUpdateBounds {
    pub vault_id: u64,
    pub upper_bound: u16,
    pub lower_bound: u16,
    pub minimum_update_delay: u32,
}
instruction_data!(ConfigureExchangeRateUpdateBounds, [255, 144, 53, 50, 163, 209, 159, 102]);

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct SetFees {
    pub vault_id: u64,
    pub platform_fee_bps: u16,
    pub performance_fee_bps: u16,
}
instruction_data!(SetFees, [137, 178, 49, 58, 0, 245, 242, 190]);

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct SetStrategist {
    pub vault_id: u64,
    pub new_strategist: Pubkey,
}
instruction_data!(SetStrategist, [185, 103, 1, 57, 12, 152, 49, 157]);

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct SetDepositSubAccount {
    pub vault_id: u64,
    pub new_sub_account: u8,
}
instruction_data!(SetDepositSubAccount, [135, 238, 218, 4, 120, 77, 207, 156]);

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct SetWithdrawSubAccount {
    pub vault_id: u64,
    pub new_sub_account: u8,
}
instruction_data!(SetWithdrawSubAccount, [152, 197, 103, 249, 56, 180, 0, 172]);

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct UpdateExchangeRate {
    pub vault_id: u64,
    pub new_exchange_rate: u64,
}
instruction_data!(UpdateExchangeRate, [69, 102, 48, 181, 8, 41, 8, 1]);

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct ClaimFeesInBase {
    pub vault_id: u64,
    pub sub_account: u8,
}
instruction_data!(ClaimFeesInBase, [189, 160, 186, 244, 248, 13, 244, 198]);

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct DepositSol {
    pub args: DepositArgs,
}
instruction_data!(DepositSol, [108, 81, 78, 117, 125, 155, 56, 200]);

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct Deposit {
    pub args: DepositArgs,
}
instruction_data!(Deposit, [242, 35, 198, 137, 82, 225, 242, 182]);

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct Withdraw {
    pub args: WithdrawArgs,
}
instruction_data!(Withdraw, [183, 18, 70, 156, 148, 109, 161, 34]);
