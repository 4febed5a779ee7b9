use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::AccountMeta;
use anchor_lang::system_program;
use anchor_spl::token;
use solana_sdk::sysvar;

use crate::{
    manage::{external_instruction_common, ExternalInstruction},
    states::{Operator, Operators},
    utils::{
        get_ata, get_farm_user_state_pda, get_lending_market_authority, get_user_metadata_pda,
        get_vanilla_obligation_pda, get_vault_pda, KAMINO_FARMS_PROGRAM_ID, KAMINO_LEND_PROGRAM_ID,
        SCOPE_PROGRAM_ID,
    },
};

const INIT_USER_METADATA: [u8; 8] = [117, 169, 176, 69, 197, 23, 15, 162];
const INIT_OBLIGATION: [u8; 8] = [251, 10, 231, 76, 27, 11, 159, 96];
const INIT_OBLIGATION_FARMS_FOR_RESERVE: [u8; 8] = [136, 63, 15, 186, 211, 152, 168, 164];
const REFRESH_RESERVE: [u8; 8] = [2, 218, 138, 235, 79, 201, 25, 102];
const REFRESH_PRICE_LIST: [u8; 8] = [83, 186, 207, 131, 203, 254, 198, 130];
const REFRESH_OBLIGATION: [u8; 8] = [33, 132, 147, 228, 151, 192, 72, 89];
const REFRESH_OBLIGATION_FARMS_FOR_RESERVE: [u8; 8] = [140, 144, 253, 21, 10, 74, 248, 3];
const DEPOSIT_RESERVE_LIQUIDITY_AND_OBLIGATION_COLLATERAL_V2: [u8; 8] =
    [216, 224, 191, 27, 204, 151, 102, 175];
const BORROW_OBLIGATION_LIQUIDITY_V2: [u8; 8] = [161, 128, 143, 245, 171, 199, 194, 6];

/// Farm mode for collateral (deposit) farms. Debt farms use 1.
pub const FARM_MODE_COLLATERAL: u8 = 0;
pub const FARM_MODE_DEBT: u8 = 1;

// Optional Kamino accounts are passed as the program id when absent.
fn optional(account: Option<Pubkey>, writable: bool) -> AccountMeta {
    match account {
        Some(key) if writable => AccountMeta::new(key, false),
        Some(key) => AccountMeta::new_readonly(key, false),
        None => AccountMeta::new_readonly(KAMINO_LEND_PROGRAM_ID, false),
    }
}

fn discriminator_and_size() -> Operators {
    Operators {
        operators: vec![
            Operator::IngestInstruction(0, 8),
            Operator::IngestInstructionDataSize,
        ],
    }
}

pub struct InitUserMetadata {
    pub vault_id: u64,
    pub sub_account: u8,
    pub lookup_table: Pubkey,
}

impl ExternalInstruction for InitUserMetadata {
    external_instruction_common!();

    fn ix_program_id(&self) -> Pubkey {
        KAMINO_LEND_PROGRAM_ID
    }

    fn ix_data(&self) -> Vec<u8> {
        let mut data = INIT_USER_METADATA.to_vec();
        data.extend_from_slice(self.lookup_table.as_ref());
        data
    }

    fn ix_remaining_accounts(&self) -> Vec<AccountMeta> {
        let owner = get_vault_pda(self.vault_id, self.sub_account);
        vec![
            AccountMeta::new(owner, false), // owner
            AccountMeta::new(owner, false), // fee payer
            AccountMeta::new(get_user_metadata_pda(&owner), false),
            AccountMeta::new_readonly(KAMINO_LEND_PROGRAM_ID, false), // no referrer
            AccountMeta::new_readonly(sysvar::rent::ID, false),
            AccountMeta::new_readonly(system_program::ID, false),
        ]
    }

    fn ix_operators(&self) -> Operators {
        discriminator_and_size()
    }
}

pub struct InitObligation {
    pub vault_id: u64,
    pub sub_account: u8,
    pub lending_market: Pubkey,
    pub tag: u8,
    pub id: u8,
}

impl ExternalInstruction for InitObligation {
    external_instruction_common!();

    fn ix_program_id(&self) -> Pubkey {
        KAMINO_LEND_PROGRAM_ID
    }

    fn ix_data(&self) -> Vec<u8> {
        let mut data = INIT_OBLIGATION.to_vec();
        data.push(self.tag);
        data.push(self.id);
        data
    }

    fn ix_remaining_accounts(&self) -> Vec<AccountMeta> {
        let owner = get_vault_pda(self.vault_id, self.sub_account);
        let obligation = get_vanilla_obligation_pda(self.tag, self.id, &owner, &self.lending_market);
        vec![
            AccountMeta::new(owner, false), // obligation owner
            AccountMeta::new(owner, false), // fee payer
            AccountMeta::new(obligation, false),
            AccountMeta::new_readonly(self.lending_market, false),
            AccountMeta::new_readonly(system_program::ID, false), // seed 1
            AccountMeta::new_readonly(system_program::ID, false), // seed 2
            AccountMeta::new(get_user_metadata_pda(&owner), false),
            AccountMeta::new_readonly(sysvar::rent::ID, false),
            AccountMeta::new_readonly(system_program::ID, false),
        ]
    }

    fn ix_operators(&self) -> Operators {
        Operators {
            operators: vec![
                Operator::IngestInstruction(0, 8),
                Operator::IngestAccount(3),
                Operator::IngestInstructionDataSize,
            ],
        }
    }
}

/// Creates the farm user state tracking an obligation in a reserve farm.
pub struct InitObligationFarmsForReserve {
    pub vault_id: u64,
    pub sub_account: u8,
    pub lending_market: Pubkey,
    pub reserve: Pubkey,
    pub reserve_farm_state: Pubkey,
    pub tag: u8,
    pub id: u8,
    pub mode: u8,
}

impl ExternalInstruction for InitObligationFarmsForReserve {
    external_instruction_common!();

    fn ix_program_id(&self) -> Pubkey {
        KAMINO_LEND_PROGRAM_ID
    }

    fn ix_data(&self) -> Vec<u8> {
        let mut data = INIT_OBLIGATION_FARMS_FOR_RESERVE.to_vec();
        data.push(self.mode);
        data
    }

    fn ix_remaining_accounts(&self) -> Vec<AccountMeta> {
        let owner = get_vault_pda(self.vault_id, self.sub_account);
        let obligation = get_vanilla_obligation_pda(self.tag, self.id, &owner, &self.lending_market);
        vec![
            AccountMeta::new(owner, false), // payer
            AccountMeta::new(owner, false), // obligation owner
            AccountMeta::new(obligation, false),
            AccountMeta::new(get_lending_market_authority(&self.lending_market), false),
            AccountMeta::new(self.reserve, false),
            AccountMeta::new(self.reserve_farm_state, false),
            AccountMeta::new(get_farm_user_state_pda(&self.reserve_farm_state, &obligation), false),
            AccountMeta::new_readonly(self.lending_market, false),
            AccountMeta::new_readonly(KAMINO_FARMS_PROGRAM_ID, false),
            AccountMeta::new_readonly(sysvar::rent::ID, false),
            AccountMeta::new_readonly(system_program::ID, false),
        ]
    }

    fn ix_operators(&self) -> Operators {
        Operators {
            operators: vec![
                Operator::IngestInstruction(0, 8),
                Operator::IngestAccount(7),
                Operator::IngestInstructionDataSize,
            ],
        }
    }
}

/// Permissionless crank; usually issued directly with `to_instruction`.
pub struct RefreshReserve {
    pub vault_id: u64,
    pub sub_account: u8,
    pub reserve: Pubkey,
    pub lending_market: Pubkey,
    pub pyth_oracle: Option<Pubkey>,
    pub switchboard_price_oracle: Option<Pubkey>,
    pub switchboard_twap_oracle: Option<Pubkey>,
    pub scope_prices: Option<Pubkey>,
}

impl ExternalInstruction for RefreshReserve {
    external_instruction_common!();

    fn ix_program_id(&self) -> Pubkey {
        KAMINO_LEND_PROGRAM_ID
    }

    fn ix_data(&self) -> Vec<u8> {
        REFRESH_RESERVE.to_vec()
    }

    fn ix_remaining_accounts(&self) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.reserve, false),
            AccountMeta::new_readonly(self.lending_market, false),
            optional(self.pyth_oracle, false),
            optional(self.switchboard_price_oracle, false),
            optional(self.switchboard_twap_oracle, false),
            optional(self.scope_prices, false),
        ]
    }

    fn ix_operators(&self) -> Operators {
        discriminator_and_size()
    }
}

/// Refreshes Scope oracle prices for the listed token indices.
pub struct RefreshPriceList {
    pub vault_id: u64,
    pub sub_account: u8,
    pub oracle_prices: Pubkey,
    pub oracle_mapping: Pubkey,
    pub oracle_twaps: Pubkey,
    pub price_accounts: Vec<Pubkey>,
    pub tokens: Vec<u16>,
}

impl ExternalInstruction for RefreshPriceList {
    external_instruction_common!();

    fn ix_program_id(&self) -> Pubkey {
        SCOPE_PROGRAM_ID
    }

    fn ix_data(&self) -> Vec<u8> {
        let mut data = REFRESH_PRICE_LIST.to_vec();
        // borsh Vec<u16>: u32 length then each element
        data.extend_from_slice(&(self.tokens.len() as u32).to_le_bytes());
        for token in &self.tokens {
            data.extend_from_slice(&token.to_le_bytes());
        }
        data
    }

    fn ix_remaining_accounts(&self) -> Vec<AccountMeta> {
        let mut accounts = vec![
            AccountMeta::new(self.oracle_prices, false),
            AccountMeta::new_readonly(self.oracle_mapping, false),
            AccountMeta::new(self.oracle_twaps, false),
            AccountMeta::new_readonly(sysvar::instructions::ID, false),
        ];
        accounts.extend(
            self.price_accounts
                .iter()
                .map(|price_account| AccountMeta::new_readonly(*price_account, false)),
        );
        accounts
    }

    fn ix_operators(&self) -> Operators {
        discriminator_and_size()
    }
}

/// Recomputes obligation health. Kamino expects every reserve the obligation
/// holds, deposits first then borrows, as trailing accounts.
pub struct RefreshObligation {
    pub vault_id: u64,
    pub sub_account: u8,
    pub lending_market: Pubkey,
    pub tag: u8,
    pub id: u8,
    pub reserves: Vec<Pubkey>,
}

impl ExternalInstruction for RefreshObligation {
    external_instruction_common!();

    fn ix_program_id(&self) -> Pubkey {
        KAMINO_LEND_PROGRAM_ID
    }

    fn ix_data(&self) -> Vec<u8> {
        REFRESH_OBLIGATION.to_vec()
    }

    fn ix_remaining_accounts(&self) -> Vec<AccountMeta> {
        let owner = get_vault_pda(self.vault_id, self.sub_account);
        let obligation = get_vanilla_obligation_pda(self.tag, self.id, &owner, &self.lending_market);
        let mut accounts = vec![
            AccountMeta::new_readonly(self.lending_market, false),
            AccountMeta::new(obligation, false),
        ];
        accounts.extend(
            self.reserves
                .iter()
                .map(|reserve| AccountMeta::new_readonly(*reserve, false)),
        );
        accounts
    }

    fn ix_operators(&self) -> Operators {
        discriminator_and_size()
    }
}

pub struct RefreshObligationFarmsForReserve {
    pub vault_id: u64,
    pub sub_account: u8,
    pub lending_market: Pubkey,
    pub reserve: Pubkey,
    pub reserve_farm_state: Pubkey,
    pub tag: u8,
    pub id: u8,
    pub mode: u8,
}

impl ExternalInstruction for RefreshObligationFarmsForReserve {
    external_instruction_common!();

    fn ix_program_id(&self) -> Pubkey {
        KAMINO_LEND_PROGRAM_ID
    }

    fn ix_data(&self) -> Vec<u8> {
        let mut data = REFRESH_OBLIGATION_FARMS_FOR_RESERVE.to_vec();
        data.push(self.mode);
        data
    }

    fn ix_remaining_accounts(&self) -> Vec<AccountMeta> {
        let owner = get_vault_pda(self.vault_id, self.sub_account);
        let obligation = get_vanilla_obligation_pda(self.tag, self.id, &owner, &self.lending_market);
        vec![
            AccountMeta::new(owner, false), // crank
            AccountMeta::new(obligation, false),
            AccountMeta::new(get_lending_market_authority(&self.lending_market), false),
            AccountMeta::new(self.reserve, false),
            AccountMeta::new(self.reserve_farm_state, false),
            AccountMeta::new(get_farm_user_state_pda(&self.reserve_farm_state, &obligation), false),
            AccountMeta::new_readonly(self.lending_market, false),
            AccountMeta::new_readonly(KAMINO_FARMS_PROGRAM_ID, false),
            AccountMeta::new_readonly(sysvar::rent::ID, false),
            AccountMeta::new_readonly(system_program::ID, false),
        ]
    }

    fn ix_operators(&self) -> Operators {
        Operators {
            operators: vec![
                Operator::IngestInstruction(0, 8),
                Operator::IngestAccount(6),
                Operator::IngestInstructionDataSize,
            ],
        }
    }
}

/// Deposits sub-account liquidity into a reserve and posts the minted
/// collateral to the obligation in one step.
pub struct KaminoDeposit {
    pub vault_id: u64,
    pub sub_account: u8,
    pub lending_market: Pubkey,
    pub reserve: Pubkey,
    pub reserve_liquidity_mint: Pubkey,
    pub reserve_liquidity_supply: Pubkey,
    pub reserve_collateral_mint: Pubkey,
    pub reserve_destination_deposit_collateral: Pubkey,
    pub reserve_farm_state: Option<Pubkey>,
    /// Token program of `reserve_liquidity_mint`.
    pub liquidity_token_program: Pubkey,
    pub tag: u8,
    pub id: u8,
    pub amount: u64,
}

impl ExternalInstruction for KaminoDeposit {
    external_instruction_common!();

    fn ix_program_id(&self) -> Pubkey {
        KAMINO_LEND_PROGRAM_ID
    }

    fn ix_data(&self) -> Vec<u8> {
        let mut data = DEPOSIT_RESERVE_LIQUIDITY_AND_OBLIGATION_COLLATERAL_V2.to_vec();
        data.extend_from_slice(&self.amount.to_le_bytes());
        data
    }

    fn ix_remaining_accounts(&self) -> Vec<AccountMeta> {
        let owner = get_vault_pda(self.vault_id, self.sub_account);
        let obligation = get_vanilla_obligation_pda(self.tag, self.id, &owner, &self.lending_market);
        let farm_user_state = self
            .reserve_farm_state
            .map(|farm_state| get_farm_user_state_pda(&farm_state, &obligation));

        vec![
            AccountMeta::new(owner, false),
            AccountMeta::new(obligation, false),
            AccountMeta::new_readonly(self.lending_market, false),
            AccountMeta::new(get_lending_market_authority(&self.lending_market), false),
            AccountMeta::new(self.reserve, false),
            AccountMeta::new(self.reserve_liquidity_mint, false),
            AccountMeta::new(self.reserve_liquidity_supply, false),
            AccountMeta::new(self.reserve_collateral_mint, false),
            AccountMeta::new(self.reserve_destination_deposit_collateral, false),
            AccountMeta::new(
                get_ata(&owner, &self.reserve_liquidity_mint, &self.liquidity_token_program),
                false,
            ), // source liquidity
            AccountMeta::new_readonly(KAMINO_LEND_PROGRAM_ID, false), // no destination collateral
            AccountMeta::new_readonly(token::ID, false), // collateral token program
            AccountMeta::new_readonly(self.liquidity_token_program, false),
            AccountMeta::new_readonly(sysvar::instructions::ID, false),
            optional(farm_user_state, true),
            optional(self.reserve_farm_state, true),
            AccountMeta::new_readonly(KAMINO_FARMS_PROGRAM_ID, false),
        ]
    }

    fn ix_operators(&self) -> Operators {
        Operators {
            operators: vec![
                Operator::IngestInstruction(0, 8),
                Operator::IngestAccount(2),
                Operator::IngestAccount(5),
                Operator::IngestInstructionDataSize,
            ],
        }
    }
}

/// Borrows reserve liquidity against the obligation into the sub-account's
/// token account.
pub struct KaminoBorrow {
    pub vault_id: u64,
    pub sub_account: u8,
    pub lending_market: Pubkey,
    pub reserve: Pubkey,
    pub reserve_source_liquidity_mint: Pubkey,
    pub reserve_source_liquidity: Pubkey,
    pub reserve_source_liquidity_fee_receiver: Pubkey,
    pub reserve_farm_state: Option<Pubkey>,
    /// Token program of `reserve_source_liquidity_mint`.
    pub liquidity_token_program: Pubkey,
    pub tag: u8,
    pub id: u8,
    pub amount: u64,
}

impl KaminoBorrow {
    /// The sub-account's token account for the borrowed mint.
    pub fn destination(&self) -> Pubkey {
        let owner = get_vault_pda(self.vault_id, self.sub_account);
        get_ata(&owner, &self.reserve_source_liquidity_mint, &self.liquidity_token_program)
    }
}

impl ExternalInstruction for KaminoBorrow {
    external_instruction_common!();

    fn ix_program_id(&self) -> Pubkey {
        KAMINO_LEND_PROGRAM_ID
    }

    fn ix_data(&self) -> Vec<u8> {
        let mut data = BORROW_OBLIGATION_LIQUIDITY_V2.to_vec();
        data.extend_from_slice(&self.amount.to_le_bytes());
        data
    }

    fn ix_remaining_accounts(&self) -> Vec<AccountMeta> {
        let owner = get_vault_pda(self.vault_id, self.sub_account);
        let obligation = get_vanilla_obligation_pda(self.tag, self.id, &owner, &self.lending_market);
        let farm_user_state = self
            .reserve_farm_state
            .map(|farm_state| get_farm_user_state_pda(&farm_state, &obligation));

        vec![
            AccountMeta::new(owner, false),
            AccountMeta::new(obligation, false),
            AccountMeta::new_readonly(self.lending_market, false),
            AccountMeta::new_readonly(get_lending_market_authority(&self.lending_market), false),
            AccountMeta::new(self.reserve, false),
            AccountMeta::new_readonly(self.reserve_source_liquidity_mint, false),
            AccountMeta::new(self.reserve_source_liquidity, false),
            AccountMeta::new(self.reserve_source_liquidity_fee_receiver, false),
            AccountMeta::new(self.destination(), false),
            AccountMeta::new_readonly(KAMINO_LEND_PROGRAM_ID, false), // no referrer
            AccountMeta::new_readonly(self.liquidity_token_program, false),
            AccountMeta::new_readonly(sysvar::instructions::ID, false),
            optional(farm_user_state, true),
            optional(self.reserve_farm_state, true),
            AccountMeta::new_readonly(KAMINO_FARMS_PROGRAM_ID, false),
        ]
    }

    // Pins the market, the borrowed mint and the destination account.
    fn ix_operators(&self) -> Operators {
        Operators {
            operators: vec![
                Operator::IngestInstruction(0, 8),
                Operator::IngestAccount(2),
                Operator::IngestAccount(5),
                Operator::IngestAccount(8),
                Operator::IngestInstructionDataSize,
            ],
        }
    }
}
