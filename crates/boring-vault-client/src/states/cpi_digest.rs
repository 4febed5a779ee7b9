use anchor_lang::prelude::*;

/// Marks a whitelisted strategist call. The digest itself is part of the
/// account address; the body keeps the recipe that produced it.
#[account]
#[derive(Debug, Default)]
pub struct CpiDigest {
    pub operators: Operators,
}

/// One step of the digest recipe run over a strategist instruction.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Noop,
    /// Hash `ix_data[start..start + len]`.
    IngestInstruction(u32, u8),
    /// Hash the key and signer/writable flags of the account at this index.
    IngestAccount(u8),
    IngestInstructionDataSize,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Operators {
    pub operators: Vec<Operator>,
}

impl From<Vec<Operator>> for Operators {
    fn from(operators: Vec<Operator>) -> Self {
        Self { operators }
    }
}
