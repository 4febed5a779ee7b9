use anchor_lang::error_code;


#[error_code]
pub enum BoringVaultError {
    #[msg("Overflow")]
    Overflow,

    #[msg("Overflow in mul")]
    OverflowInMul,

    #[msg("Overflow in div")]
    OverflowInDiv,

    #[msg("Overflow in cast")]
    OverflowInCast,

    #[msg("The fee exceeds the allowed maximum")]
    FeeExceeds,

    #[msg("Share premium exceeds the allowed maximum")]
    PremiumExceeds,

    #[msg("Upper bound must be >= 10000 and lower bound <= 10000")]
    InvalidExchangeRateBounds,

    #[msg("Exchange rate must be greater than zero")]
    ZeroExchangeRate,

    #[msg("Amount must be greater than zero")]
    ZeroAmount,

    #[msg("Source and destination sub-accounts are the same")]
    SameSubAccount,

    #[msg("Vault name or symbol too long")]
    NameTooLong,

    #[msg("Operator reads past the end of the instruction data")]
    InvalidOperatorRange,

    #[msg("Operator references a missing account")]
    InvalidOperatorAccount,

    #[msg("Invalid price feed")]
    InvalidPriceFeed,

    #[msg("Oracle data too old")]
    OracleDataTooOld,

    #[msg("Deposits are not allowed for this asset")]
    DepositsNotAllowed,

    #[msg("Withdrawals are not allowed for this asset")]
    WithdrawalsNotAllowed,

    #[msg("Vault is paused")]
    VaultPaused,

    #[msg("Program signer does not match the program id")]
    ProgramSignerMismatch,

    #[msg("Signer must be provided as a keypair")]
    SignerNotKeypair,

    #[msg("Bundle contains no instructions")]
    EmptyBundle,

    #[msg("Transaction exceeds the packet size limit")]
    TransactionTooLarge,

    #[msg("Seed is too long or yields an invalid address")]
    InvalidSeed,
}
