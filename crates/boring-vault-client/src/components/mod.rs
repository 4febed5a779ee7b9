pub use checkers::*;
pub use compute_cpi_digest::*;
pub use deploy_args::*;
pub use fee_accrual::*;
pub use price_conversion::*;
pub use share_math::*;

pub mod checkers;
pub mod compute_cpi_digest;
pub mod deploy_args;
pub mod fee_accrual;
pub mod price_conversion;
pub mod share_math;
