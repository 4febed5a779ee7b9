pub use deposit::*;
pub use exchange_rate::*;
pub use withdraw::*;

pub mod deposit;
pub mod exchange_rate;
pub mod withdraw;
