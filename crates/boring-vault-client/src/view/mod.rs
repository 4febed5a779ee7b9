pub use boring_vault::*;
pub use digests::*;
pub use kamino::*;
pub use token::*;

pub mod boring_vault;
pub mod digests;
pub mod kamino;
pub mod token;
