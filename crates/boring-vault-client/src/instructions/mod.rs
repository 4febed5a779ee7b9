pub use admin::*;
pub use args::*;
pub use strategist::*;
pub use teller::*;
pub use token::*;

pub mod admin;
pub mod args;
pub mod strategist;
pub mod teller;
pub mod token;
