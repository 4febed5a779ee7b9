pub use asset_data::*;
pub use boring_vault::*;
pub use cpi_digest::*;
pub use kamino::*;
pub use program_config::*;

pub mod asset_data;
pub mod boring_vault;
pub mod cpi_digest;
pub mod kamino;
pub mod program_config;
