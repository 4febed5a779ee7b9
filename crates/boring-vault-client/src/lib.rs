#![allow(unexpected_cfgs)]
#![allow(clippy::too_many_arguments)]

use anchor_lang::prelude::*;

pub mod states;
pub mod instructions;
pub mod manage;
pub mod components;
pub mod builder;
pub mod config;
pub mod transport;
pub mod view;
pub mod utils;

pub use builder::Builder;
pub use config::BuilderConfig;
pub use transport::Transport;
pub use utils::{BoringVaultError, MaybeSigner};

declare_id!("5ZRnXG4GsUMLaN7w2DtJV1cgLgcXHmuHCmJ2MxoorWCE");
