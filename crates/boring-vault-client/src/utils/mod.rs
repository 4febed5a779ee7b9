pub use constants::*;
pub use errors::*;
pub use keypair::*;
pub use math::*;
pub use pdas::*;
pub use signer::*;

pub mod constants;
pub mod errors;
pub mod keypair;
pub mod math;
pub mod pdas;
pub mod signer;
