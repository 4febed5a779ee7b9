pub use manage::*;

pub mod manage;
