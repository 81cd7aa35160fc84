pub mod actions;
pub mod bitstring;
pub mod cache;
pub mod config;
pub mod error;
pub mod export;
pub mod optimizer;
pub mod oracle;
// cmd and reports are binary modules (see main.rs).

pub use error::{OracleError, SfResult, SynthForgeError};
