/*
[INPUT]:  Public API exports for bittrex-cli crate
[OUTPUT]: Module declarations and public re-exports
[POS]:    Crate root - library entry point
[UPDATE]: When adding new modules or public exports
*/

pub mod command;
pub mod config;

pub use command::{BookSide, Command};
pub use config::CliConfig;
