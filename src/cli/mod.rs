//! Command-line surface and the menu actions it drives.

mod commands;
pub mod handlers;

pub use commands::Cli;
