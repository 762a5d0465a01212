//! Command-line hosting layer for the calcsvc calculators.
//!
//! The binary in `main.rs` only wires these pieces together; everything that
//! decides behaviour lives here so it can be tested without spawning a process.

pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;

pub use cli::{Cli, Command, OutputFormat};
pub use commands::{Outcome, execute};
pub use config::{CalcsvcConfig, ConfigSource};
