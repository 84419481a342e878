//! CLI module for storekeeper
//!
//! Provides command-line interface for:
//! - serve: load configuration and run the HTTP server
//! - config: print the effective configuration

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{print_config, resolve_config, run, run_command, serve};
pub use errors::{CliError, CliErrorCode, CliResult};
