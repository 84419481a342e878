//! CLI argument definitions using clap
//!
//! Commands:
//! - storekeeper serve [--config <path>] [--host <host>] [--port <port>] [--debug]
//! - storekeeper config [--config <path>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// storekeeper - in-memory inventory, sales and debtors service
#[derive(Parser, Debug)]
#[command(name = "storekeeper")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Path to a JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Host to bind to (overrides the config file)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to (overrides the config file)
        #[arg(long)]
        port: Option<u16>,

        /// Log every request and append
        #[arg(long)]
        debug: bool,
    },

    /// Print the effective configuration and exit
    Config {
        /// Path to a JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
