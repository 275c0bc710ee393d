//! CLI argument definitions using clap
//!
//! Commands:
//! - discograph serve --config <path>
//! - discograph config --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// discograph - album catalog HTTP service
#[derive(Parser, Debug)]
#[command(name = "discograph")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./discograph.json")]
        config: PathBuf,
    },

    /// Print the effective configuration and exit
    Config {
        /// Path to configuration file
        #[arg(long, default_value = "./discograph.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
