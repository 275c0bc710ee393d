//! CLI module
//!
//! Provides the command-line interface:
//! - serve: boot the storage backend and enter the serving loop
//! - config: print the effective configuration

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{print_config, run, serve};
pub use errors::{CliError, CliResult};
