//! discograph entry point
//!
//! A minimal entrypoint: parse arguments, dispatch to the CLI command,
//! print errors to stderr, exit non-zero on failure. All logic lives in
//! the cli module.

use discograph::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
