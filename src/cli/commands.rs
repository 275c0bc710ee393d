//! CLI command implementations.
//!
//! `serve` boots the configured storage backend and enters the HTTP serving
//! loop; `config` prints the effective configuration for operators. The
//! tokio runtime is built here so main.rs stays a thin shell.

use std::path::Path;
use std::sync::Arc;

use crate::config::{Config, StorageBackend};
use crate::http_server::HttpServer;
use crate::observability::{Logger, Severity};
use crate::store::{AlbumStore, MemoryStore, SqliteStore};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Parse arguments and dispatch to the selected command.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();

    match cli.command {
        Command::Serve { config } => serve(&config),
        Command::Config { config } => print_config(&config),
    }
}

/// Start the album service.
///
/// 1. Load configuration
/// 2. Connect the configured storage backend (fatal on failure)
/// 3. Run the axum server until it exits
pub fn serve(config_path: &Path) -> CliResult<()> {
    let config = Config::load(config_path)?;

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        let store = connect_store(&config).await?;

        Logger::log(
            Severity::Info,
            "store.connected",
            &[("backend", backend_name(config.storage.backend))],
        );

        let server = HttpServer::with_config(config.http.clone(), store);
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })
}

/// Print the effective configuration (file merged with defaults) as JSON.
pub fn print_config(config_path: &Path) -> CliResult<()> {
    let config = Config::load(config_path)?;
    let json = serde_json::to_string_pretty(&config)?;
    println!("{}", json);
    Ok(())
}

async fn connect_store(config: &Config) -> CliResult<Arc<dyn AlbumStore>> {
    match config.storage.backend {
        StorageBackend::Memory => Ok(Arc::new(MemoryStore::new())),
        StorageBackend::Sqlite => {
            let store = SqliteStore::connect(&config.storage.database_url)
                .await
                .map_err(|e| {
                    Logger::log_stderr(
                        Severity::Fatal,
                        "store.connect",
                        &[("error", &e.to_string())],
                    );
                    CliError::boot_failed(format!("could not connect to database: {}", e))
                })?;
            Ok(Arc::new(store))
        }
    }
}

fn backend_name(backend: StorageBackend) -> &'static str {
    match backend {
        StorageBackend::Sqlite => "sqlite",
        StorageBackend::Memory => "memory",
    }
}
