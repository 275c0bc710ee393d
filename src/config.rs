//! Service configuration.
//!
//! Loaded from a JSON file; every field has a default so a missing file
//! yields a fully usable configuration. The storage section externalizes
//! what used to be hardcoded connection parameters.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::http_server::HttpServerConfig;

/// Configuration errors are fatal at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Which storage backend serves the album collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Relational table via sqlx.
    Sqlite,
    /// Process-local sequence; also the test double.
    Memory,
}

/// Storage section of the configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Backend selection (default: "sqlite")
    #[serde(default = "default_backend")]
    pub backend: StorageBackend,

    /// Database URL for the sqlite backend (default: "sqlite://albums.db")
    #[serde(default = "default_database_url")]
    pub database_url: String,
}

fn default_backend() -> StorageBackend {
    StorageBackend::Sqlite
}

fn default_database_url() -> String {
    "sqlite://albums.db".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            database_url: default_database_url(),
        }
    }
}

/// Top-level service configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub http: HttpServerConfig,

    #[serde(default)]
    pub storage: StorageConfig,
}

impl Config {
    /// Load configuration from a JSON file. A missing file yields defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            let config = Config::default();
            config.validate()?;
            return Ok(config);
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            source: e,
        })?;

        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.storage.backend == StorageBackend::Sqlite && self.storage.database_url.is_empty() {
            return Err(ConfigError::Invalid(
                "storage.database_url must be set for the sqlite backend".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.storage.backend, StorageBackend::Sqlite);
        assert_eq!(config.storage.database_url, "sqlite://albums.db");
        assert_eq!(config.http.port, 6969);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: Config =
            serde_json::from_str(r#"{"storage": {"backend": "memory"}}"#).unwrap();
        assert_eq!(config.storage.backend, StorageBackend::Memory);
        assert_eq!(config.http.host, "127.0.0.1");
    }

    #[test]
    fn test_unknown_backend_rejected() {
        let result: Result<Config, _> =
            serde_json::from_str(r#"{"storage": {"backend": "mongo"}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_database_url_rejected_for_sqlite() {
        let config: Config =
            serde_json::from_str(r#"{"storage": {"backend": "sqlite", "database_url": ""}}"#)
                .unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let config = Config::load(Path::new("/nonexistent/discograph.json")).unwrap();
        assert_eq!(config.http.port, 6969);
    }
}
