//! Storage error types.

use thiserror::Error;

/// Result type for storage operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors surfaced by a storage backend.
///
/// No distinction is made between transient and permanent failures; the
/// service never retries.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Driver, connection, or lock failure.
    #[error("storage backend error: {0}")]
    Backend(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        StoreError::Backend(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_error_display() {
        let err = StoreError::Backend("connection refused".to_string());
        assert_eq!(err.to_string(), "storage backend error: connection refused");
    }
}
