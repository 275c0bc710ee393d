//! # API Errors
//!
//! Error types for the album HTTP surface. Storage detail never reaches the
//! client; backend failures collapse to a generic 500 message and are logged
//! server-side at the call site with an operation-tagged event.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::store::StoreError;

use super::response::FailureEnvelope;

/// Result type for album handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// Album API errors.
#[derive(Debug, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Request body did not parse as an album.
    #[error("invalid request body: {0}")]
    InvalidBody(String),

    /// No album matches the given id.
    #[error("album not found")]
    NotFound,

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Storage backend failure.
    #[error("{0}")]
    Storage(#[from] StoreError),
}

impl ApiError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The message sent to the client. Backend errors are masked.
    pub fn client_message(&self) -> String {
        match self {
            ApiError::InvalidBody(_) => self.to_string(),
            ApiError::NotFound => "album not found".to_string(),
            ApiError::Storage(_) => "something went wrong".to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(FailureEnvelope::new(self.client_message()));
        (status, body).into_response()
    }
}
