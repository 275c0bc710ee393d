//! Album HTTP Routes
//!
//! The five CRUD endpoints over the album collection. Handlers are thin:
//! extract parameters, call the storage backend, wrap the result in the
//! response envelope.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{delete, get, patch, post},
    Json, Router,
};

use crate::model::Album;
use crate::observability::{Logger, Severity};
use crate::store::{AlbumStore, StoreError};

use super::errors::{ApiError, ApiResult};
use super::response::Envelope;

// ==================
// Shared State
// ==================

/// State shared across album handlers: the configured storage backend.
pub struct AppState {
    pub store: Arc<dyn AlbumStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn AlbumStore>) -> Self {
        Self { store }
    }
}

// ==================
// Album Routes
// ==================

/// Create album routes
pub fn album_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/albums", get(list_albums_handler))
        .route("/albums", post(create_album_handler))
        .route("/albums/:id", get(get_album_handler))
        .route("/albums/:id", patch(update_album_handler))
        .route("/albums/:id", delete(delete_album_handler))
        .with_state(state)
}

// ==================
// Helper Functions
// ==================

/// Logs a storage failure with an operation-tagged event before it is
/// masked into the generic client-facing error.
fn storage_error(operation: &str, err: StoreError) -> ApiError {
    Logger::log_stderr(Severity::Error, operation, &[("error", &err.to_string())]);
    ApiError::Storage(err)
}

/// Unwraps a JSON body extraction, mapping parse failures to the
/// invalid-body error kind (400).
fn parse_body(body: Result<Json<Album>, JsonRejection>) -> ApiResult<Album> {
    match body {
        Ok(Json(album)) => Ok(album),
        Err(rejection) => Err(ApiError::InvalidBody(rejection.body_text())),
    }
}

// ==================
// Handlers
// ==================

async fn list_albums_handler(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Envelope<Vec<Album>>>> {
    let albums = state
        .store
        .list()
        .await
        .map_err(|e| storage_error("album.list", e))?;

    Ok(Json(Envelope::new(albums)))
}

async fn create_album_handler(
    State(state): State<Arc<AppState>>,
    body: Result<Json<Album>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Envelope<Album>>)> {
    let candidate = parse_body(body)?;

    let stored = state
        .store
        .insert(candidate)
        .await
        .map_err(|e| storage_error("album.create", e))?;

    Ok((
        StatusCode::CREATED,
        Json(Envelope::with_message(stored, "new album created")),
    ))
}

async fn get_album_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Envelope<Album>>> {
    let album = state
        .store
        .get(&id)
        .await
        .map_err(|e| storage_error("album.get", e))?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(Envelope::new(album)))
}

async fn update_album_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    body: Result<Json<Album>, JsonRejection>,
) -> ApiResult<Json<Envelope<u64>>> {
    let candidate = parse_body(body)?;

    // One conditional statement; affected count 0 means no such id. No
    // separate existence probe to race against a concurrent delete.
    let affected = state
        .store
        .update(&id, candidate)
        .await
        .map_err(|e| storage_error("album.update", e))?;

    if affected == 0 {
        return Err(ApiError::NotFound);
    }

    Ok(Json(Envelope::with_message(affected, "album updated")))
}

async fn delete_album_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Envelope<u64>>> {
    let affected = state
        .store
        .delete(&id)
        .await
        .map_err(|e| storage_error("album.delete", e))?;

    if affected == 0 {
        return Err(ApiError::NotFound);
    }

    Ok(Json(Envelope::with_message(affected, "album deleted")))
}
