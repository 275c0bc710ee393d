//! Domain model for the album catalog.
//!
//! A single entity: the album. The `id` is assigned by the storage backend
//! on insert and is immutable afterwards.

use serde::{Deserialize, Serialize};

/// An album record.
///
/// All fields default when missing from a JSON body, so partial payloads
/// bind to zero values instead of being rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Album {
    /// Unique identifier, assigned by the store on insert.
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub artist: String,
    /// Non-negative by convention; not enforced.
    #[serde(default)]
    pub price: f64,
}
