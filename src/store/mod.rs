//! Storage abstraction for album records.
//!
//! One trait, two backends: a relational table (SQLite via sqlx) and a
//! process-local in-memory sequence. The backend is chosen at startup from
//! configuration; everything above this module talks to `dyn AlbumStore`.

pub mod errors;
pub mod memory;
pub mod sqlite;

use async_trait::async_trait;

use crate::model::Album;

pub use errors::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// Capability set shared by all album storage backends.
#[async_trait]
pub trait AlbumStore: Send + Sync {
    /// Returns every album in insertion order.
    async fn list(&self) -> StoreResult<Vec<Album>>;

    /// Inserts a record, assigning its id. Returns the stored record.
    ///
    /// Any id supplied by the caller is ignored.
    async fn insert(&self, album: Album) -> StoreResult<Album>;

    /// Looks up a single record by id. `None` when no record matches.
    async fn get(&self, id: &str) -> StoreResult<Option<Album>>;

    /// Overwrites title/artist/price of the record with the given id.
    ///
    /// A single conditional write; returns the number of rows affected
    /// (0 when no record matches), so there is no separate existence probe
    /// to race against a concurrent delete.
    async fn update(&self, id: &str, album: Album) -> StoreResult<u64>;

    /// Removes the record with the given id. Returns rows affected.
    async fn delete(&self, id: &str) -> StoreResult<u64>;
}
