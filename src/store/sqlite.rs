//! SQLite-backed album store.
//!
//! Wraps a `sqlx::SqlitePool` over a single `album` table. The schema is
//! applied at connect time and is idempotent. Ids are the table's integer
//! primary key, rendered as strings at the model boundary.

use std::str::FromStr;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::Row;

use crate::model::Album;

use super::errors::{StoreError, StoreResult};
use super::AlbumStore;

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS album (
    id     INTEGER PRIMARY KEY AUTOINCREMENT,
    title  TEXT NOT NULL,
    artist TEXT NOT NULL,
    price  REAL NOT NULL
)";

/// Relational album store.
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Opens (creating if missing) the database at `url` and applies the
    /// schema. A failure here is fatal to the process at startup.
    pub async fn connect(url: &str) -> StoreResult<Self> {
        let options = SqliteConnectOptions::from_str(url)
            .map_err(|e| StoreError::Backend(format!("invalid database url: {}", e)))?
            .create_if_missing(true);

        // One connection: `sqlite::memory:` databases are per-connection,
        // and the file-backed case needs no more for this workload.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;
        sqlx::query(SCHEMA).execute(&pool).await?;

        Ok(Self { pool })
    }

    fn album_from_row(row: &sqlx::sqlite::SqliteRow) -> StoreResult<Album> {
        Ok(Album {
            id: row.try_get::<i64, _>("id")?.to_string(),
            title: row.try_get("title")?,
            artist: row.try_get("artist")?,
            price: row.try_get("price")?,
        })
    }
}

#[async_trait]
impl AlbumStore for SqliteStore {
    async fn list(&self) -> StoreResult<Vec<Album>> {
        let rows = sqlx::query("SELECT id, title, artist, price FROM album ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(Self::album_from_row).collect()
    }

    async fn insert(&self, mut album: Album) -> StoreResult<Album> {
        let result = sqlx::query("INSERT INTO album (title, artist, price) VALUES (?, ?, ?)")
            .bind(&album.title)
            .bind(&album.artist)
            .bind(album.price)
            .execute(&self.pool)
            .await?;

        album.id = result.last_insert_rowid().to_string();
        Ok(album)
    }

    async fn get(&self, id: &str) -> StoreResult<Option<Album>> {
        // A non-numeric id cannot match any row.
        let Ok(id) = id.parse::<i64>() else {
            return Ok(None);
        };

        let row = sqlx::query("SELECT id, title, artist, price FROM album WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(Self::album_from_row).transpose()
    }

    async fn update(&self, id: &str, album: Album) -> StoreResult<u64> {
        let Ok(id) = id.parse::<i64>() else {
            return Ok(0);
        };

        let result = sqlx::query("UPDATE album SET title = ?, artist = ?, price = ? WHERE id = ?")
            .bind(&album.title)
            .bind(&album.artist)
            .bind(album.price)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: &str) -> StoreResult<u64> {
        let Ok(id) = id.parse::<i64>() else {
            return Ok(0);
        };

        let result = sqlx::query("DELETE FROM album WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
