//! In-memory album store.
//!
//! A `Vec` of records behind a single mutex. Ids are assigned from a
//! monotonic counter so they stay unique across deletes.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::model::Album;

use super::errors::{StoreError, StoreResult};
use super::AlbumStore;

struct Inner {
    albums: Vec<Album>,
    next_id: u64,
}

/// Process-local album store.
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                albums: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Creates a store preloaded with two sample albums.
    pub fn seeded() -> Self {
        let albums = vec![
            Album {
                id: "1".to_string(),
                title: "Sahara".to_string(),
                artist: "DJ Snake".to_string(),
                price: 11.11,
            },
            Album {
                id: "2".to_string(),
                title: "Raja Baja".to_string(),
                artist: "Nucleya".to_string(),
                price: 20.99,
            },
        ];
        Self {
            inner: Mutex::new(Inner { albums, next_id: 3 }),
        }
    }

    fn lock(&self) -> StoreResult<std::sync::MutexGuard<'_, Inner>> {
        self.inner
            .lock()
            .map_err(|_| StoreError::Backend("album store lock poisoned".to_string()))
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AlbumStore for MemoryStore {
    async fn list(&self) -> StoreResult<Vec<Album>> {
        let inner = self.lock()?;
        Ok(inner.albums.clone())
    }

    async fn insert(&self, mut album: Album) -> StoreResult<Album> {
        let mut inner = self.lock()?;
        album.id = inner.next_id.to_string();
        inner.next_id += 1;
        inner.albums.push(album.clone());
        Ok(album)
    }

    async fn get(&self, id: &str) -> StoreResult<Option<Album>> {
        let inner = self.lock()?;
        Ok(inner.albums.iter().find(|a| a.id == id).cloned())
    }

    async fn update(&self, id: &str, album: Album) -> StoreResult<u64> {
        let mut inner = self.lock()?;
        match inner.albums.iter_mut().find(|a| a.id == id) {
            Some(existing) => {
                existing.title = album.title;
                existing.artist = album.artist;
                existing.price = album.price;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: &str) -> StoreResult<u64> {
        let mut inner = self.lock()?;
        let before = inner.albums.len();
        inner.albums.retain(|a| a.id != id);
        Ok((before - inner.albums.len()) as u64)
    }
}
