//! Storage contract tests for the SQLite backend.
//!
//! Runs against `sqlite::memory:` so no files are left behind. These mirror
//! the behavior the in-memory backend is unit-tested for: the two backends
//! must be interchangeable behind the trait.

use discograph::model::Album;
use discograph::store::{AlbumStore, SqliteStore};

async fn store() -> SqliteStore {
    SqliteStore::connect("sqlite::memory:")
        .await
        .expect("in-memory sqlite should open")
}

fn album(title: &str, artist: &str, price: f64) -> Album {
    Album {
        id: String::new(),
        title: title.to_string(),
        artist: artist.to_string(),
        price,
    }
}

#[tokio::test]
async fn test_insert_assigns_rowid() {
    let store = store().await;

    let a = store.insert(album("A", "x", 1.0)).await.unwrap();
    let b = store.insert(album("B", "y", 2.0)).await.unwrap();

    assert_eq!(a.id, "1");
    assert_eq!(b.id, "2");
}

#[tokio::test]
async fn test_create_then_get_round_trip() {
    let store = store().await;

    let stored = store.insert(album("Sahara", "DJ Snake", 11.11)).await.unwrap();
    let fetched = store.get(&stored.id).await.unwrap().unwrap();

    assert_eq!(fetched, stored);
}

#[tokio::test]
async fn test_list_in_rowid_order() {
    let store = store().await;

    store.insert(album("A", "x", 1.0)).await.unwrap();
    store.insert(album("B", "y", 2.0)).await.unwrap();
    store.insert(album("C", "z", 3.0)).await.unwrap();

    let titles: Vec<String> = store
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|a| a.title)
        .collect();
    assert_eq!(titles, vec!["A", "B", "C"]);
}

#[tokio::test]
async fn test_get_missing_and_non_numeric_ids() {
    let store = store().await;

    assert!(store.get("42").await.unwrap().is_none());
    assert!(store.get("doesnotexist").await.unwrap().is_none());
}

#[tokio::test]
async fn test_update_overwrites_fields_and_reports_count() {
    let store = store().await;

    let stored = store.insert(album("Test", "A", 9.99)).await.unwrap();
    let affected = store
        .update(&stored.id, album("Test2", "A", 12.50))
        .await
        .unwrap();
    assert_eq!(affected, 1);

    let fetched = store.get(&stored.id).await.unwrap().unwrap();
    assert_eq!(fetched.id, stored.id);
    assert_eq!(fetched.title, "Test2");
    assert_eq!(fetched.price, 12.50);
}

#[tokio::test]
async fn test_update_missing_id_affects_zero_rows() {
    let store = store().await;

    assert_eq!(store.update("42", album("T", "A", 1.0)).await.unwrap(), 0);
    assert_eq!(store.update("nope", album("T", "A", 1.0)).await.unwrap(), 0);
}

#[tokio::test]
async fn test_delete_then_get_is_none() {
    let store = store().await;

    let stored = store.insert(album("A", "x", 1.0)).await.unwrap();
    assert_eq!(store.delete(&stored.id).await.unwrap(), 1);
    assert!(store.get(&stored.id).await.unwrap().is_none());
    assert_eq!(store.delete(&stored.id).await.unwrap(), 0);
}
