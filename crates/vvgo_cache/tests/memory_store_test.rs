//! Tests for the in-process key-value store.

use std::time::Duration;
use vvgo_cache::{KeyValueStore, MemoryStore};

#[tokio::test]
async fn test_get_missing_key() {
    let store = MemoryStore::new();
    assert_eq!(store.get("sheets:missing:Projects").await.unwrap(), None);
}

#[tokio::test]
async fn test_set_then_get() {
    let store = MemoryStore::new();
    store
        .set_ex("sheets:abc:Projects", Duration::from_secs(5), r#"[["Name"]]"#)
        .await
        .unwrap();
    assert_eq!(
        store.get("sheets:abc:Projects").await.unwrap().as_deref(),
        Some(r#"[["Name"]]"#)
    );
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn test_set_overwrites() {
    let store = MemoryStore::new();
    store.set_ex("k", Duration::from_secs(5), "one").await.unwrap();
    store.set_ex("k", Duration::from_secs(5), "two").await.unwrap();
    assert_eq!(store.get("k").await.unwrap().as_deref(), Some("two"));
    assert_eq!(store.len().await, 1);
}

#[tokio::test(start_paused = true)]
async fn test_entry_expires_after_ttl() {
    let store = MemoryStore::new();
    store.set_ex("k", Duration::from_secs(5), "v").await.unwrap();

    tokio::time::advance(Duration::from_secs(4)).await;
    assert_eq!(store.get("k").await.unwrap().as_deref(), Some("v"));

    tokio::time::advance(Duration::from_secs(2)).await;
    assert_eq!(store.get("k").await.unwrap(), None);
    assert!(store.is_empty().await);
}

#[tokio::test(start_paused = true)]
async fn test_cleanup_expired() {
    let store = MemoryStore::new();
    store.set_ex("short", Duration::from_secs(1), "a").await.unwrap();
    store.set_ex("long", Duration::from_secs(60), "b").await.unwrap();

    tokio::time::advance(Duration::from_secs(2)).await;
    assert_eq!(store.cleanup_expired().await, 1);
    assert_eq!(store.len().await, 1);
    assert_eq!(store.get("long").await.unwrap().as_deref(), Some("b"));
}

#[tokio::test]
async fn test_clear() {
    let store = MemoryStore::new();
    store.set_ex("a", Duration::from_secs(5), "1").await.unwrap();
    store.set_ex("b", Duration::from_secs(5), "2").await.unwrap();
    store.clear().await;
    assert!(store.is_empty().await);
}

#[test]
fn test_backend_name() {
    assert_eq!(MemoryStore::new().backend_name(), "memory");
}
