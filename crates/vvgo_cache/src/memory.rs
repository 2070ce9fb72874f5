//! In-process key-value store with TTL expiry.

use crate::KeyValueStore;
use async_trait::async_trait;
use derive_getters::Getters;
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;
use vvgo_error::CacheError;

/// Cache entry with value and expiration.
#[derive(Debug, Clone, Getters)]
pub struct CacheEntry {
    value: String,
    created_at: Instant,
    ttl: Duration,
}

impl CacheEntry {
    /// Check if this entry is expired.
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.ttl
    }

    /// Get remaining time until expiration.
    pub fn time_remaining(&self) -> Option<Duration> {
        self.ttl.checked_sub(self.created_at.elapsed())
    }
}

/// Key-value store held in process memory.
///
/// Expired entries are dropped lazily on read, or in bulk by
/// [`MemoryStore::cleanup_expired`].
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use vvgo_cache::{KeyValueStore, MemoryStore};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let store = MemoryStore::new();
/// store.set_ex("sheets:abc:Projects", Duration::from_secs(5), "[]").await.unwrap();
/// assert_eq!(store.get("sheets:abc:Projects").await.unwrap().as_deref(), Some("[]"));
/// # }
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, CacheEntry>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove expired entries, returning how many were dropped.
    pub async fn cleanup_expired(&self) -> usize {
        let mut entries = self.entries.lock().await;
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired());
        let removed = before - entries.len();
        if removed > 0 {
            tracing::info!(removed, remaining = entries.len(), "Cleaned up expired cache entries");
        }
        removed
    }

    /// Clear all entries.
    pub async fn clear(&self) {
        let mut entries = self.entries.lock().await;
        let count = entries.len();
        entries.clear();
        tracing::info!(cleared = count, "Cleared cache");
    }

    /// Number of stored entries, expired or not.
    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    /// Whether the store holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let mut entries = self.entries.lock().await;
        let Some(entry) = entries.get(key) else {
            return Ok(None);
        };
        if entry.is_expired() {
            tracing::debug!(key, "Cache entry expired, removing");
            entries.remove(key);
            return Ok(None);
        }
        tracing::debug!(key, time_remaining = ?entry.time_remaining(), "Cache hit");
        Ok(Some(entry.value.clone()))
    }

    async fn set_ex(&self, key: &str, ttl: Duration, value: &str) -> Result<(), CacheError> {
        let entry = CacheEntry {
            value: value.to_string(),
            created_at: Instant::now(),
            ttl,
        };
        self.entries.lock().await.insert(key.to_string(), entry);
        tracing::debug!(key, ttl = ?ttl, "Inserted entry into cache");
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
