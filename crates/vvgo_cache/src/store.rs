//! Key-value store trait.

use async_trait::async_trait;
use std::time::Duration;
use vvgo_error::CacheError;

/// A string key-value store whose entries expire on their own.
///
/// Implementations must make individual key operations atomic; callers do
/// no locking of their own. An entry present in the store is fresh.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored at `key`.
    ///
    /// Returns `Ok(None)` when the key is absent or has expired.
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError>;

    /// Store `value` at `key`, expiring after `ttl`.
    async fn set_ex(&self, key: &str, ttl: Duration, value: &str) -> Result<(), CacheError>;

    /// Short name for logs (e.g. "redis", "memory").
    fn backend_name(&self) -> &'static str;
}
