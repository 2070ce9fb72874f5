//! Redis-backed key-value store.

use crate::KeyValueStore;
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, instrument};
use vvgo_error::{CacheError, CacheErrorKind};

/// Key-value store speaking to a Redis server.
///
/// A multiplexed connection is opened per call; the client itself holds no
/// open sockets, so a store built while Redis is down recovers once it
/// comes back.
#[derive(Debug, Clone)]
pub struct RedisStore {
    client: redis::Client,
}

impl RedisStore {
    /// Create a store for the server at `url` (e.g. `redis://localhost:6379`).
    ///
    /// Only the URL is validated here; no connection is made.
    pub fn new(url: &str) -> Result<Self, CacheError> {
        let client = redis::Client::open(url)
            .map_err(|e| CacheError::new(CacheErrorKind::Connection(e.to_string())))?;
        Ok(Self { client })
    }

    async fn connection(&self) -> Result<redis::aio::MultiplexedConnection, CacheError> {
        self.client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| CacheError::new(CacheErrorKind::Connection(e.to_string())))
    }
}

#[async_trait]
impl KeyValueStore for RedisStore {
    #[instrument(skip(self))]
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let mut conn = self.connection().await?;
        let value: Option<String> = redis::cmd("GET")
            .arg(key)
            .query_async(&mut conn)
            .await
            .map_err(|e| {
                CacheError::new(CacheErrorKind::Command {
                    command: "GET".to_string(),
                    reason: e.to_string(),
                })
            })?;
        debug!(hit = value.is_some(), "GET complete");
        Ok(value)
    }

    #[instrument(skip(self, value), fields(ttl_secs = ttl.as_secs(), value_len = value.len()))]
    async fn set_ex(&self, key: &str, ttl: Duration, value: &str) -> Result<(), CacheError> {
        let mut conn = self.connection().await?;
        // SETEX rejects a zero expiry
        let ttl_secs = ttl.as_secs().max(1);
        let _: () = redis::cmd("SETEX")
            .arg(key)
            .arg(ttl_secs)
            .arg(value)
            .query_async(&mut conn)
            .await
            .map_err(|e| {
                CacheError::new(CacheErrorKind::Command {
                    command: "SETEX".to_string(),
                    reason: e.to_string(),
                })
            })?;
        debug!("SETEX complete");
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "redis"
    }
}
