//! Key-value stores with TTL support.
//!
//! The [`KeyValueStore`] trait is the narrow interface the spreadsheet cache
//! needs: `GET key` and `SETEX key ttl value`. [`RedisStore`] talks to a real
//! Redis server; [`MemoryStore`] keeps entries in process and is what tests
//! and local development use.

#![warn(missing_docs)]

mod memory;
mod redis_store;
mod store;

pub use memory::{CacheEntry, MemoryStore};
pub use redis_store::RedisStore;
pub use store::KeyValueStore;
