//! Read-through cache over spreadsheet reads.

use crate::{Values, ValuesSource};
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, instrument, warn};
use vvgo_cache::KeyValueStore;
use vvgo_error::{CacheError, CacheErrorKind, SheetsError, SheetsErrorKind};

/// How long fetched rows stay in the store.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(5);

/// Store key for a spreadsheet range.
///
/// ```
/// assert_eq!(vvgo_sheets::cache_key("abc", "Projects"), "sheets:abc:Projects");
/// ```
pub fn cache_key(spreadsheet_id: &str, range: &str) -> String {
    format!("sheets:{}:{}", spreadsheet_id, range)
}

/// Read-through cache in front of a [`ValuesSource`].
///
/// The store tier fails open: an unreachable store or an undecodable entry
/// is logged and treated as a miss. The source tier fails closed: a fetch
/// error is returned to the caller. Write-back is best effort.
#[derive(Clone)]
pub struct SheetCache {
    store: Arc<dyn KeyValueStore>,
    source: Arc<dyn ValuesSource>,
    ttl: Duration,
}

impl SheetCache {
    /// Create a cache using [`DEFAULT_CACHE_TTL`].
    pub fn new(store: Arc<dyn KeyValueStore>, source: Arc<dyn ValuesSource>) -> Self {
        Self {
            store,
            source,
            ttl: DEFAULT_CACHE_TTL,
        }
    }

    /// Override the entry TTL.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Entry TTL.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Read `range` of `spreadsheet_id`, from the store when possible.
    ///
    /// # Errors
    ///
    /// Returns the source's error when the store misses and the fetch fails,
    /// and [`SheetsErrorKind::NoData`] when the fetch returns no rows.
    #[instrument(skip(self), fields(backend = self.store.backend_name()))]
    pub async fn read(&self, spreadsheet_id: &str, range: &str) -> Result<Values, SheetsError> {
        if let Some(values) = self.read_from_store(spreadsheet_id, range).await {
            return Ok(values);
        }

        let values = self
            .source
            .values(spreadsheet_id, range)
            .await
            .inspect_err(|e| error!(error = %e, "failed to read spreadsheet values from sheets"))?;

        if values.is_empty() {
            return Err(SheetsError::new(SheetsErrorKind::NoData {
                spreadsheet_id: spreadsheet_id.to_string(),
                range: range.to_string(),
            }));
        }

        if let Err(e) = self.write_values(spreadsheet_id, range, &values).await {
            warn!(error = %e, "failed to write spreadsheet values to store");
        }
        Ok(values)
    }

    /// Store `values` for `range` of `spreadsheet_id` with the cache TTL.
    #[instrument(skip(self, values), fields(rows = values.len()))]
    pub async fn write_values(
        &self,
        spreadsheet_id: &str,
        range: &str,
        values: &Values,
    ) -> Result<(), CacheError> {
        let payload = serde_json::to_string(values)
            .map_err(|e| CacheError::new(CacheErrorKind::Encode(e.to_string())))?;
        self.store
            .set_ex(&cache_key(spreadsheet_id, range), self.ttl, &payload)
            .await
    }

    async fn read_from_store(&self, spreadsheet_id: &str, range: &str) -> Option<Values> {
        let key = cache_key(spreadsheet_id, range);
        let payload = match self.store.get(&key).await {
            Ok(Some(payload)) if !payload.is_empty() => payload,
            Ok(_) => {
                info!(%key, "cache miss");
                return None;
            }
            Err(e) => {
                error!(error = %e, "failed to read spreadsheet values from store");
                return None;
            }
        };

        match serde_json::from_str::<Values>(&payload) {
            Ok(values) if !values.is_empty() => Some(values),
            Ok(_) => {
                info!(%key, "cache miss");
                None
            }
            Err(e) => {
                error!(%key, error = %e, "failed to decode cached spreadsheet values");
                None
            }
        }
    }
}
