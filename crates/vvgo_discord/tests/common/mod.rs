//! Shared fixtures for the discord integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use ed25519_dalek::{Signer, SigningKey};
use std::sync::Arc;
use vvgo_cache::MemoryStore;
use vvgo_error::{SheetsError, SheetsErrorKind};
use vvgo_sheets::{ProjectDirectory, SheetCache, Values, ValuesSource};

pub const SPREADSHEET_ID: &str = "website-data";

/// A spreadsheet source that is always down, so only cached rows are seen.
pub struct OfflineSource;

#[async_trait]
impl ValuesSource for OfflineSource {
    async fn values(&self, _spreadsheet_id: &str, _range: &str) -> Result<Values, SheetsError> {
        Err(SheetsError::new(SheetsErrorKind::Fetch("sheets offline".into())))
    }
}

/// A directory whose cache already holds `values` for the projects range.
pub async fn directory_with(values: Values) -> ProjectDirectory {
    let cache = SheetCache::new(Arc::new(MemoryStore::new()), Arc::new(OfflineSource));
    cache
        .write_values(SPREADSHEET_ID, "Projects", &values)
        .await
        .unwrap();
    ProjectDirectory::new(Arc::new(cache), SPREADSHEET_ID)
}

/// A directory whose cache is empty and whose source is down.
pub fn offline_directory() -> ProjectDirectory {
    let cache = SheetCache::new(Arc::new(MemoryStore::new()), Arc::new(OfflineSource));
    ProjectDirectory::new(Arc::new(cache), SPREADSHEET_ID)
}

pub fn signing_key() -> SigningKey {
    SigningKey::from_bytes(&[7u8; 32])
}

pub fn public_key_hex() -> String {
    hex::encode(signing_key().verifying_key().to_bytes())
}

/// Hex signature over `timestamp` followed by `body`.
pub fn sign(timestamp: &str, body: &[u8]) -> String {
    let mut message = timestamp.as_bytes().to_vec();
    message.extend_from_slice(body);
    hex::encode(signing_key().sign(&message).to_bytes())
}
