//! Test doubles shared by the sheets integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use vvgo_cache::KeyValueStore;
use vvgo_error::{CacheError, CacheErrorKind, SheetsError, SheetsErrorKind};
use vvgo_sheets::{Values, ValuesSource};

/// A source that returns fixed rows (or fails) and counts fetches.
pub struct FakeSource {
    values: Option<Values>,
    calls: AtomicUsize,
}

impl FakeSource {
    pub fn with_values(values: Values) -> Self {
        Self {
            values: Some(values),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            values: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ValuesSource for FakeSource {
    async fn values(&self, _spreadsheet_id: &str, _range: &str) -> Result<Values, SheetsError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.values
            .clone()
            .ok_or_else(|| SheetsError::new(SheetsErrorKind::Fetch("sheets unavailable".into())))
    }
}

/// A store whose every operation fails.
pub struct BrokenStore;

#[async_trait]
impl KeyValueStore for BrokenStore {
    async fn get(&self, _key: &str) -> Result<Option<String>, CacheError> {
        Err(CacheError::new(CacheErrorKind::Connection("connection refused".into())))
    }

    async fn set_ex(&self, _key: &str, _ttl: Duration, _value: &str) -> Result<(), CacheError> {
        Err(CacheError::new(CacheErrorKind::Connection("connection refused".into())))
    }

    fn backend_name(&self) -> &'static str {
        "broken"
    }
}

/// Project rows with one released and one unreleased, archived project.
pub fn project_rows() -> Values {
    vec![
        vec![
            json!("Name"),
            json!("Title"),
            json!("Parts Released"),
            json!("Archived"),
            json!("Submission Link"),
        ],
        vec![
            json!("10-hildas-healing"),
            json!("Hilda's Healing"),
            json!(true),
            json!(false),
            json!("https://bit.ly/vvgo10submit"),
        ],
        vec![
            json!("09-secret-project"),
            json!("Secret Project"),
            json!("FALSE"),
            json!("TRUE"),
        ],
    ]
}
