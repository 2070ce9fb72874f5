//! Spreadsheet value sources.

use crate::Values;
use async_trait::async_trait;
use serde::Deserialize;
use tracing::instrument;
use vvgo_error::{SheetsError, SheetsErrorKind};

/// Fetches raw rows for a spreadsheet range.
#[async_trait]
pub trait ValuesSource: Send + Sync {
    /// Rows in `range` of `spreadsheet_id`, header row first.
    async fn values(&self, spreadsheet_id: &str, range: &str) -> Result<Values, SheetsError>;
}

/// Connection settings for the Google Sheets REST API.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GoogleSheetsConfig {
    /// API base URL (default: "https://sheets.googleapis.com/v4")
    pub api_endpoint: String,
    /// API key sent as the `key` query parameter
    pub api_key: Option<String>,
    /// OAuth access token sent as a bearer token
    pub access_token: Option<String>,
}

impl Default for GoogleSheetsConfig {
    fn default() -> Self {
        Self {
            api_endpoint: "https://sheets.googleapis.com/v4".to_string(),
            api_key: None,
            access_token: None,
        }
    }
}

impl GoogleSheetsConfig {
    /// Point the client at a different API base URL.
    pub fn with_api_endpoint(mut self, api_endpoint: impl Into<String>) -> Self {
        self.api_endpoint = api_endpoint.into();
        self
    }

    /// Set the API key.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the OAuth access token.
    pub fn with_access_token(mut self, access_token: impl Into<String>) -> Self {
        self.access_token = Some(access_token.into());
        self
    }
}

#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Values,
}

/// [`ValuesSource`] backed by `spreadsheets.values.get`.
#[derive(Debug, Clone)]
pub struct GoogleSheetsClient {
    config: GoogleSheetsConfig,
    client: reqwest::Client,
}

impl GoogleSheetsClient {
    /// Create a new client.
    #[instrument(skip(config), fields(api_endpoint = %config.api_endpoint))]
    pub fn new(config: GoogleSheetsConfig) -> Self {
        tracing::debug!("Creating sheets client");
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Get the client configuration.
    pub fn config(&self) -> &GoogleSheetsConfig {
        &self.config
    }

    fn values_url(&self, spreadsheet_id: &str, range: &str) -> String {
        format!(
            "{}/spreadsheets/{}/values/{}",
            self.config.api_endpoint.trim_end_matches('/'),
            urlencoding::encode(spreadsheet_id),
            urlencoding::encode(range)
        )
    }
}

#[async_trait]
impl ValuesSource for GoogleSheetsClient {
    #[instrument(skip(self))]
    async fn values(&self, spreadsheet_id: &str, range: &str) -> Result<Values, SheetsError> {
        let url = self.values_url(spreadsheet_id, range);
        tracing::debug!(%url, "Fetching sheet values");

        let mut req = self.client.get(&url);
        if let Some(api_key) = &self.config.api_key {
            req = req.query(&[("key", api_key)]);
        }
        if let Some(token) = &self.config.access_token {
            req = req.bearer_auth(token);
        }

        let response = req.send().await.map_err(|e| {
            tracing::error!("Request failed: {}", e);
            SheetsError::new(SheetsErrorKind::Fetch(e.to_string()))
        })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            tracing::error!(%status, "Sheets API returned error");
            return Err(SheetsError::new(SheetsErrorKind::Api {
                status: status.as_u16(),
                message,
            }));
        }

        let range: ValueRange = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse response: {}", e);
            SheetsError::new(SheetsErrorKind::Deserialization(e.to_string()))
        })?;

        tracing::debug!(rows = range.values.len(), "Fetched sheet values");
        Ok(range.values)
    }
}
