//! Server configuration.
//!
//! Loaded from a TOML file, from environment variables, or from a file with
//! environment variables layered on top.

use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use vvgo_error::{ConfigError, VvgoResult};

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Setters)]
#[setters(prefix = "with_")]
pub struct VvgoConfig {
    /// HTTP listener and logging
    #[serde(default)]
    pub server: ServerSettings,
    /// Discord application settings
    #[serde(default)]
    pub discord: DiscordSettings,
    /// Website data spreadsheet settings
    #[serde(default)]
    pub sheets: SheetsSettings,
    /// Key-value store settings
    #[serde(default)]
    pub redis: RedisSettings,
}

impl VvgoConfig {
    /// Load configuration from a TOML file.
    ///
    /// Missing sections and fields take their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> VvgoResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::new(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> VvgoResult<Self> {
        let config = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        Ok(config)
    }

    /// Defaults overlaid with the process environment.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env();
        config
    }

    /// Overlay values from the process environment.
    pub fn apply_env(&mut self) {
        self.apply_vars(|key| std::env::var(key).ok());
    }

    /// Overlay values from `lookup`, keyed by environment variable name.
    ///
    /// Unset and empty variables leave the current value alone.
    pub fn apply_vars(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let var = |key: &str| lookup(key).filter(|value| !value.is_empty());

        if let Some(value) = var("DISCORD_PUBLIC_KEY") {
            self.discord.public_key = value;
        }
        if let Some(value) = var("DISCORD_APPLICATION_ID") {
            self.discord.application_id = value;
        }
        if let Some(value) = var("DISCORD_BOT_TOKEN") {
            self.discord.bot_token = value;
        }
        if let Some(value) = var("DISCORD_GUILD_ID") {
            self.discord.guild_id = Some(value);
        }
        if let Some(value) = var("WEBSITE_DATA_SPREADSHEET_ID") {
            self.sheets.website_data_spreadsheet_id = value;
        }
        if let Some(value) = var("GOOGLE_API_KEY") {
            self.sheets.api_key = Some(value);
        }
        if let Some(value) = var("REDIS_URL") {
            self.redis.url = value;
        }
    }
}

/// HTTP listener and logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Setters)]
#[setters(prefix = "with_", into)]
pub struct ServerSettings {
    /// Socket address to bind
    #[serde(default = "default_listen_address")]
    pub listen_address: String,
    /// Log level used when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Emit JSON-formatted logs
    #[serde(default)]
    pub json_logs: bool,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            listen_address: default_listen_address(),
            log_level: default_log_level(),
            json_logs: false,
        }
    }
}

/// Discord application settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Setters)]
#[setters(prefix = "with_", into)]
pub struct DiscordSettings {
    /// Hex-encoded Ed25519 key that signs interactions
    #[serde(default)]
    pub public_key: String,
    /// Application id used for command registration
    #[serde(default)]
    pub application_id: String,
    /// Bot token used for command registration
    #[serde(default)]
    pub bot_token: String,
    /// Discord REST API base URL
    #[serde(default = "default_discord_endpoint")]
    pub api_endpoint: String,
    /// Register commands in this guild only
    #[serde(default)]
    #[setters(strip_option)]
    pub guild_id: Option<String>,
}

impl Default for DiscordSettings {
    fn default() -> Self {
        Self {
            public_key: String::new(),
            application_id: String::new(),
            bot_token: String::new(),
            api_endpoint: default_discord_endpoint(),
            guild_id: None,
        }
    }
}

/// Website data spreadsheet settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Setters)]
#[setters(prefix = "with_", into)]
pub struct SheetsSettings {
    /// Spreadsheet holding the project table
    #[serde(default)]
    pub website_data_spreadsheet_id: String,
    /// Range holding the project table
    #[serde(default = "default_projects_range")]
    pub projects_range: String,
    /// Google Sheets REST API base URL
    #[serde(default = "default_sheets_endpoint")]
    pub api_endpoint: String,
    /// API key for the Sheets API
    #[serde(default)]
    #[setters(strip_option)]
    pub api_key: Option<String>,
    /// How long fetched ranges stay cached, in seconds
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,
}

impl SheetsSettings {
    /// Cache lifetime of a fetched range.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }
}

impl Default for SheetsSettings {
    fn default() -> Self {
        Self {
            website_data_spreadsheet_id: String::new(),
            projects_range: default_projects_range(),
            api_endpoint: default_sheets_endpoint(),
            api_key: None,
            cache_ttl_secs: default_cache_ttl_secs(),
        }
    }
}

/// Key-value store settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Setters)]
#[setters(prefix = "with_", into)]
pub struct RedisSettings {
    /// Connection URL
    #[serde(default = "default_redis_url")]
    pub url: String,
}

impl Default for RedisSettings {
    fn default() -> Self {
        Self {
            url: default_redis_url(),
        }
    }
}

fn default_listen_address() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_discord_endpoint() -> String {
    "https://discord.com/api/v8".to_string()
}

fn default_projects_range() -> String {
    vvgo_sheets::DEFAULT_PROJECTS_RANGE.to_string()
}

fn default_sheets_endpoint() -> String {
    "https://sheets.googleapis.com/v4".to_string()
}

fn default_cache_ttl_secs() -> u64 {
    vvgo_sheets::DEFAULT_CACHE_TTL.as_secs()
}

fn default_redis_url() -> String {
    "redis://localhost:6379".to_string()
}
