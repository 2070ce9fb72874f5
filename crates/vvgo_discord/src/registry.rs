//! Discord command-registry client.

use crate::{ApplicationCommand, CreateApplicationCommandParams};
use async_trait::async_trait;
use tracing::instrument;
use vvgo_error::{DiscordError, DiscordErrorKind};

/// Where slash-command definitions are published.
#[async_trait]
pub trait CommandRegistry: Send + Sync {
    /// Create (or overwrite) a command definition.
    async fn create_command(
        &self,
        params: &CreateApplicationCommandParams,
    ) -> Result<ApplicationCommand, DiscordError>;

    /// List the currently registered commands.
    async fn list_commands(&self) -> Result<Vec<ApplicationCommand>, DiscordError>;
}

/// Configuration for the Discord REST API.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DiscordConfig {
    /// API base URL (default: "https://discord.com/api/v8")
    pub api_endpoint: String,
    /// Application whose commands are managed
    pub application_id: String,
    /// Bot token used for authorization
    pub bot_token: String,
    /// Register commands in this guild only, instead of globally
    pub guild_id: Option<String>,
}

impl DiscordConfig {
    /// Create a configuration for the public Discord API.
    pub fn new(application_id: impl Into<String>, bot_token: impl Into<String>) -> Self {
        Self {
            api_endpoint: "https://discord.com/api/v8".to_string(),
            application_id: application_id.into(),
            bot_token: bot_token.into(),
            guild_id: None,
        }
    }

    /// Point the client at a different API base URL.
    pub fn with_api_endpoint(mut self, api_endpoint: impl Into<String>) -> Self {
        self.api_endpoint = api_endpoint.into();
        self
    }

    /// Scope commands to a guild.
    pub fn with_guild_id(mut self, guild_id: impl Into<String>) -> Self {
        self.guild_id = Some(guild_id.into());
        self
    }
}

/// [`CommandRegistry`] speaking to the Discord REST API.
#[derive(Debug, Clone)]
pub struct DiscordClient {
    config: DiscordConfig,
    client: reqwest::Client,
}

impl DiscordClient {
    /// Create a new client.
    #[instrument(skip(config), fields(application_id = %config.application_id))]
    pub fn new(config: DiscordConfig) -> Self {
        tracing::debug!("Creating discord client");
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Get the client configuration.
    pub fn config(&self) -> &DiscordConfig {
        &self.config
    }

    fn commands_url(&self) -> String {
        let base = self.config.api_endpoint.trim_end_matches('/');
        match &self.config.guild_id {
            Some(guild_id) => format!(
                "{}/applications/{}/guilds/{}/commands",
                base, self.config.application_id, guild_id
            ),
            None => format!(
                "{}/applications/{}/commands",
                base, self.config.application_id
            ),
        }
    }

    async fn send<T: serde::de::DeserializeOwned>(
        &self,
        req: reqwest::RequestBuilder,
    ) -> Result<T, DiscordError> {
        let response = req
            .header("Authorization", format!("Bot {}", self.config.bot_token))
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Request failed: {}", e);
                DiscordError::new(DiscordErrorKind::Http(e.to_string()))
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            tracing::error!(%status, "Discord API returned error");
            return Err(DiscordError::new(DiscordErrorKind::Api {
                status: status.as_u16(),
                message,
            }));
        }

        response.json().await.map_err(|e| {
            tracing::error!("Failed to parse response: {}", e);
            DiscordError::new(DiscordErrorKind::Deserialization(e.to_string()))
        })
    }
}

#[async_trait]
impl CommandRegistry for DiscordClient {
    #[instrument(skip(self, params), fields(command = %params.name))]
    async fn create_command(
        &self,
        params: &CreateApplicationCommandParams,
    ) -> Result<ApplicationCommand, DiscordError> {
        let url = self.commands_url();
        tracing::debug!(%url, "Creating application command");
        self.send(self.client.post(&url).json(params)).await
    }

    #[instrument(skip(self))]
    async fn list_commands(&self) -> Result<Vec<ApplicationCommand>, DiscordError> {
        let url = self.commands_url();
        tracing::debug!(%url, "Listing application commands");
        self.send(self.client.get(&url)).await
    }
}
