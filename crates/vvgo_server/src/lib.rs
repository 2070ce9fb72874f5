//! HTTP server for the VVGO website backend.
//!
//! Wires the spreadsheet cache, project directory and slash commands
//! together behind an axum router:
//!
//! - `POST /slash_commands` answers signed Discord interactions
//! - `GET /slash_commands` lists the commands registered with Discord
//! - `GET /slash_commands/create` publishes the command definitions
//! - `GET /health` reports liveness

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod api;
mod config;
mod observability;

pub use api::{AppState, SLASH_COMMANDS_PATH, create_router};
pub use config::{DiscordSettings, RedisSettings, ServerSettings, SheetsSettings, VvgoConfig};
pub use observability::init_logging;

use std::sync::Arc;
use tracing::instrument;
use vvgo_cache::RedisStore;
use vvgo_discord::{DiscordClient, DiscordConfig, InteractionDispatcher, SlashCommands};
use vvgo_error::VvgoResult;
use vvgo_sheets::{GoogleSheetsClient, GoogleSheetsConfig, ProjectDirectory, SheetCache};

/// Build the application state from `config`.
///
/// Connections are opened lazily, so this succeeds while Redis or the
/// upstream APIs are unreachable.
#[instrument(skip(config))]
pub fn build_state(config: &VvgoConfig) -> VvgoResult<AppState> {
    let store = RedisStore::new(&config.redis.url)?;

    let mut sheets_config =
        GoogleSheetsConfig::default().with_api_endpoint(config.sheets.api_endpoint.clone());
    if let Some(api_key) = &config.sheets.api_key {
        sheets_config = sheets_config.with_api_key(api_key.clone());
    }
    let source = GoogleSheetsClient::new(sheets_config);

    let cache = SheetCache::new(Arc::new(store), Arc::new(source))
        .with_ttl(config.sheets.cache_ttl());
    let directory = ProjectDirectory::new(
        Arc::new(cache),
        config.sheets.website_data_spreadsheet_id.clone(),
    )
    .with_range(config.sheets.projects_range.clone());

    let commands = SlashCommands::standard(directory);
    let dispatcher = InteractionDispatcher::new(&config.discord.public_key, Arc::new(commands));

    let mut discord_config = DiscordConfig::new(
        config.discord.application_id.clone(),
        config.discord.bot_token.clone(),
    )
    .with_api_endpoint(config.discord.api_endpoint.clone());
    if let Some(guild_id) = &config.discord.guild_id {
        discord_config = discord_config.with_guild_id(guild_id.clone());
    }
    let registry = DiscordClient::new(discord_config);

    Ok(AppState::new(Arc::new(dispatcher), Arc::new(registry)))
}
