//! Discord slash-command interactions.
//!
//! Discord delivers slash-command invocations as signed HTTP requests. This
//! crate verifies and answers them:
//!
//! - **models**: interaction and application-command wire types
//! - **dispatcher**: `InteractionDispatcher` checks the Ed25519 signature,
//!   decodes the interaction and routes it by command name
//! - **commands**: the `beep`, `parts` and `submit` handlers and the
//!   `SlashCommands` table
//! - **registry**: `CommandRegistry` trait and the `DiscordClient` that
//!   pushes command definitions to Discord
//!
//! # Usage
//!
//! ```rust,ignore
//! let commands = SlashCommands::standard(directory);
//! let dispatcher = InteractionDispatcher::new(&config.public_key, Arc::new(commands));
//!
//! let response = dispatcher
//!     .handle_request(signature_header, timestamp_header, &body)
//!     .await?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod commands;
mod dispatcher;
mod models;
mod registry;

pub use commands::{
    APOLOGY_MESSAGE, BeepHandler, InteractionHandler, PartsHandler, SlashCommand, SlashCommands,
    SubmitHandler, project_command_option,
};
pub use dispatcher::{FALLBACK_MESSAGE, InteractionDispatcher, SIGNATURE_HEADER, TIMESTAMP_HEADER};
pub use models::{
    ApplicationCommand, ApplicationCommandBuilder, ApplicationCommandInteractionData,
    ApplicationCommandInteractionDataBuilder, ApplicationCommandInteractionDataOption,
    ApplicationCommandOption, ApplicationCommandOptionBuilder, ApplicationCommandOptionChoice,
    ApplicationCommandOptionType, CreateApplicationCommandParams, Interaction,
    InteractionApplicationCommandCallbackData, InteractionBuilder, InteractionResponse,
    InteractionResponseType, InteractionType,
};
pub use registry::{CommandRegistry, DiscordClient, DiscordConfig};
