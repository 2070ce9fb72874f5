//! Interaction and application-command wire types.
//!
//! Enumerations travel as integers on the wire.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Kind of an inbound interaction.
///
/// Unknown values deserialize to [`InteractionType::Other`] so the
/// dispatcher can reject them explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum InteractionType {
    /// Liveness check sent by Discord.
    Ping,
    /// A user invoked a slash command.
    ApplicationCommand,
    /// Any other interaction type.
    Other(u8),
}

impl From<u8> for InteractionType {
    fn from(value: u8) -> Self {
        match value {
            1 => Self::Ping,
            2 => Self::ApplicationCommand,
            other => Self::Other(other),
        }
    }
}

impl From<InteractionType> for u8 {
    fn from(value: InteractionType) -> Self {
        match value {
            InteractionType::Ping => 1,
            InteractionType::ApplicationCommand => 2,
            InteractionType::Other(other) => other,
        }
    }
}

/// Kind of an interaction response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum InteractionResponseType {
    /// Acknowledge a ping.
    Pong,
    /// Acknowledge a command without sending a message.
    Acknowledge,
    /// Respond with a message, hiding the user's input.
    ChannelMessage,
    /// Respond with a message, showing the user's input.
    ChannelMessageWithSource,
    /// Acknowledge a command, showing the user's input.
    AcknowledgeWithSource,
}

impl TryFrom<u8> for InteractionResponseType {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Pong),
            2 => Ok(Self::Acknowledge),
            3 => Ok(Self::ChannelMessage),
            4 => Ok(Self::ChannelMessageWithSource),
            5 => Ok(Self::AcknowledgeWithSource),
            other => Err(format!("unknown interaction response type {}", other)),
        }
    }
}

impl From<InteractionResponseType> for u8 {
    fn from(value: InteractionResponseType) -> Self {
        match value {
            InteractionResponseType::Pong => 1,
            InteractionResponseType::Acknowledge => 2,
            InteractionResponseType::ChannelMessage => 3,
            InteractionResponseType::ChannelMessageWithSource => 4,
            InteractionResponseType::AcknowledgeWithSource => 5,
        }
    }
}

/// Type of a slash-command option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ApplicationCommandOptionType {
    /// A sub-command.
    SubCommand,
    /// A group of sub-commands.
    SubCommandGroup,
    /// Free text, optionally restricted to choices.
    String,
    /// An integer.
    Integer,
    /// A boolean.
    Boolean,
    /// A user mention.
    User,
    /// A channel mention.
    Channel,
    /// A role mention.
    Role,
}

impl TryFrom<u8> for ApplicationCommandOptionType {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::SubCommand),
            2 => Ok(Self::SubCommandGroup),
            3 => Ok(Self::String),
            4 => Ok(Self::Integer),
            5 => Ok(Self::Boolean),
            6 => Ok(Self::User),
            7 => Ok(Self::Channel),
            8 => Ok(Self::Role),
            other => Err(format!("unknown option type {}", other)),
        }
    }
}

impl From<ApplicationCommandOptionType> for u8 {
    fn from(value: ApplicationCommandOptionType) -> Self {
        match value {
            ApplicationCommandOptionType::SubCommand => 1,
            ApplicationCommandOptionType::SubCommandGroup => 2,
            ApplicationCommandOptionType::String => 3,
            ApplicationCommandOptionType::Integer => 4,
            ApplicationCommandOptionType::Boolean => 5,
            ApplicationCommandOptionType::User => 6,
            ApplicationCommandOptionType::Channel => 7,
            ApplicationCommandOptionType::Role => 8,
        }
    }
}

/// An inbound interaction.
#[derive(
    Debug, Clone, PartialEq, Serialize, Deserialize, Getters, derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct Interaction {
    /// Interaction snowflake
    #[serde(default)]
    #[builder(default)]
    id: String,
    /// Interaction type
    #[serde(rename = "type")]
    kind: InteractionType,
    /// Command payload, present for application commands
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    data: Option<ApplicationCommandInteractionData>,
    /// Guild the command was invoked in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    guild_id: Option<String>,
    /// Channel the command was invoked in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    channel_id: Option<String>,
    /// Continuation token for follow-up messages
    #[serde(default)]
    #[builder(default)]
    token: String,
    /// Interaction payload version
    #[serde(default)]
    #[builder(default)]
    version: u8,
}

impl Interaction {
    /// Name of the invoked command, if any.
    pub fn command_name(&self) -> Option<&str> {
        self.data.as_ref().map(|data| data.name.as_str())
    }

    /// Text value of the option named `name`.
    ///
    /// When an option repeats, the last occurrence wins.
    pub fn option(&self, name: &str) -> Option<String> {
        self.data.as_ref()?.option(name)
    }
}

/// Command payload of an application-command interaction.
#[derive(
    Debug, Clone, PartialEq, Serialize, Deserialize, Getters, derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct ApplicationCommandInteractionData {
    /// Command snowflake
    #[serde(default)]
    #[builder(default)]
    id: String,
    /// Command name
    name: String,
    /// Supplied options
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    options: Vec<ApplicationCommandInteractionDataOption>,
}

impl ApplicationCommandInteractionData {
    /// Text value of the option named `name`.
    pub fn option(&self, name: &str) -> Option<String> {
        self.options
            .iter()
            .rev()
            .find(|option| option.name == name)
            .map(ApplicationCommandInteractionDataOption::value_text)
    }
}

/// One supplied option value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationCommandInteractionDataOption {
    /// Option name
    pub name: String,
    /// Option value as sent by Discord
    #[serde(default)]
    pub value: serde_json::Value,
}

impl ApplicationCommandInteractionDataOption {
    /// Create a string-valued option.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: serde_json::Value::String(value.into()),
        }
    }

    /// The value as text.
    pub fn value_text(&self) -> String {
        match &self.value {
            serde_json::Value::String(s) => s.clone(),
            serde_json::Value::Null => String::new(),
            other => other.to_string(),
        }
    }
}

/// Reply to an interaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionResponse {
    /// Response type
    #[serde(rename = "type")]
    pub kind: InteractionResponseType,
    /// Message payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<InteractionApplicationCommandCallbackData>,
}

impl InteractionResponse {
    /// Answer to a ping.
    pub fn pong() -> Self {
        Self {
            kind: InteractionResponseType::Pong,
            data: None,
        }
    }

    /// A text message reply.
    pub fn message(kind: InteractionResponseType, content: impl Into<String>) -> Self {
        Self {
            kind,
            data: Some(InteractionApplicationCommandCallbackData {
                content: content.into(),
            }),
        }
    }

    /// Message text, if any.
    pub fn content(&self) -> Option<&str> {
        self.data.as_ref().map(|data| data.content.as_str())
    }
}

/// Message payload of an interaction response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionApplicationCommandCallbackData {
    /// Message text
    pub content: String,
}

/// A registered slash command as reported by Discord.
#[derive(
    Debug, Clone, PartialEq, Serialize, Deserialize, Getters, derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct ApplicationCommand {
    /// Command snowflake
    #[serde(default)]
    #[builder(default)]
    id: String,
    /// Owning application
    #[serde(default)]
    #[builder(default)]
    application_id: String,
    /// Command name
    name: String,
    /// Command description
    #[serde(default)]
    #[builder(default)]
    description: String,
    /// Command options
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    options: Vec<ApplicationCommandOption>,
}

/// A slash-command option definition.
#[derive(
    Debug, Clone, PartialEq, Serialize, Deserialize, Getters, derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct ApplicationCommandOption {
    /// Option type
    #[serde(rename = "type")]
    kind: ApplicationCommandOptionType,
    /// Option name
    name: String,
    /// Option description
    description: String,
    /// Whether the option must be supplied
    #[serde(default)]
    #[builder(default)]
    required: bool,
    /// Allowed values
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    choices: Vec<ApplicationCommandOptionChoice>,
}

impl ApplicationCommandOption {
    /// Create an optional option without choices.
    pub fn new(
        kind: ApplicationCommandOptionType,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            name: name.into(),
            description: description.into(),
            required: false,
            choices: Vec::new(),
        }
    }

    /// Set whether the option must be supplied.
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Restrict the option to `choices`.
    pub fn with_choices(mut self, choices: Vec<ApplicationCommandOptionChoice>) -> Self {
        self.choices = choices;
        self
    }
}

/// One allowed value of an option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationCommandOptionChoice {
    /// Label shown to the user
    pub name: String,
    /// Value sent back in the interaction
    pub value: String,
}

/// Body of a create-command request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateApplicationCommandParams {
    /// Command name
    pub name: String,
    /// Command description
    pub description: String,
    /// Command options
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<ApplicationCommandOption>,
}
