//! Slash commands and their handlers.
//!
//! # Supported Commands
//!
//! - `beep` - replies "boop"
//! - `parts` - link to a project's parts page
//! - `submit` - link to a project's submission form

use crate::{
    ApplicationCommand, ApplicationCommandOption, ApplicationCommandOptionChoice,
    ApplicationCommandOptionType, CommandRegistry, CreateApplicationCommandParams, Interaction,
    InteractionResponse, InteractionResponseType,
};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{error, info, instrument};
use vvgo_core::Identity;
use vvgo_error::{DiscordError, DiscordErrorKind};
use vvgo_sheets::{Project, ProjectDirectory, Projects};

/// Reply used when project data cannot be retrieved.
pub const APOLOGY_MESSAGE: &str = "oof please try again 😅";

const WEBSITE_URL: &str = "https://vvgo.org";
const PROJECT_OPTION: &str = "project";

/// Answers one slash command.
///
/// Handlers never fail: when data is unavailable they reply with an apology.
#[async_trait]
pub trait InteractionHandler: Send + Sync {
    /// Build the reply to `interaction`.
    async fn handle(&self, interaction: &Interaction) -> InteractionResponse;

    /// Option definitions published with the command.
    async fn options(&self) -> Result<Vec<ApplicationCommandOption>, DiscordError> {
        Ok(Vec::new())
    }
}

/// A slash command definition bound to its handler.
#[derive(Clone)]
pub struct SlashCommand {
    name: String,
    description: String,
    handler: Arc<dyn InteractionHandler>,
}

impl SlashCommand {
    /// Create a command.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        handler: Arc<dyn InteractionHandler>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            handler,
        }
    }

    /// Command name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Command description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Run the handler.
    pub async fn handle(&self, interaction: &Interaction) -> InteractionResponse {
        self.handler.handle(interaction).await
    }

    /// Build the create-command request body.
    pub async fn params(&self) -> Result<CreateApplicationCommandParams, DiscordError> {
        let options = self.handler.options().await?;
        Ok(CreateApplicationCommandParams {
            name: self.name.clone(),
            description: self.description.clone(),
            options,
        })
    }

    /// Publish this command to `registry`.
    #[instrument(skip(self, registry), fields(command = %self.name))]
    pub async fn create(
        &self,
        registry: &dyn CommandRegistry,
    ) -> Result<ApplicationCommand, DiscordError> {
        let params = self.params().await?;
        registry.create_command(&params).await
    }
}

/// The set of slash commands, looked up by name.
///
/// Registration order is kept for publishing and listing.
#[derive(Clone, Default)]
pub struct SlashCommands {
    commands: Vec<SlashCommand>,
    by_name: HashMap<String, usize>,
}

impl SlashCommands {
    /// An empty command set.
    pub fn new() -> Self {
        Self::default()
    }

    /// `beep`, `parts` and `submit`, reading projects from `directory`.
    pub fn standard(directory: ProjectDirectory) -> Self {
        let directory = Arc::new(directory);
        Self::new()
            .with(SlashCommand::new(
                "beep",
                "Send a beep.",
                Arc::new(BeepHandler),
            ))
            .with(SlashCommand::new(
                "parts",
                "Parts link for a project.",
                Arc::new(PartsHandler::new(directory.clone())),
            ))
            .with(SlashCommand::new(
                "submit",
                "Submission link for a project.",
                Arc::new(SubmitHandler::new(directory)),
            ))
    }

    /// Add a command. A command with the same name is replaced in place.
    pub fn with(mut self, command: SlashCommand) -> Self {
        match self.by_name.get(command.name()) {
            Some(&i) => self.commands[i] = command,
            None => {
                self.by_name
                    .insert(command.name().to_string(), self.commands.len());
                self.commands.push(command);
            }
        }
        self
    }

    /// The command named `name`.
    pub fn get(&self, name: &str) -> Option<&SlashCommand> {
        self.by_name.get(name).map(|&i| &self.commands[i])
    }

    /// Commands in registration order.
    pub fn iter(&self) -> std::slice::Iter<'_, SlashCommand> {
        self.commands.iter()
    }

    /// Command names in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.commands.iter().map(SlashCommand::name).collect()
    }

    /// Number of commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether there are no commands.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Publish every command to `registry`.
    ///
    /// A failing command is logged and does not stop the others.
    #[instrument(skip_all, fields(count = self.commands.len()))]
    pub async fn create_all(
        &self,
        registry: &dyn CommandRegistry,
    ) -> Vec<Result<ApplicationCommand, DiscordError>> {
        let mut results = Vec::with_capacity(self.commands.len());
        for command in &self.commands {
            let result = command.create(registry).await;
            match &result {
                Ok(_) => info!(command = command.name(), "command created"),
                Err(e) => error!(command = command.name(), error = %e, "SlashCommand::create() failed"),
            }
            results.push(result);
        }
        results
    }
}

/// Static `beep` reply.
#[derive(Debug, Clone, Copy, Default)]
pub struct BeepHandler;

#[async_trait]
impl InteractionHandler for BeepHandler {
    async fn handle(&self, _interaction: &Interaction) -> InteractionResponse {
        InteractionResponse::message(InteractionResponseType::ChannelMessageWithSource, "boop")
    }
}

/// The `project` option: one choice per current project visible anonymously.
pub fn project_command_option(projects: &Projects) -> ApplicationCommandOption {
    let choices = projects
        .iter()
        .map(|project| ApplicationCommandOptionChoice {
            name: project.title.clone(),
            value: project.name.clone(),
        })
        .collect::<Vec<_>>();
    ApplicationCommandOption::new(
        ApplicationCommandOptionType::String,
        PROJECT_OPTION,
        "Name of the project",
    )
    .with_required(true)
    .with_choices(choices)
}

async fn project_options(
    command: &str,
    directory: &ProjectDirectory,
) -> Result<Vec<ApplicationCommandOption>, DiscordError> {
    let projects = directory
        .list_projects(&Identity::anonymous())
        .await
        .map_err(|e| {
            DiscordError::new(DiscordErrorKind::Options {
                command: command.to_string(),
                reason: e.to_string(),
            })
        })?;
    Ok(vec![project_command_option(&projects.current())])
}

/// Look up the project named by the interaction's `project` option and
/// format a reply; apologise when that is not possible.
async fn project_reply(
    directory: &ProjectDirectory,
    interaction: &Interaction,
    format: impl FnOnce(&Project) -> String,
) -> InteractionResponse {
    let project_name = interaction.option(PROJECT_OPTION).unwrap_or_default();

    let content = match directory.list_projects(&Identity::anonymous()).await {
        Ok(projects) => projects.get(&project_name).map(format),
        Err(e) => {
            error!(error = %e, "ProjectDirectory::list_projects() failed");
            None
        }
    };

    InteractionResponse::message(
        InteractionResponseType::ChannelMessage,
        content.unwrap_or_else(|| APOLOGY_MESSAGE.to_string()),
    )
}

/// `parts`: link to a project's parts page.
#[derive(Clone)]
pub struct PartsHandler {
    directory: Arc<ProjectDirectory>,
}

impl PartsHandler {
    /// Create a handler reading from `directory`.
    pub fn new(directory: Arc<ProjectDirectory>) -> Self {
        Self { directory }
    }
}

#[async_trait]
impl InteractionHandler for PartsHandler {
    #[instrument(skip_all, fields(command = "parts"))]
    async fn handle(&self, interaction: &Interaction) -> InteractionResponse {
        project_reply(&self.directory, interaction, |project| {
            format!(
                "[Parts for {}]({}{})",
                project.title,
                WEBSITE_URL,
                project.parts_page()
            )
        })
        .await
    }

    async fn options(&self) -> Result<Vec<ApplicationCommandOption>, DiscordError> {
        project_options("parts", &self.directory).await
    }
}

/// `submit`: link to a project's submission form.
#[derive(Clone)]
pub struct SubmitHandler {
    directory: Arc<ProjectDirectory>,
}

impl SubmitHandler {
    /// Create a handler reading from `directory`.
    pub fn new(directory: Arc<ProjectDirectory>) -> Self {
        Self { directory }
    }
}

#[async_trait]
impl InteractionHandler for SubmitHandler {
    #[instrument(skip_all, fields(command = "submit"))]
    async fn handle(&self, interaction: &Interaction) -> InteractionResponse {
        project_reply(&self.directory, interaction, |project| {
            format!(
                "[Submit here]({}) for {}.",
                project.submission_link, project.title
            )
        })
        .await
    }

    async fn options(&self) -> Result<Vec<ApplicationCommandOption>, DiscordError> {
        project_options("submit", &self.directory).await
    }
}
