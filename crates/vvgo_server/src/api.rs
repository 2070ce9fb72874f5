//! HTTP routes.

use axum::{
    Router,
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
};
use serde_json::json;
use std::sync::Arc;
use tracing::{error, info, instrument};
use vvgo_discord::{
    CommandRegistry, InteractionDispatcher, SIGNATURE_HEADER, TIMESTAMP_HEADER,
};

/// Path of the interaction endpoint and the command listing.
pub const SLASH_COMMANDS_PATH: &str = "/slash_commands";

/// Shared state handed to every route.
#[derive(Clone)]
pub struct AppState {
    dispatcher: Arc<InteractionDispatcher>,
    registry: Arc<dyn CommandRegistry>,
}

impl AppState {
    /// Creates new app state.
    pub fn new(dispatcher: Arc<InteractionDispatcher>, registry: Arc<dyn CommandRegistry>) -> Self {
        Self {
            dispatcher,
            registry,
        }
    }

    /// The interaction dispatcher.
    pub fn dispatcher(&self) -> &InteractionDispatcher {
        &self.dispatcher
    }
}

/// Creates the server router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route(
            SLASH_COMMANDS_PATH,
            post(handle_interaction).get(list_commands),
        )
        .route("/slash_commands/create", get(create_commands))
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

/// Discord interaction endpoint.
async fn handle_interaction(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let signature = header_text(&headers, SIGNATURE_HEADER);
    let timestamp = header_text(&headers, TIMESTAMP_HEADER);

    match state
        .dispatcher
        .handle_request(signature, timestamp, &body)
        .await
    {
        Ok(response) => Json(response).into_response(),
        Err(e) => {
            let status = StatusCode::from_u16(e.status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            info!(%status, error = %e, "interaction rejected");
            (status, e.kind().public_message()).into_response()
        }
    }
}

/// Commands currently registered with Discord.
#[instrument(skip_all)]
async fn list_commands(State(state): State<AppState>) -> Response {
    match state.registry.list_commands().await {
        Ok(commands) => Json(commands).into_response(),
        Err(e) => {
            error!(error = %e, "CommandRegistry::list_commands() failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Push every command definition, then show the listing.
#[instrument(skip_all)]
async fn create_commands(State(state): State<AppState>) -> Response {
    let results = state
        .dispatcher
        .commands()
        .create_all(state.registry.as_ref())
        .await;
    let failed = results.iter().filter(|result| result.is_err()).count();
    info!(total = results.len(), failed, "published slash commands");

    (StatusCode::FOUND, [(header::LOCATION, SLASH_COMMANDS_PATH)]).into_response()
}

fn header_text<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|value| value.to_str().ok())
}
