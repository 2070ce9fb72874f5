//! Router tests driven through `tower::ServiceExt::oneshot`.

use async_trait::async_trait;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use ed25519_dalek::{Signer, SigningKey};
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;
use vvgo_discord::{
    ApplicationCommand, ApplicationCommandBuilder, BeepHandler, CommandRegistry,
    CreateApplicationCommandParams, InteractionDispatcher, SlashCommand, SlashCommands,
};
use vvgo_error::{DiscordError, DiscordErrorKind};
use vvgo_server::{AppState, create_router};

fn signing_key() -> SigningKey {
    SigningKey::from_bytes(&[9u8; 32])
}

fn sign(timestamp: &str, body: &[u8]) -> String {
    let mut message = timestamp.as_bytes().to_vec();
    message.extend_from_slice(body);
    hex::encode(signing_key().sign(&message).to_bytes())
}

#[derive(Default)]
struct FakeRegistry {
    down: bool,
    created: Mutex<Vec<String>>,
}

#[async_trait]
impl CommandRegistry for FakeRegistry {
    async fn create_command(
        &self,
        params: &CreateApplicationCommandParams,
    ) -> Result<ApplicationCommand, DiscordError> {
        self.created.lock().unwrap().push(params.name.clone());
        Ok(ApplicationCommandBuilder::default()
            .name(params.name.clone())
            .build()
            .unwrap())
    }

    async fn list_commands(&self) -> Result<Vec<ApplicationCommand>, DiscordError> {
        if self.down {
            return Err(DiscordError::new(DiscordErrorKind::Http(
                "connection refused".into(),
            )));
        }
        Ok(vec![
            ApplicationCommandBuilder::default()
                .id("1")
                .name("beep")
                .description("Send a beep.")
                .build()
                .unwrap(),
        ])
    }
}

fn router_with(public_key: &str, registry: Arc<FakeRegistry>) -> Router {
    let commands = SlashCommands::new().with(SlashCommand::new(
        "beep",
        "Send a beep.",
        Arc::new(BeepHandler),
    ));
    let dispatcher = InteractionDispatcher::new(public_key, Arc::new(commands));
    create_router(AppState::new(Arc::new(dispatcher), registry))
}

fn router() -> Router {
    let public_key = hex::encode(signing_key().verifying_key().to_bytes());
    router_with(&public_key, Arc::new(FakeRegistry::default()))
}

fn interaction_request(signature: &str, timestamp: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/slash_commands")
        .header("X-Signature-Ed25519", signature)
        .header("X-Signature-Timestamp", timestamp)
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_health() {
    let response = router()
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(body, json!({"status": "ok"}));
}

#[tokio::test]
async fn test_signed_ping() {
    let body = r#"{"type":1}"#;
    let signature = sign("1234", body.as_bytes());
    let response = router()
        .oneshot(interaction_request(&signature, "1234", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(body, json!({"type": 1}));
}

#[tokio::test]
async fn test_signed_beep() {
    let body = r#"{"type":2,"data":{"id":"1","name":"beep"}}"#;
    let signature = sign("1234", body.as_bytes());
    let response = router()
        .oneshot(interaction_request(&signature, "1234", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(body, json!({"type": 4, "data": {"content": "boop"}}));
}

#[tokio::test]
async fn test_bad_signature_is_401() {
    let response = router()
        .oneshot(interaction_request("acbd", "1234", r#"{"type":1}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_text(response).await, "authorization failed");
}

#[tokio::test]
async fn test_missing_headers_are_400() {
    let request = Request::post("/slash_commands")
        .body(Body::from(r#"{"type":1}"#))
        .unwrap();
    let response = router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_text(response).await, "invalid signature");

    let request = Request::post("/slash_commands")
        .header("X-Signature-Ed25519", "acbd")
        .body(Body::from(r#"{"type":1}"#))
        .unwrap();
    let response = router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_text(response).await, "invalid signature timestamp");
}

#[tokio::test]
async fn test_unsupported_interaction_is_400() {
    let body = r#"{"type":3}"#;
    let signature = sign("1234", body.as_bytes());
    let response = router()
        .oneshot(interaction_request(&signature, "1234", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_text(response).await, "unsupported interaction type");
}

#[tokio::test]
async fn test_invalid_public_key_is_500_with_empty_body() {
    let router = router_with("", Arc::new(FakeRegistry::default()));
    let response = router
        .oneshot(interaction_request("acbd", "1234", r#"{"type":1}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body_text(response).await.is_empty());
}

#[tokio::test]
async fn test_list_commands() {
    let response = router()
        .oneshot(Request::get("/slash_commands").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(body[0]["name"], "beep");
}

#[tokio::test]
async fn test_list_commands_registry_down_is_500() {
    let registry = Arc::new(FakeRegistry {
        down: true,
        ..Default::default()
    });
    let public_key = hex::encode(signing_key().verifying_key().to_bytes());
    let response = router_with(&public_key, registry)
        .oneshot(Request::get("/slash_commands").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_create_publishes_and_redirects() {
    let registry = Arc::new(FakeRegistry::default());
    let public_key = hex::encode(signing_key().verifying_key().to_bytes());
    let response = router_with(&public_key, registry.clone())
        .oneshot(
            Request::get("/slash_commands/create")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(response.headers()[header::LOCATION], "/slash_commands");
    assert_eq!(*registry.created.lock().unwrap(), vec!["beep".to_string()]);
}
