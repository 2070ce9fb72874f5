//! Tests for signed interaction dispatch.

mod common;

use common::{directory_with, offline_directory, public_key_hex, sign};
use serde_json::json;
use std::sync::Arc;
use vvgo_discord::{
    ApplicationCommandInteractionDataBuilder, ApplicationCommandInteractionDataOption,
    FALLBACK_MESSAGE, InteractionBuilder, InteractionDispatcher, InteractionResponse,
    InteractionResponseType, InteractionType, SlashCommands,
};
use vvgo_error::InteractionErrorKind;

fn dispatcher() -> InteractionDispatcher {
    InteractionDispatcher::new(
        &public_key_hex(),
        Arc::new(SlashCommands::standard(offline_directory())),
    )
}

fn command(name: &str, options: Vec<ApplicationCommandInteractionDataOption>) -> vvgo_discord::Interaction {
    InteractionBuilder::default()
        .kind(InteractionType::ApplicationCommand)
        .data(
            ApplicationCommandInteractionDataBuilder::default()
                .name(name)
                .options(options)
                .build()
                .unwrap(),
        )
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_signed_ping_is_ponged() {
    let body = br#"{"type":1}"#;
    let signature = sign("1234", body);
    let response = dispatcher()
        .handle_request(Some(signature.as_str()), Some("1234"), body)
        .await
        .unwrap();
    assert_eq!(response, InteractionResponse::pong());
}

#[tokio::test]
async fn test_bad_signature_is_unauthorized() {
    let err = dispatcher()
        .handle_request(Some("acbd"), Some("1234"), br#"{"type":1}"#)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), &InteractionErrorKind::Unauthorized);
    assert_eq!(err.status_code(), 401);
}

#[tokio::test]
async fn test_signature_over_other_body_is_unauthorized() {
    let signature = sign("1234", br#"{"type":2}"#);
    let err = dispatcher()
        .handle_request(Some(signature.as_str()), Some("1234"), br#"{"type":1}"#)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), &InteractionErrorKind::Unauthorized);
}

#[tokio::test]
async fn test_signature_with_other_timestamp_is_unauthorized() {
    let body = br#"{"type":1}"#;
    let signature = sign("1234", body);
    let err = dispatcher()
        .handle_request(Some(signature.as_str()), Some("1235"), body)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), &InteractionErrorKind::Unauthorized);
}

#[tokio::test]
async fn test_missing_or_undecodable_signature_is_bad_request() {
    for signature in [None, Some(""), Some("not hex")] {
        let err = dispatcher()
            .handle_request(signature, Some("1234"), br#"{"type":1}"#)
            .await
            .unwrap_err();
        assert_eq!(
            err.kind(),
            &InteractionErrorKind::BadRequest("invalid signature".into())
        );
    }
}

#[tokio::test]
async fn test_missing_timestamp_is_bad_request() {
    for timestamp in [None, Some("")] {
        let err = dispatcher()
            .handle_request(Some("acbd"), timestamp, br#"{"type":1}"#)
            .await
            .unwrap_err();
        assert_eq!(
            err.kind(),
            &InteractionErrorKind::BadRequest("invalid signature timestamp".into())
        );
        assert_eq!(err.status_code(), 400);
    }
}

#[tokio::test]
async fn test_invalid_public_key_is_configuration_error() {
    for key in ["", "zz", "abcd"] {
        let dispatcher = InteractionDispatcher::new(key, Arc::new(SlashCommands::new()));
        let err = dispatcher
            .handle_request(Some("acbd"), Some("1234"), br#"{"type":1}"#)
            .await
            .unwrap_err();
        assert!(matches!(err.kind(), InteractionErrorKind::Configuration(_)));
        assert_eq!(err.status_code(), 500);
    }
}

#[tokio::test]
async fn test_undecodable_body_is_bad_request() {
    let body = b"{not json";
    let signature = sign("1234", body);
    let err = dispatcher()
        .handle_request(Some(signature.as_str()), Some("1234"), body)
        .await
        .unwrap_err();
    match err.kind() {
        InteractionErrorKind::BadRequest(message) => {
            assert!(message.starts_with("invalid request body: "))
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_unsupported_interaction_type() {
    let body = br#"{"type":3}"#;
    let signature = sign("1234", body);
    let err = dispatcher()
        .handle_request(Some(signature.as_str()), Some("1234"), body)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), &InteractionErrorKind::UnsupportedInteraction(3));
    assert_eq!(err.kind().public_message(), "unsupported interaction type");
}

#[tokio::test]
async fn test_beep() {
    let response = dispatcher().dispatch(&command("beep", vec![])).await.unwrap();
    assert_eq!(
        response,
        InteractionResponse::message(InteractionResponseType::ChannelMessageWithSource, "boop")
    );
}

#[tokio::test]
async fn test_unknown_command_gets_fallback() {
    let response = dispatcher()
        .dispatch(&command("dance", vec![]))
        .await
        .unwrap();
    assert_eq!(response.kind, InteractionResponseType::ChannelMessageWithSource);
    assert_eq!(response.content(), Some(FALLBACK_MESSAGE));
}

#[tokio::test]
async fn test_application_command_without_data_gets_fallback() {
    let interaction = InteractionBuilder::default()
        .kind(InteractionType::ApplicationCommand)
        .build()
        .unwrap();
    let response = dispatcher().dispatch(&interaction).await.unwrap();
    assert_eq!(response.content(), Some(FALLBACK_MESSAGE));
}

#[tokio::test]
async fn test_signed_parts_command_end_to_end() {
    let directory = directory_with(vec![
        vec![json!("Name"), json!("Title"), json!("Parts Released")],
        vec![json!("10-hildas-healing"), json!("Hilda's Healing"), json!(true)],
    ])
    .await;
    let dispatcher = InteractionDispatcher::new(
        &public_key_hex(),
        Arc::new(SlashCommands::standard(directory)),
    );

    let body = serde_json::to_vec(&json!({
        "id": "786",
        "type": 2,
        "token": "abc",
        "version": 1,
        "data": {
            "id": "123",
            "name": "parts",
            "options": [{"name": "project", "value": "10-hildas-healing"}]
        }
    }))
    .unwrap();
    let signature = sign("1611111111", &body);

    let response = dispatcher
        .handle_request(Some(signature.as_str()), Some("1611111111"), &body)
        .await
        .unwrap();
    assert_eq!(
        response,
        InteractionResponse::message(
            InteractionResponseType::ChannelMessage,
            "[Parts for Hilda's Healing](https://vvgo.org/parts?project=10-hildas-healing)"
        )
    );
}
