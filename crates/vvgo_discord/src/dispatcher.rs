//! Signed interaction dispatch.
//!
//! Each request goes through a single pass: verify the signature, decode
//! the interaction, route it. The three outcomes are a handled response,
//! an unauthorized request, or a bad request.

use crate::{Interaction, InteractionResponse, InteractionResponseType, InteractionType, SlashCommands};
use ed25519_dalek::{Signature, Verifier, VerifyingKey};
use std::sync::Arc;
use tracing::{debug, error, instrument, warn};
use vvgo_error::{InteractionError, InteractionErrorKind};

/// Header carrying the hex-encoded Ed25519 signature.
pub const SIGNATURE_HEADER: &str = "X-Signature-Ed25519";

/// Header carrying the signed timestamp.
pub const TIMESTAMP_HEADER: &str = "X-Signature-Timestamp";

/// Reply to an application command nobody handles.
pub const FALLBACK_MESSAGE: &str = "this interaction is too galaxy brain for me 😥";

/// Verifies inbound interactions and routes them to slash commands.
#[derive(Clone)]
pub struct InteractionDispatcher {
    public_key: Result<VerifyingKey, String>,
    commands: Arc<SlashCommands>,
}

impl InteractionDispatcher {
    /// Create a dispatcher verifying against the hex-encoded `public_key`.
    ///
    /// An unusable key is not fatal here; every request is answered with a
    /// configuration error until the key is fixed.
    pub fn new(public_key: &str, commands: Arc<SlashCommands>) -> Self {
        let public_key = decode_public_key(public_key);
        if let Err(reason) = &public_key {
            error!(%reason, "invalid discord public key");
        }
        Self {
            public_key,
            commands,
        }
    }

    /// The registered commands.
    pub fn commands(&self) -> &SlashCommands {
        &self.commands
    }

    /// Check `signature` over `timestamp` followed by `body`.
    ///
    /// # Errors
    ///
    /// - `Configuration` when the public key is unusable
    /// - `BadRequest` when either header is missing or not decodable
    /// - `Unauthorized` when the signature does not verify
    pub fn verify(
        &self,
        signature: Option<&str>,
        timestamp: Option<&str>,
        body: &[u8],
    ) -> Result<(), InteractionError> {
        let public_key = self.public_key.as_ref().map_err(|reason| {
            error!(%reason, "invalid discord public key");
            InteractionError::new(InteractionErrorKind::Configuration(reason.clone()))
        })?;

        let signature = signature
            .and_then(|s| hex::decode(s).ok())
            .filter(|bytes| !bytes.is_empty())
            .ok_or_else(|| {
                InteractionError::new(InteractionErrorKind::BadRequest(
                    "invalid signature".to_string(),
                ))
            })?;

        let timestamp = timestamp.filter(|t| !t.is_empty()).ok_or_else(|| {
            InteractionError::new(InteractionErrorKind::BadRequest(
                "invalid signature timestamp".to_string(),
            ))
        })?;

        // A signature of the wrong length can never verify
        let signature = Signature::from_slice(&signature)
            .map_err(|_| InteractionError::new(InteractionErrorKind::Unauthorized))?;

        let mut message = Vec::with_capacity(timestamp.len() + body.len());
        message.extend_from_slice(timestamp.as_bytes());
        message.extend_from_slice(body);

        public_key.verify(&message, &signature).map_err(|_| {
            warn!("interaction signature mismatch");
            InteractionError::new(InteractionErrorKind::Unauthorized)
        })
    }

    /// Verify, decode and dispatch one raw interaction request.
    #[instrument(skip_all, fields(body_len = body.len()))]
    pub async fn handle_request(
        &self,
        signature: Option<&str>,
        timestamp: Option<&str>,
        body: &[u8],
    ) -> Result<InteractionResponse, InteractionError> {
        self.verify(signature, timestamp, body)?;

        let interaction: Interaction = serde_json::from_slice(body).map_err(|e| {
            error!(error = %e, "failed to decode interaction body");
            InteractionError::new(InteractionErrorKind::BadRequest(format!(
                "invalid request body: {}",
                e
            )))
        })?;

        self.dispatch(&interaction).await
    }

    /// Route a decoded interaction.
    ///
    /// Pings are answered without consulting the commands. Unknown command
    /// names get [`FALLBACK_MESSAGE`].
    #[instrument(skip_all, fields(kind = ?interaction.kind(), command = interaction.command_name()))]
    pub async fn dispatch(
        &self,
        interaction: &Interaction,
    ) -> Result<InteractionResponse, InteractionError> {
        match interaction.kind() {
            InteractionType::Ping => Ok(InteractionResponse::pong()),
            InteractionType::ApplicationCommand => {
                let name = interaction.command_name().unwrap_or_default();
                match self.commands.get(name) {
                    Some(command) => {
                        debug!("Dispatching to command handler");
                        Ok(command.handle(interaction).await)
                    }
                    None => Ok(InteractionResponse::message(
                        InteractionResponseType::ChannelMessageWithSource,
                        FALLBACK_MESSAGE,
                    )),
                }
            }
            InteractionType::Other(kind) => {
                warn!(kind, "unsupported interaction type");
                Err(InteractionError::new(
                    InteractionErrorKind::UnsupportedInteraction(*kind),
                ))
            }
        }
    }
}

fn decode_public_key(public_key: &str) -> Result<VerifyingKey, String> {
    let bytes = hex::decode(public_key).map_err(|e| e.to_string())?;
    if bytes.is_empty() {
        return Err("public key is empty".to_string());
    }
    let bytes: [u8; 32] = bytes
        .try_into()
        .map_err(|b: Vec<u8>| format!("public key is {} bytes, expected 32", b.len()))?;
    VerifyingKey::from_bytes(&bytes).map_err(|e| e.to_string())
}
