//! Interaction endpoint error types.

/// Terminal failure outcomes of an inbound interaction request.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum InteractionErrorKind {
    /// The configured signing key is missing or invalid.
    #[display("invalid discord public key: {}", _0)]
    Configuration(String),

    /// The request signature does not match.
    #[display("authorization failed")]
    Unauthorized,

    /// Missing or malformed headers, or an undecodable body.
    #[display("{}", _0)]
    BadRequest(String),

    /// The interaction type is not one we answer.
    #[display("unsupported interaction type")]
    UnsupportedInteraction(u8),
}

impl InteractionErrorKind {
    /// HTTP status code for this outcome.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Configuration(_) => 500,
            Self::Unauthorized => 401,
            Self::BadRequest(_) | Self::UnsupportedInteraction(_) => 400,
        }
    }

    /// Plain-text body returned to the caller.
    ///
    /// Configuration failures are not the caller's fault and carry no body.
    pub fn public_message(&self) -> String {
        match self {
            Self::Configuration(_) => String::new(),
            other => other.to_string(),
        }
    }
}

/// Interaction error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Interaction Error: {} at line {} in {}", kind, line, file)]
pub struct InteractionError {
    /// The error kind
    pub kind: InteractionErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// File where error occurred
    pub file: &'static str,
}

impl InteractionError {
    /// Create a new InteractionError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: InteractionErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &InteractionErrorKind {
        &self.kind
    }

    /// HTTP status code for this error.
    pub fn status_code(&self) -> u16 {
        self.kind.status_code()
    }
}
