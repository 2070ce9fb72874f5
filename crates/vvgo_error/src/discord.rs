//! Discord REST error types.

/// Discord error variants.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum DiscordErrorKind {
    /// Request to the Discord API failed in transit.
    #[display("HTTP request failed: {}", _0)]
    Http(String),

    /// Discord answered with an error status.
    #[display("Discord API returned {}: {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body or reason
        message: String,
    },

    /// Response body could not be decoded.
    #[display("Failed to deserialize response: {}", _0)]
    Deserialization(String),

    /// Options for a slash command could not be built.
    #[display("Failed to build options for {}: {}", command, reason)]
    Options {
        /// Command name
        command: String,
        /// Why the options could not be built
        reason: String,
    },
}

/// Discord error with source location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Discord Error: {} at line {} in {}", kind, line, file)]
pub struct DiscordError {
    /// The error kind
    pub kind: DiscordErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// File where error occurred
    pub file: &'static str,
}

impl DiscordError {
    /// Create a new DiscordError with automatic location tracking.
    ///
    /// # Example
    /// ```
    /// use vvgo_error::{DiscordError, DiscordErrorKind};
    ///
    /// let err = DiscordError::new(DiscordErrorKind::Http("timed out".into()));
    /// assert!(err.to_string().contains("timed out"));
    /// ```
    #[track_caller]
    pub fn new(kind: DiscordErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &DiscordErrorKind {
        &self.kind
    }
}
