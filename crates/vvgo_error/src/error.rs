//! Top-level error wrapper types.

use crate::{CacheError, ConfigError, DiscordError, InteractionError, SheetsError};

/// Every error a `vvgo_*` crate can produce.
///
/// # Examples
///
/// ```
/// use vvgo_error::{ConfigError, VvgoError};
///
/// let err: VvgoError = ConfigError::new("Missing public key").into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum VvgoErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Key-value store error
    #[from(CacheError)]
    Cache(CacheError),
    /// Spreadsheet error
    #[from(SheetsError)]
    Sheets(SheetsError),
    /// Discord REST error
    #[from(DiscordError)]
    Discord(DiscordError),
    /// Inbound interaction error
    #[from(InteractionError)]
    Interaction(InteractionError),
}

/// VVGO error with kind discrimination.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("VVGO Error: {}", _0)]
pub struct VvgoError(Box<VvgoErrorKind>);

impl VvgoError {
    /// Create a new error from a kind.
    pub fn new(kind: VvgoErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &VvgoErrorKind {
        &self.0
    }
}

impl<T> From<T> for VvgoError
where
    T: Into<VvgoErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for VVGO operations.
pub type VvgoResult<T> = std::result::Result<T, VvgoError>;
