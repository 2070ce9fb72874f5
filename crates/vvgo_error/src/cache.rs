//! Key-value store error types.

/// Error kinds for key-value store operations.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum CacheErrorKind {
    /// Could not open or reach the store.
    #[display("Connection failed: {}", _0)]
    Connection(String),

    /// The store rejected or failed a command.
    #[display("Command {} failed: {}", command, reason)]
    Command {
        /// Command name (e.g. "GET", "SETEX")
        command: String,
        /// Failure reason reported by the store
        reason: String,
    },

    /// A value could not be encoded for storage.
    #[display("Failed to encode value: {}", _0)]
    Encode(String),
}

/// Key-value store error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Cache Error: {} at line {} in {}", kind, line, file)]
pub struct CacheError {
    /// The error kind
    pub kind: CacheErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// File where error occurred
    pub file: &'static str,
}

impl CacheError {
    /// Create a new CacheError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: CacheErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &CacheErrorKind {
        &self.kind
    }
}
