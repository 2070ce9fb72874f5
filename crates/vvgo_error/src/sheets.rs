//! Spreadsheet error types.

/// Error kinds for spreadsheet reads.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum SheetsErrorKind {
    /// The remote spreadsheet source could not be reached.
    #[display("Failed to retrieve data from sheet: {}", _0)]
    Fetch(String),

    /// The remote spreadsheet source answered with an error status.
    #[display("Sheets API returned {}: {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body or reason
        message: String,
    },

    /// The remote response body could not be decoded.
    #[display("Failed to decode sheet values: {}", _0)]
    Deserialization(String),

    /// The sheet exists but returned no rows.
    #[display("no data in {}:{}", spreadsheet_id, range)]
    NoData {
        /// Spreadsheet that was read
        spreadsheet_id: String,
        /// Range that was read
        range: String,
    },
}

/// Spreadsheet error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Sheets Error: {} at line {} in {}", kind, line, file)]
pub struct SheetsError {
    /// The error kind
    pub kind: SheetsErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// File where error occurred
    pub file: &'static str,
}

impl SheetsError {
    /// Create a new SheetsError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: SheetsErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &SheetsErrorKind {
        &self.kind
    }
}
