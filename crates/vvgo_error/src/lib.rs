//! Error types for the VVGO website backend.
//!
//! This crate provides the error types shared by every `vvgo_*` crate.
//!
//! # Error Hierarchy
//!
//! Errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - Constructors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use vvgo_error::{SheetsError, SheetsErrorKind, VvgoResult};
//!
//! fn read_projects() -> VvgoResult<Vec<String>> {
//!     Err(SheetsError::new(SheetsErrorKind::Fetch("connection refused".into())))?
//! }
//!
//! assert!(read_projects().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod cache;
mod config;
mod discord;
mod error;
mod interaction;
mod sheets;

pub use cache::{CacheError, CacheErrorKind};
pub use config::ConfigError;
pub use discord::{DiscordError, DiscordErrorKind};
pub use error::{VvgoError, VvgoErrorKind, VvgoResult};
pub use interaction::{InteractionError, InteractionErrorKind};
pub use sheets::{SheetsError, SheetsErrorKind};
