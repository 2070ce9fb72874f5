//! Cached spreadsheet reads and the project directory.
//!
//! Website metadata lives in a Google Sheets spreadsheet. This crate reads it
//! through a read-through cache and turns rows into typed records:
//!
//! - [`ValuesSource`] fetches raw rows; [`GoogleSheetsClient`] is the REST
//!   implementation.
//! - [`SheetCache`] consults a [`vvgo_cache::KeyValueStore`] first and falls
//!   back to the source, writing fresh rows back with a fixed TTL.
//! - [`FromRow`] and [`map_rows`] bind rows to records through a declarative
//!   column table.
//! - [`ProjectDirectory`] lists [`Projects`] visible to an identity.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use vvgo_cache::MemoryStore;
//! use vvgo_core::Identity;
//! use vvgo_sheets::{GoogleSheetsClient, GoogleSheetsConfig, ProjectDirectory, SheetCache};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let source = GoogleSheetsClient::new(GoogleSheetsConfig::default().with_api_key("key"));
//! let cache = SheetCache::new(Arc::new(MemoryStore::new()), Arc::new(source));
//! let directory = ProjectDirectory::new(Arc::new(cache), "spreadsheet-id");
//!
//! let projects = directory.list_projects(&Identity::anonymous()).await?;
//! for project in projects.current().sorted() {
//!     println!("{}: {}", project.name, project.title);
//! }
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod cache;
mod client;
mod directory;
mod mapper;
mod project;
mod projects;
mod values;

pub use cache::{DEFAULT_CACHE_TTL, SheetCache, cache_key};
pub use client::{GoogleSheetsClient, GoogleSheetsConfig, ValuesSource};
pub use directory::{DEFAULT_PROJECTS_RANGE, ProjectDirectory};
pub use mapper::{Column, FromRow, HeaderIndex, map_rows, parse_bool};
pub use project::Project;
pub use projects::Projects;
pub use values::{Cell, Row, Values, cell_text};
