//! Project directory.

use crate::{Project, Projects, SheetCache, map_rows};
use std::sync::Arc;
use tracing::instrument;
use vvgo_core::Identity;
use vvgo_error::SheetsError;

/// Sheet range holding the project table.
pub const DEFAULT_PROJECTS_RANGE: &str = "Projects";

/// Lists projects from the website data spreadsheet.
#[derive(Clone)]
pub struct ProjectDirectory {
    cache: Arc<SheetCache>,
    spreadsheet_id: String,
    range: String,
}

impl ProjectDirectory {
    /// Create a directory reading [`DEFAULT_PROJECTS_RANGE`] of `spreadsheet_id`.
    pub fn new(cache: Arc<SheetCache>, spreadsheet_id: impl Into<String>) -> Self {
        Self {
            cache,
            spreadsheet_id: spreadsheet_id.into(),
            range: DEFAULT_PROJECTS_RANGE.to_string(),
        }
    }

    /// Read a different range.
    pub fn with_range(mut self, range: impl Into<String>) -> Self {
        self.range = range.into();
        self
    }

    /// Spreadsheet this directory reads.
    pub fn spreadsheet_id(&self) -> &str {
        &self.spreadsheet_id
    }

    /// Range this directory reads.
    pub fn range(&self) -> &str {
        &self.range
    }

    /// Projects visible to `identity`.
    ///
    /// Released projects are visible to everyone; unreleased ones only to
    /// identities holding an elevated role.
    #[instrument(skip(self, identity), fields(spreadsheet_id = %self.spreadsheet_id, range = %self.range))]
    pub async fn list_projects(&self, identity: &Identity) -> Result<Projects, SheetsError> {
        let values = self.cache.read(&self.spreadsheet_id, &self.range).await?;
        let projects = Projects::new(map_rows::<Project>(&values));
        let visible = projects.for_identity(identity);
        tracing::debug!(total = projects.len(), visible = visible.len(), "Listed projects");
        Ok(visible)
    }
}
