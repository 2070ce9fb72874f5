//! Tests for the project directory.

mod common;

use common::{FakeSource, project_rows};
use std::sync::Arc;
use vvgo_cache::MemoryStore;
use vvgo_core::{Identity, Role};
use vvgo_error::SheetsErrorKind;
use vvgo_sheets::{DEFAULT_PROJECTS_RANGE, ProjectDirectory, SheetCache};

fn directory(source: FakeSource) -> ProjectDirectory {
    let cache = SheetCache::new(Arc::new(MemoryStore::new()), Arc::new(source));
    ProjectDirectory::new(Arc::new(cache), "website-data")
}

#[tokio::test]
async fn test_anonymous_sees_released_only() {
    let projects = directory(FakeSource::with_values(project_rows()))
        .list_projects(&Identity::anonymous())
        .await
        .unwrap();
    assert_eq!(projects.names(), vec!["10-hildas-healing"]);

    let project = projects.get("10-hildas-healing").unwrap();
    assert_eq!(project.title, "Hilda's Healing");
    assert_eq!(project.submission_link, "https://bit.ly/vvgo10submit");
}

#[tokio::test]
async fn test_elevated_role_sees_unreleased() {
    let projects = directory(FakeSource::with_values(project_rows()))
        .list_projects(&Identity::new([Role::ProductionTeam]))
        .await
        .unwrap();
    assert_eq!(projects.len(), 2);

    let secret = projects.get("09-secret-project").unwrap();
    assert!(!secret.released);
    assert!(secret.archived);
    assert_eq!(projects.current().names(), vec!["10-hildas-healing"]);
}

#[tokio::test]
async fn test_source_failure_propagates() {
    let err = directory(FakeSource::failing())
        .list_projects(&Identity::anonymous())
        .await
        .unwrap_err();
    assert!(matches!(err.kind(), SheetsErrorKind::Fetch(_)));
}

#[test]
fn test_default_range() {
    let dir = directory(FakeSource::failing());
    assert_eq!(dir.range(), DEFAULT_PROJECTS_RANGE);
    assert_eq!(dir.spreadsheet_id(), "website-data");
    assert_eq!(dir.with_range("Archive").range(), "Archive");
}
