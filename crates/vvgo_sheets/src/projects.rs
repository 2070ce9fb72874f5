//! Project collections.

use crate::Project;
use serde::{Deserialize, Serialize};
use vvgo_core::Identity;

/// An ordered collection of projects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Projects(Vec<Project>);

impl Projects {
    /// Wrap a list of projects, keeping their order.
    pub fn new(projects: Vec<Project>) -> Self {
        Self(projects)
    }

    /// The project named exactly `name`.
    pub fn with_name(&self, name: &str) -> Option<&Project> {
        self.0.iter().find(|project| project.name == name)
    }

    /// Alias of [`Projects::with_name`].
    pub fn get(&self, name: &str) -> Option<&Project> {
        self.with_name(name)
    }

    /// Whether a project named `name` exists.
    pub fn exists(&self, name: &str) -> bool {
        self.with_name(name).is_some()
    }

    /// Projects that are not archived.
    pub fn current(&self) -> Projects {
        self.0
            .iter()
            .filter(|project| !project.archived)
            .cloned()
            .collect()
    }

    /// Projects `identity` may see: released ones, or all of them for an
    /// elevated identity.
    pub fn for_identity(&self, identity: &Identity) -> Projects {
        let elevated = identity.is_elevated();
        self.0
            .iter()
            .filter(|project| project.released || elevated)
            .cloned()
            .collect()
    }

    /// Sort in place by name, ascending.
    pub fn sort(&mut self) {
        self.0.sort_by(|a, b| a.name.cmp(&b.name));
    }

    /// A copy sorted by name, ascending.
    pub fn sorted(&self) -> Projects {
        let mut sorted = self.clone();
        sorted.sort();
        sorted
    }

    /// Project names in collection order.
    pub fn names(&self) -> Vec<&str> {
        self.0.iter().map(|project| project.name.as_str()).collect()
    }

    /// Iterate over the projects.
    pub fn iter(&self) -> std::slice::Iter<'_, Project> {
        self.0.iter()
    }

    /// Number of projects.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Project>> for Projects {
    fn from(projects: Vec<Project>) -> Self {
        Self(projects)
    }
}

impl FromIterator<Project> for Projects {
    fn from_iter<I: IntoIterator<Item = Project>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Projects {
    type Item = Project;
    type IntoIter = std::vec::IntoIter<Project>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Projects {
    type Item = &'a Project;
    type IntoIter = std::slice::Iter<'a, Project>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
