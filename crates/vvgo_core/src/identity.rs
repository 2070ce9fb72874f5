//! Caller identity.

use crate::Role;
use serde::{Deserialize, Serialize};

/// The requesting user's role set.
///
/// Identities only live for the duration of a request and are used solely
/// for visibility filtering.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Identity {
    #[serde(rename = "Roles", default)]
    roles: Vec<Role>,
}

impl Identity {
    /// Create an identity holding the given roles.
    pub fn new(roles: impl IntoIterator<Item = Role>) -> Self {
        let mut roles: Vec<Role> = roles.into_iter().collect();
        roles.sort();
        roles.dedup();
        Self { roles }
    }

    /// The identity used for requests without website authentication,
    /// such as slash commands.
    pub fn anonymous() -> Self {
        Self::new([Role::Anonymous])
    }

    /// Whether this identity holds `role`.
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    /// Whether this identity holds any elevated role.
    pub fn is_elevated(&self) -> bool {
        self.roles.iter().any(|role| role.is_elevated())
    }

    /// Whether this identity has no meaningful roles.
    pub fn is_anonymous(&self) -> bool {
        self.roles.iter().all(|role| *role == Role::Anonymous)
    }

    /// Roles held by this identity.
    pub fn roles(&self) -> &[Role] {
        &self.roles
    }
}
