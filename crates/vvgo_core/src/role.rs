//! Website roles.

use serde::{Deserialize, Serialize};

/// A role a website identity may hold.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use vvgo_core::Role;
///
/// assert_eq!(Role::ProductionTeam.to_string(), "vvgo-teams");
/// assert_eq!(Role::from_str("vvgo-leader").unwrap(), Role::ExecutiveDirector);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
pub enum Role {
    /// Leadership; sees everything.
    #[serde(rename = "vvgo-leader")]
    #[strum(serialize = "vvgo-leader")]
    ExecutiveDirector,
    /// Production team members.
    #[serde(rename = "vvgo-teams")]
    #[strum(serialize = "vvgo-teams")]
    ProductionTeam,
    /// Verified community members.
    #[serde(rename = "vvgo-member")]
    #[strum(serialize = "vvgo-member")]
    VerifiedMember,
    /// No website session.
    #[serde(rename = "anonymous")]
    #[strum(serialize = "anonymous")]
    Anonymous,
}

impl Role {
    /// Roles that may see unreleased projects.
    pub const ELEVATED: [Role; 2] = [Role::ProductionTeam, Role::ExecutiveDirector];

    /// Whether this role grants visibility into unreleased projects.
    pub fn is_elevated(self) -> bool {
        Self::ELEVATED.contains(&self)
    }
}
