//! Role model
//!
//! A role names the experience a principal was admitted to. Admin is a role,
//! not a record: no per-admin identity is tracked. Verifying needs no role
//! at all; sessionless scans act under the device identity.

use serde::{Deserialize, Serialize};

/// The two admitted roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Organization administrator (shared passphrase, no record)
    Admin,
    /// A staff member holding a digital identity card
    Staff,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Admin => write!(f, "ADMIN"),
            Self::Staff => write!(f, "STAFF"),
        }
    }
}
