//! Status lifecycle rules
//!
//! All transitions are administrator-initiated toggles; nothing moves a
//! record automatically (in particular, `valid_until` passing does not
//! expire a card — re-marking is a manual act).
//!
//! The single transition:
//!
//! - ACTIVE → SUSPENDED
//! - SUSPENDED → ACTIVE
//! - EXPIRED → ACTIVE (manual override of an expiry; does not extend
//!   `valid_until`)
//!
//! There is no terminal state and no delete/archive transition.

use crate::core::models::StaffStatus;

/// Compute the status an administrator toggle moves a record to
#[must_use]
pub const fn toggled(status: StaffStatus) -> StaffStatus {
    match status {
        StaffStatus::Active => StaffStatus::Suspended,
        StaffStatus::Suspended | StaffStatus::Expired => StaffStatus::Active,
    }
}

/// Initial status for every newly created record
#[must_use]
pub const fn initial_status() -> StaffStatus {
    StaffStatus::Active
}
