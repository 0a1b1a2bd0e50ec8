//! Business logic services
//!
//! Pure workflow rules with no I/O:
//!
//! - [`auth`] - the three admission gates (admin, staff login, OTP signup)
//! - [`lifecycle`] - status lifecycle transitions
//! - [`scanner`] - scan resolution and log construction
//! - [`insight`] - staff projection and prompt for the insight collaborator

pub mod auth;
pub mod insight;
pub mod lifecycle;
pub mod scanner;
