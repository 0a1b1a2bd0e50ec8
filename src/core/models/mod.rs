//! Data models for veritrust
//!
//! Core abstractions:
//! - StaffMember: the persisted identity and status for one person
//! - VerificationLog: an immutable audit entry for one scan attempt
//! - Role: which experience a principal was admitted to

mod role;
pub mod staff;
mod verification;

pub use role::Role;
pub use staff::{StaffMember, StaffStatus};
pub use verification::{ScanResult, VerificationLog};
