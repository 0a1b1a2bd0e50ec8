//! Verification log model
//!
//! A verification log entry records one scan event. Entries are append-only:
//! created once at scan resolution, never mutated or deleted afterwards.

use serde::{Deserialize, Serialize};

use super::staff::StaffStatus;

/// Outcome recorded for a matched scan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScanResult {
    /// Identity matched and was ACTIVE at scan time
    Pass,
    /// Identity matched but was not ACTIVE at scan time
    Fail,
    /// Reserved; current policy never emits it
    Warn,
}

impl std::fmt::Display for ScanResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pass => write!(f, "PASS"),
            Self::Fail => write!(f, "FAIL"),
            Self::Warn => write!(f, "WARN"),
        }
    }
}

/// An immutable record of one scan event
///
/// Field names follow the remote document schema (camelCase).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationLog {
    /// Unique entry id, generated at scan time
    pub id: String,

    /// The scanned staff id
    pub staff_id: String,

    /// RFC 3339 timestamp of scan resolution
    pub timestamp: String,

    /// Snapshot of the record's status at the moment of the scan.
    /// This is the historical audit value: it never changes retroactively
    /// when the staff record's status later changes.
    pub status_at_scan: StaffStatus,

    /// Acting verifier: a logged-in principal's id, or the per-installation
    /// device pseudo-identity
    pub verifier_id: String,

    /// Computed scan outcome
    pub result: ScanResult,
}

impl VerificationLog {
    /// Create a log entry for a matched scan, stamped now
    #[must_use]
    pub fn new(staff_id: String, status_at_scan: StaffStatus, verifier_id: String) -> Self {
        let result = if status_at_scan == StaffStatus::Active {
            ScanResult::Pass
        } else {
            ScanResult::Fail
        };
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            staff_id,
            timestamp: chrono::Utc::now().to_rfc3339(),
            status_at_scan,
            verifier_id,
            result,
        }
    }
}
