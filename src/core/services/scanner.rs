//! Scan resolution
//!
//! Given a scanned payload, look up the record, classify the result, and
//! build the verification log entry. The caller appends the entry to the
//! record store and decides any follow-up action.
//!
//! Each scan is independent: repeated scans of the same id append a new
//! entry every time. That growing history is the audit trail.
//!
//! Unmatched payloads produce no log entry. A failed verification attempt
//! is arguably more security-relevant than a successful one, so logging
//! them is a recommended enhancement; current policy matches the shipped
//! behavior.

use crate::core::models::staff::DOC_SEAL_PREFIX;
use crate::core::models::{StaffMember, VerificationLog};

/// Outcome of resolving one scanned payload
#[derive(Debug, Clone)]
pub enum Resolution {
    /// Payload matched a staff record; the log entry is ready to append
    Verified {
        /// Snapshot of the matched record at scan time
        staff: StaffMember,
        /// The freshly built log entry
        log: VerificationLog,
    },
    /// Payload is id-shaped but matches no record (INVALID / fake id).
    /// Visually and semantically distinct from a FAIL on a known record.
    NotFound {
        /// The payload that was scanned
        payload: String,
    },
    /// Payload is a printed-document seal, not a scannable identity
    DocumentSeal {
        /// The payload that was scanned
        payload: String,
    },
}

/// Resolve a scanned payload against a staff snapshot.
///
/// Only bare id-shaped payloads are scannable identities; `DOC:`-prefixed
/// seals are refused before lookup. A match snapshots the record's current
/// status into the log entry; `result` is PASS iff the status is ACTIVE.
#[must_use]
pub fn resolve(payload: &str, staff: &[StaffMember], verifier_id: &str) -> Resolution {
    if payload.starts_with(DOC_SEAL_PREFIX) {
        return Resolution::DocumentSeal {
            payload: payload.to_string(),
        };
    }

    match staff.iter().find(|s| s.id == payload) {
        Some(matched) => {
            let log = VerificationLog::new(
                matched.id.clone(),
                matched.status,
                verifier_id.to_string(),
            );
            Resolution::Verified {
                staff: matched.clone(),
                log,
            }
        },
        None => Resolution::NotFound {
            payload: payload.to_string(),
        },
    }
}
