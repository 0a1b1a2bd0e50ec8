//! Insight input preparation
//!
//! Builds the read-only snapshot handed to the insight collaborator: the
//! most recent logs (capped) plus a minimal projection of every staff
//! record. The collaborator itself lives behind a port and never mutates
//! state.

use serde::Serialize;

use crate::core::models::{StaffMember, StaffStatus, VerificationLog};

/// Maximum number of recent log entries handed to the summarizer
pub const LOG_CAP: usize = 20;

/// Minimal staff projection shared with the summarizer
#[derive(Debug, Clone, Serialize)]
pub struct StaffProjection {
    /// Record id
    pub id: String,
    /// Person's full name
    pub name: String,
    /// Current status
    pub status: StaffStatus,
}

/// Project the staff snapshot down to `{id, name, status}`
#[must_use]
pub fn project_staff(staff: &[StaffMember]) -> Vec<StaffProjection> {
    staff
        .iter()
        .map(|s| StaffProjection {
            id: s.id.clone(),
            name: s.full_name.clone(),
            status: s.status,
        })
        .collect()
}

/// Cap the log collection to the most recent entries.
///
/// Logs are stored most-recent-first, so the cap is a prefix.
#[must_use]
pub fn recent_logs(logs: &[VerificationLog]) -> &[VerificationLog] {
    &logs[..logs.len().min(LOG_CAP)]
}

/// Build the advisory prompt from logs and staff projection
#[must_use]
pub fn build_prompt(logs: &[VerificationLog], staff: &[StaffProjection]) -> String {
    let logs_json = serde_json::to_string(logs).unwrap_or_else(|_| "[]".to_string());
    let staff_json = serde_json::to_string(staff).unwrap_or_else(|_| "[]".to_string());
    format!(
        "Analyze the following verification logs for an NGO identity system.\n\
         Identify any suspicious patterns (e.g., suspended users trying to scan, \
         expired IDs being used).\n\n\
         Logs: {logs_json}\n\
         Staff Data: {staff_json}\n\n\
         Provide a concise, 3-bullet point security summary for the Admin."
    )
}
