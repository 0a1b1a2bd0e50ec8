//! Best-effort remote persistence
//!
//! Mutations enqueue a [`SyncOp`]; after the synchronous local commit the
//! queue is flushed against the remote store. A failed op never surfaces to
//! the acting user: it is logged at warn and journaled for the operator,
//! who can inspect (`sync status`) and retry (`sync retry`) later.
//!
//! The journal is bounded: once full, the oldest entries are dropped.

use std::fs;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::core::models::{StaffMember, StaffStatus, VerificationLog};
use crate::core::ports::RemoteStore;
use crate::paths;

/// Maximum number of journaled failures kept for retry
pub const JOURNAL_CAP: usize = 50;

/// One enqueued remote persistence operation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum SyncOp {
    /// Create/replace a staff document
    PutStaff {
        /// The record to persist
        record: StaffMember,
    },
    /// Partial-update of a staff document's status
    UpdateStatus {
        /// Record id
        id: String,
        /// New status
        status: StaffStatus,
    },
    /// Create a verification log document
    PutLog {
        /// The entry to persist
        entry: VerificationLog,
    },
}

impl SyncOp {
    /// Short human-readable description for diagnostics
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::PutStaff { record } => format!("put staff {}", record.id),
            Self::UpdateStatus { id, status } => format!("set status of {id} to {status}"),
            Self::PutLog { entry } => format!("put log {}", entry.id),
        }
    }

    /// Apply this op against the remote store
    pub fn apply(&self, remote: &dyn RemoteStore) -> anyhow::Result<()> {
        match self {
            Self::PutStaff { record } => remote.put_staff(record),
            Self::UpdateStatus { id, status } => remote.update_status(id, *status),
            Self::PutLog { entry } => remote.put_log(entry),
        }
    }
}

/// A journaled sync failure awaiting retry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalEntry {
    /// The failed operation
    pub op: SyncOp,
    /// The error it failed with
    pub error: String,
    /// RFC 3339 timestamp of the failure
    pub failed_at: String,
}

/// Flush enqueued ops against the remote store.
///
/// With no remote configured the ops are dropped: there is nothing to sync
/// to and the local commit already succeeded. Failures are journaled and
/// logged; they never propagate to the caller.
pub fn flush(ops: Vec<SyncOp>, remote: Option<&dyn RemoteStore>) {
    let Some(remote) = remote else {
        return;
    };
    let mut failures = Vec::new();
    for op in ops {
        if let Err(e) = op.apply(remote) {
            warn!("remote sync failed ({}): {e:#}", op.describe());
            failures.push(JournalEntry {
                op,
                error: format!("{e:#}"),
                failed_at: chrono::Utc::now().to_rfc3339(),
            });
        }
    }
    if !failures.is_empty()
        && let Err(e) = journal_append(failures)
    {
        warn!("failed to journal sync failures: {e:#}");
    }
}

/// Retry every journaled op; ops that fail again stay journaled.
///
/// Returns `(retried, still_failing)` counts.
pub fn retry(remote: &dyn RemoteStore) -> anyhow::Result<(usize, usize)> {
    let entries = journal_load()?;
    let total = entries.len();
    let mut remaining = Vec::new();
    for entry in entries {
        if let Err(e) = entry.op.apply(remote) {
            warn!("retry failed ({}): {e:#}", entry.op.describe());
            remaining.push(JournalEntry {
                op: entry.op,
                error: format!("{e:#}"),
                failed_at: chrono::Utc::now().to_rfc3339(),
            });
        }
    }
    let still_failing = remaining.len();
    journal_save(&remaining)?;
    Ok((total, still_failing))
}

/// Load the journaled failures
pub fn journal_load() -> anyhow::Result<Vec<JournalEntry>> {
    let path = paths::sync_journal_file();
    if !path.exists() {
        return Ok(Vec::new());
    }
    let content = fs::read_to_string(&path)?;
    Ok(serde_json::from_str(&content)?)
}

fn journal_save(entries: &[JournalEntry]) -> anyhow::Result<()> {
    let path = paths::sync_journal_file();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, serde_json::to_string_pretty(entries)?)?;
    Ok(())
}

fn journal_append(mut failures: Vec<JournalEntry>) -> anyhow::Result<()> {
    let mut entries = journal_load()?;
    entries.append(&mut failures);
    if entries.len() > JOURNAL_CAP {
        let excess = entries.len() - JOURNAL_CAP;
        entries.drain(..excess);
    }
    journal_save(&entries)
}
