//! Record store - the authoritative in-memory collections
//!
//! The record store exclusively owns the staff and verification-log
//! collections; everything else reads snapshots. Mutations commit locally
//! first and enqueue a best-effort remote persistence op: the remote store
//! is an optimization for durability and cross-device sync, never a gate on
//! local correctness. A remote fault never rolls back local state.
//!
//! Concurrent edits from two installations are last-remote-write-wins with
//! no conflict detection; acceptable at this system's scale.

pub mod local;
pub mod seed;
pub mod sync;

use anyhow::bail;
use log::{debug, warn};

use crate::core::models::{StaffMember, StaffStatus, VerificationLog};
use crate::core::ports::RemoteStore;
use self::sync::SyncOp;

/// Authoritative in-memory staff and verification-log collections
#[derive(Debug, Default)]
pub struct RecordStore {
    staff: Vec<StaffMember>,
    logs: Vec<VerificationLog>,
    pending: Vec<SyncOp>,
}

impl RecordStore {
    /// Build a store from explicit collections (used by tests and `load`)
    #[must_use]
    pub fn with_collections(staff: Vec<StaffMember>, logs: Vec<VerificationLog>) -> Self {
        Self {
            staff,
            logs,
            pending: Vec::new(),
        }
    }

    /// Load the store, preferring the remote document store.
    ///
    /// Fallback chain: remote (when configured and non-empty) → local JSON
    /// cache → built-in demo dataset with empty logs. A remote fault is
    /// logged and never fails the boot sequence.
    #[must_use]
    pub fn load(remote: Option<&dyn RemoteStore>) -> Self {
        if let Some(remote) = remote {
            match remote.list_staff() {
                Ok(staff) if !staff.is_empty() => {
                    let logs = remote.list_logs().unwrap_or_else(|e| {
                        warn!("failed to fetch verification logs from remote: {e:#}");
                        local::load_logs().unwrap_or_default()
                    });
                    debug!("loaded {} staff record(s) from remote", staff.len());
                    return Self::with_collections(staff, logs);
                },
                Ok(_) => debug!("remote staff collection is empty, falling back"),
                Err(e) => warn!("failed to load from remote, falling back: {e:#}"),
            }
        }

        let staff = local::load_staff().unwrap_or_default();
        if staff.is_empty() {
            debug!("no cached staff, seeding demo dataset");
            return Self::with_collections(seed::demo_staff(), Vec::new());
        }
        let logs = local::load_logs().unwrap_or_default();
        Self::with_collections(staff, logs)
    }

    /// Read-only staff snapshot
    #[must_use]
    pub fn staff(&self) -> &[StaffMember] {
        &self.staff
    }

    /// Read-only log snapshot, most-recent-first
    #[must_use]
    pub fn logs(&self) -> &[VerificationLog] {
        &self.logs
    }

    /// Find a staff record by exact id
    #[must_use]
    pub fn find_staff(&self, id: &str) -> Option<&StaffMember> {
        self.staff.iter().find(|s| s.id == id)
    }

    /// Append a new staff record.
    ///
    /// The record is visible to subsequent in-process reads immediately;
    /// remote persistence is enqueued. Rejects a duplicate id: `id` is
    /// unique across all records for the lifetime of the store.
    pub fn add_staff(&mut self, record: StaffMember) -> anyhow::Result<()> {
        if self.staff.iter().any(|s| s.id == record.id) {
            bail!("duplicate staff id: {}", record.id);
        }
        self.pending.push(SyncOp::PutStaff {
            record: record.clone(),
        });
        self.staff.push(record);
        Ok(())
    }

    /// Rewrite a record's status field.
    ///
    /// Idempotent: applying the same target status twice is the same as
    /// applying it once (though each call enqueues its own remote op).
    pub fn update_status(&mut self, id: &str, status: StaffStatus) -> anyhow::Result<()> {
        let Some(record) = self.staff.iter_mut().find(|s| s.id == id) else {
            bail!("no staff record with id: {id}");
        };
        record.status = status;
        self.pending.push(SyncOp::UpdateStatus {
            id: id.to_string(),
            status,
        });
        Ok(())
    }

    /// Prepend a verification log entry (most-recent-first ordering)
    pub fn append_log(&mut self, entry: VerificationLog) {
        self.pending.push(SyncOp::PutLog {
            entry: entry.clone(),
        });
        self.logs.insert(0, entry);
    }

    /// Write both collections to the local JSON cache.
    ///
    /// This is the synchronous local commit; call it before flushing the
    /// enqueued remote ops.
    pub fn save_local(&self) -> anyhow::Result<()> {
        local::save_staff(&self.staff)?;
        local::save_logs(&self.logs)?;
        Ok(())
    }

    /// Drain the remote ops enqueued by mutations since the last drain
    pub fn take_pending(&mut self) -> Vec<SyncOp> {
        std::mem::take(&mut self.pending)
    }
}
