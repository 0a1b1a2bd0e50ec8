//! Remote document store port
//!
//! The remote store holds two named collections: `staff` keyed by record id
//! and `verification_logs` keyed by entry id. It is an optimization for
//! durability and cross-device sync, never a gate on local correctness:
//! every operation here is best-effort from the record store's point of
//! view.

use crate::core::models::{StaffMember, StaffStatus, VerificationLog};

/// Client for the remote document store
///
/// Implementations map onto three generic document-store operations:
/// list-all(collection), create/replace(collection, key, document), and
/// partial-update(collection, key, fields).
pub trait RemoteStore: Send + Sync {
    /// Fetch every staff record
    fn list_staff(&self) -> anyhow::Result<Vec<StaffMember>>;

    /// Fetch every verification log entry
    fn list_logs(&self) -> anyhow::Result<Vec<VerificationLog>>;

    /// Create or replace a staff document, keyed by its id
    fn put_staff(&self, record: &StaffMember) -> anyhow::Result<()>;

    /// Partial-update of a staff document's status field
    fn update_status(&self, id: &str, status: StaffStatus) -> anyhow::Result<()>;

    /// Create a verification log document, keyed by its id
    fn put_log(&self, entry: &VerificationLog) -> anyhow::Result<()>;
}
