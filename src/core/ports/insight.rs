//! Insight summarizer port
//!
//! Read-only advisory generation over recent verification activity. The
//! call is fallible and side-effect-free; a failure here must never block
//! scanning, login, or status changes, so callers map errors to a
//! placeholder string instead of propagating them.

use crate::core::models::VerificationLog;
use crate::core::services::insight::StaffProjection;

/// Generator of human-readable security advisories
pub trait InsightProvider: Send + Sync {
    /// Summarize the given logs (already capped to the most recent entries)
    /// and staff projection into a short advisory string
    fn summarize(
        &self,
        logs: &[VerificationLog],
        staff: &[StaffProjection],
    ) -> anyhow::Result<String>;
}
