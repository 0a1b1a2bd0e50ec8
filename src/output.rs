//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{ScanResult, StaffMember, VerificationLog};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}

/// One staff record as displayed in listings
#[derive(Debug, Serialize)]
pub struct StaffRow {
    /// Record id
    pub id: String,
    /// Full name
    pub name: String,
    /// Job role
    pub role: String,
    /// Department
    pub department: String,
    /// Current status
    pub status: String,
    /// Advisory expiry date
    pub valid_until: String,
}

impl From<&StaffMember> for StaffRow {
    fn from(s: &StaffMember) -> Self {
        Self {
            id: s.id.clone(),
            name: s.full_name.clone(),
            role: s.role.clone(),
            department: s.department.clone(),
            status: s.status.to_string(),
            valid_until: s.valid_until.clone(),
        }
    }
}

/// Result of a staff listing
#[derive(Debug, Serialize)]
pub struct StaffListResult {
    /// The listed records
    pub staff: Vec<StaffRow>,
}

impl StaffListResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }

    fn render_human(&self) {
        if self.staff.is_empty() {
            println!("No staff records.");
            return;
        }
        println!("Staff ({} record(s)):\n", self.staff.len());
        for row in &self.staff {
            println!("  [{}] {} - {}, {}", row.id, row.name, row.role, row.department);
            println!("          status: {}  valid until: {}\n", row.status, row.valid_until);
        }
    }
}

/// One verification log entry as displayed in listings
#[derive(Debug, Serialize)]
pub struct LogRow {
    /// Entry id
    pub id: String,
    /// Scanned staff id
    pub staff_id: String,
    /// When the scan was resolved
    pub timestamp: String,
    /// Status snapshot at scan time
    pub status_at_scan: String,
    /// Acting verifier
    pub verifier_id: String,
    /// Scan outcome
    pub result: String,
}

impl From<&VerificationLog> for LogRow {
    fn from(l: &VerificationLog) -> Self {
        Self {
            id: l.id.clone(),
            staff_id: l.staff_id.clone(),
            timestamp: l.timestamp.clone(),
            status_at_scan: l.status_at_scan.to_string(),
            verifier_id: l.verifier_id.clone(),
            result: l.result.to_string(),
        }
    }
}

/// Result of a verification-log listing
#[derive(Debug, Serialize)]
pub struct LogListResult {
    /// The listed entries, most-recent-first
    pub logs: Vec<LogRow>,
}

impl LogListResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }

    fn render_human(&self) {
        if self.logs.is_empty() {
            println!("No verification logs.");
            return;
        }
        println!("Verification logs ({} entries, newest first):\n", self.logs.len());
        for row in &self.logs {
            println!("  {}  {}  {}", row.timestamp, row.staff_id, row.result);
            println!("          status at scan: {}  verifier: {}\n", row.status_at_scan, row.verifier_id);
        }
    }
}

/// Report of one scan resolution
#[derive(Debug, Serialize)]
pub struct ScanReport {
    /// PASS, FAIL, or INVALID
    pub verdict: String,
    /// The scanned payload
    pub payload: String,
    /// The matched record, when there was one
    pub staff: Option<StaffRow>,
    /// Short explanation for the verifier
    pub message: String,
}

impl ScanReport {
    /// Report for a matched scan
    #[must_use]
    pub fn matched(payload: &str, staff: &StaffMember, result: ScanResult) -> Self {
        let message = match result {
            ScanResult::Pass => "Verification complete. Identity is active.".to_string(),
            ScanResult::Fail | ScanResult::Warn => {
                format!("Verification complete. Identity is {}.", staff.status)
            },
        };
        Self {
            verdict: result.to_string(),
            payload: payload.to_string(),
            staff: Some(StaffRow::from(staff)),
            message,
        }
    }

    /// Report for an unmatched payload (fake/unknown id)
    #[must_use]
    pub fn invalid(payload: &str) -> Self {
        Self {
            verdict: "INVALID".to_string(),
            payload: payload.to_string(),
            staff: None,
            message: "Identity not found in database. Report this incident immediately.".to_string(),
        }
    }

    /// Report for a document seal payload
    #[must_use]
    pub fn document_seal(payload: &str) -> Self {
        Self {
            verdict: "INVALID".to_string(),
            payload: payload.to_string(),
            staff: None,
            message: "This is a document seal, not a scannable identity.".to_string(),
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }

    fn render_human(&self) {
        let verdict = match self.verdict.as_str() {
            "PASS" => self.verdict.green().bold(),
            "FAIL" => self.verdict.yellow().bold(),
            _ => self.verdict.red().bold(),
        };
        println!("{verdict}  {}", self.payload);
        if let Some(staff) = &self.staff {
            println!("  {} - {}, {}", staff.name, staff.role, staff.department);
            println!("  status: {}  valid until: {}", staff.status, staff.valid_until);
        }
        println!("  {}", self.message);
    }
}

/// Identity card view for a logged-in staff member
#[derive(Debug, Serialize)]
pub struct CardView {
    /// The card holder
    #[serde(flatten)]
    pub staff: StaffRow,
    /// Email on the card
    pub email: String,
    /// Join date
    pub join_date: String,
    /// Scannable QR payload (the bare id)
    pub qr_payload: String,
    /// Printed-document seal payload
    pub doc_seal_payload: String,
}

impl CardView {
    /// Build the card view for a record
    #[must_use]
    pub fn new(staff: &StaffMember) -> Self {
        Self {
            staff: StaffRow::from(staff),
            email: staff.email.clone(),
            join_date: staff.join_date.clone(),
            qr_payload: staff.qr_payload().to_string(),
            doc_seal_payload: staff.doc_seal_payload(),
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }

    fn render_human(&self) {
        println!("Digital Identity Card");
        println!("  {} [{}]", self.staff.name, self.staff.id);
        println!("  {}, {}", self.staff.role, self.staff.department);
        println!("  email: {}", self.email);
        println!("  joined: {}  valid until: {}", self.join_date, self.staff.valid_until);
        println!("  status: {}", self.staff.status);
        println!("  QR payload: {}", self.qr_payload);
        println!("  document seal: {}", self.doc_seal_payload);
    }
}

/// Advisory produced by the insight summarizer
#[derive(Debug, Serialize)]
pub struct InsightReport {
    /// The advisory (or placeholder) text
    pub summary: String,
}

impl InsightReport {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                println!("Security insights:\n");
                println!("{}", self.summary);
            },
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}

/// One journaled sync failure as displayed by `sync status`
#[derive(Debug, Serialize)]
pub struct SyncFailureRow {
    /// What the op was trying to do
    pub op: String,
    /// The error it failed with
    pub error: String,
    /// When it failed
    pub failed_at: String,
}

/// Result of a `sync status` inspection
#[derive(Debug, Serialize)]
pub struct SyncStatusResult {
    /// Whether a remote store is configured at all
    pub remote_configured: bool,
    /// Journaled failures awaiting retry
    pub failures: Vec<SyncFailureRow>,
}

impl SyncStatusResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }

    fn render_human(&self) {
        if !self.remote_configured {
            println!("No remote store configured; running local-only.");
            return;
        }
        if self.failures.is_empty() {
            println!("No journaled sync failures.");
            return;
        }
        println!("{} journaled sync failure(s):\n", self.failures.len());
        for f in &self.failures {
            println!("  {}  {}", f.failed_at, f.op);
            println!("          {}\n", f.error);
        }
        println!("Run `veritrust sync retry` to re-attempt.");
    }
}
