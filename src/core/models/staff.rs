//! Staff member model
//!
//! A staff member is one real-world person holding a digital identity card.
//! The record is created at registration (admin-add or self-signup), mutated
//! only through status transitions afterwards, and never deleted.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Prefix marking a printed-document seal payload.
///
/// Seal payloads identify a printed document, not a scannable identity;
/// the scan resolver refuses them.
pub const DOC_SEAL_PREFIX: &str = "DOC:";

/// Status of a staff identity card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StaffStatus {
    /// Identity is valid; scans pass
    Active,
    /// Identity withdrawn by an administrator; scans fail
    Suspended,
    /// Identity marked expired; scans fail
    Expired,
}

impl std::fmt::Display for StaffStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Active => write!(f, "ACTIVE"),
            Self::Suspended => write!(f, "SUSPENDED"),
            Self::Expired => write!(f, "EXPIRED"),
        }
    }
}

impl std::str::FromStr for StaffStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "ACTIVE" => Ok(Self::Active),
            "SUSPENDED" => Ok(Self::Suspended),
            "EXPIRED" => Ok(Self::Expired),
            _ => Err(format!("Invalid status: {s}. Use: active, suspended, expired")),
        }
    }
}

/// One person holding a digital identity
///
/// Field names follow the remote document schema (camelCase).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffMember {
    /// Opaque unique identifier, stable for the record's lifetime.
    /// Doubles as the QR payload and the remote-store key.
    pub id: String,

    /// Person's full name
    pub full_name: String,

    /// Job role (free text, e.g. "Field Coordinator")
    pub role: String,

    /// Department (free text, e.g. "Humanitarian Aid")
    pub department: String,

    /// ISO 8601 date the person joined
    pub join_date: String,

    /// ISO 8601 date the card nominally expires.
    /// Advisory only: never enforced against `status` automatically.
    pub valid_until: String,

    /// Current lifecycle status
    pub status: StaffStatus,

    /// Reference to a display image; opaque to the core
    pub photo_url: String,

    /// Login email, unique among self-registered staff
    pub email: String,

    /// Salted SHA-256 hash of the login password
    #[serde(default)]
    pub password_hash: String,

    /// Salt for the password hash
    #[serde(default)]
    pub password_salt: String,
}

impl StaffMember {
    /// QR payload for the identity card: exactly the record id.
    ///
    /// Not a signed credential; the verifier resolves it against the
    /// record store.
    #[must_use]
    pub fn qr_payload(&self) -> &str {
        &self.id
    }

    /// Payload for a printed-document seal (`DOC:` + id)
    #[must_use]
    pub fn doc_seal_payload(&self) -> String {
        format!("{DOC_SEAL_PREFIX}{}", self.id)
    }

    /// Case-insensitive email comparison used by login and duplicate checks
    #[must_use]
    pub fn email_matches(&self, email: &str) -> bool {
        self.email.eq_ignore_ascii_case(email)
    }
}

/// Maximum draws before giving up on finding an unused id
const MAX_ID_ATTEMPTS: usize = 1000;

/// Generate a candidate staff id (`NGO-` + 4 digits).
///
/// Callers needing uniqueness go through [`unique_staff_id`].
#[must_use]
pub fn generate_staff_id() -> String {
    format!("NGO-{}", rand::thread_rng().gen_range(1000..10000))
}

/// Draw a staff id not already present in `staff`.
///
/// The draw count is bounded: once the 9000-id space is effectively
/// exhausted this errors instead of spinning.
pub fn unique_staff_id(staff: &[StaffMember]) -> anyhow::Result<String> {
    for _ in 0..MAX_ID_ATTEMPTS {
        let id = generate_staff_id();
        if !staff.iter().any(|s| s.id == id) {
            return Ok(id);
        }
    }
    anyhow::bail!("no unused staff id found after {MAX_ID_ATTEMPTS} draws")
}
