//! Session and device identity
//!
//! The session records which experience the current principal was admitted
//! to (role plus the staff id, when there is one). The device identity is a
//! per-installation pseudo-identifier used as the acting verifier when no
//! principal is logged in; it is generated once and persisted locally.

use std::fs;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::models::Role;
use crate::paths;

/// The currently admitted principal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Admitted role
    pub role: Role,
    /// Staff record id, present for staff sessions
    pub staff_id: Option<String>,
}

impl Session {
    /// An admin session (no record identity)
    #[must_use]
    pub const fn admin() -> Self {
        Self {
            role: Role::Admin,
            staff_id: None,
        }
    }

    /// A staff session bound to a record
    #[must_use]
    pub fn staff(staff_id: String) -> Self {
        Self {
            role: Role::Staff,
            staff_id: Some(staff_id),
        }
    }

    /// Load the current session, if any
    #[must_use]
    pub fn load() -> Option<Self> {
        let path = paths::session_file();
        let content = fs::read_to_string(path).ok()?;
        serde_json::from_str(&content).ok()
    }

    /// Persist this session
    pub fn save(&self) -> anyhow::Result<()> {
        let path = paths::session_file();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Clear the current session
    pub fn clear() -> anyhow::Result<()> {
        let path = paths::session_file();
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}

/// Get the per-installation device identity, generating it on first use.
///
/// The id is `DEVICE-` plus 4 random digits, stable for the installation's
/// lifetime.
pub fn device_id() -> anyhow::Result<String> {
    let path = paths::device_id_file();
    if let Ok(existing) = fs::read_to_string(&path) {
        let trimmed = existing.trim();
        if !trimmed.is_empty() {
            return Ok(trimmed.to_string());
        }
    }
    let id = format!("DEVICE-{}", rand::thread_rng().gen_range(1000..10000));
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, &id)?;
    Ok(id)
}

/// The acting verifier's identifier: the logged-in principal's staff id
/// when present, otherwise the device identity
pub fn verifier_id() -> anyhow::Result<String> {
    if let Some(session) = Session::load()
        && let Some(staff_id) = session.staff_id
    {
        return Ok(staff_id);
    }
    device_id()
}
