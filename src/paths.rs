//! Centralized path definitions for veritrust
//!
//! This module provides a single source of truth for all filesystem paths
//! used by veritrust.
//!
//! ## Storage Layout
//!
//! ```text
//! ~/.veritrust/
//! ├── config.toml              # Organization config (passphrase hash, collaborators)
//! ├── staff.json               # Local cache of staff records
//! ├── verification_logs.json   # Local cache of the verification log
//! ├── session.json             # Current principal (role + staff id)
//! ├── pending-signup.json      # Held registration awaiting OTP confirmation
//! ├── device-id                # Per-installation verifier pseudo-identity
//! └── sync-journal.json        # Failed remote persistence ops awaiting retry
//! ```
//!
//! The root directory can be overridden with the `VERITRUST_HOME` environment
//! variable, which tests use to point at a throwaway directory.

use std::path::PathBuf;

/// State directory name under the user's home
const VERITRUST_DIR: &str = ".veritrust";

/// Environment variable overriding the state directory
pub const HOME_ENV: &str = "VERITRUST_HOME";

/// Config filename
const CONFIG_FILE: &str = "config.toml";

/// Staff cache filename
const STAFF_FILE: &str = "staff.json";

/// Verification log cache filename
const LOGS_FILE: &str = "verification_logs.json";

/// Session filename
const SESSION_FILE: &str = "session.json";

/// Pending signup filename
const PENDING_SIGNUP_FILE: &str = "pending-signup.json";

/// Device identity filename
const DEVICE_ID_FILE: &str = "device-id";

/// Sync journal filename
const SYNC_JOURNAL_FILE: &str = "sync-journal.json";

/// Get the veritrust state directory.
///
/// Returns `$VERITRUST_HOME` when set, otherwise `~/.veritrust/`.
#[must_use]
pub fn state_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(HOME_ENV)
        && !dir.is_empty()
    {
        return PathBuf::from(dir);
    }
    dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")).join(VERITRUST_DIR)
}

/// Get the config file path (`config.toml`).
#[must_use]
pub fn config_file() -> PathBuf {
    state_dir().join(CONFIG_FILE)
}

/// Get the staff cache path (`staff.json`).
#[must_use]
pub fn staff_file() -> PathBuf {
    state_dir().join(STAFF_FILE)
}

/// Get the verification log cache path (`verification_logs.json`).
#[must_use]
pub fn logs_file() -> PathBuf {
    state_dir().join(LOGS_FILE)
}

/// Get the session file path (`session.json`).
#[must_use]
pub fn session_file() -> PathBuf {
    state_dir().join(SESSION_FILE)
}

/// Get the pending signup path (`pending-signup.json`).
#[must_use]
pub fn pending_signup_file() -> PathBuf {
    state_dir().join(PENDING_SIGNUP_FILE)
}

/// Get the device identity path (`device-id`).
#[must_use]
pub fn device_id_file() -> PathBuf {
    state_dir().join(DEVICE_ID_FILE)
}

/// Get the sync journal path (`sync-journal.json`).
#[must_use]
pub fn sync_journal_file() -> PathBuf {
    state_dir().join(SYNC_JOURNAL_FILE)
}
