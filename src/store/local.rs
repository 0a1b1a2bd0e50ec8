//! Local JSON cache for the record store collections
//!
//! The cache is the synchronous commit target for every mutation; it lives
//! in the state directory next to the config.

use std::fs;
use std::path::Path;

use crate::core::models::{StaffMember, VerificationLog};
use crate::paths;

fn load_json<T: serde::de::DeserializeOwned>(path: &Path) -> anyhow::Result<Vec<T>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

fn save_json<T: serde::Serialize>(path: &Path, items: &[T]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = serde_json::to_string_pretty(items)?;
    fs::write(path, content)?;
    Ok(())
}

/// Load cached staff records
pub fn load_staff() -> anyhow::Result<Vec<StaffMember>> {
    load_json(&paths::staff_file())
}

/// Save staff records to the cache
pub fn save_staff(staff: &[StaffMember]) -> anyhow::Result<()> {
    save_json(&paths::staff_file(), staff)
}

/// Load cached verification log entries
pub fn load_logs() -> anyhow::Result<Vec<VerificationLog>> {
    load_json(&paths::logs_file())
}

/// Save verification log entries to the cache
pub fn save_logs(logs: &[VerificationLog]) -> anyhow::Result<()> {
    save_json(&paths::logs_file(), logs)
}
