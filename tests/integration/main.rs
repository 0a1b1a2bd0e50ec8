//! Integration tests for the veritrust CLI
//!
//! Every test gets its own throwaway state directory through the
//! `VERITRUST_HOME` override and drives the compiled binary end to end.

// End-to-end workflow tests from the same directory
mod lifecycle_test;

use std::path::Path;

use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper to create a veritrust command bound to an isolated state dir
pub fn veritrust(home: &Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("veritrust"));
    cmd.env("VERITRUST_HOME", home);
    cmd
}

/// Helper to admit the administrator with the default passphrase
pub fn admin_login(home: &Path) {
    veritrust(home)
        .args(["admin", "login", "--email", "ops@ngo.org", "--password", "Aman@12"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Admin access granted."));
}

// =============================================================================
// BASIC COMMANDS
// =============================================================================

#[test]
fn test_version_command() {
    let temp = TempDir::new().unwrap();
    veritrust(temp.path())
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("veritrust v"));
}

#[test]
fn test_init_creates_state_directory() {
    let temp = TempDir::new().unwrap();
    let home = temp.path().join("state");

    veritrust(&home)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized veritrust"));

    assert!(home.join("config.toml").exists());
    assert!(home.join("staff.json").exists());
    assert!(home.join("verification_logs.json").exists());
}

#[test]
fn test_init_twice_requires_force() {
    let temp = TempDir::new().unwrap();
    let home = temp.path().join("state");

    veritrust(&home).arg("init").assert().success();

    veritrust(&home)
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already initialized"));

    veritrust(&home)
        .args(["init", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized veritrust"));
}

#[test]
fn test_scan_works_without_init() {
    // A fresh install falls back to the demo dataset
    let temp = TempDir::new().unwrap();
    veritrust(temp.path())
        .args(["scan", "NGO-8821"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PASS"))
        .stdout(predicate::str::contains("Sarah Jenkins"));
}

#[test]
fn test_logout_without_session() {
    let temp = TempDir::new().unwrap();
    veritrust(temp.path())
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("No active session."));
}
