//! End-to-end workflow tests: scanning the demo dataset, the admin
//! lifecycle, staff login, and the email-confirmed signup flow.

use predicates::prelude::*;
use tempfile::TempDir;

use crate::{admin_login, veritrust};

// =============================================================================
// SCANNING AND THE AUDIT TRAIL
// =============================================================================

#[test]
fn test_demo_scan_and_audit_trail() {
    let temp = TempDir::new().unwrap();
    let home = temp.path();

    veritrust(home).arg("init").assert().success();

    // Active identity passes
    veritrust(home)
        .args(["scan", "NGO-8821"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PASS"))
        .stdout(predicate::str::contains("Sarah Jenkins"))
        .stdout(predicate::str::contains("Identity is active."));

    // Expired identity is found but fails
    veritrust(home)
        .args(["scan", "NGO-9942"])
        .assert()
        .success()
        .stdout(predicate::str::contains("FAIL"))
        .stdout(predicate::str::contains("EXPIRED"));

    // Unknown id resolves, with a verdict distinct from FAIL
    veritrust(home)
        .args(["scan", "NGO-0000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("INVALID"))
        .stdout(predicate::str::contains("Identity not found"));

    // Document seals are refused before lookup
    veritrust(home)
        .args(["scan", "DOC:NGO-8821"])
        .assert()
        .success()
        .stdout(predicate::str::contains("INVALID"))
        .stdout(predicate::str::contains("document seal"));

    // Only the two matched scans reached the log, newest first
    veritrust(home)
        .arg("logs")
        .assert()
        .success()
        .stdout(predicate::str::contains("2 entries"))
        .stdout(predicate::str::contains("NGO-9942"))
        .stdout(predicate::str::contains("NGO-8821"));

    veritrust(home)
        .args(["logs", "--limit", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("NGO-9942"))
        .stdout(predicate::str::contains("NGO-8821").not());
}

#[test]
fn test_repeated_scans_append_every_time() {
    let temp = TempDir::new().unwrap();
    let home = temp.path();

    veritrust(home).arg("init").assert().success();
    for _ in 0..3 {
        veritrust(home).args(["scan", "NGO-8821"]).assert().success();
    }

    veritrust(home)
        .arg("logs")
        .assert()
        .success()
        .stdout(predicate::str::contains("3 entries"));
}

#[test]
fn test_json_scan_output() {
    let temp = TempDir::new().unwrap();
    let home = temp.path();

    veritrust(home)
        .args(["scan", "--json", "NGO-8821"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"verdict\": \"PASS\""))
        .stdout(predicate::str::contains("\"id\": \"NGO-8821\""));
}

// =============================================================================
// ADMIN LIFECYCLE
// =============================================================================

#[test]
fn test_admin_gate_blocks_without_login() {
    let temp = TempDir::new().unwrap();
    let home = temp.path();

    for args in [
        vec!["admin", "list"],
        vec!["admin", "toggle", "NGO-1102"],
        vec!["admin", "insights"],
    ] {
        veritrust(home)
            .args(&args)
            .assert()
            .failure()
            .stderr(predicate::str::contains("admin login required"));
    }
}

#[test]
fn test_admin_login_rejects_wrong_passphrase() {
    let temp = TempDir::new().unwrap();
    veritrust(temp.path())
        .args(["admin", "login", "--email", "ops@ngo.org", "--password", "guessed"])
        .assert()
        .failure();
}

#[test]
fn test_admin_toggle_reactivates_a_suspended_card() {
    let temp = TempDir::new().unwrap();
    let home = temp.path();

    veritrust(home).arg("init").assert().success();
    admin_login(home);

    veritrust(home)
        .args(["admin", "toggle", "NGO-1102"])
        .assert()
        .success()
        .stdout(predicate::str::contains("NGO-1102: SUSPENDED -> ACTIVE"));

    veritrust(home)
        .args(["scan", "NGO-1102"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PASS"));

    // Toggling again withdraws the card
    veritrust(home)
        .args(["admin", "toggle", "NGO-1102"])
        .assert()
        .success()
        .stdout(predicate::str::contains("NGO-1102: ACTIVE -> SUSPENDED"));

    veritrust(home)
        .args(["scan", "NGO-1102"])
        .assert()
        .success()
        .stdout(predicate::str::contains("FAIL"));
}

#[test]
fn test_admin_add_and_list() {
    let temp = TempDir::new().unwrap();
    let home = temp.path();

    veritrust(home).arg("init").assert().success();
    admin_login(home);

    veritrust(home)
        .args([
            "admin",
            "add",
            "--full-name",
            "Jane Roe",
            "--role",
            "Driver",
            "--department",
            "Logistics",
            "--email",
            "jane.roe@ngo.org",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Registered Jane Roe as NGO-"));

    veritrust(home)
        .args(["admin", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("4 record(s)"))
        .stdout(predicate::str::contains("Jane Roe"));

    veritrust(home)
        .args([
            "admin",
            "add",
            "--full-name",
            "Burner",
            "--role",
            "Driver",
            "--department",
            "Logistics",
            "--email",
            "burner@mailinator.com",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Disposable"));
}

#[test]
fn test_admin_insights_without_api_key() {
    let temp = TempDir::new().unwrap();
    let home = temp.path();

    veritrust(home).arg("init").assert().success();
    admin_login(home);

    veritrust(home)
        .args(["admin", "insights"])
        .assert()
        .success()
        .stdout(predicate::str::contains("API Key missing. Unable to generate insights."));
}

// =============================================================================
// STAFF LOGIN AND THE IDENTITY CARD
// =============================================================================

#[test]
fn test_staff_login_card_and_logout() {
    let temp = TempDir::new().unwrap();
    let home = temp.path();

    veritrust(home).arg("init").assert().success();

    veritrust(home)
        .args(["staff", "login", "--email", "sarah.j@ngo.org", "--password", "password123"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome back, Sarah Jenkins [NGO-8821]."));

    veritrust(home)
        .args(["staff", "card"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Digital Identity Card"))
        .stdout(predicate::str::contains("QR payload: NGO-8821"))
        .stdout(predicate::str::contains("DOC:NGO-8821"));

    // A scan made while logged in attributes the logged-in verifier
    veritrust(home).args(["scan", "NGO-9942"]).assert().success();
    veritrust(home)
        .arg("logs")
        .assert()
        .success()
        .stdout(predicate::str::contains("verifier: NGO-8821"));

    veritrust(home)
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged out."));

    veritrust(home)
        .args(["staff", "card"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("staff login required"));
}

#[test]
fn test_staff_login_rejects_bad_credentials() {
    let temp = TempDir::new().unwrap();
    let home = temp.path();

    veritrust(home)
        .args(["staff", "login", "--email", "nobody@ngo.org", "--password", "password123"])
        .assert()
        .failure();

    veritrust(home)
        .args(["staff", "login", "--email", "sarah.j@ngo.org", "--password", "wrong"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Incorrect password"));
}

// =============================================================================
// SIGNUP
// =============================================================================

fn signup_args(email: &str) -> Vec<String> {
    [
        "staff",
        "signup",
        "--full-name",
        "New Person",
        "--role",
        "Field Medic",
        "--department",
        "Health Services",
        "--email",
        email,
        "--password",
        "hunter2hunter",
    ]
    .iter()
    .map(ToString::to_string)
    .collect()
}

#[test]
fn test_signup_with_dev_bypass_code() {
    let temp = TempDir::new().unwrap();
    let home = temp.path();

    veritrust(home)
        .args(["init", "--dev"])
        .assert()
        .success()
        .stdout(predicate::str::contains("development mode"));

    veritrust(home)
        .args(signup_args("new.person@ngo.org"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Code sent to new.person@ngo.org"));

    veritrust(home)
        .args(["staff", "verify", "123456"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Account activated. Welcome, New Person [NGO-"));

    // Confirmation logs the new member in
    veritrust(home)
        .args(["staff", "card"])
        .assert()
        .success()
        .stdout(predicate::str::contains("new.person@ngo.org"));

    admin_login(home);
    veritrust(home)
        .args(["admin", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("4 record(s)"))
        .stdout(predicate::str::contains("New Person"));
}

#[test]
fn test_signup_code_is_checked_outside_dev_mode() {
    let temp = TempDir::new().unwrap();
    let home = temp.path();

    veritrust(home).arg("init").assert().success();
    veritrust(home).args(signup_args("new.person@ngo.org")).assert().success();

    // 000000 is outside the generated range, so it can never match
    veritrust(home)
        .args(["staff", "verify", "000000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid"));
}

#[test]
fn test_verify_without_pending_signup() {
    let temp = TempDir::new().unwrap();
    veritrust(temp.path())
        .args(["staff", "verify", "123456"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no signup in progress"));
}

#[test]
fn test_signup_rejects_duplicate_and_disposable_emails() {
    let temp = TempDir::new().unwrap();
    let home = temp.path();

    veritrust(home).arg("init").assert().success();

    veritrust(home)
        .args(signup_args("sarah.j@ngo.org"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Account already exists"));

    veritrust(home)
        .args(signup_args("burner@mailinator.com"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Disposable"));
}

// =============================================================================
// SYNC DIAGNOSTICS
// =============================================================================

#[test]
fn test_sync_status_local_only() {
    let temp = TempDir::new().unwrap();
    let home = temp.path();

    veritrust(home)
        .args(["sync", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No remote store configured"));

    veritrust(home)
        .args(["sync", "retry"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nothing to retry"));
}
