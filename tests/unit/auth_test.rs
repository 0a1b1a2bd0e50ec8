//! Unit tests for the authentication gates

use veritrust::config::DEFAULT_ADMIN_PASSPHRASE;
use veritrust::core::models::StaffStatus;
use veritrust::core::services::auth::{self, AuthError, SignupRequest};

use crate::common::fixtures::StaffBuilder;

fn request(email: &str) -> SignupRequest {
    SignupRequest {
        full_name: "New Person".to_string(),
        role: "Driver".to_string(),
        department: "Logistics".to_string(),
        email: email.to_string(),
        password: "hunter2hunter".to_string(),
    }
}

// =============================================================================
// Admin admission
// =============================================================================

#[test]
fn admin_login_accepts_the_configured_passphrase() {
    let salt = auth::generate_salt();
    let hash = auth::hash_password(DEFAULT_ADMIN_PASSPHRASE, &salt);
    assert!(auth::admin_login("ops@ngo.org", DEFAULT_ADMIN_PASSPHRASE, &hash, &salt).is_ok());
}

#[test]
fn admin_login_rejects_a_wrong_passphrase() {
    let salt = auth::generate_salt();
    let hash = auth::hash_password(DEFAULT_ADMIN_PASSPHRASE, &salt);
    let err = auth::admin_login("ops@ngo.org", "guessed", &hash, &salt).unwrap_err();
    assert!(matches!(err, AuthError::InvalidCredentials));
}

#[test]
fn admin_login_requires_an_email() {
    let salt = auth::generate_salt();
    let hash = auth::hash_password(DEFAULT_ADMIN_PASSPHRASE, &salt);
    let err = auth::admin_login("  ", DEFAULT_ADMIN_PASSPHRASE, &hash, &salt).unwrap_err();
    assert!(matches!(err, AuthError::Validation(_)));
}

// =============================================================================
// Staff login
// =============================================================================

#[test]
fn staff_login_matches_email_case_insensitively() {
    let staff = vec![StaffBuilder::new().email("Test.Person@NGO.org").build()];
    let user = auth::staff_login(&staff, "test.person@ngo.org", "correct-horse").unwrap();
    assert_eq!(user.id, "NGO-5000");
}

#[test]
fn staff_login_distinguishes_unknown_account_from_wrong_password() {
    let staff = vec![StaffBuilder::new().build()];
    let err = auth::staff_login(&staff, "nobody@ngo.org", "correct-horse").unwrap_err();
    assert!(matches!(err, AuthError::AccountNotFound));
    let err = auth::staff_login(&staff, "test.person@ngo.org", "wrong").unwrap_err();
    assert!(matches!(err, AuthError::WrongPassword));
}

// =============================================================================
// Signup
// =============================================================================

#[test]
fn begin_signup_never_holds_the_plaintext_password() {
    let pending = auth::begin_signup(&[], &request("new.person@ngo.org")).unwrap();
    assert_ne!(pending.password_hash, "hunter2hunter");
    assert!(auth::verify_password(
        "hunter2hunter",
        &pending.password_salt,
        &pending.password_hash
    ));
}

#[test]
fn begin_signup_rejects_a_duplicate_email_regardless_of_case() {
    let staff = vec![StaffBuilder::new().email("taken@ngo.org").build()];
    let err = auth::begin_signup(&staff, &request("TAKEN@NGO.ORG")).unwrap_err();
    assert!(matches!(err, AuthError::DuplicateEmail));
}

#[test]
fn begin_signup_rejects_disposable_domains() {
    let err = auth::begin_signup(&[], &request("burner@mailinator.com")).unwrap_err();
    assert!(matches!(err, AuthError::Validation(_)));
}

#[test]
fn begin_signup_rejects_blank_fields() {
    let mut req = request("new.person@ngo.org");
    req.role = "  ".to_string();
    let err = auth::begin_signup(&[], &req).unwrap_err();
    assert!(matches!(err, AuthError::Validation(_)));
}

#[test]
fn otp_bypass_is_honored_only_in_dev_mode() {
    let pending = auth::begin_signup(&[], &request("new.person@ngo.org")).unwrap();
    assert!(auth::verify_otp(&pending, &pending.code, false));
    assert!(auth::verify_otp(&pending, "123456", true));
    assert!(!auth::verify_otp(&pending, "000000", true));
    if pending.code != "123456" {
        assert!(!auth::verify_otp(&pending, "123456", false));
    }
}

#[test]
fn materialized_signup_is_active_for_one_year() {
    let pending = auth::begin_signup(&[], &request("new.person@ngo.org")).unwrap();
    let record = auth::materialize_signup(&pending, &[]).unwrap();
    assert!(record.id.starts_with("NGO-"));
    assert_eq!(record.status, StaffStatus::Active);
    let joined: chrono::NaiveDate = record.join_date.parse().unwrap();
    let valid_until: chrono::NaiveDate = record.valid_until.parse().unwrap();
    assert_eq!(valid_until - joined, chrono::Duration::days(365));
}

#[test]
fn materialize_errors_when_the_id_space_is_exhausted() {
    let pending = auth::begin_signup(&[], &request("new.person@ngo.org")).unwrap();
    // Occupy the whole NGO-1000..9999 space
    let staff: Vec<_> = (1000..10000)
        .map(|n| StaffBuilder::new().id(&format!("NGO-{n}")).build())
        .collect();
    assert!(auth::materialize_signup(&pending, &staff).is_err());
}
