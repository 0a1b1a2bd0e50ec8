//! Authentication gates
//!
//! Three independent, mutually exclusive admission checks:
//!
//! 1. **Admin admission** - any non-empty email plus the exact shared
//!    passphrase. No per-admin identity is tracked.
//! 2. **Staff login** - case-insensitive email lookup, then password check.
//!    The "no account" / "wrong password" distinction is surfaced to the
//!    acting user as a usability feature; it is not a security boundary.
//! 3. **Staff signup** - email validation, duplicate check, 6-digit OTP
//!    dispatched through the mailer collaborator, then code confirmation.
//!
//! Passwords and the admin passphrase are stored as salted SHA-256 hashes.
//! None of the gates retry anything automatically.

use std::sync::LazyLock;

use rand::Rng;
use rand::distributions::Alphanumeric;
use regex::Regex;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::core::models::StaffMember;
use crate::core::services::lifecycle;

/// Fixed OTP bypass code, honored only in development mode.
///
/// A deliberate operator/testing backdoor inherited from the original
/// design; production installations must keep development mode off.
pub const OTP_BYPASS_CODE: &str = "123456";

/// Disposable email domains rejected at signup
pub const DISPOSABLE_DOMAINS: &[&str] = &[
    "mailinator.com",
    "temp-mail.org",
    "guerrillamail.com",
    "yopmail.com",
    "10minutemail.com",
    "sharklasers.com",
    "throwawaymail.com",
];

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid")
});

/// Why an admission check was refused
#[derive(Debug, Error)]
pub enum AuthError {
    /// Malformed or disallowed input
    #[error("{0}")]
    Validation(String),

    /// No staff record for the given email
    #[error("Account not found. Please register.")]
    AccountNotFound,

    /// Staff password did not match
    #[error("Incorrect password.")]
    WrongPassword,

    /// Admin passphrase did not match (deliberately generic)
    #[error("Invalid credentials. Please check password.")]
    InvalidCredentials,

    /// An account with this email already exists
    #[error("Account already exists with this email. Please login.")]
    DuplicateEmail,

    /// Submitted OTP did not match the held code
    #[error("Invalid OTP. Please try again.")]
    InvalidOtp,

    /// The OTP email could not be dispatched; the user may re-submit
    /// the signup step to regenerate and resend a code
    #[error("Failed to send code. Try again.")]
    Delivery(String),
}

// =============================================================================
// Password hashing
// =============================================================================

/// Salted one-way hash of a credential (hex-encoded SHA-256)
#[must_use]
pub fn hash_password(password: &str, salt: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(b":");
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Generate a random 16-character salt
#[must_use]
pub fn generate_salt() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(16)
        .map(char::from)
        .collect()
}

/// Check a candidate credential against a stored salted hash
#[must_use]
pub fn verify_password(candidate: &str, salt: &str, stored_hash: &str) -> bool {
    hash_password(candidate, salt) == stored_hash
}

// =============================================================================
// Admin admission
// =============================================================================

/// Admit an administrator.
///
/// Any non-empty email plus the exact passphrase match admits; anything
/// else is rejected with a generic signal.
pub fn admin_login(
    email: &str,
    passphrase: &str,
    stored_hash: &str,
    salt: &str,
) -> Result<(), AuthError> {
    if email.trim().is_empty() {
        return Err(AuthError::Validation("Email is required.".to_string()));
    }
    if verify_password(passphrase, salt, stored_hash) {
        Ok(())
    } else {
        Err(AuthError::InvalidCredentials)
    }
}

// =============================================================================
// Staff login
// =============================================================================

/// Admit a staff member by email and password.
///
/// Email lookup is case-insensitive; the password must match exactly.
pub fn staff_login<'a>(
    staff: &'a [StaffMember],
    email: &str,
    password: &str,
) -> Result<&'a StaffMember, AuthError> {
    let user = staff
        .iter()
        .find(|s| s.email_matches(email))
        .ok_or(AuthError::AccountNotFound)?;
    if verify_password(password, &user.password_salt, &user.password_hash) {
        Ok(user)
    } else {
        Err(AuthError::WrongPassword)
    }
}

// =============================================================================
// Staff signup (email-OTP)
// =============================================================================

/// Candidate registration fields submitted at signup
#[derive(Debug, Clone)]
pub struct SignupRequest {
    /// Person's full name
    pub full_name: String,
    /// Job role
    pub role: String,
    /// Department
    pub department: String,
    /// Login email
    pub email: String,
    /// Chosen password (hashed before it is held anywhere)
    pub password: String,
}

/// A registration held between OTP dispatch and confirmation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PendingSignup {
    /// Person's full name
    pub full_name: String,
    /// Job role
    pub role: String,
    /// Department
    pub department: String,
    /// Login email
    pub email: String,
    /// Salted hash of the chosen password
    pub password_hash: String,
    /// Salt for the password hash
    pub password_salt: String,
    /// The generated 6-digit code
    pub code: String,
    /// RFC 3339 timestamp the code was generated
    pub created_at: String,
}

/// Validate a candidate email: format check plus disposable-domain denylist
pub fn validate_email(email: &str) -> Result<(), AuthError> {
    if !EMAIL_RE.is_match(email) {
        return Err(AuthError::Validation("Invalid email format.".to_string()));
    }
    let domain = email.split('@').nth(1).unwrap_or_default().to_lowercase();
    if DISPOSABLE_DOMAINS.contains(&domain.as_str()) {
        return Err(AuthError::Validation(
            "Disposable/Spam emails are not allowed.".to_string(),
        ));
    }
    Ok(())
}

/// Generate a 6-digit numeric one-time code
#[must_use]
pub fn generate_otp() -> String {
    rand::thread_rng().gen_range(100_000..1_000_000).to_string()
}

/// Validate a signup request and hold it with a fresh OTP.
///
/// Rejects empty fields, malformed or disposable emails, and emails already
/// registered. No record is created until the code is confirmed.
pub fn begin_signup(
    staff: &[StaffMember],
    request: &SignupRequest,
) -> Result<PendingSignup, AuthError> {
    if request.full_name.trim().is_empty()
        || request.role.trim().is_empty()
        || request.department.trim().is_empty()
        || request.password.is_empty()
    {
        return Err(AuthError::Validation("All fields are required.".to_string()));
    }

    validate_email(&request.email)?;

    if staff.iter().any(|s| s.email_matches(&request.email)) {
        return Err(AuthError::DuplicateEmail);
    }

    let salt = generate_salt();
    Ok(PendingSignup {
        full_name: request.full_name.clone(),
        role: request.role.clone(),
        department: request.department.clone(),
        email: request.email.clone(),
        password_hash: hash_password(&request.password, &salt),
        password_salt: salt,
        code: generate_otp(),
        created_at: chrono::Utc::now().to_rfc3339(),
    })
}

/// Check a submitted code against the held one.
///
/// Succeeds on an exact match, or on the fixed bypass code when development
/// mode is enabled.
#[must_use]
pub fn verify_otp(pending: &PendingSignup, code: &str, dev_mode: bool) -> bool {
    code == pending.code || (dev_mode && code == OTP_BYPASS_CODE)
}

/// Materialize a confirmed signup into a new ACTIVE staff record.
///
/// The id is drawn to be unique within the given snapshot (bounded draw);
/// the card is valid for one year from today.
pub fn materialize_signup(
    pending: &PendingSignup,
    staff: &[StaffMember],
) -> anyhow::Result<StaffMember> {
    let id = crate::core::models::staff::unique_staff_id(staff)?;

    let today = chrono::Utc::now().date_naive();
    let valid_until = today + chrono::Duration::days(365);

    Ok(StaffMember {
        photo_url: format!("https://picsum.photos/200/200?random={id}"),
        id,
        full_name: pending.full_name.clone(),
        role: pending.role.clone(),
        department: pending.department.clone(),
        join_date: today.to_string(),
        valid_until: valid_until.to_string(),
        status: lifecycle::initial_status(),
        email: pending.email.clone(),
        password_hash: pending.password_hash.clone(),
        password_salt: pending.password_salt.clone(),
    })
}
