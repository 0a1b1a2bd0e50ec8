//! Staff commands: login, signup, OTP confirmation, identity card

use std::fs;

use anyhow::{Context, bail};

use crate::adapters::email::HttpOtpMailer;
use crate::cli::app::StaffAction;
use crate::config::Config;
use crate::core::models::Role;
use crate::core::ports::OtpMailer;
use crate::core::services::auth;
use crate::core::services::auth::{AuthError, PendingSignup, SignupRequest};
use crate::output::{CardView, OperationResult, OutputMode};
use crate::paths;
use crate::session::Session;
use crate::store::{RecordStore, sync};

/// Handle staff subcommands
pub fn staff_cmd(action: StaffAction, mode: OutputMode) -> anyhow::Result<()> {
    match action {
        StaffAction::Login { email, password } => login(&email, &password, mode),
        StaffAction::Signup {
            full_name,
            role,
            department,
            email,
            password,
        } => signup(
            SignupRequest {
                full_name,
                role,
                department,
                email,
                password,
            },
            mode,
        ),
        StaffAction::Verify { code } => verify(&code, mode),
        StaffAction::Card => card(mode),
    }
}

fn login(email: &str, password: &str, mode: OutputMode) -> anyhow::Result<()> {
    let config = Config::load();
    let remote = super::remote_client(&config);
    let store = RecordStore::load(remote.as_deref());

    let user = auth::staff_login(store.staff(), email, password)?;
    Session::staff(user.id.clone()).save()?;

    OperationResult {
        success: true,
        message: format!("Welcome back, {} [{}].", user.full_name, user.id),
    }
    .render(mode);
    Ok(())
}

fn signup(request: SignupRequest, mode: OutputMode) -> anyhow::Result<()> {
    let config = Config::load();
    let remote = super::remote_client(&config);
    let store = RecordStore::load(remote.as_deref());

    let pending = auth::begin_signup(store.staff(), &request)?;

    let mailer = HttpOtpMailer::from_config(&config.email)?;
    send_then_hold(&pending, &mailer)?;

    OperationResult {
        success: true,
        message: format!(
            "Code sent to {}. Confirm with `veritrust staff verify <code>`.",
            pending.email
        ),
    }
    .render(mode);
    Ok(())
}

fn verify(code: &str, mode: OutputMode) -> anyhow::Result<()> {
    let pending = load_pending()?
        .context("no signup in progress (run `veritrust staff signup` first)")?;

    let config = Config::load();
    if !auth::verify_otp(&pending, code, config.auth.dev_mode) {
        return Err(AuthError::InvalidOtp.into());
    }

    let remote = super::remote_client(&config);
    let mut store = RecordStore::load(remote.as_deref());

    let record = auth::materialize_signup(&pending, store.staff())?;
    let id = record.id.clone();
    let name = record.full_name.clone();
    store.add_staff(record)?;
    store.save_local()?;
    sync::flush(store.take_pending(), remote.as_deref());

    clear_pending()?;
    Session::staff(id.clone()).save()?;

    OperationResult {
        success: true,
        message: format!("Account activated. Welcome, {name} [{id}]."),
    }
    .render(mode);
    Ok(())
}

fn card(mode: OutputMode) -> anyhow::Result<()> {
    let session = Session::load();
    let staff_id = match session {
        Some(Session {
            role: Role::Staff,
            staff_id: Some(id),
        }) => id,
        _ => bail!("staff login required (run `veritrust staff login`)"),
    };

    let config = Config::load();
    let remote = super::remote_client(&config);
    let store = RecordStore::load(remote.as_deref());

    let record = store
        .find_staff(&staff_id)
        .with_context(|| format!("no staff record with id: {staff_id}"))?;

    CardView::new(record).render(mode);
    Ok(())
}

/// Dispatch the confirmation code, then hold the registration.
///
/// Ordering matters: a failed send holds no pending state, so re-running
/// signup regenerates and resends a fresh code.
pub fn send_then_hold(pending: &PendingSignup, mailer: &dyn OtpMailer) -> anyhow::Result<()> {
    mailer
        .send_code(&pending.email, &pending.code)
        .map_err(|e| AuthError::Delivery(format!("{e:#}")))?;
    save_pending(pending)
}

// =============================================================================
// Pending signup persistence
// =============================================================================

fn save_pending(pending: &PendingSignup) -> anyhow::Result<()> {
    let path = paths::pending_signup_file();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, serde_json::to_string_pretty(pending)?)?;
    Ok(())
}

fn load_pending() -> anyhow::Result<Option<PendingSignup>> {
    let path = paths::pending_signup_file();
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&path)?;
    Ok(Some(serde_json::from_str(&content)?))
}

fn clear_pending() -> anyhow::Result<()> {
    let path = paths::pending_signup_file();
    if path.exists() {
        fs::remove_file(path)?;
    }
    Ok(())
}
