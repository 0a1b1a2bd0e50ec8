//! Administrator commands

use anyhow::{Context, bail};
use log::warn;

use crate::adapters::insight::{GeminiInsight, MISSING_KEY_PLACEHOLDER, UNAVAILABLE_PLACEHOLDER};
use crate::cli::app::AdminAction;
use crate::config::Config;
use crate::core::models::{Role, StaffMember, staff::unique_staff_id};
use crate::core::ports::InsightProvider;
use crate::core::services::{auth, insight, lifecycle};
use crate::output::{InsightReport, OperationResult, OutputMode, StaffListResult, StaffRow};
use crate::session::Session;
use crate::store::{RecordStore, sync};

/// Handle admin subcommands
pub fn admin_cmd(action: AdminAction, mode: OutputMode) -> anyhow::Result<()> {
    match action {
        AdminAction::Login { email, password } => login(&email, &password, mode),
        AdminAction::Add {
            full_name,
            role,
            department,
            email,
            valid_until,
        } => add(&full_name, &role, &department, &email, valid_until, mode),
        AdminAction::Toggle { id } => toggle(&id, mode),
        AdminAction::List => list(mode),
        AdminAction::Insights => insights(mode),
    }
}

/// Require an admin session for privileged actions
fn require_admin() -> anyhow::Result<()> {
    match Session::load() {
        Some(session) if session.role == Role::Admin => Ok(()),
        _ => bail!("admin login required (run `veritrust admin login`)"),
    }
}

fn login(email: &str, password: &str, mode: OutputMode) -> anyhow::Result<()> {
    let config = Config::load();
    auth::admin_login(
        email,
        password,
        &config.auth.admin_passphrase_hash,
        &config.auth.admin_passphrase_salt,
    )?;
    Session::admin().save()?;
    OperationResult {
        success: true,
        message: "Admin access granted.".to_string(),
    }
    .render(mode);
    Ok(())
}

fn add(
    full_name: &str,
    role: &str,
    department: &str,
    email: &str,
    valid_until: Option<String>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    require_admin()?;
    if full_name.trim().is_empty() || role.trim().is_empty() || department.trim().is_empty() {
        bail!("All fields are required.");
    }
    auth::validate_email(email)?;

    let config = Config::load();
    let remote = super::remote_client(&config);
    let mut store = RecordStore::load(remote.as_deref());

    let id = unique_staff_id(store.staff())?;

    let today = chrono::Utc::now().date_naive();
    let valid_until =
        valid_until.unwrap_or_else(|| (today + chrono::Duration::days(365)).to_string());

    let record = StaffMember {
        photo_url: format!("https://picsum.photos/200/200?random={id}"),
        id: id.clone(),
        full_name: full_name.to_string(),
        role: role.to_string(),
        department: department.to_string(),
        join_date: today.to_string(),
        valid_until,
        status: lifecycle::initial_status(),
        email: email.to_string(),
        password_hash: String::new(),
        password_salt: String::new(),
    };

    store.add_staff(record)?;
    store.save_local()?;
    sync::flush(store.take_pending(), remote.as_deref());

    OperationResult {
        success: true,
        message: format!("Registered {full_name} as {id} (ACTIVE)."),
    }
    .render(mode);
    Ok(())
}

fn toggle(id: &str, mode: OutputMode) -> anyhow::Result<()> {
    require_admin()?;

    let config = Config::load();
    let remote = super::remote_client(&config);
    let mut store = RecordStore::load(remote.as_deref());

    let current = store
        .find_staff(id)
        .with_context(|| format!("no staff record with id: {id}"))?
        .status;
    let next = lifecycle::toggled(current);

    store.update_status(id, next)?;
    store.save_local()?;
    sync::flush(store.take_pending(), remote.as_deref());

    OperationResult {
        success: true,
        message: format!("{id}: {current} -> {next}"),
    }
    .render(mode);
    Ok(())
}

fn list(mode: OutputMode) -> anyhow::Result<()> {
    require_admin()?;

    let config = Config::load();
    let remote = super::remote_client(&config);
    let store = RecordStore::load(remote.as_deref());

    StaffListResult {
        staff: store.staff().iter().map(StaffRow::from).collect(),
    }
    .render(mode);
    Ok(())
}

fn insights(mode: OutputMode) -> anyhow::Result<()> {
    require_admin()?;

    let config = Config::load();
    let remote = super::remote_client(&config);
    let store = RecordStore::load(remote.as_deref());

    let summary = match GeminiInsight::from_config(&config.insight)? {
        None => MISSING_KEY_PLACEHOLDER.to_string(),
        Some(provider) => {
            let logs = insight::recent_logs(store.logs());
            let projection = insight::project_staff(store.staff());
            provider.summarize(logs, &projection).unwrap_or_else(|e| {
                warn!("insight summarize failed: {e:#}");
                UNAVAILABLE_PLACEHOLDER.to_string()
            })
        },
    };

    InsightReport { summary }.render(mode);
    Ok(())
}
