//! Remote persistence diagnostics

use anyhow::bail;

use crate::cli::app::SyncAction;
use crate::config::Config;
use crate::output::{OperationResult, OutputMode, SyncFailureRow, SyncStatusResult};
use crate::store::sync;

/// Handle sync subcommands
pub fn sync_cmd(action: &SyncAction, mode: OutputMode) -> anyhow::Result<()> {
    match action {
        SyncAction::Status => status(mode),
        SyncAction::Retry => retry(mode),
    }
}

fn status(mode: OutputMode) -> anyhow::Result<()> {
    let config = Config::load();
    let failures = sync::journal_load()?
        .into_iter()
        .map(|entry| SyncFailureRow {
            op: entry.op.describe(),
            error: entry.error,
            failed_at: entry.failed_at,
        })
        .collect();

    SyncStatusResult {
        remote_configured: config.remote.is_configured(),
        failures,
    }
    .render(mode);
    Ok(())
}

fn retry(mode: OutputMode) -> anyhow::Result<()> {
    let config = Config::load();
    let Some(remote) = super::remote_client(&config) else {
        bail!("no remote store configured; nothing to retry against");
    };

    let (attempted, still_failing) = sync::retry(remote.as_ref())?;
    let message = if attempted == 0 {
        "No journaled sync failures.".to_string()
    } else if still_failing == 0 {
        format!("Retried {attempted} op(s); all succeeded.")
    } else {
        format!("Retried {attempted} op(s); {still_failing} still failing.")
    };

    OperationResult {
        success: still_failing == 0,
        message,
    }
    .render(mode);
    Ok(())
}
