//! Show the verification log

use crate::config::Config;
use crate::output::{LogListResult, LogRow, OutputMode};
use crate::store::RecordStore;

/// List verification log entries, newest first
pub fn list(limit: Option<usize>, mode: OutputMode) -> anyhow::Result<()> {
    let config = Config::load();
    let remote = super::remote_client(&config);
    let store = RecordStore::load(remote.as_deref());

    let logs = store.logs();
    let shown = match limit {
        Some(n) => &logs[..logs.len().min(n)],
        None => logs,
    };

    LogListResult {
        logs: shown.iter().map(LogRow::from).collect(),
    }
    .render(mode);
    Ok(())
}
