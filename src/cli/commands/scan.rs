//! Resolve a scanned QR payload

use crate::config::Config;
use crate::core::services::scanner::{self, Resolution};
use crate::output::{OutputMode, ScanReport};
use crate::session;
use crate::store::{RecordStore, sync};

/// Resolve a payload, log a matched scan, and report the verdict.
///
/// Unmatched payloads produce no log entry; the INVALID report is clearly
/// distinct from a FAIL on a known-but-inactive record.
pub fn scan(payload: &str, mode: OutputMode) -> anyhow::Result<()> {
    let config = Config::load();
    let remote = super::remote_client(&config);
    let mut store = RecordStore::load(remote.as_deref());

    let verifier = session::verifier_id()?;

    let report = match scanner::resolve(payload, store.staff(), &verifier) {
        Resolution::Verified { staff, log } => {
            let result = log.result;
            store.append_log(log);
            store.save_local()?;
            sync::flush(store.take_pending(), remote.as_deref());
            ScanReport::matched(payload, &staff, result)
        },
        Resolution::NotFound { payload } => ScanReport::invalid(&payload),
        Resolution::DocumentSeal { payload } => ScanReport::document_seal(&payload),
    };

    report.render(mode);
    Ok(())
}
