//! Command implementations
//!
//! Each module implements one top-level command. Commands share a pattern:
//! load config and record store, run the workflow logic from `core`, commit
//! locally, then flush enqueued remote ops best-effort.

pub mod admin;
pub mod init;
pub mod logout;
pub mod logs;
pub mod scan;
pub mod staff;
pub mod sync;

use crate::config::Config;
use crate::core::ports::RemoteStore;

/// Build the remote store client from config, tolerating a broken setup.
///
/// A misconfigured remote must not block local workflows; it degrades to
/// local-only with a warning.
pub(crate) fn remote_client(config: &Config) -> Option<Box<dyn RemoteStore>> {
    match crate::adapters::remote::HttpRemoteStore::from_config(&config.remote) {
        Ok(Some(client)) => Some(Box::new(client)),
        Ok(None) => None,
        Err(e) => {
            log::warn!("remote store unavailable, running local-only: {e:#}");
            None
        },
    }
}
