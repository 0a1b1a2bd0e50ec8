//! Initialize the local installation

use anyhow::bail;

use crate::config::Config;
use crate::output::{OperationResult, OutputMode};
use crate::paths;
use crate::store::RecordStore;

/// Create the state directory, default config, and seeded record cache
pub fn init(force: bool, dev: bool, mode: OutputMode) -> anyhow::Result<()> {
    let config_path = paths::config_file();
    if config_path.exists() && !force {
        bail!(
            "already initialized at {} (use --force to re-initialize)",
            paths::state_dir().display()
        );
    }

    if force {
        let dir = paths::state_dir();
        if dir.exists() {
            std::fs::remove_dir_all(&dir)?;
        }
    }

    let mut config = Config::default();
    config.auth.dev_mode = dev;
    config.save()?;

    // Seed the cache so a fresh install is browsable offline
    let store = RecordStore::load(None);
    store.save_local()?;

    let message = if dev {
        format!(
            "Initialized veritrust at {} (development mode: OTP bypass enabled)",
            paths::state_dir().display()
        )
    } else {
        format!("Initialized veritrust at {}", paths::state_dir().display())
    };
    OperationResult {
        success: true,
        message,
    }
    .render(mode);
    Ok(())
}
