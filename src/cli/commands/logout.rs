//! Clear the current session

use crate::output::{OperationResult, OutputMode};
use crate::session::Session;

/// Log the current principal out
pub fn logout(mode: OutputMode) -> anyhow::Result<()> {
    let had_session = Session::load().is_some();
    Session::clear()?;
    OperationResult {
        success: true,
        message: if had_session {
            "Logged out.".to_string()
        } else {
            "No active session.".to_string()
        },
    }
    .render(mode);
    Ok(())
}
