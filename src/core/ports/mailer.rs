//! OTP mailer port
//!
//! A single fire-and-forget send; no delivery-status callback is consumed.

/// Dispatcher for one-time signup codes
pub trait OtpMailer: Send + Sync {
    /// Send `code` to `recipient`. An error surfaces to the signing-up user
    /// as a retryable "try again" prompt; the gate never retries itself.
    fn send_code(&self, recipient: &str, code: &str) -> anyhow::Result<()>;
}
