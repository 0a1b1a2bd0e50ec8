//! OTP mail dispatch
//!
//! Sends the signup code through a transactional mail API. When no public
//! key is configured the mailer runs in simulation mode: the code is logged
//! and the send reports success, which keeps a fresh installation usable
//! without a mail account.

use std::time::Duration;

use anyhow::bail;
use log::info;
use serde_json::json;

use crate::config::EmailConfig;
use crate::core::ports::OtpMailer;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Mail API client with a simulation fallback
#[derive(Debug)]
pub struct HttpOtpMailer {
    client: reqwest::blocking::Client,
    config: EmailConfig,
}

impl HttpOtpMailer {
    /// Build a mailer from config
    pub fn from_config(config: &EmailConfig) -> anyhow::Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    fn is_simulated(&self) -> bool {
        self.config.public_key.is_empty()
    }
}

impl OtpMailer for HttpOtpMailer {
    fn send_code(&self, recipient: &str, code: &str) -> anyhow::Result<()> {
        if self.is_simulated() {
            info!("[simulation] email sent to {recipient} with code {code}");
            return Ok(());
        }

        let body = json!({
            "service_id": self.config.service_id,
            "template_id": self.config.template_id,
            "user_id": self.config.public_key,
            "template_params": {
                "to_email": recipient,
                "otp_code": code,
                "message": "Your verification code for the VeriTrust staff portal",
            },
        });

        let response = self.client.post(&self.config.endpoint).json(&body).send()?;
        let status = response.status();
        if !status.is_success() {
            let text = response.text().unwrap_or_default();
            bail!("mail API returned {status}: {text}");
        }
        Ok(())
    }
}
