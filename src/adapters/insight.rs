//! Generative-text advisory client
//!
//! Sends recent verification activity to a generative text model and
//! returns its short security summary. Callers treat every failure as
//! non-fatal: the missing-key and error placeholders are defined here so
//! the command layer and the adapter stay consistent.

use std::time::Duration;

use anyhow::{anyhow, bail};
use serde_json::{Value, json};

use crate::config::InsightConfig;
use crate::core::models::VerificationLog;
use crate::core::ports::InsightProvider;
use crate::core::services::insight::{StaffProjection, build_prompt};

/// Shown when no API key is configured
pub const MISSING_KEY_PLACEHOLDER: &str = "API Key missing. Unable to generate insights.";

/// Shown when the summarize call fails or returns nothing useful
pub const UNAVAILABLE_PLACEHOLDER: &str = "Unable to analyze logs at this time.";

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

/// Generative-text client
#[derive(Debug)]
pub struct GeminiInsight {
    client: reqwest::blocking::Client,
    api_key: String,
    model: String,
}

impl GeminiInsight {
    /// Build a client from config; `None` when no API key is set
    pub fn from_config(config: &InsightConfig) -> anyhow::Result<Option<Self>> {
        if config.api_key.is_empty() {
            return Ok(None);
        }
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Some(Self {
            client,
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        }))
    }
}

impl InsightProvider for GeminiInsight {
    fn summarize(
        &self,
        logs: &[VerificationLog],
        staff: &[StaffProjection],
    ) -> anyhow::Result<String> {
        let prompt = build_prompt(logs, staff);
        let url = format!("{BASE_URL}/{}:generateContent?key={}", self.model, self.api_key);
        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
        });

        let response = self.client.post(url).json(&body).send()?;
        let status = response.status();
        if !status.is_success() {
            let text = response.text().unwrap_or_default();
            bail!("insight API returned {status}: {text}");
        }

        let value: Value = response.json()?;
        value
            .pointer("/candidates/0/content/parts/0/text")
            .and_then(Value::as_str)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| anyhow!("insight response carried no text"))
    }
}
