//! HTTP document store client
//!
//! Talks to a generic key-document store over REST:
//!
//! - `GET    {base}/{collection}` - list all documents
//! - `PUT    {base}/{collection}/{key}` - create/replace a document
//! - `PATCH  {base}/{collection}/{key}` - partial-update fields
//!
//! Collections: `staff` keyed by record id, `verification_logs` keyed by
//! entry id. No schema migrations, no secondary indexes.

use std::time::Duration;

use serde::Serialize;
use serde_json::json;
use thiserror::Error;

use crate::config::RemoteConfig;
use crate::core::models::{StaffMember, StaffStatus, VerificationLog};
use crate::core::ports::RemoteStore;

const STAFF_COLLECTION: &str = "staff";
const LOGS_COLLECTION: &str = "verification_logs";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Document store client errors
#[derive(Debug, Error)]
pub enum RemoteError {
    /// Transport-level failure
    #[error("Network error: {0}")]
    Network(String),

    /// Non-success HTTP status
    #[error("API error {0}: {1}")]
    Api(u16, String),

    /// Response body did not parse
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Blocking HTTP client for the remote document store
#[derive(Debug)]
pub struct HttpRemoteStore {
    client: reqwest::blocking::Client,
    base_url: String,
    api_key: String,
}

impl HttpRemoteStore {
    /// Build a client from config; `None` when no remote is configured
    pub fn from_config(config: &RemoteConfig) -> anyhow::Result<Option<Self>> {
        if !config.is_configured() {
            return Ok(None);
        }
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Some(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        }))
    }

    fn collection_url(&self, collection: &str) -> String {
        format!("{}/{collection}", self.base_url)
    }

    fn document_url(&self, collection: &str, key: &str) -> String {
        format!("{}/{collection}/{key}", self.base_url)
    }

    fn authorize(
        &self,
        request: reqwest::blocking::RequestBuilder,
    ) -> reqwest::blocking::RequestBuilder {
        if self.api_key.is_empty() {
            request
        } else {
            request.bearer_auth(&self.api_key)
        }
    }

    fn list<T: serde::de::DeserializeOwned>(&self, collection: &str) -> Result<Vec<T>, RemoteError> {
        let response = self
            .authorize(self.client.get(self.collection_url(collection)))
            .send()
            .map_err(|e| RemoteError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(RemoteError::Api(status.as_u16(), body));
        }

        response.json().map_err(|e| RemoteError::Parse(e.to_string()))
    }

    fn put<T: Serialize + ?Sized>(
        &self,
        collection: &str,
        key: &str,
        document: &T,
    ) -> Result<(), RemoteError> {
        let response = self
            .authorize(self.client.put(self.document_url(collection, key)))
            .json(document)
            .send()
            .map_err(|e| RemoteError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(RemoteError::Api(status.as_u16(), body));
        }
        Ok(())
    }

    fn patch<T: Serialize + ?Sized>(
        &self,
        collection: &str,
        key: &str,
        fields: &T,
    ) -> Result<(), RemoteError> {
        let response = self
            .authorize(self.client.patch(self.document_url(collection, key)))
            .json(fields)
            .send()
            .map_err(|e| RemoteError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(RemoteError::Api(status.as_u16(), body));
        }
        Ok(())
    }
}

impl RemoteStore for HttpRemoteStore {
    fn list_staff(&self) -> anyhow::Result<Vec<StaffMember>> {
        Ok(self.list(STAFF_COLLECTION)?)
    }

    fn list_logs(&self) -> anyhow::Result<Vec<VerificationLog>> {
        Ok(self.list(LOGS_COLLECTION)?)
    }

    fn put_staff(&self, record: &StaffMember) -> anyhow::Result<()> {
        Ok(self.put(STAFF_COLLECTION, &record.id, record)?)
    }

    fn update_status(&self, id: &str, status: StaffStatus) -> anyhow::Result<()> {
        Ok(self.patch(STAFF_COLLECTION, id, &json!({ "status": status }))?)
    }

    fn put_log(&self, entry: &VerificationLog) -> anyhow::Result<()> {
        Ok(self.put(LOGS_COLLECTION, &entry.id, entry)?)
    }
}
