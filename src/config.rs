//! Organization configuration management
//!
//! Provides persistent settings for the admin passphrase, development mode,
//! and the three external collaborators (remote document store, OTP mailer,
//! insight summarizer). Config is stored at `~/.veritrust/config.toml`.

use std::fs;

use serde::{Deserialize, Serialize};

use crate::core::services::auth;
use crate::paths;

/// Default admin passphrase, hashed into freshly initialized configs.
///
/// Operators are expected to replace the stored hash after `init`; the
/// default exists so a fresh installation is usable immediately.
pub const DEFAULT_ADMIN_PASSPHRASE: &str = "Aman@12";

/// Salt used for the default admin passphrase hash
const DEFAULT_ADMIN_SALT: &str = "veritrust-default";

/// Organization-wide veritrust configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Authentication settings
    #[serde(default)]
    pub auth: AuthConfig,
    /// Remote document store collaborator
    #[serde(default)]
    pub remote: RemoteConfig,
    /// OTP mailer collaborator
    #[serde(default)]
    pub email: EmailConfig,
    /// Insight summarizer collaborator
    #[serde(default)]
    pub insight: InsightConfig,
}

/// Authentication settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Salted hash of the shared admin passphrase
    #[serde(default = "default_admin_hash")]
    pub admin_passphrase_hash: String,
    /// Salt for the admin passphrase hash
    #[serde(default = "default_admin_salt")]
    pub admin_passphrase_salt: String,
    /// Development mode: enables the fixed OTP bypass code.
    ///
    /// The bypass is an operator/testing convenience and must stay disabled
    /// in production installations.
    #[serde(default)]
    pub dev_mode: bool,
}

fn default_admin_salt() -> String {
    DEFAULT_ADMIN_SALT.to_string()
}

fn default_admin_hash() -> String {
    auth::hash_password(DEFAULT_ADMIN_PASSPHRASE, DEFAULT_ADMIN_SALT)
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            admin_passphrase_hash: default_admin_hash(),
            admin_passphrase_salt: default_admin_salt(),
            dev_mode: false,
        }
    }
}

/// Remote document store settings
///
/// When `base_url` is empty the store runs local-only: loads fall back to
/// the cached/demo data and no remote persistence is attempted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// Base URL of the document store API (empty = unconfigured)
    #[serde(default)]
    pub base_url: String,
    /// API key sent as a bearer token (empty = no auth header)
    #[serde(default)]
    pub api_key: String,
}

impl RemoteConfig {
    /// Whether a remote store has been configured
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.base_url.is_empty()
    }
}

/// OTP mailer settings
///
/// When `public_key` is empty the mailer runs in simulation mode: the code
/// is logged instead of dispatched, and the send reports success.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailConfig {
    /// Mail API endpoint
    #[serde(default = "default_email_endpoint")]
    pub endpoint: String,
    /// Mail service identifier
    #[serde(default)]
    pub service_id: String,
    /// Mail template identifier
    #[serde(default)]
    pub template_id: String,
    /// Public API key (empty = simulation mode)
    #[serde(default)]
    pub public_key: String,
}

fn default_email_endpoint() -> String {
    "https://api.emailjs.com/api/v1.0/email/send".to_string()
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            endpoint: default_email_endpoint(),
            service_id: String::new(),
            template_id: String::new(),
            public_key: String::new(),
        }
    }
}

/// Insight summarizer settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightConfig {
    /// API key for the generative text service (empty = unavailable)
    #[serde(default)]
    pub api_key: String,
    /// Model identifier
    #[serde(default = "default_insight_model")]
    pub model: String,
}

fn default_insight_model() -> String {
    "gemini-3-flash-preview".to_string()
}

impl Default for InsightConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: default_insight_model(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            auth: AuthConfig::default(),
            remote: RemoteConfig::default(),
            email: EmailConfig::default(),
            insight: InsightConfig::default(),
        }
    }
}

impl Config {
    /// Load config from disk, or create default if not exists
    #[must_use]
    pub fn load() -> Self {
        let path = paths::config_file();
        if path.exists() {
            fs::read_to_string(&path)
                .ok()
                .and_then(|content| toml::from_str(&content).ok())
                .unwrap_or_default()
        } else {
            Self::default()
        }
    }

    /// Save config to disk
    pub fn save(&self) -> anyhow::Result<()> {
        let path = paths::config_file();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)?;
        Ok(())
    }
}
