// src/config.rs

use anyhow::{Context, Result};
use serde::Deserialize;
use std::{fs, path::Path, time::Duration};

/// Environment variable holding the webhook base URL.
pub const ENV_WEBHOOK_BASE_URL: &str = "WEBHOOK_BASE_URL";
/// Environment variable holding an optional request timeout (milliseconds).
pub const ENV_WEBHOOK_TIMEOUT_MS: &str = "WEBHOOK_TIMEOUT_MS";
/// Environment variable holding the mock server bind address.
pub const ENV_ADDR: &str = "WFHOOK_ADDR";

/// Root configuration loaded from `wfhook.yaml`.
///
/// Example:
///
/// client:
///   webhook_base_url: https://automation.example.com/webhook
///   timeout_ms: 10000
/// server:
///   addr: 127.0.0.1:3000
///   delay_ms: 100
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Outbound trigger client settings
    #[serde(default)]
    pub client: ClientConfig,

    /// Mock endpoint settings
    #[serde(default)]
    pub server: ServerConfig,
}

/// Settings for [`crate::client::WorkflowClient`].
///
/// Passed in at construction; the client never reads the environment itself.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// Base URL that workflow ids are appended to.
    ///
    /// Unset or empty means the client is not configured.
    #[serde(default)]
    pub webhook_base_url: Option<String>,

    /// Optional per-request timeout in milliseconds.
    ///
    /// When absent the HTTP transport default applies (no timeout).
    #[serde(default)]
    pub timeout_ms: Option<u64>,

    /// Value of the `User-Agent` header sent with every trigger.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            webhook_base_url: None,
            timeout_ms: None,
            user_agent: default_user_agent(),
        }
    }
}

impl ClientConfig {
    pub fn new(webhook_base_url: impl Into<String>) -> Self {
        Self {
            webhook_base_url: Some(webhook_base_url.into()),
            ..Self::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = Some(timeout.as_millis() as u64);
        self
    }

    /// The base URL to join workflow ids onto, or `None` when unset or empty.
    ///
    /// Any value with at least one character counts as configured, even
    /// whitespace. Trailing `/` is stripped so `https://host/hook/` joins to
    /// `https://host/hook/<id>` and not `https://host/hook//<id>`, which most
    /// webhook routers would not match.
    pub fn base_url(&self) -> Option<&str> {
        self.webhook_base_url
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(|s| s.trim_end_matches('/'))
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }
}

fn default_user_agent() -> String {
    format!("wfhook/{}", env!("CARGO_PKG_VERSION"))
}

/// Mock endpoint server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_addr")]
    pub addr: String,

    /// Simulated processing time per request
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: default_addr(),
            delay_ms: default_delay_ms(),
        }
    }
}

impl ServerConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

fn default_addr() -> String {
    "127.0.0.1:3000".to_string()
}

fn default_delay_ms() -> u64 {
    100
}

impl Config {
    /// Load and parse a YAML config file from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        let cfg: Config = serde_yaml::from_str(&raw).context("Failed to parse YAML config")?;

        Ok(cfg)
    }

    /// Like [`Config::load`], but a missing file yields the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Apply overrides from the process environment.
    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_env_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup.
    pub fn apply_env_from<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_WEBHOOK_BASE_URL) {
            self.client.webhook_base_url = Some(url);
        }

        if let Some(raw) = lookup(ENV_WEBHOOK_TIMEOUT_MS) {
            let ms = raw
                .trim()
                .parse::<u64>()
                .with_context(|| format!("{} must be an integer, got {:?}", ENV_WEBHOOK_TIMEOUT_MS, raw))?;
            self.client.timeout_ms = Some(ms);
        }

        if let Some(addr) = lookup(ENV_ADDR) {
            self.server.addr = addr;
        }

        Ok(())
    }
}
