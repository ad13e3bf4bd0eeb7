use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::net::DEFAULT_BASE_URL;

pub const SECRET_KEY_ENV: &str = "PAYSTACK_SECRET_KEY";
pub const BASE_URL_ENV: &str = "PAYSTACK_BASE_URL";

#[derive(Clone, Serialize, Deserialize, PartialEq)]
pub struct ClientConfig {
    #[serde(default)]
    pub secret_key: String,
    #[serde(default = "defaults::base_url")]
    pub base_url: String,
    #[serde(default = "defaults::timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            secret_key: String::new(),
            base_url: defaults::base_url(),
            timeout_secs: defaults::timeout_secs(),
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("secret_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl ClientConfig {
    pub fn new(secret_key: impl Into<String>) -> Self {
        Self {
            secret_key: secret_key.into(),
            ..Self::default()
        }
    }

    /// Overrides fields with any values `lookup` finds for the `PAYSTACK_*` variables.
    pub fn with_env(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(secret_key) = lookup(SECRET_KEY_ENV).filter(|v| !v.is_empty()) {
            self.secret_key = secret_key;
        }
        if let Some(base_url) = lookup(BASE_URL_ENV).filter(|v| !v.is_empty()) {
            self.base_url = base_url;
        }
        self
    }
}

mod defaults {
    use super::DEFAULT_BASE_URL;

    pub fn base_url() -> String {
        DEFAULT_BASE_URL.to_string()
    }

    pub fn timeout_secs() -> u64 {
        30
    }
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("paystack")
        .join("config.json")
}

/// Reads the saved config, if any, then applies environment overrides.
pub fn load_config() -> Option<ClientConfig> {
    let config = saved_config(&config_path()).with_env(|name| std::env::var(name).ok());
    (!config.secret_key.is_empty()).then_some(config)
}

/// Like [`load_config_from`], but falls back to the defaults. A file that
/// exists but cannot be read or parsed is logged before being ignored.
pub fn saved_config(path: &Path) -> ClientConfig {
    if !path.exists() {
        return ClientConfig::default();
    }
    load_config_from(path).unwrap_or_else(|err| {
        tracing::warn!(path = %path.display(), error = %format!("{err:#}"), "ignoring config file");
        ClientConfig::default()
    })
}

pub fn load_config_from(path: &Path) -> Result<ClientConfig> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let config = serde_json::from_str(&data)
        .with_context(|| format!("parsing {}", path.display()))?;
    Ok(config)
}

pub fn save_config(config: &ClientConfig) -> Result<PathBuf> {
    let path = config_path();
    save_config_to(config, &path)?;
    Ok(path)
}

pub fn save_config_to(config: &ClientConfig, path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }
    let data = serde_json::to_string_pretty(config)?;
    std::fs::write(path, data)?;
    Ok(())
}
