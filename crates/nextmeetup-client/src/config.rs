//! Client configuration.
//!
//! All settings live in a single `config.toml` file at
//! `~/.config/nextmeetup/config.toml` by default. Every key is optional; an
//! empty or missing file means "check the HSV.py group".

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use nextmeetup_core::{DEFAULT_GROUP_NAME, FormatOptions};
use nextmeetup_providers::meetup::{DEFAULT_GROUP_URL, DEFAULT_USER_AGENT, MeetupConfig};

/// Configuration for the nextmeetup client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Debug mode.
    pub debug: bool,

    /// Meetup group settings.
    pub meetup: MeetupSettings,
}

/// Which group to check and how to ask for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeetupSettings {
    /// Group page URL.
    pub url: String,

    /// Display name used in the report header.
    pub group_name: String,

    /// User agent sent with the request.
    pub user_agent: String,

    /// Request timeout in seconds; unset means no timeout.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
}

impl Default for MeetupSettings {
    fn default() -> Self {
        Self {
            url: DEFAULT_GROUP_URL.to_string(),
            group_name: DEFAULT_GROUP_NAME.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            request_timeout_secs: None,
        }
    }
}

impl MeetupSettings {
    /// Converts to provider configuration.
    pub fn to_provider_config(&self) -> Result<MeetupConfig, String> {
        let mut config = MeetupConfig::new(&self.url)
            .map_err(|e| format!("invalid meetup url {:?}: {}", self.url, e))?
            .with_user_agent(&self.user_agent);

        if let Some(secs) = self.request_timeout_secs {
            config = config.with_timeout(Duration::from_secs(secs));
        }

        Ok(config)
    }

    /// Report options derived from these settings.
    pub fn format_options(&self) -> FormatOptions {
        FormatOptions::default().with_group_name(&self.group_name)
    }

    /// Checks the settings for values that would make a run pointless.
    pub fn validate(&self) -> Result<(), String> {
        let config = self.to_provider_config()?;
        if !matches!(config.url.scheme(), "http" | "https") {
            return Err(format!(
                "meetup url must be http or https, got {:?}",
                config.url.scheme()
            ));
        }
        if self.user_agent.trim().is_empty() {
            return Err("user_agent must not be empty".to_string());
        }
        if self.request_timeout_secs == Some(0) {
            return Err("request_timeout_secs must be greater than zero".to_string());
        }
        Ok(())
    }
}

impl ClientConfig {
    /// Loads configuration from the default path.
    ///
    /// A missing file yields the defaults.
    pub fn load() -> Result<Self, String> {
        Self::load_or_default(&Self::default_path())
    }

    /// Loads configuration from `path`, or the defaults if it does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, String> {
        if path.exists() {
            Self::load_from(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Loads configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("failed to read config {}: {}", path.display(), e))?;
        toml::from_str(&content).map_err(|e| format!("failed to parse config: {}", e))
    }

    /// Returns the default configuration file path.
    pub fn default_path() -> PathBuf {
        Self::default_config_dir().join("config.toml")
    }

    /// Returns the default configuration directory.
    pub fn default_config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("nextmeetup")
    }
}
