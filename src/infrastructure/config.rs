// src/infrastructure/config.rs
use crate::constants::{DEFAULT_BASE_URL, DEFAULT_TITLE_WIDTH};
use crate::domain::Locale;
use anyhow::{Context, Result};
use chrono::FixedOffset;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// TOML configuration for the notes client
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ServerConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Raw `Cookie` header value, empty for none
    #[serde(default)]
    pub cookie: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct DisplayConfig {
    #[serde(default)]
    pub locale: Locale,
    #[serde(default = "default_title_width")]
    pub title_width: usize,
    /// Fixed offset for displayed times; the machine's offset when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utc_offset_minutes: Option<i32>,
}

fn default_base_url() -> String { DEFAULT_BASE_URL.to_string() }
fn default_title_width() -> usize { DEFAULT_TITLE_WIDTH }

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            cookie: String::new(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            title_width: default_title_width(),
            utc_offset_minutes: None,
        }
    }
}

impl ServerConfig {
    pub fn cookie(&self) -> Option<&str> {
        Some(self.cookie.as_str()).filter(|c| !c.trim().is_empty())
    }
}

impl DisplayConfig {
    pub fn utc_offset(&self) -> Result<Option<FixedOffset>> {
        self.utc_offset_minutes
            .map(|minutes| {
                FixedOffset::east_opt(minutes * 60)
                    .with_context(|| format!("UTC offset out of range: {minutes} minutes"))
            })
            .transpose()
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .context("Failed to read config file")?;

        let config: Config = toml::from_str(&content)
            .context("Failed to parse TOML config")?;

        Ok(config)
    }

    /// Load from `path`, or from the default location if it exists, else defaults
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            debug!(?path, "Loading config from explicit path");
            return Self::load(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => {
                debug!(?path, "Loading config from default location");
                Self::load(path)
            }
            _ => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// `<config dir>/notesview/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("notesview").join("config.toml"))
    }

    /// Save configuration to TOML file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let toml_string = toml::to_string_pretty(self)
            .context("Failed to serialize config to TOML")?;

        std::fs::write(path.as_ref(), toml_string)
            .context("Failed to write config file")?;

        Ok(())
    }
}
