//! Configuration management for phocus
//!
//! Every section has defaults, so an empty or partial file is valid. The
//! hosts table location is fixed per platform and deliberately not
//! configurable.

pub mod loader;

use crate::error::{Error, Result};
use crate::hosts::MatchMode;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Longest accepted settle delay
const MAX_SETTLE_DELAY_MS: u64 = 10_000;

const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

/// Main configuration structure for phocus
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Hosts table behaviour
    pub hosts: HostsConfig,

    /// Terminal UI appearance
    pub ui: UiConfig,

    /// Log output
    pub logging: LoggingConfig,
}

/// Hosts table behaviour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostsConfig {
    /// Pause between writing the table and flushing the DNS cache
    pub settle_delay_ms: u64,

    /// How unblocking matches lines against domains
    pub match_mode: MatchMode,

    /// Leave the table alone at exit when nothing was blocked
    pub skip_empty_teardown: bool,
}

impl Default for HostsConfig {
    fn default() -> Self {
        Self {
            settle_delay_ms: 100,
            match_mode: MatchMode::Substring,
            skip_empty_teardown: true,
        }
    }
}

/// Terminal UI appearance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Text of the title bar
    pub title: String,

    /// Placeholder shown in the empty input box
    pub placeholder: String,

    /// Show a timestamp in front of each message
    pub timestamps: bool,

    pub colors: ColorConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: "P H O C U S".to_string(),
            placeholder: "Enter domain to block (e.g., example.com)".to_string(),
            timestamps: true,
            colors: ColorConfig::default(),
        }
    }
}

/// Colors as `#RRGGBB` or a named terminal color
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    /// Title bar background and input border
    pub primary: String,
    pub success: String,
    pub warning: String,
    pub error: String,
    /// Title bar text
    pub text: String,
    /// Borders, help line and placeholder
    pub subtle: String,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            primary: "#2A9FD6".to_string(),
            success: "#04B575".to_string(),
            warning: "#FFCC00".to_string(),
            error: "#FF0033".to_string(),
            text: "#FFFDF5".to_string(),
            subtle: "#666666".to_string(),
        }
    }
}

/// Log output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// One of error, warn, info, debug, trace
    pub level: String,

    /// Log file; defaults to `phocus.log` in the cache directory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

impl Config {
    /// Check values serde cannot check on its own
    pub fn validate(&self) -> Result<()> {
        if self.hosts.settle_delay_ms > MAX_SETTLE_DELAY_MS {
            return Err(Error::ConfigValidationFailed {
                field: "hosts.settle_delay_ms".to_string(),
                reason: format!("must be at most {} ms", MAX_SETTLE_DELAY_MS),
            });
        }

        if !LOG_LEVELS.contains(&self.logging.level.to_lowercase().as_str()) {
            return Err(Error::ConfigValidationFailed {
                field: "logging.level".to_string(),
                reason: format!(
                    "unknown level '{}', expected one of {}",
                    self.logging.level,
                    LOG_LEVELS.join(", ")
                ),
            });
        }

        if self.ui.title.trim().is_empty() {
            return Err(Error::ConfigValidationFailed {
                field: "ui.title".to_string(),
                reason: "cannot be empty".to_string(),
            });
        }

        Ok(())
    }

    /// Serialize as pretty TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::ConfigSerializationFailed {
            format: "TOML".to_string(),
            reason: e.to_string(),
        })
    }
}
