//! Configuration File Loading
//!
//! Finds and loads configuration files from the platform config directory
//! or an explicit path, in TOML or JSON.

use super::Config;
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory and file stem used under the config directory
const APP_DIR: &str = "phocus";
const FILE_STEM: &str = "config";

/// Configuration file loader
pub struct ConfigLoader {
    /// Search paths for configuration files, without extension
    search_paths: Vec<PathBuf>,
    /// Supported configuration file formats, in preference order
    supported_formats: Vec<ConfigFormat>,
    /// Current configuration file path (if loaded)
    current_path: Option<PathBuf>,
    /// Candidates found during the search that could not be used
    skipped: Vec<SkippedConfig>,
}

/// A configuration file the search passed over
#[derive(Debug)]
pub struct SkippedConfig {
    pub path: PathBuf,
    pub error: Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// TOML format
    Toml,
    /// JSON format
    Json,
}

impl ConfigFormat {
    /// Pick a format from the file extension, defaulting to TOML
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ConfigFormat::Json,
            _ => ConfigFormat::Toml,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ConfigFormat::Toml => "toml",
            ConfigFormat::Json => "json",
        }
    }

    fn name(&self) -> &'static str {
        match self {
            ConfigFormat::Toml => "TOML",
            ConfigFormat::Json => "JSON",
        }
    }
}

impl ConfigLoader {
    /// Create a new configuration loader
    pub fn new() -> Self {
        Self::with_search_paths(Self::get_search_paths())
    }

    /// Create a loader that only looks in the given places
    pub fn with_search_paths(search_paths: Vec<PathBuf>) -> Self {
        Self {
            search_paths,
            supported_formats: vec![ConfigFormat::Toml, ConfigFormat::Json],
            current_path: None,
            skipped: Vec::new(),
        }
    }

    /// Load the first usable configuration from the search paths, falling
    /// back to defaults when there is none.
    ///
    /// Files that exist but cannot be read or parsed are skipped and kept
    /// for the caller to report, see [`take_skipped`](Self::take_skipped).
    /// A file that parses but fails validation is an error.
    pub fn load(&mut self) -> Result<Config> {
        self.skipped.clear();

        match self.find_and_load_config() {
            Some((path, config)) => {
                info!("Configuration loaded from {}", path.display());
                self.current_path = Some(path);
                config.validate()?;
                Ok(config)
            }
            None => {
                debug!("No usable configuration file found, using defaults");
                Ok(Config::default())
            }
        }
    }

    /// Load and validate a configuration file the user named explicitly.
    ///
    /// Unlike the search, a missing or broken file is an error here.
    pub fn load_from_path(&mut self, path: &Path) -> Result<Config> {
        if !path.is_file() {
            return Err(Error::ConfigLoadFailed {
                path: path.to_path_buf(),
                reason: "file not found".to_string(),
            });
        }

        let config = self.load_config_file(path, ConfigFormat::from_path(path))?;
        config.validate()?;
        self.current_path = Some(path.to_path_buf());
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Find and load configuration from search paths
    fn find_and_load_config(&mut self) -> Option<(PathBuf, Config)> {
        for path in &self.search_paths {
            for format in &self.supported_formats {
                let config_path = path.with_extension(format.extension());
                if !config_path.exists() {
                    continue;
                }

                match self.load_config_file(&config_path, *format) {
                    Ok(config) => return Some((config_path, config)),
                    Err(error) => {
                        // Log warning but continue searching
                        warn!("Failed to load config from {}: {}", config_path.display(), error);
                        self.skipped.push(SkippedConfig {
                            path: config_path,
                            error,
                        });
                    }
                }
            }
        }

        None
    }

    /// Load a specific configuration file
    fn load_config_file(&self, path: &Path, format: ConfigFormat) -> Result<Config> {
        let content = fs::read_to_string(path).map_err(|e| Error::ConfigLoadFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let parsed = match format {
            ConfigFormat::Toml => toml::from_str(&content).map_err(|e| e.to_string()),
            ConfigFormat::Json => serde_json::from_str(&content).map_err(|e| e.to_string()),
        };

        parsed.map_err(|reason| Error::ConfigParseFailed {
            format: format.name().to_string(),
            reason,
        })
    }

    /// Get default search paths for configuration files
    fn get_search_paths() -> Vec<PathBuf> {
        use crate::platform::Platform;

        let mut paths = Vec::new();

        // Use platform abstraction for config directory
        if let Ok(config_dir) = Platform::paths().config_dir() {
            paths.push(config_dir.join(APP_DIR).join(FILE_STEM));
        }

        // Home directory fallbacks
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join(APP_DIR).join(FILE_STEM));
            paths.push(home.join(format!(".{}", APP_DIR)).join(FILE_STEM));
        }

        paths.dedup();
        paths
    }

    /// Get the current configuration file path
    pub fn current_path(&self) -> Option<&Path> {
        self.current_path.as_deref()
    }

    /// Hand over the candidates the last search passed over, in search order
    pub fn take_skipped(&mut self) -> Vec<SkippedConfig> {
        std::mem::take(&mut self.skipped)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
