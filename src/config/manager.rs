//! Configuration manager for loading and saving configuration
//!
//! This module provides functionality to load and save configuration to
//! %APPDATA%\DisplayInterop\config.json with atomic writes to prevent corruption.

use crate::config::models::AppConfig;
use crate::error::{DisplayInteropError, Result, StringError};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Configuration manager
pub struct ConfigManager;

impl ConfigManager {
    /// Get the directory holding the configuration and log files
    ///
    /// Returns: %APPDATA%\DisplayInterop
    pub fn get_app_dir() -> PathBuf {
        let appdata = std::env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(appdata).join("DisplayInterop")
    }

    /// Get the path to the configuration file
    ///
    /// Returns: %APPDATA%\DisplayInterop\config.json
    pub fn get_config_path() -> PathBuf {
        Self::get_app_dir().join("config.json")
    }

    /// Load configuration from the default location
    pub fn load() -> Result<AppConfig> {
        Self::load_from(&Self::get_config_path())
    }

    /// Load configuration from `config_path`
    ///
    /// If the file doesn't exist or is corrupt, returns the default configuration.
    pub fn load_from(config_path: &Path) -> Result<AppConfig> {
        if !config_path.exists() {
            info!("Configuration file not found, using defaults");
            return Ok(AppConfig::default());
        }

        let json = std::fs::read_to_string(config_path)?;

        match serde_json::from_str(&json) {
            Ok(config) => {
                info!("Configuration loaded from {}", config_path.display());
                Ok(config)
            }
            Err(e) => {
                warn!("Failed to parse configuration, using defaults: {e}");
                Ok(AppConfig::default())
            }
        }
    }

    /// Save configuration to the default location
    pub fn save(config: &AppConfig) -> Result<()> {
        Self::save_to(config, &Self::get_config_path())
    }

    /// Save configuration to `config_path` with an atomic write
    ///
    /// Writes a temporary file next to the target, then renames it over the target.
    pub fn save_to(config: &AppConfig, config_path: &Path) -> Result<()> {
        let config_dir = config_path.parent().ok_or_else(|| {
            DisplayInteropError::ConfigError(StringError::new("Invalid config path"))
        })?;
        std::fs::create_dir_all(config_dir)?;

        let temp_path = config_path.with_extension("json.tmp");
        let json = serde_json::to_string_pretty(config)?;
        std::fs::write(&temp_path, json)?;
        std::fs::rename(&temp_path, config_path)?;

        info!("Configuration saved to {}", config_path.display());
        Ok(())
    }
}
