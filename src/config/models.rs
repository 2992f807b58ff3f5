//! Configuration data models
//!
//! This module defines the data structures used for the command line tool's configuration.

use serde::{Deserialize, Serialize};

/// Which paths a topology query returns by default
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryScope {
    /// `QDC_ALL_PATHS`
    All,
    /// `QDC_ONLY_ACTIVE_PATHS`
    #[default]
    Active,
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default tracing level when `RUST_LOG` is not set
    pub log_level: String,
    /// Topology query preferences
    pub query: QueryPreferences,
    /// Output preferences
    pub output: OutputPreferences,
}

/// Topology query preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryPreferences {
    /// Paths to return when no scope flag is given
    pub scope: QueryScope,
    /// Whether to resolve source, monitor and adapter names
    pub resolve_names: bool,
}

/// Output preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputPreferences {
    /// Indent JSON output
    pub pretty_json: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            query: QueryPreferences::default(),
            output: OutputPreferences::default(),
        }
    }
}

impl Default for QueryPreferences {
    fn default() -> Self {
        Self {
            scope: QueryScope::Active,
            resolve_names: true,
        }
    }
}

impl Default for OutputPreferences {
    fn default() -> Self {
        Self { pretty_json: true }
    }
}
