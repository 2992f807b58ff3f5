//! Configuration management module
//!
//! This module handles loading and saving the command line tool's configuration.
//! Configuration is stored in %APPDATA%\DisplayInterop\config.json with atomic writes
//! to prevent corruption.

pub mod manager;
pub mod models;

pub use manager::ConfigManager;
pub use models::{AppConfig, OutputPreferences, QueryPreferences, QueryScope};
