//! Logging system initialization
//!
//! Sets up tracing-based logging with file output to
//! %APPDATA%\DisplayInterop\display-interop.log and rotation on startup keeping
//! the previous nine sessions.

use crate::config::ConfigManager;
use crate::error::{DisplayInteropError, Result, StringError};
use std::path::{Path, PathBuf};
use tracing::{Subscriber, info, warn};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::{self, MakeWriter};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, reload};

/// Maximum number of historical log files to keep (display-interop.log.1 through .9)
const MAX_LOG_FILES: u8 = 9;

const LOG_PREFIX: &str = "display-interop";
const LOG_SUFFIX: &str = "log";

/// Level used until the configured one is applied
const DEFAULT_LEVEL: &str = "info";

/// Path of the current session's log file
pub fn log_file_path() -> PathBuf {
    ConfigManager::get_app_dir().join(format!("{LOG_PREFIX}.{LOG_SUFFIX}"))
}

/// Handle to the installed filter, returned by [`init_logging`]
pub struct LogLevelHandle {
    handle: reload::Handle<EnvFilter, Registry>,
    env_override: bool,
}

impl LogLevelHandle {
    /// Replace the active filter with `level`
    ///
    /// `level` is an `EnvFilter` directive such as `info` or `display_interop=debug`.
    /// Does nothing when `RUST_LOG` is set. An invalid `level` falls back to `info`.
    pub fn set_level(&self, level: &str) -> Result<()> {
        if self.env_override {
            return Ok(());
        }

        let filter = EnvFilter::try_new(level).unwrap_or_else(|e| {
            warn!("Invalid log level {level:?}, using {DEFAULT_LEVEL}: {e}");
            EnvFilter::new(DEFAULT_LEVEL)
        });
        self.handle
            .reload(filter)
            .map_err(|e| DisplayInteropError::ConfigError(Box::new(e)))?;

        info!("Log level set to {level}");
        Ok(())
    }
}

/// Initialize the logging system
///
/// Logs at `info` (or `RUST_LOG` when set) until [`LogLevelHandle::set_level`]
/// applies the configured level, so messages from loading the configuration
/// are already written.
pub fn init_logging() -> Result<LogLevelHandle> {
    let log_path = log_file_path();
    let log_dir = log_path
        .parent()
        .ok_or_else(|| DisplayInteropError::ConfigError(StringError::new("Invalid log path")))?;
    std::fs::create_dir_all(log_dir)?;

    rotate_logs_on_startup(&log_path)?;

    // tracing_appender has no startup-based rotation, so rotation is done above
    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(LOG_PREFIX)
        .filename_suffix(LOG_SUFFIX)
        .build(log_dir)
        .map_err(|e| DisplayInteropError::ConfigError(Box::new(e)))?;

    let (subscriber, handle) = file_subscriber(file_appender, EnvFilter::try_from_default_env().ok());

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| DisplayInteropError::ConfigError(Box::new(e)))?;

    info!("display-interop v{} started", env!("CARGO_PKG_VERSION"));

    Ok(handle)
}

/// Build the subscriber writing to `writer`, filtered by `env_filter` or
/// [`DEFAULT_LEVEL`]
fn file_subscriber<W>(
    writer: W,
    env_filter: Option<EnvFilter>,
) -> (impl Subscriber + Send + Sync + 'static, LogLevelHandle)
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let env_override = env_filter.is_some();
    let (filter, handle) =
        reload::Layer::new(env_filter.unwrap_or_else(|| EnvFilter::new(DEFAULT_LEVEL)));

    let subscriber = tracing_subscriber::registry().with(filter).with(
        fmt::layer()
            .with_writer(writer)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true),
    );

    (
        subscriber,
        LogLevelHandle {
            handle,
            env_override,
        },
    )
}

/// Rotate log files on startup
///
/// - `<log>.9` is deleted
/// - `<log>.8` through `<log>.1` move up by one
/// - `<log>` becomes `<log>.1`
///
/// A fresh log is then created by the appender. Missing files in the chain are skipped.
fn rotate_logs_on_startup(log_path: &Path) -> Result<()> {
    if !log_path.exists() {
        return Ok(());
    }

    let log_dir = log_path
        .parent()
        .ok_or_else(|| DisplayInteropError::ConfigError(StringError::new("Invalid log path")))?;

    let log_name = log_path
        .file_name()
        .ok_or_else(|| DisplayInteropError::ConfigError(StringError::new("Invalid log filename")))?
        .to_string_lossy();

    let oldest_log = log_dir.join(format!("{log_name}.{MAX_LOG_FILES}"));
    if oldest_log.exists() {
        std::fs::remove_file(&oldest_log)?;
    }

    for i in (1..MAX_LOG_FILES).rev() {
        let current_log = log_dir.join(format!("{log_name}.{i}"));
        if current_log.exists() {
            std::fs::rename(&current_log, log_dir.join(format!("{log_name}.{}", i + 1)))?;
        }
    }

    std::fs::rename(log_path, log_dir.join(format!("{log_name}.1")))?;

    Ok(())
}
