//! Error types for `display-interop`
//!
//! This module defines the crate error type. Every failing OS call is surfaced
//! here with the name of the call and the exact code the OS returned, so callers
//! can branch on it. Nothing is retried or suppressed.
//!
//! Error variants use `#[source]` to preserve error chains for better
//! observability and debugging.

use crate::display::errors::{DisplayChangeResult, Win32Error};
use thiserror::Error;

/// Simple error type for wrapping string messages while implementing `std::error::Error`
#[derive(Debug, Error)]
#[error("{0}")]
pub struct StringError(pub String);

impl StringError {
    /// Create a new `StringError` from a string message
    pub fn new(msg: impl Into<String>) -> Box<Self> {
        Box::new(Self(msg.into()))
    }
}

/// Main error type for `display-interop`
#[derive(Debug, Error)]
pub enum DisplayInteropError {
    /// A display configuration call returned a non-zero Win32 status
    #[error("{call} failed with {}", describe_win32(.code))]
    Win32 {
        /// Name of the failing function
        call: &'static str,
        /// Raw status returned by the OS
        code: i32,
    },

    /// A legacy display settings call returned a failing `DISP_CHANGE_*` code
    #[error("{call} failed with {result}")]
    DisplayChange {
        /// Name of the failing function
        call: &'static str,
        /// Result code returned by the OS
        result: DisplayChangeResult,
    },

    /// A legacy display settings call returned a code outside the documented set
    #[error("{call} returned undocumented result code {code}")]
    UnknownDisplayChange {
        /// Name of the failing function
        call: &'static str,
        /// Raw result returned by the OS
        code: i32,
    },

    /// A call that reports success as a boolean returned `FALSE`
    #[error("{call} reported failure")]
    CallFailed {
        /// Name of the failing function
        call: &'static str,
    },

    /// Text does not fit in a fixed-capacity buffer
    #[error("Text of {len} code units does not fit in a buffer of {capacity}")]
    TextTooLong {
        /// Length of the rejected text in UTF-16 code units
        len: usize,
        /// Buffer capacity including the terminating NUL
        capacity: usize,
    },

    /// A mode record carried a kind tag this crate does not know
    #[error("Unknown display mode info type {0}")]
    UnknownModeInfoType(u32),

    /// Query flags that need a different entry point
    #[error("Unsupported query flags {0:#x}")]
    UnsupportedQueryFlags(u32),

    /// Configuration error
    /// Preserves the underlying error source for full error chain transparency
    #[error("Configuration error: {0}")]
    ConfigError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl DisplayInteropError {
    /// Raw Win32 status carried by a [`DisplayInteropError::Win32`] error
    pub fn win32_code(&self) -> Option<i32> {
        match self {
            Self::Win32 { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Whether the OS reported `ERROR_INSUFFICIENT_BUFFER`
    ///
    /// For `QueryDisplayConfig` this means the topology changed after size
    /// discovery; the caller decides whether to discover sizes again.
    pub fn is_insufficient_buffer(&self) -> bool {
        self.win32_code() == Some(Win32Error::InsufficientBuffer as i32)
    }
}

#[expect(
    clippy::trivially_copy_pass_by_ref,
    reason = "thiserror passes field references to format helpers"
)]
fn describe_win32(code: &i32) -> String {
    match Win32Error::try_from(*code) {
        Ok(known) => format!("{} ({code})", known.name()),
        Err(_) => format!("Win32 error {code}"),
    }
}

/// Result type alias for `display-interop` operations
pub type Result<T> = std::result::Result<T, DisplayInteropError>;

/// Map a display configuration status to a `Result`
///
/// `ERROR_SUCCESS` maps to `Ok`, every other value becomes
/// [`DisplayInteropError::Win32`] tagged with `call`.
pub fn check_status(call: &'static str, status: i32) -> Result<()> {
    if status == Win32Error::Success as i32 {
        Ok(())
    } else {
        Err(DisplayInteropError::Win32 { call, code: status })
    }
}

/// Map a `DISP_CHANGE_*` code to a `Result`
///
/// `DISP_CHANGE_SUCCESSFUL` and `DISP_CHANGE_RESTART` are returned as `Ok` so
/// the caller can see that a restart is needed. Negative codes become
/// [`DisplayInteropError::DisplayChange`], undocumented ones
/// [`DisplayInteropError::UnknownDisplayChange`].
pub fn check_display_change(call: &'static str, code: i32) -> Result<DisplayChangeResult> {
    match DisplayChangeResult::try_from(code) {
        Ok(result) if result.is_success() => Ok(result),
        Ok(result) => Err(DisplayInteropError::DisplayChange { call, result }),
        Err(code) => Err(DisplayInteropError::UnknownDisplayChange { call, code }),
    }
}

/// Convert an error to a user-friendly message
///
/// This function takes a `DisplayInteropError` and returns a message suitable
/// for printing from the command line tool.
pub fn get_user_friendly_error(error: &DisplayInteropError) -> String {
    match error {
        DisplayInteropError::Win32 { call, code } => match Win32Error::try_from(*code) {
            Ok(Win32Error::AccessDenied) => format!(
                "{call} was denied access.\n\n\
                 Display configuration cannot be changed from a locked or \
                 remote session without the required privileges."
            ),
            Ok(Win32Error::NotSupported) => format!(
                "{call} is not supported here.\n\n\
                 The display driver may not be WDDM based, or this is not Windows."
            ),
            Ok(Win32Error::InsufficientBuffer) => format!(
                "{call} needed larger buffers.\n\n\
                 The display topology changed while it was being read. Try again."
            ),
            Ok(Win32Error::BadConfiguration) => format!(
                "{call} could not find a matching persisted configuration.\n\n\
                 Apply a topology first so that it is saved to the database."
            ),
            _ => format!("{call} failed: {}", describe_win32(code)),
        },
        DisplayInteropError::DisplayChange { call, result } => {
            format!(
                "{call} did not change the display settings: {result}\n\n\
                 Check that the requested mode is listed by the `modes` command."
            )
        }
        DisplayInteropError::UnknownDisplayChange { call, code } => {
            format!("{call} returned an undocumented result ({code}).")
        }
        DisplayInteropError::CallFailed { call } => {
            format!("{call} failed.\n\nThe device name may be wrong or the device was removed.")
        }
        DisplayInteropError::TextTooLong { len, capacity } => format!(
            "A name of {len} characters is too long; at most {} are allowed.",
            capacity.saturating_sub(1)
        ),
        DisplayInteropError::UnknownModeInfoType(tag) => format!(
            "The display driver returned a mode record of unknown kind {tag}.\n\n\
             This tool may be older than your version of Windows."
        ),
        DisplayInteropError::UnsupportedQueryFlags(flags) => {
            format!("Query flags {flags:#x} are not valid for this request.")
        }
        DisplayInteropError::ConfigError(_) => "Failed to load or save configuration.\n\n\
             Your settings may not persist.\n\
             Check that you have write permissions to:\n\
             %APPDATA%\\DisplayInterop"
            .to_string(),
        DisplayInteropError::IoError(e) => {
            format!(
                "A file system error occurred:\n\n{e}\n\n\
                 Please check file permissions and disk space."
            )
        }
        DisplayInteropError::JsonError(e) => {
            format!(
                "Configuration file is corrupted:\n\n{e}\n\n\
                 The tool will use default settings."
            )
        }
    }
}
