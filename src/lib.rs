//! `display-interop` - Typed bindings for the Windows display configuration APIs
//!
//! Exposes the User32 display configuration family (`QueryDisplayConfig`,
//! `SetDisplayConfig`, `DisplayConfigGetDeviceInfo`, `DisplayConfigSetDeviceInfo`)
//! and the legacy display settings family (`EnumDisplayDevicesW`,
//! `EnumDisplaySettings[Ex]W`, `ChangeDisplaySettings[Ex]W`) with record layouts
//! that match the Windows SDK byte for byte.
//!
//! # Layout
//!
//! - [`display`]: records, constants, the [`display::DisplayApi`] seam and the
//!   [`display::DisplayInterop`] facade
//! - [`config`]: persisted preferences of the command line tool
//! - [`error`]: the crate error type carrying the exact OS status codes
//! - [`utils`]: logging setup
//!
//! # Requirements
//!
//! - Windows 7 or later for the display configuration family
//! - Windows 10 1709+ for advanced color and SDR white level queries,
//!   Windows 11 24H2 for `GET_ADVANCED_COLOR_INFO_2` and `SET_HDR_STATE`
//!
//! On other platforms the crate builds and every OS call reports failure.

pub mod config;
pub mod display;
pub mod error;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export commonly used types
pub use error::{DisplayInteropError, Result};
