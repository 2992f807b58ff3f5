//! Utility modules
//!
//! Provides logging initialization.

pub mod logging;

pub use logging::{LogLevelHandle, init_logging};
