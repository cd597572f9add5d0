//! Shared utilities for Tide.

pub mod logging;

pub use logging::{init_logging, LogFormat, UnknownLogFormat};
