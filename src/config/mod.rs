//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (table size, output path, buffer sizing)
//! - The library `Config` and its validation
//! - CLI option types and parsing

mod cli;
mod constants;
mod types;

// Re-export public API
pub use cli::{Cli, Command, CommonArgs, ParallelArgs, SequentialArgs};
pub use constants::*;
pub use types::{Config, ConfigValidationError, CountMode, CounterStrategy, LogFormat, LogLevel};
