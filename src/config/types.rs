//! Configuration types.
//!
//! This module defines the library configuration and the enums shared with the
//! command-line interface.

use std::path::PathBuf;

use clap::ValueEnum;
use thiserror::Error;

use crate::config::constants::{DEFAULT_BUCKET_COUNT, DEFAULT_OUTPUT_PATH};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// How parallel workers record hits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum CounterStrategy {
    /// One atomic add on the shared entry per hit
    #[default]
    Atomic,
    /// Private per-worker tallies, summed into the table after the join
    Sharded,
}

/// Whether the count phase runs on the calling thread or a worker pool.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CountMode {
    /// Count on the calling thread
    #[default]
    Sequential,
    /// Partition staged lines across a pool of `threads` workers
    Parallel {
        /// Worker count, at least 1
        threads: usize,
    },
}

/// A configuration value that cannot be used.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid value for `{field}`: {message}")]
pub struct ConfigValidationError {
    /// Offending field name
    pub field: &'static str,
    /// What is wrong with it
    pub message: String,
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```no_run
/// use url_hit_counter::{Config, CountMode};
/// use std::path::PathBuf;
///
/// let config = Config {
///     manifest: PathBuf::from("manifest.txt"),
///     log: PathBuf::from("access.log"),
///     mode: CountMode::Parallel { threads: 8 },
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Manifest file, one URL per line
    pub manifest: PathBuf,

    /// Access log file
    pub log: PathBuf,

    /// Report file (overwritten)
    pub output: PathBuf,

    /// Sequential or parallel counting
    pub mode: CountMode,

    /// Hit recording strategy for parallel mode
    pub strategy: CounterStrategy,

    /// Number of hash buckets
    pub bucket_count: usize,

    /// Skip empty manifest lines instead of inserting the empty URL
    pub skip_blank_urls: bool,

    /// Print every bucket chain to stderr after counting
    pub dump_table: bool,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            manifest: PathBuf::from("manifest.txt"),
            log: PathBuf::from("access_log.txt"),
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
            mode: CountMode::Sequential,
            strategy: CounterStrategy::Atomic,
            bucket_count: DEFAULT_BUCKET_COUNT,
            skip_blank_urls: false,
            dump_table: false,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

impl Config {
    /// Checks values that would otherwise fail deep inside a run.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field found.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.bucket_count == 0 {
            return Err(ConfigValidationError {
                field: "bucket_count",
                message: "must be greater than 0".to_string(),
            });
        }
        if let CountMode::Parallel { threads: 0 } = self.mode {
            return Err(ConfigValidationError {
                field: "threads",
                message: "must be greater than 0 in parallel mode".to_string(),
            });
        }
        if self.output.as_os_str().is_empty() {
            return Err(ConfigValidationError {
                field: "output",
                message: "must name a file".to_string(),
            });
        }
        Ok(())
    }
}
