//! Error type definitions.
//!
//! Resource and allocation failures are typed here; per-line data problems are
//! not errors at all and are only counted (see [`LineOutcome`]).

use std::collections::TryReserveError;

use log::SetLoggerError;
use rayon::ThreadPoolBuildError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error building the counting worker pool.
    #[error("Worker pool initialization error: {0}")]
    WorkerPoolError(#[from] ThreadPoolBuildError),
}

/// Error types for counting table construction and population.
#[derive(Error, Debug)]
pub enum TableError {
    /// The table was asked for zero buckets.
    #[error("Table must have at least one bucket")]
    ZeroBuckets,

    /// Memory for buckets or entries could not be reserved.
    #[error("Failed to allocate {what}: {source}")]
    Allocation {
        /// What was being allocated.
        what: &'static str,
        /// Underlying reservation failure.
        #[source]
        source: TryReserveError,
    },
}

/// What happened to a single staged log line during counting.
///
/// None of these are failures: malformed lines and URLs outside the manifest
/// are expected and frequent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum LineOutcome {
    /// No `"GET <target> HTTP/` request could be extracted.
    NoUrl,
    /// A target was extracted but is not in the manifest.
    Unknown,
    /// The target matched a manifest entry and was counted.
    Matched,
}

impl std::fmt::Display for LineOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl LineOutcome {
    /// Human-readable label used in run statistics.
    pub fn as_str(&self) -> &'static str {
        match self {
            LineOutcome::NoUrl => "No GET request target",
            LineOutcome::Unknown => "Target not in manifest",
            LineOutcome::Matched => "Counted",
        }
    }
}
