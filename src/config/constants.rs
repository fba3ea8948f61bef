//! Configuration constants.
//!
//! Defaults for the counting table, staging buffer and report sink.

/// Default number of hash buckets, sized for manifests of around 100k URLs.
pub const DEFAULT_BUCKET_COUNT: usize = 100_000;

/// Default report file, written in the working directory.
pub const DEFAULT_OUTPUT_PATH: &str = "results.csv";

/// First reservation for the staged log line buffer; it doubles from there.
pub const INITIAL_STAGED_LINES: usize = 100_000;
