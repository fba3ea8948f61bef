//! Error handling and processing statistics.
//!
//! This module provides:
//! - Error type definitions for initialization and table allocation
//! - Line outcome categorization and per-partition outcome tallies
//!
//! Only resource and allocation problems are errors. A log line that carries
//! no GET target, or targets a URL outside the manifest, is an outcome that
//! gets counted and skipped.

mod stats;
mod types;

// Re-export public API
pub use stats::LineTally;
pub use types::{InitializationError, LineOutcome, TableError};
