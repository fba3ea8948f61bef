//! Run reporting helpers used by the batch runner.

pub mod statistics;

// Re-export public API
pub use statistics::{print_line_statistics, print_load_statistics};
