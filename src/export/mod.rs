//! Report output.
//!
//! Serializes the flattened counting table to a two-column CSV file.

mod csv;

pub use self::csv::{write_report, write_report_to};
