//! CSV report output.
//!
//! One `url,hit_count` record per manifest URL, no header row, `\n`
//! terminated, in the order given (callers pass the sorted flatten).

use anyhow::{Context, Result};
use csv::{Terminator, WriterBuilder};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::table::UrlCount;

/// Writes the report to `path`, replacing any existing content.
///
/// Returns the number of records written.
///
/// # Errors
///
/// Fails if the file cannot be created or a write fails.
pub fn write_report(path: &Path, rows: &[UrlCount<'_>]) -> Result<usize> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create report file: {}", path.display()))?;
    write_report_to(BufWriter::new(file), rows)
        .with_context(|| format!("Failed to write report file: {}", path.display()))
}

/// Writes the report records to any sink.
///
/// URLs are written byte for byte. A URL containing a comma, quote or line
/// break is quoted so the file stays two columns wide.
///
/// # Errors
///
/// Fails if a write or the final flush fails.
pub fn write_report_to<W: Write>(sink: W, rows: &[UrlCount<'_>]) -> Result<usize> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(sink);

    for row in rows {
        let hits = row.hits.to_string();
        writer.write_record([row.url, hits.as_bytes()])?;
    }
    writer.flush()?;

    Ok(rows.len())
}
