//! Load and stage phases: reading the manifest into the table and the log
//! into memory.

use anyhow::{Context, Result};
use std::io::BufRead;

use crate::config::INITIAL_STAGED_LINES;
use crate::error_handling::TableError;
use crate::table::CountingTable;

/// What manifest loading did with each line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ManifestLoad {
    /// Lines read
    pub lines: usize,
    /// New entries created
    pub inserted: usize,
    /// Lines whose URL was already in the table
    pub duplicates: usize,
    /// Empty lines skipped (only with `skip_blank`)
    pub blank_skipped: usize,
}

/// Strips every trailing `\r` and `\n`.
pub fn trim_line_end(line: &[u8]) -> &[u8] {
    let end = line
        .iter()
        .rposition(|&b| b != b'\n' && b != b'\r')
        .map_or(0, |i| i + 1);
    &line[..end]
}

/// Calls `f` with each line of `reader`, terminator removed.
///
/// Lines are raw bytes; no UTF-8 validation is done.
pub fn for_each_line<R, F>(mut reader: R, mut f: F) -> Result<()>
where
    R: BufRead,
    F: FnMut(&[u8]) -> Result<()>,
{
    let mut buf = Vec::new();
    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .context("Failed to read line")?;
        if read == 0 {
            return Ok(());
        }
        f(trim_line_end(&buf))?;
    }
}

/// Inserts each manifest URL into `table`.
///
/// Duplicates collapse silently. Empty lines become the empty URL unless
/// `skip_blank` is set.
///
/// # Errors
///
/// Fails on a read error or if an entry cannot be allocated.
pub fn load_manifest<R: BufRead>(
    reader: R,
    table: &mut CountingTable,
    skip_blank: bool,
) -> Result<ManifestLoad> {
    let mut load = ManifestLoad::default();
    for_each_line(reader, |url| {
        load.lines += 1;
        if skip_blank && url.is_empty() {
            load.blank_skipped += 1;
            return Ok(());
        }
        if table.insert(url).context("Failed to insert manifest URL")? {
            load.inserted += 1;
        } else {
            load.duplicates += 1;
        }
        Ok(())
    })?;
    Ok(load)
}

/// Builds a table from an in-memory URL sequence.
///
/// # Errors
///
/// See [`CountingTable::new`] and [`CountingTable::insert`].
pub fn build_table<I>(
    urls: I,
    bucket_count: usize,
    skip_blank: bool,
) -> Result<CountingTable, TableError>
where
    I: IntoIterator,
    I::Item: AsRef<[u8]>,
{
    let mut table = CountingTable::new(bucket_count)?;
    for url in urls {
        let url = url.as_ref();
        if skip_blank && url.is_empty() {
            continue;
        }
        table.insert(url)?;
    }
    Ok(table)
}

/// Reads every log line into memory, in order.
///
/// The buffer starts at [`INITIAL_STAGED_LINES`] and doubles when full.
///
/// # Errors
///
/// Fails on a read error or if the buffer cannot grow.
pub fn stage_lines<R: BufRead>(reader: R) -> Result<Vec<Vec<u8>>> {
    let mut lines: Vec<Vec<u8>> = Vec::new();
    for_each_line(reader, |line| {
        if lines.len() == lines.capacity() {
            let additional = lines.capacity().max(INITIAL_STAGED_LINES);
            lines
                .try_reserve_exact(additional)
                .context("Failed to grow staged line buffer")?;
        }
        let mut stored = Vec::new();
        stored
            .try_reserve_exact(line.len())
            .context("Failed to allocate staged line")?;
        stored.extend_from_slice(line);
        lines.push(stored);
        Ok(())
    })?;
    Ok(lines)
}
