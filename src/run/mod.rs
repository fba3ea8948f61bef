//! Batch runner.
//!
//! A run goes through four phases in strict order, never overlapping:
//!
//! 1. **Load**: manifest lines are inserted into a fresh [`CountingTable`]
//!    on the calling thread.
//! 2. **Stage**: the whole log is read into memory so that counting works
//!    from a random-access slice instead of contending for the file.
//! 3. **Count**: each staged line is resolved and counted, either on the
//!    calling thread or split into contiguous partitions over a worker pool.
//!    The phase ends when every worker has joined.
//! 4. **Report**: the table is flattened, sorted by URL, and written out.

mod count;
mod load;

use anyhow::{Context, Result};
use log::info;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::time::Instant;

use crate::app::{print_line_statistics, print_load_statistics};
use crate::config::{Config, CountMode, CounterStrategy};
use crate::error_handling::LineTally;
use crate::export::write_report;
use crate::initialization::init_worker_pool;
use crate::table::CountingTable;

pub use count::{count_parallel, count_sequential, partition_len, resolve_line};
pub use load::{
    build_table, for_each_line, load_manifest, stage_lines, trim_line_end, ManifestLoad,
};

/// Results of a counting run.
#[derive(Debug, Clone)]
pub struct CountReport {
    /// Distinct URLs tracked (one report row each)
    pub manifest_entries: usize,
    /// Log lines staged and counted
    pub staged_lines: usize,
    /// Per-outcome line counts
    pub lines: LineTally,
    /// Rows written to the report
    pub rows_written: usize,
    /// Where the report was written
    pub output: PathBuf,
    /// Elapsed time in seconds
    pub elapsed_seconds: f64,
}

/// Runs the count phase over already-staged lines.
///
/// Builds a worker pool of the requested size in parallel mode. Sequential
/// mode ignores `strategy`.
///
/// # Errors
///
/// Fails only if the worker pool cannot be created.
pub fn count_lines<L>(
    table: &CountingTable,
    lines: &[L],
    mode: CountMode,
    strategy: CounterStrategy,
) -> Result<LineTally>
where
    L: AsRef<[u8]> + Sync,
{
    let tally = match mode {
        CountMode::Sequential => count_sequential(table, lines),
        CountMode::Parallel { threads } => {
            let pool = init_worker_pool(threads).context("Failed to initialize worker pool")?;
            count_parallel(table, lines, &pool, strategy)
        }
    };
    Ok(tally)
}

/// Runs a full count with the provided configuration.
///
/// Reads the manifest and log named in `config`, counts GET hits per manifest
/// URL, and writes the sorted `url,hit_count` report to `config.output`.
///
/// # Errors
///
/// This function will return an error if:
/// - The configuration is invalid
/// - The manifest or log cannot be opened or read
/// - Memory for the table or the staged lines cannot be allocated
/// - The worker pool cannot be created
/// - The report cannot be written
///
/// # Example
///
/// ```no_run
/// use url_hit_counter::{run_count, Config, CountMode};
/// use std::path::PathBuf;
///
/// # fn example() -> anyhow::Result<()> {
/// let config = Config {
///     manifest: PathBuf::from("manifest.txt"),
///     log: PathBuf::from("access_log.txt"),
///     mode: CountMode::Parallel { threads: 4 },
///     ..Default::default()
/// };
/// let report = run_count(&config)?;
/// println!("{} rows written", report.rows_written);
/// # Ok(())
/// # }
/// ```
pub fn run_count(config: &Config) -> Result<CountReport> {
    config.validate().context("Invalid configuration")?;
    let start_time = Instant::now();

    // Load
    let mut table =
        CountingTable::new(config.bucket_count).context("Failed to create counting table")?;
    let manifest = File::open(&config.manifest).with_context(|| {
        format!("Failed to open manifest file: {}", config.manifest.display())
    })?;
    let load = load_manifest(BufReader::new(manifest), &mut table, config.skip_blank_urls)
        .with_context(|| format!("Failed to load manifest: {}", config.manifest.display()))?;
    print_load_statistics(&load, &table.occupancy());

    // Stage
    let phase_start = Instant::now();
    let log_file = File::open(&config.log)
        .with_context(|| format!("Failed to open log file: {}", config.log.display()))?;
    let lines = stage_lines(BufReader::new(log_file))
        .with_context(|| format!("Failed to stage log file: {}", config.log.display()))?;
    info!(
        "Staged {} log lines in {:.2}s",
        lines.len(),
        phase_start.elapsed().as_secs_f64()
    );

    // Count
    let phase_start = Instant::now();
    let tally = count_lines(&table, &lines, config.mode, config.strategy)?;
    let staged_lines = lines.len();
    drop(lines);
    info!(
        "Counted {} lines ({:?}) in {:.2}s",
        staged_lines,
        config.mode,
        phase_start.elapsed().as_secs_f64()
    );
    print_line_statistics(&tally);

    if config.dump_table {
        table
            .dump(&mut io::stderr().lock())
            .context("Failed to dump counting table")?;
    }

    // Report
    let rows = table.flatten_sorted();
    let rows_written = write_report(&config.output, &rows)?;
    info!("Wrote {rows_written} rows to {}", config.output.display());

    Ok(CountReport {
        manifest_entries: table.len(),
        staged_lines,
        lines: tally,
        rows_written,
        output: config.output.clone(),
        elapsed_seconds: start_time.elapsed().as_secs_f64(),
    })
}
