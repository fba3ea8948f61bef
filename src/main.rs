//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `url_hit_counter` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting and exit status
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use url_hit_counter::initialization::init_logger_with;
use url_hit_counter::{run_count, Cli, Config};

fn main() -> Result<()> {
    let config = Config::from(Cli::parse());

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    match run_count(&config) {
        Ok(report) => {
            println!(
                "✅ Counted {} log line{} ({} matched) into {} URL row{} in {:.1}s",
                report.staged_lines,
                if report.staged_lines == 1 { "" } else { "s" },
                report.lines.matched,
                report.rows_written,
                if report.rows_written == 1 { "" } else { "s" },
                report.elapsed_seconds
            );
            println!("Results saved in {}", report.output.display());
            Ok(())
        }
        Err(e) => {
            eprintln!("url_hit_counter error: {:#}", e);
            process::exit(1);
        }
    }
}
