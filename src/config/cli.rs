//! Command-line interface.
//!
//! The two subcommands mirror the two ways of running a count:
//!
//! ```bash
//! url_hit_counter sequential manifest.txt access_log.txt
//! url_hit_counter parallel manifest.txt access_log.txt 8 --output hits.csv
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::constants::{DEFAULT_BUCKET_COUNT, DEFAULT_OUTPUT_PATH};
use crate::config::types::{Config, CountMode, CounterStrategy, LogFormat, LogLevel};

/// Top-level command line.
#[derive(Debug, Parser)]
#[command(
    name = "url_hit_counter",
    version,
    about = "Counts GET hits per manifest URL in a web server access log."
)]
pub struct Cli {
    /// Counting mode
    #[command(subcommand)]
    pub command: Command,
}

/// Counting mode subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Count on a single thread
    #[command(name = "sequential")]
    Sequential(SequentialArgs),
    /// Count with a pool of worker threads
    #[command(name = "parallel")]
    Parallel(ParallelArgs),
}

/// Arguments of `sequential`.
#[derive(Debug, Args)]
pub struct SequentialArgs {
    /// Manifest file, one URL per line
    #[arg(value_parser)]
    pub manifest: PathBuf,

    /// Access log file
    #[arg(value_parser)]
    pub log: PathBuf,

    /// Options shared by both modes
    #[command(flatten)]
    pub common: CommonArgs,
}

/// Arguments of `parallel`.
#[derive(Debug, Args)]
pub struct ParallelArgs {
    /// Manifest file, one URL per line
    #[arg(value_parser)]
    pub manifest: PathBuf,

    /// Access log file
    #[arg(value_parser)]
    pub log: PathBuf,

    /// Number of worker threads
    #[arg(value_parser = clap::value_parser!(usize))]
    pub threads: usize,

    /// Hit recording strategy: atomic|sharded
    #[arg(long, value_enum, default_value_t = CounterStrategy::Atomic)]
    pub strategy: CounterStrategy,

    /// Options shared by both modes
    #[command(flatten)]
    pub common: CommonArgs,
}

/// Options shared by both modes.
#[derive(Debug, Args)]
pub struct CommonArgs {
    /// Report file (overwritten)
    #[arg(long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Number of hash buckets in the counting table
    #[arg(long, default_value_t = DEFAULT_BUCKET_COUNT)]
    pub bucket_count: usize,

    /// Skip empty manifest lines instead of tracking the empty URL
    #[arg(long)]
    pub skip_blank_urls: bool,

    /// Print every bucket chain to stderr after counting
    #[arg(long)]
    pub dump_table: bool,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        let (manifest, log, mode, strategy, common) = match cli.command {
            Command::Sequential(args) => (
                args.manifest,
                args.log,
                CountMode::Sequential,
                CounterStrategy::default(),
                args.common,
            ),
            Command::Parallel(args) => (
                args.manifest,
                args.log,
                CountMode::Parallel {
                    threads: args.threads,
                },
                args.strategy,
                args.common,
            ),
        };
        Config {
            manifest,
            log,
            output: common.output,
            mode,
            strategy,
            bucket_count: common.bucket_count,
            skip_blank_urls: common.skip_blank_urls,
            dump_table: common.dump_table,
            log_level: common.log_level,
            log_format: common.log_format,
        }
    }
}
