// Shared test helpers for writing input files and running counts.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::path::{Path, PathBuf};

use tempfile::TempDir;
use url_hit_counter::{run_count, Config, CountMode, CountReport, CounterStrategy};

/// Input and output files for one run, kept alive by the owned temp dir.
pub struct RunFiles {
    #[allow(dead_code)] // Holds the files until the test ends
    pub dir: TempDir,
    pub manifest: PathBuf,
    pub log: PathBuf,
    pub output: PathBuf,
}

/// Writes a manifest and a log into a fresh temp dir.
pub fn write_inputs(manifest: &str, log: &str) -> RunFiles {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let manifest_path = dir.path().join("manifest.txt");
    let log_path = dir.path().join("access_log.txt");
    std::fs::write(&manifest_path, manifest).expect("Failed to write manifest");
    std::fs::write(&log_path, log).expect("Failed to write log");
    let output = dir.path().join("results.csv");
    RunFiles {
        dir,
        manifest: manifest_path,
        log: log_path,
        output,
    }
}

/// Config pointing at `files` with the given mode and strategy.
#[allow(dead_code)] // Used by other test files
pub fn config_for(files: &RunFiles, mode: CountMode, strategy: CounterStrategy) -> Config {
    Config {
        manifest: files.manifest.clone(),
        log: files.log.clone(),
        output: files.output.clone(),
        mode,
        strategy,
        bucket_count: 1024,
        ..Default::default()
    }
}

/// Runs a count and returns the report plus the output file contents.
#[allow(dead_code)] // Used by other test files
pub fn run_and_read(
    files: &RunFiles,
    mode: CountMode,
    strategy: CounterStrategy,
) -> (CountReport, String) {
    let report = run_count(&config_for(files, mode, strategy)).expect("Run should succeed");
    let output = read_output(&files.output);
    (report, output)
}

/// Reads a report file.
#[allow(dead_code)] // Used by other test files
pub fn read_output(path: &Path) -> String {
    std::fs::read_to_string(path).expect("Failed to read report")
}

/// A combined-log-format line requesting `target` with GET.
#[allow(dead_code)] // Used by other test files
pub fn get_line(client: u8, target: &str, status: u16) -> String {
    format!(
        r#"192.168.0.{client} - - [10/Oct/2024:13:55:36 +0000] "GET {target} HTTP/1.1" {status} 1043 "-" "curl/8.0""#
    )
}
