//! Tests for the binary's exit status and stderr on fatal errors.
//!
//! Runs the built `url_hit_counter` executable, so these cover the path from
//! argument parsing through `main` to the process exit code.

use std::process::{Command, Output};

#[path = "helpers.rs"]
mod helpers;

use helpers::{get_line, read_output, write_inputs};

fn run_binary(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_url_hit_counter"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run url_hit_counter")
}

#[test]
fn test_missing_manifest_exits_with_status_one() {
    let files = write_inputs("", "");
    let missing = files.dir.path().join("no_manifest.txt");
    let output = files.output.to_str().unwrap();

    let result = run_binary(&[
        "sequential",
        missing.to_str().unwrap(),
        files.log.to_str().unwrap(),
        "--output",
        output,
    ]);

    assert_eq!(result.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("url_hit_counter error:"), "{stderr}");
    assert!(stderr.contains("Failed to open manifest file"), "{stderr}");
    assert!(stderr.contains("no_manifest.txt"), "{stderr}");
    assert!(!files.output.exists(), "no report should be written");
}

#[test]
fn test_zero_threads_exits_with_status_one() {
    let files = write_inputs("/a\n", "");
    let output = files.output.to_str().unwrap();

    let result = run_binary(&[
        "parallel",
        files.manifest.to_str().unwrap(),
        files.log.to_str().unwrap(),
        "0",
        "--output",
        output,
    ]);

    assert_eq!(result.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("Invalid configuration"), "{stderr}");
    assert!(stderr.contains("threads"), "{stderr}");
    assert!(!files.output.exists());
}

#[test]
fn test_missing_arguments_fail_before_running() {
    let result = run_binary(&["parallel", "manifest.txt"]);
    assert!(!result.status.success());
    assert!(!result.stderr.is_empty());
}

#[test]
fn test_successful_run_exits_with_status_zero() {
    let log = format!("{}\n", get_line(7, "/a", 200));
    let files = write_inputs("/b\n/a\n", &log);
    let output = files.output.to_str().unwrap();

    let result = run_binary(&[
        "parallel",
        files.manifest.to_str().unwrap(),
        files.log.to_str().unwrap(),
        "2",
        "--output",
        output,
        "--log-level",
        "error",
    ]);

    assert!(result.status.success(), "{result:?}");
    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(stdout.contains("Results saved in"), "{stdout}");
    assert_eq!(read_output(&files.output), "/a,1\n/b,0\n");
}
