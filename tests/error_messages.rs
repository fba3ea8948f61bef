//! Tests to ensure fatal errors name the resource that failed.
//!
//! Data problems (malformed lines, unknown URLs) are never errors; missing
//! inputs, unwritable outputs and invalid settings are.

use url_hit_counter::{run_count, Config, CountMode, CounterStrategy};

#[path = "helpers.rs"]
mod helpers;

use helpers::{config_for, write_inputs};

#[test]
fn test_missing_manifest_is_fatal() {
    let files = write_inputs("/a\n", "");
    let mut config = config_for(&files, CountMode::Sequential, CounterStrategy::Atomic);
    config.manifest = files.dir.path().join("nope.txt");

    let err = run_count(&config).unwrap_err();
    let message = format!("{err:#}");
    assert!(
        message.contains("Failed to open manifest file"),
        "{message}"
    );
    assert!(message.contains("nope.txt"), "{message}");
    assert!(!files.output.exists(), "no report should be written");
}

#[test]
fn test_missing_log_is_fatal() {
    let files = write_inputs("/a\n", "");
    let mut config = config_for(
        &files,
        CountMode::Parallel { threads: 2 },
        CounterStrategy::Atomic,
    );
    config.log = files.dir.path().join("missing.log");

    let err = run_count(&config).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("Failed to open log file"), "{message}");
    assert!(message.contains("missing.log"), "{message}");
    assert!(!files.output.exists());
}

#[test]
fn test_unwritable_output_is_fatal() {
    let files = write_inputs("/a\n", "");
    let mut config = config_for(&files, CountMode::Sequential, CounterStrategy::Atomic);
    config.output = files.dir.path().join("missing_dir").join("results.csv");

    let err = run_count(&config).unwrap_err();
    let message = format!("{err:#}");
    assert!(
        message.contains("Failed to create report file"),
        "{message}"
    );
}

#[test]
fn test_output_path_that_is_a_directory_is_fatal() {
    let files = write_inputs("/a\n", "");
    let mut config = config_for(&files, CountMode::Sequential, CounterStrategy::Atomic);
    config.output = files.dir.path().to_path_buf();

    assert!(run_count(&config).is_err());
}

#[test]
fn test_invalid_config_is_reported_before_any_io() {
    let config = Config {
        manifest: "does/not/exist".into(),
        mode: CountMode::Parallel { threads: 0 },
        ..Default::default()
    };
    let err = run_count(&config).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("Invalid configuration"), "{message}");
    assert!(message.contains("threads"), "{message}");
    assert!(!message.contains("manifest"), "{message}");
}

#[test]
fn test_garbage_log_is_not_an_error() {
    let files = write_inputs("/a\n", "\u{0}\u{1}binary junk\n\"GET \n HTTP/\n\n");
    let report = run_count(&config_for(&files, CountMode::Sequential, CounterStrategy::Atomic))
        .expect("Malformed lines must be skipped, not fail the run");
    assert_eq!(report.lines.no_url, 4);
    assert_eq!(helpers::read_output(&files.output), "/a,0\n");
}

#[test]
fn test_non_utf8_log_bytes_are_accepted() {
    let files = write_inputs("/caf\u{e9}\n", "");
    let mut bytes = b"\"GET /caf\xc3\xa9 HTTP/1.1\" 200\n".to_vec();
    bytes.extend_from_slice(b"\xff\xfe\"GET /x HTTP/1.1\"\n");
    std::fs::write(&files.log, bytes).unwrap();

    let report = run_count(&config_for(&files, CountMode::Sequential, CounterStrategy::Atomic))
        .expect("Invalid UTF-8 must not fail the run");
    assert_eq!(report.lines.matched, 1);
    assert_eq!(report.lines.unknown, 1);
    assert_eq!(helpers::read_output(&files.output), "/caf\u{e9},1\n");
}
