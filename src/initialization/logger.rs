//! Logger initialization.
//!
//! Logs go to stderr so they never mix with the report or the final summary.

use std::io::{IsTerminal, Write};

use crate::config::LogFormat;
use crate::error_handling::InitializationError;
use colored::*;
use log::{Level, LevelFilter, Record};
use serde_json::{json, Value};

/// Initializes the logger with the specified level and format.
///
/// The logger reads from the `RUST_LOG` environment variable first, and the
/// provided `level` overrides it for this crate. Colour is only emitted when
/// stderr is a terminal, so redirected batch logs stay plain text.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
///
/// # Examples
///
/// ```bash
/// # Use RUST_LOG for quick debugging (no CLI args needed)
/// RUST_LOG=debug url_hit_counter sequential manifest.txt access.log
///
/// # Override with CLI args (takes precedence)
/// url_hit_counter parallel manifest.txt access.log 8 --log-level debug --log-format json
/// ```
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    if !std::io::stderr().is_terminal() {
        colored::control::set_override(false);
    }

    let mut builder = env_logger::Builder::from_default_env();
    builder.filter_level(level);
    builder.filter_module("rayon", LevelFilter::Warn);
    builder.filter_module("url_hit_counter", level);

    match format {
        LogFormat::Json => {
            builder.format(|buf, record| {
                let line = json_line(chrono::Utc::now().timestamp_millis(), record);
                writeln!(buf, "{line}")
            });
        }
        LogFormat::Plain => {
            builder.format(|buf, record| {
                let (emoji, level) = level_label(record.level());
                let target = record.target().cyan();
                writeln!(buf, "{emoji} {target} [{level}] {}", record.args())
            });
        }
    }

    // try_init so a second initialization (tests) is an error, not a panic
    builder.try_init()?;
    Ok(())
}

/// One JSON object per record: `ts` (epoch millis), `level`, `target`, `msg`.
fn json_line(ts_millis: i64, record: &Record<'_>) -> Value {
    json!({
        "ts": ts_millis,
        "level": record.level().as_str(),
        "target": record.target(),
        "msg": record.args().to_string(),
    })
}

fn level_label(level: Level) -> (&'static str, ColoredString) {
    let name = level.as_str();
    match level {
        Level::Error => ("❌", name.red()),
        Level::Warn => ("⚠️", name.yellow()),
        Level::Info => ("✔️", name.green()),
        Level::Debug => ("🔍", name.blue()),
        Level::Trace => ("🔬", name.purple()),
    }
}
