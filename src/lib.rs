//! url_hit_counter library: per-URL GET hit counting over access logs
//!
//! A manifest lists the URLs of interest. Every access log line whose
//! `"GET <target> HTTP/...` request names one of them adds a hit to that URL;
//! everything else is ignored. Counting can run on one thread or on a worker
//! pool, and both produce the same report: one `url,hit_count` row per
//! manifest URL, sorted by URL.
//!
//! # Example
//!
//! ```no_run
//! use url_hit_counter::{run_count, Config, CountMode};
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = Config {
//!     manifest: "manifest.txt".into(),
//!     log: "access_log.txt".into(),
//!     mode: CountMode::Parallel { threads: 8 },
//!     ..Default::default()
//! };
//!
//! let report = run_count(&config)?;
//! println!("{} of {} lines matched", report.lines.matched, report.staged_lines);
//! # Ok(())
//! # }
//! ```
//!
//! The pieces can also be driven directly on in-memory data:
//!
//! ```
//! use url_hit_counter::run::{build_table, count_sequential};
//!
//! let table = build_table(["/a", "/b"], 16, false).unwrap();
//! count_sequential(&table, &[r#"1.2.3.4 - - [t] "GET /a HTTP/1.1" 200 5"#]);
//!
//! let rows = table.flatten_sorted();
//! assert_eq!((rows[0].url, rows[0].hits), (&b"/a"[..], 1));
//! assert_eq!((rows[1].url, rows[1].hits), (&b"/b"[..], 0));
//! ```

#![warn(missing_docs)]

mod app;
pub mod config;
pub mod error_handling;
pub mod export;
pub mod extract;
pub mod initialization;
pub mod run;
pub mod table;

// Re-export public API
pub use config::{Cli, Config, CountMode, CounterStrategy, LogFormat, LogLevel};
pub use run::{run_count, CountReport};
pub use table::{CountingTable, Entry, UrlCount};
