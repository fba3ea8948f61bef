//! Application initialization and resource setup.
//!
//! This module provides functions to initialize shared resources:
//! - Logger (plain or JSON output)
//! - Worker pool for the parallel count phase
//!
//! All initialization functions return proper error types for error handling.

mod logger;
mod pool;

// Re-export public API
pub use logger::init_logger_with;
pub use pool::init_worker_pool;
