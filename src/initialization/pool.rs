//! Worker pool for the parallel count phase.

use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::error_handling::InitializationError;

/// Builds a dedicated pool of exactly `threads` counting workers.
///
/// The pool is local to the run rather than rayon's global pool, so the
/// requested worker count is honoured even if something else already
/// configured the global one.
///
/// # Errors
///
/// Returns `InitializationError::WorkerPoolError` if the threads cannot be spawned.
pub fn init_worker_pool(threads: usize) -> Result<ThreadPool, InitializationError> {
    let pool = ThreadPoolBuilder::new()
        .num_threads(threads)
        .thread_name(|index| format!("count-worker-{index}"))
        .build()?;
    log::debug!(
        "Worker pool ready with {} threads",
        pool.current_num_threads()
    );
    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_has_requested_thread_count() {
        for threads in [1, 3, 8] {
            let pool = init_worker_pool(threads).unwrap();
            assert_eq!(pool.current_num_threads(), threads);
        }
    }

    #[test]
    fn test_worker_threads_are_named() {
        let pool = init_worker_pool(2).unwrap();
        let name = pool.install(|| std::thread::current().name().map(str::to_owned));
        assert!(name.unwrap_or_default().starts_with("count-worker-"));
    }
}
