//! Count phase.
//!
//! Staged lines are resolved against a table whose structure is frozen (it is
//! only borrowed shared here). Sequential and parallel counting produce the
//! same hit counts: increments commute and each one is atomic, or, with the
//! sharded strategy, private per-worker sums are added in after the join.

use rayon::prelude::*;
use rayon::ThreadPool;

use crate::config::CounterStrategy;
use crate::error_handling::{LineOutcome, LineTally};
use crate::extract::extract_url;
use crate::table::{CountingTable, Entry};

/// Maps a log line to its manifest entry, or to the reason it has none.
#[inline]
pub fn resolve_line<'t>(table: &'t CountingTable, line: &[u8]) -> Result<&'t Entry, LineOutcome> {
    let url = extract_url(line).ok_or(LineOutcome::NoUrl)?;
    table.lookup(url).ok_or(LineOutcome::Unknown)
}

/// Counts `lines` on the calling thread.
pub fn count_sequential<L: AsRef<[u8]>>(table: &CountingTable, lines: &[L]) -> LineTally {
    let mut tally = LineTally::default();
    for line in lines {
        match resolve_line(table, line.as_ref()) {
            Ok(entry) => {
                entry.increment();
                tally.record(LineOutcome::Matched);
            }
            Err(outcome) => tally.record(outcome),
        }
    }
    tally
}

/// Length of each contiguous partition when `len` lines are split over
/// `workers` workers. Never zero.
pub fn partition_len(len: usize, workers: usize) -> usize {
    len.div_ceil(workers.max(1)).max(1)
}

/// Counts `lines` on `pool`, one contiguous partition per worker.
///
/// Returns once every worker has finished.
pub fn count_parallel<L>(
    table: &CountingTable,
    lines: &[L],
    pool: &ThreadPool,
    strategy: CounterStrategy,
) -> LineTally
where
    L: AsRef<[u8]> + Sync,
{
    let chunk_len = partition_len(lines.len(), pool.current_num_threads());
    log::debug!(
        "Partitioning {} lines into chunks of {} across {} workers ({:?} strategy)",
        lines.len(),
        chunk_len,
        pool.current_num_threads(),
        strategy
    );

    match strategy {
        CounterStrategy::Atomic => pool.install(|| {
            lines
                .par_chunks(chunk_len)
                .map(|chunk| count_sequential(table, chunk))
                .reduce(LineTally::default, LineTally::merge)
        }),
        CounterStrategy::Sharded => {
            let shards: Vec<(LineTally, Vec<u64>)> = pool.install(|| {
                lines
                    .par_chunks(chunk_len)
                    .map(|chunk| count_into_shard(table, chunk))
                    .collect()
            });
            fold_shards(table, shards)
        }
    }
}

/// Tallies hits for one partition into a private vector indexed by entry
/// ordinal, leaving the table's counters untouched.
fn count_into_shard<L: AsRef<[u8]>>(table: &CountingTable, lines: &[L]) -> (LineTally, Vec<u64>) {
    let mut tally = LineTally::default();
    let mut hits = vec![0u64; table.len()];
    for line in lines {
        match resolve_line(table, line.as_ref()) {
            Ok(entry) => {
                hits[entry.ordinal()] += 1;
                tally.record(LineOutcome::Matched);
            }
            Err(outcome) => tally.record(outcome),
        }
    }
    (tally, hits)
}

fn fold_shards(table: &CountingTable, shards: Vec<(LineTally, Vec<u64>)>) -> LineTally {
    let mut totals = vec![0u64; table.len()];
    let mut tally = LineTally::default();
    for (shard_tally, hits) in shards {
        tally = tally.merge(shard_tally);
        for (total, n) in totals.iter_mut().zip(hits) {
            *total += n;
        }
    }
    for entry in table.iter() {
        let n = totals[entry.ordinal()];
        if n > 0 {
            entry.add(n);
        }
    }
    tally
}
