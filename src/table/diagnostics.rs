//! Occupancy figures and a full bucket dump, for tuning `--bucket-count`.

use std::fmt;
use std::io::{self, Write};

use super::CountingTable;

/// How evenly entries are spread over the buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableOccupancy {
    /// Fixed number of buckets
    pub bucket_count: usize,
    /// Buckets holding at least one entry
    pub occupied_buckets: usize,
    /// Total entries
    pub entries: usize,
    /// Length of the longest chain
    pub longest_chain: usize,
}

impl TableOccupancy {
    /// Entries per bucket.
    pub fn load_factor(&self) -> f64 {
        self.entries as f64 / self.bucket_count as f64
    }
}

impl fmt::Display for TableOccupancy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} entries in {}/{} buckets (load factor {:.3}, longest chain {})",
            self.entries,
            self.occupied_buckets,
            self.bucket_count,
            self.load_factor(),
            self.longest_chain
        )
    }
}

impl CountingTable {
    /// Summarizes chain lengths.
    pub fn occupancy(&self) -> TableOccupancy {
        let (occupied_buckets, longest_chain) = self
            .buckets
            .iter()
            .map(Vec::len)
            .filter(|&len| len > 0)
            .fold((0, 0), |(occupied, longest), len| {
                (occupied + 1, longest.max(len))
            });
        TableOccupancy {
            bucket_count: self.bucket_count(),
            occupied_buckets,
            entries: self.len(),
            longest_chain,
        }
    }

    /// Writes every bucket and its chain, newest entry first.
    ///
    /// ```text
    /// --- Counting table (buckets: 2) ---
    /// Bucket[0]: ~ empty ~
    /// Bucket[1]: ["/b" (0)] -> ["/a" (3)] -> NULL
    /// -----------------------------------
    /// ```
    pub fn dump<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let header = format!("--- Counting table (buckets: {}) ---", self.bucket_count());
        writeln!(out, "{header}")?;
        for index in 0..self.bucket_count() {
            write!(out, "Bucket[{index}]: ")?;
            let mut chain = self.chain(index).peekable();
            if chain.peek().is_none() {
                writeln!(out, "~ empty ~")?;
                continue;
            }
            for entry in chain {
                write!(out, "[\"{}\" ({})] -> ", entry.url_lossy(), entry.hits())?;
            }
            writeln!(out, "NULL")?;
        }
        writeln!(out, "{}", "-".repeat(header.len()))
    }
}
