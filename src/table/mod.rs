//! Fixed-size chained hash table of per-URL hit counters.
//!
//! The table has two phases. During manifest load it is exclusively borrowed
//! (`&mut self`) and [`CountingTable::insert`] grows the chains. After that it
//! is only ever shared (`&self`): [`CountingTable::lookup`] walks the chains
//! and [`Entry::increment`] bumps an atomic counter. Because insertion needs
//! `&mut`, the borrow checker rules out structural changes while workers hold
//! references, so chain traversal needs no locking.
//!
//! The bucket count is chosen once and never changes; there is no rehashing.
//! Final output order comes from [`CountingTable::flatten_sorted`], never from
//! bucket order.

mod diagnostics;
mod entry;
mod hash;

use crate::error_handling::TableError;

pub use diagnostics::TableOccupancy;
pub use entry::{Entry, UrlCount};
pub use hash::{bucket_index, hash_djb2, DJB2_SEED};

/// Chained hash table from URL to hit counter.
///
/// Each bucket is a chain stored oldest-first in a `Vec`; chains are walked
/// newest-first, matching a prepend-on-insert linked list. URLs within a chain
/// are pairwise distinct.
///
/// Dropping the table releases every bucket and entry.
#[derive(Debug)]
pub struct CountingTable {
    buckets: Vec<Vec<Entry>>,
    len: usize,
}

impl CountingTable {
    /// Creates an empty table with `bucket_count` buckets.
    ///
    /// # Errors
    ///
    /// - [`TableError::ZeroBuckets`] if `bucket_count` is 0
    /// - [`TableError::Allocation`] if the bucket array cannot be allocated
    pub fn new(bucket_count: usize) -> Result<Self, TableError> {
        if bucket_count == 0 {
            return Err(TableError::ZeroBuckets);
        }
        let mut buckets = Vec::new();
        buckets
            .try_reserve_exact(bucket_count)
            .map_err(|source| TableError::Allocation {
                what: "bucket array",
                source,
            })?;
        buckets.resize_with(bucket_count, Vec::new);
        Ok(Self { buckets, len: 0 })
    }

    /// Inserts `url` with a zero count unless it is already present.
    ///
    /// Returns `Ok(true)` if a new entry was created and `Ok(false)` for a
    /// duplicate, which is silently collapsed.
    ///
    /// # Errors
    ///
    /// [`TableError::Allocation`] if the chain cannot grow.
    pub fn insert(&mut self, url: &[u8]) -> Result<bool, TableError> {
        let index = bucket_index(url, self.buckets.len());
        let chain = &mut self.buckets[index];
        if chain.iter().any(|entry| entry.url() == url) {
            return Ok(false);
        }
        chain
            .try_reserve(1)
            .map_err(|source| TableError::Allocation {
                what: "table entry",
                source,
            })?;
        chain.push(Entry::new(url, self.len));
        self.len += 1;
        Ok(true)
    }

    /// Finds the entry for `url`, if the manifest contained it.
    ///
    /// Never creates entries.
    #[inline]
    pub fn lookup(&self, url: &[u8]) -> Option<&Entry> {
        let index = bucket_index(url, self.buckets.len());
        self.buckets[index]
            .iter()
            .rev()
            .find(|entry| entry.url() == url)
    }

    /// Looks `url` up and increments it if found. Returns whether it was found.
    pub fn record_hit(&self, url: &[u8]) -> bool {
        match self.lookup(url) {
            Some(entry) => {
                entry.increment();
                true
            }
            None => false,
        }
    }

    /// Snapshot of every entry, sorted by URL bytes.
    pub fn flatten_sorted(&self) -> Vec<UrlCount<'_>> {
        let mut rows: Vec<UrlCount<'_>> = self.iter().map(UrlCount::from).collect();
        // URLs are unique, so an unstable sort is still deterministic.
        rows.sort_unstable_by(|a, b| a.url.cmp(b.url));
        rows
    }

    /// Every entry, bucket by bucket, each chain newest-first.
    pub fn iter(&self) -> impl Iterator<Item = &Entry> + '_ {
        self.buckets.iter().flat_map(|chain| chain.iter().rev())
    }

    /// Number of distinct URLs.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no URL has been inserted.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Fixed number of buckets.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Sum of all hit counters.
    pub fn total_hits(&self) -> u64 {
        self.iter().map(Entry::hits).sum()
    }

    pub(crate) fn chain(&self, index: usize) -> impl Iterator<Item = &Entry> + '_ {
        self.buckets[index].iter().rev()
    }
}
