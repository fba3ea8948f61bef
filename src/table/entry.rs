//! Table entries and report snapshots.

use std::borrow::Cow;
use std::sync::atomic::{AtomicU64, Ordering};

/// A manifest URL and its hit counter.
///
/// Entries are created once during manifest load and live until the table is
/// dropped. The URL never changes; the counter only ever grows, and it can be
/// bumped through a shared reference from any number of threads.
#[derive(Debug)]
pub struct Entry {
    url: Box<[u8]>,
    hits: AtomicU64,
    ordinal: usize,
}

impl Entry {
    pub(super) fn new(url: &[u8], ordinal: usize) -> Self {
        Self {
            url: url.into(),
            hits: AtomicU64::new(0),
            ordinal,
        }
    }

    /// The URL exactly as it appeared in the manifest.
    pub fn url(&self) -> &[u8] {
        &self.url
    }

    /// The URL for display, with invalid UTF-8 replaced.
    pub fn url_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.url)
    }

    /// Current hit count.
    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    /// Insertion position of this entry, dense in `0..table.len()`.
    pub fn ordinal(&self) -> usize {
        self.ordinal
    }

    /// Adds one hit.
    ///
    /// Relaxed ordering is sufficient: no other memory is published through
    /// the counter, and readers only look after the counting workers are joined.
    #[inline]
    pub fn increment(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Adds `n` hits at once.
    #[inline]
    pub fn add(&self, n: u64) {
        self.hits.fetch_add(n, Ordering::Relaxed);
    }
}

/// One row of the flattened, sorted table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UrlCount<'a> {
    /// Manifest URL
    pub url: &'a [u8],
    /// Hits counted for it
    pub hits: u64,
}

impl<'a> From<&'a Entry> for UrlCount<'a> {
    fn from(entry: &'a Entry) -> Self {
        UrlCount {
            url: entry.url(),
            hits: entry.hits(),
        }
    }
}
