//! Per-run line statistics.
//!
//! Each worker tallies outcomes for its own partition into a private
//! [`LineTally`]; the tallies are summed after the join, so the hot loop never
//! touches shared counters other than the table's own hit counts.

use super::types::LineOutcome;

/// Plain, single-owner outcome counts for a run of lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineTally {
    /// Lines with no extractable GET target
    pub no_url: usize,
    /// Lines whose target is not in the manifest
    pub unknown: usize,
    /// Lines that incremented a manifest entry
    pub matched: usize,
}

impl LineTally {
    /// Counts one line.
    pub fn record(&mut self, outcome: LineOutcome) {
        match outcome {
            LineOutcome::NoUrl => self.no_url += 1,
            LineOutcome::Unknown => self.unknown += 1,
            LineOutcome::Matched => self.matched += 1,
        }
    }

    /// Sums two tallies.
    pub fn merge(self, other: LineTally) -> LineTally {
        LineTally {
            no_url: self.no_url + other.no_url,
            unknown: self.unknown + other.unknown,
            matched: self.matched + other.matched,
        }
    }

    /// Count for a single outcome.
    pub fn get(&self, outcome: LineOutcome) -> usize {
        match outcome {
            LineOutcome::NoUrl => self.no_url,
            LineOutcome::Unknown => self.unknown,
            LineOutcome::Matched => self.matched,
        }
    }

    /// Number of lines seen.
    pub fn total(&self) -> usize {
        self.no_url + self.unknown + self.matched
    }

    /// Number of lines a target was extracted from.
    pub fn extracted(&self) -> usize {
        self.unknown + self.matched
    }
}
