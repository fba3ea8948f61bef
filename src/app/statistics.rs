//! Statistics printing.

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::{LineOutcome, LineTally};
use crate::run::ManifestLoad;
use crate::table::TableOccupancy;

/// Logs what manifest loading did and how the table filled up.
pub fn print_load_statistics(load: &ManifestLoad, occupancy: &TableOccupancy) {
    info!(
        "Loaded {} manifest URL{} ({} duplicate{}, {} blank skipped)",
        load.inserted,
        if load.inserted == 1 { "" } else { "s" },
        load.duplicates,
        if load.duplicates == 1 { "" } else { "s" },
        load.blank_skipped
    );
    log::debug!("Table occupancy: {}", occupancy);
    if occupancy.load_factor() > 4.0 {
        log::warn!(
            "Load factor {:.1} is high; consider a larger --bucket-count",
            occupancy.load_factor()
        );
    }
}

/// Logs the per-outcome line counts.
pub fn print_line_statistics(tally: &LineTally) {
    let total = tally.total();
    info!(
        "Line summary: lines={} urls_extracted={} urls_matched={}",
        total,
        tally.extracted(),
        tally.matched
    );

    if total > 0 {
        for outcome in LineOutcome::iter() {
            let count = tally.get(outcome);
            if count > 0 {
                info!("   {}: {}", outcome.as_str(), count);
            }
        }
    }
}
