use std::collections::HashMap;

use crate::record::DonorKey;

/// Per-donor running state. Created on first sighting, never evicted.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct DonorHistory {
    /// Highest transaction year seen so far; monotonically non-decreasing.
    pub max_year: u16,
    /// Number of valid records seen so far; monotonically increasing.
    pub count: u32,
}

impl DonorHistory {
    /// The repeat-donor gate: at least two valid records, and this record's
    /// year equals the highest year seen. The comparison is intentionally
    /// equality rather than `>=` — a record for a year below the donor's
    /// known maximum is a stale arrival and never aggregates, matching the
    /// "most recent reporting year" reading of repeat donations.
    pub fn is_repeat_and_current(&self, year: u16) -> bool {
        self.count >= 2 && self.max_year == year
    }
}

#[derive(Debug, Default)]
pub struct DonorLedger {
    donors: HashMap<DonorKey, DonorHistory>,
}

impl DonorLedger {
    /// Record one valid contribution for the donor and return the updated
    /// history. Runs for every valid record, whether or not the record goes
    /// on to aggregate.
    pub fn record_donation(&mut self, key: DonorKey, year: u16) -> DonorHistory {
        let history = self.donors.entry(key).or_default();
        history.max_year = history.max_year.max(year);
        history.count += 1;
        *history
    }
}
