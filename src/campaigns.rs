use std::collections::HashMap;
use std::str::FromStr;

use rust_decimal::Decimal;

use crate::{error::Error, record::CampaignKey};

/// The process-wide percentile configuration value, an integer in [1, 100].
/// Parsed once before streaming begins and shared by every campaign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Percentile(u8);

impl Percentile {
    pub fn new(value: i64) -> Result<Self, Error> {
        if (1..=100).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(Error::InvalidPercentile(value.to_string()))
        }
    }
}

impl FromStr for Percentile {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Only the first line of the percentile source is meaningful.
        let value = s.lines().next().unwrap_or("").trim();
        value
            .parse::<i64>()
            .map_err(|_| Error::InvalidPercentile(value.to_string()))
            .and_then(Self::new)
    }
}

/// Running state for one campaign cohort: every amount contributed so far
/// by qualifying repeat donors, kept sorted, plus the running sum.
#[derive(Debug, Default, PartialEq)]
pub struct CampaignHistory {
    amounts: Vec<Decimal>,
    sum: Decimal,
}

impl CampaignHistory {
    /// Insert an amount at its sorted position. Equal amounts are inserted
    /// before their duplicates, so every insertion is a single shift.
    fn insert(&mut self, amount: Decimal) {
        let at = self.amounts.partition_point(|a| *a < amount);
        self.amounts.insert(at, amount);
        self.sum += amount;
    }

    /// Nearest-rank percentile: the element at 1-indexed position
    /// `ceil(p / 100 × n)`, clamped to `[1, n]`.
    pub fn percentile(&self, p: Percentile) -> Result<Decimal, Error> {
        let n = self.amounts.len();
        if n == 0 {
            return Err(Error::EmptyCampaign);
        }
        let rank = (p.0 as usize * n).div_ceil(100).clamp(1, n);
        Ok(self.amounts[rank - 1])
    }

    pub fn sum(&self) -> Decimal {
        self.sum
    }

    pub fn count(&self) -> usize {
        self.amounts.len()
    }
}

#[derive(Debug, Default)]
pub struct CampaignLedger {
    campaigns: HashMap<CampaignKey, CampaignHistory>,
}

impl CampaignLedger {
    /// Record a qualifying repeat donation and return the campaign's updated
    /// history, from which percentile/sum/count are read.
    pub fn add_donation(&mut self, key: CampaignKey, amount: Decimal) -> &CampaignHistory {
        let history = self.campaigns.entry(key).or_default();
        history.insert(amount);
        history
    }
}
