use rust_decimal::Decimal;

use crate::error::Error;

/// The consumed columns of one input row, still untyped text.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRecord {
    pub cmte_id: String,
    pub name: String,
    pub zip_code: String,
    pub transaction_dt: String,
    pub transaction_amt: String,
    pub other_id: String,
}

impl RawRecord {
    /// Whether this record should be silently dropped. A non-empty `other_id`
    /// marks a contribution that did not come from an individual; the other
    /// checks reject records whose consumed fields are structurally unusable.
    pub fn should_skip(&self) -> bool {
        !self.other_id.is_empty()
            || self.zip_code.chars().count() < 5
            || self.transaction_dt.chars().count() != 8
            || self.name.is_empty()
            || self.cmte_id.is_empty()
            || self.transaction_amt.is_empty()
    }

    /// Derive the typed fields. The zip code stays textual (leading zeros are
    /// significant) and is truncated to its first five characters; the year is
    /// the last four characters of the MMDDYYYY date field.
    ///
    /// Validation only guarantees the fields are non-empty and of the right
    /// length, so non-numeric content still fails here.
    pub fn normalize(self) -> Result<Contribution, Error> {
        let amount = self
            .transaction_amt
            .parse::<Decimal>()
            .map_err(|_| Error::InvalidAmount(self.transaction_amt.clone()))?;
        let year = self
            .transaction_dt
            .char_indices()
            .nth_back(3)
            .and_then(|(at, _)| self.transaction_dt[at..].parse::<u16>().ok())
            .ok_or_else(|| Error::InvalidYear(self.transaction_dt.clone()))?;
        let zip_code = self.zip_code.chars().take(5).collect();
        Ok(Contribution {
            cmte_id: self.cmte_id,
            name: self.name,
            zip_code,
            year,
            amount,
        })
    }
}

/// A validated, normalized contribution record.
#[derive(Debug, Clone, PartialEq)]
pub struct Contribution {
    pub cmte_id: String,
    pub name: String,
    /// Exactly five characters, textual.
    pub zip_code: String,
    pub year: u16,
    pub amount: Decimal,
}

impl Contribution {
    pub fn donor_key(&self) -> DonorKey {
        DonorKey {
            name: self.name.clone(),
            zip_code: self.zip_code.clone(),
        }
    }

    pub fn campaign_key(&self) -> CampaignKey {
        CampaignKey {
            cmte_id: self.cmte_id.clone(),
            zip_code: self.zip_code.clone(),
            year: self.year,
        }
    }
}

/// Identifies a donor for repeat detection. Distinct people sharing a name
/// and zip code are treated as the same donor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DonorKey {
    pub name: String,
    pub zip_code: String,
}

/// Identifies one aggregation cohort: contributions to a committee from a
/// zip code within a calendar year.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CampaignKey {
    pub cmte_id: String,
    pub zip_code: String,
    pub year: u16,
}
