use std::io::Write;
use std::time::Instant;

use tracing::info;

use crate::{
    campaigns::{CampaignLedger, Percentile},
    donors::DonorLedger,
    error::Error,
    output::output_line,
    parser::{fec_reader, parse},
    record::RawRecord,
};

/// The streaming aggregation engine. Owns the donor and campaign ledgers;
/// both grow for the life of the stream and are never evicted, which is
/// fine for a single bounded batch run.
#[derive(Debug)]
pub struct Donations {
    donors: DonorLedger,
    campaigns: CampaignLedger,
    percentile: Percentile,
}

impl Donations {
    pub fn new(percentile: Percentile) -> Self {
        Self {
            donors: DonorLedger::default(),
            campaigns: CampaignLedger::default(),
            percentile,
        }
    }

    /// Apply one record. `Ok(None)` means the record was silently skipped,
    /// either by validation or by the repeat-donor gate; `Ok(Some(line))`
    /// carries the formatted output for a qualifying repeat donation.
    pub fn apply(&mut self, record: RawRecord) -> Result<Option<String>, Error> {
        if record.should_skip() {
            return Ok(None);
        }
        let contribution = record.normalize()?;

        // The donor's history is updated for every valid record, even when
        // the record itself fails the gate below.
        let history = self
            .donors
            .record_donation(contribution.donor_key(), contribution.year);
        if !history.is_repeat_and_current(contribution.year) {
            return Ok(None);
        }

        let key = contribution.campaign_key();
        let campaign = self.campaigns.add_donation(key.clone(), contribution.amount);
        let percentile = campaign.percentile(self.percentile)?;
        Ok(Some(output_line(
            &key,
            percentile,
            campaign.sum(),
            campaign.count(),
        )))
    }
}

/// Stream the input end to end: parse, apply, and buffer output lines,
/// flushing every `buffer_size` emitted lines with a progress observation
/// and once more, unconditionally, at end of stream. Parse and
/// normalization failures abort the run; whatever was already flushed
/// stays in the sink.
pub fn run<R, W>(
    input: R,
    mut output: W,
    percentile: Percentile,
    buffer_size: usize,
) -> Result<(), Box<dyn std::error::Error>>
where
    R: std::io::Read,
    W: Write,
{
    if buffer_size == 0 {
        return Err(Error::InvalidBufferSize.into());
    }

    let started = Instant::now();
    let mut donations = Donations::new(percentile);
    let mut buffer = String::new();
    let mut buffered = 0usize;
    let mut rows = 0u64;

    for record in parse(fec_reader(input)) {
        rows += 1;
        if let Some(line) = donations.apply(record?)? {
            buffer.push_str(&line);
            buffered += 1;
            if buffered == buffer_size {
                info!(
                    "processed {rows} rows in {:.1} seconds",
                    started.elapsed().as_secs_f64()
                );
                output.write_all(buffer.as_bytes())?;
                buffer.clear();
                buffered = 0;
            }
        }
    }

    info!(
        "processed {rows} rows in {:.1} seconds",
        started.elapsed().as_secs_f64()
    );
    output.write_all(buffer.as_bytes())?;
    output.flush()?;
    Ok(())
}
