use rust_decimal::Decimal;

use crate::record::CampaignKey;

/// Render one output line: `cmte_id|zip|year|percentile|sum|count`.
///
/// The percentile value is rounded to the nearest integer with ties going to
/// the even neighbour (`Decimal::round` is round-half-to-even). The sum is
/// printed without a decimal point when it is a whole number, and with
/// exactly two decimal digits otherwise.
pub fn output_line(key: &CampaignKey, percentile: Decimal, sum: Decimal, count: usize) -> String {
    format!(
        "{}|{}|{}|{}|{}|{}\n",
        key.cmte_id,
        key.zip_code,
        key.year,
        percentile.round(),
        format_sum(sum),
        count
    )
}

fn format_sum(sum: Decimal) -> String {
    if sum.fract().is_zero() {
        sum.trunc().to_string()
    } else {
        format!("{sum:.2}")
    }
}
