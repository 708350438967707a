use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum Error {
    #[error("failed to parse input, reason: `{0}`")]
    ParsingFailure(String),
    #[error("record has {found} fields, but column `{column}` requires at least {required}")]
    MissingColumn {
        column: &'static str,
        found: usize,
        required: usize,
    },
    #[error("transaction amount `{0}` is not numeric")]
    InvalidAmount(String),
    #[error("transaction date `{0}` does not end in a 4-digit year")]
    InvalidYear(String),
    #[error("percentile `{0}` is not an integer in [1, 100]")]
    InvalidPercentile(String),
    #[error("buffer size must be a positive integer")]
    InvalidBufferSize,
    #[error("percentile requested for a campaign with no recorded donations")]
    EmptyCampaign,
}
