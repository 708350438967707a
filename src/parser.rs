use csv::StringRecord;

use crate::{error::Error, record::RawRecord};

/// Column order of the FEC individual-contribution schema:
/// <https://classic.fec.gov/finance/disclosure/metadata/DataDictionaryContributionsbyIndividuals.shtml>
const FEC_COLUMNS: [&str; 21] = [
    "cmte_id",
    "amndt_ind",
    "rpt_tp",
    "transaction_pgi",
    "image_num",
    "transaction_tp",
    "entity_tp",
    "name",
    "city",
    "state",
    "zip_code",
    "employer",
    "occupation",
    "transaction_dt",
    "transaction_amt",
    "other_id",
    "tran_id",
    "file_num",
    "memo_cd",
    "memo_text",
    "sub_id",
];

// Indices of the consumed columns within FEC_COLUMNS.
const CMTE_ID: usize = 0;
const NAME: usize = 7;
const ZIP_CODE: usize = 10;
const TRANSACTION_DT: usize = 13;
const TRANSACTION_AMT: usize = 14;
const OTHER_ID: usize = 15;

/// Build a reader for the pipe-delimited, headerless FEC dump format.
/// Quoting is disabled because the format does not quote values; rows
/// are allowed to vary in length and are length-checked field by field.
pub fn fec_reader<R>(input: R) -> csv::Reader<R>
where
    R: std::io::Read,
{
    csv::ReaderBuilder::new()
        .delimiter(b'|')
        .has_headers(false)
        .quoting(false)
        .flexible(true)
        .from_reader(input)
}

fn field(record: &StringRecord, column: usize) -> Result<String, Error> {
    record
        .get(column)
        .map(str::to_owned)
        .ok_or(Error::MissingColumn {
            column: FEC_COLUMNS[column],
            found: record.len(),
            required: column + 1,
        })
}

/// Extract the consumed columns of each record. A record is only rejected
/// when a *consumed* column is out of range; surplus or missing trailing
/// columns that the pipeline never reads are ignored.
pub fn parse<R>(rdr: csv::Reader<R>) -> impl Iterator<Item = Result<RawRecord, Error>>
where
    R: std::io::Read,
{
    rdr.into_records().map(|record| {
        let record = record.map_err(|e| Error::ParsingFailure(e.to_string()))?;
        Ok(RawRecord {
            cmte_id: field(&record, CMTE_ID)?,
            name: field(&record, NAME)?,
            zip_code: field(&record, ZIP_CODE)?,
            transaction_dt: field(&record, TRANSACTION_DT)?,
            transaction_amt: field(&record, TRANSACTION_AMT)?,
            other_id: field(&record, OTHER_ID)?,
        })
    })
}
