pub mod campaigns;
pub mod donations;
pub mod donors;
pub mod error;
pub mod output;
pub mod parser;
pub mod record;
