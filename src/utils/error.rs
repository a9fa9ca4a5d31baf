use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PoolError {
    #[error("Missing input file: {path}")]
    MissingInputError { path: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Failed to parse {file}: {source}")]
    JsonError {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unparsable date {value:?} in {context}")]
    DateParseError { value: String, context: String },

    #[error("Start date must be before end date ({start} .. {end})")]
    InvalidPeriodError { start: NaiveDate, end: NaiveDate },

    #[error("Invalid config value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, PoolError>;
