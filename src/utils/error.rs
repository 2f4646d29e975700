use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Duplicate field in record: {key}")]
    DuplicateField { key: String },

    #[error("Missing contact field: {field}")]
    MissingLeadField { field: String },

    #[error("Report email rejected ({status}): {message}")]
    EmailRejected { status: u16, message: String },
}

pub type Result<T> = std::result::Result<T, ExportError>;
