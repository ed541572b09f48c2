//! Record store error types

use thiserror::Error;

/// Errors that can occur while loading or exporting the record table
#[derive(Error, Debug)]
pub enum RecordError {
    /// Underlying I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parse or write failure
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A column the loader cannot work without is missing from the header
    #[error("Missing required column '{name}'")]
    MissingColumn { name: String },
}

pub type Result<T> = std::result::Result<T, RecordError>;
