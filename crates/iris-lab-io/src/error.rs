use thiserror::Error;

/// Failure while reading or writing flower records.
#[derive(Debug, Error)]
pub enum IoError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid record at row {row}: {source}")]
    InvalidRecord {
        row: usize,
        source: iris_lab_core::LabError,
    },
}

pub type IoResult<T> = Result<T, IoError>;
