use std::fs;
use std::path::Path;

use iris_lab_core::FlowerRecord;
use tracing::info;

use crate::error::{IoError, IoResult};

/// Save flower records as a pretty-printed JSON array.
pub fn save_records_json(path: impl AsRef<Path>, records: &[FlowerRecord<f64>]) -> IoResult<()> {
    let json = serde_json::to_string_pretty(records)?;
    fs::write(path.as_ref(), json)?;
    info!(path = %path.as_ref().display(), n_records = records.len(), "saved flower records");
    Ok(())
}

/// Load flower records from a JSON array.
/// Every record is validated; `row` in the error is 1-based.
pub fn load_records_json(path: impl AsRef<Path>) -> IoResult<Vec<FlowerRecord<f64>>> {
    let json = fs::read_to_string(path.as_ref())?;
    let records: Vec<FlowerRecord<f64>> = serde_json::from_str(&json)?;
    for (i, record) in records.iter().enumerate() {
        record
            .validate()
            .map_err(|source| IoError::InvalidRecord { row: i + 1, source })?;
    }
    info!(path = %path.as_ref().display(), n_records = records.len(), "loaded flower records");
    Ok(records)
}
