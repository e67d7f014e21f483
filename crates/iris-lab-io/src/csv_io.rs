use std::path::Path;

use iris_lab_core::FlowerRecord;
use tracing::info;

use crate::error::{IoError, IoResult};

/// Read flower records from a CSV file with a header row
/// `sepal_length,sepal_width,petal_length,petal_width,label`.
/// Every row is validated; the first bad row aborts the read.
pub fn read_records_csv(path: impl AsRef<Path>) -> IoResult<Vec<FlowerRecord<f64>>> {
    let path = path.as_ref();
    let mut rdr = csv::Reader::from_path(path)?;

    let mut records = Vec::new();
    for (i, result) in rdr.deserialize().enumerate() {
        let record: FlowerRecord<f64> = result?;
        record
            .validate()
            .map_err(|source| IoError::InvalidRecord { row: i + 1, source })?;
        records.push(record);
    }

    info!(path = %path.display(), n_records = records.len(), "read flower records");
    Ok(records)
}

/// Write flower records to a CSV file, header row included.
pub fn write_records_csv(path: impl AsRef<Path>, records: &[FlowerRecord<f64>]) -> IoResult<()> {
    let path = path.as_ref();
    let mut wtr = csv::Writer::from_path(path)?;
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    info!(path = %path.display(), n_records = records.len(), "wrote flower records");
    Ok(())
}
