pub mod error;
pub mod csv_io;
pub mod json_io;

pub use error::{IoError, IoResult};
pub use csv_io::{read_records_csv, write_records_csv};
pub use json_io::{load_records_json, save_records_json};
