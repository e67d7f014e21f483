pub mod builtin;

pub use builtin::{load_iris_records, IRIS_SAMPLES};
