use thiserror::Error;

use crate::record::Measurement;

/// Error type shared by the flower record, distance and classifier crates.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LabError {
    #[error("Invalid Minkowski exponent: p must be a finite value > 0, got {p}")]
    InvalidExponent { p: f64 },

    #[error("Negative measurement: {field} = {value}")]
    NegativeMeasurement { field: Measurement, value: f64 },

    #[error("Non-finite measurement: {field} = {value}")]
    NonFiniteMeasurement { field: Measurement, value: f64 },

    #[error("Empty label")]
    EmptyLabel,

    #[error("Unknown species label: {0:?}")]
    UnknownSpecies(String),

    #[error("Classifier not fitted")]
    NotFitted,

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

pub type LabResult<T> = Result<T, LabError>;
