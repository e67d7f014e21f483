use std::fmt;
use std::str::FromStr;

use iris_lab_core::{Float, FlowerRecord, LabError, LabResult, Measurement};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Petal lengths strictly below this are setosa.
pub const SETOSA_MAX_PETAL_LENGTH: f64 = 2.5;
/// Petal lengths strictly below this (and not setosa) are versicolor.
pub const VERSICOLOR_MAX_PETAL_LENGTH: f64 = 5.0;

/// The three iris species.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    Setosa,
    Versicolor,
    Virginica,
}

impl Species {
    pub const ALL: [Species; 3] = [Species::Setosa, Species::Versicolor, Species::Virginica];

    pub fn as_str(self) -> &'static str {
        match self {
            Species::Setosa => "setosa",
            Species::Versicolor => "versicolor",
            Species::Virginica => "virginica",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Species {
    type Err = LabError;

    /// Accepts `setosa`, `Iris-setosa`, `SETOSA`, ...
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        let name = name.strip_prefix("iris-").unwrap_or(&name);
        Species::ALL
            .into_iter()
            .find(|sp| sp.as_str() == name)
            .ok_or_else(|| LabError::UnknownSpecies(s.to_string()))
    }
}

/// Anything that can assign a species to a flower record.
pub trait Classifier<T: Float> {
    fn classify(&self, record: &FlowerRecord<T>) -> LabResult<Species>;

    /// Classify every record, stopping at the first failure.
    fn classify_all(&self, records: &[FlowerRecord<T>]) -> LabResult<Vec<Species>> {
        records.iter().map(|r| self.classify(r)).collect()
    }
}

/// Threshold rule on petal length alone.
///
/// | petal length       | species    |
/// |--------------------|------------|
/// | `< 2.5`            | setosa     |
/// | `2.5 ..< 5.0`      | versicolor |
/// | `>= 5.0`           | virginica  |
///
/// NaN is rejected. Infinite and negative values fall in the buckets above.
#[derive(Debug, Clone, Copy, Default)]
pub struct PetalLengthClassifier;

impl PetalLengthClassifier {
    pub fn new() -> Self {
        PetalLengthClassifier
    }
}

impl<T: Float> Classifier<T> for PetalLengthClassifier {
    fn classify(&self, record: &FlowerRecord<T>) -> LabResult<Species> {
        let raw = record.petal_length();
        if raw.is_nan() {
            return Err(LabError::NonFiniteMeasurement {
                field: Measurement::PetalLength,
                value: raw.to_f64(),
            });
        }
        let petal_length = raw.to_f64();
        let species = if petal_length < SETOSA_MAX_PETAL_LENGTH {
            Species::Setosa
        } else if petal_length < VERSICOLOR_MAX_PETAL_LENGTH {
            Species::Versicolor
        } else {
            Species::Virginica
        };
        debug!(petal_length, %species, "petal length rule");
        Ok(species)
    }
}
