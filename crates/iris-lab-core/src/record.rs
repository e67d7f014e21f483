use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::dtype::Float;
use crate::error::{LabError, LabResult};

/// One of the four numeric measurements of a flower, in centimetres.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Measurement {
    SepalLength,
    SepalWidth,
    PetalLength,
    PetalWidth,
}

impl Measurement {
    /// Canonical order used by `FlowerRecord::measurements` and the CSV layout.
    pub const ALL: [Measurement; 4] = [
        Measurement::SepalLength,
        Measurement::SepalWidth,
        Measurement::PetalLength,
        Measurement::PetalWidth,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Measurement::SepalLength => "sepal_length",
            Measurement::SepalWidth => "sepal_width",
            Measurement::PetalLength => "petal_length",
            Measurement::PetalWidth => "petal_width",
        }
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single flower: sepal and petal measurements plus a free-form label.
///
/// `new` performs no validation; use `try_new` or `validate` when the
/// measurements come from untrusted input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct FlowerRecord<T: Float> {
    sepal_length: T,
    sepal_width: T,
    petal_length: T,
    petal_width: T,
    label: String,
}

impl<T: Float> FlowerRecord<T> {
    pub fn new(
        sepal_length: T,
        sepal_width: T,
        petal_length: T,
        petal_width: T,
        label: impl Into<String>,
    ) -> Self {
        FlowerRecord {
            sepal_length,
            sepal_width,
            petal_length,
            petal_width,
            label: label.into(),
        }
    }

    /// Build a record, rejecting negative or non-finite measurements and an empty label.
    pub fn try_new(
        sepal_length: T,
        sepal_width: T,
        petal_length: T,
        petal_width: T,
        label: impl Into<String>,
    ) -> LabResult<Self> {
        let record = Self::new(sepal_length, sepal_width, petal_length, petal_width, label);
        record.validate()?;
        Ok(record)
    }

    /// Build a record from measurements given in `Measurement::ALL` order.
    pub fn from_measurements(values: [T; 4], label: impl Into<String>) -> Self {
        let [sl, sw, pl, pw] = values;
        Self::new(sl, sw, pl, pw, label)
    }

    /// Check every measurement is finite and non-negative and the label is non-empty.
    pub fn validate(&self) -> LabResult<()> {
        for field in Measurement::ALL {
            let value = self.get(field);
            if !value.is_finite() {
                warn!(%field, value = value.to_f64(), "rejecting non-finite measurement");
                return Err(LabError::NonFiniteMeasurement { field, value: value.to_f64() });
            }
            if value < T::ZERO {
                warn!(%field, value = value.to_f64(), "rejecting negative measurement");
                return Err(LabError::NegativeMeasurement { field, value: value.to_f64() });
            }
        }
        if self.label.trim().is_empty() {
            return Err(LabError::EmptyLabel);
        }
        Ok(())
    }

    pub fn sepal_length(&self) -> T {
        self.sepal_length
    }

    pub fn sepal_width(&self) -> T {
        self.sepal_width
    }

    pub fn petal_length(&self) -> T {
        self.petal_length
    }

    pub fn petal_width(&self) -> T {
        self.petal_width
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_sepal_length(&mut self, value: T) {
        self.sepal_length = value;
    }

    pub fn set_sepal_width(&mut self, value: T) {
        self.sepal_width = value;
    }

    pub fn set_petal_length(&mut self, value: T) {
        self.petal_length = value;
    }

    pub fn set_petal_width(&mut self, value: T) {
        self.petal_width = value;
    }

    pub fn set_label(&mut self, value: impl Into<String>) {
        self.label = value.into();
    }

    /// Read a measurement by name.
    pub fn get(&self, field: Measurement) -> T {
        match field {
            Measurement::SepalLength => self.sepal_length,
            Measurement::SepalWidth => self.sepal_width,
            Measurement::PetalLength => self.petal_length,
            Measurement::PetalWidth => self.petal_width,
        }
    }

    /// Replace a measurement by name.
    pub fn set(&mut self, field: Measurement, value: T) {
        match field {
            Measurement::SepalLength => self.sepal_length = value,
            Measurement::SepalWidth => self.sepal_width = value,
            Measurement::PetalLength => self.petal_length = value,
            Measurement::PetalWidth => self.petal_width = value,
        }
    }

    /// The four measurements in `Measurement::ALL` order.
    pub fn measurements(&self) -> [T; 4] {
        [self.sepal_length, self.sepal_width, self.petal_length, self.petal_width]
    }
}

impl<T: Float> fmt::Display for FlowerRecord<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Flower('{}'): sepal=({}, {}), petal=({}, {})",
            self.label, self.sepal_length, self.sepal_width, self.petal_length, self.petal_width
        )
    }
}
