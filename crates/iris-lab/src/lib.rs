//! # iris-lab
//!
//! Flower measurements, distances and species classification in Rust.
//!
//! ## Modules
//!
//! - **core** — `FlowerRecord`, `Measurement`, `Float`, `LabError`, `average` / `scale`
//! - **metrics** — Euclidean, Manhattan and Minkowski distances between records
//! - **classify** — `Classifier` trait, petal-length threshold rule, k-nearest neighbours
//! - **datasets** — built-in iris reference sample
//! - **io** — CSV and JSON record I/O
//! - **fleet** — vehicle hierarchy exercise

/// Flower records, errors and record algebra.
pub use iris_lab_core as core;

/// Distance metrics.
pub use iris_lab_metrics as metrics;

/// Species classifiers.
pub use iris_lab_classify as classify;

/// Built-in datasets.
pub use iris_lab_datasets as datasets;

/// Record I/O.
pub use iris_lab_io as io;

/// Vehicle hierarchy.
pub use iris_lab_fleet as fleet;
