pub mod distance;

pub use distance::{euclidean, manhattan, minkowski, DistanceMetric, DEFAULT_MINKOWSKI_P};
