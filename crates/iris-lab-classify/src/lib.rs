pub mod classifier;
pub mod neighbors;

pub use classifier::{
    Classifier, PetalLengthClassifier, Species, SETOSA_MAX_PETAL_LENGTH,
    VERSICOLOR_MAX_PETAL_LENGTH,
};
pub use neighbors::{NearestNeighborClassifier, DEFAULT_K};
