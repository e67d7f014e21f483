use approx::assert_abs_diff_eq;
use iris_lab::classify::{Classifier, NearestNeighborClassifier, PetalLengthClassifier, Species};
use iris_lab::core::{average, scale, FlowerRecord, LabError};
use iris_lab::datasets::load_iris_records;
use iris_lab::io::{read_records_csv, write_records_csv};
use iris_lab::metrics::{euclidean, manhattan, minkowski, DistanceMetric};

fn flowers() -> (FlowerRecord<f64>, FlowerRecord<f64>, FlowerRecord<f64>) {
    (
        FlowerRecord::new(5.1, 3.5, 1.4, 0.2, "setosa"),
        FlowerRecord::new(6.4, 3.2, 4.5, 1.5, "versicolor"),
        FlowerRecord::new(7.1, 3.0, 6.1, 2.3, "virginica"),
    )
}

#[test]
fn test_pairwise_operations_on_reference_flowers() {
    let (f1, f2, _) = flowers();

    assert_abs_diff_eq!(euclidean(&f1, &f2), 3.6166, epsilon = 1e-4);
    assert_abs_diff_eq!(manhattan(&f1, &f2), 6.0, epsilon = 1e-12);

    let avg = average(&f1, &f2);
    assert_eq!(avg.label(), "Average");
    assert_abs_diff_eq!(avg.sepal_length(), 5.75, epsilon = 1e-12);
    assert_abs_diff_eq!(avg.sepal_width(), 3.35, epsilon = 1e-12);
    assert_abs_diff_eq!(avg.petal_length(), 2.95, epsilon = 1e-12);
    assert_abs_diff_eq!(avg.petal_width(), 0.85, epsilon = 1e-12);
}

#[test]
fn test_demo_sequence_after_setter() {
    let (mut f1, f2, f3) = flowers();
    f1.set_sepal_width(3.9);

    assert_eq!(PetalLengthClassifier.classify(&f3).unwrap(), Species::Virginica);
    assert_eq!(format!("{:.2}", euclidean(&f1, &f2)), "3.67");
    assert_eq!(format!("{:.2}", manhattan(&f1, &f2)), "6.40");
    assert!(minkowski(&f1, &f2, 3.0).unwrap() <= euclidean(&f1, &f2));

    let bigger = scale(&f1, 1.2);
    assert_eq!(bigger.label(), "setosa");
    assert_abs_diff_eq!(bigger.sepal_width(), 4.68, epsilon = 1e-12);
    assert_eq!(f1.sepal_width(), 3.9);
}

#[test]
fn test_classifiers_agree_on_reference_flowers() {
    let (f1, f2, f3) = flowers();
    let mut knn = NearestNeighborClassifier::new(3, DistanceMetric::Manhattan);
    knn.fit(&load_iris_records()).unwrap();

    let threshold: &dyn Classifier<f64> = &PetalLengthClassifier;
    for f in [&f1, &f2, &f3] {
        assert_eq!(threshold.classify(f).unwrap().as_str(), f.label());
        assert_eq!(knn.classify(f).unwrap().as_str(), f.label());
    }
}

#[test]
fn test_minkowski_exponent_errors_surface() {
    let (f1, f2, _) = flowers();
    assert_eq!(minkowski(&f1, &f2, 0.0).unwrap_err(), LabError::InvalidExponent { p: 0.0 });
}

#[test]
fn test_csv_export_feeds_classifier() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("iris.csv");
    write_records_csv(&path, &load_iris_records()).unwrap();

    let records = read_records_csv(&path).unwrap();
    let mut knn = NearestNeighborClassifier::default();
    knn.fit(&records).unwrap();
    let query = FlowerRecord::new(6.0, 2.9, 4.5, 1.4, "?");
    assert_eq!(knn.classify(&query).unwrap(), Species::Versicolor);
}
