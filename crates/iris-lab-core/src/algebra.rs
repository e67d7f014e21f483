use crate::dtype::Float;
use crate::record::FlowerRecord;

/// Label given to every record produced by `average`.
pub const AVERAGE_LABEL: &str = "Average";

/// Field-wise mean of two records. The result is always labelled `"Average"`.
pub fn average<T: Float>(a: &FlowerRecord<T>, b: &FlowerRecord<T>) -> FlowerRecord<T> {
    let (xa, xb) = (a.measurements(), b.measurements());
    FlowerRecord::from_measurements(
        [
            (xa[0] + xb[0]) / T::TWO,
            (xa[1] + xb[1]) / T::TWO,
            (xa[2] + xb[2]) / T::TWO,
            (xa[3] + xb[3]) / T::TWO,
        ],
        AVERAGE_LABEL,
    )
}

/// Multiply every measurement by `factor`, keeping the label.
pub fn scale<T: Float>(a: &FlowerRecord<T>, factor: T) -> FlowerRecord<T> {
    FlowerRecord::from_measurements(a.measurements().map(|v| v * factor), a.label())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn pair() -> (FlowerRecord<f64>, FlowerRecord<f64>) {
        (
            FlowerRecord::new(5.1, 3.5, 1.4, 0.2, "setosa"),
            FlowerRecord::new(6.4, 3.2, 4.5, 1.5, "versicolor"),
        )
    }

    #[test]
    fn test_average() {
        let (f1, f2) = pair();
        let avg = average(&f1, &f2);
        assert_eq!(avg.label(), "Average");
        let expected = [5.75, 3.35, 2.95, 0.85];
        for (got, want) in avg.measurements().iter().zip(expected) {
            assert_abs_diff_eq!(*got, want, epsilon = 1e-12);
        }
        // inputs untouched
        assert_eq!(f1.label(), "setosa");
        assert_eq!(f2.measurements(), [6.4, 3.2, 4.5, 1.5]);
    }

    #[test]
    fn test_average_label_ignores_inputs() {
        let a = FlowerRecord::new(1.0, 1.0, 1.0, 1.0, "virginica");
        assert_eq!(average(&a, &a).label(), AVERAGE_LABEL);
    }

    #[test]
    fn test_scale_identity_and_zero() {
        let (f1, _) = pair();
        assert_eq!(scale(&f1, 1.0), f1);

        let zero = scale(&f1, 0.0);
        assert_eq!(zero.measurements(), [0.0; 4]);
        assert_eq!(zero.label(), "setosa");
    }

    #[test]
    fn test_scale_negative_and_fractional() {
        let (f1, _) = pair();
        let grown = scale(&f1, 1.2);
        assert_abs_diff_eq!(grown.sepal_length(), 6.12, epsilon = 1e-12);
        let flipped = scale(&f1, -0.5);
        assert_abs_diff_eq!(flipped.petal_length(), -0.7, epsilon = 1e-12);
    }
}
