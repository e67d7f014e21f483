//! Pairwise distances between flower records.
//!
//! All metrics work over the four measurements in `Measurement::ALL` order,
//! never mutate their inputs and always return a non-negative value.
//! Labels play no part in any distance.

use iris_lab_core::{Float, FlowerRecord, LabError, LabResult};
use tracing::debug;

/// Exponent used by `DistanceMetric::default_minkowski`.
pub const DEFAULT_MINKOWSKI_P: f64 = 3.0;

/// Distance metric between two flower records.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DistanceMetric<T> {
    /// √(Σ(aᵢ - bᵢ)²)
    #[default]
    Euclidean,
    /// Σ|aᵢ - bᵢ|
    Manhattan,
    /// (Σ|aᵢ - bᵢ|^p)^(1/p), p > 0
    Minkowski(T),
}

impl<T: Float> DistanceMetric<T> {
    /// Minkowski with p = 3.
    pub fn default_minkowski() -> Self {
        DistanceMetric::Minkowski(T::from_f64(DEFAULT_MINKOWSKI_P))
    }

    pub fn distance(&self, a: &FlowerRecord<T>, b: &FlowerRecord<T>) -> LabResult<T> {
        let d = match *self {
            DistanceMetric::Euclidean => euclidean(a, b),
            DistanceMetric::Manhattan => manhattan(a, b),
            DistanceMetric::Minkowski(p) => minkowski(a, b, p)?,
        };
        debug!(
            metric = ?self,
            from = a.label(),
            to = b.label(),
            distance = d.to_f64(),
            "computed distance"
        );
        Ok(d)
    }
}

fn abs_diffs<T: Float>(a: &FlowerRecord<T>, b: &FlowerRecord<T>) -> [T; 4] {
    let (xa, xb) = (a.measurements(), b.measurements());
    [
        (xa[0] - xb[0]).abs(),
        (xa[1] - xb[1]).abs(),
        (xa[2] - xb[2]).abs(),
        (xa[3] - xb[3]).abs(),
    ]
}

/// Euclidean (L2) distance.
pub fn euclidean<T: Float>(a: &FlowerRecord<T>, b: &FlowerRecord<T>) -> T {
    abs_diffs(a, b).iter().map(|&d| d * d).sum::<T>().sqrt()
}

/// Manhattan (L1) distance.
pub fn manhattan<T: Float>(a: &FlowerRecord<T>, b: &FlowerRecord<T>) -> T {
    abs_diffs(a, b).into_iter().sum()
}

/// Minkowski (Lp) distance. `p` must be finite and strictly positive.
pub fn minkowski<T: Float>(a: &FlowerRecord<T>, b: &FlowerRecord<T>, p: T) -> LabResult<T> {
    if !p.is_finite() || p <= T::ZERO {
        return Err(LabError::InvalidExponent { p: p.to_f64() });
    }
    let sum_pow: T = abs_diffs(a, b).iter().map(|&d| d.powf(p)).sum();
    Ok(sum_pow.powf(p.recip()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn f1() -> FlowerRecord<f64> {
        FlowerRecord::new(5.1, 3.5, 1.4, 0.2, "setosa")
    }

    fn f2() -> FlowerRecord<f64> {
        FlowerRecord::new(6.4, 3.2, 4.5, 1.5, "versicolor")
    }

    fn f3() -> FlowerRecord<f64> {
        FlowerRecord::new(7.1, 3.0, 6.1, 2.3, "virginica")
    }

    #[test]
    fn test_euclidean_known_pair() {
        // diffs 1.3, 0.3, 3.1, 1.3 -> sum_sq 13.08
        let d = euclidean(&f1(), &f2());
        assert_relative_eq!(d, 13.08f64.sqrt(), epsilon = 1e-12);
        assert_eq!(format!("{:.2}", d), "3.62");
    }

    #[test]
    fn test_euclidean_symmetric_and_zero_on_self() {
        for (a, b) in [(f1(), f2()), (f2(), f3()), (f1(), f3())] {
            assert_eq!(euclidean(&a, &b), euclidean(&b, &a));
            assert_eq!(euclidean(&a, &a), 0.0);
        }
    }

    #[test]
    fn test_manhattan() {
        assert_abs_diff_eq!(manhattan(&f1(), &f2()), 6.0, epsilon = 1e-12);
        assert_eq!(manhattan(&f3(), &f3()), 0.0);
        assert!(manhattan(&f3(), &f1()) >= 0.0);
    }

    #[test]
    fn test_minkowski_matches_l1_and_l2() {
        let (a, b) = (f1(), f3());
        assert_relative_eq!(minkowski(&a, &b, 1.0).unwrap(), manhattan(&a, &b), epsilon = 1e-12);
        assert_relative_eq!(minkowski(&a, &b, 2.0).unwrap(), euclidean(&a, &b), epsilon = 1e-12);
    }

    #[test]
    fn test_minkowski_default_p() {
        let d = DistanceMetric::default_minkowski().distance(&f1(), &f2()).unwrap();
        let expected = (1.3f64.powi(3) + 0.3f64.powi(3) + 3.1f64.powi(3) + 1.3f64.powi(3)).cbrt();
        assert_relative_eq!(d, expected, epsilon = 1e-12);
        assert!(d >= 0.0);
    }

    #[test]
    fn test_minkowski_fractional_p_non_negative() {
        let d = minkowski(&f1(), &f2(), 0.5).unwrap();
        assert!(d >= 0.0 && d.is_finite());
    }

    #[test]
    fn test_minkowski_rejects_bad_exponent() {
        for p in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                minkowski(&f1(), &f2(), p),
                Err(LabError::InvalidExponent { .. })
            ));
        }
        assert!(DistanceMetric::Minkowski(0.0).distance(&f1(), &f2()).is_err());
    }

    #[test]
    fn test_default_metric_is_euclidean() {
        let metric: DistanceMetric<f64> = DistanceMetric::default();
        assert_eq!(metric.distance(&f1(), &f2()).unwrap(), euclidean(&f1(), &f2()));
    }
}
