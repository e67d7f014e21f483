use iris_lab_core::{Float, FlowerRecord, LabError, LabResult, Measurement};
use iris_lab_metrics::DistanceMetric;
use tracing::debug;

use crate::classifier::{Classifier, Species};

/// Neighbour count used by `NearestNeighborClassifier::default`.
pub const DEFAULT_K: usize = 3;

/// K-nearest-neighbour vote over a labelled reference set.
pub struct NearestNeighborClassifier<T: Float> {
    pub k: usize,
    pub metric: DistanceMetric<T>,
    reference: Vec<(FlowerRecord<T>, Species)>,
}

impl<T: Float> NearestNeighborClassifier<T> {
    pub fn new(k: usize, metric: DistanceMetric<T>) -> Self {
        NearestNeighborClassifier {
            k,
            metric,
            reference: Vec::new(),
        }
    }

    /// Store the reference records. Every label must name a species.
    pub fn fit(&mut self, records: &[FlowerRecord<T>]) -> LabResult<()> {
        if self.k == 0 {
            return Err(LabError::InvalidParameter("k must be at least 1".into()));
        }
        self.reference = records
            .iter()
            .map(|r| -> LabResult<_> { Ok((r.clone(), r.label().parse::<Species>()?)) })
            .collect::<LabResult<_>>()?;
        debug!(
            n_reference = self.reference.len(),
            k = self.k,
            "fitted nearest-neighbour classifier"
        );
        Ok(())
    }

    pub fn n_reference(&self) -> usize {
        self.reference.len()
    }
}

impl<T: Float> Default for NearestNeighborClassifier<T> {
    fn default() -> Self {
        Self::new(DEFAULT_K, DistanceMetric::Euclidean)
    }
}

impl<T: Float> Classifier<T> for NearestNeighborClassifier<T> {
    fn classify(&self, record: &FlowerRecord<T>) -> LabResult<Species> {
        if self.k == 0 {
            return Err(LabError::InvalidParameter("k must be at least 1".into()));
        }
        if self.reference.is_empty() {
            return Err(LabError::NotFitted);
        }
        for field in Measurement::ALL {
            let value = record.get(field);
            if !value.is_finite() {
                return Err(LabError::NonFiniteMeasurement { field, value: value.to_f64() });
            }
        }

        let mut dists: Vec<(f64, Species)> = self
            .reference
            .iter()
            .map(|(r, sp)| -> LabResult<_> {
                Ok((self.metric.distance(record, r)?.to_f64(), *sp))
            })
            .collect::<LabResult<_>>()?;
        dists.sort_by(|a, b| a.0.total_cmp(&b.0));

        // Majority vote; on a tie the species seen first (nearest) wins.
        let nearest = &dists[..self.k.min(dists.len())];
        let mut votes = [0usize; 3];
        let mut best = nearest[0].1;
        for &(_, sp) in nearest {
            votes[sp.index()] += 1;
            if votes[sp.index()] > votes[best.index()] {
                best = sp;
            }
        }
        debug!(species = %best, ?votes, "nearest-neighbour vote");
        Ok(best)
    }
}
