//! Descriptive statistics over a numeric sample set.

mod aggregate;
mod error;

use tracing::debug;

pub use aggregate::{geometric_mean, harmonic_mean, mean, median, mode_set, standard_deviation};
pub use error::StatsError;

/// Samples in the order they were read. Not modified once loaded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    samples: Vec<f64>,
}

impl Dataset {
    pub fn new(samples: Vec<f64>) -> Self {
        Self { samples }
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Slots allocated in the backing buffer but not holding a sample.
    pub fn unused_capacity(&self) -> usize {
        self.samples.capacity() - self.samples.len()
    }
}

/// All aggregates for one dataset.
///
/// The geometric and harmonic means keep their own outcome so that one
/// undefined mean does not hide the rest of the report.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub std_dev: f64,
    pub modes: Vec<f64>,
    pub geometric_mean: Result<f64, StatsError>,
    pub harmonic_mean: Result<f64, StatsError>,
    pub unused_capacity: usize,
}

impl Summary {
    pub fn compute(dataset: &Dataset) -> Result<Self, StatsError> {
        let samples = dataset.samples();
        let mean = mean(samples)?;
        let summary = Self {
            count: samples.len(),
            mean,
            median: median(samples)?,
            std_dev: standard_deviation(samples, mean)?,
            modes: mode_set(samples),
            geometric_mean: geometric_mean(samples),
            harmonic_mean: harmonic_mean(samples),
            unused_capacity: dataset.unused_capacity(),
        };
        debug!(
            count = summary.count,
            modes = summary.modes.len(),
            "summary computed"
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn summary_keeps_undefined_means_explicit() {
        let mut samples = Vec::with_capacity(8);
        samples.extend([1.0, -1.0, 2.0, 2.0]);
        let summary = Summary::compute(&Dataset::new(samples)).unwrap();
        assert_eq!(summary.count, 4);
        assert_eq!(summary.mean, 1.0);
        assert_eq!(summary.median, 1.5);
        assert_eq!(summary.modes, vec![2.0]);
        assert_eq!(
            summary.geometric_mean,
            Err(StatsError::NonPositiveValue(-1.0))
        );
        assert!(summary.harmonic_mean.is_ok());
        assert!(summary.unused_capacity >= 4);
    }

    #[test]
    fn empty_dataset_has_no_summary() {
        assert_eq!(
            Summary::compute(&Dataset::default()),
            Err(StatsError::EmptyDataset)
        );
    }
}
