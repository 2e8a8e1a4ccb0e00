use thiserror::Error;

/// Why an aggregate has no defined value for a dataset.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StatsError {
    #[error("dataset is empty")]
    EmptyDataset,
    #[error("value {0} is not positive")]
    NonPositiveValue(f64),
    #[error("dataset contains a zero")]
    ZeroValue,
    #[error("reciprocals sum to zero")]
    ZeroReciprocalSum,
}
