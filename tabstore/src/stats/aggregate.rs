use core::cmp::Ordering;

use crate::stats::StatsError;

fn ensure_non_empty(samples: &[f64]) -> Result<(), StatsError> {
    if samples.is_empty() {
        return Err(StatsError::EmptyDataset);
    }
    Ok(())
}

fn sorted(samples: &[f64]) -> Vec<f64> {
    let mut out = samples.to_vec();
    out.sort_by(f64::total_cmp);
    out
}

pub fn mean(samples: &[f64]) -> Result<f64, StatsError> {
    ensure_non_empty(samples)?;
    Ok(samples.iter().sum::<f64>() / samples.len() as f64)
}

pub fn median(samples: &[f64]) -> Result<f64, StatsError> {
    ensure_non_empty(samples)?;
    let data = sorted(samples);
    let mid = data.len() / 2;
    if data.len() % 2 == 0 {
        Ok((data[mid - 1] + data[mid]) / 2.0)
    } else {
        Ok(data[mid])
    }
}

/// Population standard deviation around a precomputed `mean` (divides by N).
pub fn standard_deviation(samples: &[f64], mean: f64) -> Result<f64, StatsError> {
    ensure_non_empty(samples)?;
    let squared: f64 = samples.iter().map(|x| (x - mean).powi(2)).sum();
    Ok((squared / samples.len() as f64).sqrt())
}

/// Every value that occurs most often, ascending.
///
/// Empty when there are no samples or no value repeats.
pub fn mode_set(samples: &[f64]) -> Vec<f64> {
    let data = sorted(samples);
    let mut runs: Vec<(f64, usize)> = Vec::new();
    for x in data {
        match runs.last_mut() {
            Some((value, len)) if *value == x => *len += 1,
            _ => runs.push((x, 1)),
        }
    }

    let longest = runs.iter().map(|&(_, len)| len).max().unwrap_or(0);
    if longest < 2 {
        return Vec::new();
    }
    runs.into_iter()
        .filter(|&(_, len)| len == longest)
        .map(|(value, _)| value)
        .collect()
}

/// `exp(mean(ln x))`; defined only for strictly positive samples.
pub fn geometric_mean(samples: &[f64]) -> Result<f64, StatsError> {
    ensure_non_empty(samples)?;
    if let Some(&bad) = samples
        .iter()
        .find(|x| (**x).partial_cmp(&0.0) != Some(Ordering::Greater))
    {
        return Err(StatsError::NonPositiveValue(bad));
    }
    let log_sum: f64 = samples.iter().map(|x| x.ln()).sum();
    Ok((log_sum / samples.len() as f64).exp())
}

/// `n / sum(1/x)`; undefined when any sample is zero.
pub fn harmonic_mean(samples: &[f64]) -> Result<f64, StatsError> {
    ensure_non_empty(samples)?;
    if samples.iter().any(|&x| x == 0.0) {
        return Err(StatsError::ZeroValue);
    }
    let reciprocal_sum: f64 = samples.iter().map(|x| 1.0 / x).sum();
    if reciprocal_sum == 0.0 {
        return Err(StatsError::ZeroReciprocalSum);
    }
    Ok(samples.len() as f64 / reciprocal_sum)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn median_even_and_odd() {
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), Ok(2.5));
        assert_eq!(median(&[3.0, 1.0, 2.0]), Ok(2.0));
        assert_eq!(median(&[]), Err(StatsError::EmptyDataset));
    }

    #[test]
    fn mean_rejects_empty() {
        assert_eq!(mean(&[]), Err(StatsError::EmptyDataset));
        assert_eq!(mean(&[1.0, 2.0, 6.0]), Ok(3.0));
    }

    #[test]
    fn stddev_is_population() {
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let m = mean(&data).unwrap();
        assert_eq!(standard_deviation(&data, m), Ok(2.0));
        assert_eq!(standard_deviation(&[], 0.0), Err(StatsError::EmptyDataset));
    }

    #[test]
    fn modes_with_ties() {
        assert_eq!(mode_set(&[3.0, 1.0, 2.0, 3.0, 2.0]), vec![2.0, 3.0]);
        assert_eq!(mode_set(&[1.0, 2.0, 3.0]), Vec::<f64>::new());
        assert_eq!(mode_set(&[]), Vec::<f64>::new());
        assert_eq!(mode_set(&[5.0, 5.0, 5.0, 1.0, 1.0]), vec![5.0]);
    }

    #[test]
    fn geometric() {
        assert!(close(geometric_mean(&[1.0, 2.0, 4.0]).unwrap(), 2.0));
        assert_eq!(
            geometric_mean(&[1.0, -1.0, 2.0]),
            Err(StatsError::NonPositiveValue(-1.0))
        );
        assert_eq!(
            geometric_mean(&[0.0]),
            Err(StatsError::NonPositiveValue(0.0))
        );
        assert_eq!(geometric_mean(&[]), Err(StatsError::EmptyDataset));
    }

    #[test]
    fn geometric_rejects_nan() {
        assert!(matches!(
            geometric_mean(&[1.0, f64::NAN, 4.0]),
            Err(StatsError::NonPositiveValue(v)) if v.is_nan()
        ));
    }

    #[test]
    fn harmonic() {
        assert!(close(harmonic_mean(&[1.0, 2.0, 4.0]).unwrap(), 3.0 / 1.75));
        assert_eq!(harmonic_mean(&[1.0, 0.0]), Err(StatsError::ZeroValue));
        assert_eq!(
            harmonic_mean(&[1.0, -1.0]),
            Err(StatsError::ZeroReciprocalSum)
        );
        assert_eq!(harmonic_mean(&[]), Err(StatsError::EmptyDataset));
    }
}
