//! Descriptive statistics over a sequence of measured values.
//!
//! Variance is the sample variance (divisor `n - 1`). For fewer than two
//! values the variance and standard deviation are reported as `0.0` rather
//! than undefined, and every field of an empty summary is zero.

use serde::{Deserialize, Serialize};

/// Summary statistics for one population of values.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DescriptiveStats {
    /// Number of values summarized.
    pub count: u64,
    /// Arithmetic mean.
    pub mean: f64,
    /// Sample variance (`n - 1` divisor), zero when `count < 2`.
    pub variance: f64,
    /// Square root of `variance`.
    pub std_dev: f64,
    /// Smallest value, zero when empty.
    pub min: f64,
    /// Largest value, zero when empty.
    pub max: f64,
}

impl DescriptiveStats {
    /// Summarize a slice of values.
    pub fn from_values(values: &[f64]) -> Self {
        Self::from_iter(values.iter().copied())
    }
}

impl FromIterator<f64> for DescriptiveStats {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let values: Vec<f64> = iter.into_iter().collect();
        if values.is_empty() {
            return Self::default();
        }

        let count = values.len() as u64;
        let mut sum = 0.0;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &v in &values {
            sum += v;
            min = min.min(v);
            max = max.max(v);
        }
        let mean = sum / count as f64;

        let (variance, std_dev) = if count >= 2 {
            let squares: f64 = values.iter().map(|v| (v - mean) * (v - mean)).sum();
            let variance = squares / (count - 1) as f64;
            (variance, variance.sqrt())
        } else {
            (0.0, 0.0)
        };

        Self {
            count,
            mean,
            variance,
            std_dev,
            min,
            max,
        }
    }
}

/// Arithmetic mean of a slice, zero for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        if a.is_nan() || b.is_nan() {
            return false;
        }
        (a - b).abs() <= tol
    }

    #[test]
    fn empty_is_all_zero() {
        let stats = DescriptiveStats::from_values(&[]);
        assert_eq!(stats, DescriptiveStats::default());
    }

    #[test]
    fn single_value_has_zero_spread() {
        let stats = DescriptiveStats::from_values(&[7.5]);
        assert_eq!(stats.count, 1);
        assert_eq!(stats.mean, 7.5);
        assert_eq!(stats.variance, 0.0);
        assert_eq!(stats.std_dev, 0.0);
        assert_eq!(stats.min, 7.5);
        assert_eq!(stats.max, 7.5);
    }

    #[test]
    fn sample_variance_uses_n_minus_one() {
        let stats = DescriptiveStats::from_values(&[10.0, 12.0, 14.0, 16.0, 18.0]);
        assert_eq!(stats.count, 5);
        assert!(approx_eq(stats.mean, 14.0, 1e-12));
        assert!(approx_eq(stats.variance, 10.0, 1e-12));
        assert!(approx_eq(stats.std_dev, 10.0f64.sqrt(), 1e-12));
        assert_eq!(stats.min, 10.0);
        assert_eq!(stats.max, 18.0);
    }

    #[test]
    fn identical_values_have_zero_variance() {
        let stats = DescriptiveStats::from_values(&[5.0, 5.0, 5.0]);
        assert_eq!(stats.mean, 5.0);
        assert_eq!(stats.variance, 0.0);
        assert_eq!(stats.std_dev, 0.0);
    }

    #[test]
    fn collects_from_iterator() {
        let stats: DescriptiveStats = [1.0, 2.0, 3.0].into_iter().collect();
        assert_eq!(stats.count, 3);
        assert!(approx_eq(stats.mean, 2.0, 1e-12));
        assert!(approx_eq(stats.variance, 1.0, 1e-12));
    }

    #[test]
    fn mean_of_empty_slice_is_zero() {
        assert_eq!(mean(&[]), 0.0);
        assert!(approx_eq(mean(&[20.0, 21.0]), 20.5, 1e-12));
    }
}
