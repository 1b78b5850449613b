//! Outlier predicates.
//!
//! Two predicates share the [`within_k_sigma`] primitive but answer different
//! questions:
//!
//! - [`is_deviation_outlier`] tests one raw value against the statistics of
//!   its own population. A population without spread flags nothing.
//! - [`is_reference_outlier`] tests an aggregate mean against operator
//!   declared expectations. There is no spread guard: an expected standard
//!   deviation of zero flags every mean that is not exactly on target.

use crate::math::moments::DescriptiveStats;
use serde::{Deserialize, Serialize};

/// Default distance, in standard deviations, at which a value is an outlier.
pub const OUTLIER_SIGMA: f64 = 2.0;

/// Returns true when `value` lies strictly closer than `k * sigma` to `center`.
pub fn within_k_sigma(value: f64, center: f64, sigma: f64, k: f64) -> bool {
    (value - center).abs() < k * sigma
}

/// A raw value is a deviation outlier when its own population has spread and
/// the value sits at least `k` standard deviations from the population mean.
pub fn is_deviation_outlier(value: f64, population: &DescriptiveStats, k: f64) -> bool {
    population.std_dev > 0.0 && !within_k_sigma(value, population.mean, population.std_dev, k)
}

/// Operator-declared expectations for the values reported under a gateway.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ExpectedStats {
    /// Expected mean, zero when not configured.
    #[serde(default)]
    pub expected_mean: f64,
    /// Expected standard deviation, zero when not configured.
    #[serde(default)]
    pub expected_std_dev: f64,
}

impl ExpectedStats {
    /// Create expectations from explicit values.
    pub fn new(expected_mean: f64, expected_std_dev: f64) -> Self {
        Self {
            expected_mean,
            expected_std_dev,
        }
    }
}

/// An aggregate mean is a reference outlier when it sits at least `k`
/// expected standard deviations away from the expected mean.
pub fn is_reference_outlier(subject_mean: f64, expected: &ExpectedStats, k: f64) -> bool {
    !within_k_sigma(
        subject_mean,
        expected.expected_mean,
        expected.expected_std_dev,
        k,
    )
}
