//! Property-based tests for wr-math statistics.
//!
//! Uses proptest to verify statistical invariants across many random inputs.

use proptest::prelude::*;
use wr_math::{is_deviation_outlier, within_k_sigma, DescriptiveStats, OUTLIER_SIGMA};

/// Tolerance for floating point comparisons.
const TOL: f64 = 1e-9;

fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol.max(tol * a.abs().max(b.abs()))
}

// ============================================================================
// DescriptiveStats properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Mean lies between min and max.
    #[test]
    fn mean_is_bounded(values in prop::collection::vec(-1e6..1e6f64, 1..200)) {
        let stats = DescriptiveStats::from_values(&values);
        prop_assert!(stats.min <= stats.mean + TOL);
        prop_assert!(stats.mean <= stats.max + TOL);
        prop_assert_eq!(stats.count, values.len() as u64);
    }

    /// Variance is never negative and stddev is its square root.
    #[test]
    fn variance_is_non_negative(values in prop::collection::vec(-1e3..1e3f64, 0..200)) {
        let stats = DescriptiveStats::from_values(&values);
        prop_assert!(stats.variance >= 0.0);
        prop_assert!(approx_eq(stats.std_dev * stats.std_dev, stats.variance, 1e-6));
        if values.len() < 2 {
            prop_assert_eq!(stats.variance, 0.0);
            prop_assert_eq!(stats.std_dev, 0.0);
        }
    }

    /// Shifting every value shifts the mean but leaves the spread unchanged.
    #[test]
    fn variance_is_shift_invariant(
        values in prop::collection::vec(-100.0..100.0f64, 2..50),
        shift in -1000.0..1000.0f64,
    ) {
        let base = DescriptiveStats::from_values(&values);
        let shifted: Vec<f64> = values.iter().map(|v| v + shift).collect();
        let moved = DescriptiveStats::from_values(&shifted);
        prop_assert!(approx_eq(moved.mean, base.mean + shift, 1e-6));
        prop_assert!(approx_eq(moved.variance, base.variance, 1e-6));
    }

    /// A constant population never flags a deviation outlier.
    #[test]
    fn constant_population_has_no_outliers(value in -1e6..1e6f64, n in 1usize..50) {
        let values = vec![value; n];
        let stats = DescriptiveStats::from_values(&values);
        prop_assert_eq!(stats.std_dev, 0.0);
        for v in &values {
            prop_assert!(!is_deviation_outlier(*v, &stats, OUTLIER_SIGMA));
        }
    }

    /// Values inside the band are never outliers; values outside always are.
    #[test]
    fn deviation_outlier_matches_band(
        values in prop::collection::vec(-100.0..100.0f64, 2..100),
        probe in -500.0..500.0f64,
    ) {
        let stats = DescriptiveStats::from_values(&values);
        let flagged = is_deviation_outlier(probe, &stats, OUTLIER_SIGMA);
        if stats.std_dev > 0.0 {
            prop_assert_eq!(flagged, !within_k_sigma(probe, stats.mean, stats.std_dev, OUTLIER_SIGMA));
        } else {
            prop_assert!(!flagged);
        }
    }
}
