//! Equal-width bucketing of values and durations.

use std::time::Duration;

use super::Histogram;
use crate::interval::Interval;

/// A domain that can be split into equal-width buckets.
pub trait BucketDomain: Copy + PartialOrd {
    /// Lower edge of bucket `index` when `[min, max]` is cut into `buckets`
    /// equal parts.
    fn bucket_edge(min: Self, max: Self, index: usize, buckets: usize) -> Self;
}

impl BucketDomain for f64 {
    fn bucket_edge(min: f64, max: f64, index: usize, buckets: usize) -> f64 {
        let (i, n) = (index as f64, buckets as f64);
        let width = (max - min) / n;
        if width.is_finite() {
            min + i * width
        } else {
            // `max - min` overflows; step in half-widths instead.
            let half = (max / 2.0 - min / 2.0) / n;
            min + i * half + i * half
        }
    }
}

impl BucketDomain for Duration {
    // Edges are truncated to whole nanoseconds.
    fn bucket_edge(min: Duration, max: Duration, index: usize, buckets: usize) -> Duration {
        let step = (max - min).as_nanos() as f64 / buckets as f64;
        min + Duration::from_nanos((index as f64 * step) as u64)
    }
}

/// Split the extent of `values` into `buckets` equal-width bins and count
/// every value.
///
/// All bins are `[lo, hi)` except the last, which is `[lo, max]`. When all
/// values are equal the result is a single `[v, v]` bin. An empty input
/// gives an empty histogram.
pub fn equal_width<T: BucketDomain>(values: &[T], buckets: usize) -> Histogram<T> {
    let Some(&first) = values.first() else {
        return Histogram::empty();
    };

    let (min, max) = values.iter().fold((first, first), |(lo, hi), &v| {
        (if v < lo { v } else { lo }, if v > hi { v } else { hi })
    });

    let mut histogram = if min == max {
        Histogram::from_intervals([Interval::closed(min, max)])
    } else {
        let buckets = buckets.max(1);
        Histogram::from_intervals((0..buckets).map(|i| {
            let start = T::bucket_edge(min, max, i, buckets);
            if i + 1 == buckets {
                Interval::closed(start, max)
            } else {
                Interval::half_open(start, T::bucket_edge(min, max, i + 1, buckets))
            }
        }))
    };

    histogram.record_all(values.iter().copied());
    histogram
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn empty_values_give_empty_histogram() {
        let h = equal_width::<f64>(&[], 20);
        assert!(h.is_empty());
    }

    #[test]
    fn twenty_buckets_over_range() {
        let h = equal_width(&[10.0, 12.0, 14.0, 16.0, 18.0], 20);
        assert_eq!(h.len(), 20);
        assert_eq!(h.total(), 5);

        let first = h.bins()[0].interval;
        assert_eq!(first.start, 10.0);
        assert!(approx(first.end, 10.4));
        assert!(!first.include_end);

        let last = h.bins()[19].interval;
        assert!(approx(last.start, 17.6));
        assert_eq!(last.end, 18.0);
        assert!(last.include_end);
        assert_eq!(h.bins()[19].count, 1);
    }

    #[test]
    fn equal_values_collapse_to_one_bucket() {
        let h = equal_width(&[5.0, 5.0, 5.0], 20);
        assert_eq!(h.len(), 1);
        assert_eq!(h.bins()[0].interval, Interval::closed(5.0, 5.0));
        assert_eq!(h.bins()[0].count, 3);
    }

    #[test]
    fn single_value_is_one_bucket() {
        let h = equal_width(&[42.0], 20);
        assert_eq!(h.len(), 1);
        assert_eq!(h.total(), 1);
    }

    #[test]
    fn buckets_are_contiguous() {
        let h = equal_width(&[-3.0, 0.5, 7.25, 9.0], 7);
        for pair in h.bins().windows(2) {
            assert_eq!(pair[0].interval.end, pair[1].interval.start);
        }
    }

    #[test]
    fn extreme_finite_bounds_stay_finite() {
        for (lo, hi) in [(-1.7e308, 1.7e308), (-f64::MAX, f64::MAX)] {
            let h = equal_width(&[lo, 0.0, hi], 20);
            assert_eq!(h.len(), 20);
            assert_eq!(h.total(), 3);

            let bins = h.bins();
            assert_eq!(bins[0].interval.start, lo);
            assert_eq!(bins[19].interval.end, hi);
            for pair in bins.windows(2) {
                assert!(pair[0].interval.start.is_finite());
                assert!(pair[0].interval.start < pair[1].interval.start);
                assert_eq!(pair[0].interval.end, pair[1].interval.start);
            }
        }
    }

    #[test]
    fn durations_use_nanosecond_edges() {
        let gaps = [
            Duration::from_secs(10),
            Duration::from_secs(30),
            Duration::from_secs(20),
        ];
        let h = equal_width(&gaps, 4);
        assert_eq!(h.len(), 4);
        assert_eq!(h.bins()[0].interval.start, Duration::from_secs(10));
        assert_eq!(h.bins()[1].interval.start, Duration::from_secs(15));
        assert_eq!(h.bins()[3].interval.end, Duration::from_secs(30));
        let counts: Vec<u64> = h.iter().map(|b| b.count).collect();
        assert_eq!(counts, vec![1, 0, 1, 1]);
    }

    #[test]
    fn equal_durations_collapse() {
        let gaps = [Duration::from_secs(60); 4];
        let h = equal_width(&gaps, 20);
        assert_eq!(h.len(), 1);
        assert_eq!(h.bins()[0].count, 4);
    }
}
