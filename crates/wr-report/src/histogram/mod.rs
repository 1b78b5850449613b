//! Histograms over ordered domains.
//!
//! A [`Histogram`] is a list of [`Bin`]s ordered by interval start. The bins
//! of one histogram are contiguous and non-overlapping, so a value lands in
//! at most one of them.

mod equal_width;
mod time;

pub use equal_width::{equal_width, BucketDomain};
pub use time::{adaptive_time_histogram, time_buckets, TimeGranularity, TimeHistogram};

use serde::{Deserialize, Serialize};

use crate::interval::Interval;

/// One bucket and the number of values it received.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bin<T> {
    pub interval: Interval<T>,
    pub count: u64,
}

/// Ordered buckets with counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Histogram<T> {
    bins: Vec<Bin<T>>,
}

impl<T> Default for Histogram<T> {
    fn default() -> Self {
        Self { bins: Vec::new() }
    }
}

impl<T: PartialOrd + Copy> Histogram<T> {
    /// A histogram without buckets.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Zero-count bins over the given intervals, which must be ordered by
    /// start and must not overlap.
    pub fn from_intervals(intervals: impl IntoIterator<Item = Interval<T>>) -> Self {
        let bins: Vec<Bin<T>> = intervals
            .into_iter()
            .map(|interval| Bin { interval, count: 0 })
            .collect();
        debug_assert!(
            bins.windows(2)
                .all(|w| w[0].interval.start <= w[1].interval.start),
            "histogram bins out of order"
        );
        Self { bins }
    }

    /// Count `value` in the first bin that contains it.
    ///
    /// Returns false when no bin contains the value. Bins are located by
    /// binary search on their start; only bins sharing the nearest start
    /// at or below `value` are inspected.
    pub fn record(&mut self, value: T) -> bool {
        let upper = self.bins.partition_point(|b| b.interval.start <= value);
        let Some(last) = upper.checked_sub(1) else {
            return false;
        };
        let start = self.bins[last].interval.start;
        let lower = self.bins[..upper].partition_point(|b| b.interval.start < start);
        match self.bins[lower..upper]
            .iter_mut()
            .find(|b| b.interval.contains(value))
        {
            Some(bin) => {
                bin.count += 1;
                true
            }
            None => false,
        }
    }

    /// Count every value of an iterator.
    pub fn record_all(&mut self, values: impl IntoIterator<Item = T>) {
        for value in values {
            self.record(value);
        }
    }

    pub fn bins(&self) -> &[Bin<T>] {
        &self.bins
    }

    pub fn len(&self) -> usize {
        self.bins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Sum of all bin counts.
    pub fn total(&self) -> u64 {
        self.bins.iter().map(|b| b.count).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Bin<T>> {
        self.bins.iter()
    }
}
