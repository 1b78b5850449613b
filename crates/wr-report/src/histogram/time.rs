//! Adaptive hourly/daily bucketing of timestamps.

use chrono::{NaiveDateTime, NaiveTime, TimeDelta, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use wr_common::ReportWindow;

use super::Histogram;
use crate::interval::Interval;

/// Width of the buckets of a time histogram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeGranularity {
    Hourly,
    Daily,
}

impl TimeGranularity {
    /// Hourly when the span covers at most `hourly_limit_hours` whole hours,
    /// daily otherwise.
    pub fn for_span(start: NaiveDateTime, end: NaiveDateTime, hourly_limit_hours: i64) -> Self {
        if (end - start).num_hours() <= hourly_limit_hours {
            TimeGranularity::Hourly
        } else {
            TimeGranularity::Daily
        }
    }

    pub fn unit(&self) -> TimeDelta {
        match self {
            TimeGranularity::Hourly => TimeDelta::hours(1),
            TimeGranularity::Daily => TimeDelta::days(1),
        }
    }

    /// Start of the unit containing `ts`.
    pub fn floor(&self, ts: NaiveDateTime) -> NaiveDateTime {
        match self {
            TimeGranularity::Hourly => ts
                .with_minute(0)
                .and_then(|t| t.with_second(0))
                .and_then(|t| t.with_nanosecond(0))
                .unwrap_or(ts),
            TimeGranularity::Daily => ts.date().and_time(NaiveTime::MIN),
        }
    }
}

impl fmt::Display for TimeGranularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeGranularity::Hourly => write!(f, "hourly"),
            TimeGranularity::Daily => write!(f, "daily"),
        }
    }
}

/// Time histogram together with the granularity it was built with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeHistogram {
    pub granularity: TimeGranularity,
    pub histogram: Histogram<NaiveDateTime>,
}

/// Buckets covering `[start, end]` at the given granularity.
///
/// Each bucket naturally spans `[floor(t), floor(t) + unit - 1ns]`. The first
/// bucket starts at `start` itself. The first bucket whose natural end
/// reaches `end` is clamped to `end`, includes it, and is the last one.
/// Every earlier bucket excludes its end.
pub fn time_buckets(
    start: NaiveDateTime,
    end: NaiveDateTime,
    granularity: TimeGranularity,
) -> Vec<Interval<NaiveDateTime>> {
    let unit = granularity.unit();
    let last_nano = unit - TimeDelta::nanoseconds(1);
    let mut buckets = Vec::new();
    let mut current = start;

    loop {
        let floor = granularity.floor(current);
        let bucket_start = if buckets.is_empty() { start } else { floor };
        let natural_end = floor.checked_add_signed(last_nano);

        match natural_end {
            Some(natural_end) if natural_end < end => {
                buckets.push(Interval::half_open(bucket_start, natural_end));
            }
            _ => {
                buckets.push(Interval::closed(bucket_start, end));
                break;
            }
        }

        match floor.checked_add_signed(unit) {
            Some(next) => current = next,
            None => break,
        }
    }

    buckets
}

/// Count `timestamps` into hourly or daily buckets.
///
/// The effective range is the window's bounds where present and the
/// observed extent of `timestamps` otherwise. Returns `None` for no
/// timestamps or an empty effective range.
pub fn adaptive_time_histogram(
    timestamps: &[NaiveDateTime],
    window: &ReportWindow,
    hourly_limit_hours: i64,
) -> Option<TimeHistogram> {
    let observed_min = timestamps.iter().min()?;
    let observed_max = timestamps.iter().max()?;

    let start = window.start.unwrap_or(*observed_min);
    let end = window.end.unwrap_or(*observed_max);
    if start > end {
        return None;
    }

    let granularity = TimeGranularity::for_span(start, end, hourly_limit_hours);
    let mut histogram = Histogram::from_intervals(time_buckets(start, end, granularity));
    histogram.record_all(timestamps.iter().copied());

    Some(TimeHistogram {
        granularity,
        histogram,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(day: u32, h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, day)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn granularity_switches_after_limit() {
        assert_eq!(
            TimeGranularity::for_span(at(1, 0, 0), at(3, 0, 0), 48),
            TimeGranularity::Hourly
        );
        assert_eq!(
            TimeGranularity::for_span(at(1, 0, 0), at(3, 1, 0), 48),
            TimeGranularity::Daily
        );
        // 48h59m truncates to 48 whole hours.
        assert_eq!(
            TimeGranularity::for_span(at(1, 0, 0), at(3, 0, 59), 48),
            TimeGranularity::Hourly
        );
    }

    #[test]
    fn floor_per_granularity() {
        let ts = at(5, 13, 42);
        assert_eq!(TimeGranularity::Hourly.floor(ts), at(5, 13, 0));
        assert_eq!(TimeGranularity::Daily.floor(ts), at(5, 0, 0));
    }

    #[test]
    fn first_bucket_starts_at_requested_start() {
        let buckets = time_buckets(at(1, 10, 30), at(1, 13, 15), TimeGranularity::Hourly);
        assert_eq!(buckets.len(), 4);
        assert_eq!(buckets[0].start, at(1, 10, 30));
        assert!(!buckets[0].include_end);
        assert_eq!(buckets[1].start, at(1, 11, 0));
        assert_eq!(buckets[3].start, at(1, 13, 0));
        assert_eq!(buckets[3].end, at(1, 13, 15));
        assert!(buckets[3].include_end);
    }

    #[test]
    fn end_on_unit_boundary_opens_final_bucket() {
        let buckets = time_buckets(at(1, 10, 0), at(1, 12, 0), TimeGranularity::Hourly);
        assert_eq!(buckets.len(), 3);
        assert_eq!(buckets[2], Interval::closed(at(1, 12, 0), at(1, 12, 0)));
    }

    #[test]
    fn equal_bounds_give_one_inclusive_bucket() {
        let buckets = time_buckets(at(1, 10, 5), at(1, 10, 5), TimeGranularity::Hourly);
        assert_eq!(buckets, vec![Interval::closed(at(1, 10, 5), at(1, 10, 5))]);
    }

    #[test]
    fn adaptive_histogram_counts_every_timestamp() {
        let ts = vec![at(1, 0, 10), at(1, 0, 50), at(1, 5, 0), at(2, 6, 0)];
        let h = adaptive_time_histogram(&ts, &ReportWindow::unbounded(), 48).unwrap();
        assert_eq!(h.granularity, TimeGranularity::Hourly);
        assert_eq!(h.histogram.total(), 4);
        assert_eq!(h.histogram.bins()[0].count, 2);
        assert_eq!(h.histogram.bins()[0].interval.start, at(1, 0, 10));
    }

    #[test]
    fn adaptive_histogram_uses_window_bounds() {
        let window = ReportWindow::new(Some(at(1, 0, 0)), Some(at(5, 12, 0))).unwrap();
        let ts = vec![at(2, 3, 0), at(4, 8, 0)];
        let h = adaptive_time_histogram(&ts, &window, 48).unwrap();
        assert_eq!(h.granularity, TimeGranularity::Daily);
        assert_eq!(h.histogram.len(), 5);
        assert_eq!(h.histogram.bins()[4].interval.end, at(5, 12, 0));
        assert_eq!(h.histogram.total(), 2);
    }

    #[test]
    fn no_timestamps_no_histogram() {
        assert!(adaptive_time_histogram(&[], &ReportWindow::unbounded(), 48).is_none());
    }
}
