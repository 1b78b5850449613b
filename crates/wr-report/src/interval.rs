//! Ranges over an ordered domain.
//!
//! Every histogram bucket, whether it spans values, durations, or
//! timestamps, is an [`Interval`] and uses the same containment rule:
//! `start <= v` and `v < end`, or `v <= end` when the end is included.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A range `[start, end)` or `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Interval<T> {
    pub start: T,
    pub end: T,
    pub include_end: bool,
}

impl<T: PartialOrd + Copy> Interval<T> {
    /// `[start, end)`.
    pub fn half_open(start: T, end: T) -> Self {
        debug_assert!(start <= end, "interval start after end");
        Self {
            start,
            end,
            include_end: false,
        }
    }

    /// `[start, end]`.
    pub fn closed(start: T, end: T) -> Self {
        debug_assert!(start <= end, "interval start after end");
        Self {
            start,
            end,
            include_end: true,
        }
    }

    /// Returns true when `value` falls inside the interval.
    pub fn contains(&self, value: T) -> bool {
        if value < self.start {
            return false;
        }
        if self.include_end {
            value <= self.end
        } else {
            value < self.end
        }
    }
}

impl<T: fmt::Debug> fmt::Display for Interval<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let close = if self.include_end { ']' } else { ')' };
        write!(f, "[{:?}, {:?}{}", self.start, self.end, close)
    }
}
