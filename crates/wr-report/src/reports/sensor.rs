use serde::{Deserialize, Serialize};
use wr_common::{Sample, SensorCode};
use wr_math::DescriptiveStats;

use crate::histogram::Histogram;

/// Statistics of one sensor over a time window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorReport {
    pub sensor_code: SensorCode,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub total_count: u64,
    /// Statistics over every sample, outliers included.
    pub stats: DescriptiveStats,
    /// Samples at least `outlier_sigma` standard deviations from the mean.
    pub outliers: Vec<Sample>,
    /// Value histogram over the samples that are not outliers.
    pub histogram: Histogram<f64>,
}

impl SensorReport {
    pub fn empty(
        sensor_code: SensorCode,
        start_date: Option<String>,
        end_date: Option<String>,
    ) -> Self {
        Self {
            sensor_code,
            start_date,
            end_date,
            total_count: 0,
            stats: DescriptiveStats::default(),
            outliers: Vec::new(),
            histogram: Histogram::empty(),
        }
    }
}
