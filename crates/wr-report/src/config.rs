//! Report configuration types.

use serde::{Deserialize, Serialize};

use crate::error::{ReportError, Result};

/// Tunables of the report engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Schema version.
    #[serde(default = "default_schema_version")]
    pub schema_version: String,
    /// Bucket count of value and inter-arrival histograms.
    #[serde(default = "default_bucket_count")]
    pub bucket_count: usize,
    /// Longest span, in whole hours, that still gets hourly time buckets.
    #[serde(default = "default_hourly_span_limit")]
    pub hourly_span_limit_hours: i64,
    /// Distance in standard deviations at which a value is an outlier.
    #[serde(default = "default_outlier_sigma")]
    pub outlier_sigma: f64,
}

fn default_schema_version() -> String {
    "1.0.0".to_string()
}

fn default_bucket_count() -> usize {
    20
}

fn default_hourly_span_limit() -> i64 {
    48
}

fn default_outlier_sigma() -> f64 {
    wr_math::OUTLIER_SIGMA
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            bucket_count: default_bucket_count(),
            hourly_span_limit_hours: default_hourly_span_limit(),
            outlier_sigma: default_outlier_sigma(),
        }
    }
}

impl ReportConfig {
    /// Create a new report configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the histogram bucket count.
    pub fn with_bucket_count(mut self, buckets: usize) -> Self {
        self.bucket_count = buckets;
        self
    }

    /// Set the longest span that still uses hourly buckets.
    pub fn with_hourly_span_limit(mut self, hours: i64) -> Self {
        self.hourly_span_limit_hours = hours;
        self
    }

    /// Set the outlier distance in standard deviations.
    pub fn with_outlier_sigma(mut self, sigma: f64) -> Self {
        self.outlier_sigma = sigma;
        self
    }

    /// Check that every tunable is usable.
    pub fn validate(&self) -> Result<()> {
        if self.bucket_count == 0 {
            return Err(ReportError::InvalidConfig(
                "bucket_count must be at least 1".to_string(),
            ));
        }
        if self.hourly_span_limit_hours < 0 {
            return Err(ReportError::InvalidConfig(format!(
                "hourly_span_limit_hours must be non-negative, got {}",
                self.hourly_span_limit_hours
            )));
        }
        if !(self.outlier_sigma.is_finite() && self.outlier_sigma > 0.0) {
            return Err(ReportError::InvalidConfig(format!(
                "outlier_sigma must be positive, got {}",
                self.outlier_sigma
            )));
        }
        Ok(())
    }

    /// Load and validate configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: ReportConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
