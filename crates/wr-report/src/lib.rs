//! Statistical report engine for Weather Report.
//!
//! Turns a time-ordered sequence of measured samples into per-sensor,
//! per-gateway, and per-network reports.
//!
//! # Building blocks
//!
//! - [`Interval`]: one containment rule shared by every histogram domain
//! - [`Histogram`]: ordered buckets with counts
//! - [`equal_width`]: fixed bucket count over values or durations
//! - [`adaptive_time_histogram`]: hourly or daily buckets over timestamps
//! - [`ActivityRanking`]: most/least active members and load ratios
//!
//! # Reports
//!
//! - Sensor: descriptive statistics, deviation outliers, value histogram
//! - Gateway: sensor ranking, reference outliers, inter-arrival histogram
//! - Network: gateway ranking, adaptive time histogram
//!
//! # Example
//!
//! ```
//! use wr_common::{ReportWindow, Sample, SensorCode};
//! use wr_report::{ReportAssembler, ReportConfig, ReportRequest};
//!
//! let assembler = ReportAssembler::new(ReportConfig::default());
//! let request = ReportRequest::new(SensorCode::new("S_000001"), None, None, ReportWindow::unbounded());
//! let report = assembler.sensor_report(&request, &[]);
//! assert_eq!(report.total_count, 0);
//! ```
//!
//! Assembly never fails: empty or degenerate input yields zeroed fields and
//! empty histograms.

pub mod assembler;
pub mod config;
pub mod error;
pub mod histogram;
pub mod interval;
pub mod ranking;
pub mod reports;
pub mod request;

pub use assembler::ReportAssembler;
pub use config::ReportConfig;
pub use error::{ReportError, Result};
pub use histogram::{
    adaptive_time_histogram, equal_width, Bin, BucketDomain, Histogram, TimeGranularity,
    TimeHistogram,
};
pub use interval::Interval;
pub use ranking::ActivityRanking;
pub use reports::{GatewayReport, NetworkReport, SensorReport};
pub use request::ReportRequest;
