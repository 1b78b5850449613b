//! Weather Report common types, subject codes, and errors.
//!
//! This crate provides foundational types shared across the workspace:
//! - Subject code types for sensors, gateways, and networks
//! - The measured `Sample` consumed by the statistics engine
//! - Report date parsing and request windows
//! - Common error types
//! - Output format specifications
//! - Gateway parameter loading and resolution

pub mod config;
pub mod error;
pub mod id;
pub mod output;
pub mod sample;
pub mod time;

pub use config::{ConfigSource, GatewayParameters, ParameterSet};
pub use error::{Error, ErrorCategory, Result};
pub use id::{GatewayCode, NetworkCode, SensorCode, SubjectKind};
pub use output::OutputFormat;
pub use sample::Sample;
pub use time::{parse_report_date, ReportWindow, REPORT_DATE_FORMAT};
