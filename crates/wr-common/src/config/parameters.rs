//! Per-gateway reference parameters.
//!
//! Operators declare, per gateway, the mean and standard deviation they
//! expect from its sensors and the last known battery charge. The file is a
//! JSON document:
//!
//! ```json
//! {
//!   "schema_version": "1.0.0",
//!   "gateways": {
//!     "GW_0001": { "expected_mean": 20.0, "expected_std_dev": 1.0, "battery_charge": 87.5 }
//!   }
//! }
//! ```
//!
//! Every value is optional and defaults to zero when read.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use wr_math::ExpectedStats;

use crate::error::{Error, Result};
use crate::id::GatewayCode;

/// Schema version for parameter files.
pub const PARAMETERS_SCHEMA_VERSION: &str = "1.0.0";

/// Parameter code of the expected mean.
pub const EXPECTED_MEAN_CODE: &str = "EXPECTED_MEAN";
/// Parameter code of the expected standard deviation.
pub const EXPECTED_STD_DEV_CODE: &str = "EXPECTED_STD_DEV";
/// Parameter code of the battery charge percentage.
pub const BATTERY_CHARGE_CODE: &str = "BATTERY_CHARGE";

/// Parameters declared for one gateway.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GatewayParameters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_mean: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_std_dev: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub battery_charge: Option<f64>,
}

impl GatewayParameters {
    /// Expected statistics with unset values read as zero.
    pub fn expected_stats(&self) -> ExpectedStats {
        ExpectedStats::new(
            self.expected_mean.unwrap_or(0.0),
            self.expected_std_dev.unwrap_or(0.0),
        )
    }

    /// Battery charge percentage, zero when unset.
    pub fn battery_charge_percentage(&self) -> f64 {
        self.battery_charge.unwrap_or(0.0)
    }

    fn validate(&self, gateway: &GatewayCode) -> Result<()> {
        for (code, value) in [
            (EXPECTED_MEAN_CODE, self.expected_mean),
            (EXPECTED_STD_DEV_CODE, self.expected_std_dev),
            (BATTERY_CHARGE_CODE, self.battery_charge),
        ] {
            if let Some(v) = value {
                if !v.is_finite() {
                    return Err(Error::InvalidParameters(format!(
                        "{}.{} must be finite, got {}",
                        gateway, code, v
                    )));
                }
            }
        }
        if let Some(std_dev) = self.expected_std_dev {
            if std_dev < 0.0 {
                return Err(Error::InvalidParameters(format!(
                    "{}.{} must be non-negative, got {}",
                    gateway, EXPECTED_STD_DEV_CODE, std_dev
                )));
            }
        }
        if let Some(charge) = self.battery_charge {
            if !(0.0..=100.0).contains(&charge) {
                return Err(Error::InvalidParameters(format!(
                    "{}.{} must be in [0, 100], got {}",
                    gateway, BATTERY_CHARGE_CODE, charge
                )));
            }
        }
        Ok(())
    }
}

/// All gateway parameters known to one deployment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterSet {
    #[serde(default = "default_schema_version")]
    pub schema_version: String,
    #[serde(default)]
    pub gateways: BTreeMap<GatewayCode, GatewayParameters>,
}

fn default_schema_version() -> String {
    PARAMETERS_SCHEMA_VERSION.to_string()
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            gateways: BTreeMap::new(),
        }
    }
}

impl ParameterSet {
    /// Parse and validate a parameters document.
    pub fn from_json(json: &str) -> Result<Self> {
        let set: ParameterSet = serde_json::from_str(json)?;
        set.validate()?;
        Ok(set)
    }

    /// Load and validate a parameters file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parameters of one gateway; unknown gateways read as all-defaults.
    pub fn get(&self, gateway: &GatewayCode) -> GatewayParameters {
        self.gateways.get(gateway).copied().unwrap_or_default()
    }

    /// Set the parameters of one gateway.
    pub fn insert(&mut self, gateway: impl Into<GatewayCode>, params: GatewayParameters) {
        self.gateways.insert(gateway.into(), params);
    }

    /// Validate every gateway entry.
    pub fn validate(&self) -> Result<()> {
        if self.schema_version != PARAMETERS_SCHEMA_VERSION {
            return Err(Error::Config(format!(
                "parameters schema version mismatch: expected {}, got {}",
                PARAMETERS_SCHEMA_VERSION, self.schema_version
            )));
        }
        for (gateway, params) in &self.gateways {
            params.validate(gateway)?;
        }
        Ok(())
    }
}
