use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;
use wr_common::{GatewayCode, SensorCode};

use crate::histogram::Histogram;

/// Activity of the sensors behind one gateway over a time window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GatewayReport {
    pub gateway_code: GatewayCode,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub total_count: u64,
    pub most_active_sensors: Vec<SensorCode>,
    pub least_active_sensors: Vec<SensorCode>,
    /// Percentage of the gateway's samples produced by each sensor.
    pub sensors_load_ratio: BTreeMap<SensorCode, f64>,
    /// Sensors whose mean is off the gateway's expected mean.
    pub outlier_sensors: Vec<SensorCode>,
    pub battery_charge_percentage: f64,
    /// Histogram of the gaps between consecutive samples.
    pub histogram: Histogram<Duration>,
}

impl GatewayReport {
    pub fn empty(
        gateway_code: GatewayCode,
        start_date: Option<String>,
        end_date: Option<String>,
        battery_charge_percentage: f64,
    ) -> Self {
        Self {
            gateway_code,
            start_date,
            end_date,
            total_count: 0,
            most_active_sensors: Vec::new(),
            least_active_sensors: Vec::new(),
            sensors_load_ratio: BTreeMap::new(),
            outlier_sensors: Vec::new(),
            battery_charge_percentage,
            histogram: Histogram::empty(),
        }
    }
}
