//! The measured sample consumed by the statistics engine.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::id::{GatewayCode, NetworkCode, SensorCode};

/// One timestamped measurement tied to a sensor/gateway/network triple.
///
/// Samples carry no identity beyond their fields; two samples with equal
/// fields are both counted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub timestamp: NaiveDateTime,
    pub value: f64,
    pub sensor: SensorCode,
    pub gateway: GatewayCode,
    pub network: NetworkCode,
}

impl Sample {
    /// Create a new sample.
    pub fn new(
        timestamp: NaiveDateTime,
        value: f64,
        sensor: impl Into<SensorCode>,
        gateway: impl Into<GatewayCode>,
        network: impl Into<NetworkCode>,
    ) -> Self {
        Self {
            timestamp,
            value,
            sensor: sensor.into(),
            gateway: gateway.into(),
            network: network.into(),
        }
    }
}
