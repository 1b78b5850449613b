use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use wr_common::{GatewayCode, NetworkCode};

use crate::histogram::{Histogram, TimeGranularity};

/// Activity of the gateways of one network over a time window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkReport {
    pub network_code: NetworkCode,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub total_count: u64,
    pub most_active_gateways: Vec<GatewayCode>,
    pub least_active_gateways: Vec<GatewayCode>,
    pub gateways_load_ratio: BTreeMap<GatewayCode, f64>,
    /// Bucket width of `histogram`; absent when there is no histogram.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub granularity: Option<TimeGranularity>,
    /// Sample counts per hour or per day.
    pub histogram: Histogram<NaiveDateTime>,
}

impl NetworkReport {
    pub fn empty(
        network_code: NetworkCode,
        start_date: Option<String>,
        end_date: Option<String>,
    ) -> Self {
        Self {
            network_code,
            start_date,
            end_date,
            total_count: 0,
            most_active_gateways: Vec::new(),
            least_active_gateways: Vec::new(),
            gateways_load_ratio: BTreeMap::new(),
            granularity: None,
            histogram: Histogram::empty(),
        }
    }
}
