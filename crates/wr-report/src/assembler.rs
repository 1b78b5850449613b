//! Report assembly.
//!
//! Each assembler takes the samples of one subject, already filtered to the
//! request window and sorted by timestamp, and builds the report value.

use std::collections::BTreeMap;
use std::time::Duration;
use tracing::debug;
use wr_common::{GatewayCode, GatewayParameters, NetworkCode, Sample, SensorCode};
use wr_math::{is_deviation_outlier, is_reference_outlier, mean, DescriptiveStats};

use crate::config::ReportConfig;
use crate::histogram::{adaptive_time_histogram, equal_width};
use crate::ranking::ActivityRanking;
use crate::reports::{GatewayReport, NetworkReport, SensorReport};
use crate::request::ReportRequest;

/// Builds sensor, gateway, and network reports.
#[derive(Debug, Clone, Default)]
pub struct ReportAssembler {
    config: ReportConfig,
}

impl ReportAssembler {
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    /// Statistics, deviation outliers, and value histogram of one sensor.
    pub fn sensor_report(
        &self,
        request: &ReportRequest<SensorCode>,
        samples: &[Sample],
    ) -> SensorReport {
        let mut report = SensorReport::empty(
            request.code.clone(),
            request.start_date.clone(),
            request.end_date.clone(),
        );
        if samples.is_empty() {
            debug!(sensor = %request.code, "No samples for sensor report");
            return report;
        }

        let stats = DescriptiveStats::from_iter(samples.iter().map(|s| s.value));
        let (outliers, inliers): (Vec<&Sample>, Vec<&Sample>) = samples
            .iter()
            .partition(|s| is_deviation_outlier(s.value, &stats, self.config.outlier_sigma));
        let inlier_values: Vec<f64> = inliers.iter().map(|s| s.value).collect();

        report.total_count = samples.len() as u64;
        report.stats = stats;
        report.outliers = outliers.into_iter().cloned().collect();
        report.histogram = equal_width(&inlier_values, self.config.bucket_count);

        debug!(
            sensor = %request.code,
            samples = report.total_count,
            outliers = report.outliers.len(),
            buckets = report.histogram.len(),
            "Assembled sensor report"
        );
        report
    }

    /// Sensor ranking, reference outliers, and inter-arrival histogram of one
    /// gateway.
    pub fn gateway_report(
        &self,
        request: &ReportRequest<GatewayCode>,
        samples: &[Sample],
        parameters: &GatewayParameters,
    ) -> GatewayReport {
        let mut report = GatewayReport::empty(
            request.code.clone(),
            request.start_date.clone(),
            request.end_date.clone(),
            parameters.battery_charge_percentage(),
        );
        if samples.is_empty() {
            debug!(gateway = %request.code, "No samples for gateway report");
            return report;
        }

        let ranking = ActivityRanking::from_keys(samples.iter().map(|s| s.sensor.clone()));
        report.total_count = ranking.total();
        report.most_active_sensors = ranking.most_active();
        report.least_active_sensors = ranking.least_active();
        report.sensors_load_ratio = ranking.load_ratios();

        if samples.len() >= 2 {
            let expected = parameters.expected_stats();
            report.outlier_sensors = sensor_means(samples)
                .into_iter()
                .filter(|(_, m)| is_reference_outlier(*m, &expected, self.config.outlier_sigma))
                .map(|(sensor, _)| sensor)
                .collect();

            let gaps = inter_arrival_gaps(samples);
            report.histogram = equal_width(&gaps, self.config.bucket_count);
        }

        debug!(
            gateway = %request.code,
            samples = report.total_count,
            sensors = report.sensors_load_ratio.len(),
            outlier_sensors = report.outlier_sensors.len(),
            "Assembled gateway report"
        );
        report
    }

    /// Gateway ranking and time histogram of one network.
    pub fn network_report(
        &self,
        request: &ReportRequest<NetworkCode>,
        samples: &[Sample],
    ) -> NetworkReport {
        let mut report = NetworkReport::empty(
            request.code.clone(),
            request.start_date.clone(),
            request.end_date.clone(),
        );
        if samples.is_empty() {
            debug!(network = %request.code, "No samples for network report");
            return report;
        }

        let ranking = ActivityRanking::from_keys(samples.iter().map(|s| s.gateway.clone()));
        report.total_count = ranking.total();
        report.most_active_gateways = ranking.most_active();
        report.least_active_gateways = ranking.least_active();
        report.gateways_load_ratio = ranking.load_ratios();

        let timestamps: Vec<_> = samples.iter().map(|s| s.timestamp).collect();
        if let Some(time) = adaptive_time_histogram(
            &timestamps,
            &request.window,
            self.config.hourly_span_limit_hours,
        ) {
            report.granularity = Some(time.granularity);
            report.histogram = time.histogram;
        }

        debug!(
            network = %request.code,
            samples = report.total_count,
            gateways = report.gateways_load_ratio.len(),
            granularity = ?report.granularity,
            "Assembled network report"
        );
        report
    }
}

/// Mean value per sensor.
fn sensor_means(samples: &[Sample]) -> BTreeMap<SensorCode, f64> {
    let mut values: BTreeMap<SensorCode, Vec<f64>> = BTreeMap::new();
    for sample in samples {
        values
            .entry(sample.sensor.clone())
            .or_default()
            .push(sample.value);
    }
    values.into_iter().map(|(k, v)| (k, mean(&v))).collect()
}

/// Gaps between consecutive samples, which must be sorted by timestamp.
fn inter_arrival_gaps(samples: &[Sample]) -> Vec<Duration> {
    samples
        .windows(2)
        .map(|w| {
            (w[1].timestamp - w[0].timestamp)
                .to_std()
                .unwrap_or(Duration::ZERO)
        })
        .collect()
}
