//! Report service: the calling layer around the report engine.
//!
//! Validates request dates, fetches the subject's samples and reference
//! parameters, and hands them to the assembler.

use tracing::info;
use wr_common::{GatewayCode, NetworkCode, Result, SensorCode, SubjectKind};
use wr_report::{GatewayReport, NetworkReport, ReportAssembler, ReportRequest, SensorReport};

use crate::source::{ReferenceSource, SampleSource};

/// Answers report requests from a sample source and a reference source.
pub struct ReportService<S, R> {
    samples: S,
    references: R,
    assembler: ReportAssembler,
}

impl<S: SampleSource, R: ReferenceSource> ReportService<S, R> {
    pub fn new(samples: S, references: R, assembler: ReportAssembler) -> Self {
        Self {
            samples,
            references,
            assembler,
        }
    }

    /// Report on one sensor. Dates are `yyyy-MM-dd HH:mm:ss`, both optional.
    pub fn sensor_report(
        &self,
        code: &str,
        start: Option<&str>,
        end: Option<&str>,
    ) -> Result<SensorReport> {
        let request = ReportRequest::parse(SensorCode::new(code), start, end)?;
        let samples = self
            .samples
            .fetch_samples(SubjectKind::Sensor, code, &request.window)?;
        let report = self.assembler.sensor_report(&request, &samples);
        info!(
            sensor = code,
            samples = report.total_count,
            outliers = report.outliers.len(),
            "Generated sensor report"
        );
        Ok(report)
    }

    pub fn gateway_report(
        &self,
        code: &str,
        start: Option<&str>,
        end: Option<&str>,
    ) -> Result<GatewayReport> {
        let request = ReportRequest::parse(GatewayCode::new(code), start, end)?;
        let samples = self
            .samples
            .fetch_samples(SubjectKind::Gateway, code, &request.window)?;
        let parameters = self.references.gateway_parameters(&request.code)?;
        let report = self
            .assembler
            .gateway_report(&request, &samples, &parameters);
        info!(
            gateway = code,
            samples = report.total_count,
            outlier_sensors = report.outlier_sensors.len(),
            "Generated gateway report"
        );
        Ok(report)
    }

    pub fn network_report(
        &self,
        code: &str,
        start: Option<&str>,
        end: Option<&str>,
    ) -> Result<NetworkReport> {
        let request = ReportRequest::parse(NetworkCode::new(code), start, end)?;
        let samples = self
            .samples
            .fetch_samples(SubjectKind::Network, code, &request.window)?;
        let report = self.assembler.network_report(&request, &samples);
        info!(
            network = code,
            samples = report.total_count,
            granularity = ?report.granularity,
            "Generated network report"
        );
        Ok(report)
    }
}
