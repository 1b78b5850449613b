//! Where samples and reference parameters come from.
//!
//! The report engine only sees already-filtered sample slices. These traits
//! are the seam between it and whatever holds the measurements.

pub mod csv;
pub mod store;

pub use self::csv::{load_csv, read_samples, IngestSummary, CSV_COLUMNS};
pub use self::store::SampleStore;

use wr_common::{GatewayCode, GatewayParameters, ParameterSet, ReportWindow, Result, Sample, SubjectKind};

/// Supplies the samples of one subject.
pub trait SampleSource {
    /// Samples of the subject `code` of kind `kind` inside `window`
    /// (inclusive bounds), ascending by timestamp.
    ///
    /// Unknown subjects are an error; a known subject with no samples in the
    /// window yields an empty vector.
    fn fetch_samples(&self, kind: SubjectKind, code: &str, window: &ReportWindow) -> Result<Vec<Sample>>;
}

/// Supplies operator-declared gateway parameters.
pub trait ReferenceSource {
    fn gateway_parameters(&self, gateway: &GatewayCode) -> Result<GatewayParameters>;
}

impl ReferenceSource for ParameterSet {
    fn gateway_parameters(&self, gateway: &GatewayCode) -> Result<GatewayParameters> {
        Ok(self.get(gateway))
    }
}
