//! In-memory sample snapshot.

use std::collections::BTreeSet;
use tracing::trace;
use wr_common::{Error, ReportWindow, Result, Sample, SubjectKind};

use super::SampleSource;

/// Immutable, time-ordered set of samples.
#[derive(Debug, Clone, Default)]
pub struct SampleStore {
    samples: Vec<Sample>,
}

impl SampleStore {
    /// Build a store, sorting samples by timestamp.
    ///
    /// The sort is stable, so samples sharing a timestamp keep their
    /// insertion order.
    pub fn new(mut samples: Vec<Sample>) -> Self {
        samples.sort_by_key(|s| s.timestamp);
        Self { samples }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Distinct codes of the given kind, sorted.
    pub fn codes(&self, kind: SubjectKind) -> BTreeSet<&str> {
        self.samples.iter().map(|s| subject_code(s, kind)).collect()
    }

    /// Returns true when at least one sample references `code`.
    pub fn knows(&self, kind: SubjectKind, code: &str) -> bool {
        self.samples.iter().any(|s| subject_code(s, kind) == code)
    }
}

fn subject_code(sample: &Sample, kind: SubjectKind) -> &str {
    match kind {
        SubjectKind::Sensor => sample.sensor.as_str(),
        SubjectKind::Gateway => sample.gateway.as_str(),
        SubjectKind::Network => sample.network.as_str(),
    }
}

impl SampleSource for SampleStore {
    fn fetch_samples(&self, kind: SubjectKind, code: &str, window: &ReportWindow) -> Result<Vec<Sample>> {
        if !self.knows(kind, code) {
            return Err(Error::SubjectNotFound {
                kind,
                code: code.to_string(),
            });
        }

        let samples: Vec<Sample> = self
            .samples
            .iter()
            .filter(|s| subject_code(s, kind) == code && window.contains(s.timestamp))
            .cloned()
            .collect();
        trace!(%kind, code, count = samples.len(), "Fetched samples");
        Ok(samples)
    }
}
