//! Report engine configuration loading.

use std::path::Path;
use tracing::debug;
use wr_common::{Error, Result};
use wr_report::ReportConfig;

/// Load the report configuration, or the defaults when no path is given.
pub fn load_report_config(path: Option<&Path>) -> Result<ReportConfig> {
    let Some(path) = path else {
        return Ok(ReportConfig::default());
    };
    debug!(path = %path.display(), "Loading report configuration");
    let content = std::fs::read_to_string(path)?;
    ReportConfig::from_json(&content).map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_path() {
        assert_eq!(load_report_config(None).unwrap(), ReportConfig::default());
    }

    #[test]
    fn reads_and_validates_file() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("report.json");
        std::fs::write(&good, r#"{ "bucket_count": 10 }"#).unwrap();
        assert_eq!(load_report_config(Some(&good)).unwrap().bucket_count, 10);

        let bad = dir.path().join("bad.json");
        std::fs::write(&bad, r#"{ "bucket_count": 0 }"#).unwrap();
        let err = load_report_config(Some(&bad)).unwrap_err();
        assert_eq!(err.code(), 10);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_report_config(Some(Path::new("/nonexistent/report.json"))).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
