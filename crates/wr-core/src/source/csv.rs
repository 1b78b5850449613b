//! Measurement CSV ingestion.
//!
//! The first line is a header and is skipped. Every following line is
//! `timestamp,network,gateway,sensor,value` with the timestamp in
//! `yyyy-MM-dd HH:mm:ss`. Trailing empty fields are ignored. Blank and
//! malformed lines are skipped and counted; they never abort the import.
//! Values must be finite numbers.

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{info, warn};
use wr_common::{parse_report_date, Error, Result, Sample};

use super::SampleStore;

/// Number of columns of a measurement row.
pub const CSV_COLUMNS: usize = 5;

/// Row counts of one import.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IngestSummary {
    /// Rows after the header, blank ones included.
    pub total: usize,
    pub imported: usize,
    pub skipped: usize,
}

/// Parse one data row. `line` is the 1-based line number in the file.
pub fn parse_row(row: &str, line: usize) -> Result<Sample> {
    let invalid = |reason: String| Error::InvalidRecord { line, reason };

    let mut parts: Vec<&str> = row.split(',').collect();
    while parts.last().is_some_and(|p| p.is_empty()) {
        parts.pop();
    }
    let parts: Vec<&str> = parts.into_iter().map(str::trim).collect();
    if parts.len() != CSV_COLUMNS {
        return Err(invalid(format!(
            "expected {} columns, found {}",
            CSV_COLUMNS,
            parts.len()
        )));
    }
    let (date, network, gateway, sensor, value) = (parts[0], parts[1], parts[2], parts[3], parts[4]);

    if network.is_empty() || gateway.is_empty() || sensor.is_empty() {
        return Err(invalid("network, gateway, or sensor code is empty".to_string()));
    }
    let timestamp =
        parse_report_date(date).map_err(|_| invalid(format!("invalid date format: {}", date)))?;
    let value: f64 = value
        .parse()
        .map_err(|_| invalid(format!("invalid value: {}", value)))?;
    if !value.is_finite() {
        return Err(invalid(format!("value must be finite, got {}", value)));
    }

    Ok(Sample::new(timestamp, value, sensor, gateway, network))
}

/// Read every valid row of a measurement CSV.
pub fn read_samples<R: BufRead>(reader: R) -> Result<(Vec<Sample>, IngestSummary)> {
    let mut lines = reader.lines();
    let mut summary = IngestSummary::default();
    let mut samples = Vec::new();

    match lines.next() {
        Some(header) => {
            header?;
        }
        None => {
            warn!("Measurement file is empty");
            return Ok((samples, summary));
        }
    }

    for (index, line) in lines.enumerate() {
        let line = line?;
        let line_number = index + 2;
        summary.total += 1;

        if line.trim().is_empty() {
            summary.skipped += 1;
            continue;
        }

        match parse_row(&line, line_number) {
            Ok(sample) => {
                samples.push(sample);
                summary.imported += 1;
            }
            Err(e) => {
                warn!(line = line_number, error = %e, "Skipping invalid CSV line");
                summary.skipped += 1;
            }
        }
    }

    Ok((samples, summary))
}

/// Load a measurement CSV file into a [`SampleStore`].
pub fn load_csv(path: &Path) -> Result<(SampleStore, IngestSummary)> {
    info!(path = %path.display(), "Starting measurement import");
    let file = File::open(path)?;
    let (samples, summary) = read_samples(BufReader::new(file))?;
    info!(
        total = summary.total,
        imported = summary.imported,
        skipped = summary.skipped,
        "Import complete"
    );
    Ok((SampleStore::new(samples), summary))
}
