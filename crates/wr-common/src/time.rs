//! Report dates and request windows.
//!
//! Report requests carry their bounds as `yyyy-MM-dd HH:mm:ss` strings. Both
//! bounds are optional and inclusive; an absent bound leaves that side open.

use chrono::NaiveDateTime;

use crate::error::{Error, Result};

/// `chrono` format of report dates and CSV timestamps.
pub const REPORT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parse a report date string.
pub fn parse_report_date(value: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value.trim(), REPORT_DATE_FORMAT).map_err(|_| {
        Error::InvalidDate {
            value: value.to_string(),
        }
    })
}

/// Inclusive, optionally open-ended time window of a report request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReportWindow {
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
}

impl ReportWindow {
    /// A window without bounds.
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Build a window from already parsed bounds, rejecting `start > end`.
    pub fn new(start: Option<NaiveDateTime>, end: Option<NaiveDateTime>) -> Result<Self> {
        if let (Some(s), Some(e)) = (start, end) {
            if s > e {
                return Err(Error::InvalidInterval {
                    start: s.format(REPORT_DATE_FORMAT).to_string(),
                    end: e.format(REPORT_DATE_FORMAT).to_string(),
                });
            }
        }
        Ok(Self { start, end })
    }

    /// Parse the request strings of a report call.
    pub fn parse(start: Option<&str>, end: Option<&str>) -> Result<Self> {
        let start = start.map(parse_report_date).transpose()?;
        let end = end.map(parse_report_date).transpose()?;
        Self::new(start, end)
    }

    /// Returns true when `timestamp` falls inside both inclusive bounds.
    pub fn contains(&self, timestamp: NaiveDateTime) -> bool {
        if let Some(start) = self.start {
            if timestamp < start {
                return false;
            }
        }
        if let Some(end) = self.end {
            if timestamp > end {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    #[test]
    fn parses_report_dates() {
        let ts = parse_report_date("2024-03-01 13:00:00").unwrap();
        assert_eq!(ts, at(1, 13));
    }

    #[test]
    fn rejects_malformed_dates() {
        let err = parse_report_date("2024-03-01T13:00:00").unwrap_err();
        assert_eq!(err.code(), 21);
        assert!(parse_report_date("yesterday").is_err());
    }

    #[test]
    fn window_bounds_are_inclusive() {
        let window = ReportWindow::new(Some(at(1, 0)), Some(at(2, 0))).unwrap();
        assert!(window.contains(at(1, 0)));
        assert!(window.contains(at(2, 0)));
        assert!(!window.contains(at(2, 1)));
        assert!(!window.contains(at(1, 0) - chrono::TimeDelta::seconds(1)));
    }

    #[test]
    fn open_window_contains_everything() {
        let window = ReportWindow::unbounded();
        assert!(window.start.is_none() && window.end.is_none());
        assert!(window.contains(at(5, 5)));

        let from = ReportWindow::parse(Some("2024-03-02 00:00:00"), None).unwrap();
        assert!(!from.contains(at(1, 23)));
        assert!(from.contains(at(30, 0)));
    }

    #[test]
    fn rejects_reversed_window() {
        let err = ReportWindow::parse(Some("2024-03-02 00:00:00"), Some("2024-03-01 00:00:00"))
            .unwrap_err();
        assert_eq!(err.code(), 22);
    }

    #[test]
    fn equal_bounds_are_allowed() {
        let window =
            ReportWindow::parse(Some("2024-03-02 00:00:00"), Some("2024-03-02 00:00:00")).unwrap();
        assert!(window.contains(at(2, 0)));
    }
}
