//! Report requests.

use wr_common::ReportWindow;

/// What a report is asked for: a subject and a time window.
///
/// The start and end strings are kept exactly as supplied so reports can
/// echo them back unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRequest<C> {
    pub code: C,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub window: ReportWindow,
}

impl<C> ReportRequest<C> {
    pub fn new(
        code: C,
        start_date: Option<String>,
        end_date: Option<String>,
        window: ReportWindow,
    ) -> Self {
        Self {
            code,
            start_date,
            end_date,
            window,
        }
    }

    /// Parse the date strings of a request.
    pub fn parse(code: C, start: Option<&str>, end: Option<&str>) -> wr_common::Result<Self> {
        let window = ReportWindow::parse(start, end)?;
        Ok(Self::new(
            code,
            start.map(str::to_string),
            end.map(str::to_string),
            window,
        ))
    }
}
