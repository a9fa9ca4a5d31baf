use crate::domain::model::PoolReport;
use crate::utils::error::Result;
use chrono::NaiveDate;

/// Receives non-fatal sanity warnings. The checker identifies the offending
/// entry; the sink decides formatting and destination.
pub trait DiagnosticSink {
    fn out_of_window_lead(&mut self, resource: &str, team: &str, date: NaiveDate);
}

/// Receives the finished report. The core imposes no display format; money
/// and date formatting belong to the implementation.
pub trait ReportSink {
    fn render(&mut self, report: &PoolReport) -> Result<()>;
}

/// Diagnostic sink that drops everything. Useful when a caller only wants
/// the computed report.
#[derive(Debug, Default)]
pub struct NullDiagnostics;

impl DiagnosticSink for NullDiagnostics {
    fn out_of_window_lead(&mut self, _resource: &str, _team: &str, _date: NaiveDate) {}
}
