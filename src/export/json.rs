//! Structured-data rendering
//!
//! The report itself is the machine-readable payload. The compact view is a
//! display convenience that drops empty categories; it borrows the report
//! and never changes it.

use serde::Serialize;
use std::io::Write;

use crate::error::{ReportError, ReportResult};
use crate::models::Money;
use crate::reports::{CategoryReport, CategorySummary};

/// Output options for structured renderers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StructuredOptions {
    /// Indent the output
    pub pretty: bool,
    /// Only emit categories with at least one expense
    pub compact: bool,
}

/// Identity mapping: the report is its own structured representation
pub fn render_structured(report: CategoryReport) -> CategoryReport {
    report
}

/// A report view restricted to categories with expenses
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompactReport<'a> {
    pub start_date: &'a str,
    pub end_date: &'a str,
    pub total_amount: Money,
    pub categories: Vec<&'a CategorySummary>,
}

impl<'a> CompactReport<'a> {
    pub fn new(report: &'a CategoryReport) -> Self {
        Self {
            start_date: &report.start_date,
            end_date: &report.end_date,
            total_amount: report.total_amount,
            categories: report.breakdown_rows().collect(),
        }
    }
}

/// Write the report as JSON
pub fn write_json<W: Write>(
    report: &CategoryReport,
    writer: &mut W,
    options: StructuredOptions,
) -> ReportResult<()> {
    let result = match (options.compact, options.pretty) {
        (true, true) => serde_json::to_writer_pretty(writer, &CompactReport::new(report)),
        (true, false) => serde_json::to_writer(writer, &CompactReport::new(report)),
        (false, true) => serde_json::to_writer_pretty(writer, report),
        (false, false) => serde_json::to_writer(writer, report),
    };

    result.map_err(|e| ReportError::render("json", e.to_string()))
}
