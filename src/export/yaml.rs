//! YAML rendering of the structured report

use std::io::Write;

use super::json::{CompactReport, StructuredOptions};
use crate::error::{ReportError, ReportResult};
use crate::reports::CategoryReport;

/// Write the report as YAML, with a short comment header
///
/// `options.pretty` has no effect; YAML is always block-formatted.
pub fn write_yaml<W: Write>(
    report: &CategoryReport,
    writer: &mut W,
    options: StructuredOptions,
) -> ReportResult<()> {
    let io_err = |e: std::io::Error| ReportError::render("yaml", e.to_string());

    writeln!(writer, "# Expense report by category").map_err(io_err)?;
    writeln!(writer, "# Period: {} to {}", report.start_date, report.end_date)
        .map_err(io_err)?;

    let result = if options.compact {
        serde_yaml::to_writer(writer, &CompactReport::new(report))
    } else {
        serde_yaml::to_writer(writer, report)
    };

    result.map_err(|e| ReportError::render("yaml", e.to_string()))
}
