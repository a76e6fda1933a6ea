//! Report renderers for expense-report
//!
//! Every renderer is a pure function of a [`CategoryReport`]:
//! - JSON / YAML: structured data (identity mapping of the report)
//! - PDF: printable flow document, delivered as a byte stream
//! - XLSX: formatted workbook, delivered as one buffer

pub mod json;
pub mod pdf;
pub mod stream;
pub mod xlsx;
pub mod yaml;

pub use json::{render_structured, write_json, CompactReport, StructuredOptions};
pub use pdf::{flow_document, render_pdf, FlowBlock, FlowDocument};
pub use stream::PdfStream;
pub use xlsx::{plan_sheet, render_xlsx, SheetPlan, SheetRow};
pub use yaml::write_yaml;

use chrono::Local;
use std::fmt::Write as _;

use crate::config::ReportSettings;
use crate::error::{ReportError, ReportResult};
use crate::reports::CategoryReport;

/// Current local time in the configured footer format
///
/// A malformed strftime pattern is reported instead of panicking.
pub(crate) fn generated_at(settings: &ReportSettings) -> ReportResult<String> {
    let mut out = String::new();
    write!(out, "{}", Local::now().format(&settings.timestamp_format)).map_err(|_| {
        ReportError::Config(format!(
            "Invalid timestamp format: {}",
            settings.timestamp_format
        ))
    })?;
    Ok(out)
}

/// Output formats a report can be rendered to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportFormat {
    Json,
    Yaml,
    Pdf,
    Xlsx,
}

impl ReportFormat {
    /// Short lowercase name, also used in error messages
    pub const fn name(self) -> &'static str {
        match self {
            ReportFormat::Json => "json",
            ReportFormat::Yaml => "yaml",
            ReportFormat::Pdf => "pdf",
            ReportFormat::Xlsx => "xlsx",
        }
    }

    pub const fn extension(self) -> &'static str {
        self.name()
    }

    /// Media type for the transport layer's Content-Type
    pub const fn media_type(self) -> &'static str {
        match self {
            ReportFormat::Json => "application/json",
            ReportFormat::Yaml => "application/yaml",
            ReportFormat::Pdf => "application/pdf",
            ReportFormat::Xlsx => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
        }
    }

    /// `expense-report-{start}-to-{end}.{ext}`
    pub fn suggested_filename(self, report: &CategoryReport) -> String {
        format!(
            "expense-report-{}-to-{}.{}",
            report.start_date,
            report.end_date,
            self.extension()
        )
    }

    /// Whether this format is structured data rather than a document
    pub const fn is_structured(self) -> bool {
        matches!(self, ReportFormat::Json | ReportFormat::Yaml)
    }
}
