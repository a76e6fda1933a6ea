//! Report service
//!
//! Composes the report builder with the renderers and labels each output
//! with its media type and a suggested filename.

use log::info;

use crate::config::ReportSettings;
use crate::error::ReportResult;
use crate::export::{render_pdf, render_structured, render_xlsx, PdfStream, ReportFormat};
use crate::models::ExpenseRecord;
use crate::reports::{build_category_report, CategoryReport};

/// A rendered report, ready for the transport layer
pub enum ReportOutput {
    /// The report itself, to be serialized as `format`
    Structured {
        report: CategoryReport,
        format: ReportFormat,
    },
    /// A document delivered incrementally
    Stream {
        stream: PdfStream,
        media_type: &'static str,
        filename: String,
    },
    /// A document delivered in one piece
    Buffer {
        bytes: Vec<u8>,
        media_type: &'static str,
        filename: String,
    },
}

impl ReportOutput {
    pub fn media_type(&self) -> &'static str {
        match self {
            ReportOutput::Structured { format, .. } => format.media_type(),
            ReportOutput::Stream { media_type, .. } | ReportOutput::Buffer { media_type, .. } => {
                *media_type
            }
        }
    }

    pub fn filename(&self) -> Option<&str> {
        match self {
            ReportOutput::Structured { .. } => None,
            ReportOutput::Stream { filename, .. } | ReportOutput::Buffer { filename, .. } => {
                Some(filename.as_str())
            }
        }
    }
}

/// Service for building and rendering category reports
pub struct ReportService<'a> {
    settings: &'a ReportSettings,
}

impl<'a> ReportService<'a> {
    pub fn new(settings: &'a ReportSettings) -> Self {
        Self { settings }
    }

    /// Build the category report for one user's records over a period
    pub fn category_report(
        &self,
        user_expenses: &[ExpenseRecord],
        start_date: &str,
        end_date: &str,
    ) -> ReportResult<CategoryReport> {
        build_category_report(user_expenses, start_date, end_date)
    }

    /// Render a report in the requested format
    pub fn render(&self, report: CategoryReport, format: ReportFormat) -> ReportResult<ReportOutput> {
        let filename = format.suggested_filename(&report);
        let media_type = format.media_type();

        let output = match format {
            ReportFormat::Json | ReportFormat::Yaml => ReportOutput::Structured {
                report: render_structured(report),
                format,
            },
            ReportFormat::Pdf => ReportOutput::Stream {
                stream: render_pdf(&report, self.settings)?,
                media_type,
                filename,
            },
            ReportFormat::Xlsx => {
                let bytes = render_xlsx(&report, self.settings)?;
                info!("Rendered {} ({} bytes)", filename, bytes.len());
                ReportOutput::Buffer {
                    bytes,
                    media_type,
                    filename,
                }
            }
        };

        Ok(output)
    }

    /// Build and render in one step
    pub fn generate(
        &self,
        user_expenses: &[ExpenseRecord],
        start_date: &str,
        end_date: &str,
        format: ReportFormat,
    ) -> ReportResult<ReportOutput> {
        let report = self.category_report(user_expenses, start_date, end_date)?;
        self.render(report, format)
    }
}
