//! CLI command for category reports
//!
//! Builds the report from an input file and prints it as a table or writes
//! it in one of the export formats.

use clap::{Args, ValueEnum};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::config::ReportSettings;
use crate::display::format_category_report;
use crate::error::{ReportError, ReportResult};
use crate::export::{write_json, write_yaml, ReportFormat, StructuredOptions};
use crate::services::{load_expenses_file, ReportOutput, ReportService};

/// Output formats accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Terminal table
    Table,
    Json,
    Yaml,
    Pdf,
    Xlsx,
}

impl OutputFormat {
    fn export_format(self) -> Option<ReportFormat> {
        match self {
            OutputFormat::Table => None,
            OutputFormat::Json => Some(ReportFormat::Json),
            OutputFormat::Yaml => Some(ReportFormat::Yaml),
            OutputFormat::Pdf => Some(ReportFormat::Pdf),
            OutputFormat::Xlsx => Some(ReportFormat::Xlsx),
        }
    }
}

/// Arguments for `report`
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Expense records (JSON array or CSV)
    #[arg(short, long)]
    pub input: PathBuf,

    /// Start date (YYYY-MM-DD), inclusive
    #[arg(short, long)]
    pub start: String,

    /// End date (YYYY-MM-DD), inclusive
    #[arg(short, long)]
    pub end: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Output file (PDF and XLSX default to a generated name)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Indent JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Omit categories without expenses from JSON/YAML output
    #[arg(long)]
    pub compact: bool,
}

/// Handle the report command
pub fn handle_report_command(settings: &ReportSettings, args: ReportArgs) -> ReportResult<()> {
    let records = load_expenses_file(&args.input)?;
    let service = ReportService::new(settings);
    let report = service.category_report(&records, &args.start, &args.end)?;

    let Some(format) = args.format.export_format() else {
        print!(
            "{}",
            format_category_report(&report, &settings.currency_symbol)
        );
        return Ok(());
    };

    let options = StructuredOptions {
        pretty: args.pretty,
        compact: args.compact,
    };

    match service.render(report, format)? {
        ReportOutput::Structured { report, format } => {
            let mut writer = open_output(args.output.as_deref())?;
            if format == ReportFormat::Yaml {
                write_yaml(&report, &mut writer, options)?;
            } else {
                write_json(&report, &mut writer, options)?;
                writeln!(writer)?;
            }
            writer.flush()?;
        }
        ReportOutput::Stream {
            mut stream,
            filename,
            ..
        } => {
            let path = args.output.unwrap_or_else(|| PathBuf::from(filename));
            let file = create_file(&path)?;
            let mut writer = BufWriter::new(file);

            let copied = io::copy(&mut stream, &mut writer).and_then(|_| writer.flush());
            if let Err(e) = copied {
                drop(writer);
                // Leave no half-written document behind
                let _ = std::fs::remove_file(&path);
                return Err(ReportError::render(
                    "pdf",
                    format!("Failed to write {}: {}", path.display(), e),
                ));
            }
            println!("PDF report written to: {}", path.display());
        }
        ReportOutput::Buffer {
            bytes, filename, ..
        } => {
            let path = args.output.unwrap_or_else(|| PathBuf::from(filename));
            std::fs::write(&path, bytes).map_err(|e| {
                ReportError::Io(format!("Failed to write {}: {}", path.display(), e))
            })?;
            println!("XLSX report written to: {}", path.display());
        }
    }

    Ok(())
}

fn create_file(path: &Path) -> ReportResult<File> {
    File::create(path).map_err(|e| {
        ReportError::Io(format!("Failed to create file {}: {}", path.display(), e))
    })
}

fn open_output(path: Option<&Path>) -> ReportResult<Box<dyn Write>> {
    Ok(match path {
        Some(path) => Box::new(BufWriter::new(create_file(path)?)),
        None => Box::new(io::stdout().lock()),
    })
}
