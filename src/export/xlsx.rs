//! XLSX workbook rendering
//!
//! One worksheet: merged title and period banner, a summary block with the
//! grand total, then the category table with a percentage column. Numbers
//! are written as numbers so the sheet stays usable for further analysis.

use log::info;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Workbook, Worksheet, XlsxError};

use crate::config::ReportSettings;
use crate::error::{ReportError, ReportResult};
use crate::models::CategoryLabel;
use crate::reports::CategoryReport;

const COLUMN_WIDTHS: [f64; 4] = [25.0, 18.0, 10.0, 14.0];
const LAST_COL: u16 = 3;

const TITLE_ROW: u32 = 0;
const PERIOD_ROW: u32 = 1;
const SUMMARY_ROW: u32 = 3;
const TOTAL_ROW: u32 = 4;
const SPACER_ROW: u32 = 5;
const BREAKDOWN_ROW: u32 = 6;
const HEADER_ROW: u32 = 7;
const FIRST_DATA_ROW: u32 = 8;

const HEADER_FILL: u32 = 0x4472C4;
const SECTION_FILL: u32 = 0xD9E1F2;
const STRIPE_FILL: u32 = 0xF2F2F2;

/// One data row of the category table
#[derive(Debug, Clone, PartialEq)]
pub struct SheetRow {
    pub category: CategoryLabel,
    pub total: f64,
    pub count: u64,
    /// Fraction of the grand total, `0.0` when the grand total is zero
    pub percentage: f64,
}

/// Cell values for the worksheet, before any formatting
#[derive(Debug, Clone, PartialEq)]
pub struct SheetPlan {
    pub total_amount: f64,
    pub rows: Vec<SheetRow>,
}

impl SheetPlan {
    /// Row index just past the table
    fn end_row(&self) -> u32 {
        FIRST_DATA_ROW + self.rows.len() as u32
    }
}

/// Compute the worksheet values for a report
pub fn plan_sheet(report: &CategoryReport) -> SheetPlan {
    let rows = report
        .breakdown_rows()
        .map(|summary| SheetRow {
            category: summary.category,
            total: summary.total.to_f64(),
            count: summary.count,
            percentage: report.share_of(summary),
        })
        .collect();

    SheetPlan {
        total_amount: report.total_amount.to_f64(),
        rows,
    }
}

struct Formats {
    title: Format,
    period: Format,
    section: Format,
    label: Format,
    money: Format,
    blank: Format,
    header: Format,
    text: [Format; 2],
    amount: [Format; 2],
    count: [Format; 2],
    percent: [Format; 2],
    footer: Format,
}

impl Formats {
    fn new() -> Self {
        let cell = Format::new().set_border(FormatBorder::Thin);
        let striped = |f: Format| [f.clone(), f.set_background_color(Color::RGB(STRIPE_FILL))];

        Self {
            title: Format::new()
                .set_bold()
                .set_font_size(16)
                .set_align(FormatAlign::Center),
            period: Format::new()
                .set_italic()
                .set_align(FormatAlign::Center),
            section: cell
                .clone()
                .set_bold()
                .set_background_color(Color::RGB(SECTION_FILL)),
            label: cell.clone().set_bold(),
            money: cell.clone().set_num_format("#,##0.00"),
            blank: cell.clone(),
            header: cell
                .clone()
                .set_bold()
                .set_font_color(Color::White)
                .set_background_color(Color::RGB(HEADER_FILL))
                .set_align(FormatAlign::Center),
            text: striped(cell.clone()),
            amount: striped(cell.clone().set_num_format("#,##0.00")),
            count: striped(cell.clone().set_num_format("0")),
            percent: striped(cell.set_num_format("0.00%")),
            footer: Format::new()
                .set_italic()
                .set_font_size(9)
                .set_align(FormatAlign::Right),
        }
    }
}

/// Render the report as an XLSX workbook held in memory
pub fn render_xlsx(report: &CategoryReport, settings: &ReportSettings) -> ReportResult<Vec<u8>> {
    let plan = plan_sheet(report);
    let generated_at = super::generated_at(settings)?;

    info!(
        "Rendering XLSX report for {} to {} ({} rows)",
        report.start_date,
        report.end_date,
        plan.rows.len()
    );

    let mut workbook = Workbook::new();
    {
        let sheet = workbook.add_worksheet();
        write_sheet(sheet, report, &plan, settings, &generated_at).map_err(xlsx_error)?;
    }

    workbook.save_to_buffer().map_err(xlsx_error)
}

fn xlsx_error(err: XlsxError) -> ReportError {
    ReportError::render("xlsx", err.to_string())
}

fn write_sheet(
    sheet: &mut Worksheet,
    report: &CategoryReport,
    plan: &SheetPlan,
    settings: &ReportSettings,
    generated_at: &str,
) -> Result<(), XlsxError> {
    let formats = Formats::new();

    sheet.set_name(&settings.sheet_name)?;
    for (col, width) in COLUMN_WIDTHS.iter().enumerate() {
        sheet.set_column_width(col as u16, *width)?;
    }
    sheet.set_row_height(TITLE_ROW, 24)?;

    sheet.merge_range(TITLE_ROW, 0, TITLE_ROW, LAST_COL, &settings.title, &formats.title)?;
    sheet.merge_range(
        PERIOD_ROW,
        0,
        PERIOD_ROW,
        LAST_COL,
        &format!("Period: {} to {}", report.start_date, report.end_date),
        &formats.period,
    )?;

    // Summary block
    sheet.merge_range(SUMMARY_ROW, 0, SUMMARY_ROW, LAST_COL, "Summary", &formats.section)?;
    sheet.write_string_with_format(TOTAL_ROW, 0, "Total Amount", &formats.label)?;
    sheet.write_number_with_format(TOTAL_ROW, 1, plan.total_amount, &formats.money)?;
    sheet.write_blank(TOTAL_ROW, 2, &formats.money)?;
    sheet.write_blank(TOTAL_ROW, 3, &formats.money)?;
    for col in 0..=LAST_COL {
        sheet.write_blank(SPACER_ROW, col, &formats.blank)?;
    }

    // Category table
    sheet.merge_range(
        BREAKDOWN_ROW,
        0,
        BREAKDOWN_ROW,
        LAST_COL,
        "Category Breakdown",
        &formats.section,
    )?;
    for (col, heading) in ["Category", "Total Amount", "Count", "Percentage"]
        .iter()
        .enumerate()
    {
        sheet.write_string_with_format(HEADER_ROW, col as u16, *heading, &formats.header)?;
    }

    for (i, row) in plan.rows.iter().enumerate() {
        let r = FIRST_DATA_ROW + i as u32;
        let stripe = i % 2;
        sheet.write_string_with_format(r, 0, row.category.as_str(), &formats.text[stripe])?;
        sheet.write_number_with_format(r, 1, row.total, &formats.amount[stripe])?;
        sheet.write_number_with_format(r, 2, row.count as f64, &formats.count[stripe])?;
        sheet.write_number_with_format(r, 3, row.percentage, &formats.percent[stripe])?;
    }

    let footer_row = plan.end_row() + 1;
    sheet.merge_range(
        footer_row,
        0,
        footer_row,
        LAST_COL,
        &format!("Generated on {}", generated_at),
        &formats.footer,
    )?;

    Ok(())
}
