//! PDF flow-document rendering
//!
//! Rendering happens in two steps. [`flow_document`] lays the report out as
//! an ordered list of blocks; this is pure and easy to assert on. The blocks
//! are then painted onto pages with printpdf's builtin Helvetica inside the
//! producer thread of a [`PdfStream`], so bytes reach the consumer as the
//! document is serialized.

use log::{debug, info};
use printpdf::{
    BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference,
};

use super::stream::PdfStream;
use crate::config::{PageSettings, ReportSettings};
use crate::error::{ReportError, ReportResult};
use crate::reports::CategoryReport;

const MARGIN_MM: f32 = 20.0;
const FOOTER_Y_MM: f32 = 10.0;
const COLUMN_X_MM: [f32; 3] = [MARGIN_MM, 110.0, 160.0];

/// One laid-out piece of the report, top to bottom
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowBlock {
    Title(String),
    Subtitle(String),
    Heading(String),
    Text(String),
    TableHeader([String; 3]),
    TableRow([String; 3]),
    Footer(String),
}

impl FlowBlock {
    /// Vertical space taken by the block, in millimetres
    fn height_mm(&self) -> f32 {
        match self {
            FlowBlock::Title(_) => 14.0,
            FlowBlock::Subtitle(_) => 12.0,
            FlowBlock::Heading(_) => 11.0,
            FlowBlock::Text(_) => 8.0,
            FlowBlock::TableHeader(_) => 8.0,
            FlowBlock::TableRow(_) => 7.0,
            FlowBlock::Footer(_) => 0.0,
        }
    }

    fn font_size(&self) -> f32 {
        match self {
            FlowBlock::Title(_) => 20.0,
            FlowBlock::Subtitle(_) => 12.0,
            FlowBlock::Heading(_) => 14.0,
            FlowBlock::Text(_) | FlowBlock::TableHeader(_) => 11.0,
            FlowBlock::TableRow(_) => 10.0,
            FlowBlock::Footer(_) => 8.0,
        }
    }
}

/// The full layout of a report, before painting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowDocument {
    pub title: String,
    pub blocks: Vec<FlowBlock>,
}

impl FlowDocument {
    /// Table rows only
    pub fn rows(&self) -> impl Iterator<Item = &[String; 3]> + '_ {
        self.blocks.iter().filter_map(|b| match b {
            FlowBlock::TableRow(cells) => Some(cells),
            _ => None,
        })
    }
}

/// Lay the report out as a printable flow of blocks
///
/// Only categories with expenses get a table row, in report order.
pub fn flow_document(
    report: &CategoryReport,
    settings: &ReportSettings,
    generated_at: &str,
) -> FlowDocument {
    let symbol = settings.currency_symbol.as_str();

    let mut blocks = vec![
        FlowBlock::Title(settings.title.clone()),
        FlowBlock::Subtitle(format!(
            "Period: {} to {}",
            report.start_date, report.end_date
        )),
        FlowBlock::Heading("Summary".into()),
        FlowBlock::Text(format!(
            "Total Amount: {}",
            report.total_amount.format_with_symbol(symbol)
        )),
        FlowBlock::Heading("Category Breakdown".into()),
        FlowBlock::TableHeader(["Category".into(), "Total".into(), "Count".into()]),
    ];

    blocks.extend(report.breakdown_rows().map(|summary| {
        FlowBlock::TableRow([
            summary.category.to_string(),
            summary.total.format_with_symbol(symbol),
            summary.count.to_string(),
        ])
    }));

    blocks.push(FlowBlock::Footer(format!("Generated on {}", generated_at)));

    FlowDocument {
        title: settings.title.clone(),
        blocks,
    }
}

/// Render the report as a streamed PDF
pub fn render_pdf(report: &CategoryReport, settings: &ReportSettings) -> ReportResult<PdfStream> {
    let generated_at = super::generated_at(settings)?;
    let document = flow_document(report, settings, &generated_at);
    let page = settings.page;

    info!(
        "Rendering PDF report for {} to {} ({} rows)",
        report.start_date,
        report.end_date,
        document.rows().count()
    );

    PdfStream::spawn(settings.stream, move |writer| {
        let painted = paint(&document, page)?;
        debug!("Painted {} PDF page(s)", painted.pages);
        painted
            .doc
            .save(writer)
            .map_err(|e| ReportError::render("pdf", e.to_string()))
    })
}

struct PaintedDocument {
    doc: PdfDocumentReference,
    pages: usize,
}

/// Tracks the write position while blocks are laid onto pages
struct Painter {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    page: PageSettings,
    y: f32,
    pages: usize,
    table_header: Option<[String; 3]>,
}

impl Painter {
    fn new(title: &str, page: PageSettings) -> ReportResult<Self> {
        let (doc, page_index, layer_index) = PdfDocument::new(
            title.to_string(),
            Mm(page.width_mm),
            Mm(page.height_mm),
            "Page 1".to_string(),
        );
        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| ReportError::render("pdf", e.to_string()))?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| ReportError::render("pdf", e.to_string()))?;
        let layer = doc.get_page(page_index).get_layer(layer_index);

        Ok(Self {
            doc,
            layer,
            regular,
            bold,
            page,
            y: page.height_mm - MARGIN_MM,
            pages: 1,
            table_header: None,
        })
    }

    fn new_page(&mut self) {
        self.pages += 1;
        let (page_index, layer_index) = self.doc.add_page(
            Mm(self.page.width_mm),
            Mm(self.page.height_mm),
            format!("Page {}", self.pages),
        );
        self.layer = self.doc.get_page(page_index).get_layer(layer_index);
        self.y = self.page.height_mm - MARGIN_MM;
    }

    fn ensure_room(&mut self, height: f32) {
        if self.y - height < MARGIN_MM {
            self.new_page();
            // Carry the column headers over to the new page
            if let Some(header) = self.table_header.clone() {
                self.cells(&header, 11.0, true);
                self.y -= 8.0;
            }
        }
    }

    fn line(&self, text: &str, size: f32, bold: bool) {
        let font = if bold { &self.bold } else { &self.regular };
        self.layer
            .use_text(text, size, Mm(MARGIN_MM), Mm(self.y - size * 0.35), font);
    }

    fn cells(&self, cells: &[String; 3], size: f32, bold: bool) {
        let font = if bold { &self.bold } else { &self.regular };
        for (cell, x) in cells.iter().zip(COLUMN_X_MM) {
            self.layer
                .use_text(cell.as_str(), size, Mm(x), Mm(self.y - size * 0.35), font);
        }
    }

    fn block(&mut self, block: &FlowBlock) {
        let height = block.height_mm();
        let size = block.font_size();

        match block {
            FlowBlock::Footer(text) => {
                let font = &self.regular;
                self.layer
                    .use_text(text.as_str(), size, Mm(MARGIN_MM), Mm(FOOTER_Y_MM), font);
                return;
            }
            FlowBlock::Heading(_) => {
                self.table_header = None;
                self.ensure_room(height + 4.0);
                self.y -= 4.0;
            }
            _ => self.ensure_room(height),
        }

        match block {
            FlowBlock::Title(text) | FlowBlock::Heading(text) => self.line(text, size, true),
            FlowBlock::Subtitle(text) | FlowBlock::Text(text) => self.line(text, size, false),
            FlowBlock::TableHeader(cells) => {
                self.table_header = Some(cells.clone());
                self.cells(cells, size, true);
            }
            FlowBlock::TableRow(cells) => self.cells(cells, size, false),
            FlowBlock::Footer(_) => {}
        }

        self.y -= height;
    }
}

fn paint(document: &FlowDocument, page: PageSettings) -> ReportResult<PaintedDocument> {
    let mut painter = Painter::new(&document.title, page)?;
    for block in &document.blocks {
        painter.block(block);
    }

    Ok(PaintedDocument {
        doc: painter.doc,
        pages: painter.pages,
    })
}
