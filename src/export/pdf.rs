use std::io::BufWriter;

use printpdf::{BuiltinFont, Mm, PdfDocument};

use super::{ExportError, REPORT_TITLE};

// A4 geometry and text layout, in points.
const PAGE_WIDTH_PT: f32 = 595.2756;
const PAGE_HEIGHT_PT: f32 = 841.8898;
const LEFT_MARGIN_PT: f32 = 40.0;
const TOP_MARGIN_PT: f32 = 50.0;
const BOTTOM_LIMIT_PT: f32 = 50.0;
const LINE_STEP_PT: f32 = 15.0;
const FONT_SIZE_PT: f32 = 12.0;

fn mm(points: f32) -> Mm {
    Mm(points * 25.4 / 72.0)
}

/// Where a report line lands: zero-based page index and baseline height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePlacement {
    pub page: usize,
    pub y_pt: f32,
}

/// Place `line_count` lines top to bottom, starting a new page whenever
/// the next baseline would fall below the bottom limit.
pub fn layout_lines(line_count: usize) -> Vec<LinePlacement> {
    let top = PAGE_HEIGHT_PT - TOP_MARGIN_PT;
    let mut page = 0;
    let mut y = top;
    let mut placements = Vec::with_capacity(line_count);

    for _ in 0..line_count {
        if y < BOTTOM_LIMIT_PT {
            page += 1;
            y = top;
        }
        placements.push(LinePlacement { page, y_pt: y });
        y -= LINE_STEP_PT;
    }
    placements
}

/// Render report text as an A4 PDF, one text line per report line.
pub fn render_report_pdf(text: &str) -> Result<Vec<u8>, ExportError> {
    let lines: Vec<&str> = text.split('\n').collect();
    let placements = layout_lines(lines.len());

    let (doc, first_page, first_layer) = PdfDocument::new(
        REPORT_TITLE,
        mm(PAGE_WIDTH_PT),
        mm(PAGE_HEIGHT_PT),
        "Layer 1",
    );
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ExportError::Pdf(format!("font error: {e}")))?;

    let mut current_page = 0;
    let mut layer = doc.get_page(first_page).get_layer(first_layer);

    for (line, placement) in lines.iter().zip(&placements) {
        if placement.page != current_page {
            let (page, page_layer) =
                doc.add_page(mm(PAGE_WIDTH_PT), mm(PAGE_HEIGHT_PT), "Layer 1");
            layer = doc.get_page(page).get_layer(page_layer);
            current_page = placement.page;
        }
        if !line.is_empty() {
            layer.use_text(*line, FONT_SIZE_PT, mm(LEFT_MARGIN_PT), mm(placement.y_pt), &font);
        }
    }

    tracing::debug!(lines = lines.len(), pages = current_page + 1, "Rendered report PDF");

    let mut buf = BufWriter::new(Vec::new());
    doc.save(&mut buf)
        .map_err(|e| ExportError::Pdf(format!("save error: {e}")))?;
    buf.into_inner()
        .map_err(|e| ExportError::Pdf(format!("buffer error: {e}")))
}
