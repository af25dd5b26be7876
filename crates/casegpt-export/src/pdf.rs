use std::io::BufWriter;

use printpdf::{IndirectFontRef, Mm, PdfDocument};
use tracing::info;

use crate::error::RenderError;
use crate::layout::{LineKind, TranscriptLayout};
use crate::metrics::Typeface;
use crate::styles::DocumentStyles;

/// Write a laid-out transcript as an A4 (by default) PDF.
///
/// Headers and the title use Helvetica Bold, body text Helvetica. A new
/// page starts whenever the next line would cross the bottom margin.
pub fn write_pdf(layout: &TranscriptLayout, styles: &DocumentStyles) -> Result<Vec<u8>, RenderError> {
    let page_width = Mm(styles.page_width_mm);
    let page_height = Mm(styles.page_height_mm);

    let (doc, page1, layer1) = PdfDocument::new(&layout.title, page_width, page_height, "Layer 1");
    let regular = doc
        .add_builtin_font(Typeface::Helvetica.builtin())
        .map_err(|e| RenderError::Pdf(format!("font error: {e}")))?;
    let bold = doc
        .add_builtin_font(Typeface::HelveticaBold.builtin())
        .map_err(|e| RenderError::Pdf(format!("font error: {e}")))?;

    let top = styles.page_height_mm - styles.margin_mm;
    let mut layer = doc.get_page(page1).get_layer(layer1);
    let mut y = top;
    let mut pages = 1;

    for line in &layout.lines {
        let (height, style): (f32, Option<(f32, &IndirectFontRef)>) = match line.kind {
            LineKind::Title => (styles.title_line_mm, Some((styles.title_size, &bold))),
            LineKind::Header => (styles.header_line_mm, Some((styles.header_size, &bold))),
            LineKind::Body => (styles.body_line_mm, Some((styles.body_size, &regular))),
            LineKind::Spacer(height) => (height, None),
        };

        if y - height < styles.margin_mm {
            // Spacers never open a page of their own.
            if style.is_none() {
                continue;
            }
            pages += 1;
            let (page, page_layer) = doc.add_page(page_width, page_height, format!("Layer {pages}"));
            layer = doc.get_page(page).get_layer(page_layer);
            y = top;
        }
        y -= height;

        let Some((size, font)) = style else {
            continue;
        };
        if line.text.is_empty() {
            continue;
        }

        let x = if line.kind == LineKind::Title {
            centered_x(&line.text, size, styles)
        } else {
            styles.margin_mm
        };
        layer.use_text(line.text.as_str(), size, Mm(x), Mm(y), font);
    }

    let mut buf = BufWriter::new(Vec::new());
    doc.save(&mut buf)
        .map_err(|e| RenderError::Pdf(format!("save error: {e}")))?;
    let bytes = buf
        .into_inner()
        .map_err(|e| RenderError::Pdf(format!("buffer error: {e}")))?;

    info!(pages, bytes = bytes.len(), "transcript PDF written");

    Ok(bytes)
}

fn centered_x(text: &str, size_pt: f32, styles: &DocumentStyles) -> f32 {
    let width = Typeface::HelveticaBold.text_width_mm(text, size_pt);
    ((styles.page_width_mm - width) / 2.0).max(styles.margin_mm)
}
