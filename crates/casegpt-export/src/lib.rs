//! casegpt-export
//!
//! Transcript export: sanitization, text layout and PDF generation.

pub mod error;
pub mod layout;
pub mod metrics;
pub mod pdf;
pub mod sanitize;
pub mod styles;

use casegpt_core::models::message::Message;

use crate::error::RenderError;
use crate::styles::DocumentStyles;

/// MIME type of the exported transcript.
pub const PDF_MIME_TYPE: &str = "application/pdf";

/// Default file name for an exported transcript.
pub const DEFAULT_FILE_NAME: &str = "clinical_case.pdf";

/// Title line at the top of every transcript.
pub const TRANSCRIPT_TITLE: &str = "Clinical Case Discussion";

/// Render a transcript to PDF bytes with the default styles.
pub fn render(messages: &[Message]) -> Result<Vec<u8>, RenderError> {
    render_with(messages, &DocumentStyles::default())
}

/// Render a transcript to PDF bytes.
///
/// Fails without producing any output if a message cannot be encoded.
pub fn render_with(messages: &[Message], styles: &DocumentStyles) -> Result<Vec<u8>, RenderError> {
    let layout = layout::layout_transcript(messages, styles)?;
    pdf::write_pdf(&layout, styles)
}
