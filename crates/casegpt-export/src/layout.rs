//! Transcript layout: turns messages into styled, wrapped lines.
//!
//! Layout is independent of the PDF writer so the text that ends up in a
//! document can be inspected directly.

use casegpt_core::models::message::Message;

use crate::TRANSCRIPT_TITLE;
use crate::error::RenderError;
use crate::metrics::{Typeface, units_to_mm};
use crate::sanitize::{first_unencodable, sanitize};
use crate::styles::DocumentStyles;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineKind {
    Title,
    Header,
    Body,
    /// Vertical space of the given height in millimetres.
    Spacer(f32),
}

#[derive(Debug, Clone, PartialEq)]
pub struct LayoutLine {
    pub kind: LineKind,
    pub text: String,
}

impl LayoutLine {
    fn new(kind: LineKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    fn spacer(height_mm: f32) -> Self {
        Self::new(LineKind::Spacer(height_mm), String::new())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptLayout {
    pub title: String,
    pub lines: Vec<LayoutLine>,
}

impl TranscriptLayout {
    /// Role header lines in document order, e.g. `"Assistant:"`.
    pub fn headers(&self) -> Vec<&str> {
        self.lines
            .iter()
            .filter(|l| l.kind == LineKind::Header)
            .map(|l| l.text.as_str())
            .collect()
    }

    /// All visible text, one layout line per output line.
    pub fn text(&self) -> String {
        self.lines
            .iter()
            .filter(|l| !matches!(l.kind, LineKind::Spacer(_)))
            .map(|l| l.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Lay out a transcript: title, then a bold role header and wrapped body
/// per message.
pub fn layout_transcript(
    messages: &[Message],
    styles: &DocumentStyles,
) -> Result<TranscriptLayout, RenderError> {
    layout_transcript_with(messages, styles, sanitize)
}

/// [`layout_transcript`] with a caller-supplied text cleaner in place of
/// [`sanitize`]. Whatever the cleaner leaves behind must still be
/// encodable; the first message that is not fails the whole layout.
pub fn layout_transcript_with(
    messages: &[Message],
    styles: &DocumentStyles,
    clean: impl Fn(&str) -> String,
) -> Result<TranscriptLayout, RenderError> {
    let mut lines = vec![
        LayoutLine::new(LineKind::Title, TRANSCRIPT_TITLE),
        LayoutLine::spacer(styles.title_gap_mm),
    ];
    let text_width = styles.text_width_mm();

    for (message_index, message) in messages.iter().enumerate() {
        let header = format!("{}:", message.role.display_name());
        let body = clean(&message.content);

        if let Some(character) = first_unencodable(&header).or_else(|| first_unencodable(&body)) {
            return Err(RenderError::Encoding {
                message_index,
                character,
            });
        }

        lines.push(LayoutLine::new(LineKind::Header, header));
        for paragraph in body.split('\n') {
            for line in wrap_line(paragraph, Typeface::Helvetica, styles.body_size, text_width) {
                lines.push(LayoutLine::new(LineKind::Body, line));
            }
        }
        lines.push(LayoutLine::spacer(styles.message_gap_mm));
    }

    Ok(TranscriptLayout {
        title: TRANSCRIPT_TITLE.to_string(),
        lines,
    })
}

/// Greedy wrap on single spaces so that every line set in `face` at
/// `size_pt` is at most `max_width_mm` wide. Runs of spaces inside a line
/// are kept; the space a line breaks on is dropped. Words wider than a
/// line are split. An empty paragraph yields one empty line; otherwise no
/// line is empty.
pub fn wrap_line(paragraph: &str, face: Typeface, size_pt: f32, max_width_mm: f32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut rest = paragraph;

    loop {
        let fit = fitting_prefix(rest, face, size_pt, max_width_mm);
        if fit == rest.len() {
            break;
        }

        let split = if rest[fit..].starts_with(' ') {
            Some(fit)
        } else {
            rest[..fit].rfind(' ')
        };
        match split {
            Some(split) if split > 0 => {
                lines.push(rest[..split].to_string());
                rest = &rest[split + 1..];
            }
            _ => {
                // At least one character per line, however narrow the page.
                let cut = if fit > 0 {
                    fit
                } else {
                    rest.chars().next().map_or(rest.len(), char::len_utf8)
                };
                lines.push(rest[..cut].to_string());
                rest = &rest[cut..];
            }
        }
    }
    if !rest.is_empty() || lines.is_empty() {
        lines.push(rest.to_string());
    }

    lines
}

/// Byte length of the longest prefix of `text` that fits in `max_width_mm`.
fn fitting_prefix(text: &str, face: Typeface, size_pt: f32, max_width_mm: f32) -> usize {
    let mut units = 0u32;
    for (offset, c) in text.char_indices() {
        units += u32::from(face.char_width(c));
        if units_to_mm(units, size_pt) > max_width_mm {
            return offset;
        }
    }
    text.len()
}
