use serde::{Deserialize, Serialize};

/// Page geometry and typography for transcript PDFs.
///
/// Lengths are in millimetres, font sizes in points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentStyles {
    pub page_width_mm: f32,
    pub page_height_mm: f32,

    /// Applied uniformly on all four sides.
    pub margin_mm: f32,

    pub title_size: f32,
    pub header_size: f32,
    pub body_size: f32,

    pub title_line_mm: f32,
    pub header_line_mm: f32,
    pub body_line_mm: f32,

    /// Space after the title.
    pub title_gap_mm: f32,

    /// Space after each message.
    pub message_gap_mm: f32,
}

impl Default for DocumentStyles {
    fn default() -> Self {
        Self {
            page_width_mm: 210.0,
            page_height_mm: 297.0,
            margin_mm: 10.0,
            title_size: 16.0,
            header_size: 12.0,
            body_size: 12.0,
            title_line_mm: 10.0,
            header_line_mm: 8.0,
            body_line_mm: 6.0,
            title_gap_mm: 10.0,
            message_gap_mm: 5.0,
        }
    }
}

impl DocumentStyles {
    /// Width available to a line of text between the side margins.
    pub fn text_width_mm(&self) -> f32 {
        (self.page_width_mm - 2.0 * self.margin_mm).max(0.0)
    }
}
