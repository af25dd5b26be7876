//! Glyph widths for the built-in Helvetica faces.
//!
//! Widths are the Adobe core-font metrics in 1/1000 em for printable ASCII.
//! Where WinAnsi and StandardEncoding disagree on a glyph (`'` and `` ` ``)
//! the wider of the two is used.

use printpdf::BuiltinFont;

const MM_PER_PT: f32 = 25.4 / 72.0;

/// Width used for anything outside printable ASCII; the widest ASCII glyph.
const FALLBACK_WIDTH: u16 = 1015;

#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    // ' ' ! " # $ % & ' ( ) * + , - . /
    278, 278, 355, 556, 556, 889, 667, 222, 333, 333, 389, 584, 278, 333, 278, 278,
    // 0-9
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    // : ; < = > ? @
    278, 278, 584, 584, 584, 556, 1015,
    // A-Z
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    // [ \ ] ^ _ `
    278, 278, 278, 469, 556, 333,
    // a-z
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
    // { | } ~
    334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 278, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    333, 333, 584, 584, 584, 611, 975,
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    333, 278, 333, 584, 556, 333,
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
    389, 280, 389, 584,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Typeface {
    Helvetica,
    HelveticaBold,
}

impl Typeface {
    pub fn builtin(self) -> BuiltinFont {
        match self {
            Typeface::Helvetica => BuiltinFont::Helvetica,
            Typeface::HelveticaBold => BuiltinFont::HelveticaBold,
        }
    }

    /// Advance width of `c` in 1/1000 em.
    pub fn char_width(self, c: char) -> u16 {
        let table = match self {
            Typeface::Helvetica => &HELVETICA,
            Typeface::HelveticaBold => &HELVETICA_BOLD,
        };
        match c {
            ' '..='~' => table[c as usize - 0x20],
            _ => FALLBACK_WIDTH,
        }
    }

    /// Width of `text` in 1/1000 em.
    pub fn text_units(self, text: &str) -> u32 {
        text.chars().map(|c| u32::from(self.char_width(c))).sum()
    }

    /// Width of `text` set at `size_pt`, in millimetres.
    pub fn text_width_mm(self, text: &str, size_pt: f32) -> f32 {
        units_to_mm(self.text_units(text), size_pt)
    }
}

pub(crate) fn units_to_mm(units: u32, size_pt: f32) -> f32 {
    units as f32 / 1000.0 * size_pt * MM_PER_PT
}
