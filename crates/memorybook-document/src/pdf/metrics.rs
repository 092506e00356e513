// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Glyph widths for the PDF builtin Helvetica family.
//
// Widths are the Adobe AFM advance widths in 1/1000 em for printable ASCII.
// Helvetica-Oblique shares the upright widths. printpdf writes builtin-font
// text as UTF-8 bytes under WinAnsiEncoding, so only printable ASCII survives
// the round trip. Everything else (accented letters, emoji, CJK) is dropped
// before measuring and before drawing, so the two always agree.

use std::borrow::Cow;

use memorybook_core::TextStyle;
use memorybook_layout::TextMeasure;
use printpdf::BuiltinFont;

/// Distance from the top of the em box to the baseline, in em.
pub const HELVETICA_ASCENT: f64 = 0.718;

/// Index = (char as usize) - 0x20, covering 0x20 (space) through 0x7E (~).
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, // sp ! " # $ % & '
    333, 333, 389, 584, 278, 333, 278, 278, // ( ) * + , - . /
    556, 556, 556, 556, 556, 556, 556, 556, // 0-7
    556, 556, 278, 278, 584, 584, 584, 556, // 8 9 : ; < = > ?
    1015, 667, 667, 722, 722, 667, 611, 778, // @ A-G
    722, 278, 500, 667, 556, 833, 722, 778, // H-O
    667, 778, 722, 667, 611, 722, 667, 944, // P-W
    667, 667, 611, 278, 278, 278, 469, 556, // X Y Z [ \ ] ^ _
    333, 556, 556, 500, 556, 556, 278, 556, // ` a-g
    556, 222, 222, 500, 222, 833, 556, 556, // h-o
    556, 556, 333, 500, 278, 556, 500, 722, // p-w
    500, 500, 500, 334, 260, 334, 584, // x y z { | } ~
];

/// Text measurer matching the builtin Helvetica fonts used for drawing.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinFontMetrics;

impl BuiltinFontMetrics {
    /// Builtin font used to draw text of the given style.
    pub fn font(style: TextStyle) -> BuiltinFont {
        if style.italic {
            BuiltinFont::HelveticaOblique
        } else {
            BuiltinFont::Helvetica
        }
    }

    /// Whether the builtin encoding can show `c`.
    pub fn is_drawable(c: char) -> bool {
        matches!(c, ' '..='~')
    }

    /// `text` with undrawable characters removed.
    pub fn drawable(text: &str) -> Cow<'_, str> {
        if text.chars().all(Self::is_drawable) {
            Cow::Borrowed(text)
        } else {
            Cow::Owned(text.chars().filter(|&c| Self::is_drawable(c)).collect())
        }
    }

    /// Advance width of a single character in 1/1000 em.
    fn char_width(c: char) -> u16 {
        match c as u32 {
            code @ 0x20..=0x7E => HELVETICA_WIDTHS[code as usize - 0x20],
            _ => 0,
        }
    }
}

impl TextMeasure for BuiltinFontMetrics {
    fn measure(&self, text: &str, font_size: f64, _style: TextStyle) -> f64 {
        let units: u32 = text.chars().map(|c| u32::from(Self::char_width(c))).sum();
        units as f64 * font_size / 1000.0
    }
}
