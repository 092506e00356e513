// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Text measurement capability supplied by the rendering side.

use memorybook_core::TextStyle;

/// Returns the rendered width of a string.
///
/// Implementations must use the same font metrics as the renderer that will
/// eventually draw the text, otherwise wrapped lines can overflow visually.
/// Any `Fn(&str, f64, TextStyle) -> f64` is a `TextMeasure`, which keeps test
/// fakes to a single closure.
pub trait TextMeasure {
    /// Width of `text` at `font_size` in the same units as the wrap width.
    fn measure(&self, text: &str, font_size: f64, style: TextStyle) -> f64;
}

impl<F> TextMeasure for F
where
    F: Fn(&str, f64, TextStyle) -> f64,
{
    fn measure(&self, text: &str, font_size: f64, style: TextStyle) -> f64 {
        self(text, font_size, style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_are_measurers() {
        let per_char = |text: &str, size: f64, _style: TextStyle| text.chars().count() as f64 * size;
        assert_eq!(per_char.measure("abc", 2.0, TextStyle::REGULAR), 6.0);
    }

    #[test]
    fn style_reaches_the_measurer() {
        let slanted = |_: &str, _: f64, style: TextStyle| if style.italic { 1.0 } else { 0.0 };
        assert_eq!(slanted.measure("x", 1.0, TextStyle::ITALIC), 1.0);
        assert_eq!(slanted.measure("x", 1.0, TextStyle::REGULAR), 0.0);
    }
}
