// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Greedy word-wrap: split a string into lines no wider than a maximum width.

use std::str::SplitWhitespace;

use memorybook_core::error::Result;
use memorybook_core::{LineMetrics, TextStyle};
use tracing::trace;

use crate::measure::TextMeasure;
use crate::{require_non_negative, require_positive};

/// A piece of text to lay out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextBlockRequest<'a> {
    pub content: &'a str,
    pub font_size: f64,
    pub max_width: f64,
    pub style: TextStyle,
}

impl<'a> TextBlockRequest<'a> {
    /// Request with the regular (upright) style.
    pub fn new(content: &'a str, font_size: f64, max_width: f64) -> Self {
        Self {
            content,
            font_size,
            max_width,
            style: TextStyle::REGULAR,
        }
    }

    pub fn with_style(mut self, style: TextStyle) -> Self {
        self.style = style;
        self
    }

    fn validate(&self) -> Result<()> {
        require_positive("font size", self.font_size)?;
        require_positive("maximum width", self.max_width)
    }
}

/// The result of laying out a [`TextBlockRequest`].
#[derive(Debug, Clone, PartialEq)]
pub struct LaidOutText {
    /// Lines in reading order. Never empty; blank content yields one empty line.
    pub lines: Vec<String>,
    pub block_width: f64,
    pub block_height: f64,
    /// Distance between the tops of consecutive lines.
    pub line_height: f64,
    top_padding: f64,
}

impl LaidOutText {
    /// Offset of line `index` from the top of the block.
    pub fn line_top(&self, index: usize) -> f64 {
        self.top_padding + index as f64 * self.line_height
    }

    /// True when the content had no visible tokens.
    pub fn is_blank(&self) -> bool {
        self.lines.len() == 1 && self.lines[0].is_empty()
    }
}

/// Lazily wrapped lines of a [`TextBlockRequest`].
///
/// Each call to `next` measures only the candidates needed to close the
/// current line, so a whole wrap costs one measurement per token after the
/// first.
pub struct Lines<'a, M: ?Sized> {
    tokens: SplitWhitespace<'a>,
    current: Option<String>,
    yielded: bool,
    font_size: f64,
    max_width: f64,
    style: TextStyle,
    measure: &'a M,
}

impl<M: TextMeasure + ?Sized> Iterator for Lines<'_, M> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            let Some(token) = self.tokens.next() else {
                let last = self.current.take().or_else(|| {
                    // Blank content still reserves one (empty) line.
                    (!self.yielded).then(String::new)
                });
                self.yielded |= last.is_some();
                return last;
            };

            let Some(mut line) = self.current.take() else {
                self.current = Some(token.to_owned());
                continue;
            };

            let committed_len = line.len();
            line.push(' ');
            line.push_str(token);

            if self.measure.measure(&line, self.font_size, self.style) > self.max_width {
                line.truncate(committed_len);
                self.current = Some(token.to_owned());
                self.yielded = true;
                return Some(line);
            }
            self.current = Some(line);
        }
    }
}

impl<M: TextMeasure + ?Sized> std::iter::FusedIterator for Lines<'_, M> {}

/// Start wrapping `request` without collecting the lines.
///
/// A token wider than `max_width` on its own is never split: it occupies a
/// line by itself and overflows.
pub fn wrap_lines<'a, M: TextMeasure + ?Sized>(
    request: &TextBlockRequest<'a>,
    measure: &'a M,
) -> Result<Lines<'a, M>> {
    request.validate()?;
    Ok(Lines {
        tokens: request.content.split_whitespace(),
        current: None,
        yielded: false,
        font_size: request.font_size,
        max_width: request.max_width,
        style: request.style,
        measure,
    })
}

/// Wrap `request` and compute the size of the block the lines occupy.
pub fn layout<M: TextMeasure + ?Sized>(
    request: &TextBlockRequest<'_>,
    metrics: &LineMetrics,
    measure: &M,
) -> Result<LaidOutText> {
    require_positive("line height factor", metrics.line_height_factor)?;
    require_non_negative("vertical padding", metrics.vertical_padding)?;
    require_non_negative("horizontal padding", metrics.horizontal_padding)?;

    let lines: Vec<String> = wrap_lines(request, measure)?.collect();
    let line_height = request.font_size * metrics.line_height_factor;

    trace!(
        lines = lines.len(),
        font_size = request.font_size,
        max_width = request.max_width,
        "Text laid out"
    );

    Ok(LaidOutText {
        block_width: request.max_width + metrics.horizontal_padding,
        block_height: lines.len() as f64 * line_height + metrics.vertical_padding,
        line_height,
        top_padding: metrics.vertical_padding / 2.0,
        lines,
    })
}
