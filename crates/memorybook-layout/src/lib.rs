// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// memorybook-layout — Text layout and page geometry for Memory Book.
//
// Two pure, stateless components: a greedy word-wrap engine that turns a
// string into measured lines, and a fitter that scales an intrinsic aspect
// ratio into a bounding box. Neither touches files or rendering backends; text
// width comes from an injected `TextMeasure`.

pub mod fit;
pub mod geometry;
pub mod measure;
pub mod text;

pub use fit::{FitRequest, FittedRect, fit, fit_in, place};
pub use geometry::{Anchor, Rect};
pub use measure::TextMeasure;
pub use text::{LaidOutText, Lines, TextBlockRequest, layout, wrap_lines};

pub use memorybook_core::{LineMetrics, TextStyle};

use memorybook_core::error::{MemoryBookError, Result};

/// Reject zero, negative, NaN and infinite values.
pub(crate) fn require_positive(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(MemoryBookError::InvalidArgument(format!(
            "{name} must be a positive finite number, got {value}"
        )))
    }
}

/// Reject negative, NaN and infinite values.
pub(crate) fn require_non_negative(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(MemoryBookError::InvalidArgument(format!(
            "{name} must be a non-negative finite number, got {value}"
        )))
    }
}
