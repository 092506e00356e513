// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for Memory Book.

use serde::{Deserialize, Serialize};

/// Points per millimetre (1pt = 1/72in, 1in = 25.4mm).
const PT_PER_MM: f64 = 72.0 / 25.4;

/// Standard paper sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaperSize {
    A4,
    A5,
    Letter,
    Custom { width_mm: u32, height_mm: u32 },
}

impl PaperSize {
    /// Dimensions in millimetres (width, height).
    pub fn dimensions_mm(&self) -> (u32, u32) {
        match self {
            Self::A4 => (210, 297),
            Self::A5 => (148, 210),
            Self::Letter => (216, 279),
            Self::Custom {
                width_mm,
                height_mm,
            } => (*width_mm, *height_mm),
        }
    }

    /// Dimensions in PDF points (width, height). All page geometry is
    /// expressed in points with a top-left origin.
    pub fn dimensions_pt(&self) -> (f64, f64) {
        let (w, h) = self.dimensions_mm();
        (w as f64 * PT_PER_MM, h as f64 * PT_PER_MM)
    }
}

/// Style flags passed to text measurement and rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextStyle {
    pub italic: bool,
}

impl TextStyle {
    pub const REGULAR: Self = Self { italic: false };
    pub const ITALIC: Self = Self { italic: true };
}

/// An 8-bit sRGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RgbColor(pub u8, pub u8, pub u8);

impl RgbColor {
    pub const WHITE: Self = Self(255, 255, 255);

    /// Channels scaled to `0.0..=1.0`, as PDF colour operators expect.
    pub fn to_unit(self) -> (f32, f32, f32) {
        (
            self.0 as f32 / 255.0,
            self.1 as f32 / 255.0,
            self.2 as f32 / 255.0,
        )
    }
}

/// The text that frames an album: cover title, the two names, and an
/// optional closing message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlbumDetails {
    pub title: String,
    /// Name shown on the "From:" line of the cover.
    pub from_name: String,
    /// Name shown on the "To:" line of the cover.
    pub to_name: String,
    /// When present, a closing page carrying this message is appended.
    pub closing_message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a4_in_points() {
        let (w, h) = PaperSize::A4.dimensions_pt();
        assert!((w - 595.2756).abs() < 1e-3);
        assert!((h - 841.8898).abs() < 1e-3);
    }

    #[test]
    fn custom_size_passes_through() {
        let size = PaperSize::Custom {
            width_mm: 100,
            height_mm: 150,
        };
        assert_eq!(size.dimensions_mm(), (100, 150));
    }

    #[test]
    fn colour_to_unit_range() {
        assert_eq!(RgbColor::WHITE.to_unit(), (1.0, 1.0, 1.0));
        assert_eq!(RgbColor(0, 0, 0).to_unit(), (0.0, 0.0, 0.0));
    }
}
