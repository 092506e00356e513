// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Album configuration: text density, page spacing profile, and colour theme.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::{PaperSize, RgbColor};

/// Vertical rhythm of a laid-out text block.
///
/// A block of `n` lines is `n * font_size * line_height_factor +
/// vertical_padding` tall and `max_width + horizontal_padding` wide.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineMetrics {
    /// Line advance as a multiple of the font size.
    pub line_height_factor: f64,
    /// Total space above and below the lines (split evenly).
    pub vertical_padding: f64,
    /// Total space left and right of the wrap width.
    pub horizontal_padding: f64,
}

impl Default for LineMetrics {
    /// 1.5 line height, 20pt vertical and 40pt horizontal padding.
    fn default() -> Self {
        Self {
            line_height_factor: 1.5,
            vertical_padding: 20.0,
            horizontal_padding: 40.0,
        }
    }
}

impl LineMetrics {
    /// Tight metrics for dense caption text.
    pub fn caption() -> Self {
        Self {
            line_height_factor: 1.4,
            vertical_padding: 16.0,
            horizontal_padding: 30.0,
        }
    }

    /// Loose metrics for cover titles.
    pub fn title() -> Self {
        Self {
            line_height_factor: 1.6,
            vertical_padding: 24.0,
            horizontal_padding: 40.0,
        }
    }
}

/// Spacing and font sizes for one device class. All lengths are in points.
///
/// [`DeviceProfile::desktop`] is the default; [`DeviceProfile::compact`] is
/// the tighter variant used for small screens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceProfile {
    pub margin: f64,
    pub title_font_size: f64,
    pub name_font_size: f64,
    pub caption_font_size: f64,

    // -- Cover --
    pub header_bar_height: f64,
    pub header_dot_radius: f64,
    pub header_dot_y: f64,
    pub header_dot_inset: f64,
    pub title_y: f64,
    pub title_max_width: f64,
    pub title_height: f64,
    pub rule_gap: f64,
    pub rule_half_width: f64,
    pub names_box_width: f64,
    pub names_box_height: f64,
    pub names_box_gap: f64,
    pub from_line_offset: f64,
    pub to_line_offset: f64,
    pub footer_offset: f64,
    pub footer_dot_radius: f64,
    pub footer_dot_spacing: f64,

    // -- Photo pages --
    pub photo_margin: f64,
    pub photo_top: f64,
    pub caption_box_height: f64,
    pub bottom_space: f64,
    pub frame_padding: f64,
    pub frame_outline: f64,
    pub caption_gap: f64,
    pub caption_padding: f64,
    pub page_number_offset: f64,
    pub page_number_size: f64,
    pub page_dot_radius: f64,
    pub page_dot_gap: f64,
}

impl DeviceProfile {
    pub fn desktop() -> Self {
        Self {
            margin: 40.0,
            title_font_size: 32.0,
            name_font_size: 20.0,
            caption_font_size: 16.0,
            header_bar_height: 100.0,
            header_dot_radius: 14.0,
            header_dot_y: 50.0,
            header_dot_inset: 70.0,
            title_y: 200.0,
            title_max_width: 420.0,
            title_height: 70.0,
            rule_gap: 30.0,
            rule_half_width: 160.0,
            names_box_width: 360.0,
            names_box_height: 120.0,
            names_box_gap: 40.0,
            from_line_offset: 22.0,
            to_line_offset: 68.0,
            footer_offset: 50.0,
            footer_dot_radius: 7.0,
            footer_dot_spacing: 28.0,
            photo_margin: 40.0,
            photo_top: 60.0,
            caption_box_height: 100.0,
            bottom_space: 70.0,
            frame_padding: 10.0,
            frame_outline: 1.8,
            caption_gap: 28.0,
            caption_padding: 15.0,
            page_number_offset: 15.0,
            page_number_size: 9.0,
            page_dot_radius: 3.0,
            page_dot_gap: 12.0,
        }
    }

    pub fn compact() -> Self {
        Self {
            margin: 25.0,
            title_font_size: 24.0,
            name_font_size: 16.0,
            caption_font_size: 13.0,
            header_bar_height: 80.0,
            header_dot_radius: 10.0,
            header_dot_y: 40.0,
            header_dot_inset: 50.0,
            title_y: 160.0,
            title_max_width: 340.0,
            title_height: 50.0,
            rule_gap: 20.0,
            rule_half_width: 120.0,
            names_box_width: 300.0,
            names_box_height: 100.0,
            names_box_gap: 30.0,
            from_line_offset: 18.0,
            to_line_offset: 56.0,
            footer_offset: 40.0,
            footer_dot_radius: 5.0,
            footer_dot_spacing: 20.0,
            photo_margin: 22.0,
            photo_top: 45.0,
            caption_box_height: 90.0,
            bottom_space: 60.0,
            frame_padding: 7.0,
            frame_outline: 1.2,
            caption_gap: 22.0,
            caption_padding: 12.0,
            page_number_offset: 12.0,
            page_number_size: 8.0,
            page_dot_radius: 2.5,
            page_dot_gap: 10.0,
        }
    }
}

impl Default for DeviceProfile {
    fn default() -> Self {
        Self::desktop()
    }
}

/// Album colours.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub cover_background: RgbColor,
    pub page_background: RgbColor,
    /// Header bar, rules, frame outlines.
    pub accent: RgbColor,
    /// Header dots on the cover.
    pub highlight: RgbColor,
    /// Footer dots and caption box outline.
    pub soft: RgbColor,
    pub shadow: RgbColor,
    pub text: RgbColor,
    /// Page numbers.
    pub muted: RgbColor,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            cover_background: RgbColor(255, 240, 245),
            page_background: RgbColor(255, 250, 250),
            accent: RgbColor(220, 20, 60),
            highlight: RgbColor(255, 105, 180),
            soft: RgbColor(255, 182, 193),
            shadow: RgbColor(200, 200, 200),
            text: RgbColor(60, 60, 60),
            muted: RgbColor(150, 150, 150),
        }
    }
}

/// Settings for generating an album.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlbumConfig {
    pub paper_size: PaperSize,
    pub profile: DeviceProfile,
    pub theme: Theme,
    pub title_metrics: LineMetrics,
    pub name_metrics: LineMetrics,
    pub caption_metrics: LineMetrics,
    /// Height/width ratio of the photo area on each photo page.
    pub frame_aspect: f64,
    /// Photos whose long edge exceeds this many pixels are downscaled before
    /// embedding.
    pub max_photo_pixels: u32,
    /// Metadata title embedded in the PDF.
    pub document_title: String,
}

impl Default for AlbumConfig {
    fn default() -> Self {
        Self {
            paper_size: PaperSize::A4,
            profile: DeviceProfile::desktop(),
            theme: Theme::default(),
            title_metrics: LineMetrics::title(),
            name_metrics: LineMetrics::default(),
            caption_metrics: LineMetrics::caption(),
            frame_aspect: 0.75,
            max_photo_pixels: 2000,
            document_title: "Memory Book".into(),
        }
    }
}

impl AlbumConfig {
    /// Default settings with the compact spacing profile.
    pub fn compact() -> Self {
        Self {
            profile: DeviceProfile::compact(),
            ..Self::default()
        }
    }

    /// Load settings from a JSON file. Missing fields take their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let config = serde_json::from_str(&raw)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_use_desktop_profile() {
        let config = AlbumConfig::default();
        assert_eq!(config.profile, DeviceProfile::desktop());
        assert_eq!(config.paper_size, PaperSize::A4);
        assert_eq!(config.frame_aspect, 0.75);
    }

    #[test]
    fn caption_metrics_are_tighter_than_title() {
        let caption = LineMetrics::caption();
        let title = LineMetrics::title();
        assert!(caption.line_height_factor < title.line_height_factor);
        assert!(caption.vertical_padding < title.vertical_padding);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("album.json");
        std::fs::write(&path, r#"{ "paper_size": "Letter", "max_photo_pixels": 800 }"#).unwrap();

        let config = AlbumConfig::from_json_file(&path).unwrap();
        assert_eq!(config.paper_size, PaperSize::Letter);
        assert_eq!(config.max_photo_pixels, 800);
        assert_eq!(config.theme, Theme::default());
    }

    #[test]
    fn malformed_json_is_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("album.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = AlbumConfig::from_json_file(&path).unwrap_err();
        assert!(matches!(err, crate::MemoryBookError::Serialization(_)));
    }
}
