// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Page planning — where every text line, box, dot and photo goes on each album
// page. Plans are plain geometry in top-left-origin points; the PDF writer
// only turns them into drawing operations, and the CLI preview prints them.

use memorybook_core::error::Result;
use memorybook_core::{AlbumConfig, AlbumDetails, LineMetrics, TextStyle};
use memorybook_layout::{Anchor, Rect, TextBlockRequest, TextMeasure, fit_in, layout};
use tracing::{debug, warn};

use crate::pdf::metrics::HELVETICA_ASCENT;

/// Height of the accent bar across the top of photo and closing pages.
const TOP_BAR_HEIGHT: f64 = 5.0;
/// Horizontal inset of the name lines inside the cover's name box.
const NAME_BOX_INSET: f64 = 15.0;
const SHADOW_OFFSET: f64 = 2.0;
const RULE_THICKNESS: f64 = 2.0;

/// One line of text, horizontally centred on `center_x`.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub text: String,
    pub center_x: f64,
    /// Baseline position measured from the top of the page.
    pub baseline: f64,
}

/// Laid-out text positioned on a page.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedText {
    pub lines: Vec<PlacedLine>,
    pub font_size: f64,
    pub style: TextStyle,
    /// Height of the full laid-out block, including lines that were dropped.
    pub block_height: f64,
    /// Lines that did not fit in the available height.
    pub dropped_lines: usize,
}

/// A filled circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dot {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
}

/// A horizontal rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rule {
    pub x1: f64,
    pub x2: f64,
    pub y: f64,
    pub thickness: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CoverPlan {
    pub header_bar: Rect,
    pub header_dots: [Dot; 2],
    pub title: PlacedText,
    pub rule: Rule,
    pub names_box: Rect,
    pub from_line: PlacedText,
    pub to_line: PlacedText,
    pub footer_dots: [Dot; 3],
}

#[derive(Debug, Clone, PartialEq)]
pub struct PhotoPagePlan {
    /// 1-based page number printed at the bottom.
    pub number: usize,
    pub top_bar: Rect,
    /// Space reserved for the photo; the photo is fitted inside it.
    pub photo_area: Rect,
    pub photo: Rect,
    pub shadow: Rect,
    /// White mat around the photo (also the outline path).
    pub frame: Rect,
    pub caption_box: Rect,
    /// `None` for blank captions.
    pub caption: Option<PlacedText>,
    pub page_number: PlacedText,
    pub page_dot: Dot,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClosingPlan {
    pub top_bar: Rect,
    pub message: PlacedText,
    pub footer_dots: [Dot; 3],
}

#[derive(Debug, Clone, PartialEq)]
pub enum PagePlan {
    Cover(CoverPlan),
    Photo(PhotoPagePlan),
    Closing(ClosingPlan),
}

/// Computes page plans for one paper size and configuration.
pub struct PagePlanner<'a, M: ?Sized> {
    config: &'a AlbumConfig,
    measure: &'a M,
    page_width: f64,
    page_height: f64,
}

impl<'a, M: TextMeasure + ?Sized> PagePlanner<'a, M> {
    pub fn new(config: &'a AlbumConfig, measure: &'a M) -> Self {
        let (page_width, page_height) = config.paper_size.dimensions_pt();
        Self {
            config,
            measure,
            page_width,
            page_height,
        }
    }

    pub fn page_size(&self) -> (f64, f64) {
        (self.page_width, self.page_height)
    }

    /// Plan every page of an album: cover, one page per `(width, height,
    /// caption)` photo, then the closing page when `details` has a message.
    pub fn plan_album<'c>(
        &self,
        details: &AlbumDetails,
        photos: impl IntoIterator<Item = ((u32, u32), &'c str)>,
    ) -> Result<Vec<PagePlan>> {
        let mut pages = vec![PagePlan::Cover(self.cover(details)?)];
        for (index, (dimensions, caption)) in photos.into_iter().enumerate() {
            pages.push(PagePlan::Photo(self.photo_page(index, dimensions, caption)?));
        }
        let closing = details.closing_message.as_deref();
        if let Some(message) = closing.filter(|message| !message.trim().is_empty()) {
            pages.push(PagePlan::Closing(self.closing(message)?));
        }
        Ok(pages)
    }

    // -- Cover ----------------------------------------------------------------

    pub fn cover(&self, details: &AlbumDetails) -> Result<CoverPlan> {
        let p = &self.config.profile;
        let w = self.page_width;
        let center = w / 2.0;

        let header_bar = Rect::new(0.0, 0.0, w, p.header_bar_height);
        let header_dots = [
            Dot {
                cx: p.header_dot_inset,
                cy: p.header_dot_y,
                radius: p.header_dot_radius,
            },
            Dot {
                cx: w - p.header_dot_inset,
                cy: p.header_dot_y,
                radius: p.header_dot_radius,
            },
        ];

        let title_width = (w - 3.0 * p.margin).min(p.title_max_width);
        let title = self.place_text(
            "title",
            &details.title,
            p.title_font_size,
            TextStyle::REGULAR,
            &self.config.title_metrics,
            title_width,
            center,
            p.title_y,
            None,
        )?;

        // Long titles push everything below them down.
        let rule_y = p.title_y + title.block_height.max(p.title_height) + p.rule_gap;
        let rule = Rule {
            x1: center - p.rule_half_width,
            x2: center + p.rule_half_width,
            y: rule_y,
            thickness: RULE_THICKNESS,
        };

        let box_width = p.names_box_width.min(w - 2.0 * p.margin);
        let names_box = Rect::new(
            center - box_width / 2.0,
            rule_y + p.names_box_gap,
            box_width,
            p.names_box_height,
        );
        let name_width = box_width - 2.0 * NAME_BOX_INSET;

        let from_line = self.place_text(
            "from line",
            &format!("From: {}", details.from_name),
            p.name_font_size,
            TextStyle::REGULAR,
            &self.config.name_metrics,
            name_width,
            names_box.center_x(),
            names_box.y + p.from_line_offset,
            Some(p.to_line_offset - p.from_line_offset),
        )?;
        let to_line = self.place_text(
            "to line",
            &format!("To: {}", details.to_name),
            p.name_font_size,
            TextStyle::REGULAR,
            &self.config.name_metrics,
            name_width,
            names_box.center_x(),
            names_box.y + p.to_line_offset,
            Some(p.names_box_height - p.to_line_offset),
        )?;

        debug!(title_lines = title.lines.len(), rule_y, "Cover planned");

        Ok(CoverPlan {
            header_bar,
            header_dots,
            title,
            rule,
            names_box,
            from_line,
            to_line,
            footer_dots: self.footer_dots(),
        })
    }

    // -- Photo pages ----------------------------------------------------------

    /// Plan the page for the photo at `index` (0-based) with the given
    /// intrinsic pixel size.
    pub fn photo_page(
        &self,
        index: usize,
        (pixel_width, pixel_height): (u32, u32),
        caption: &str,
    ) -> Result<PhotoPagePlan> {
        let p = &self.config.profile;
        let (w, h) = (self.page_width, self.page_height);

        let area_width = w - 2.0 * p.photo_margin;
        let available_height = h - p.photo_top - p.caption_box_height - p.bottom_space;
        let area_height = (area_width * self.config.frame_aspect).min(available_height);
        let photo_area = Rect::new(p.photo_margin, p.photo_top, area_width, area_height);

        let photo = fit_in(
            f64::from(pixel_width),
            f64::from(pixel_height),
            &photo_area,
            Anchor::TopCenter,
        )?;

        let caption_box = Rect::new(
            p.photo_margin,
            photo.bottom() + p.caption_gap,
            area_width,
            p.caption_box_height,
        );

        let caption = if caption.trim().is_empty() {
            None
        } else {
            Some(self.place_text(
                "caption",
                caption,
                p.caption_font_size,
                TextStyle::REGULAR,
                &self.config.caption_metrics,
                caption_box.width - 2.0 * p.caption_padding,
                caption_box.center_x(),
                caption_box.y + p.caption_padding,
                Some(caption_box.height - 2.0 * p.caption_padding),
            )?)
        };

        let number = index + 1;
        let number_baseline = h - p.page_number_offset;
        let page_number = PlacedText {
            lines: vec![PlacedLine {
                text: number.to_string(),
                center_x: w / 2.0,
                baseline: number_baseline,
            }],
            font_size: p.page_number_size,
            style: TextStyle::REGULAR,
            block_height: p.page_number_size,
            dropped_lines: 0,
        };

        debug!(
            page = number,
            photo_w = photo.width,
            photo_h = photo.height,
            "Photo page planned"
        );

        Ok(PhotoPagePlan {
            number,
            top_bar: Rect::new(0.0, 0.0, w, TOP_BAR_HEIGHT),
            photo_area,
            photo,
            shadow: photo.translate(SHADOW_OFFSET, SHADOW_OFFSET),
            frame: photo.outset(p.frame_padding),
            caption_box,
            caption,
            page_number,
            page_dot: Dot {
                cx: w / 2.0,
                cy: number_baseline - p.page_dot_gap,
                radius: p.page_dot_radius,
            },
        })
    }

    // -- Closing page ---------------------------------------------------------

    pub fn closing(&self, message: &str) -> Result<ClosingPlan> {
        let p = &self.config.profile;
        let w = self.page_width;

        let font_size = p.name_font_size * 1.2;
        let max_width = (w - 3.0 * p.margin).min(p.title_max_width);

        // Lay out once to learn the block height, then centre it vertically.
        let block_height = layout(
            &TextBlockRequest::new(message, font_size, max_width).with_style(TextStyle::ITALIC),
            &self.config.title_metrics,
            self.measure,
        )?
        .block_height;
        let top = ((self.page_height - block_height) / 2.0).max(p.header_bar_height);

        let message = self.place_text(
            "closing message",
            message,
            font_size,
            TextStyle::ITALIC,
            &self.config.title_metrics,
            max_width,
            w / 2.0,
            top,
            None,
        )?;

        Ok(ClosingPlan {
            top_bar: Rect::new(0.0, 0.0, w, TOP_BAR_HEIGHT),
            message,
            footer_dots: self.footer_dots(),
        })
    }

    // -- Helpers --------------------------------------------------------------

    fn footer_dots(&self) -> [Dot; 3] {
        let p = &self.config.profile;
        let center = self.page_width / 2.0;
        let cy = self.page_height - p.footer_offset;
        [-1.0, 0.0, 1.0].map(|side| Dot {
            cx: center + side * p.footer_dot_spacing,
            cy,
            radius: p.footer_dot_radius,
        })
    }

    /// Lay out `content` and position its lines centred on `center_x`, with
    /// the block's top edge at `top`. With `max_height`, lines whose bottom
    /// would fall below `top + max_height` are dropped and logged under
    /// `label`.
    #[allow(clippy::too_many_arguments)]
    fn place_text(
        &self,
        label: &str,
        content: &str,
        font_size: f64,
        style: TextStyle,
        metrics: &LineMetrics,
        max_width: f64,
        center_x: f64,
        top: f64,
        max_height: Option<f64>,
    ) -> Result<PlacedText> {
        let request = TextBlockRequest::new(content, font_size, max_width).with_style(style);
        let laid = layout(&request, metrics, self.measure)?;

        let mut lines = Vec::with_capacity(laid.lines.len());
        let mut dropped_lines = 0;
        for (index, text) in laid.lines.iter().enumerate() {
            let line_top = laid.line_top(index);
            if max_height.is_some_and(|limit| line_top + laid.line_height > limit) {
                dropped_lines += 1;
                continue;
            }
            lines.push(PlacedLine {
                text: text.clone(),
                center_x,
                baseline: top + line_top + HELVETICA_ASCENT * font_size,
            });
        }

        if dropped_lines > 0 {
            warn!(
                text = label,
                kept = lines.len(),
                dropped = dropped_lines,
                "Text too long for its box; trailing lines dropped"
            );
        }

        Ok(PlacedText {
            lines,
            font_size,
            style,
            block_height: laid.block_height,
            dropped_lines,
        })
    }
}
