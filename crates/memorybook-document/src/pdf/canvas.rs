// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Page canvas — collects printpdf 0.8 operations for a single page.
//
// Callers work in top-left-origin points, the same space the page planner
// uses; the canvas flips y into PDF's bottom-left origin as it records each
// operation.

use memorybook_core::{PaperSize, RgbColor, TextStyle};
use memorybook_layout::{Rect, TextMeasure};
use printpdf::{
    Color, Line, LinePoint, Mm, Op, PaintMode, PdfPage, Point, Polygon, PolygonRing, Pt, Rgb,
    TextItem, WindingOrder, XObjectId, XObjectTransform,
};

use super::metrics::BuiltinFontMetrics;
use crate::plan::{Dot, PlacedText, Rule};

/// Control-point distance for approximating a quarter circle with a cubic
/// Bézier, as a fraction of the radius.
const KAPPA: f64 = 0.552_284_749_8;

/// Resolution at which embedded images are placed. At 72 DPI one pixel is one
/// point before scaling, so the scale factor is simply points per pixel.
const IMAGE_DPI: f32 = 72.0;

/// Path segment in top-left page coordinates.
enum Segment {
    LineTo(f64, f64),
    CurveTo {
        c1: (f64, f64),
        c2: (f64, f64),
        to: (f64, f64),
    },
}

/// Records drawing operations for one page.
pub struct PageCanvas {
    width_mm: f32,
    height_mm: f32,
    height_pt: f64,
    ops: Vec<Op>,
}

impl PageCanvas {
    pub fn new(paper_size: PaperSize) -> Self {
        let (w_mm, h_mm) = paper_size.dimensions_mm();
        let (_, h_pt) = paper_size.dimensions_pt();
        Self {
            width_mm: w_mm as f32,
            height_mm: h_mm as f32,
            height_pt: h_pt,
            ops: Vec::new(),
        }
    }

    /// Number of operations recorded so far.
    pub fn op_count(&self) -> usize {
        self.ops.len()
    }

    pub fn into_page(self) -> PdfPage {
        PdfPage::new(Mm(self.width_mm), Mm(self.height_mm), self.ops)
    }

    // -- Shapes ---------------------------------------------------------------

    pub fn fill_rect(&mut self, rect: &Rect, color: RgbColor) {
        self.set_fill(color);
        let path = self.path(
            (rect.x, rect.y),
            &[
                Segment::LineTo(rect.right(), rect.y),
                Segment::LineTo(rect.right(), rect.bottom()),
                Segment::LineTo(rect.x, rect.bottom()),
            ],
        );
        self.push_polygon(path, PaintMode::Fill);
    }

    pub fn fill_rounded_rect(&mut self, rect: &Rect, radius: f64, color: RgbColor) {
        self.set_fill(color);
        let path = self.rounded_rect_path(rect, radius);
        self.push_polygon(path, PaintMode::Fill);
    }

    pub fn stroke_rounded_rect(&mut self, rect: &Rect, radius: f64, color: RgbColor, thickness: f64) {
        self.set_outline(color, thickness);
        let path = self.rounded_rect_path(rect, radius);
        self.push_polygon(path, PaintMode::Stroke);
    }

    pub fn fill_dot(&mut self, dot: &Dot, color: RgbColor) {
        self.set_fill(color);
        let Dot { cx, cy, radius: r } = *dot;
        let k = KAPPA * r;
        let path = self.path(
            (cx + r, cy),
            &[
                Segment::CurveTo {
                    c1: (cx + r, cy + k),
                    c2: (cx + k, cy + r),
                    to: (cx, cy + r),
                },
                Segment::CurveTo {
                    c1: (cx - k, cy + r),
                    c2: (cx - r, cy + k),
                    to: (cx - r, cy),
                },
                Segment::CurveTo {
                    c1: (cx - r, cy - k),
                    c2: (cx - k, cy - r),
                    to: (cx, cy - r),
                },
                Segment::CurveTo {
                    c1: (cx + k, cy - r),
                    c2: (cx + r, cy - k),
                    to: (cx + r, cy),
                },
            ],
        );
        self.push_polygon(path, PaintMode::Fill);
    }

    pub fn rule(&mut self, rule: &Rule, color: RgbColor) {
        self.set_outline(color, rule.thickness);
        let points = vec![self.point(rule.x1, rule.y), self.point(rule.x2, rule.y)];
        self.ops.push(Op::DrawLine {
            line: Line {
                points,
                is_closed: false,
            },
        });
    }

    // -- Images ---------------------------------------------------------------

    /// Draw an embedded image stretched to `rect`. `pixel_size` is the size of
    /// the embedded raster, which may be smaller than the source photo.
    pub fn image(&mut self, id: XObjectId, pixel_size: (u32, u32), rect: &Rect) {
        let (px_w, px_h) = pixel_size;
        let bottom = self.flip(rect.bottom());
        self.ops.push(Op::UseXobject {
            id,
            transform: XObjectTransform {
                translate_x: Some(Pt(rect.x as f32)),
                translate_y: Some(Pt(bottom as f32)),
                scale_x: Some((rect.width / f64::from(px_w.max(1))) as f32),
                scale_y: Some((rect.height / f64::from(px_h.max(1))) as f32),
                dpi: Some(IMAGE_DPI),
                rotate: None,
            },
        });
    }

    // -- Text -----------------------------------------------------------------

    /// Draw every line of `text` centred on its `center_x`. Characters the
    /// builtin fonts cannot show are dropped; empty lines are skipped.
    pub fn text(&mut self, text: &PlacedText, color: RgbColor) {
        let font = BuiltinFontMetrics::font(text.style);
        let size = text.font_size;
        for line in &text.lines {
            let drawable = BuiltinFontMetrics::drawable(&line.text);
            if drawable.trim().is_empty() {
                continue;
            }
            let width = BuiltinFontMetrics.measure(&drawable, size, text.style);
            let x = line.center_x - width / 2.0;
            let y = self.flip(line.baseline);

            self.set_fill(color);
            self.ops.push(Op::StartTextSection);
            self.ops.push(Op::SetTextCursor {
                pos: Point {
                    x: Pt(x as f32),
                    y: Pt(y as f32),
                },
            });
            self.ops.push(Op::SetFontSizeBuiltinFont {
                size: Pt(size as f32),
                font: font.clone(),
            });
            self.ops.push(Op::WriteTextBuiltinFont {
                items: vec![TextItem::Text(drawable.into_owned())],
                font: font.clone(),
            });
            self.ops.push(Op::EndTextSection);
        }
    }

    // -- Internals ------------------------------------------------------------

    fn flip(&self, y: f64) -> f64 {
        self.height_pt - y
    }

    fn point(&self, x: f64, y: f64) -> LinePoint {
        LinePoint {
            p: Point {
                x: Pt(x as f32),
                y: Pt(self.flip(y) as f32),
            },
            bezier: false,
        }
    }

    /// Convert a path to printpdf points. A point flagged `bezier` announces
    /// that the next point is a control handle, so the on-curve point before a
    /// curve and its first handle carry the flag.
    fn path(&self, start: (f64, f64), segments: &[Segment]) -> Vec<LinePoint> {
        let mut points = vec![self.point(start.0, start.1)];
        for segment in segments {
            match *segment {
                Segment::LineTo(x, y) => points.push(self.point(x, y)),
                Segment::CurveTo { c1, c2, to } => {
                    if let Some(last) = points.last_mut() {
                        last.bezier = true;
                    }
                    let mut handle = self.point(c1.0, c1.1);
                    handle.bezier = true;
                    points.push(handle);
                    points.push(self.point(c2.0, c2.1));
                    points.push(self.point(to.0, to.1));
                }
            }
        }
        points
    }

    fn rounded_rect_path(&self, rect: &Rect, radius: f64) -> Vec<LinePoint> {
        let r = radius.clamp(0.0, rect.width.min(rect.height) / 2.0);
        let k = KAPPA * r;
        let (x, y, right, bottom) = (rect.x, rect.y, rect.right(), rect.bottom());
        self.path(
            (x + r, y),
            &[
                Segment::LineTo(right - r, y),
                Segment::CurveTo {
                    c1: (right - r + k, y),
                    c2: (right, y + r - k),
                    to: (right, y + r),
                },
                Segment::LineTo(right, bottom - r),
                Segment::CurveTo {
                    c1: (right, bottom - r + k),
                    c2: (right - r + k, bottom),
                    to: (right - r, bottom),
                },
                Segment::LineTo(x + r, bottom),
                Segment::CurveTo {
                    c1: (x + r - k, bottom),
                    c2: (x, bottom - r + k),
                    to: (x, bottom - r),
                },
                Segment::LineTo(x, y + r),
                Segment::CurveTo {
                    c1: (x, y + r - k),
                    c2: (x + r - k, y),
                    to: (x + r, y),
                },
            ],
        )
    }

    fn push_polygon(&mut self, points: Vec<LinePoint>, mode: PaintMode) {
        self.ops.push(Op::DrawPolygon {
            polygon: Polygon {
                rings: vec![PolygonRing { points }],
                mode,
                winding_order: WindingOrder::NonZero,
            },
        });
    }

    fn set_fill(&mut self, color: RgbColor) {
        self.ops.push(Op::SetFillColor { col: pdf_color(color) });
    }

    fn set_outline(&mut self, color: RgbColor, thickness: f64) {
        self.ops.push(Op::SetOutlineColor { col: pdf_color(color) });
        self.ops.push(Op::SetOutlineThickness {
            pt: Pt(thickness as f32),
        });
    }
}

fn pdf_color(color: RgbColor) -> Color {
    let (r, g, b) = color.to_unit();
    Color::Rgb(Rgb::new(r, g, b, None))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::PlacedLine;

    fn placed(lines: &[&str]) -> PlacedText {
        PlacedText {
            lines: lines
                .iter()
                .enumerate()
                .map(|(i, text)| PlacedLine {
                    text: (*text).to_owned(),
                    center_x: 100.0,
                    baseline: 50.0 + i as f64 * 20.0,
                })
                .collect(),
            font_size: 12.0,
            style: TextStyle::REGULAR,
            block_height: 60.0,
            dropped_lines: 0,
        }
    }

    #[test]
    fn rect_path_is_flipped_to_pdf_origin() {
        let canvas = PageCanvas::new(PaperSize::A4);
        let (_, h) = PaperSize::A4.dimensions_pt();
        let p = canvas.point(10.0, 0.0);
        assert_eq!(p.p.x, Pt(10.0));
        assert_eq!(p.p.y, Pt(h as f32));
    }

    #[test]
    fn curves_flag_start_point_and_first_handle() {
        let canvas = PageCanvas::new(PaperSize::A4);
        let path = canvas.path(
            (0.0, 0.0),
            &[
                Segment::LineTo(10.0, 0.0),
                Segment::CurveTo {
                    c1: (12.0, 0.0),
                    c2: (14.0, 2.0),
                    to: (14.0, 4.0),
                },
            ],
        );
        let flags: Vec<bool> = path.iter().map(|p| p.bezier).collect();
        assert_eq!(flags, [false, true, true, false, false]);
    }

    #[test]
    fn rounded_rect_has_four_corners() {
        let canvas = PageCanvas::new(PaperSize::A4);
        let path = canvas.rounded_rect_path(&Rect::new(0.0, 0.0, 100.0, 50.0), 8.0);
        // start + 4 * (edge end + 3 curve points)
        assert_eq!(path.len(), 17);
    }

    #[test]
    fn blank_and_undrawable_lines_are_skipped() {
        let mut canvas = PageCanvas::new(PaperSize::A4);
        canvas.text(&placed(&["", "💕"]), RgbColor::WHITE);
        assert_eq!(canvas.op_count(), 0);

        canvas.text(&placed(&["hello", "world"]), RgbColor::WHITE);
        // fill colour + five text ops, per line
        assert_eq!(canvas.op_count(), 12);
    }
}
