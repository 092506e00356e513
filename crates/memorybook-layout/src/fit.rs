// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Fit-within scaling: the largest aspect-preserving rectangle inside a box.

use memorybook_core::error::Result;

use crate::geometry::{Anchor, Rect};
use crate::require_positive;

/// Content of `intrinsic_*` size to be scaled into a `bounding_*` box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitRequest {
    pub intrinsic_width: f64,
    pub intrinsic_height: f64,
    pub bounding_width: f64,
    pub bounding_height: f64,
}

impl FitRequest {
    pub fn new(
        intrinsic_width: f64,
        intrinsic_height: f64,
        bounding_width: f64,
        bounding_height: f64,
    ) -> Self {
        Self {
            intrinsic_width,
            intrinsic_height,
            bounding_width,
            bounding_height,
        }
    }
}

/// Size of the fitted content. Never larger than the bounding box and with the
/// intrinsic aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FittedRect {
    pub width: f64,
    pub height: f64,
}

/// Scale the intrinsic size up or down until it touches the bounding box on
/// one axis without exceeding it on the other. Never crops.
pub fn fit(request: &FitRequest) -> Result<FittedRect> {
    require_positive("intrinsic width", request.intrinsic_width)?;
    require_positive("intrinsic height", request.intrinsic_height)?;
    require_positive("bounding width", request.bounding_width)?;
    require_positive("bounding height", request.bounding_height)?;

    // Full width first; equivalent to `bounding_width / aspect`.
    let height_at_full_width =
        request.bounding_width * request.intrinsic_height / request.intrinsic_width;
    if height_at_full_width <= request.bounding_height {
        return Ok(FittedRect {
            width: request.bounding_width,
            height: height_at_full_width,
        });
    }

    Ok(FittedRect {
        width: request.bounding_height * request.intrinsic_width / request.intrinsic_height,
        height: request.bounding_height,
    })
}

/// Position a fitted size inside `bounds`.
pub fn place(fitted: FittedRect, bounds: &Rect, anchor: Anchor) -> Rect {
    let spare_x = bounds.width - fitted.width;
    let spare_y = bounds.height - fitted.height;
    let (dx, dy) = match anchor {
        Anchor::Center => (spare_x / 2.0, spare_y / 2.0),
        Anchor::TopCenter => (spare_x / 2.0, 0.0),
        Anchor::TopLeft => (0.0, 0.0),
        Anchor::BottomCenter => (spare_x / 2.0, spare_y),
    };
    Rect::new(bounds.x + dx, bounds.y + dy, fitted.width, fitted.height)
}

/// [`fit`] content of the given intrinsic size into `bounds`, then [`place`] it.
pub fn fit_in(
    intrinsic_width: f64,
    intrinsic_height: f64,
    bounds: &Rect,
    anchor: Anchor,
) -> Result<Rect> {
    let fitted = fit(&FitRequest::new(
        intrinsic_width,
        intrinsic_height,
        bounds.width,
        bounds.height,
    ))?;
    Ok(place(fitted, bounds, anchor))
}

#[cfg(test)]
mod tests {
    use memorybook_core::MemoryBookError;

    use super::*;

    fn fit4(iw: f64, ih: f64, bw: f64, bh: f64) -> FittedRect {
        fit(&FitRequest::new(iw, ih, bw, bh)).unwrap()
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-6 * a.abs().max(b.abs()).max(1.0)
    }

    #[test]
    fn wide_image_in_tall_box_is_width_limited() {
        let r = fit4(4.0, 3.0, 800.0, 1000.0);
        assert!(close(r.width, 800.0));
        assert!(close(r.height, 600.0));
    }

    #[test]
    fn tall_image_in_short_box_is_height_limited() {
        let r = fit4(3.0, 4.0, 800.0, 300.0);
        assert!(close(r.width, 225.0));
        assert!(close(r.height, 300.0));
    }

    #[test]
    fn exact_aspect_match_fills_the_box() {
        let r = fit4(1600.0, 1200.0, 400.0, 300.0);
        assert!(close(r.width, 400.0));
        assert!(close(r.height, 300.0));
    }

    #[test]
    fn small_content_is_scaled_up() {
        let r = fit4(10.0, 10.0, 500.0, 200.0);
        assert!(close(r.width, 200.0));
        assert!(close(r.height, 200.0));
    }

    #[test]
    fn stays_in_bounds_and_keeps_aspect() {
        let sizes = [1.0, 3.0, 7.5, 480.0, 1080.0, 4032.0, 12345.6];
        for &iw in &sizes {
            for &ih in &sizes {
                for &(bw, bh) in &[(515.0, 386.0), (100.0, 1000.0), (0.5, 0.25), (3000.0, 3000.0)] {
                    let r = fit4(iw, ih, bw, bh);
                    assert!(r.width <= bw * (1.0 + 1e-9), "{iw}x{ih} in {bw}x{bh}");
                    assert!(r.height <= bh * (1.0 + 1e-9), "{iw}x{ih} in {bw}x{bh}");
                    assert!(close(r.width / r.height, iw / ih), "{iw}x{ih} in {bw}x{bh}");
                    assert!(close(r.width, bw) || close(r.height, bh));
                }
            }
        }
    }

    #[test]
    fn rejects_non_positive_and_non_finite_inputs() {
        let bad = [
            FitRequest::new(1.0, 1.0, -5.0, 10.0),
            FitRequest::new(0.0, 1.0, 5.0, 10.0),
            FitRequest::new(1.0, -2.0, 5.0, 10.0),
            FitRequest::new(1.0, 1.0, 5.0, 0.0),
            FitRequest::new(f64::NAN, 1.0, 5.0, 10.0),
            FitRequest::new(1.0, 1.0, f64::INFINITY, 10.0),
        ];
        for request in bad {
            assert!(
                matches!(fit(&request), Err(MemoryBookError::InvalidArgument(_))),
                "{request:?} should be rejected"
            );
        }
    }

    #[test]
    fn anchors_position_within_bounds() {
        let bounds = Rect::new(40.0, 60.0, 515.0, 386.0);
        let fitted = FittedRect {
            width: 289.5,
            height: 386.0,
        };

        let centered = place(fitted, &bounds, Anchor::Center);
        assert!(close(centered.x, 40.0 + (515.0 - 289.5) / 2.0));
        assert!(close(centered.y, 60.0));

        let top_left = place(fitted, &bounds, Anchor::TopLeft);
        assert_eq!((top_left.x, top_left.y), (40.0, 60.0));

        let wide = FittedRect {
            width: 515.0,
            height: 200.0,
        };
        assert!(close(place(wide, &bounds, Anchor::TopCenter).y, 60.0));
        assert!(close(place(wide, &bounds, Anchor::Center).y, 60.0 + 93.0));
        assert!(close(place(wide, &bounds, Anchor::BottomCenter).bottom(), bounds.bottom()));

        for anchor in [Anchor::Center, Anchor::TopCenter, Anchor::TopLeft, Anchor::BottomCenter] {
            assert!(bounds.contains(&place(fitted, &bounds, anchor), 1e-9));
        }
    }

    #[test]
    fn fit_in_combines_fit_and_place() {
        let bounds = Rect::new(0.0, 0.0, 800.0, 1000.0);
        let r = fit_in(4.0, 3.0, &bounds, Anchor::Center).unwrap();
        assert!(close(r.width, 800.0));
        assert!(close(r.y, 200.0));
    }
}
