// Copyright 2025 the Hedgerow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewport-aware popup placement.

use kurbo::{Point, Rect, Size};

/// Margin kept between a placed popup and the viewport edges.
pub const DEFAULT_MARGIN: f64 = 20.0;

/// Where a popup should go.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Placement {
    /// Pin the popup's top-left corner at the point.
    At(Point),
    /// The popup cannot fit beside the anchor; let it fill the viewport.
    Fill,
}

/// Chooses where a popup of `size` opens for a pointer at `anchor`.
///
/// The decision walks a short ladder inside `viewport` shrunk by `margin`
/// on every side:
///
/// 1. The anchor is clamped so the popup's top edge stays reachable: the x
///    coordinate is capped at the right margin, and the y coordinate is
///    pulled up whenever the popup would run past the bottom.
/// 2. If the popup fits beside the clamped anchor both horizontally and
///    vertically, it opens flush with it, preferring the left side so the
///    pointer ends up over the popup's near edge.
/// 3. Otherwise, if the popup fits somewhere inside the margins at all, it
///    is clamped into them, as close to the anchor as possible.
/// 4. Otherwise the popup is told to [`Fill`](Placement::Fill) the viewport.
#[must_use]
pub fn place(anchor: Point, size: Size, viewport: Rect, margin: f64) -> Placement {
    let l = viewport.x0 + margin;
    let t = viewport.y0 + margin;
    let r = viewport.x1 - margin;
    let b = viewport.y1 - margin;

    let x = if anchor.x > r { r } else { anchor.x };
    let y = if anchor.y + size.height > b {
        b - size.height
    } else {
        anchor.y
    };

    let fits_left = x - size.width > l;
    let fits_right = x + size.width < r;
    let fits_top = y - size.height > t;
    let fits_bottom = y + size.height < b;

    if (fits_left || fits_right) && (fits_top || fits_bottom) {
        let left = if fits_left { x - size.width } else { x };
        return Placement::At(Point::new(left, y));
    }
    if r - l > size.width && b - t > size.height {
        let left = l.max(x - size.width);
        let top = y.min(b - size.height);
        return Placement::At(Point::new(left, top));
    }
    Placement::Fill
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Rect = Rect::new(0.0, 0.0, 1280.0, 800.0);
    const MENU: Size = Size::new(180.0, 220.0);

    #[test]
    fn open_space_prefers_the_left_side() {
        let spot = place(Point::new(600.0, 300.0), MENU, VIEWPORT, DEFAULT_MARGIN);
        assert_eq!(spot, Placement::At(Point::new(420.0, 300.0)));
    }

    #[test]
    fn near_the_left_edge_falls_back_to_the_right_side() {
        let spot = place(Point::new(100.0, 300.0), MENU, VIEWPORT, DEFAULT_MARGIN);
        assert_eq!(spot, Placement::At(Point::new(100.0, 300.0)));
    }

    #[test]
    fn anchor_past_the_right_margin_is_capped() {
        let spot = place(Point::new(1400.0, 300.0), MENU, VIEWPORT, DEFAULT_MARGIN);
        // x caps at 1260, then the popup hangs to its left.
        assert_eq!(spot, Placement::At(Point::new(1080.0, 300.0)));
    }

    #[test]
    fn bottom_overflow_pulls_the_popup_up() {
        let spot = place(Point::new(600.0, 700.0), MENU, VIEWPORT, DEFAULT_MARGIN);
        // y becomes 780 - 220 = 560; the popup still opens to the left.
        assert_eq!(spot, Placement::At(Point::new(420.0, 560.0)));
    }

    #[test]
    fn popup_too_tall_to_flank_the_anchor_clamps_into_the_margins() {
        let viewport = Rect::new(0.0, 0.0, 800.0, 600.0);
        let tall = Size::new(200.0, 400.0);
        let spot = place(Point::new(400.0, 300.0), tall, viewport, DEFAULT_MARGIN);
        assert_eq!(spot, Placement::At(Point::new(200.0, 180.0)));
    }

    #[test]
    fn popup_larger_than_the_viewport_fills_it() {
        let viewport = Rect::new(0.0, 0.0, 300.0, 200.0);
        let big = Size::new(280.0, 180.0);
        let spot = place(Point::new(150.0, 100.0), big, viewport, DEFAULT_MARGIN);
        assert_eq!(spot, Placement::Fill);
    }

    #[test]
    fn offset_viewports_shift_the_margins_with_them() {
        let viewport = Rect::new(100.0, 100.0, 500.0, 400.0);
        let spot = place(Point::new(300.0, 200.0), Size::new(100.0, 100.0), viewport, 10.0);
        assert_eq!(spot, Placement::At(Point::new(200.0, 200.0)));
    }
}
