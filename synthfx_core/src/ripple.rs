// Copyright 2026 the Synthfx Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overlay placement math for the click ripple.
//!
//! A ripple is a circular overlay appended to the clicked button, expanding
//! and fading over [`RIPPLE_DURATION_MS`]. Its diameter is the larger of the
//! button's two dimensions so the fully scaled circle covers the button from
//! any origin, and it is centered on the pointer position.
//!
//! Inputs use viewport coordinates on both sides (the button's bounding box
//! and the click point), so the resulting offsets are relative to the
//! button's border box.

use kurbo::{Point, Rect};

/// Display lifetime of a ripple overlay, in milliseconds.
///
/// Matches the CSS animation length; the overlay is removed unconditionally
/// once this elapses.
pub const RIPPLE_DURATION_MS: u64 = 600;

/// Placement of one ripple overlay within its button, in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RippleGeometry {
    /// Overlay diameter: the larger of the button's width and height.
    pub size: f64,
    /// Left offset relative to the button's border box.
    pub left: f64,
    /// Top offset relative to the button's border box.
    pub top: f64,
}

/// Computes overlay placement from the button's bounding box and the click
/// point.
#[must_use]
pub fn ripple_geometry(bounds: Rect, click: Point) -> RippleGeometry {
    let size = bounds.width().max(bounds.height());
    RippleGeometry {
        size,
        left: click.x - bounds.x0 - size / 2.0,
        top: click.y - bounds.y0 - size / 2.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_is_larger_dimension() {
        let wide = ripple_geometry(Rect::new(0.0, 0.0, 100.0, 40.0), Point::new(0.0, 0.0));
        assert_eq!(wide.size, 100.0);

        let tall = ripple_geometry(Rect::new(0.0, 0.0, 40.0, 100.0), Point::new(0.0, 0.0));
        assert_eq!(tall.size, 100.0);
    }

    #[test]
    fn overlay_centers_on_click_point() {
        // Button at (10, 20), 100x40; click at viewport (50, 30).
        let g = ripple_geometry(Rect::new(10.0, 20.0, 110.0, 60.0), Point::new(50.0, 30.0));
        assert_eq!(g.size, 100.0);
        assert_eq!(g.left, -10.0);
        assert_eq!(g.top, -40.0);
        // Center of the overlay lands on the click, button-relative.
        assert_eq!(g.left + g.size / 2.0, 40.0);
        assert_eq!(g.top + g.size / 2.0, 10.0);
    }

    #[test]
    fn square_button_click_at_center() {
        let g = ripple_geometry(Rect::new(0.0, 0.0, 80.0, 80.0), Point::new(40.0, 40.0));
        assert_eq!(g.size, 80.0);
        assert_eq!(g.left, 0.0);
        assert_eq!(g.top, 0.0);
    }
}
