// Copyright 2025 the Coordraw Authors
// SPDX-License-Identifier: Apache-2.0

//! Mapping between mathematical coordinate space and screen space.
//!
//! Mathematical space is the user-facing signed (x, y) plane; screen space
//! has its origin at the top-left with y increasing downward. The mapping is
//! parameterized by the canvas center (where the mathematical origin lands)
//! and the zoom level.
//!
//! `to_screen` rounds to whole pixels and `screen_to_math` truncates toward
//! zero, so the two directions are *not* exact inverses: a round trip can be
//! off by one unit at fractional-pixel boundaries. Callers that care assert
//! a ±1 unit tolerance rather than equality.

use crate::settings;
use kurbo::Point;

/// The mathematical-to-screen mapping for the canvas.
///
/// Holds the screen position of the mathematical origin and the current
/// zoom level. Zoom is assumed positive; callers enforce the clamp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewPort {
    /// Screen position of the mathematical origin (the canvas center)
    pub center: Point,
    /// Current zoom level
    pub zoom: f64,
}

impl ViewPort {
    pub fn new(center: Point, zoom: f64) -> Self {
        Self { center, zoom }
    }

    /// Screen pixels per mathematical unit at the current zoom
    pub fn scale(&self) -> f64 {
        settings::canvas::PIXELS_PER_UNIT * self.zoom
    }

    /// Convert a mathematical point to screen space.
    ///
    /// The y axis is inverted: mathematical "up" is screen "up".
    pub fn to_screen(&self, p: Point) -> Point {
        let s = self.scale();
        Point::new(
            self.center.x + (p.x * s).round(),
            self.center.y - (p.y * s).round(),
        )
    }

    /// Convert a screen point back to mathematical space.
    ///
    /// Truncates toward zero, matching the panel's integer coordinate
    /// entry. See the module docs for the round-trip caveat.
    pub fn screen_to_math(&self, p: Point) -> Point {
        let s = self.scale();
        Point::new(
            ((p.x - self.center.x) / s).trunc(),
            ((self.center.y - p.y) / s).trunc(),
        )
    }
}

impl Default for ViewPort {
    fn default() -> Self {
        Self::new(Point::ZERO, settings::zoom::DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport(zoom: f64) -> ViewPort {
        ViewPort::new(Point::new(400.0, 300.0), zoom)
    }

    #[test]
    fn origin_maps_to_center() {
        let vp = viewport(1.0);
        assert_eq!(vp.to_screen(Point::ZERO), Point::new(400.0, 300.0));
    }

    #[test]
    fn y_axis_is_inverted() {
        let vp = viewport(1.0);
        // Mathematical up (positive y) is a smaller screen y
        let up = vp.to_screen(Point::new(0.0, 10.0));
        assert_eq!(up, Point::new(400.0, 250.0));

        let right = vp.to_screen(Point::new(10.0, 0.0));
        assert_eq!(right, Point::new(450.0, 300.0));
    }

    #[test]
    fn zoom_scales_offsets() {
        let p = Point::new(3.0, -4.0);
        let at_1 = viewport(1.0).to_screen(p);
        let at_2 = viewport(2.0).to_screen(p);

        assert_eq!(at_1, Point::new(415.0, 320.0));
        assert_eq!(at_2, Point::new(430.0, 340.0));
    }

    #[test]
    fn fractional_zoom_rounds_to_whole_pixels() {
        let vp = viewport(1.1);
        let p = vp.to_screen(Point::new(3.0, 3.0));
        // 3 * 5 * 1.1 = 16.5, rounds to 17
        assert_eq!(p, Point::new(417.0, 283.0));
        assert_eq!(p.x.fract(), 0.0);
        assert_eq!(p.y.fract(), 0.0);
    }

    #[test]
    fn round_trip_within_one_unit() {
        // Rounding out and truncating back is lossy at fractional-pixel
        // boundaries; the error never exceeds one unit.
        for zoom in [0.5, 0.7, 1.0, 1.3, 2.0, 10.0] {
            let vp = viewport(zoom);
            for x in -20..=20 {
                for y in -20..=20 {
                    let p = Point::new(f64::from(x), f64::from(y));
                    let back = vp.screen_to_math(vp.to_screen(p));
                    assert!(
                        (back.x - p.x).abs() <= 1.0 && (back.y - p.y).abs() <= 1.0,
                        "round trip of {p:?} at zoom {zoom} gave {back:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn screen_to_math_truncates_toward_zero() {
        let vp = viewport(1.0);
        // 7 px right of center is 1.4 units, truncates to 1
        assert_eq!(
            vp.screen_to_math(Point::new(407.0, 300.0)),
            Point::new(1.0, 0.0)
        );
        // 7 px left of center truncates to -1, not -2
        assert_eq!(
            vp.screen_to_math(Point::new(393.0, 300.0)),
            Point::new(-1.0, 0.0)
        );
    }
}
