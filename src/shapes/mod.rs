// Copyright 2025 the Coordraw Authors
// SPDX-License-Identifier: Apache-2.0

//! The drawable shape model.
//!
//! Shapes store only mathematical-space data plus a display color. Screen
//! geometry is *never* cached: every render re-derives position and size
//! from the current viewport, so zoom changes after creation always
//! reposition shapes correctly.

mod circle;
mod ellipse;
mod line;

pub use circle::Circle;
pub use ellipse::Ellipse;
pub use line::Line;

use crate::viewport::ViewPort;
use masonry::vello::Scene;

/// A placed shape. The set is closed; the panel offers exactly these three.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Circle(Circle),
    Ellipse(Ellipse),
    Line(Line),
}

impl Shape {
    /// Draw the shape, its center/endpoint markers and its coordinate
    /// label onto the scene. Pure rendering side effect.
    pub fn render(&self, scene: &mut Scene, viewport: &ViewPort) {
        match self {
            Shape::Circle(c) => c.render(scene, viewport),
            Shape::Ellipse(e) => e.render(scene, viewport),
            Shape::Line(l) => l.render(scene, viewport),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;
    use masonry::vello::peniko::Color;

    #[test]
    fn stored_coordinates_are_zoom_independent() {
        let circle = Circle {
            center: Point::new(3.0, 4.0),
            radius: 5.0,
            color: Color::from_rgb8(220, 53, 69),
        };

        // The viewport maps the same stored center differently at each
        // zoom; the shape itself never changes.
        let vp1 = ViewPort::new(Point::new(400.0, 300.0), 1.0);
        let vp2 = ViewPort::new(Point::new(400.0, 300.0), 2.0);

        assert_eq!(vp1.to_screen(circle.center), Point::new(415.0, 280.0));
        assert_eq!(vp2.to_screen(circle.center), Point::new(430.0, 260.0));
        assert_eq!(circle.center, Point::new(3.0, 4.0));
        assert_eq!(circle.radius, 5.0);
    }

    #[test]
    fn screen_radius_follows_zoom() {
        let circle = Circle {
            center: Point::ZERO,
            radius: 4.0,
            color: Color::from_rgb8(0, 123, 255),
        };

        let vp = ViewPort::new(Point::ZERO, 1.5);
        // 4 units * 5 px/unit * 1.5 zoom = 30 px
        assert_eq!(circle.screen_radius(&vp), 30.0);
    }
}
