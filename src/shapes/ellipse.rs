// Copyright 2025 the Coordraw Authors
// SPDX-License-Identifier: Apache-2.0

//! Ellipse shape

use crate::text;
use crate::theme;
use crate::viewport::ViewPort;
use kurbo::{Affine, Circle as KurboCircle, Ellipse as KurboEllipse, Point, Stroke};
use masonry::util::fill_color;
use masonry::vello::Scene;
use masonry::vello::peniko::{Brush, Color};

/// An axis-aligned ellipse with mathematical-space center and radii.
///
/// Both radii are strictly positive; the factory never constructs one
/// otherwise.
#[derive(Debug, Clone, PartialEq)]
pub struct Ellipse {
    pub center: Point,
    pub radius_x: f64,
    pub radius_y: f64,
    pub color: Color,
}

impl Ellipse {
    /// Radii in screen pixels at the viewport's current zoom.
    pub fn screen_radii(&self, viewport: &ViewPort) -> (f64, f64) {
        let s = viewport.scale();
        ((self.radius_x * s).round(), (self.radius_y * s).round())
    }

    pub fn render(&self, scene: &mut Scene, viewport: &ViewPort) {
        let screen = viewport.to_screen(self.center);
        let (rx, ry) = self.screen_radii(viewport);

        let outline = KurboEllipse::new(screen, (rx, ry), 0.0);
        scene.stroke(
            &Stroke::new(theme::shape::LINE_WIDTH),
            Affine::IDENTITY,
            &Brush::Solid(self.color),
            None,
            &outline,
        );

        // Center marker
        let marker = KurboCircle::new(screen, theme::shape::POINT_RADIUS);
        fill_color(scene, &marker, self.color);

        // Coordinate label above the top of the ellipse
        let label = format!("C({},{})", self.center.x, self.center.y);
        text::draw_label_bubble(
            scene,
            Point::new(screen.x, screen.y - ry - 25.0),
            &label,
            theme::font::TINY,
            self.color,
            theme::shape::LABEL_OUTLINE,
            theme::shape::LABEL_TEXT,
        );
    }
}
