// Copyright 2025 the Coordraw Authors
// SPDX-License-Identifier: Apache-2.0

//! Circle shape

use crate::text;
use crate::theme;
use crate::viewport::ViewPort;
use kurbo::{Affine, Circle as KurboCircle, Point, Stroke};
use masonry::util::fill_color;
use masonry::vello::Scene;
use masonry::vello::peniko::{Brush, Color};

/// A circle with a mathematical-space center and radius.
///
/// The radius is strictly positive; the factory never constructs one
/// otherwise.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
    pub color: Color,
}

impl Circle {
    /// Radius in screen pixels at the viewport's current zoom.
    pub fn screen_radius(&self, viewport: &ViewPort) -> f64 {
        (self.radius * viewport.scale()).round()
    }

    pub fn render(&self, scene: &mut Scene, viewport: &ViewPort) {
        let screen = viewport.to_screen(self.center);
        let radius = self.screen_radius(viewport);

        let outline = KurboCircle::new(screen, radius);
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

        // Coordinate label above the top of the circle
        let label = format!("C({},{})", self.center.x, self.center.y);
        text::draw_label_bubble(
            scene,
            Point::new(screen.x, screen.y - radius - 25.0),
            &label,
            theme::font::TINY,
            self.color,
            theme::shape::LABEL_OUTLINE,
            theme::shape::LABEL_TEXT,
        );
    }
}
