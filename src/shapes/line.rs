// Copyright 2025 the Coordraw Authors
// SPDX-License-Identifier: Apache-2.0

//! Line segment shape

use crate::text;
use crate::theme;
use crate::viewport::ViewPort;
use kurbo::{Affine, Circle as KurboCircle, Line as KurboLine, Point, Stroke};
use masonry::util::fill_color;
use masonry::vello::Scene;
use masonry::vello::peniko::{Brush, Color};

/// A line segment between two mathematical-space points.
///
/// Degenerate zero-length lines are allowed.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub start: Point,
    pub end: Point,
    pub color: Color,
}

impl Line {
    pub fn render(&self, scene: &mut Scene, viewport: &ViewPort) {
        let start = viewport.to_screen(self.start);
        let end = viewport.to_screen(self.end);

        scene.stroke(
            &Stroke::new(theme::shape::LINE_WIDTH),
            Affine::IDENTITY,
            &Brush::Solid(self.color),
            None,
            &KurboLine::new(start, end),
        );

        // Endpoint markers
        fill_color(
            scene,
            &KurboCircle::new(start, theme::shape::POINT_SIZE),
            self.color,
        );
        fill_color(
            scene,
            &KurboCircle::new(end, theme::shape::POINT_SIZE),
            self.color,
        );

        // Coordinate labels beside each endpoint
        let start_label = format!("({},{})", self.start.x, self.start.y);
        text::draw_label_bubble(
            scene,
            Point::new(start.x + 26.0, start.y - 16.0),
            &start_label,
            theme::font::TINY,
            self.color,
            theme::shape::LABEL_OUTLINE,
            theme::shape::LABEL_TEXT,
        );

        let end_label = format!("({},{})", self.end.x, self.end.y);
        text::draw_label_bubble(
            scene,
            Point::new(end.x + 26.0, end.y - 16.0),
            &end_label,
            theme::font::TINY,
            self.color,
            theme::shape::LABEL_OUTLINE,
            theme::shape::LABEL_TEXT,
        );
    }
}
