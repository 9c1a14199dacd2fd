// Copyright 2025 the Coordraw Authors
// SPDX-License-Identifier: Apache-2.0

//! Grid, axes and canvas overlays.

use crate::settings;
use crate::text;
use crate::theme;
use crate::viewport::ViewPort;
use kurbo::{Affine, BezPath, Line, Point, Rect, Size, Stroke};
use masonry::util::fill_color;
use masonry::vello::Scene;
use masonry::vello::peniko::{Brush, Color};

const ARROW_SIZE: f64 = 10.0;

/// How far a tick may sit from the canvas edge before it is dropped.
const TICK_EDGE_MARGIN: f64 = 20.0;

/// Paint the full canvas backdrop: grid lines, axes with arrowheads,
/// unit ticks and numerals, the origin label, the zoom indicator and
/// the quadrant labels.
pub fn draw_grid(scene: &mut Scene, viewport: &ViewPort, canvas_size: Size) {
    let width = canvas_size.width;
    let height = canvas_size.height;
    if width <= 0.0 || height <= 0.0 {
        return;
    }

    draw_grid_lines(scene, viewport, width, height);
    draw_axes(scene, viewport, width, height);
    draw_ticks(scene, viewport, width, height);
    draw_origin_label(scene, viewport);
    draw_zoom_indicator(scene, viewport, width);
    draw_quadrant_labels(scene, viewport, height);
}

fn hairline(scene: &mut Scene, width: f64, color: Color, line: Line) {
    scene.stroke(
        &Stroke::new(width),
        Affine::IDENTITY,
        &Brush::Solid(color),
        None,
        &line,
    );
}

fn draw_grid_lines(scene: &mut Scene, viewport: &ViewPort, width: f64, height: f64) {
    let spacing = settings::canvas::GRID_SPACING * viewport.zoom;
    if spacing < 2.0 {
        return;
    }

    let mut x = 0.0;
    while x < width {
        // The axis itself is drawn separately
        if (x - viewport.center.x).abs() >= 1.0 {
            hairline(
                scene,
                1.0,
                theme::canvas::GRID_LINE,
                Line::new(Point::new(x, 0.0), Point::new(x, height)),
            );
        }
        x += spacing;
    }

    let mut y = 0.0;
    while y < height {
        if (y - viewport.center.y).abs() >= 1.0 {
            hairline(
                scene,
                1.0,
                theme::canvas::GRID_LINE,
                Line::new(Point::new(0.0, y), Point::new(width, y)),
            );
        }
        y += spacing;
    }
}

fn draw_axes(scene: &mut Scene, viewport: &ViewPort, width: f64, height: f64) {
    let cx = viewport.center.x;
    let cy = viewport.center.y;

    hairline(
        scene,
        3.0,
        theme::canvas::AXIS,
        Line::new(Point::new(cx, 0.0), Point::new(cx, height)),
    );
    hairline(
        scene,
        3.0,
        theme::canvas::AXIS,
        Line::new(Point::new(0.0, cy), Point::new(width, cy)),
    );

    // Arrowheads at all four axis ends
    let half = ARROW_SIZE / 2.0;
    let arrows = [
        // up
        [
            Point::new(cx, 5.0),
            Point::new(cx - half, 5.0 + ARROW_SIZE),
            Point::new(cx + half, 5.0 + ARROW_SIZE),
        ],
        // down
        [
            Point::new(cx, height - 5.0),
            Point::new(cx - half, height - 5.0 - ARROW_SIZE),
            Point::new(cx + half, height - 5.0 - ARROW_SIZE),
        ],
        // right
        [
            Point::new(width - 5.0, cy),
            Point::new(width - 5.0 - ARROW_SIZE, cy - half),
            Point::new(width - 5.0 - ARROW_SIZE, cy + half),
        ],
        // left
        [
            Point::new(5.0, cy),
            Point::new(5.0 + ARROW_SIZE, cy - half),
            Point::new(5.0 + ARROW_SIZE, cy + half),
        ],
    ];

    for [a, b, c] in arrows {
        let mut path = BezPath::new();
        path.move_to(a);
        path.line_to(b);
        path.line_to(c);
        path.close_path();
        fill_color(scene, &path, theme::canvas::AXIS);
    }
}

/// Unit tick marks along both axes. Major ticks every 10 units carry a
/// numeral on a small background patch; medium ticks land every 5.
fn draw_ticks(scene: &mut Scene, viewport: &ViewPort, width: f64, height: f64) {
    let cx = viewport.center.x;
    let cy = viewport.center.y;

    // Units that could possibly land on the canvas
    let unit_px = settings::canvas::PIXELS_PER_UNIT * viewport.zoom;
    let x_range = (width / unit_px).ceil() as i64;
    let y_range = (height / unit_px).ceil() as i64;

    for i in -x_range..=x_range {
        let x = cx + (i as f64 * unit_px).round();
        if x <= TICK_EDGE_MARGIN || x >= width - TICK_EDGE_MARGIN {
            continue;
        }
        if i % 10 == 0 && i != 0 {
            hairline(
                scene,
                2.0,
                theme::canvas::AXIS,
                Line::new(Point::new(x, cy - 6.0), Point::new(x, cy + 6.0)),
            );
            draw_tick_numeral(scene, i, Point::new(x, cy + 18.0));
        } else if i % 5 == 0 {
            hairline(
                scene,
                1.0,
                theme::canvas::AXIS,
                Line::new(Point::new(x, cy - 4.0), Point::new(x, cy + 4.0)),
            );
        } else {
            hairline(
                scene,
                1.0,
                theme::canvas::GRID_LINE,
                Line::new(Point::new(x, cy - 2.0), Point::new(x, cy + 2.0)),
            );
        }
    }

    for i in -y_range..=y_range {
        let y = cy - (i as f64 * unit_px).round();
        if y <= TICK_EDGE_MARGIN || y >= height - TICK_EDGE_MARGIN {
            continue;
        }
        if i % 10 == 0 && i != 0 {
            hairline(
                scene,
                2.0,
                theme::canvas::AXIS,
                Line::new(Point::new(cx - 6.0, y), Point::new(cx + 6.0, y)),
            );
            draw_tick_numeral(scene, i, Point::new(cx + 20.0, y));
        } else if i % 5 == 0 {
            hairline(
                scene,
                1.0,
                theme::canvas::AXIS,
                Line::new(Point::new(cx - 4.0, y), Point::new(cx + 4.0, y)),
            );
        } else {
            hairline(
                scene,
                1.0,
                theme::canvas::GRID_LINE,
                Line::new(Point::new(cx - 2.0, y), Point::new(cx + 2.0, y)),
            );
        }
    }
}

/// A tick numeral centered on `center`, over a background patch so it
/// stays readable where it crosses grid lines.
fn draw_tick_numeral(scene: &mut Scene, value: i64, center: Point) {
    let label = value.to_string();
    let size = text::measure_text(&label, theme::font::TINY);
    let patch = Rect::from_center_size(center, size).inflate(2.0, 1.0);
    fill_color(scene, &patch, theme::canvas::BACKGROUND);
    text::draw_text_centered(scene, &label, theme::font::TINY, center, theme::canvas::LABEL);
}

fn draw_origin_label(scene: &mut Scene, viewport: &ViewPort) {
    let center = Point::new(viewport.center.x - 15.0, viewport.center.y + 15.0);
    let size = text::measure_text("0", theme::font::TINY);
    let patch = Rect::from_center_size(center, size).inflate(2.0, 1.0);
    fill_color(scene, &patch, theme::canvas::BACKGROUND);
    text::draw_text_centered(scene, "0", theme::font::TINY, center, theme::canvas::AXIS);
}

/// Zoom chip in the canvas's top-right corner.
fn draw_zoom_indicator(scene: &mut Scene, viewport: &ViewPort, width: f64) {
    let chip = Rect::from_origin_size(Point::new(width - 120.0, 10.0), Size::new(110.0, 30.0));
    let rounded = chip.to_rounded_rect(6.0);
    fill_color(scene, &rounded, theme::panel::HEADER);
    scene.stroke(
        &Stroke::new(2.0),
        Affine::IDENTITY,
        &Brush::Solid(theme::panel::ACCENT),
        None,
        &rounded,
    );
    let label = format!("{:.1}x", viewport.zoom);
    text::draw_text_centered(
        scene,
        &label,
        theme::font::SMALL,
        chip.center(),
        theme::panel::TITLE,
    );
}

fn draw_quadrant_labels(scene: &mut Scene, viewport: &ViewPort, height: f64) {
    let cx = viewport.center.x;
    let labels = [
        ("Q1 (+,+)", Point::new(cx + 10.0, 10.0)),
        ("Q2 (-,+)", Point::new(10.0, 10.0)),
        ("Q3 (-,-)", Point::new(10.0, height - 30.0)),
        ("Q4 (+,-)", Point::new(cx + 10.0, height - 30.0)),
    ];
    for (label, origin) in labels {
        text::draw_text(scene, label, theme::font::SMALL, origin, theme::canvas::LABEL);
    }
}
