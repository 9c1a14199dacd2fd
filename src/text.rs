// Copyright 2025 the Coordraw Authors
// SPDX-License-Identifier: Apache-2.0

//! Text drawing helpers on top of parley layout and masonry's glyph
//! rendering. Everything here is a pure rendering side effect; no state.

use kurbo::{Affine, Point, Rect, Size};
use masonry::core::{BrushIndex, StyleProperty, render_text};
use masonry::vello::Scene;
use masonry::vello::peniko::{Brush, Color, Fill};
use parley::GenericFamily;
use parley::{FontContext, LayoutContext};

/// Lay out a single run of text at the given font size.
pub fn layout_text(text: &str, font_size: f32) -> parley::Layout<BrushIndex> {
    let mut font_cx = FontContext::default();
    let mut layout_cx = LayoutContext::new();

    let mut builder = layout_cx.ranged_builder(&mut font_cx, text, 1.0, false);
    builder.push_default(StyleProperty::FontSize(font_size));
    builder.push_default(StyleProperty::FontStack(parley::FontStack::Single(
        parley::FontFamily::Generic(GenericFamily::SansSerif),
    )));
    builder.push_default(StyleProperty::Brush(BrushIndex(0)));
    let mut layout = builder.build(text);
    layout.break_all_lines(None);
    layout
}

/// Measure text without drawing it.
pub fn measure_text(text: &str, font_size: f32) -> Size {
    let layout = layout_text(text, font_size);
    Size::new(layout.width() as f64, layout.height() as f64)
}

/// Draw text with its top-left corner at `origin`. Returns the drawn size.
pub fn draw_text(
    scene: &mut Scene,
    text: &str,
    font_size: f32,
    origin: Point,
    color: Color,
) -> Size {
    let layout = layout_text(text, font_size);
    let size = Size::new(layout.width() as f64, layout.height() as f64);

    let brushes = vec![Brush::Solid(color)];
    render_text(
        scene,
        Affine::translate((origin.x, origin.y)),
        &layout,
        &brushes,
        false, // No hinting
    );
    size
}

/// Draw text centered on `center`. Returns the drawn size.
pub fn draw_text_centered(
    scene: &mut Scene,
    text: &str,
    font_size: f32,
    center: Point,
    color: Color,
) -> Size {
    let layout = layout_text(text, font_size);
    let size = Size::new(layout.width() as f64, layout.height() as f64);

    let origin = Point::new(center.x - size.width / 2.0, center.y - size.height / 2.0);
    let brushes = vec![Brush::Solid(color)];
    render_text(
        scene,
        Affine::translate((origin.x, origin.y)),
        &layout,
        &brushes,
        false,
    );
    size
}

/// Draw a coordinate label bubble: a rounded rectangle filled with the
/// shape's color, a white border, and white text, centered on `center`.
pub fn draw_label_bubble(
    scene: &mut Scene,
    center: Point,
    text: &str,
    font_size: f32,
    fill: Color,
    outline: Color,
    text_color: Color,
) {
    let layout = layout_text(text, font_size);
    let text_width = layout.width() as f64;
    let text_height = layout.height() as f64;

    let bubble_padding = 4.0;
    let bubble = Rect::from_center_size(
        center,
        Size::new(
            text_width + bubble_padding * 2.0,
            text_height + bubble_padding * 2.0,
        ),
    )
    .to_rounded_rect(4.0);

    scene.fill(
        Fill::NonZero,
        Affine::IDENTITY,
        &Brush::Solid(fill),
        None,
        &bubble,
    );
    scene.stroke(
        &kurbo::Stroke::new(1.5),
        Affine::IDENTITY,
        &Brush::Solid(outline),
        None,
        &bubble,
    );

    let text_pos = Point::new(center.x - text_width / 2.0, center.y - text_height / 2.0);
    let brushes = vec![Brush::Solid(text_color)];
    render_text(
        scene,
        Affine::translate((text_pos.x, text_pos.y)),
        &layout,
        &brushes,
        false,
    );
}
