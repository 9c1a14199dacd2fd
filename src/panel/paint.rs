// Copyright 2025 the Coordraw Authors
// SPDX-License-Identifier: Apache-2.0

//! Panel chrome rendering.
//!
//! Draws entirely from the frame's [`PanelLayout`] region table plus the
//! current [`PanelState`], so the painted buttons and the hit-tested
//! buttons are always the same rectangles.

use super::layout::{PanelLayout, Region, RegionId, metrics};
use super::{PanelAction, PanelState};
use crate::text;
use crate::theme;
use kurbo::{Affine, Line, Point, Rect, Size, Stroke, Vec2};
use masonry::util::fill_color;
use masonry::vello::Scene;
use masonry::vello::peniko::{Brush, Color};

/// Translucent black used to shade button bottoms and shadows.
const SHADE: Color = Color::new([0.0, 0.0, 0.0, 0.25]);

pub fn paint_panel(scene: &mut Scene, layout: &PanelLayout, state: &PanelState) {
    paint_background(scene, layout);
    paint_sections(scene, layout);
    for region in &layout.regions {
        paint_region(scene, region, state);
    }
    // The header goes last so scrolled content disappears beneath it.
    paint_header(scene, layout);
    paint_scrollbar(scene, layout, state);
}

fn paint_background(scene: &mut Scene, layout: &PanelLayout) {
    let panel = Rect::from_origin_size(
        Point::new(layout.panel_x, 0.0),
        Size::new(crate::settings::panel::WIDTH, layout.height),
    );
    fill_color(scene, &panel, theme::panel::BACKGROUND);

    // Left border accent stripe
    let stripe = Rect::from_origin_size(
        Point::new(layout.panel_x, 0.0),
        Size::new(4.0, layout.height),
    );
    fill_color(scene, &stripe, theme::panel::ACCENT);
}

fn paint_header(scene: &mut Scene, layout: &PanelLayout) {
    let header = Rect::from_origin_size(
        Point::new(layout.panel_x, 0.0),
        Size::new(crate::settings::panel::WIDTH, metrics::HEADER_HEIGHT),
    );
    fill_color(scene, &header, theme::panel::HEADER);

    let divider = Line::new(
        Point::new(layout.panel_x, metrics::HEADER_HEIGHT),
        Point::new(
            layout.panel_x + crate::settings::panel::WIDTH,
            metrics::HEADER_HEIGHT,
        ),
    );
    scene.stroke(
        &Stroke::new(2.0),
        Affine::IDENTITY,
        &Brush::Solid(theme::panel::ACCENT),
        None,
        &divider,
    );

    // Title with a one-pixel drop shadow
    text::draw_text(
        scene,
        "CONTROL PANEL",
        theme::font::LARGE,
        Point::new(layout.panel_x + 22.0, 22.0),
        theme::panel::TITLE_SHADOW,
    );
    text::draw_text(
        scene,
        "CONTROL PANEL",
        theme::font::LARGE,
        Point::new(layout.panel_x + 20.0, 20.0),
        theme::panel::TITLE,
    );
}

fn paint_sections(scene: &mut Scene, layout: &PanelLayout) {
    paint_section(scene, layout.tool_section, theme::panel::ACCENT, "SELECT TOOL");
    paint_section(
        scene,
        layout.color_section,
        theme::panel::ACCENT_ALT,
        "SELECT COLOR",
    );
    paint_section(
        scene,
        layout.field_section,
        theme::button::INFO,
        "ENTER VALUES",
    );
    paint_section(
        scene,
        layout.zoom_section,
        theme::button::WARNING,
        "ZOOM CONTROLS",
    );

    // Field labels sit to the left of the boxes, outside any region rect
    for region in &layout.regions {
        if let RegionId::Field(key) = region.id {
            text::draw_text(
                scene,
                key.label(),
                theme::font::SMALL,
                Point::new(
                    layout.panel_x + metrics::FIELD_LABEL_X,
                    region.rect.y0 + 5.0,
                ),
                theme::field::LABEL,
            );
        }
    }
}

fn paint_section(scene: &mut Scene, rect: Rect, accent: Color, title: &str) {
    let rounded = rect.to_rounded_rect(10.0);
    fill_color(scene, &rounded, theme::panel::SECTION);
    scene.stroke(
        &Stroke::new(2.0),
        Affine::IDENTITY,
        &Brush::Solid(accent),
        None,
        &rounded,
    );
    text::draw_text(
        scene,
        title,
        theme::font::MEDIUM,
        Point::new(rect.x0 + 15.0, rect.y0 + 10.0),
        theme::panel::TITLE,
    );
}

fn paint_region(scene: &mut Scene, region: &Region, state: &PanelState) {
    match region.id {
        RegionId::Tool(tool) => {
            let color = if state.tool == tool {
                theme::button::PRIMARY
            } else {
                theme::button::SECONDARY
            };
            paint_button(scene, region.rect, color, tool.label(), theme::font::NORMAL);
        }
        RegionId::Swatch(i) => paint_swatch(scene, region.rect, i, state),
        RegionId::Field(key) => paint_field(scene, region.rect, key, state),
        RegionId::Action(action) => {
            let (color, label, font_size) = match action {
                PanelAction::DrawShape => {
                    (theme::button::SUCCESS, "DRAW SHAPE", theme::font::MEDIUM)
                }
                PanelAction::ClearAll => {
                    (theme::button::DANGER, "Clear All", theme::font::NORMAL)
                }
                PanelAction::ZoomIn => (theme::button::INFO, "+ Zoom", theme::font::NORMAL),
                PanelAction::ZoomOut => {
                    (theme::button::WARNING, "- Zoom", theme::font::NORMAL)
                }
                PanelAction::ResetZoom => {
                    (theme::button::SECONDARY, "Reset (F5)", theme::font::NORMAL)
                }
            };
            paint_button(scene, region.rect, color, label, font_size);
        }
    }
}

/// A raised button: drop shadow, flat face with a shaded lower edge,
/// dark outline, centered label.
fn paint_button(scene: &mut Scene, rect: Rect, color: Color, label: &str, font_size: f32) {
    let shadow = (rect + Vec2::new(0.0, 4.0)).to_rounded_rect(8.0);
    fill_color(scene, &shadow, theme::button::SHADOW);

    let face = rect.to_rounded_rect(8.0);
    fill_color(scene, &face, color);

    // Shade the lower quarter for the 3D look
    let lower = Rect::new(rect.x0, rect.y1 - rect.height() / 4.0, rect.x1, rect.y1)
        .to_rounded_rect((0.0, 0.0, 8.0, 8.0));
    fill_color(scene, &lower, SHADE);

    scene.stroke(
        &Stroke::new(2.0),
        Affine::IDENTITY,
        &Brush::Solid(theme::button::OUTLINE),
        None,
        &face,
    );

    text::draw_text_centered(
        scene,
        label,
        font_size,
        rect.center(),
        theme::button::LABEL,
    );
}

fn paint_swatch(scene: &mut Scene, rect: Rect, index: usize, state: &PanelState) {
    let (_, color) = theme::palette::SWATCHES[index];
    let selected = index == state.color_index;

    if selected {
        // Gold highlight ring around the selected color
        let ring = rect.inflate(4.0, 4.0).to_rounded_rect(6.0);
        fill_color(scene, &ring, theme::panel::HIGHLIGHT);
    } else {
        let shadow = (rect + Vec2::new(0.0, 2.0)).to_rounded_rect(5.0);
        fill_color(scene, &shadow, theme::palette::SWATCH_SHADOW);
    }

    let face = rect.to_rounded_rect(5.0);
    fill_color(scene, &face, color);

    let outline = if selected {
        theme::palette::SWATCH_OUTLINE_SELECTED
    } else {
        theme::palette::SWATCH_OUTLINE
    };
    scene.stroke(
        &Stroke::new(2.0),
        Affine::IDENTITY,
        &Brush::Solid(outline),
        None,
        &face,
    );
}

fn paint_field(
    scene: &mut Scene,
    rect: Rect,
    key: super::FieldKey,
    state: &PanelState,
) {
    let active = state.active == Some(key);

    if active {
        let glow = rect.inflate(3.0, 3.0).to_rounded_rect(6.0);
        fill_color(scene, &glow, theme::field::ACTIVE_GLOW);
    }

    let face = rect.to_rounded_rect(5.0);
    let bg = if active {
        theme::field::ACTIVE_BG
    } else {
        theme::field::INACTIVE_BG
    };
    fill_color(scene, &face, bg);
    scene.stroke(
        &Stroke::new(2.0),
        Affine::IDENTITY,
        &Brush::Solid(theme::field::OUTLINE),
        None,
        &face,
    );

    let value = state.fields.get(key);
    if !value.is_empty() {
        text::draw_text(
            scene,
            value,
            theme::font::NORMAL,
            Point::new(rect.x0 + 8.0, rect.y0 + 5.0),
            theme::field::TEXT,
        );
    } else if active {
        // Caret placeholder in the empty active field
        text::draw_text(
            scene,
            "|",
            theme::font::NORMAL,
            Point::new(rect.x0 + 8.0, rect.y0 + 3.0),
            theme::field::TEXT,
        );
    }
}

/// Proportional scrollbar along the panel's right edge, only shown when
/// the content overflows the window.
fn paint_scrollbar(scene: &mut Scene, layout: &PanelLayout, state: &PanelState) {
    if layout.content_height <= layout.height {
        return;
    }

    let track_x = layout.panel_x + crate::settings::panel::WIDTH - metrics::SCROLLBAR_RIGHT_INSET;
    let track_top = metrics::HEADER_HEIGHT;
    let track_height = layout.height - track_top;

    let track = Rect::from_origin_size(
        Point::new(track_x, track_top),
        Size::new(metrics::SCROLLBAR_WIDTH, track_height),
    )
    .to_rounded_rect(5.0);
    fill_color(scene, &track, theme::panel::SCROLLBAR_TRACK);

    let max_scroll = layout.max_scroll();
    let scroll_ratio = if max_scroll > 0.0 {
        state.scroll_offset / max_scroll
    } else {
        0.0
    };
    let visible_ratio = layout.height / layout.content_height;
    let handle_height = (track_height * visible_ratio).max(metrics::SCROLLBAR_MIN_HANDLE);
    let handle_y = track_top + (track_height - handle_height) * scroll_ratio;

    let handle = Rect::from_origin_size(
        Point::new(track_x, handle_y),
        Size::new(metrics::SCROLLBAR_WIDTH, handle_height),
    )
    .to_rounded_rect(5.0);
    fill_color(scene, &handle, theme::panel::SCROLLBAR_HANDLE);
    scene.stroke(
        &Stroke::new(1.0),
        Affine::IDENTITY,
        &Brush::Solid(theme::panel::TITLE),
        None,
        &handle,
    );
}
