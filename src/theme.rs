// Copyright 2025 the Coordraw Authors
// SPDX-License-Identifier: Apache-2.0

//! Theme colors and constants
//!
//! Colors are specified as `Color::from_rgb8` decimal triples matching
//! the original palette

use masonry::vello::peniko::Color;

// ============================================================================
// BASE COLORS -- Generic grays shared across the UI
// ============================================================================
const WHITE: Color = Color::from_rgb8(255, 255, 255);
const BLACK: Color = Color::from_rgb8(0, 0, 0);
const LIGHT_GRAY: Color = Color::from_rgb8(240, 242, 245);
const DARK_GRAY: Color = Color::from_rgb8(52, 58, 64);
const VERY_DARK_GRAY: Color = Color::from_rgb8(33, 37, 41);

// ============================================================================
// CANVAS -- Background, grid lines and axes
// ============================================================================
const CANVAS_BG: Color = Color::from_rgb8(248, 249, 250);
const GRID_COLOR: Color = Color::from_rgb8(220, 225, 230);
const AXIS_COLOR: Color = Color::from_rgb8(108, 117, 125);

// ============================================================================
// PANEL CHROME
// ============================================================================
const PANEL_BG: Color = Color::from_rgb8(33, 37, 41);
const PANEL_HEADER: Color = Color::from_rgb8(52, 58, 64);
const SECTION_BG: Color = Color::from_rgb8(44, 48, 52);

// ============================================================================
// SHAPE COLORS -- The user-selectable palette
// ============================================================================
const RED: Color = Color::from_rgb8(220, 53, 69);
const GREEN: Color = Color::from_rgb8(40, 167, 69);
const BLUE: Color = Color::from_rgb8(0, 123, 255);
const CYAN: Color = Color::from_rgb8(23, 162, 184);
const MAGENTA: Color = Color::from_rgb8(232, 62, 140);
const YELLOW: Color = Color::from_rgb8(255, 193, 7);
const ORANGE: Color = Color::from_rgb8(253, 126, 20);
const PURPLE: Color = Color::from_rgb8(111, 66, 193);

// ============================================================================
// BUTTON COLORS
// ============================================================================
const BTN_PRIMARY: Color = BLUE;
const BTN_SUCCESS: Color = GREEN;
const BTN_DANGER: Color = RED;
const BTN_WARNING: Color = YELLOW;
const BTN_INFO: Color = CYAN;
const BTN_SECONDARY: Color = Color::from_rgb8(108, 117, 125);

// ============================================================================
// ACCENT COLORS
// ============================================================================
const ACCENT_BLUE: Color = Color::from_rgb8(13, 110, 253);
const ACCENT_GREEN: Color = Color::from_rgb8(25, 135, 84);
const HIGHLIGHT: Color = Color::from_rgb8(255, 215, 0);

// ============================================================================
// PUBLIC API
// ============================================================================

/// Canvas background, grid lines, axes and labels
pub mod canvas {
    use super::*;

    pub const BACKGROUND: Color = CANVAS_BG;
    pub const GRID_LINE: Color = GRID_COLOR;
    pub const AXIS: Color = AXIS_COLOR;
    pub const LABEL: Color = DARK_GRAY;
}

/// Input panel chrome
pub mod panel {
    use super::*;

    pub const BACKGROUND: Color = PANEL_BG;
    pub const HEADER: Color = PANEL_HEADER;
    pub const SECTION: Color = SECTION_BG;
    pub const ACCENT: Color = ACCENT_BLUE;
    pub const ACCENT_ALT: Color = ACCENT_GREEN;
    pub const HIGHLIGHT: Color = super::HIGHLIGHT;
    pub const TITLE: Color = WHITE;
    pub const TITLE_SHADOW: Color = BLACK;
    pub const SCROLLBAR_TRACK: Color = VERY_DARK_GRAY;
    pub const SCROLLBAR_HANDLE: Color = ACCENT_BLUE;
}

/// 3D-style panel buttons
pub mod button {
    use super::*;

    pub const PRIMARY: Color = BTN_PRIMARY;
    pub const SUCCESS: Color = BTN_SUCCESS;
    pub const DANGER: Color = BTN_DANGER;
    pub const WARNING: Color = BTN_WARNING;
    pub const INFO: Color = BTN_INFO;
    pub const SECONDARY: Color = BTN_SECONDARY;
    pub const SHADOW: Color = VERY_DARK_GRAY;
    pub const OUTLINE: Color = BLACK;
    pub const LABEL: Color = WHITE;
}

/// Text input field boxes
pub mod field {
    use super::*;

    pub const LABEL: Color = WHITE;
    pub const ACTIVE_GLOW: Color = ACCENT_BLUE;
    pub const ACTIVE_BG: Color = WHITE;
    pub const INACTIVE_BG: Color = LIGHT_GRAY;
    pub const OUTLINE: Color = DARK_GRAY;
    pub const TEXT: Color = BLACK;
}

/// The user-selectable shape color palette, in panel display order
pub mod palette {
    use super::*;

    pub const SWATCHES: [(&str, Color); 8] = [
        ("Red", RED),
        ("Green", GREEN),
        ("Blue", BLUE),
        ("Cyan", CYAN),
        ("Magenta", MAGENTA),
        ("Yellow", YELLOW),
        ("Orange", ORANGE),
        ("Purple", PURPLE),
    ];

    /// Index of the default shape color (red)
    pub const DEFAULT_INDEX: usize = 0;

    pub const SWATCH_OUTLINE_SELECTED: Color = WHITE;
    pub const SWATCH_OUTLINE: Color = BLACK;
    pub const SWATCH_SHADOW: Color = BLACK;
}

/// Shape rendering sizes and label styling
pub mod shape {
    use super::*;

    /// Outline stroke width for circles, ellipses and lines
    pub const LINE_WIDTH: f64 = 2.0;

    /// Radius of the filled center marker on circles and ellipses
    pub const POINT_RADIUS: f64 = 3.0;

    /// Radius of the filled endpoint markers on lines
    pub const POINT_SIZE: f64 = 4.0;

    /// Text color inside coordinate label bubbles
    pub const LABEL_TEXT: Color = WHITE;

    /// Border color of coordinate label bubbles
    pub const LABEL_OUTLINE: Color = WHITE;
}

/// Font sizes, roughly matching the original chrome proportions
pub mod font {
    pub const LARGE: f32 = 24.0;
    pub const MEDIUM: f32 = 16.0;
    pub const NORMAL: f32 = 15.0;
    pub const SMALL: f32 = 13.0;
    pub const TINY: f32 = 11.0;
}
