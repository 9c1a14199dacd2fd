// Copyright 2025 the Coordraw Authors
// SPDX-License-Identifier: Apache-2.0

//! Application settings and configuration constants.
//!
//! This module holds non-visual settings. Visual styling (colors, sizes)
//! belongs in `theme.rs`.

// ============================================================================
// ZOOM SETTINGS
// ============================================================================
/// Zoom level applied at startup and on zoom-reset
const DEFAULT_ZOOM: f64 = 1.0;

/// Minimum zoom level (half size)
const MIN_ZOOM: f64 = 0.5;

/// Maximum zoom level (10x)
const MAX_ZOOM: f64 = 10.0;

/// Zoom change per zoom-in/zoom-out command
const ZOOM_STEP: f64 = 0.1;

// ============================================================================
// CANVAS SETTINGS
// ============================================================================
/// Screen pixels per mathematical unit at zoom 1.0
const PIXELS_PER_UNIT: f64 = 5.0;

/// Background grid line spacing at zoom 1.0, in pixels
const GRID_SPACING: f64 = 50.0;

// ============================================================================
// PANEL SETTINGS
// ============================================================================
/// Fixed width of the input panel on the right side of the window
const PANEL_WIDTH: f64 = 320.0;

/// Pixels the panel content moves per wheel tick
const PANEL_SCROLL_STEP: f64 = 30.0;

// ============================================================================
// PUBLIC API - Don't edit below this line unless you know what you're doing
// ============================================================================

/// Zoom limits and stepping
pub mod zoom {
    /// Zoom level applied at startup and on zoom-reset
    pub const DEFAULT: f64 = super::DEFAULT_ZOOM;

    /// Minimum zoom level
    pub const MIN: f64 = super::MIN_ZOOM;

    /// Maximum zoom level
    pub const MAX: f64 = super::MAX_ZOOM;

    /// Zoom change per command
    pub const STEP: f64 = super::ZOOM_STEP;
}

/// Canvas and coordinate-space settings
pub mod canvas {
    /// Screen pixels per mathematical unit at zoom 1.0
    pub const PIXELS_PER_UNIT: f64 = super::PIXELS_PER_UNIT;

    /// Background grid line spacing at zoom 1.0, in pixels
    pub const GRID_SPACING: f64 = super::GRID_SPACING;
}

/// Input panel settings
pub mod panel {
    /// Fixed panel width in pixels
    pub const WIDTH: f64 = super::PANEL_WIDTH;

    /// Pixels the panel content moves per wheel tick
    pub const SCROLL_STEP: f64 = super::PANEL_SCROLL_STEP;
}
