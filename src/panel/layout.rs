// Copyright 2025 the Coordraw Authors
// SPDX-License-Identifier: Apache-2.0

//! Declarative panel layout.
//!
//! One region table is computed per frame from the current tool, window
//! height and scroll offset, and is shared by the painter and the
//! hit-tester so the two can never disagree about where a button lives.
//! Everything below the fixed header band is offset by the scroll amount;
//! the header itself never scrolls.

use super::{FieldKey, PanelAction, PanelHit, Tool};
use crate::theme;
use kurbo::{Point, Rect, Size};

// ============================================================================
// LAYOUT METRICS
// ============================================================================
//
// Pixel geometry of the panel content, in unscrolled content space.

pub(crate) mod metrics {
    /// Height of the fixed (non-scrolling) header band
    pub const HEADER_HEIGHT: f64 = 70.0;

    /// Where scrollable content starts
    pub const CONTENT_TOP: f64 = 90.0;

    /// Horizontal inset of section boxes from the panel edges
    pub const SECTION_INSET: f64 = 10.0;

    /// Vertical space a section title occupies
    pub const TITLE_ADVANCE: f64 = 45.0;

    /// Gap between sections
    pub const SECTION_GAP: f64 = 15.0;

    // Tool buttons
    pub const TOOL_SECTION_HEIGHT: f64 = 160.0;
    pub const TOOL_BUTTON_X: f64 = 25.0;
    pub const TOOL_BUTTON_WIDTH: f64 = 250.0;
    pub const TOOL_BUTTON_HEIGHT: f64 = 32.0;
    pub const TOOL_BUTTON_ADVANCE: f64 = 40.0;

    // Color swatches, two per row
    pub const COLOR_SECTION_HEIGHT: f64 = 190.0;
    pub const SWATCH_X: f64 = 25.0;
    pub const SWATCH_WIDTH: f64 = 115.0;
    pub const SWATCH_HEIGHT: f64 = 28.0;
    pub const SWATCH_COLUMN_ADVANCE: f64 = 125.0;
    pub const SWATCH_ROW_ADVANCE: f64 = 33.0;

    // Input fields
    pub const FIELD_SECTION_BASE_HEIGHT: f64 = 80.0;
    pub const FIELD_LABEL_X: f64 = 25.0;
    pub const FIELD_BOX_X: f64 = 115.0;
    pub const FIELD_BOX_WIDTH: f64 = 160.0;
    pub const FIELD_BOX_HEIGHT: f64 = 28.0;
    pub const FIELD_ROW_ADVANCE: f64 = 38.0;
    pub const FIELDS_TO_ACTIONS_GAP: f64 = 20.0;

    // Action buttons
    pub const ACTION_X: f64 = 30.0;
    pub const ACTION_WIDTH: f64 = 240.0;
    pub const DRAW_BUTTON_HEIGHT: f64 = 45.0;
    pub const DRAW_BUTTON_ADVANCE: f64 = 55.0;
    pub const CLEAR_BUTTON_HEIGHT: f64 = 40.0;
    pub const CLEAR_BUTTON_ADVANCE: f64 = 50.0;

    // Zoom controls
    pub const ZOOM_SECTION_HEIGHT: f64 = 140.0;
    pub const ZOOM_BUTTON_WIDTH: f64 = 110.0;
    pub const ZOOM_BUTTON_HEIGHT: f64 = 35.0;
    pub const ZOOM_OUT_X: f64 = 160.0;
    pub const ZOOM_ROW_ADVANCE: f64 = 45.0;
    pub const RESET_BUTTON_HEIGHT: f64 = 32.0;
    pub const RESET_BUTTON_ADVANCE: f64 = 45.0;

    /// Padding below the last section, counted into the content height
    pub const BOTTOM_PADDING: f64 = 40.0;

    // Scrollbar
    pub const SCROLLBAR_RIGHT_INSET: f64 = 15.0;
    pub const SCROLLBAR_WIDTH: f64 = 10.0;
    pub const SCROLLBAR_MIN_HANDLE: f64 = 30.0;
}

/// What a layout region resolves to when clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionId {
    Tool(Tool),
    /// Index into [`theme::palette::SWATCHES`]
    Swatch(usize),
    Field(FieldKey),
    Action(PanelAction),
}

/// One clickable rectangle of the panel, already scroll-adjusted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    pub id: RegionId,
    pub rect: Rect,
}

/// The computed panel layout for one frame.
#[derive(Debug, Clone)]
pub struct PanelLayout {
    /// Screen x of the panel's left edge (= canvas width)
    pub panel_x: f64,
    /// Window height (the panel viewport height)
    pub height: f64,
    /// All clickable regions, scroll-adjusted
    pub regions: Vec<Region>,
    /// Total unscrolled content height, including bottom padding
    pub content_height: f64,
    // Section boxes for the painter, scroll-adjusted
    pub tool_section: Rect,
    pub color_section: Rect,
    pub field_section: Rect,
    pub zoom_section: Rect,
}

impl PanelLayout {
    /// Compute the layout table.
    ///
    /// `scroll_offset` is assumed already clamped; use
    /// [`PanelLayout::content_height_for`] to derive the clamp bound first.
    pub fn compute(panel_x: f64, height: f64, tool: Tool, scroll_offset: f64) -> Self {
        use metrics::*;

        let section_width = crate::settings::panel::WIDTH - 2.0 * SECTION_INSET;
        let section = |y: f64, h: f64| {
            Rect::from_origin_size(
                Point::new(panel_x + SECTION_INSET, y - scroll_offset),
                Size::new(section_width, h),
            )
        };
        let row = |x: f64, y: f64, w: f64, h: f64| {
            Rect::from_origin_size(
                Point::new(panel_x + x, y - scroll_offset),
                Size::new(w, h),
            )
        };

        let mut regions = Vec::new();
        let mut y = CONTENT_TOP;

        // Tool selection
        let tool_section = section(y, TOOL_SECTION_HEIGHT);
        y += TITLE_ADVANCE;
        for t in Tool::ALL {
            regions.push(Region {
                id: RegionId::Tool(t),
                rect: row(TOOL_BUTTON_X, y, TOOL_BUTTON_WIDTH, TOOL_BUTTON_HEIGHT),
            });
            y += TOOL_BUTTON_ADVANCE;
        }
        y += SECTION_GAP;

        // Color swatches
        let color_section = section(y, COLOR_SECTION_HEIGHT);
        y += TITLE_ADVANCE;
        for i in 0..theme::palette::SWATCHES.len() {
            let col = (i % 2) as f64;
            regions.push(Region {
                id: RegionId::Swatch(i),
                rect: row(
                    SWATCH_X + col * SWATCH_COLUMN_ADVANCE,
                    y,
                    SWATCH_WIDTH,
                    SWATCH_HEIGHT,
                ),
            });
            if i % 2 == 1 {
                y += SWATCH_ROW_ADVANCE;
            }
        }
        y += SECTION_GAP;

        // Input fields (variable height per tool)
        let keys = tool.field_keys();
        let field_section_height =
            FIELD_SECTION_BASE_HEIGHT + keys.len() as f64 * FIELD_ROW_ADVANCE;
        let field_section = section(y, field_section_height);
        y += TITLE_ADVANCE;
        for &key in keys {
            regions.push(Region {
                id: RegionId::Field(key),
                rect: row(FIELD_BOX_X, y, FIELD_BOX_WIDTH, FIELD_BOX_HEIGHT),
            });
            y += FIELD_ROW_ADVANCE;
        }
        y += FIELDS_TO_ACTIONS_GAP;

        // Action buttons
        regions.push(Region {
            id: RegionId::Action(PanelAction::DrawShape),
            rect: row(ACTION_X, y, ACTION_WIDTH, DRAW_BUTTON_HEIGHT),
        });
        y += DRAW_BUTTON_ADVANCE;
        regions.push(Region {
            id: RegionId::Action(PanelAction::ClearAll),
            rect: row(ACTION_X, y, ACTION_WIDTH, CLEAR_BUTTON_HEIGHT),
        });
        y += CLEAR_BUTTON_ADVANCE;

        // Zoom controls
        let zoom_section = section(y, ZOOM_SECTION_HEIGHT);
        y += TITLE_ADVANCE;
        regions.push(Region {
            id: RegionId::Action(PanelAction::ZoomIn),
            rect: row(ACTION_X, y, ZOOM_BUTTON_WIDTH, ZOOM_BUTTON_HEIGHT),
        });
        regions.push(Region {
            id: RegionId::Action(PanelAction::ZoomOut),
            rect: row(ZOOM_OUT_X, y, ZOOM_BUTTON_WIDTH, ZOOM_BUTTON_HEIGHT),
        });
        y += ZOOM_ROW_ADVANCE;
        regions.push(Region {
            id: RegionId::Action(PanelAction::ResetZoom),
            rect: row(ACTION_X, y, ACTION_WIDTH, RESET_BUTTON_HEIGHT),
        });
        y += RESET_BUTTON_ADVANCE;

        let content_height = y + BOTTOM_PADDING;

        Self {
            panel_x,
            height,
            regions,
            content_height,
            tool_section,
            color_section,
            field_section,
            zoom_section,
        }
    }

    /// Unscrolled content height for the given tool's field count.
    pub fn content_height_for(tool: Tool) -> f64 {
        Self::compute(0.0, 0.0, tool, 0.0).content_height
    }

    /// `max(0, content_height - viewport_height)`
    pub fn max_scroll(&self) -> f64 {
        (self.content_height - self.height).max(0.0)
    }

    /// Classify a click. Clicks left of the panel or inside the fixed
    /// header band hit nothing; regions scrolled up under the header are
    /// likewise unreachable.
    pub fn hit_test(&self, pos: Point) -> Option<PanelHit> {
        if pos.x < self.panel_x || pos.y < metrics::HEADER_HEIGHT {
            return None;
        }
        self.regions
            .iter()
            .find(|region| region.rect.contains(pos))
            .map(|region| match region.id {
                RegionId::Tool(tool) => PanelHit::SelectTool(tool),
                RegionId::Swatch(i) => PanelHit::SelectColor(i),
                RegionId::Field(key) => PanelHit::ActivateField(key),
                RegionId::Action(action) => PanelHit::Action(action),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PANEL_X: f64 = 680.0;
    const HEIGHT: f64 = 600.0;

    fn layout(tool: Tool, scroll: f64) -> PanelLayout {
        PanelLayout::compute(PANEL_X, HEIGHT, tool, scroll)
    }

    fn center(rect: Rect) -> Point {
        rect.center()
    }

    fn region_rect(layout: &PanelLayout, id: RegionId) -> Rect {
        layout
            .regions
            .iter()
            .find(|r| r.id == id)
            .map(|r| r.rect)
            .unwrap_or_else(|| panic!("no region {id:?}"))
    }

    #[test]
    fn tool_buttons_hit() {
        let layout = layout(Tool::Circle, 0.0);
        for tool in Tool::ALL {
            let rect = region_rect(&layout, RegionId::Tool(tool));
            assert_eq!(layout.hit_test(center(rect)), Some(PanelHit::SelectTool(tool)));
        }
    }

    #[test]
    fn swatches_hit_in_two_columns() {
        let layout = layout(Tool::Circle, 0.0);
        let first = region_rect(&layout, RegionId::Swatch(0));
        let second = region_rect(&layout, RegionId::Swatch(1));
        assert_eq!(first.y0, second.y0);
        assert!(second.x0 > first.x0);
        assert_eq!(layout.hit_test(center(first)), Some(PanelHit::SelectColor(0)));
        assert_eq!(layout.hit_test(center(second)), Some(PanelHit::SelectColor(1)));
    }

    #[test]
    fn field_boxes_hit_per_tool() {
        let layout = layout(Tool::Ellipse, 0.0);
        for &key in Tool::Ellipse.field_keys() {
            let rect = region_rect(&layout, RegionId::Field(key));
            assert_eq!(
                layout.hit_test(center(rect)),
                Some(PanelHit::ActivateField(key))
            );
        }
    }

    #[test]
    fn action_buttons_hit() {
        let layout = layout(Tool::Line, 0.0);
        for action in [
            PanelAction::DrawShape,
            PanelAction::ClearAll,
            PanelAction::ZoomIn,
            PanelAction::ZoomOut,
            PanelAction::ResetZoom,
        ] {
            let rect = region_rect(&layout, RegionId::Action(action));
            assert_eq!(
                layout.hit_test(center(rect)),
                Some(PanelHit::Action(action))
            );
        }
    }

    #[test]
    fn clicks_left_of_panel_miss() {
        let layout = layout(Tool::Circle, 0.0);
        assert_eq!(layout.hit_test(Point::new(PANEL_X - 1.0, 200.0)), None);
    }

    #[test]
    fn header_band_never_hits() {
        // Scroll far enough that the first tool button would sit inside
        // the header band; it must not be clickable there.
        let layout = layout(Tool::Circle, 120.0);
        let rect = region_rect(&layout, RegionId::Tool(Tool::Circle));
        assert!(rect.y0 < metrics::HEADER_HEIGHT);
        assert_eq!(layout.hit_test(center(rect)), None);
    }

    #[test]
    fn scrolling_shifts_regions_up() {
        let unscrolled = layout(Tool::Circle, 0.0);
        let scrolled = layout(Tool::Circle, 100.0);
        let before = region_rect(&unscrolled, RegionId::Action(PanelAction::DrawShape));
        let after = region_rect(&scrolled, RegionId::Action(PanelAction::DrawShape));
        assert_eq!(after.y0, before.y0 - 100.0);
        assert_eq!(after.x0, before.x0);

        assert_eq!(
            scrolled.hit_test(center(after)),
            Some(PanelHit::Action(PanelAction::DrawShape))
        );
    }

    #[test]
    fn gaps_between_regions_miss() {
        let layout = layout(Tool::Circle, 0.0);
        let first = region_rect(&layout, RegionId::Tool(Tool::Circle));
        let below = Point::new(first.center().x, first.y1 + 2.0);
        assert_eq!(layout.hit_test(below), None);
    }

    #[test]
    fn content_height_tracks_field_count() {
        let circle = PanelLayout::content_height_for(Tool::Circle);
        let ellipse = PanelLayout::content_height_for(Tool::Ellipse);
        let line = PanelLayout::content_height_for(Tool::Line);
        // One more field row for ellipse/line than for circle
        assert_eq!(ellipse - circle, metrics::FIELD_ROW_ADVANCE);
        assert_eq!(ellipse, line);
    }

    #[test]
    fn max_scroll_is_zero_for_tall_windows() {
        let layout = PanelLayout::compute(PANEL_X, 5000.0, Tool::Circle, 0.0);
        assert_eq!(layout.max_scroll(), 0.0);
    }

    #[test]
    fn max_scroll_matches_overflow() {
        let layout = layout(Tool::Circle, 0.0);
        assert!(layout.content_height > HEIGHT);
        assert_eq!(layout.max_scroll(), layout.content_height - HEIGHT);
    }
}
