// Copyright 2025 the Coordraw Authors
// SPDX-License-Identifier: Apache-2.0

//! Drawing session state and input routing.
//!
//! A [`Session`] owns everything the canvas widget displays: the shape
//! list, the zoom level, the panel state and the current window size.
//! The widget translates raw pointer and keyboard events into calls on
//! this type, which keeps all of the routing logic testable without a
//! window.

use crate::factory;
use crate::panel::{PanelAction, PanelHit, PanelLayout, PanelState};
use crate::settings;
use crate::shapes::Shape;
use crate::viewport::ViewPort;
use kurbo::{Point, Size};

pub struct Session {
    pub panel: PanelState,
    pub shapes: Vec<Shape>,
    pub zoom: f64,
    pub window_size: Size,
}

impl Session {
    pub fn new() -> Self {
        Self {
            panel: PanelState::new(),
            shapes: Vec::new(),
            zoom: settings::zoom::DEFAULT,
            window_size: Size::ZERO,
        }
    }

    /// Width of the drawing area, i.e. everything left of the panel.
    pub fn canvas_width(&self) -> f64 {
        (self.window_size.width - settings::panel::WIDTH).max(0.0)
    }

    /// The viewport centered on the drawing area at the current zoom.
    pub fn viewport(&self) -> ViewPort {
        ViewPort::new(
            Point::new(self.canvas_width() / 2.0, self.window_size.height / 2.0),
            self.zoom,
        )
    }

    /// The panel layout for the current frame.
    pub fn panel_layout(&self) -> PanelLayout {
        PanelLayout::compute(
            self.canvas_width(),
            self.window_size.height,
            self.panel.tool,
            self.panel.scroll_offset,
        )
    }

    fn max_scroll(&self) -> f64 {
        self.panel_layout().max_scroll()
    }

    pub fn handle_resize(&mut self, size: Size) {
        self.window_size = size;
        let max_scroll = self.max_scroll();
        self.panel.clamp_scroll(max_scroll);
    }

    // ------------------------------------------------------------------
    // Zoom
    // ------------------------------------------------------------------

    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom + settings::zoom::STEP);
    }

    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom - settings::zoom::STEP);
    }

    pub fn reset_zoom(&mut self) {
        self.set_zoom(settings::zoom::DEFAULT);
    }

    fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom.clamp(settings::zoom::MIN, settings::zoom::MAX);
    }

    // ------------------------------------------------------------------
    // Shapes
    // ------------------------------------------------------------------

    /// Build a shape from the panel's buffers and add it to the canvas.
    ///
    /// On success the buffers reset for the next shape. On failure the
    /// buffers are left untouched so the user can correct them.
    pub fn commit_shape(&mut self) {
        match factory::create_shape(self.panel.tool, &self.panel.fields, self.panel.color()) {
            Ok(shape) => {
                tracing::info!("drawing {shape:?}");
                self.shapes.push(shape);
                self.panel.reset_fields();
            }
            Err(err) => {
                tracing::debug!("shape rejected: {err}");
            }
        }
    }

    pub fn clear_shapes(&mut self) {
        self.shapes.clear();
    }

    // ------------------------------------------------------------------
    // Pointer routing
    // ------------------------------------------------------------------

    /// Route a primary click. Returns true if the session changed and the
    /// canvas needs repainting.
    pub fn handle_click(&mut self, pos: Point) -> bool {
        match self.panel_layout().hit_test(pos) {
            Some(hit) => {
                self.apply_hit(hit);
                true
            }
            None => {
                if pos.x < self.canvas_width() {
                    let math = self.viewport().screen_to_math(pos);
                    tracing::debug!("canvas click at ({}, {})", math.x, math.y);
                }
                false
            }
        }
    }

    fn apply_hit(&mut self, hit: PanelHit) {
        match hit {
            PanelHit::SelectTool(tool) => {
                self.panel.set_tool(tool);
                // The new tool's field count changes the content height
                let max_scroll = self.max_scroll();
                self.panel.clamp_scroll(max_scroll);
            }
            PanelHit::SelectColor(i) => self.panel.color_index = i,
            PanelHit::ActivateField(key) => self.panel.active = Some(key),
            PanelHit::Action(PanelAction::DrawShape) => self.commit_shape(),
            PanelHit::Action(PanelAction::ClearAll) => self.clear_shapes(),
            PanelHit::Action(PanelAction::ZoomIn) => self.zoom_in(),
            PanelHit::Action(PanelAction::ZoomOut) => self.zoom_out(),
            PanelHit::Action(PanelAction::ResetZoom) => self.reset_zoom(),
        }
    }

    /// Route a wheel notch. Over the panel the content scrolls; over the
    /// drawing area the view zooms. Positive `notches` is wheel-up.
    pub fn handle_scroll(&mut self, pointer: Point, notches: f64) {
        if pointer.x >= self.canvas_width() {
            let max_scroll = self.max_scroll();
            self.panel
                .scroll_by(-notches * settings::panel::SCROLL_STEP, max_scroll);
        } else if notches > 0.0 {
            self.zoom_in();
        } else if notches < 0.0 {
            self.zoom_out();
        }
    }

    // ------------------------------------------------------------------
    // Keyboard routing
    // ------------------------------------------------------------------

    /// Route a printable character.
    ///
    /// `-` is ambiguous: with an active field it types a sign, otherwise
    /// it zooms out. `+`/`=` always zoom in since no field accepts them.
    pub fn input_char(&mut self, c: char) {
        match c {
            '+' | '=' => self.zoom_in(),
            '-' => {
                if self.panel.active.is_some() {
                    self.panel.append_char('-');
                } else {
                    self.zoom_out();
                }
            }
            '0'..='9' | '.' => self.panel.append_char(c),
            _ => {}
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panel::{FieldKey, RegionId, Tool};

    fn session() -> Session {
        let mut session = Session::new();
        session.handle_resize(Size::new(1000.0, 700.0));
        session
    }

    fn region_center(session: &Session, id: RegionId) -> Point {
        session
            .panel_layout()
            .regions
            .iter()
            .find(|r| r.id == id)
            .map(|r| r.rect.center())
            .unwrap_or_else(|| panic!("no region {id:?}"))
    }

    #[test]
    fn zoom_clamps_at_both_ends() {
        let mut session = session();
        for _ in 0..200 {
            session.zoom_in();
        }
        assert_eq!(session.zoom, settings::zoom::MAX);

        for _ in 0..200 {
            session.zoom_out();
        }
        assert_eq!(session.zoom, settings::zoom::MIN);

        session.reset_zoom();
        assert_eq!(session.zoom, settings::zoom::DEFAULT);
    }

    #[test]
    fn commit_pushes_shape_and_resets_buffers() {
        let mut session = session();
        session.panel.fields.set(FieldKey::Cx, "3");
        session.panel.fields.set(FieldKey::Cy, "4");
        session.panel.fields.set(FieldKey::R, "5");

        session.commit_shape();
        assert_eq!(session.shapes.len(), 1);
        assert_eq!(session.panel.fields.get(FieldKey::R), "");
        assert_eq!(session.panel.active, Some(FieldKey::Cx));
    }

    #[test]
    fn failed_commit_keeps_buffers() {
        let mut session = session();
        session.panel.fields.set(FieldKey::R, "abc");

        session.commit_shape();
        assert!(session.shapes.is_empty());
        assert_eq!(session.panel.fields.get(FieldKey::R), "abc");
    }

    #[test]
    fn click_on_tool_button_switches_tool() {
        let mut session = session();
        let pos = region_center(&session, RegionId::Tool(Tool::Line));
        assert!(session.handle_click(pos));
        assert_eq!(session.panel.tool, Tool::Line);
    }

    #[test]
    fn click_on_canvas_hits_nothing() {
        let mut session = session();
        assert!(!session.handle_click(Point::new(100.0, 100.0)));
    }

    #[test]
    fn click_on_clear_removes_all_shapes() {
        let mut session = session();
        session.panel.fields.set(FieldKey::R, "5");
        session.commit_shape();
        assert_eq!(session.shapes.len(), 1);

        let pos = region_center(&session, RegionId::Action(PanelAction::ClearAll));
        assert!(session.handle_click(pos));
        assert!(session.shapes.is_empty());
    }

    #[test]
    fn scroll_over_canvas_zooms() {
        let mut session = session();
        let canvas = Point::new(100.0, 100.0);
        session.handle_scroll(canvas, 1.0);
        assert!((session.zoom - 1.1).abs() < 1e-9);

        session.handle_scroll(canvas, -1.0);
        assert!((session.zoom - 1.0).abs() < 1e-9);
    }

    #[test]
    fn scroll_over_panel_scrolls_content() {
        let mut session = session();
        let panel = Point::new(session.canvas_width() + 10.0, 300.0);
        let max_scroll = session.panel_layout().max_scroll();
        assert!(max_scroll > 0.0);

        session.handle_scroll(panel, -1.0);
        assert_eq!(
            session.panel.scroll_offset,
            settings::panel::SCROLL_STEP.min(max_scroll)
        );
        assert_eq!(session.zoom, settings::zoom::DEFAULT);

        session.handle_scroll(panel, 1.0);
        assert_eq!(session.panel.scroll_offset, 0.0);
    }

    #[test]
    fn minus_types_into_active_field() {
        let mut session = session();
        session.input_char('-');
        session.input_char('7');
        assert_eq!(session.panel.fields.get(FieldKey::Cx), "-7");
        assert_eq!(session.zoom, settings::zoom::DEFAULT);
    }

    #[test]
    fn minus_zooms_out_without_active_field() {
        let mut session = session();
        session.panel.active = None;
        session.input_char('-');
        assert!((session.zoom - 0.9).abs() < 1e-9);
    }

    #[test]
    fn plus_always_zooms_in() {
        let mut session = session();
        session.input_char('+');
        assert!((session.zoom - 1.1).abs() < 1e-9);
        session.input_char('=');
        assert!((session.zoom - 1.2).abs() < 1e-9);
        assert_eq!(session.panel.fields.get(FieldKey::Cx), "");
    }

    #[test]
    fn letters_are_ignored() {
        let mut session = session();
        session.input_char('a');
        assert_eq!(session.panel.fields.get(FieldKey::Cx), "");
    }

    #[test]
    fn tool_switch_reclamps_scroll_to_new_content_height() {
        let mut session = session();
        session.apply_hit(PanelHit::SelectTool(Tool::Ellipse));

        // Scroll the taller four-field panel all the way down
        let panel = Point::new(session.canvas_width() + 10.0, 300.0);
        for _ in 0..50 {
            session.handle_scroll(panel, -1.0);
        }
        assert_eq!(
            session.panel.scroll_offset,
            session.panel_layout().max_scroll()
        );

        // Circle has one field fewer, so the old offset overshoots
        session.apply_hit(PanelHit::SelectTool(Tool::Circle));
        let max_scroll = session.panel_layout().max_scroll();
        assert_eq!(session.panel.scroll_offset, max_scroll);
    }

    #[test]
    fn resize_reclamps_scroll() {
        let mut session = session();
        let panel = Point::new(session.canvas_width() + 10.0, 300.0);
        for _ in 0..50 {
            session.handle_scroll(panel, -1.0);
        }
        let scrolled = session.panel.scroll_offset;
        assert!(scrolled > 0.0);

        session.handle_resize(Size::new(1000.0, 5000.0));
        assert_eq!(session.panel.scroll_offset, 0.0);
        let _ = scrolled;
    }
}
