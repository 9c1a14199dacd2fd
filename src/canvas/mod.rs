// Copyright 2025 the Coordraw Authors
// SPDX-License-Identifier: Apache-2.0

//! The drawing canvas widget.
//!
//! One widget covers the whole window: the coordinate grid and shapes on
//! the left, the input panel on the right. All pointer and keyboard
//! events land here and are routed through the owned [`Session`].

mod grid;
mod keyboard;
mod pointer;
mod view;

pub use view::canvas_view;

use crate::panel::paint::paint_panel;
use crate::session::Session;
use kurbo::{Point, Rect};
use masonry::accesskit::{Node, Role};
use masonry::core::{
    AccessCtx, BoxConstraints, ChildrenIds, EventCtx, LayoutCtx, PaintCtx, PointerButton,
    PointerButtonEvent, PointerEvent, PointerScrollEvent, PointerUpdate, PropertiesMut,
    PropertiesRef, RegisterCtx, TextEvent, Update, UpdateCtx, Widget,
};
use masonry::kurbo::Size;
use masonry::util::fill_color;
use masonry::vello::Scene;

pub struct CanvasWidget {
    /// All drawing state: shapes, zoom, panel
    pub(super) session: Session,

    /// Last known pointer position, for routing wheel events
    pub(super) last_pointer: Point,
}

impl CanvasWidget {
    pub fn new() -> Self {
        Self {
            session: Session::new(),
            last_pointer: Point::ZERO,
        }
    }
}

impl Default for CanvasWidget {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for CanvasWidget {
    type Action = ();

    fn accepts_focus(&self) -> bool {
        // Keyboard input drives field editing and zoom shortcuts
        true
    }

    fn register_children(&mut self, _ctx: &mut RegisterCtx<'_>) {
        // Leaf widget - no children
    }

    fn update(
        &mut self,
        _ctx: &mut UpdateCtx<'_>,
        _props: &mut PropertiesMut<'_>,
        _event: &Update,
    ) {
    }

    fn layout(
        &mut self,
        _ctx: &mut LayoutCtx<'_>,
        _props: &mut PropertiesMut<'_>,
        bc: &BoxConstraints,
    ) -> Size {
        // Use all available space (expand to fill the window)
        let size = bc.max();
        self.session.handle_resize(size);
        size
    }

    fn paint(&mut self, ctx: &mut PaintCtx<'_>, _props: &PropertiesRef<'_>, scene: &mut Scene) {
        let size = ctx.size();

        let canvas = Rect::from_origin_size(
            Point::ZERO,
            Size::new(self.session.canvas_width(), size.height),
        );
        fill_color(scene, &canvas, crate::theme::canvas::BACKGROUND);

        let viewport = self.session.viewport();
        grid::draw_grid(scene, &viewport, canvas.size());

        // Shapes draw in insertion order, oldest first
        for shape in &self.session.shapes {
            shape.render(scene, &viewport);
        }

        // The panel covers any shape overhang on the right. The scroll
        // bound depends on the layout, so re-clamp before painting.
        let max_scroll = self.session.panel_layout().max_scroll();
        self.session.panel.clamp_scroll(max_scroll);
        let layout = self.session.panel_layout();
        paint_panel(scene, &layout, &self.session.panel);
    }

    fn on_pointer_event(
        &mut self,
        ctx: &mut EventCtx<'_>,
        _props: &mut PropertiesMut<'_>,
        event: &PointerEvent,
    ) {
        // Always request focus on any pointer event so keyboard shortcuts work
        ctx.request_focus();

        match event {
            PointerEvent::Down(PointerButtonEvent {
                button: Some(PointerButton::Primary),
                state,
                ..
            }) => {
                self.handle_pointer_down(ctx, state);
            }

            PointerEvent::Move(PointerUpdate { current, .. }) => {
                self.handle_pointer_move(ctx, current);
            }

            PointerEvent::Scroll(PointerScrollEvent { delta, .. }) => {
                self.handle_scroll(ctx, delta);
            }

            _ => {
                // Ignore other pointer events
            }
        }
    }

    fn on_text_event(
        &mut self,
        ctx: &mut EventCtx<'_>,
        _props: &mut PropertiesMut<'_>,
        event: &TextEvent,
    ) {
        if let TextEvent::Keyboard(key_event) = event {
            self.handle_key_event(ctx, key_event);
        }
    }

    fn accessibility_role(&self) -> Role {
        Role::Canvas
    }

    fn accessibility(
        &mut self,
        _ctx: &mut AccessCtx<'_>,
        _props: &PropertiesRef<'_>,
        node: &mut Node,
    ) {
        node.set_label(format!(
            "Coordinate drawing canvas with {} shapes",
            self.session.shapes.len()
        ));
    }

    fn children_ids(&self) -> ChildrenIds {
        ChildrenIds::new()
    }
}
