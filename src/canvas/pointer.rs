// Copyright 2025 the Coordraw Authors
// SPDX-License-Identifier: Apache-2.0

//! Pointer event handlers for CanvasWidget

use super::CanvasWidget;
use masonry::core::{EventCtx, ScrollDelta};

impl CanvasWidget {
    pub(super) fn handle_pointer_down(
        &mut self,
        ctx: &mut EventCtx<'_>,
        state: &masonry::core::PointerState,
    ) {
        let local_pos = ctx.local_position(state.position);
        tracing::debug!("pointer down at {local_pos:?}");
        self.last_pointer = local_pos;

        if self.session.handle_click(local_pos) {
            ctx.request_render();
        }
        ctx.set_handled();
    }

    pub(super) fn handle_pointer_move(
        &mut self,
        ctx: &mut EventCtx<'_>,
        current: &masonry::core::PointerState,
    ) {
        // Tracked so wheel events can be routed by position
        self.last_pointer = ctx.local_position(current.position);
    }

    /// Wheel over the panel scrolls its content; wheel over the drawing
    /// area zooms.
    pub(super) fn handle_scroll(&mut self, ctx: &mut EventCtx<'_>, delta: &ScrollDelta) {
        // Negative Y = scroll up
        let scroll_y = match delta {
            ScrollDelta::LineDelta(_x, y) => *y,
            ScrollDelta::PixelDelta(pos) => (pos.y / 10.0) as f32, // Scale down pixel deltas
            ScrollDelta::PageDelta(_x, y) => *y * 3.0,             // Page scrolls are bigger
        };

        if scroll_y.abs() < 0.001 {
            return; // Ignore very small scrolls
        }

        self.session
            .handle_scroll(self.last_pointer, -scroll_y as f64);
        ctx.request_render();
        ctx.set_handled();
    }
}
