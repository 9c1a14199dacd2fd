// Copyright 2025 the Coordraw Authors
// SPDX-License-Identifier: Apache-2.0

//! Keyboard event handlers for CanvasWidget

use super::CanvasWidget;
use masonry::core::EventCtx;
use masonry::core::keyboard::{Key, KeyState, KeyboardEvent, NamedKey};

impl CanvasWidget {
    /// Route one key press.
    ///
    /// Enter commits the pending shape, Tab cycles the active field,
    /// Backspace edits it, Delete clears the canvas, F5 resets the zoom.
    /// Printable characters go through the session's character routing,
    /// where `-` types a sign when a field is active and zooms out
    /// otherwise.
    pub(super) fn handle_key_event(&mut self, ctx: &mut EventCtx<'_>, key_event: &KeyboardEvent) {
        if key_event.state != KeyState::Down {
            return;
        }

        tracing::debug!("key down: {:?}", key_event.key);

        match &key_event.key {
            Key::Named(NamedKey::Enter) => self.session.commit_shape(),
            Key::Named(NamedKey::Tab) => self.session.panel.cycle_field(),
            Key::Named(NamedKey::Backspace) => self.session.panel.backspace(),
            Key::Named(NamedKey::Delete) => self.session.clear_shapes(),
            Key::Named(NamedKey::F5) => self.session.reset_zoom(),
            Key::Character(c) => {
                for ch in c.chars() {
                    self.session.input_char(ch);
                }
            }
            _ => return,
        }

        ctx.request_render();
        ctx.set_handled();
    }
}
