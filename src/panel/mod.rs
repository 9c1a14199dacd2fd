// Copyright 2025 the Coordraw Authors
// SPDX-License-Identifier: Apache-2.0

//! Input panel state machine.
//!
//! The panel owns the active tool, the active text field, the per-field
//! text buffers, the color selection and the scroll offset. Hit-testing
//! against the panel's layout lives in [`layout`]; chrome rendering lives
//! in [`paint`].

pub mod layout;
pub mod paint;

pub use layout::{PanelLayout, RegionId};

use crate::theme;
use masonry::vello::peniko::Color;
use std::fmt;

/// The shape tool the panel's coordinate fields describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    Circle,
    Ellipse,
    Line,
}

impl Tool {
    /// All tools in panel display order.
    pub const ALL: [Tool; 3] = [Tool::Circle, Tool::Ellipse, Tool::Line];

    /// Button label in the tool section.
    pub fn label(self) -> &'static str {
        match self {
            Tool::Circle => "Circle",
            Tool::Ellipse => "Ellipse",
            Tool::Line => "Line",
        }
    }

    /// The ordered field keys this tool's input section shows.
    pub fn field_keys(self) -> &'static [FieldKey] {
        use FieldKey::*;
        match self {
            Tool::Circle => &[Cx, Cy, R],
            Tool::Ellipse => &[Cx, Cy, Rx, Ry],
            Tool::Line => &[X1, Y1, X2, Y2],
        }
    }
}

/// A named coordinate input field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKey {
    Cx,
    Cy,
    R,
    Rx,
    Ry,
    X1,
    Y1,
    X2,
    Y2,
}

impl FieldKey {
    /// Human-readable label shown next to the field box.
    pub fn label(self) -> &'static str {
        match self {
            FieldKey::Cx => "Center X:",
            FieldKey::Cy => "Center Y:",
            FieldKey::R => "Radius:",
            FieldKey::Rx => "Radius X:",
            FieldKey::Ry => "Radius Y:",
            FieldKey::X1 => "Start X:",
            FieldKey::Y1 => "Start Y:",
            FieldKey::X2 => "End X:",
            FieldKey::Y2 => "End Y:",
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = match self {
            FieldKey::Cx => "cx",
            FieldKey::Cy => "cy",
            FieldKey::R => "r",
            FieldKey::Rx => "rx",
            FieldKey::Ry => "ry",
            FieldKey::X1 => "x1",
            FieldKey::Y1 => "y1",
            FieldKey::X2 => "x2",
            FieldKey::Y2 => "y2",
        };
        f.write_str(key)
    }
}

/// The raw text buffers for one tool's field set, in field order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldBuffers {
    keys: &'static [FieldKey],
    values: Vec<String>,
}

impl FieldBuffers {
    /// Fresh, empty buffers for the given tool.
    pub fn for_tool(tool: Tool) -> Self {
        let keys = tool.field_keys();
        Self {
            keys,
            values: vec![String::new(); keys.len()],
        }
    }

    /// The buffer for `key`, or an empty string for keys not in this set.
    pub fn get(&self, key: FieldKey) -> &str {
        self.index_of(key)
            .map(|i| self.values[i].as_str())
            .unwrap_or("")
    }

    /// Replace the buffer for `key`. No-op for keys not in this set.
    pub fn set(&mut self, key: FieldKey, value: impl Into<String>) {
        if let Some(i) = self.index_of(key) {
            self.values[i] = value.into();
        }
    }

    pub fn push_char(&mut self, key: FieldKey, c: char) {
        if let Some(i) = self.index_of(key) {
            self.values[i].push(c);
        }
    }

    pub fn pop_char(&mut self, key: FieldKey) {
        if let Some(i) = self.index_of(key) {
            self.values[i].pop();
        }
    }

    fn index_of(&self, key: FieldKey) -> Option<usize> {
        self.keys.iter().position(|&k| k == key)
    }
}

/// A named panel action button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelAction {
    DrawShape,
    ClearAll,
    ZoomIn,
    ZoomOut,
    ResetZoom,
}

/// What a click on the panel resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelHit {
    SelectTool(Tool),
    /// Index into [`theme::palette::SWATCHES`]
    SelectColor(usize),
    ActivateField(FieldKey),
    Action(PanelAction),
}

/// Mutable panel state: tool, color, buffers, active field, scroll.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelState {
    pub tool: Tool,
    /// Index into [`theme::palette::SWATCHES`]
    pub color_index: usize,
    pub fields: FieldBuffers,
    /// The field currently receiving keystrokes
    pub active: Option<FieldKey>,
    /// Scroll offset of the panel content, `0..=max_scroll`
    pub scroll_offset: f64,
}

impl PanelState {
    pub fn new() -> Self {
        let tool = Tool::Circle;
        Self {
            tool,
            color_index: theme::palette::DEFAULT_INDEX,
            fields: FieldBuffers::for_tool(tool),
            active: Some(tool.field_keys()[0]),
            scroll_offset: 0.0,
        }
    }

    /// The currently selected shape color.
    pub fn color(&self) -> Color {
        theme::palette::SWATCHES[self.color_index].1
    }

    /// Switch tools. Always resets the field buffers and re-activates the
    /// tool's first field, even when re-selecting the current tool.
    pub fn set_tool(&mut self, tool: Tool) {
        self.tool = tool;
        self.reset_fields();
    }

    /// Replace all buffers with empty defaults and activate the first field.
    pub fn reset_fields(&mut self) {
        self.fields = FieldBuffers::for_tool(self.tool);
        self.active = Some(self.tool.field_keys()[0]);
    }

    /// Advance the active field through the tool's key list, wrapping.
    pub fn cycle_field(&mut self) {
        let keys = self.tool.field_keys();
        self.active = match self.active {
            Some(current) => {
                let i = keys.iter().position(|&k| k == current).unwrap_or(0);
                Some(keys[(i + 1) % keys.len()])
            }
            None => Some(keys[0]),
        };
    }

    /// Append a character to the active buffer. No-op without one.
    pub fn append_char(&mut self, c: char) {
        if let Some(key) = self.active {
            self.fields.push_char(key, c);
        }
    }

    /// Truncate the active buffer by one character. No-op without one.
    pub fn backspace(&mut self) {
        if let Some(key) = self.active {
            self.fields.pop_char(key);
        }
    }

    /// Adjust the scroll offset, clamping into `[0, max_scroll]`.
    pub fn scroll_by(&mut self, delta: f64, max_scroll: f64) {
        self.scroll_offset = (self.scroll_offset + delta).clamp(0.0, max_scroll);
    }

    /// Re-clamp the scroll offset after a layout change.
    pub fn clamp_scroll(&mut self, max_scroll: f64) {
        self.scroll_offset = self.scroll_offset.clamp(0.0, max_scroll);
    }
}

impl Default for PanelState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_panel_defaults() {
        let panel = PanelState::new();
        assert_eq!(panel.tool, Tool::Circle);
        assert_eq!(panel.active, Some(FieldKey::Cx));
        assert_eq!(panel.scroll_offset, 0.0);
        for &key in panel.tool.field_keys() {
            assert_eq!(panel.fields.get(key), "");
        }
    }

    #[test]
    fn field_cycling_wraps_in_order() {
        let mut panel = PanelState::new();
        assert_eq!(panel.active, Some(FieldKey::Cx));

        panel.cycle_field();
        assert_eq!(panel.active, Some(FieldKey::Cy));
        panel.cycle_field();
        assert_eq!(panel.active, Some(FieldKey::R));
        panel.cycle_field();
        assert_eq!(panel.active, Some(FieldKey::Cx));
    }

    #[test]
    fn tool_switch_resets_buffers_and_active_field() {
        let mut panel = PanelState::new();
        panel.append_char('4');
        panel.cycle_field();
        assert_eq!(panel.fields.get(FieldKey::Cx), "4");

        panel.set_tool(Tool::Line);
        assert_eq!(panel.tool, Tool::Line);
        assert_eq!(panel.active, Some(FieldKey::X1));
        for &key in Tool::Line.field_keys() {
            assert_eq!(panel.fields.get(key), "");
        }
    }

    #[test]
    fn reselecting_the_same_tool_still_resets() {
        let mut panel = PanelState::new();
        panel.append_char('7');
        panel.set_tool(Tool::Circle);
        assert_eq!(panel.fields.get(FieldKey::Cx), "");
        assert_eq!(panel.active, Some(FieldKey::Cx));
    }

    #[test]
    fn append_and_backspace_edit_the_active_buffer() {
        let mut panel = PanelState::new();
        panel.append_char('-');
        panel.append_char('1');
        panel.append_char('2');
        assert_eq!(panel.fields.get(FieldKey::Cx), "-12");

        panel.backspace();
        assert_eq!(panel.fields.get(FieldKey::Cx), "-1");

        // Backspace on an empty buffer is a no-op
        panel.backspace();
        panel.backspace();
        panel.backspace();
        assert_eq!(panel.fields.get(FieldKey::Cx), "");
    }

    #[test]
    fn append_without_active_field_is_ignored() {
        let mut panel = PanelState::new();
        panel.active = None;
        panel.append_char('5');
        for &key in panel.tool.field_keys() {
            assert_eq!(panel.fields.get(key), "");
        }
    }

    #[test]
    fn scroll_clamps_to_bounds() {
        let mut panel = PanelState::new();
        panel.scroll_by(-100.0, 300.0);
        assert_eq!(panel.scroll_offset, 0.0);

        panel.scroll_by(1000.0, 300.0);
        assert_eq!(panel.scroll_offset, 300.0);

        panel.scroll_by(-30.0, 300.0);
        assert_eq!(panel.scroll_offset, 270.0);

        // Shrinking content re-clamps
        panel.clamp_scroll(100.0);
        assert_eq!(panel.scroll_offset, 100.0);
    }

    #[test]
    fn buffers_ignore_foreign_keys() {
        let mut fields = FieldBuffers::for_tool(Tool::Circle);
        fields.set(FieldKey::X1, "9");
        assert_eq!(fields.get(FieldKey::X1), "");
    }
}
