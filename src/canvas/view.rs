// Copyright 2025 the Coordraw Authors
// SPDX-License-Identifier: Apache-2.0

//! Xilem View wrapper for CanvasWidget

use super::CanvasWidget;
use std::marker::PhantomData;
use xilem::core::{MessageContext, MessageResult, Mut, View, ViewMarker};
use xilem::{Pod, ViewCtx};

/// Create the drawing canvas view.
///
/// The widget owns all drawing state, so the view carries nothing and
/// rebuilds are no-ops.
pub fn canvas_view<State>() -> CanvasView<State> {
    CanvasView {
        phantom: PhantomData,
    }
}

/// The Xilem View for CanvasWidget
#[must_use = "View values do nothing unless provided to Xilem."]
pub struct CanvasView<State> {
    phantom: PhantomData<fn() -> State>,
}

impl<State> ViewMarker for CanvasView<State> {}

impl<State: 'static> View<State, (), ViewCtx> for CanvasView<State> {
    type Element = Pod<CanvasWidget>;
    type ViewState = ();

    fn build(&self, ctx: &mut ViewCtx, _app_state: &mut State) -> (Self::Element, Self::ViewState) {
        let widget = CanvasWidget::new();
        let pod = ctx.create_pod(widget);
        ctx.record_action(pod.new_widget.id());
        (pod, ())
    }

    fn rebuild(
        &self,
        _prev: &Self,
        _view_state: &mut Self::ViewState,
        _ctx: &mut ViewCtx,
        _element: Mut<'_, Self::Element>,
        _app_state: &mut State,
    ) {
        // All state lives in the widget; nothing to push down
    }

    fn teardown(
        &self,
        _view_state: &mut Self::ViewState,
        _ctx: &mut ViewCtx,
        _element: Mut<'_, Self::Element>,
    ) {
        // No cleanup needed
    }

    fn message(
        &self,
        _view_state: &mut Self::ViewState,
        _message: &mut MessageContext,
        _element: Mut<'_, Self::Element>,
        _app_state: &mut State,
    ) -> MessageResult<()> {
        // The widget never submits actions
        MessageResult::Stale
    }
}
