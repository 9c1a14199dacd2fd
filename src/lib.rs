// Copyright 2025 the Coordraw Authors
// SPDX-License-Identifier: Apache-2.0

//! Coordraw: a coordinate-grid shape drawing tool built with Xilem.
//!
//! Shapes are described numerically in a side panel and rendered on a
//! zoomable mathematical coordinate plane.

use winit::dpi::LogicalSize;
use winit::error::EventLoopError;
use xilem::{EventLoopBuilder, WindowId, WindowView, Xilem, window};

mod canvas;
mod factory;
mod panel;
mod session;
mod settings;
mod shapes;
mod text;
mod theme;
mod viewport;

use canvas::canvas_view;

/// Top-level application state. The drawing session itself lives inside
/// the canvas widget; this only tracks the window.
struct AppState {
    running: bool,
    main_window_id: WindowId,
}

impl AppState {
    fn new() -> Self {
        Self {
            running: true,
            main_window_id: WindowId::next(),
        }
    }
}

/// Implement the Xilem AppState trait
impl xilem::AppState for AppState {
    fn keep_running(&self) -> bool {
        self.running
    }
}

/// Entry point for the Coordraw application
pub fn run(event_loop: EventLoopBuilder) -> Result<(), EventLoopError> {
    // Initialize tracing subscriber (can be controlled via RUST_LOG env var)
    // Filter out noisy wgpu/naga shader compilation logs
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("coordraw=info".parse().unwrap())
                .add_directive("wgpu=warn".parse().unwrap())
                .add_directive("naga=warn".parse().unwrap())
                .add_directive("wgpu_core=warn".parse().unwrap())
                .add_directive("wgpu_hal=warn".parse().unwrap()),
        )
        .init();

    let app = Xilem::new(AppState::new(), app_logic);
    app.run_in(event_loop)?;
    Ok(())
}

/// Build the single-window UI: one canvas widget filling the window.
fn app_logic(state: &mut AppState) -> impl Iterator<Item = WindowView<AppState>> + use<> {
    let window_size = LogicalSize::new(1000.0, 700.0);
    let window_view = window(
        state.main_window_id,
        "Coordinate Shape Drawer",
        canvas_view(),
    );
    let window_with_options = window_view.with_options(|options| {
        options
            .with_initial_inner_size(window_size)
            .on_close(|state: &mut AppState| state.running = false)
    });

    std::iter::once(window_with_options)
}
