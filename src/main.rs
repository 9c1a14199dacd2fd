// Copyright 2025 the Coordraw Authors
// SPDX-License-Identifier: Apache-2.0

//! Coordraw: a coordinate-grid shape drawing tool built with Xilem

use xilem::{EventLoop, winit::error::EventLoopError};

fn main() -> Result<(), EventLoopError> {
    coordraw::run(EventLoop::with_user_event())
}
