// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

mod encoder;
pub mod keycode;
mod layout;

pub use encoder::KeyEncoder;
pub use layout::{KeyField, KeyLayout, KeyLayoutInner, KeySpec, LayoutFingerprint};
