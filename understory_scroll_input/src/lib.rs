// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Scroll Input: pointer and wheel handling for scroll views.
//!
//! [`ScrollController`] turns pointer presses, moves, releases and wheel steps
//! into mutations of an [`understory_scroll_view::ScrollView`]:
//!
//! - **Pan**: pressing the pan button (middle by default) anchors a drag at the
//!   press point and the current offset. Each move sets
//!   `offset = anchor_offset + (press_point − pointer)`, so the pressed content
//!   point tracks the pointer. The pointer is captured for the duration.
//! - **Zoom to cursor**: the wheel with the zoom modifiers (Ctrl by default)
//!   multiplies the scale by `zoom_factor^delta` and keeps the content point
//!   under the pointer in place.
//! - **Scroll**: the wheel moves `OffsetY` (or `OffsetX` with the horizontal
//!   modifiers, Shift by default) by `−delta × scroll_factor`.
//!
//! All tuning lives in [`ScrollInputConfig`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use understory_scroll_input::{Modifiers, ScrollController};
//! use understory_scroll_view::ScrollView;
//!
//! let mut view = ScrollView::new();
//! view.set_viewport_size(Size::new(400.0, 300.0));
//! view.set_content_size(Size::new(2000.0, 2000.0));
//!
//! let mut controller = ScrollController::default();
//! let cursor = Point::new(120.0, 80.0);
//! let under_cursor = view.viewport_to_content_point(cursor);
//!
//! // Three notches of Ctrl+wheel zoom in about the cursor.
//! controller.wheel(&mut view, 360.0, cursor, Modifiers::CONTROL);
//! assert!(view.scale() > 1.0);
//! let after = view.viewport_to_content_point(cursor);
//! assert!((after - under_cursor).hypot() < 1e-9);
//! ```
//!
//! ## Pointer capture
//!
//! Implement [`PointerCapture`] to have the controller capture the pointer on
//! a pan press. Capture is released on every release event (even one with no
//! matching press), on [`ScrollController::cancel`], and when the controller is
//! dropped while still holding it.
//!
//! ## Features
//!
//! - `ui_events_adapter` (default): `ScrollController::handle_pointer_event`
//!   for [`ui_events`](https://docs.rs/ui-events) pointer events.
//! - `std` (default) / `libm`: forwarded to Kurbo.
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod capture;
mod config;
mod controller;
mod drag;
mod input;
#[cfg(feature = "ui_events_adapter")]
pub mod ui_events_adapter;

pub use capture::PointerCapture;
pub use config::{ConfigError, ScrollInputConfig};
pub use controller::ScrollController;
pub use drag::{DragAnchor, DragState};
pub use input::{Modifiers, PointerButton};
