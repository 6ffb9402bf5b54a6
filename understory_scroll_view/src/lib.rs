// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Scroll View: state for a scalable, scrollable viewport.
//!
//! A scroll view shows content that can be zoomed and panned inside a fixed
//! viewport. This crate owns the numbers behind that: the zoom multiplier,
//! the measured viewport and content sizes, and everything derived from them.
//! It does no layout, rendering, or input handling of its own; hosts report
//! sizes, read back the translation and scroll bar visibility, and route input
//! through a controller such as the one in `understory_scroll_input`.
//!
//! The state is modeled as a fixed set of [`Quantity`] values:
//!
//! - **Roots** set from outside: `Scale`, the content and viewport sizes,
//!   the scroll bar visibility policies, and the offsets.
//! - **Derived** quantities: scaled content size, scrollable extents, the
//!   rendering translation `X`/`Y`, and the computed scroll bar visibilities.
//!   The offsets are re-clamped whenever their bounds move.
//!
//! Edges between quantities are declared once ([`Quantity::inputs`]) and the
//! settle order is derived from them at compile time ([`SETTLE_ORDER`]). Each
//! mutation of a [`ScrollView`] stores its roots, then recomputes the affected
//! quantities in that order, visiting each at most once. Paths whose values
//! did not change stop early. Every mutation returns the [`QuantitySet`] of
//! quantities whose value changed.
//!
//! ## Quick Start
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use understory_scroll_view::{QuantitySet, ScrollView, Visibility};
//!
//! let mut view = ScrollView::new();
//! view.set_viewport_size(Size::new(200.0, 200.0));
//! view.set_content_size(Size::new(500.0, 500.0));
//!
//! // Panning past the end clamps to the scaled content extent.
//! view.set_offset_x(1000.0);
//! assert_eq!(view.offset().x, 500.0);
//! assert_eq!(view.translation().x, -500.0);
//!
//! // Zooming out re-clamps the offset and collapses the scroll bar.
//! let changed = view.set_scale(0.2);
//! assert!(changed.contains(QuantitySet::OFFSET_X | QuantitySet::SCROLLABLE_WIDTH));
//! assert_eq!(view.offset().x, 100.0);
//! assert_eq!(view.computed_horizontal_scroll_bar_visibility(), Visibility::Collapsed);
//!
//! // Zoom about a viewport point: the content under it stays put.
//! let anchor = Point::new(50.0, 50.0);
//! let before = view.viewport_to_content_point(anchor);
//! view.zoom_about_viewport_point(anchor, 0.5);
//! let after = view.viewport_to_content_point(anchor);
//! assert!((after - before).hypot() < 1e-9);
//! ```
//!
//! ## Explaining a Settle Pass
//!
//! [`ScrollView::apply_with_trace`] reports every stored root and every
//! recomputed quantity to a [`SettleTrace`] sink. [`SettleRecorder`] keeps them:
//!
//! ```rust
//! use kurbo::Size;
//! use understory_scroll_view::{Quantity, RootChange, ScrollView, SettleRecorder};
//!
//! let mut view = ScrollView::new();
//! view.set_viewport_size(Size::new(100.0, 100.0));
//! view.set_content_size(Size::new(400.0, 400.0));
//!
//! let mut recorder = SettleRecorder::new();
//! view.apply_with_trace(RootChange::OffsetX(25.0), &mut recorder);
//! assert_eq!(recorder.recompute_order(), [Quantity::X]);
//! ```
//!
//! ## Offset Bounds
//!
//! Each offset is clamped to `[−Viewport, ActualContent]`: the content may be
//! panned up to one full viewport before its start, and up to its full scaled
//! extent past it. The lower bound is checked first, so inverted bounds
//! (negative sizes) resolve deterministically rather than panicking.
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`. Geometry comes from Kurbo; enable
//! either the `std` (default) or `libm` feature to select its float backend.
//!
//! ## Logging
//!
//! Settle passes emit `trace`-level records through the `log` facade, and
//! ignored zoom requests emit `debug` records. Install any `log` backend to
//! see them.

#![no_std]

extern crate alloc;

mod graph;
mod invariants;
mod quantity;
mod scroll_view;
mod trace;
mod visibility;

pub use graph::{SETTLE_ORDER, affected, settle_rank};
pub use invariants::InvariantViolation;
pub use quantity::{Axis, Quantity, QuantitySet};
pub use scroll_view::{RootChange, ScrollAxis, ScrollView, ScrollViewSnapshot};
pub use trace::{SettleEvent, SettleRecorder, SettleTrace};
pub use visibility::{ScrollBarVisibility, Visibility};
