// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pan drag state: the press point and the offset the drag started from.
//!
//! ## Usage
//!
//! 1) On press, call [`DragState::start`] with the press point and the current offset.
//! 2) On each move, call [`DragState::offset_at`] to get the offset to set.
//! 3) On release, call [`DragState::end`].
//!
//! Offsets are always computed from the anchor rather than accumulated from
//! per-move deltas, so a long drag does not drift.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use understory_scroll_input::DragState;
//!
//! let mut drag = DragState::default();
//! drag.start(Point::new(50.0, 50.0), Vec2::new(10.0, 10.0));
//!
//! // Dragging content left and down moves the offset right and up.
//! let offset = drag.offset_at(Point::new(30.0, 70.0)).unwrap();
//! assert_eq!(offset, Vec2::new(30.0, -10.0));
//! ```

use kurbo::{Point, Vec2};

/// Where a pan drag started.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DragAnchor {
    /// Pointer position at press, in viewport coordinates.
    pub press_point: Point,
    /// `(OffsetX, OffsetY)` at press.
    pub anchor_offset: Vec2,
}

impl DragAnchor {
    /// Returns the offset that keeps the pressed content point under `point`.
    #[must_use]
    pub fn offset_at(&self, point: Point) -> Vec2 {
        self.anchor_offset + (self.press_point - point)
    }
}

/// Tracks an active pan drag.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct DragState {
    anchor: Option<DragAnchor>,
}

impl DragState {
    /// Starts a drag at `press_point` from `anchor_offset`, replacing any
    /// drag in progress.
    pub fn start(&mut self, press_point: Point, anchor_offset: Vec2) {
        self.anchor = Some(DragAnchor {
            press_point,
            anchor_offset,
        });
    }

    /// Returns the offset for the pointer at `point`, or `None` when idle.
    #[must_use]
    pub fn offset_at(&self, point: Point) -> Option<Vec2> {
        self.anchor.map(|anchor| anchor.offset_at(point))
    }

    /// Returns how far the pointer moved since the press, or `None` when idle.
    #[must_use]
    pub fn total_offset(&self, point: Point) -> Option<Vec2> {
        self.anchor.map(|anchor| point - anchor.press_point)
    }

    /// Returns the anchor of the active drag.
    #[must_use]
    pub fn anchor(&self) -> Option<&DragAnchor> {
        self.anchor.as_ref()
    }

    /// Ends the drag. Returns `true` if one was active.
    pub fn end(&mut self) -> bool {
        self.anchor.take().is_some()
    }

    /// Returns `true` while a drag is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.anchor.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_drag_state_is_idle() {
        let drag = DragState::default();
        assert!(!drag.is_dragging());
        assert_eq!(drag.offset_at(Point::new(1.0, 1.0)), None);
        assert_eq!(drag.total_offset(Point::new(1.0, 1.0)), None);
    }

    #[test]
    fn offset_mirrors_pointer_motion() {
        let mut drag = DragState::default();
        drag.start(Point::new(50.0, 50.0), Vec2::new(10.0, 10.0));

        assert_eq!(
            drag.offset_at(Point::new(50.0, 50.0)),
            Some(Vec2::new(10.0, 10.0))
        );
        assert_eq!(
            drag.offset_at(Point::new(30.0, 70.0)),
            Some(Vec2::new(30.0, -10.0))
        );
        assert_eq!(
            drag.total_offset(Point::new(30.0, 70.0)),
            Some(Vec2::new(-20.0, 20.0))
        );
    }

    #[test]
    fn offset_depends_only_on_current_point() {
        let mut drag = DragState::default();
        drag.start(Point::new(0.0, 0.0), Vec2::new(100.0, 100.0));
        for x in 0..50 {
            let _ = drag.offset_at(Point::new(f64::from(x) * 3.7, 0.0));
        }
        assert_eq!(
            drag.offset_at(Point::new(10.0, 5.0)),
            Some(Vec2::new(90.0, 95.0))
        );
    }

    #[test]
    fn restart_replaces_anchor() {
        let mut drag = DragState::default();
        drag.start(Point::new(0.0, 0.0), Vec2::ZERO);
        drag.start(Point::new(10.0, 10.0), Vec2::new(5.0, 5.0));
        assert_eq!(
            drag.anchor(),
            Some(&DragAnchor {
                press_point: Point::new(10.0, 10.0),
                anchor_offset: Vec2::new(5.0, 5.0),
            })
        );
    }

    #[test]
    fn end_reports_whether_active() {
        let mut drag = DragState::default();
        assert!(!drag.end());
        drag.start(Point::ZERO, Vec2::ZERO);
        assert!(drag.end());
        assert!(!drag.is_dragging());
    }
}
