// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `powf`
use kurbo::{Point, Vec2};
use understory_scroll_view::{Axis, QuantitySet, ScrollView};

use crate::capture::PointerCapture;
use crate::config::ScrollInputConfig;
use crate::drag::DragState;
use crate::input::{Modifiers, PointerButton};

/// Routes pointer and wheel input into a [`ScrollView`].
///
/// - Pressing the pan button anchors a drag and captures the pointer; moves
///   then set the offset so the pressed content point follows the pointer.
/// - Any release drops pointer capture. Releasing the pan button also ends
///   the drag.
/// - The wheel zooms about the pointer with the zoom modifiers held, scrolls
///   horizontally with the horizontal modifiers held, and scrolls vertically
///   otherwise. Zoom wins when both modifier sets are held.
///
/// The controller holds no view state of its own; the same controller can
/// drive a view that is also mutated directly by the host.
///
/// ```
/// use kurbo::{Point, Size, Vec2};
/// use understory_scroll_input::{Modifiers, PointerButton, ScrollController, ScrollInputConfig};
/// use understory_scroll_view::ScrollView;
///
/// let mut view = ScrollView::new();
/// view.set_viewport_size(Size::new(200.0, 200.0));
/// view.set_content_size(Size::new(1000.0, 1000.0));
///
/// let mut controller = ScrollController::new(ScrollInputConfig::default());
/// controller.pointer_pressed(&view, PointerButton::Auxiliary, Point::new(100.0, 100.0));
/// controller.pointer_moved(&mut view, Point::new(60.0, 80.0));
/// controller.pointer_released(Some(PointerButton::Auxiliary));
/// assert_eq!(view.offset(), Vec2::new(40.0, 20.0));
///
/// // One wheel notch down scrolls 24 units.
/// controller.wheel(&mut view, -120.0, Point::ZERO, Modifiers::empty());
/// assert_eq!(view.offset().y, 44.0);
/// ```
#[derive(Debug)]
pub struct ScrollController<C: PointerCapture = ()> {
    config: ScrollInputConfig,
    drag: DragState,
    capture: C,
    captured: bool,
}

impl ScrollController<()> {
    /// Creates a controller without a pointer capture hook.
    #[must_use]
    pub fn new(config: ScrollInputConfig) -> Self {
        Self::with_capture(config, ())
    }
}

impl Default for ScrollController<()> {
    fn default() -> Self {
        Self::new(ScrollInputConfig::default())
    }
}

impl<C: PointerCapture> ScrollController<C> {
    /// Creates a controller that acquires and releases pointer capture
    /// through `capture`.
    #[must_use]
    pub fn with_capture(config: ScrollInputConfig, capture: C) -> Self {
        Self {
            config,
            drag: DragState::default(),
            capture,
            captured: false,
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &ScrollInputConfig {
        &self.config
    }

    /// Replaces the configuration. An active drag keeps its anchor.
    pub fn set_config(&mut self, config: ScrollInputConfig) {
        self.config = config;
    }

    /// Returns the capture hook.
    #[must_use]
    pub fn capture_hook(&self) -> &C {
        &self.capture
    }

    /// Returns the drag state.
    #[must_use]
    pub fn drag(&self) -> &DragState {
        &self.drag
    }

    /// Returns `true` while a pan drag is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Returns `true` while this controller holds pointer capture.
    #[must_use]
    pub fn is_captured(&self) -> bool {
        self.captured
    }

    /// Handles a button press at `position` (viewport coordinates).
    ///
    /// Returns `true` if the press started a pan drag.
    pub fn pointer_pressed(
        &mut self,
        view: &ScrollView,
        button: PointerButton,
        position: Point,
    ) -> bool {
        if button != self.config.pan_button {
            return false;
        }
        self.drag.start(position, view.offset());
        log::debug!(
            "pan drag started at {position:?} from offset {:?}",
            view.offset()
        );
        if !self.captured {
            self.capture.capture();
            self.captured = true;
            log::debug!("pointer captured");
        }
        true
    }

    /// Handles a pointer move to `position` (viewport coordinates).
    ///
    /// Pans while a drag is active; otherwise does nothing.
    pub fn pointer_moved(&mut self, view: &mut ScrollView, position: Point) -> QuantitySet {
        match self.drag.offset_at(position) {
            Some(offset) => view.set_offset(offset),
            None => QuantitySet::empty(),
        }
    }

    /// Handles a button release. `None` stands for a release the host could
    /// not attribute to a button.
    ///
    /// Pointer capture is released unconditionally, even without a matching
    /// press. The drag ends when the pan button (or an unknown button) is
    /// released. Returns `true` if a drag ended.
    pub fn pointer_released(&mut self, button: Option<PointerButton>) -> bool {
        self.release_capture();
        if button.is_some_and(|b| b != self.config.pan_button) {
            return false;
        }
        let ended = self.drag.end();
        if ended {
            log::debug!("pan drag ended");
        }
        ended
    }

    /// Abandons any drag and releases pointer capture, for lost focus or a
    /// cancelled pointer stream. The offset stays where the drag left it.
    pub fn cancel(&mut self) {
        if self.drag.end() {
            log::debug!("pan drag cancelled");
        }
        self.release_capture();
    }

    /// Handles a wheel step of `delta` units with the pointer at `position`.
    ///
    /// Positive deltas (wheel away from the user) move toward the content
    /// start, or zoom in when the zoom modifiers are held. Zero and
    /// non-finite deltas are ignored.
    pub fn wheel(
        &mut self,
        view: &mut ScrollView,
        delta: f64,
        position: Point,
        modifiers: Modifiers,
    ) -> QuantitySet {
        if delta == 0.0 || !delta.is_finite() {
            return QuantitySet::empty();
        }
        if modifiers.holds(self.config.zoom_modifiers) {
            self.zoom(view, delta, position)
        } else if modifiers.holds(self.config.horizontal_modifiers) {
            self.scroll(view, Axis::Horizontal, delta)
        } else {
            self.scroll(view, Axis::Vertical, delta)
        }
    }

    /// Zooms by `zoom_factor^delta` about `position`, keeping the content
    /// point under it fixed.
    pub fn zoom(&mut self, view: &mut ScrollView, delta: f64, position: Point) -> QuantitySet {
        let factor = self.config.zoom_factor.powf(delta);
        view.zoom_about_viewport_point(position, factor)
    }

    /// Scrolls one axis by `−delta × scroll_factor`.
    pub fn scroll(&mut self, view: &mut ScrollView, axis: Axis, delta: f64) -> QuantitySet {
        let step = delta * self.config.scroll_factor;
        let pan = match axis {
            Axis::Horizontal => Vec2::new(-step, 0.0),
            Axis::Vertical => Vec2::new(0.0, -step),
        };
        view.pan_by(pan)
    }

    fn release_capture(&mut self) {
        // Always forward: a release without a press must still reach the host.
        self.capture.release();
        if self.captured {
            self.captured = false;
            log::debug!("pointer capture released");
        }
    }
}

impl<C: PointerCapture> Drop for ScrollController<C> {
    fn drop(&mut self) {
        if self.captured {
            self.release_capture();
        }
    }
}
