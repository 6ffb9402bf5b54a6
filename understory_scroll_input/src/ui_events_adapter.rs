// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapter from [`ui_events`] pointer events to [`ScrollController`] calls.
//!
//! Positions are taken in logical coordinates. Scroll deltas are converted to
//! wheel units: one line is [`LINE_UNITS`] units, so a 120-unit wheel notch is
//! three lines, and logical pixels map 1:1. Page deltas bypass the wheel
//! factors and move the offset by whole viewport extents.

use kurbo::{Point, Vec2};
use ui_events::ScrollDelta;
use ui_events::keyboard::Modifiers as UiModifiers;
use ui_events::pointer::{PointerButton as UiPointerButton, PointerEvent, PointerScrollEvent};
use understory_scroll_view::{Axis, QuantitySet, ScrollView};

use crate::capture::PointerCapture;
use crate::controller::ScrollController;
use crate::input::{Modifiers, PointerButton};

/// Wheel units per scrolled line.
pub const LINE_UNITS: f64 = 40.0;

/// Wheel units per page, used only when zooming with a page delta.
pub const PAGE_UNITS: f64 = 120.0;

impl From<UiModifiers> for Modifiers {
    fn from(m: UiModifiers) -> Self {
        let mut out = Self::empty();
        out.set(Self::CONTROL, m.ctrl());
        out.set(Self::SHIFT, m.shift());
        out.set(Self::ALT, m.alt());
        out.set(Self::META, m.meta());
        out
    }
}

/// Maps a `ui_events` button to a [`PointerButton`]; pen and extended buttons
/// have no counterpart.
#[must_use]
pub fn pointer_button(button: UiPointerButton) -> Option<PointerButton> {
    match button {
        UiPointerButton::Primary => Some(PointerButton::Primary),
        UiPointerButton::Secondary => Some(PointerButton::Secondary),
        UiPointerButton::Auxiliary => Some(PointerButton::Auxiliary),
        UiPointerButton::X1 => Some(PointerButton::X1),
        UiPointerButton::X2 => Some(PointerButton::X2),
        _ => None,
    }
}

/// A scroll delta in controller terms.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum WheelInput {
    /// Wheel units per axis, positive toward the content start.
    Units(Vec2),
    /// Whole pages per axis, positive toward the content start.
    Pages(Vec2),
}

impl WheelInput {
    /// Converts a `ui_events` scroll delta, using `scale_factor` for physical
    /// pixel deltas.
    #[must_use]
    pub fn from_delta(delta: &ScrollDelta, scale_factor: f64) -> Self {
        match delta {
            ScrollDelta::PixelDelta(pos) => {
                let logical = pos.to_logical(scale_factor);
                Self::Units(Vec2::new(logical.x, logical.y))
            }
            ScrollDelta::LineDelta(x, y) => Self::Units(Vec2::new(
                f64::from(*x) * LINE_UNITS,
                f64::from(*y) * LINE_UNITS,
            )),
            ScrollDelta::PageDelta(x, y) => Self::Pages(Vec2::new(f64::from(*x), f64::from(*y))),
        }
    }

    /// Picks the axis to act on: vertical when it has a component,
    /// otherwise horizontal. Returns `None` for an empty delta.
    #[must_use]
    pub fn primary_axis(self) -> Option<(Axis, f64)> {
        let v = match self {
            Self::Units(v) | Self::Pages(v) => v,
        };
        if v.y != 0.0 {
            Some((Axis::Vertical, v.y))
        } else if v.x != 0.0 {
            Some((Axis::Horizontal, v.x))
        } else {
            None
        }
    }
}

impl<C: PointerCapture> ScrollController<C> {
    /// Handles one `ui_events` pointer event.
    ///
    /// Returns `true` if the event was consumed: a pan-button press, a move
    /// during a drag, any release or cancel, or a scroll that had a delta.
    pub fn handle_pointer_event(&mut self, view: &mut ScrollView, event: &PointerEvent) -> bool {
        match event {
            PointerEvent::Down(e) => match e.button.and_then(pointer_button) {
                Some(button) => self.pointer_pressed(view, button, e.state.logical_point()),
                None => false,
            },
            PointerEvent::Move(e) => {
                if !self.is_dragging() {
                    return false;
                }
                self.pointer_moved(view, e.current.logical_point());
                true
            }
            PointerEvent::Up(e) => {
                self.pointer_released(e.button.and_then(pointer_button));
                true
            }
            PointerEvent::Cancel(_) => {
                self.cancel();
                true
            }
            PointerEvent::Scroll(e) => {
                let input = WheelInput::from_delta(&e.delta, e.state.scale_factor);
                self.scroll_event(view, e, input).is_some()
            }
            PointerEvent::Gesture(_) | PointerEvent::Enter(_) | PointerEvent::Leave(_) => false,
        }
    }

    fn scroll_event(
        &mut self,
        view: &mut ScrollView,
        event: &PointerScrollEvent,
        input: WheelInput,
    ) -> Option<QuantitySet> {
        let (axis, amount) = input.primary_axis()?;
        let position: Point = event.state.logical_point();
        let modifiers = Modifiers::from(event.state.modifiers);
        let zooming = modifiers.holds(self.config().zoom_modifiers);

        let changed = match input {
            WheelInput::Units(_) if zooming || axis == Axis::Vertical => {
                self.wheel(view, amount, position, modifiers)
            }
            WheelInput::Units(_) => self.scroll(view, Axis::Horizontal, amount),
            WheelInput::Pages(_) if zooming => self.zoom(view, amount * PAGE_UNITS, position),
            WheelInput::Pages(_) => {
                let horizontal = axis == Axis::Horizontal
                    || modifiers.holds(self.config().horizontal_modifiers);
                let page = view.viewport_size();
                let pan = if horizontal {
                    Vec2::new(-amount * page.width, 0.0)
                } else {
                    Vec2::new(0.0, -amount * page.height)
                };
                view.pan_by(pan)
            }
        };
        Some(changed)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use kurbo::{Point, Size, Vec2};
    use ui_events::ScrollDelta;
    use ui_events::keyboard::Modifiers as UiModifiers;
    use ui_events::pointer::{
        PointerButton as UiPointerButton, PointerButtonEvent, PointerEvent, PointerId, PointerInfo,
        PointerScrollEvent, PointerState, PointerType, PointerUpdate,
    };
    use understory_scroll_view::{Axis, ScrollView};

    use super::{LINE_UNITS, PAGE_UNITS, WheelInput, pointer_button};
    use crate::controller::ScrollController;
    use crate::input::{Modifiers, PointerButton};

    const MOUSE: PointerInfo = PointerInfo {
        pointer_id: Some(PointerId::PRIMARY),
        persistent_device_id: None,
        pointer_type: PointerType::Mouse,
    };

    fn view() -> ScrollView {
        let mut view = ScrollView::new();
        view.set_viewport_size(Size::new(200.0, 200.0));
        view.set_content_size(Size::new(1000.0, 1000.0));
        view
    }

    fn state(x: f64, y: f64, modifiers: UiModifiers) -> PointerState {
        let mut state = PointerState {
            modifiers,
            ..PointerState::default()
        };
        state.position.x = x;
        state.position.y = y;
        state
    }

    fn down(button: UiPointerButton, x: f64, y: f64) -> PointerEvent {
        PointerEvent::Down(PointerButtonEvent {
            button: Some(button),
            pointer: MOUSE,
            state: state(x, y, UiModifiers::empty()),
        })
    }

    fn up(button: Option<UiPointerButton>, x: f64, y: f64) -> PointerEvent {
        PointerEvent::Up(PointerButtonEvent {
            button,
            pointer: MOUSE,
            state: state(x, y, UiModifiers::empty()),
        })
    }

    fn moved(x: f64, y: f64) -> PointerEvent {
        PointerEvent::Move(PointerUpdate {
            pointer: MOUSE,
            current: state(x, y, UiModifiers::empty()),
            coalesced: Vec::new(),
            predicted: Vec::new(),
        })
    }

    fn scroll_at(delta: ScrollDelta, at: Point, modifiers: UiModifiers) -> PointerEvent {
        PointerEvent::Scroll(PointerScrollEvent {
            pointer: MOUSE,
            delta,
            state: state(at.x, at.y, modifiers),
        })
    }

    fn scroll(delta: ScrollDelta, modifiers: UiModifiers) -> PointerEvent {
        scroll_at(delta, Point::ZERO, modifiers)
    }

    #[test]
    fn line_delta_is_forty_units_per_line() {
        let input = WheelInput::from_delta(&ScrollDelta::LineDelta(0.0, 3.0), 1.0);
        assert_eq!(input, WheelInput::Units(Vec2::new(0.0, 120.0)));
        let expected = Some((Axis::Vertical, 3.0 * LINE_UNITS));
        assert_eq!(input.primary_axis(), expected);
    }

    #[test]
    fn horizontal_only_delta_routes_to_x() {
        let input = WheelInput::from_delta(&ScrollDelta::LineDelta(-1.0, 0.0), 1.0);
        assert_eq!(input.primary_axis(), Some((Axis::Horizontal, -40.0)));
    }

    #[test]
    fn page_delta_stays_in_pages() {
        let input = WheelInput::from_delta(&ScrollDelta::PageDelta(0.0, -1.0), 2.0);
        assert_eq!(input, WheelInput::Pages(Vec2::new(0.0, -1.0)));
    }

    #[test]
    fn empty_delta_has_no_axis() {
        let input = WheelInput::from_delta(&ScrollDelta::LineDelta(0.0, 0.0), 1.0);
        assert_eq!(input.primary_axis(), None);
    }

    #[test]
    fn modifiers_convert() {
        let m = Modifiers::from(UiModifiers::CONTROL | UiModifiers::SHIFT);
        assert_eq!(m, Modifiers::CONTROL | Modifiers::SHIFT);
        assert_eq!(Modifiers::from(UiModifiers::empty()), Modifiers::empty());
    }

    #[test]
    fn buttons_convert() {
        assert_eq!(
            pointer_button(UiPointerButton::Auxiliary),
            Some(PointerButton::Auxiliary)
        );
        assert_eq!(
            pointer_button(UiPointerButton::Primary),
            Some(PointerButton::Primary)
        );
    }

    #[test]
    fn middle_button_drag_pans() {
        let mut view = view();
        view.set_offset(Vec2::new(10.0, 10.0));
        let mut controller = ScrollController::default();

        let press = down(UiPointerButton::Auxiliary, 50.0, 50.0);
        assert!(controller.handle_pointer_event(&mut view, &press));
        assert!(controller.is_captured());
        let drag = moved(30.0, 70.0);
        assert!(controller.handle_pointer_event(&mut view, &drag));
        assert_eq!(view.offset(), Vec2::new(30.0, -10.0));

        let release = up(Some(UiPointerButton::Auxiliary), 30.0, 70.0);
        assert!(controller.handle_pointer_event(&mut view, &release));
        assert!(!controller.is_dragging());
        assert!(!controller.is_captured());

        let stray = moved(0.0, 0.0);
        assert!(!controller.handle_pointer_event(&mut view, &stray));
        assert_eq!(view.offset(), Vec2::new(30.0, -10.0));
    }

    #[test]
    fn positions_are_logical() {
        let mut view = view();
        let mut controller = ScrollController::default();
        let mut press = down(UiPointerButton::Auxiliary, 100.0, 100.0);
        let mut drag = moved(60.0, 100.0);
        if let PointerEvent::Down(e) = &mut press {
            e.state.scale_factor = 2.0;
        }
        if let PointerEvent::Move(e) = &mut drag {
            e.current.scale_factor = 2.0;
        }
        controller.handle_pointer_event(&mut view, &press);
        controller.handle_pointer_event(&mut view, &drag);
        assert_eq!(view.offset(), Vec2::new(20.0, 0.0));
    }

    #[test]
    fn moves_without_drag_are_not_consumed() {
        let mut view = view();
        let mut controller = ScrollController::default();
        let press = down(UiPointerButton::Primary, 50.0, 50.0);
        assert!(!controller.handle_pointer_event(&mut view, &press));
        let stray = moved(0.0, 0.0);
        assert!(!controller.handle_pointer_event(&mut view, &stray));
        assert_eq!(view.offset(), Vec2::ZERO);
    }

    #[test]
    fn cancel_ends_drag() {
        let mut view = view();
        let mut controller = ScrollController::default();
        let press = down(UiPointerButton::Auxiliary, 50.0, 50.0);
        controller.handle_pointer_event(&mut view, &press);
        let cancel = PointerEvent::Cancel(MOUSE);
        assert!(controller.handle_pointer_event(&mut view, &cancel));
        assert!(!controller.is_dragging());
        assert!(!controller.is_captured());
        let stray = moved(0.0, 0.0);
        assert!(!controller.handle_pointer_event(&mut view, &stray));
    }

    #[test]
    fn unattributed_release_ends_drag() {
        let mut view = view();
        let mut controller = ScrollController::default();
        let press = down(UiPointerButton::Auxiliary, 50.0, 50.0);
        controller.handle_pointer_event(&mut view, &press);
        let release = up(None, 50.0, 50.0);
        assert!(controller.handle_pointer_event(&mut view, &release));
        assert!(!controller.is_dragging());
    }

    #[test]
    fn enter_and_leave_are_ignored() {
        let mut view = view();
        let mut controller = ScrollController::default();
        for event in [PointerEvent::Enter(MOUSE), PointerEvent::Leave(MOUSE)] {
            assert!(!controller.handle_pointer_event(&mut view, &event));
        }
    }

    #[test]
    fn line_delta_scrolls_vertically() {
        let mut view = view();
        view.set_offset_y(100.0);
        let mut controller = ScrollController::default();
        let event = scroll(ScrollDelta::LineDelta(0.0, 3.0), UiModifiers::empty());
        assert!(controller.handle_pointer_event(&mut view, &event));
        assert_eq!(view.offset(), Vec2::new(0.0, 76.0));
    }

    #[test]
    fn shift_line_delta_scrolls_horizontally() {
        let mut view = view();
        let mut controller = ScrollController::default();
        let event = scroll(ScrollDelta::LineDelta(0.0, -1.0), UiModifiers::SHIFT);
        assert!(controller.handle_pointer_event(&mut view, &event));
        assert_eq!(view.offset(), Vec2::new(8.0, 0.0));
    }

    #[test]
    fn horizontal_line_delta_scrolls_horizontally() {
        let mut view = view();
        let mut controller = ScrollController::default();
        let event = scroll(ScrollDelta::LineDelta(-1.0, 0.0), UiModifiers::empty());
        assert!(controller.handle_pointer_event(&mut view, &event));
        assert_eq!(view.offset(), Vec2::new(8.0, 0.0));
    }

    #[test]
    fn empty_scroll_is_not_consumed() {
        let mut view = view();
        let mut controller = ScrollController::default();
        let event = scroll(ScrollDelta::LineDelta(0.0, 0.0), UiModifiers::empty());
        assert!(!controller.handle_pointer_event(&mut view, &event));
    }

    #[test]
    fn control_line_delta_zooms_about_pointer() {
        let mut view = view();
        let mut controller = ScrollController::default();
        let cursor = Point::new(80.0, 40.0);
        let before = view.viewport_to_content_point(cursor);

        let delta = ScrollDelta::LineDelta(0.0, 3.0);
        let event = scroll_at(delta, cursor, UiModifiers::CONTROL);
        assert!(controller.handle_pointer_event(&mut view, &event));
        let expected = 1.001_f64.powf(3.0 * LINE_UNITS);
        assert!((view.scale() - expected).abs() < 1e-12);
        let after = view.viewport_to_content_point(cursor);
        assert!((after - before).hypot() < 1e-9);
    }

    #[test]
    fn page_delta_moves_by_viewport_extent() {
        let mut view = view();
        let mut controller = ScrollController::default();

        let down_page = scroll(ScrollDelta::PageDelta(0.0, -1.0), UiModifiers::empty());
        assert!(controller.handle_pointer_event(&mut view, &down_page));
        assert_eq!(view.offset(), Vec2::new(0.0, 200.0));

        let right_page = scroll(ScrollDelta::PageDelta(0.0, -2.0), UiModifiers::SHIFT);
        assert!(controller.handle_pointer_event(&mut view, &right_page));
        assert_eq!(view.offset(), Vec2::new(400.0, 200.0));

        let back = scroll(ScrollDelta::PageDelta(1.0, 0.0), UiModifiers::empty());
        assert!(controller.handle_pointer_event(&mut view, &back));
        assert_eq!(view.offset(), Vec2::new(200.0, 200.0));
    }

    #[test]
    fn control_page_delta_zooms_by_page_units() {
        let mut view = view();
        let mut controller = ScrollController::default();
        let cursor = Point::new(100.0, 100.0);
        let delta = ScrollDelta::PageDelta(0.0, 1.0);
        let event = scroll_at(delta, cursor, UiModifiers::CONTROL);
        assert!(controller.handle_pointer_event(&mut view, &event));
        let expected = 1.001_f64.powf(PAGE_UNITS);
        assert!((view.scale() - expected).abs() < 1e-12);
        let after = view.viewport_to_content_point(cursor);
        assert!((after - Point::new(100.0, 100.0)).hypot() < 1e-9);
    }
}
