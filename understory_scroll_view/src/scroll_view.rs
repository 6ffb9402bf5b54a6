// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::graph::SETTLE_ORDER;
use crate::quantity::{Axis, Quantity, QuantitySet};
use crate::trace::SettleTrace;
use crate::visibility::{ScrollBarVisibility, Visibility};

/// Per-axis slice of the scroll view state.
///
/// All fields are kept consistent by [`ScrollView`]; this type only exposes
/// read access.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollAxis {
    content: f64,
    viewport: f64,
    actual_content: f64,
    scrollable: f64,
    offset: f64,
    translation: f64,
    policy: ScrollBarVisibility,
    computed_visibility: Visibility,
}

impl ScrollAxis {
    const fn new() -> Self {
        Self {
            content: 0.0,
            viewport: 0.0,
            actual_content: 0.0,
            scrollable: 0.0,
            offset: 0.0,
            translation: -0.0,
            policy: ScrollBarVisibility::Auto,
            computed_visibility: Visibility::Collapsed,
        }
    }

    /// Unscaled content extent, as measured.
    #[must_use]
    pub fn content(&self) -> f64 {
        self.content
    }

    /// Viewport extent, as measured.
    #[must_use]
    pub fn viewport(&self) -> f64 {
        self.viewport
    }

    /// Content extent after scaling.
    #[must_use]
    pub fn actual_content(&self) -> f64 {
        self.actual_content
    }

    /// Scaled content extent not visible at once; negative when the content
    /// is smaller than the viewport.
    #[must_use]
    pub fn scrollable(&self) -> f64 {
        self.scrollable
    }

    /// Pan offset.
    #[must_use]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Rendering translation, always the negated offset.
    #[must_use]
    pub fn translation(&self) -> f64 {
        self.translation
    }

    /// Scroll bar visibility policy.
    #[must_use]
    pub fn policy(&self) -> ScrollBarVisibility {
        self.policy
    }

    /// Scroll bar visibility resolved from the policy and the scrollable extent.
    #[must_use]
    pub fn computed_visibility(&self) -> Visibility {
        self.computed_visibility
    }

    /// Returns the `(lower, upper)` clamp range for the offset.
    ///
    /// The range allows panning up to one viewport before the content start
    /// and up to the full scaled content extent past it.
    #[must_use]
    pub fn offset_bounds(&self) -> (f64, f64) {
        (-self.viewport, self.actual_content)
    }

    /// Clamps `value` into [`offset_bounds`](Self::offset_bounds).
    ///
    /// The lower bound is checked first, so inverted bounds (only reachable
    /// with negative sizes) resolve deterministically instead of panicking.
    #[must_use]
    pub fn clamp_offset(&self, value: f64) -> f64 {
        let (lower, upper) = self.offset_bounds();
        if value < lower {
            lower
        } else if value > upper {
            upper
        } else {
            value
        }
    }

    fn store_offset(&mut self, value: f64) -> bool {
        let clamped = self.clamp_offset(value);
        replace_f64(&mut self.offset, clamped)
    }
}

/// A single external change to one root of the scroll view.
///
/// Each change is applied by one atomic settle pass; see [`ScrollView::apply`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RootChange {
    /// Set the zoom multiplier.
    Scale(f64),
    /// The content's natural (unscaled) size was measured.
    ContentSize(Size),
    /// The viewport's size was measured.
    ViewportSize(Size),
    /// Set both offsets.
    Offset(Vec2),
    /// Set the horizontal offset.
    OffsetX(f64),
    /// Set the vertical offset.
    OffsetY(f64),
    /// Set the scroll bar visibility policy of one axis.
    ScrollBarVisibility(Axis, ScrollBarVisibility),
}

/// Scalable, scrollable viewport state.
///
/// `ScrollView` holds the zoom factor, the measured viewport and content
/// sizes, and every quantity derived from them: scaled content size,
/// scrollable extents, clamped offsets, rendering translation and scroll bar
/// visibility. Every mutation runs one settle pass that recomputes the
/// affected quantities in [`SETTLE_ORDER`], so after each call all of the
/// following hold:
///
/// - `ActualContent = Content × Scale` per axis;
/// - `Scrollable = ActualContent − Viewport` per axis;
/// - `Offset ∈ [−Viewport, ActualContent]` per axis;
/// - `Translation = −Offset` per axis;
/// - computed visibility = policy resolved against `Scrollable`.
///
/// Setting a root to its current value is a no-op and returns an empty
/// [`QuantitySet`].
///
/// ```
/// use kurbo::{Size, Vec2};
/// use understory_scroll_view::{QuantitySet, ScrollView, Visibility};
///
/// let mut view = ScrollView::new();
/// view.set_viewport_size(Size::new(200.0, 100.0));
/// view.set_content_size(Size::new(500.0, 50.0));
/// assert_eq!(view.scrollable_size(), Size::new(300.0, -50.0));
/// assert_eq!(view.computed_horizontal_scroll_bar_visibility(), Visibility::Visible);
///
/// // Offsets are clamped to [-viewport, actual content].
/// view.set_offset(Vec2::new(1000.0, -1000.0));
/// assert_eq!(view.offset(), Vec2::new(500.0, -100.0));
///
/// // Zooming out shrinks the range and re-clamps the offset in the same pass.
/// let changed = view.set_scale(0.5);
/// assert!(changed.contains(QuantitySet::OFFSET_X | QuantitySet::X));
/// assert_eq!(view.offset().x, 250.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollView {
    scale: f64,
    horizontal: ScrollAxis,
    vertical: ScrollAxis,
}

impl Default for ScrollView {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollView {
    /// Creates a scroll view with scale `1.0`, zero sizes and offsets, and
    /// `Auto` scroll bar policies.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            scale: 1.0,
            horizontal: ScrollAxis::new(),
            vertical: ScrollAxis::new(),
        }
    }

    // =========================================================================
    // Outbound values
    // =========================================================================

    /// Returns the zoom multiplier.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Returns the state of one axis.
    #[must_use]
    pub fn axis(&self, axis: Axis) -> &ScrollAxis {
        match axis {
            Axis::Horizontal => &self.horizontal,
            Axis::Vertical => &self.vertical,
        }
    }

    /// Returns the current `(lower, upper)` clamp range of one offset.
    #[must_use]
    pub fn offset_bounds(&self, axis: Axis) -> (f64, f64) {
        self.axis(axis).offset_bounds()
    }

    /// Returns the unscaled content size.
    #[must_use]
    pub fn content_size(&self) -> Size {
        Size::new(self.horizontal.content, self.vertical.content)
    }

    /// Returns the viewport size.
    #[must_use]
    pub fn viewport_size(&self) -> Size {
        Size::new(self.horizontal.viewport, self.vertical.viewport)
    }

    /// Returns the scaled content size.
    #[must_use]
    pub fn actual_content_size(&self) -> Size {
        Size::new(self.horizontal.actual_content, self.vertical.actual_content)
    }

    /// Returns the scrollable extents; components may be negative.
    #[must_use]
    pub fn scrollable_size(&self) -> Size {
        Size::new(self.horizontal.scrollable, self.vertical.scrollable)
    }

    /// Returns `(OffsetX, OffsetY)`.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        Vec2::new(self.horizontal.offset, self.vertical.offset)
    }

    /// Returns `(X, Y)`, the translation to apply when rendering content.
    #[must_use]
    pub fn translation(&self) -> Vec2 {
        Vec2::new(self.horizontal.translation, self.vertical.translation)
    }

    /// Returns the computed visibility of the horizontal scroll bar.
    #[must_use]
    pub fn computed_horizontal_scroll_bar_visibility(&self) -> Visibility {
        self.horizontal.computed_visibility
    }

    /// Returns the computed visibility of the vertical scroll bar.
    #[must_use]
    pub fn computed_vertical_scroll_bar_visibility(&self) -> Visibility {
        self.vertical.computed_visibility
    }

    /// Returns the content-to-viewport transform: scale, then translate.
    #[must_use]
    pub fn transform(&self) -> Affine {
        Affine::translate(self.translation()) * Affine::scale(self.scale)
    }

    /// Converts a viewport-space point into unscaled content space.
    ///
    /// The result is not finite while the scale is zero.
    #[must_use]
    pub fn viewport_to_content_point(&self, pt: Point) -> Point {
        ((pt.to_vec2() + self.offset()) / self.scale).to_point()
    }

    /// Converts an unscaled content-space point into viewport space.
    #[must_use]
    pub fn content_to_viewport_point(&self, pt: Point) -> Point {
        (pt.to_vec2() * self.scale - self.offset()).to_point()
    }

    /// Returns the unscaled content-space rectangle visible through the viewport.
    #[must_use]
    pub fn visible_content_rect(&self) -> Rect {
        let viewport = self.viewport_size();
        Rect::from_points(
            self.viewport_to_content_point(Point::ZERO),
            self.viewport_to_content_point(Point::new(viewport.width, viewport.height)),
        )
    }

    /// Returns a copy of every quantity.
    #[must_use]
    pub fn snapshot(&self) -> ScrollViewSnapshot {
        ScrollViewSnapshot {
            scale: self.scale,
            horizontal: self.horizontal,
            vertical: self.vertical,
        }
    }

    // =========================================================================
    // Root setters
    // =========================================================================

    /// Applies one root change and settles every dependent quantity.
    ///
    /// Returns the set of quantities whose value changed, roots included.
    pub fn apply(&mut self, change: RootChange) -> QuantitySet {
        self.apply_with_trace(change, &mut ())
    }

    /// Like [`apply`](Self::apply), reporting each step to `trace`.
    pub fn apply_with_trace<T: SettleTrace + ?Sized>(
        &mut self,
        change: RootChange,
        trace: &mut T,
    ) -> QuantitySet {
        let (seeded, changed_roots) = self.store_roots(change, trace);
        let changed = changed_roots | self.settle(seeded, changed_roots, trace);
        log::trace!("settled {seeded:?}: changed {changed:?}");
        changed
    }

    /// Sets the zoom multiplier.
    pub fn set_scale(&mut self, scale: f64) -> QuantitySet {
        self.apply(RootChange::Scale(scale))
    }

    /// Reports a new unscaled content size.
    pub fn set_content_size(&mut self, size: Size) -> QuantitySet {
        self.apply(RootChange::ContentSize(size))
    }

    /// Reports a new viewport size.
    pub fn set_viewport_size(&mut self, size: Size) -> QuantitySet {
        self.apply(RootChange::ViewportSize(size))
    }

    /// Sets both offsets, clamping each into its bounds.
    pub fn set_offset(&mut self, offset: Vec2) -> QuantitySet {
        self.apply(RootChange::Offset(offset))
    }

    /// Sets the horizontal offset, clamped into its bounds.
    pub fn set_offset_x(&mut self, offset: f64) -> QuantitySet {
        self.apply(RootChange::OffsetX(offset))
    }

    /// Sets the vertical offset, clamped into its bounds.
    pub fn set_offset_y(&mut self, offset: f64) -> QuantitySet {
        self.apply(RootChange::OffsetY(offset))
    }

    /// Sets the scroll bar visibility policy of one axis.
    pub fn set_scroll_bar_visibility(
        &mut self,
        axis: Axis,
        policy: ScrollBarVisibility,
    ) -> QuantitySet {
        self.apply(RootChange::ScrollBarVisibility(axis, policy))
    }

    // =========================================================================
    // Compound operations
    // =========================================================================

    /// Pans by `delta` in scaled content units.
    pub fn pan_by(&mut self, delta: Vec2) -> QuantitySet {
        if delta == Vec2::ZERO {
            return QuantitySet::empty();
        }
        self.set_offset(self.offset() + delta)
    }

    /// Sets the scale while keeping the content point under `anchor` fixed.
    ///
    /// `anchor` is in viewport coordinates. The content point under it is
    /// taken before the scale changes; afterwards the offset is set to
    /// `content_point × scale − anchor`, subject to the usual clamping.
    ///
    /// Requests for a non-finite or non-positive scale, and requests made while
    /// the current scale is zero, are ignored.
    pub fn set_scale_about_viewport_point(&mut self, anchor: Point, scale: f64) -> QuantitySet {
        if !(scale.is_finite() && scale > 0.0) {
            log::debug!("ignoring zoom to invalid scale {scale}");
            return QuantitySet::empty();
        }
        let content_pt = self.viewport_to_content_point(anchor);
        if !(content_pt.x.is_finite() && content_pt.y.is_finite()) {
            log::debug!(
                "ignoring zoom: anchor {anchor:?} has no content point at scale {}",
                self.scale
            );
            return QuantitySet::empty();
        }
        let mut changed = self.set_scale(scale);
        changed |= self.set_offset(content_pt.to_vec2() * scale - anchor.to_vec2());
        changed
    }

    /// Multiplies the scale by `factor` about `anchor`; see
    /// [`set_scale_about_viewport_point`](Self::set_scale_about_viewport_point).
    pub fn zoom_about_viewport_point(&mut self, anchor: Point, factor: f64) -> QuantitySet {
        self.set_scale_about_viewport_point(anchor, self.scale * factor)
    }

    // =========================================================================
    // Settle pass
    // =========================================================================

    fn axis_mut(&mut self, axis: Axis) -> &mut ScrollAxis {
        match axis {
            Axis::Horizontal => &mut self.horizontal,
            Axis::Vertical => &mut self.vertical,
        }
    }

    /// Stores the roots named by `change`, returning `(seeded, changed)`.
    ///
    /// Offsets are clamped against the bounds as they are before the pass.
    fn store_roots<T: SettleTrace + ?Sized>(
        &mut self,
        change: RootChange,
        trace: &mut T,
    ) -> (QuantitySet, QuantitySet) {
        let mut seeded = QuantitySet::empty();
        let mut changed = QuantitySet::empty();
        let mut record = |quantity: Quantity, did_change: bool| {
            trace.root(quantity, did_change);
            seeded |= quantity.into_set();
            if did_change {
                changed |= quantity.into_set();
            }
        };
        match change {
            RootChange::Scale(scale) => {
                record(Quantity::Scale, replace_f64(&mut self.scale, scale));
            }
            RootChange::ContentSize(size) => {
                record(
                    Quantity::ContentWidth,
                    replace_f64(&mut self.horizontal.content, size.width),
                );
                record(
                    Quantity::ContentHeight,
                    replace_f64(&mut self.vertical.content, size.height),
                );
            }
            RootChange::ViewportSize(size) => {
                record(
                    Quantity::ViewportWidth,
                    replace_f64(&mut self.horizontal.viewport, size.width),
                );
                record(
                    Quantity::ViewportHeight,
                    replace_f64(&mut self.vertical.viewport, size.height),
                );
            }
            RootChange::Offset(offset) => {
                record(Quantity::OffsetX, self.horizontal.store_offset(offset.x));
                record(Quantity::OffsetY, self.vertical.store_offset(offset.y));
            }
            RootChange::OffsetX(offset) => {
                record(Quantity::OffsetX, self.horizontal.store_offset(offset));
            }
            RootChange::OffsetY(offset) => {
                record(Quantity::OffsetY, self.vertical.store_offset(offset));
            }
            RootChange::ScrollBarVisibility(axis, policy) => {
                let state = self.axis_mut(axis);
                record(axis.policy(), replace(&mut state.policy, policy));
            }
        }
        (seeded, changed)
    }

    /// Recomputes dependents of `changed_roots` in settle order.
    ///
    /// Each quantity is visited at most once per pass and seeded roots are
    /// never revisited, so a pass cannot re-enter the mutation that started it.
    fn settle<T: SettleTrace + ?Sized>(
        &mut self,
        seeded: QuantitySet,
        changed_roots: QuantitySet,
        trace: &mut T,
    ) -> QuantitySet {
        let mut visited = seeded;
        let mut pending = changed_roots
            .quantities()
            .fold(QuantitySet::empty(), |acc, q| acc | q.dependents())
            .difference(visited);
        let mut changed = QuantitySet::empty();

        for quantity in SETTLE_ORDER {
            if pending.is_empty() {
                break;
            }
            if !pending.has(quantity) {
                continue;
            }
            pending.remove(quantity.into_set());
            visited |= quantity.into_set();

            let did_change = self.recompute(quantity);
            trace.recomputed(quantity, did_change);
            log::trace!("recomputed {quantity} (changed: {did_change})");
            if did_change {
                changed |= quantity.into_set();
                let dependents = quantity.dependents();
                debug_assert!(
                    !dependents.intersects(visited),
                    "{quantity} feeds a quantity that already settled"
                );
                pending |= dependents.difference(visited);
            }
        }
        changed
    }

    fn recompute(&mut self, quantity: Quantity) -> bool {
        let scale = self.scale;
        let Some(axis) = quantity.axis() else {
            return false;
        };
        let state = self.axis_mut(axis);
        match quantity {
            Quantity::ActualContentWidth | Quantity::ActualContentHeight => {
                replace_f64(&mut state.actual_content, state.content * scale)
            }
            Quantity::ScrollableWidth | Quantity::ScrollableHeight => {
                replace_f64(&mut state.scrollable, state.actual_content - state.viewport)
            }
            Quantity::OffsetX | Quantity::OffsetY => {
                let current = state.offset;
                state.store_offset(current)
            }
            Quantity::X | Quantity::Y => replace_f64(&mut state.translation, -state.offset),
            Quantity::ComputedHorizontalScrollBarVisibility
            | Quantity::ComputedVerticalScrollBarVisibility => {
                let visibility = state.policy.resolve(state.scrollable);
                replace(&mut state.computed_visibility, visibility)
            }
            // Pure roots have no inputs and are never pending.
            _ => false,
        }
    }
}

/// A copy of every quantity of a [`ScrollView`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollViewSnapshot {
    /// Zoom multiplier.
    pub scale: f64,
    /// Horizontal axis state.
    pub horizontal: ScrollAxis,
    /// Vertical axis state.
    pub vertical: ScrollAxis,
}

/// Returns `true` if `a` and `b` hold the same value, treating NaN as equal to itself.
pub(crate) fn same_f64(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

fn replace_f64(slot: &mut f64, value: f64) -> bool {
    if same_f64(*slot, value) {
        return false;
    }
    *slot = value;
    true
}

fn replace<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}
