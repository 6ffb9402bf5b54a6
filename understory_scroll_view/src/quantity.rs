// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quantity identities, axes, and compact quantity sets.

use core::fmt;

/// One of the two scrolling axes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The X axis (widths, `OffsetX`, `X`, horizontal scroll bar).
    Horizontal,
    /// The Y axis (heights, `OffsetY`, `Y`, vertical scroll bar).
    Vertical,
}

impl Axis {
    /// Both axes, horizontal first.
    pub const BOTH: [Self; 2] = [Self::Horizontal, Self::Vertical];

    /// The unscaled content extent along this axis.
    #[must_use]
    pub const fn content(self) -> Quantity {
        match self {
            Self::Horizontal => Quantity::ContentWidth,
            Self::Vertical => Quantity::ContentHeight,
        }
    }

    /// The viewport extent along this axis.
    #[must_use]
    pub const fn viewport(self) -> Quantity {
        match self {
            Self::Horizontal => Quantity::ViewportWidth,
            Self::Vertical => Quantity::ViewportHeight,
        }
    }

    /// The scaled content extent along this axis.
    #[must_use]
    pub const fn actual_content(self) -> Quantity {
        match self {
            Self::Horizontal => Quantity::ActualContentWidth,
            Self::Vertical => Quantity::ActualContentHeight,
        }
    }

    /// The scrollable extent along this axis.
    #[must_use]
    pub const fn scrollable(self) -> Quantity {
        match self {
            Self::Horizontal => Quantity::ScrollableWidth,
            Self::Vertical => Quantity::ScrollableHeight,
        }
    }

    /// The pan offset along this axis.
    #[must_use]
    pub const fn offset(self) -> Quantity {
        match self {
            Self::Horizontal => Quantity::OffsetX,
            Self::Vertical => Quantity::OffsetY,
        }
    }

    /// The rendering translation along this axis.
    #[must_use]
    pub const fn translation(self) -> Quantity {
        match self {
            Self::Horizontal => Quantity::X,
            Self::Vertical => Quantity::Y,
        }
    }

    /// The scroll bar visibility policy for this axis.
    #[must_use]
    pub const fn policy(self) -> Quantity {
        match self {
            Self::Horizontal => Quantity::HorizontalScrollBarVisibility,
            Self::Vertical => Quantity::VerticalScrollBarVisibility,
        }
    }

    /// The computed scroll bar visibility for this axis.
    #[must_use]
    pub const fn computed_visibility(self) -> Quantity {
        match self {
            Self::Horizontal => Quantity::ComputedHorizontalScrollBarVisibility,
            Self::Vertical => Quantity::ComputedVerticalScrollBarVisibility,
        }
    }
}

/// Identifies one quantity of the scroll view state.
///
/// Roots are set from outside (by the host or by input handlers); every other
/// quantity is derived from its [`inputs`](Self::inputs) during a settle pass.
/// `OffsetX`/`OffsetY` are both: they are set from outside and re-clamped when
/// their bounds move.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Quantity {
    /// Zoom multiplier.
    Scale,
    /// Unscaled content width, as measured.
    ContentWidth,
    /// Unscaled content height, as measured.
    ContentHeight,
    /// Viewport width, as measured.
    ViewportWidth,
    /// Viewport height, as measured.
    ViewportHeight,
    /// Horizontal scroll bar visibility policy.
    HorizontalScrollBarVisibility,
    /// Vertical scroll bar visibility policy.
    VerticalScrollBarVisibility,
    /// `ContentWidth × Scale`.
    ActualContentWidth,
    /// `ContentHeight × Scale`.
    ActualContentHeight,
    /// `ActualContentWidth − ViewportWidth`.
    ScrollableWidth,
    /// `ActualContentHeight − ViewportHeight`.
    ScrollableHeight,
    /// Horizontal pan offset, clamped to `[−ViewportWidth, ActualContentWidth]`.
    OffsetX,
    /// Vertical pan offset, clamped to `[−ViewportHeight, ActualContentHeight]`.
    OffsetY,
    /// `−OffsetX`.
    X,
    /// `−OffsetY`.
    Y,
    /// Horizontal scroll bar visibility resolved from its policy.
    ComputedHorizontalScrollBarVisibility,
    /// Vertical scroll bar visibility resolved from its policy.
    ComputedVerticalScrollBarVisibility,
}

impl Quantity {
    /// Number of quantities.
    pub const COUNT: usize = 17;

    /// All quantities in declaration order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Scale,
        Self::ContentWidth,
        Self::ContentHeight,
        Self::ViewportWidth,
        Self::ViewportHeight,
        Self::HorizontalScrollBarVisibility,
        Self::VerticalScrollBarVisibility,
        Self::ActualContentWidth,
        Self::ActualContentHeight,
        Self::ScrollableWidth,
        Self::ScrollableHeight,
        Self::OffsetX,
        Self::OffsetY,
        Self::X,
        Self::Y,
        Self::ComputedHorizontalScrollBarVisibility,
        Self::ComputedVerticalScrollBarVisibility,
    ];

    /// Returns the bit this quantity occupies in a [`QuantitySet`].
    #[must_use]
    pub const fn bit(self) -> u32 {
        1_u32 << (self as u8)
    }

    /// Converts this quantity into a single-element [`QuantitySet`].
    #[must_use]
    pub const fn into_set(self) -> QuantitySet {
        QuantitySet::from_bits_retain(self.bit())
    }

    /// Returns the quantities this one is computed (or clamped) from.
    ///
    /// Quantities without inputs are pure roots.
    #[must_use]
    pub const fn inputs(self) -> QuantitySet {
        let bits = match self {
            Self::Scale
            | Self::ContentWidth
            | Self::ContentHeight
            | Self::ViewportWidth
            | Self::ViewportHeight
            | Self::HorizontalScrollBarVisibility
            | Self::VerticalScrollBarVisibility => 0,
            Self::ActualContentWidth => Self::Scale.bit() | Self::ContentWidth.bit(),
            Self::ActualContentHeight => Self::Scale.bit() | Self::ContentHeight.bit(),
            Self::ScrollableWidth => Self::ActualContentWidth.bit() | Self::ViewportWidth.bit(),
            Self::ScrollableHeight => Self::ActualContentHeight.bit() | Self::ViewportHeight.bit(),
            Self::OffsetX => Self::ActualContentWidth.bit() | Self::ViewportWidth.bit(),
            Self::OffsetY => Self::ActualContentHeight.bit() | Self::ViewportHeight.bit(),
            Self::X => Self::OffsetX.bit(),
            Self::Y => Self::OffsetY.bit(),
            Self::ComputedHorizontalScrollBarVisibility => {
                Self::ScrollableWidth.bit() | Self::HorizontalScrollBarVisibility.bit()
            }
            Self::ComputedVerticalScrollBarVisibility => {
                Self::ScrollableHeight.bit() | Self::VerticalScrollBarVisibility.bit()
            }
        };
        QuantitySet::from_bits_retain(bits)
    }

    /// Returns the quantities that directly depend on this one.
    #[must_use]
    pub fn dependents(self) -> QuantitySet {
        Self::ALL
            .iter()
            .filter(|q| q.inputs().contains(self.into_set()))
            .fold(QuantitySet::empty(), |acc, q| acc | q.into_set())
    }

    /// Returns `true` if hosts or input handlers may set this quantity.
    #[must_use]
    pub const fn is_root(self) -> bool {
        matches!(
            self,
            Self::Scale
                | Self::ContentWidth
                | Self::ContentHeight
                | Self::ViewportWidth
                | Self::ViewportHeight
                | Self::HorizontalScrollBarVisibility
                | Self::VerticalScrollBarVisibility
                | Self::OffsetX
                | Self::OffsetY
        )
    }

    /// Returns the axis this quantity belongs to, or `None` for `Scale`.
    #[must_use]
    pub const fn axis(self) -> Option<Axis> {
        match self {
            Self::Scale => None,
            Self::ContentWidth
            | Self::ViewportWidth
            | Self::HorizontalScrollBarVisibility
            | Self::ActualContentWidth
            | Self::ScrollableWidth
            | Self::OffsetX
            | Self::X
            | Self::ComputedHorizontalScrollBarVisibility => Some(Axis::Horizontal),
            Self::ContentHeight
            | Self::ViewportHeight
            | Self::VerticalScrollBarVisibility
            | Self::ActualContentHeight
            | Self::ScrollableHeight
            | Self::OffsetY
            | Self::Y
            | Self::ComputedVerticalScrollBarVisibility => Some(Axis::Vertical),
        }
    }

    /// Returns the quantity's name as used in logs and error messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Scale => "Scale",
            Self::ContentWidth => "ContentWidth",
            Self::ContentHeight => "ContentHeight",
            Self::ViewportWidth => "ViewportWidth",
            Self::ViewportHeight => "ViewportHeight",
            Self::HorizontalScrollBarVisibility => "HorizontalScrollBarVisibility",
            Self::VerticalScrollBarVisibility => "VerticalScrollBarVisibility",
            Self::ActualContentWidth => "ActualContentWidth",
            Self::ActualContentHeight => "ActualContentHeight",
            Self::ScrollableWidth => "ScrollableWidth",
            Self::ScrollableHeight => "ScrollableHeight",
            Self::OffsetX => "OffsetX",
            Self::OffsetY => "OffsetY",
            Self::X => "X",
            Self::Y => "Y",
            Self::ComputedHorizontalScrollBarVisibility => "ComputedHorizontalScrollBarVisibility",
            Self::ComputedVerticalScrollBarVisibility => "ComputedVerticalScrollBarVisibility",
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

bitflags::bitflags! {
    /// A compact set of [`Quantity`] values.
    ///
    /// Mutating operations on [`ScrollView`](crate::ScrollView) return the set
    /// of quantities whose value actually changed, which is how hosts observe
    /// changes without a notification substrate.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct QuantitySet: u32 {
        /// [`Quantity::Scale`].
        const SCALE = Quantity::Scale.bit();
        /// [`Quantity::ContentWidth`].
        const CONTENT_WIDTH = Quantity::ContentWidth.bit();
        /// [`Quantity::ContentHeight`].
        const CONTENT_HEIGHT = Quantity::ContentHeight.bit();
        /// [`Quantity::ViewportWidth`].
        const VIEWPORT_WIDTH = Quantity::ViewportWidth.bit();
        /// [`Quantity::ViewportHeight`].
        const VIEWPORT_HEIGHT = Quantity::ViewportHeight.bit();
        /// [`Quantity::HorizontalScrollBarVisibility`].
        const HORIZONTAL_SCROLL_BAR_VISIBILITY = Quantity::HorizontalScrollBarVisibility.bit();
        /// [`Quantity::VerticalScrollBarVisibility`].
        const VERTICAL_SCROLL_BAR_VISIBILITY = Quantity::VerticalScrollBarVisibility.bit();
        /// [`Quantity::ActualContentWidth`].
        const ACTUAL_CONTENT_WIDTH = Quantity::ActualContentWidth.bit();
        /// [`Quantity::ActualContentHeight`].
        const ACTUAL_CONTENT_HEIGHT = Quantity::ActualContentHeight.bit();
        /// [`Quantity::ScrollableWidth`].
        const SCROLLABLE_WIDTH = Quantity::ScrollableWidth.bit();
        /// [`Quantity::ScrollableHeight`].
        const SCROLLABLE_HEIGHT = Quantity::ScrollableHeight.bit();
        /// [`Quantity::OffsetX`].
        const OFFSET_X = Quantity::OffsetX.bit();
        /// [`Quantity::OffsetY`].
        const OFFSET_Y = Quantity::OffsetY.bit();
        /// [`Quantity::X`].
        const X = Quantity::X.bit();
        /// [`Quantity::Y`].
        const Y = Quantity::Y.bit();
        /// [`Quantity::ComputedHorizontalScrollBarVisibility`].
        const COMPUTED_HORIZONTAL_SCROLL_BAR_VISIBILITY =
            Quantity::ComputedHorizontalScrollBarVisibility.bit();
        /// [`Quantity::ComputedVerticalScrollBarVisibility`].
        const COMPUTED_VERTICAL_SCROLL_BAR_VISIBILITY =
            Quantity::ComputedVerticalScrollBarVisibility.bit();
    }
}

impl QuantitySet {
    /// Returns `true` if the set contains `quantity`.
    #[must_use]
    pub const fn has(self, quantity: Quantity) -> bool {
        self.bits() & quantity.bit() != 0
    }

    /// Iterates the quantities of this set in declaration order.
    pub fn quantities(self) -> impl Iterator<Item = Quantity> {
        Quantity::ALL.into_iter().filter(move |q| self.has(*q))
    }
}

impl fmt::Debug for QuantitySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.quantities()).finish()
    }
}

impl From<Quantity> for QuantitySet {
    fn from(quantity: Quantity) -> Self {
        quantity.into_set()
    }
}
