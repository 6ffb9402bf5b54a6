// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Consistency checks over a settled [`ScrollView`].

use core::fmt;

use crate::quantity::{Axis, Quantity};
use crate::scroll_view::{ScrollView, same_f64};
use crate::visibility::Visibility;

/// A derived quantity disagreed with its inputs.
///
/// Returned by [`ScrollView::check_invariants`]. A settled view never produces
/// one; seeing it means a pass was interrupted or state was edited out of band.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InvariantViolation {
    /// A numeric quantity does not equal the value computed from its inputs.
    Value {
        /// The offending quantity.
        quantity: Quantity,
        /// The value computed from its inputs.
        expected: f64,
        /// The stored value.
        actual: f64,
    },
    /// An offset lies outside `[lower, upper]`.
    OffsetOutOfBounds {
        /// The offending offset quantity.
        quantity: Quantity,
        /// The stored offset.
        offset: f64,
        /// Lower bound, `−Viewport`.
        lower: f64,
        /// Upper bound, `ActualContent`.
        upper: f64,
    },
    /// A computed scroll bar visibility does not match its policy.
    Visibility {
        /// The offending quantity.
        quantity: Quantity,
        /// Visibility resolved from the policy.
        expected: Visibility,
        /// The stored visibility.
        actual: Visibility,
    },
}

impl InvariantViolation {
    /// The quantity that failed the check.
    #[must_use]
    pub fn quantity(&self) -> Quantity {
        match *self {
            Self::Value { quantity, .. }
            | Self::OffsetOutOfBounds { quantity, .. }
            | Self::Visibility { quantity, .. } => quantity,
        }
    }
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value {
                quantity,
                expected,
                actual,
            } => write!(f, "{quantity} is {actual}, expected {expected}"),
            Self::OffsetOutOfBounds {
                quantity,
                offset,
                lower,
                upper,
            } => write!(f, "{quantity} is {offset}, outside [{lower}, {upper}]"),
            Self::Visibility {
                quantity,
                expected,
                actual,
            } => write!(f, "{quantity} is {actual:?}, expected {expected:?}"),
        }
    }
}

impl core::error::Error for InvariantViolation {}

impl ScrollView {
    /// Verifies that every derived quantity agrees exactly with its inputs.
    ///
    /// Checks are exact because derived values are computed by the same
    /// expressions during a settle pass. The offset bound check is skipped for
    /// an axis whose bounds are inverted, which only negative sizes can cause.
    ///
    /// ```
    /// use kurbo::Size;
    /// use understory_scroll_view::ScrollView;
    ///
    /// let mut view = ScrollView::new();
    /// view.set_content_size(Size::new(300.0, 300.0));
    /// assert_eq!(view.check_invariants(), Ok(()));
    /// ```
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        for axis in Axis::BOTH {
            let state = self.axis(axis);
            check_value(
                axis.actual_content(),
                state.content() * self.scale(),
                state.actual_content(),
            )?;
            check_value(
                axis.scrollable(),
                state.actual_content() - state.viewport(),
                state.scrollable(),
            )?;
            check_value(axis.translation(), -state.offset(), state.translation())?;

            let (lower, upper) = state.offset_bounds();
            let offset = state.offset();
            if lower <= upper && !(lower..=upper).contains(&offset) {
                return Err(InvariantViolation::OffsetOutOfBounds {
                    quantity: axis.offset(),
                    offset,
                    lower,
                    upper,
                });
            }

            let expected = state.policy().resolve(state.scrollable());
            if expected != state.computed_visibility() {
                return Err(InvariantViolation::Visibility {
                    quantity: axis.computed_visibility(),
                    expected,
                    actual: state.computed_visibility(),
                });
            }
        }
        Ok(())
    }
}

fn check_value(quantity: Quantity, expected: f64, actual: f64) -> Result<(), InvariantViolation> {
    if same_f64(expected, actual) {
        Ok(())
    } else {
        Err(InvariantViolation::Value {
            quantity,
            expected,
            actual,
        })
    }
}
