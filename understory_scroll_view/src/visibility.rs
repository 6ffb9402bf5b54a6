// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Scroll bar visibility policy for one axis.
///
/// This is the user-configured input; the resolved value is a [`Visibility`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ScrollBarVisibility {
    /// Visible when there is something to scroll, collapsed otherwise.
    #[default]
    Auto,
    /// Always collapsed.
    Disabled,
    /// Always hidden (takes up space but is not shown).
    Hidden,
    /// Always visible.
    Visible,
}

/// Resolved visibility of a scroll bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Visibility {
    /// Shown.
    Visible,
    /// Not shown, but still occupying layout space.
    Hidden,
    /// Not shown and occupying no layout space.
    #[default]
    Collapsed,
}

impl ScrollBarVisibility {
    /// Resolves this policy against a scrollable extent.
    ///
    /// `Auto` yields [`Visibility::Visible`] only for a strictly positive
    /// extent; a zero, negative, or NaN extent collapses the bar.
    ///
    /// ```
    /// use understory_scroll_view::{ScrollBarVisibility, Visibility};
    ///
    /// assert_eq!(ScrollBarVisibility::Auto.resolve(100.0), Visibility::Visible);
    /// assert_eq!(ScrollBarVisibility::Auto.resolve(0.0), Visibility::Collapsed);
    /// assert_eq!(ScrollBarVisibility::Hidden.resolve(100.0), Visibility::Hidden);
    /// ```
    #[must_use]
    pub fn resolve(self, scrollable: f64) -> Visibility {
        match self {
            Self::Auto if scrollable > 0.0 => Visibility::Visible,
            Self::Auto | Self::Disabled => Visibility::Collapsed,
            Self::Hidden => Visibility::Hidden,
            Self::Visible => Visibility::Visible,
        }
    }
}
