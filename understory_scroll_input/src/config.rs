// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use crate::input::{Modifiers, PointerButton};

/// Tuning for [`ScrollController`](crate::ScrollController).
///
/// The defaults pan with the middle button, zoom with Ctrl+wheel, scroll
/// horizontally with Shift+wheel, and scroll vertically otherwise.
///
/// ```
/// use understory_scroll_input::{Modifiers, PointerButton, ScrollInputConfig};
///
/// let config = ScrollInputConfig::default()
///     .with_pan_button(PointerButton::Primary)
///     .with_zoom_modifiers(Modifiers::META)
///     .with_scroll_factor(0.5);
/// assert_eq!(config.validate(), Ok(()));
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScrollInputConfig {
    /// Button that starts a pan drag.
    pub pan_button: PointerButton,
    /// Modifiers that turn the wheel into zoom-to-cursor.
    pub zoom_modifiers: Modifiers,
    /// Modifiers that send the wheel to the horizontal axis.
    pub horizontal_modifiers: Modifiers,
    /// Scale multiplier per wheel unit; a wheel delta `d` zooms by
    /// `zoom_factor^d`.
    pub zoom_factor: f64,
    /// Offset change per wheel unit.
    pub scroll_factor: f64,
}

impl ScrollInputConfig {
    /// Per-unit zoom multiplier used by [`Default`].
    pub const DEFAULT_ZOOM_FACTOR: f64 = 1.001;
    /// Per-unit scroll factor used by [`Default`].
    pub const DEFAULT_SCROLL_FACTOR: f64 = 0.2;

    /// Sets the pan button.
    #[must_use]
    pub fn with_pan_button(mut self, button: PointerButton) -> Self {
        self.pan_button = button;
        self
    }

    /// Sets the zoom modifiers.
    #[must_use]
    pub fn with_zoom_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.zoom_modifiers = modifiers;
        self
    }

    /// Sets the horizontal scroll modifiers.
    #[must_use]
    pub fn with_horizontal_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.horizontal_modifiers = modifiers;
        self
    }

    /// Sets the per-unit zoom multiplier.
    #[must_use]
    pub fn with_zoom_factor(mut self, factor: f64) -> Self {
        self.zoom_factor = factor;
        self
    }

    /// Sets the per-unit scroll factor.
    #[must_use]
    pub fn with_scroll_factor(mut self, factor: f64) -> Self {
        self.scroll_factor = factor;
        self
    }

    /// Checks that the configuration is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.zoom_factor.is_finite() && self.zoom_factor > 0.0) {
            return Err(ConfigError::ZoomFactor(self.zoom_factor));
        }
        if !self.scroll_factor.is_finite() {
            return Err(ConfigError::ScrollFactor(self.scroll_factor));
        }
        if self.zoom_modifiers == self.horizontal_modifiers {
            return Err(ConfigError::AmbiguousModifiers(self.zoom_modifiers));
        }
        Ok(())
    }
}

impl Default for ScrollInputConfig {
    fn default() -> Self {
        Self {
            pan_button: PointerButton::Auxiliary,
            zoom_modifiers: Modifiers::CONTROL,
            horizontal_modifiers: Modifiers::SHIFT,
            zoom_factor: Self::DEFAULT_ZOOM_FACTOR,
            scroll_factor: Self::DEFAULT_SCROLL_FACTOR,
        }
    }
}

/// Error returned by [`ScrollInputConfig::validate`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// The zoom factor is not a finite positive number.
    ZoomFactor(f64),
    /// The scroll factor is not finite.
    ScrollFactor(f64),
    /// Zoom and horizontal scrolling are bound to the same modifiers.
    AmbiguousModifiers(Modifiers),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZoomFactor(v) => write!(f, "zoom factor must be finite and positive, got {v}"),
            Self::ScrollFactor(v) => write!(f, "scroll factor must be finite, got {v}"),
            Self::AmbiguousModifiers(m) => {
                write!(f, "zoom and horizontal scroll share modifiers {m:?}")
            }
        }
    }
}

impl core::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn defaults() {
        let config = ScrollInputConfig::default();
        assert_eq!(config.pan_button, PointerButton::Auxiliary);
        assert_eq!(config.zoom_modifiers, Modifiers::CONTROL);
        assert_eq!(config.horizontal_modifiers, Modifiers::SHIFT);
        assert_eq!(config.zoom_factor, 1.001);
        assert_eq!(config.scroll_factor, 0.2);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn rejects_bad_zoom_factor() {
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let config = ScrollInputConfig::default().with_zoom_factor(bad);
            assert!(
                matches!(config.validate(), Err(ConfigError::ZoomFactor(_))),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_non_finite_scroll_factor() {
        let config = ScrollInputConfig::default().with_scroll_factor(f64::NAN);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ScrollFactor(_))
        ));
        // Negative factors invert the scroll direction and are allowed.
        let config = ScrollInputConfig::default().with_scroll_factor(-0.2);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn rejects_shared_modifiers() {
        let config = ScrollInputConfig::default().with_horizontal_modifiers(Modifiers::CONTROL);
        let err = config.validate().unwrap_err();
        assert_eq!(err, ConfigError::AmbiguousModifiers(Modifiers::CONTROL));
        assert!(err.to_string().contains("share modifiers"));
    }
}
