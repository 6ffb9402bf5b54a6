// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Toolkit-neutral pointer button and modifier key types.

/// A pointer button.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Left mouse button, pen contact, or touch.
    Primary,
    /// Right mouse button.
    Secondary,
    /// Middle mouse button (wheel press).
    Auxiliary,
    /// First extra button, usually "back".
    X1,
    /// Second extra button, usually "forward".
    X2,
}

bitflags::bitflags! {
    /// Modifier keys held during an input event.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        /// Control.
        const CONTROL = 1 << 0;
        /// Shift.
        const SHIFT = 1 << 1;
        /// Alt / Option.
        const ALT = 1 << 2;
        /// Meta / Command / Windows.
        const META = 1 << 3;
    }
}

impl Modifiers {
    /// Returns `true` if every modifier in `required` is held.
    ///
    /// An empty `required` set never matches, so an empty binding cannot
    /// shadow plain wheel scrolling.
    #[must_use]
    pub fn holds(self, required: Self) -> bool {
        !required.is_empty() && self.contains(required)
    }
}

#[cfg(test)]
mod tests {
    use super::Modifiers;

    #[test]
    fn holds_requires_every_modifier() {
        let held = Modifiers::CONTROL | Modifiers::SHIFT;
        assert!(held.holds(Modifiers::CONTROL));
        assert!(held.holds(Modifiers::CONTROL | Modifiers::SHIFT));
        assert!(!held.holds(Modifiers::CONTROL | Modifiers::ALT));
        assert!(!Modifiers::empty().holds(Modifiers::SHIFT));
    }

    #[test]
    fn empty_binding_never_matches() {
        assert!(!Modifiers::all().holds(Modifiers::empty()));
        assert!(!Modifiers::empty().holds(Modifiers::empty()));
    }
}
