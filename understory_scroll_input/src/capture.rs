// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer capture hook.
//!
//! While a pan drag is active the host should route every pointer move to the
//! scroll view, even once the pointer leaves its bounds. [`ScrollController`]
//! asks for that through a [`PointerCapture`] implementation the host supplies,
//! and guarantees a matching release on every exit path: a release of any
//! button, [`ScrollController::cancel`], or dropping the controller.
//!
//! [`ScrollController`]: crate::ScrollController
//! [`ScrollController::cancel`]: crate::ScrollController::cancel

/// Host hook for acquiring and releasing pointer capture.
pub trait PointerCapture {
    /// Start routing all pointer events to this scroll view.
    fn capture(&mut self);

    /// Stop routing pointer events to this scroll view.
    ///
    /// May be called without a preceding [`capture`](Self::capture) when the
    /// host delivers a release with no matching press; implementations should
    /// treat that as a no-op.
    fn release(&mut self);
}

/// No-op capture, for hosts that deliver pointer events regardless.
impl PointerCapture for () {
    fn capture(&mut self) {}

    fn release(&mut self) {}
}

impl<C: PointerCapture + ?Sized> PointerCapture for &mut C {
    fn capture(&mut self) {
        (**self).capture();
    }

    fn release(&mut self) {
        (**self).release();
    }
}
