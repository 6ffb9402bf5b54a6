// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Explainability hooks for settle passes.
//!
//! A settle pass does not keep any history of what it did. When that history
//! matters (tests asserting recompute order, inspectors explaining why a
//! scroll bar appeared), pass a [`SettleTrace`] sink to
//! [`ScrollView::apply_with_trace`](crate::ScrollView::apply_with_trace).
//! [`SettleRecorder`] is a ready-made sink that keeps every event.

use alloc::vec::Vec;

use crate::quantity::{Quantity, QuantitySet};

/// A callback sink for settle-pass tracing.
pub trait SettleTrace {
    /// Called once for each root the pass was seeded with, before any
    /// recomputation.
    ///
    /// `changed` indicates whether storing the root's new value changed it.
    fn root(&mut self, quantity: Quantity, changed: bool);

    /// Called when `quantity` is recomputed because one of its inputs changed.
    fn recomputed(&mut self, quantity: Quantity, changed: bool);
}

impl SettleTrace for () {
    fn root(&mut self, _quantity: Quantity, _changed: bool) {}

    fn recomputed(&mut self, _quantity: Quantity, _changed: bool) {}
}

/// One step of a settle pass, as seen by a [`SettleRecorder`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SettleEvent {
    /// A root was stored.
    Root {
        /// The root quantity.
        quantity: Quantity,
        /// Whether its value changed.
        changed: bool,
    },
    /// A derived quantity was recomputed.
    Recomputed {
        /// The recomputed quantity.
        quantity: Quantity,
        /// Whether its value changed.
        changed: bool,
    },
}

impl SettleEvent {
    /// The quantity this event is about.
    #[must_use]
    pub fn quantity(self) -> Quantity {
        match self {
            Self::Root { quantity, .. } | Self::Recomputed { quantity, .. } => quantity,
        }
    }

    /// Whether the quantity's value changed.
    #[must_use]
    pub fn changed(self) -> bool {
        match self {
            Self::Root { changed, .. } | Self::Recomputed { changed, .. } => changed,
        }
    }
}

/// Records every settle event, in order.
#[derive(Clone, Debug, Default)]
pub struct SettleRecorder {
    events: Vec<SettleEvent>,
}

impl SettleRecorder {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears all recorded events.
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Returns the recorded events, in the order they happened.
    #[must_use]
    pub fn events(&self) -> &[SettleEvent] {
        &self.events
    }

    /// Returns the quantities that were recomputed, in recompute order.
    #[must_use]
    pub fn recompute_order(&self) -> Vec<Quantity> {
        self.events
            .iter()
            .filter(|e| matches!(e, SettleEvent::Recomputed { .. }))
            .map(|e| e.quantity())
            .collect()
    }

    /// Returns the set of quantities whose value changed.
    #[must_use]
    pub fn changed(&self) -> QuantitySet {
        self.events
            .iter()
            .filter(|e| e.changed())
            .map(|e| e.quantity().into_set())
            .collect()
    }
}

impl SettleTrace for SettleRecorder {
    fn root(&mut self, quantity: Quantity, changed: bool) {
        self.events.push(SettleEvent::Root { quantity, changed });
    }

    fn recomputed(&mut self, quantity: Quantity, changed: bool) {
        self.events.push(SettleEvent::Recomputed { quantity, changed });
    }
}
