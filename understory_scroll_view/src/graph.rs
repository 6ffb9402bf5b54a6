// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Static dependency graph over [`Quantity`] and its settle order.
//!
//! The edges are declared once, by [`Quantity::inputs`]. The settle order is
//! derived from them at compile time with a layered variant of Kahn's
//! algorithm: each layer holds every quantity whose inputs all appear in
//! earlier layers, in declaration order. A cycle in the declared edges fails
//! constant evaluation, so the graph is acyclic by construction.

use crate::quantity::{Quantity, QuantitySet};

/// The order in which a settle pass visits quantities.
///
/// Every quantity appears after all of its inputs. The resulting layers are:
///
/// 1. roots without inputs (`Scale`, measured sizes, visibility policies);
/// 2. `ActualContentWidth`/`ActualContentHeight`;
/// 3. `ScrollableWidth`/`ScrollableHeight`, then the offset re-clamp;
/// 4. `X`/`Y`, then the computed scroll bar visibilities.
pub const SETTLE_ORDER: [Quantity; Quantity::COUNT] = settle_order();

const fn settle_order() -> [Quantity; Quantity::COUNT] {
    let mut order = [Quantity::Scale; Quantity::COUNT];
    let mut emitted: u32 = 0;
    let mut len = 0;
    while len < Quantity::COUNT {
        // Freeze the emitted set so that each round is one full layer.
        let layer_base = emitted;
        let mut i = 0;
        let mut progressed = false;
        while i < Quantity::COUNT {
            let q = Quantity::ALL[i];
            let inputs = q.inputs().bits();
            if emitted & q.bit() == 0 && inputs & layer_base == inputs {
                order[len] = q;
                len += 1;
                emitted |= q.bit();
                progressed = true;
            }
            i += 1;
        }
        assert!(progressed, "quantity dependency graph has a cycle");
    }
    order
}

/// Returns the position of `quantity` within [`SETTLE_ORDER`].
#[must_use]
pub fn settle_rank(quantity: Quantity) -> usize {
    SETTLE_ORDER
        .iter()
        .position(|q| *q == quantity)
        .unwrap_or(Quantity::COUNT)
}

/// Returns every quantity transitively reachable from `roots`, roots included.
///
/// This is the widest set a settle pass seeded with `roots` can touch; the
/// pass itself stops early along paths whose values did not change.
#[must_use]
pub fn affected(roots: QuantitySet) -> QuantitySet {
    let mut affected = roots;
    for q in SETTLE_ORDER {
        if affected.has(q) {
            affected |= q.dependents();
        }
    }
    affected
}
