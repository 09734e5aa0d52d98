//! Item Sequencer - circular neighbor math and the working list.
//!
//! Leaf module: owns the wraparound index arithmetic on the item ring and
//! the minimum-size transform that keeps that arithmetic well-defined.
//!
//! - `derive_neighbors` computes the four neighbor slots around the showing index
//! - `working_list` doubles short item lists so neighbor roles land on distinct slots
//! - `clamp_index` pins a stale index back into range after a list swap

// =============================================================================
// Constants
// =============================================================================

/// Item counts at or below this are doubled by [`working_list`].
///
/// With five or fewer items the prev/doublePrev/next/doubleNext roles would
/// collide on the same physical slots; doubling the ring keeps them apart.
pub const DUPLICATE_MAX: usize = 5;

// =============================================================================
// Neighbor derivation
// =============================================================================

/// The four slots surrounding the showing index on the circular ring.
///
/// Derived on demand from the current index and slot count; never stored
/// across index or count changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NeighborSet {
    /// One slot behind, wrapping to the end.
    pub prev: usize,
    /// Two slots behind, wrapping.
    pub double_prev: usize,
    /// One slot ahead, wrapping to the start.
    pub next: usize,
    /// Two slots ahead, wrapping.
    pub double_next: usize,
}

/// Compute the neighbor slots for `current` on a ring of `count` slots.
///
/// All four results are valid indices for any `count >= 2`, and prev/next
/// never equal `current`. Counts below 2 are prevented upstream by
/// [`working_list`]; callers must not pass them here.
pub fn derive_neighbors(current: usize, count: usize) -> NeighborSet {
    debug_assert!(count >= 2, "neighbor math needs at least 2 slots");
    debug_assert!(current < count, "showing index out of range");

    let prev = if current == 0 { count - 1 } else { current - 1 };
    let next = if current == count - 1 { 0 } else { current + 1 };

    let double_prev = if current == 0 {
        count - 2
    } else if current == 1 {
        count - 1
    } else {
        current - 2
    };

    let double_next = if current == count - 1 {
        1
    } else if current == count - 2 {
        0
    } else {
        current + 2
    };

    NeighborSet {
        prev,
        double_prev,
        next,
        double_next,
    }
}

// =============================================================================
// Working list
// =============================================================================

/// Build the working list the engine actually indexes.
///
/// A caller list of [`DUPLICATE_MAX`] or fewer items is concatenated with
/// itself; longer lists pass through unchanged. Always applied to the
/// caller's original list, so the output only changes when the caller's
/// items do.
pub fn working_list<T: Clone>(items: &[T]) -> Vec<T> {
    if items.len() <= DUPLICATE_MAX {
        let mut doubled = Vec::with_capacity(items.len() * 2);
        doubled.extend_from_slice(items);
        doubled.extend_from_slice(items);
        doubled
    } else {
        items.to_vec()
    }
}

/// Pin an index into `[0, count - 1]` after the working list changed.
///
/// Past-the-end indices pin to the last slot; an empty list pins to 0.
pub fn clamp_index(current: usize, count: usize) -> usize {
    if count == 0 {
        0
    } else if current >= count {
        count - 1
    } else {
        current
    }
}

// =============================================================================
// Tests
// =============================================================================
