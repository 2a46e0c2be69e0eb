//! Argsort utilities for rank computation.
//!
//! ## Purpose
//!
//! This module provides the index-sort used by the rank transform, together
//! with the total-order comparator that defines where non-finite values
//! land.
//!
//! ## Design notes
//!
//! * **Stability**: Uses a stable sort; combined with average-rank tie
//!   resolution, the internal order of tied elements never affects output.
//! * **NaN ordering**: NaN compares greater than every finite value and
//!   equal to other NaNs, so NaNs form one tie group at the top of the
//!   ordering.
//! * **Efficiency**: Sorts indices rather than `(value, index)` pairs; the
//!   value array is read through the indices during comparison.
//!
//! ## Invariants
//!
//! * The returned index vector is a valid permutation of `0..n`.
//! * `compare_nan_greatest` is a total order over all float values.
//!
//! ## Non-goals
//!
//! * This module does not assign ranks (handled by `algorithms::ranks`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::cmp::Ordering;
use num_traits::Float;

// ============================================================================
// Total Order
// ============================================================================

/// Total-order comparison treating NaN as greater than all finite values.
///
/// Two NaNs compare equal, so repeated NaNs behave as an ordinary tie group.
#[inline]
pub fn compare_nan_greatest<T: Float>(a: T, b: T) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

// ============================================================================
// Argsort
// ============================================================================

/// Indices that sort `values` ascending under the NaN-greatest total order.
#[inline]
pub fn argsort<T: Float>(values: &[T]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..values.len()).collect();
    // Stable sort keeps equal values in insertion order for determinism.
    indices.sort_by(|&i, &j| compare_nan_greatest(values[i], values[j]));
    indices
}
