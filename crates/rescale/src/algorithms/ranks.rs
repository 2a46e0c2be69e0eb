//! Average-rank transform kernel.
//!
//! ## Purpose
//!
//! This module replaces each element of one slice with its 1-based rank
//! among all elements, resolving ties by the average-rank method: elements
//! with equal value receive the mean of the ranks they would occupy if
//! ordered arbitrarily among themselves.
//!
//! ## Design notes
//!
//! * **Argsort-then-walk**: Indices are sorted ascending, sequential ranks
//!   `1..n` are assigned over the sorted order, and each maximal run of
//!   equal values is rewritten with the arithmetic mean of its rank range.
//! * **Stability**: Average-rank resolution makes the output independent of
//!   the internal order of tied elements.
//! * **NaN policy**: NaN sorts greater than every finite value (see
//!   `primitives::sorting`), so NaNs form one tie group at the top and
//!   receive averaged ranks among themselves. This keeps output
//!   deterministic and reproducible for contaminated data.
//!
//! ## Invariants
//!
//! * Output ranks always sum to `n * (n + 1) / 2`, regardless of ties.
//! * Output length equals input length; element positions are preserved.
//!
//! ## Non-goals
//!
//! * This module does not validate input (handled by `validator`).
//! * This module does not iterate axes (handled by `executor`).

// External dependencies
use core::cmp::Ordering;
use num_traits::Float;

// Internal dependencies
use crate::primitives::sorting::{argsort, compare_nan_greatest};

// ============================================================================
// Kernel
// ============================================================================

/// Rank one slice into `dst` using 1-based average ranks.
///
/// `src` and `dst` must have the same length.
#[inline]
pub fn rank_slice<T: Float>(src: &[T], dst: &mut [T]) {
    debug_assert_eq!(src.len(), dst.len());
    let n = src.len();
    if n == 0 {
        return;
    }

    let order = argsort(src);

    let mut start = 0;
    while start < n {
        // Extend over the maximal run of values equal to src[order[start]].
        let mut end = start + 1;
        while end < n
            && compare_nan_greatest(src[order[end]], src[order[start]]) == Ordering::Equal
        {
            end += 1;
        }

        // The run occupies ranks start+1 ..= end; its mean is (start + end + 1) / 2.
        let two = T::one() + T::one();
        let avg = T::from(start + end + 1).unwrap_or(T::one()) / two;

        for &idx in &order[start..end] {
            dst[idx] = avg;
        }
        start = end;
    }
}
