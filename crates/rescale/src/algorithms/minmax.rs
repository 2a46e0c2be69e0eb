//! Min-max scaling kernel.
//!
//! ## Purpose
//!
//! This module rescales one slice into a target interval `[lo, hi]`:
//! `lo + (x - min) * (hi - lo) / (max - min)`.
//!
//! ## Design notes
//!
//! * **Zero-range guard**: A constant slice has `max == min`; the guard
//!   writes `lo` for every element instead of dividing by zero.
//! * **Contamination**: A NaN in the slice poisons the extrema (see
//!   `math::extrema`), so the whole slice scales to NaN, consistent with
//!   z-score scaling.
//! * **Precomputed factor**: The combined `(hi - lo) / (max - min)` factor
//!   is computed once per slice.
//!
//! ## Invariants
//!
//! * Output length equals input length; element positions are preserved.
//! * For all-finite non-constant input, the slice minimum maps to `lo` and
//!   the maximum maps to `hi`; all outputs lie in `[lo, hi]`.
//! * Interval bounds are validated upstream (`lo < hi`, both finite).
//!
//! ## Non-goals
//!
//! * This module does not validate input or bounds (handled by `validator`).
//! * This module does not iterate axes (handled by `executor`).

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::extrema::extrema;

// ============================================================================
// Kernel
// ============================================================================

/// Min-max scale one slice into `dst` over the target interval `[lo, hi]`.
///
/// `src` and `dst` must have the same length.
#[inline]
pub fn min_max_scale_slice<T: Float>(src: &[T], lo: T, hi: T, dst: &mut [T]) {
    debug_assert_eq!(src.len(), dst.len());
    if src.is_empty() {
        return;
    }

    let ext = extrema(src);
    let range = ext.max - ext.min;

    // Constant slice: collapse to the lower interval bound.
    if range == T::zero() {
        for d in dst.iter_mut() {
            *d = lo;
        }
        return;
    }

    let scale = (hi - lo) / range;
    for (d, &v) in dst.iter_mut().zip(src.iter()) {
        *d = lo + (v - ext.min) * scale;
    }
}
