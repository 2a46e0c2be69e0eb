//! Slice minimum and maximum.
//!
//! ## Purpose
//!
//! This module provides the per-slice extrema used by min-max scaling.
//!
//! ## Design notes
//!
//! * **Explicit contamination**: IEEE comparisons silently skip NaN, which
//!   would let a NaN slide through the extrema unnoticed. To keep min-max
//!   scaling consistent with the naive-reduction policy of `moments`, a NaN
//!   anywhere in the slice poisons both extrema explicitly.
//! * **Single pass**: Minimum and maximum are tracked in one scan.
//!
//! ## Invariants
//!
//! * For non-empty all-finite input, `min <= max`.
//! * If the slice contains a NaN, both extrema are NaN.
//!
//! ## Non-goals
//!
//! * This module does not guard against empty slices (handled by `validator`).

// External dependencies
use num_traits::Float;

// ============================================================================
// Extrema
// ============================================================================

/// Minimum and maximum of one slice.
#[derive(Debug, Clone, Copy)]
pub struct SliceExtrema<T> {
    /// Smallest value in the slice.
    pub min: T,

    /// Largest value in the slice.
    pub max: T,
}

/// Compute the extrema of a slice in a single pass.
#[inline]
pub fn extrema<T: Float>(values: &[T]) -> SliceExtrema<T> {
    let mut min = T::infinity();
    let mut max = T::neg_infinity();

    for &v in values {
        if v.is_nan() {
            return SliceExtrema {
                min: T::nan(),
                max: T::nan(),
            };
        }
        if v < min {
            min = v;
        }
        if v > max {
            max = v;
        }
    }

    SliceExtrema { min, max }
}
