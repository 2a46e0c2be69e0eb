//! Mean and population standard deviation.
//!
//! ## Purpose
//!
//! This module provides the first and second moments used by z-score
//! scaling.
//!
//! ## Design notes
//!
//! * **Naive reductions**: Sums run over every element, so a NaN or infinity
//!   anywhere in the slice contaminates the result. This is the documented
//!   non-finite policy; callers pre-clean data when that is not acceptable.
//! * **Population variance**: Divides by `n` (ddof = 0), not `n - 1`.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * For all-finite input, `population_std` is non-negative.
//!
//! ## Non-goals
//!
//! * This module does not guard against empty slices (handled by `validator`).

// External dependencies
use num_traits::Float;

// ============================================================================
// Moments
// ============================================================================

/// Arithmetic mean of a slice.
#[inline]
pub fn mean<T: Float>(values: &[T]) -> T {
    if values.is_empty() {
        return T::zero();
    }
    let n = T::from(values.len()).unwrap_or(T::one());
    let mut sum = T::zero();
    for &v in values {
        sum = sum + v;
    }
    sum / n
}

/// Population standard deviation of a slice around a precomputed mean.
#[inline]
pub fn population_std<T: Float>(values: &[T], mean: T) -> T {
    if values.is_empty() {
        return T::zero();
    }
    let n = T::from(values.len()).unwrap_or(T::one());
    let mut sum_sq = T::zero();
    for &v in values {
        let d = v - mean;
        sum_sq = sum_sq + d * d;
    }
    (sum_sq / n).sqrt()
}
