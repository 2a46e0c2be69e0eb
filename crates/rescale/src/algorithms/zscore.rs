//! Standard (z-score) scaling kernel.
//!
//! ## Purpose
//!
//! This module rescales one slice to zero mean and unit variance:
//! `(x - mean) / std`, with the standard deviation taken over the population
//! (ddof = 0).
//!
//! ## Design notes
//!
//! * **Zero-variance guard**: A constant slice has `std == 0`; dividing
//!   would produce infinities, so the guard writes zeros instead. The guard
//!   is an explicit branch, not a float-division side effect.
//! * **Contamination**: Statistics are naive reductions, so a non-finite
//!   value poisons the slice's mean/std and the whole slice scales to NaN.
//!
//! ## Invariants
//!
//! * Output length equals input length; element positions are preserved.
//! * For all-finite non-constant input, output has mean ~0 and std ~1.
//!
//! ## Non-goals
//!
//! * This module does not validate input (handled by `validator`).
//! * This module does not iterate axes (handled by `executor`).

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::moments::{mean, population_std};

// ============================================================================
// Kernel
// ============================================================================

/// Z-score one slice into `dst`.
///
/// `src` and `dst` must have the same length.
#[inline]
pub fn standard_scale_slice<T: Float>(src: &[T], dst: &mut [T]) {
    debug_assert_eq!(src.len(), dst.len());
    if src.is_empty() {
        return;
    }

    let mu = mean(src);
    let sigma = population_std(src, mu);

    // Constant slice: map every element to zero rather than dividing by zero.
    if sigma == T::zero() {
        for d in dst.iter_mut() {
            *d = T::zero();
        }
        return;
    }

    for (d, &v) in dst.iter_mut().zip(src.iter()) {
        *d = (v - mu) / sigma;
    }
}
