//! Axis-wise kernel execution.
//!
//! ## Purpose
//!
//! This module applies a per-slice transform kernel along one axis of a
//! matrix, producing a freshly allocated matrix of the same shape. It models
//! per-slice iteration as an explicit loop over independent one-dimensional
//! views rather than whole-array broadcasting.
//!
//! ## Design notes
//!
//! * **Rows are contiguous**: row slices are read in place and written
//!   directly into the corresponding output chunk.
//! * **Columns are strided**: each column is gathered into a reused scratch
//!   buffer, transformed, and scattered back into the output.
//! * **Kernel seam**: kernels are plain `Fn(&[T], &mut [T])` closures, which
//!   is also the seam extension crates parallelize over (each slice is fully
//!   independent of the others).
//!
//! ## Invariants
//!
//! * Output shape equals input shape; the input matrix is never mutated.
//! * Kernels are invoked exactly once per slice along the selected axis.
//! * The matrix has been validated as non-empty before execution.
//!
//! ## Non-goals
//!
//! * This module does not validate input (handled by `validator`).
//! * This module does not parallelize (handled by extension crates).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::RescaleError;
use crate::primitives::matrix::{Axis, Matrix};

// ============================================================================
// Axis Executor
// ============================================================================

/// Apply `kernel` to every independent slice of `matrix` along `axis`.
pub fn apply_along_axis<T, F>(
    matrix: &Matrix<T>,
    axis: Axis,
    kernel: F,
) -> Result<Matrix<T>, RescaleError>
where
    T: Float,
    F: Fn(&[T], &mut [T]),
{
    let (rows, cols) = matrix.shape();
    debug_assert!(rows > 0 && cols > 0);

    let mut out = vec![T::zero(); rows * cols];

    match axis {
        Axis::Rows => {
            for (r, chunk) in out.chunks_mut(cols).enumerate() {
                kernel(matrix.row(r), chunk);
            }
        }
        Axis::Columns => {
            let mut src = Vec::with_capacity(rows);
            let mut dst = vec![T::zero(); rows];
            for c in 0..cols {
                matrix.gather_column(c, &mut src);
                kernel(&src, &mut dst);
                for (r, &v) in dst.iter().enumerate() {
                    out[r * cols + c] = v;
                }
            }
        }
    }

    Matrix::from_vec(out, rows, cols)
}
