//! # Fast Rescale — parallel array transforms for statistical preprocessing
//!
//! A parallel, `ndarray`-friendly frontend for the [`rescale`] transforms:
//! standard (z-score) scaling, min-max scaling, and average-rank
//! transformation.
//!
//! The numeric contracts are identical to the core crate — same zero-variance
//! and zero-range guards, same non-finite contamination policy, same
//! NaN-greatest rank ordering — and parallel execution produces exactly the
//! same output as the sequential core. What this crate adds:
//!
//! - **Parallelism**: 2-D transforms distribute independent slices (columns
//!   or rows) across CPU cores via `rayon`. On by default, switchable with
//!   `.parallel(false)`.
//! - **Interop**: 1-D inputs may be slices, `Vec`s, or `ndarray` 1-D arrays;
//!   2-D inputs may be [`Matrix`](prelude::Matrix) or `ndarray` 2-D arrays.
//!
//! ## Quick Start
//!
//! ```rust
//! use fastRescale::prelude::*;
//! use ndarray::Array2;
//!
//! // 3 observations x 2 variables.
//! let data = Array2::from_shape_vec((3, 2), vec![1.0, 10.0, 2.0, 20.0, 3.0, 30.0])?;
//!
//! // Scale each column into [0, 1] in parallel.
//! let scaled = MinMaxScale::new().build()?.transform_array(&data)?;
//! assert_eq!(scaled.row(0).to_vec(), vec![0.0, 0.0]);
//! assert_eq!(scaled.row(2).to_vec(), vec![1.0, 1.0]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ### One-dimensional input
//!
//! ```rust
//! use fastRescale::prelude::*;
//! use ndarray::Array1;
//!
//! let x = Array1::from_vec(vec![10.0, 20.0, 20.0, 30.0]);
//! let ranks = RankData::new().build()?.transform(&x)?;
//! assert_eq!(ranks, vec![1.0, 2.5, 2.5, 4.0]);
//! # Result::<(), RescaleError>::Ok(())
//! ```

#![allow(non_snake_case)]

// Input abstractions for slices, vectors, and ndarray types.
mod input;

// Parallel axis-wise execution.
mod engine;

// High-level fluent API mirroring the core crate.
mod api;

// Standard fastRescale prelude.
pub mod prelude {
    pub use crate::api::{
        MinMaxScaleBuilder as MinMaxScale, RankDataBuilder as RankData,
        StandardScaleBuilder as StandardScale,
    };
    pub use crate::input::{RescaleInput, RescaleInput2D};
    pub use rescale::prelude::{
        min_max_scale, min_max_scale_between, rank_data, standard_scale, Axis, Columns, Matrix,
        RescaleError, Rows,
    };
}
