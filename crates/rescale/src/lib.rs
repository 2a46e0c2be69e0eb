//! # Rescale — elementary array transforms for statistical preprocessing
//!
//! Fast, strongly typed implementations of the three elementary numeric-array
//! transforms used as building blocks in statistical and machine-learning
//! preprocessing pipelines:
//!
//! - **Standard (z-score) scaling** — rescale each slice to zero mean and
//!   unit variance.
//! - **Min-max scaling** — rescale each slice into a configurable target
//!   interval (default `[0, 1]`).
//! - **Rank transformation** — replace values with their 1-based statistical
//!   ranks, resolving ties by the average-rank method.
//!
//! All transforms are pure and stateless: each call is fully determined by
//! its input and parameters, outputs are freshly allocated, and inputs are
//! never mutated. Two-dimensional data is handled through the row-major
//! [`Matrix`](prelude::Matrix) container with an explicit
//! [`Axis`](prelude::Axis) selector (columns by default).
//!
//! ## Quick Start
//!
//! ### One-dimensional data
//!
//! ```rust
//! use rescale::prelude::*;
//!
//! let x = vec![1.0, 2.0, 3.0, 4.0, 5.0];
//!
//! // Z-score scaling: mean 0, population standard deviation 1.
//! let z = StandardScale::new().build()?.transform(&x)?;
//!
//! // Min-max scaling into a custom interval.
//! let scaled = MinMaxScale::new().interval(0.0, 10.0).build()?.transform(&x)?;
//! assert_eq!(scaled, vec![0.0, 2.5, 5.0, 7.5, 10.0]);
//!
//! // Average ranks: tied values share the mean of their rank range.
//! let ranks = RankData::new().build()?.transform(&[10.0, 20.0, 20.0, 30.0])?;
//! assert_eq!(ranks, vec![1.0, 2.5, 2.5, 4.0]);
//! # Result::<(), RescaleError>::Ok(())
//! ```
//!
//! ### Two-dimensional data
//!
//! ```rust
//! use rescale::prelude::*;
//!
//! // 3 observations (rows) x 2 variables (columns), row-major.
//! let m = Matrix::from_vec(vec![1.0, 10.0, 2.0, 20.0, 3.0, 30.0], 3, 2)?;
//!
//! // Each column is scaled independently.
//! let scaled = MinMaxScale::new().axis(Columns).build()?.transform_matrix(&m)?;
//! assert_eq!(scaled.row(0), &[0.0, 0.0]);
//! assert_eq!(scaled.row(2), &[1.0, 1.0]);
//! # Result::<(), RescaleError>::Ok(())
//! ```
//!
//! ### Convenience functions
//!
//! The default-configuration 1-D path is also available as plain functions:
//!
//! ```rust
//! use rescale::prelude::*;
//!
//! let z = standard_scale(&[5.0, 5.0, 5.0])?;
//! assert_eq!(z, vec![0.0, 0.0, 0.0]); // constant slices map to zeros
//! # Result::<(), RescaleError>::Ok(())
//! ```
//!
//! ## Numeric policies
//!
//! - **Zero variance / zero range**: constant slices are handled by explicit
//!   guards — standard scaling yields all zeros, min-max scaling yields the
//!   lower interval bound. These degeneracies never raise errors.
//! - **Non-finite values**: a NaN or infinity anywhere in a slice
//!   contaminates that slice's statistics (mean, standard deviation, and
//!   extrema), so the affected slice scales to NaN. Callers are responsible
//!   for pre-cleaning data. The rank transform instead orders NaN greater
//!   than every finite value and averages ranks within the NaN tie group.
//! - **Errors**: only invalid configuration is reported — empty input where
//!   a statistic is undefined, or a malformed target interval.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments. Disable default features to
//! remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! rescale = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - data structures and basic utilities.
mod primitives;

// Layer 2: Math - pure statistical reductions.
mod math;

// Layer 3: Algorithms - per-slice transform kernels.
mod algorithms;

// Layer 4: Engine - validation and axis-wise execution.
mod engine;

// High-level fluent API for array transforms.
mod api;

// Standard rescale prelude.
pub mod prelude {
    pub use crate::api::{
        min_max_scale, min_max_scale_between, rank_data, standard_scale,
        Axis,
        Axis::{Columns, Rows},
        Matrix, MinMaxScaleBuilder as MinMaxScale, RankDataBuilder as RankData, RescaleError,
        StandardScaleBuilder as StandardScale,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for extension crates (such as
// `fastRescale`) and white-box testing. It is only available with the `dev`
// feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
