//! High-level API for array transforms with parallel execution support.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point for the
//! transforms with heavy-duty parallel execution. It mirrors the core
//! `rescale` API and extends it with `ndarray` interop and a `.parallel()`
//! switch.
//!
//! ## Design notes
//!
//! * **Fluent Integration**: Re-uses the base `rescale` builder pattern.
//! * **Parallel-First**: Defaults to parallel execution for 2-D input.
//! * **Transparent**: Parallel and sequential execution produce identical
//!   output; the switch affects scheduling only.
//!
//! ## Key concepts
//!
//! ### Configuration Flow
//!
//! 1. Create a builder via `StandardScale::new()` (or `MinMaxScale`,
//!    `RankData` from the prelude).
//! 2. Chain configuration methods (`.axis()`, `.interval()`, `.parallel()`).
//! 3. Call `.build()` to validate and obtain a transformer.
//! 4. Call `.transform(&x)` for 1-D data, `.transform_matrix(&m)` for
//!    [`Matrix`] input, or `.transform_array(&a)` for `ndarray` input.

// External dependencies
use ndarray::{Array2, ArrayBase, Data, Ix2};
use num_traits::Float;

// Export dependencies from rescale crate
use rescale::internals::algorithms::minmax::min_max_scale_slice;
use rescale::internals::algorithms::ranks::rank_slice;
use rescale::internals::algorithms::zscore::standard_scale_slice;
use rescale::internals::engine::executor::apply_along_axis;
use rescale::internals::engine::validator::Validator;

// Internal dependencies
use crate::engine::executor::apply_along_axis_parallel;
use crate::input::{RescaleInput, RescaleInput2D};

// Publicly re-exported types
pub use rescale::internals::primitives::errors::RescaleError;
pub use rescale::internals::primitives::matrix::{Axis, Matrix};

// ============================================================================
// Execution Dispatch
// ============================================================================

/// Run a kernel over a validated matrix, in parallel or sequentially.
fn run_kernel<T, F>(
    matrix: &Matrix<T>,
    axis: Axis,
    parallel: bool,
    kernel: F,
) -> Result<Matrix<T>, RescaleError>
where
    T: Float + Send + Sync,
    F: Fn(&[T], &mut [T]) + Sync,
{
    if parallel {
        apply_along_axis_parallel(matrix, axis, kernel)
    } else {
        apply_along_axis(matrix, axis, kernel)
    }
}

/// Convert a transformed matrix back into an `ndarray` array.
fn matrix_to_array<T: Float>(matrix: Matrix<T>) -> Result<Array2<T>, RescaleError> {
    let (rows, cols) = matrix.shape();
    Array2::from_shape_vec((rows, cols), matrix.into_vec())
        .map_err(|e| RescaleError::InvalidInput(e.to_string()))
}

// ============================================================================
// Standard (Z-Score) Scaling
// ============================================================================

/// Fluent builder for parallel standard (z-score) scaling.
#[derive(Debug, Clone, Default)]
pub struct StandardScaleBuilder {
    /// Axis selection for 2-D input.
    pub axis: Option<Axis>,

    /// Parallel execution toggle (default: enabled).
    pub parallel: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    duplicate_param: Option<&'static str>,
}

impl StandardScaleBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the axis along which 2-D input is sliced (default: columns).
    pub fn axis(mut self, axis: Axis) -> Self {
        if self.axis.is_some() {
            self.duplicate_param = Some("axis");
        }
        self.axis = Some(axis);
        self
    }

    /// Enable or disable parallel execution (default: enabled).
    pub fn parallel(mut self, parallel: bool) -> Self {
        if self.parallel.is_some() {
            self.duplicate_param = Some("parallel");
        }
        self.parallel = Some(parallel);
        self
    }

    /// Validate the configuration and build the transformer.
    pub fn build(self) -> Result<ParallelStandardScaler, RescaleError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;
        Ok(ParallelStandardScaler {
            axis: self.axis.unwrap_or_default(),
            parallel: self.parallel.unwrap_or(true),
        })
    }
}

/// Configured parallel standard-scaling transformer.
#[derive(Debug, Clone)]
pub struct ParallelStandardScaler {
    axis: Axis,
    parallel: bool,
}

impl ParallelStandardScaler {
    /// Z-score a 1-D input.
    pub fn transform<T, I>(&self, data: &I) -> Result<Vec<T>, RescaleError>
    where
        T: Float,
        I: RescaleInput<T> + ?Sized,
    {
        let data = data.as_rescale_slice()?;
        Validator::validate_slice(data)?;
        let mut out = vec![T::zero(); data.len()];
        standard_scale_slice(data, &mut out);
        Ok(out)
    }

    /// Z-score each slice of a matrix independently along the configured axis.
    pub fn transform_matrix<T>(&self, matrix: &Matrix<T>) -> Result<Matrix<T>, RescaleError>
    where
        T: Float + Send + Sync,
    {
        Validator::validate_matrix(matrix)?;
        run_kernel(matrix, self.axis, self.parallel, standard_scale_slice)
    }

    /// Z-score each slice of a 2-D `ndarray` array along the configured axis.
    pub fn transform_array<T, S>(
        &self,
        array: &ArrayBase<S, Ix2>,
    ) -> Result<Array2<T>, RescaleError>
    where
        T: Float + Send + Sync,
        S: Data<Elem = T>,
    {
        let matrix = array.to_rescale_matrix()?;
        matrix_to_array(self.transform_matrix(&matrix)?)
    }
}

// ============================================================================
// Min-Max Scaling
// ============================================================================

/// Fluent builder for parallel min-max scaling.
#[derive(Debug, Clone)]
pub struct MinMaxScaleBuilder<T> {
    /// Axis selection for 2-D input.
    pub axis: Option<Axis>,

    /// Target interval `[lo, hi]` (default `[0, 1]`).
    pub interval: Option<(T, T)>,

    /// Parallel execution toggle (default: enabled).
    pub parallel: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for MinMaxScaleBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> MinMaxScaleBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            axis: None,
            interval: None,
            parallel: None,
            duplicate_param: None,
        }
    }

    /// Set the axis along which 2-D input is sliced (default: columns).
    pub fn axis(mut self, axis: Axis) -> Self {
        if self.axis.is_some() {
            self.duplicate_param = Some("axis");
        }
        self.axis = Some(axis);
        self
    }

    /// Set the target interval bounds (default `[0, 1]`; requires `lo < hi`).
    pub fn interval(mut self, lo: T, hi: T) -> Self {
        if self.interval.is_some() {
            self.duplicate_param = Some("interval");
        }
        self.interval = Some((lo, hi));
        self
    }

    /// Enable or disable parallel execution (default: enabled).
    pub fn parallel(mut self, parallel: bool) -> Self {
        if self.parallel.is_some() {
            self.duplicate_param = Some("parallel");
        }
        self.parallel = Some(parallel);
        self
    }

    /// Validate the configuration and build the transformer.
    pub fn build(self) -> Result<ParallelMinMaxScaler<T>, RescaleError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;
        let (lo, hi) = self.interval.unwrap_or((T::zero(), T::one()));
        Validator::validate_interval(lo, hi)?;
        Ok(ParallelMinMaxScaler {
            axis: self.axis.unwrap_or_default(),
            lo,
            hi,
            parallel: self.parallel.unwrap_or(true),
        })
    }
}

/// Configured parallel min-max scaling transformer.
#[derive(Debug, Clone)]
pub struct ParallelMinMaxScaler<T> {
    axis: Axis,
    lo: T,
    hi: T,
    parallel: bool,
}

impl<T: Float + Send + Sync> ParallelMinMaxScaler<T> {
    /// Min-max scale a 1-D input into the configured interval.
    pub fn transform<I>(&self, data: &I) -> Result<Vec<T>, RescaleError>
    where
        I: RescaleInput<T> + ?Sized,
    {
        let data = data.as_rescale_slice()?;
        Validator::validate_slice(data)?;
        let mut out = vec![T::zero(); data.len()];
        min_max_scale_slice(data, self.lo, self.hi, &mut out);
        Ok(out)
    }

    /// Min-max scale each slice of a matrix independently along the
    /// configured axis.
    pub fn transform_matrix(&self, matrix: &Matrix<T>) -> Result<Matrix<T>, RescaleError> {
        Validator::validate_matrix(matrix)?;
        let (lo, hi) = (self.lo, self.hi);
        run_kernel(matrix, self.axis, self.parallel, move |src, dst| {
            min_max_scale_slice(src, lo, hi, dst)
        })
    }

    /// Min-max scale each slice of a 2-D `ndarray` array along the configured
    /// axis.
    pub fn transform_array<S>(&self, array: &ArrayBase<S, Ix2>) -> Result<Array2<T>, RescaleError>
    where
        S: Data<Elem = T>,
    {
        let matrix = array.to_rescale_matrix()?;
        matrix_to_array(self.transform_matrix(&matrix)?)
    }
}

// ============================================================================
// Rank Transformation
// ============================================================================

/// Fluent builder for the parallel average-rank transform.
#[derive(Debug, Clone, Default)]
pub struct RankDataBuilder {
    /// Axis selection for 2-D input.
    pub axis: Option<Axis>,

    /// Parallel execution toggle (default: enabled).
    pub parallel: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    duplicate_param: Option<&'static str>,
}

impl RankDataBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the axis along which 2-D input is sliced (default: columns).
    pub fn axis(mut self, axis: Axis) -> Self {
        if self.axis.is_some() {
            self.duplicate_param = Some("axis");
        }
        self.axis = Some(axis);
        self
    }

    /// Enable or disable parallel execution (default: enabled).
    pub fn parallel(mut self, parallel: bool) -> Self {
        if self.parallel.is_some() {
            self.duplicate_param = Some("parallel");
        }
        self.parallel = Some(parallel);
        self
    }

    /// Validate the configuration and build the transformer.
    pub fn build(self) -> Result<ParallelRanker, RescaleError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;
        Ok(ParallelRanker {
            axis: self.axis.unwrap_or_default(),
            parallel: self.parallel.unwrap_or(true),
        })
    }
}

/// Configured parallel rank transformer.
#[derive(Debug, Clone)]
pub struct ParallelRanker {
    axis: Axis,
    parallel: bool,
}

impl ParallelRanker {
    /// Replace each element of a 1-D input with its 1-based average rank.
    pub fn transform<T, I>(&self, data: &I) -> Result<Vec<T>, RescaleError>
    where
        T: Float,
        I: RescaleInput<T> + ?Sized,
    {
        let data = data.as_rescale_slice()?;
        Validator::validate_slice(data)?;
        let mut out = vec![T::zero(); data.len()];
        rank_slice(data, &mut out);
        Ok(out)
    }

    /// Rank each slice of a matrix independently along the configured axis.
    pub fn transform_matrix<T>(&self, matrix: &Matrix<T>) -> Result<Matrix<T>, RescaleError>
    where
        T: Float + Send + Sync,
    {
        Validator::validate_matrix(matrix)?;
        run_kernel(matrix, self.axis, self.parallel, rank_slice)
    }

    /// Rank each slice of a 2-D `ndarray` array along the configured axis.
    pub fn transform_array<T, S>(
        &self,
        array: &ArrayBase<S, Ix2>,
    ) -> Result<Array2<T>, RescaleError>
    where
        T: Float + Send + Sync,
        S: Data<Elem = T>,
    {
        let matrix = array.to_rescale_matrix()?;
        matrix_to_array(self.transform_matrix(&matrix)?)
    }
}
