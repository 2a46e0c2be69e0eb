//! High-level API for array transforms.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry points: one fluent
//! builder per transform, plus convenience functions for the 1-D
//! default-configuration path.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builders with sensible defaults for all parameters.
//! * **Validated**: Parameters are validated when `build()` is called; input
//!   data is validated by the terminal `transform` methods.
//! * **Stateless**: The built transformers hold configuration only — there is
//!   no fit/transform split, and every call recomputes statistics from its
//!   input.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ## Key concepts
//!
//! ### Configuration Flow
//!
//! 1. Create a builder via `StandardScale::new()` (or `MinMaxScale`,
//!    `RankData` from the prelude).
//! 2. Chain configuration methods (`.axis()`, `.interval()`).
//! 3. Call `.build()` to validate and obtain a transformer.
//! 4. Call `.transform(&x)` for 1-D data or `.transform_matrix(&m)` for 2-D.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::minmax::min_max_scale_slice;
use crate::algorithms::ranks::rank_slice;
use crate::algorithms::zscore::standard_scale_slice;
use crate::engine::executor::apply_along_axis;
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::primitives::errors::RescaleError;
pub use crate::primitives::matrix::{Axis, Matrix};

// ============================================================================
// Standard (Z-Score) Scaling
// ============================================================================

/// Fluent builder for standard (z-score) scaling.
#[derive(Debug, Clone, Default)]
pub struct StandardScaleBuilder {
    /// Axis selection for 2-D input.
    pub axis: Option<Axis>,

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

    /// Validate the configuration and build the transformer.
    pub fn build(self) -> Result<StandardScaler, RescaleError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;
        Ok(StandardScaler {
            axis: self.axis.unwrap_or_default(),
        })
    }
}

/// Configured standard-scaling transformer.
#[derive(Debug, Clone)]
pub struct StandardScaler {
    axis: Axis,
}

impl StandardScaler {
    /// Z-score a 1-D array.
    ///
    /// Constant input yields all zeros; a non-finite value contaminates the
    /// whole slice.
    pub fn transform<T: Float>(&self, data: &[T]) -> Result<Vec<T>, RescaleError> {
        Validator::validate_slice(data)?;
        let mut out = vec![T::zero(); data.len()];
        standard_scale_slice(data, &mut out);
        Ok(out)
    }

    /// Z-score each slice of a matrix independently along the configured axis.
    pub fn transform_matrix<T: Float>(&self, matrix: &Matrix<T>) -> Result<Matrix<T>, RescaleError> {
        Validator::validate_matrix(matrix)?;
        apply_along_axis(matrix, self.axis, standard_scale_slice)
    }
}

// ============================================================================
// Min-Max Scaling
// ============================================================================

/// Fluent builder for min-max scaling.
#[derive(Debug, Clone)]
pub struct MinMaxScaleBuilder<T> {
    /// Axis selection for 2-D input.
    pub axis: Option<Axis>,

    /// Target interval `[lo, hi]` (default `[0, 1]`).
    pub interval: Option<(T, T)>,

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

    /// Validate the configuration and build the transformer.
    pub fn build(self) -> Result<MinMaxScaler<T>, RescaleError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;
        let (lo, hi) = self.interval.unwrap_or((T::zero(), T::one()));
        Validator::validate_interval(lo, hi)?;
        Ok(MinMaxScaler {
            axis: self.axis.unwrap_or_default(),
            lo,
            hi,
        })
    }
}

/// Configured min-max scaling transformer.
#[derive(Debug, Clone)]
pub struct MinMaxScaler<T> {
    axis: Axis,
    lo: T,
    hi: T,
}

impl<T: Float> MinMaxScaler<T> {
    /// Min-max scale a 1-D array into the configured interval.
    ///
    /// Constant input collapses to the lower bound; a NaN contaminates the
    /// whole slice.
    pub fn transform(&self, data: &[T]) -> Result<Vec<T>, RescaleError> {
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
        apply_along_axis(matrix, self.axis, move |src, dst| {
            min_max_scale_slice(src, lo, hi, dst)
        })
    }
}

// ============================================================================
// Rank Transformation
// ============================================================================

/// Fluent builder for the average-rank transform.
#[derive(Debug, Clone, Default)]
pub struct RankDataBuilder {
    /// Axis selection for 2-D input.
    pub axis: Option<Axis>,

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

    /// Validate the configuration and build the transformer.
    pub fn build(self) -> Result<Ranker, RescaleError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;
        Ok(Ranker {
            axis: self.axis.unwrap_or_default(),
        })
    }
}

/// Configured rank transformer.
#[derive(Debug, Clone)]
pub struct Ranker {
    axis: Axis,
}

impl Ranker {
    /// Replace each element of a 1-D array with its 1-based average rank.
    ///
    /// NaN values rank greater than all finite values and share averaged
    /// ranks among themselves.
    pub fn transform<T: Float>(&self, data: &[T]) -> Result<Vec<T>, RescaleError> {
        Validator::validate_slice(data)?;
        let mut out = vec![T::zero(); data.len()];
        rank_slice(data, &mut out);
        Ok(out)
    }

    /// Rank each slice of a matrix independently along the configured axis.
    pub fn transform_matrix<T: Float>(&self, matrix: &Matrix<T>) -> Result<Matrix<T>, RescaleError> {
        Validator::validate_matrix(matrix)?;
        apply_along_axis(matrix, self.axis, rank_slice)
    }
}

// ============================================================================
// Convenience Functions
// ============================================================================

/// Z-score a 1-D array with default configuration.
pub fn standard_scale<T: Float>(data: &[T]) -> Result<Vec<T>, RescaleError> {
    StandardScaleBuilder::new().build()?.transform(data)
}

/// Min-max scale a 1-D array into `[0, 1]`.
pub fn min_max_scale<T: Float>(data: &[T]) -> Result<Vec<T>, RescaleError> {
    MinMaxScaleBuilder::new().build()?.transform(data)
}

/// Min-max scale a 1-D array into `[lo, hi]`.
pub fn min_max_scale_between<T: Float>(data: &[T], lo: T, hi: T) -> Result<Vec<T>, RescaleError> {
    MinMaxScaleBuilder::new()
        .interval(lo, hi)
        .build()?
        .transform(data)
}

/// Replace each element of a 1-D array with its 1-based average rank.
pub fn rank_data<T: Float>(data: &[T]) -> Result<Vec<T>, RescaleError> {
    RankDataBuilder::new().build()?.transform(data)
}
