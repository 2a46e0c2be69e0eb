//! Input validation for transform configuration and data.
//!
//! ## Purpose
//!
//! This module provides validation functions for transform parameters and
//! input data: non-empty inputs, well-formed target intervals, and
//! single-assignment of builder parameters.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Policy boundary**: Only configuration errors are raised here; numeric
//!   degeneracies (zero variance, zero range, non-finite data) are handled
//!   by the kernels' documented fallback policies instead.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not transform or filter input data.
//! * This module does not provide automatic correction of invalid inputs.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::RescaleError;
use crate::primitives::matrix::Matrix;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for transform configuration and input data.
///
/// Provides static methods returning `Result<(), RescaleError>` that fail
/// fast upon identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Input Validation
    // ========================================================================

    /// Validate a 1-D input slice.
    pub fn validate_slice<T: Float>(values: &[T]) -> Result<(), RescaleError> {
        if values.is_empty() {
            return Err(RescaleError::EmptyInput);
        }
        Ok(())
    }

    /// Validate a 2-D input matrix.
    ///
    /// A matrix with zero rows or zero columns yields zero-length slices
    /// along any axis, for which the statistics are undefined.
    pub fn validate_matrix<T: Float>(matrix: &Matrix<T>) -> Result<(), RescaleError> {
        if matrix.rows() == 0 || matrix.cols() == 0 {
            return Err(RescaleError::EmptyInput);
        }
        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate a target interval for min-max scaling.
    pub fn validate_interval<T: Float>(lo: T, hi: T) -> Result<(), RescaleError> {
        if !lo.is_finite() || !hi.is_finite() || lo >= hi {
            return Err(RescaleError::InvalidInterval {
                lo: lo.to_f64().unwrap_or(f64::NAN),
                hi: hi.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), RescaleError> {
        if let Some(parameter) = duplicate_param {
            return Err(RescaleError::DuplicateParameter { parameter });
        }
        Ok(())
    }
}
