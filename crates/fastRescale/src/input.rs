//! Input abstractions for array transforms.
//!
//! ## Purpose
//!
//! This module provides unified abstractions over the input formats the
//! transform methods accept, allowing slices, vectors, and `ndarray` types to
//! flow through a single interface.
//!
//! ## Design notes
//!
//! * **Zero-copy where possible**: 1-D inputs expose a direct slice view of
//!   the underlying buffer.
//! * **Interoperability**: Bridges standard Rust collections with specialized
//!   numerical libraries.
//! * **Fail-fast validation**: Memory continuity of `ndarray` inputs is
//!   checked before processing.
//!
//! ## Key concepts
//!
//! * **RescaleInput Trait**: 1-D inputs that can provide a contiguous slice view.
//! * **RescaleInput2D Trait**: 2-D inputs that can be viewed as a row-major matrix.
//!
//! ## Invariants
//!
//! * Returned slices represent all elements of the input container.
//! * 2-D inputs must be contiguous and row-major; anything else returns an error.
//!
//! ## Non-goals
//!
//! * This module does not perform data cleaning or imputation.
//! * This module does not handle data reshaping or dimensionality reduction.

// External dependencies
use ndarray::{ArrayBase, Data, Ix1, Ix2};
use num_traits::Float;

// Export dependencies from rescale crate
use rescale::internals::primitives::errors::RescaleError;
use rescale::internals::primitives::matrix::Matrix;

/// Trait for 1-D types that can be used as transform input.
pub trait RescaleInput<T: Float> {
    /// Convert the input to a contiguous slice.
    fn as_rescale_slice(&self) -> Result<&[T], RescaleError>;
}

impl<T: Float> RescaleInput<T> for [T] {
    fn as_rescale_slice(&self) -> Result<&[T], RescaleError> {
        Ok(self)
    }
}

impl<T: Float> RescaleInput<T> for Vec<T> {
    fn as_rescale_slice(&self) -> Result<&[T], RescaleError> {
        Ok(self.as_slice())
    }
}

impl<T: Float, S> RescaleInput<T> for ArrayBase<S, Ix1>
where
    S: Data<Elem = T>,
{
    fn as_rescale_slice(&self) -> Result<&[T], RescaleError> {
        self.as_slice().ok_or_else(|| {
            RescaleError::InvalidInput("ndarray input must be contiguous in memory".to_string())
        })
    }
}

/// Trait for 2-D types that can be used as transform input.
pub trait RescaleInput2D<T: Float> {
    /// Convert the input to an owned row-major matrix.
    fn to_rescale_matrix(&self) -> Result<Matrix<T>, RescaleError>;
}

impl<T: Float> RescaleInput2D<T> for Matrix<T> {
    fn to_rescale_matrix(&self) -> Result<Matrix<T>, RescaleError> {
        Ok(self.clone())
    }
}

impl<T: Float, S> RescaleInput2D<T> for ArrayBase<S, Ix2>
where
    S: Data<Elem = T>,
{
    fn to_rescale_matrix(&self) -> Result<Matrix<T>, RescaleError> {
        let (rows, cols) = self.dim();
        let buf = self.as_slice().ok_or_else(|| {
            RescaleError::InvalidInput(
                "ndarray input must be contiguous and row-major in memory".to_string(),
            )
        })?;
        Matrix::from_vec(buf.to_vec(), rows, cols)
    }
}
