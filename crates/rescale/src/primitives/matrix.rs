//! Row-major 2-D container and axis selection.
//!
//! ## Purpose
//!
//! This module provides the [`Matrix`] container used for two-dimensional
//! input (rows = observations, columns = variables) and the [`Axis`]
//! selector that chooses which dimension a transform runs along.
//!
//! ## Design notes
//!
//! * **Explicit shape**: The buffer length is validated against `rows * cols`
//!   at construction, so every `Matrix` is rectangular by invariant.
//! * **Row-major**: Rows are contiguous; columns are strided and accessed
//!   through an explicit gather into a caller-provided buffer.
//! * **Type-safe axes**: Axis selection is an enum, so an out-of-range axis
//!   value is unrepresentable.
//!
//! ## Invariants
//!
//! * `data.len() == rows * cols` always holds after construction.
//! * Accessors never reallocate or mutate the underlying buffer.
//!
//! ## Non-goals
//!
//! * This module does not provide linear algebra or broadcasting.
//! * This module does not validate numeric content (handled by `validator`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::RescaleError;

// ============================================================================
// Axis Selection
// ============================================================================

/// Dimension along which a transform is applied to 2-D input.
///
/// The default is [`Axis::Columns`]: each column is treated as an
/// independent slice, matching the rows-as-observations convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Axis {
    /// Each row is an independent slice.
    Rows,

    /// Each column is an independent slice (default).
    #[default]
    Columns,
}

// ============================================================================
// Matrix
// ============================================================================

/// Owned, row-major, rectangular 2-D array of floating-point values.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T: Float> Matrix<T> {
    /// Create a matrix from a row-major buffer and an explicit shape.
    ///
    /// Fails with [`RescaleError::DimensionMismatch`] if the buffer length
    /// does not equal `rows * cols`.
    pub fn from_vec(data: Vec<T>, rows: usize, cols: usize) -> Result<Self, RescaleError> {
        let expected = rows * cols;
        if data.len() != expected {
            return Err(RescaleError::DimensionMismatch {
                expected,
                got: data.len(),
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Shape as `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Whether the matrix holds no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Row-major view of the underlying buffer.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consume the matrix and return the row-major buffer.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Element at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the position is out of bounds.
    pub fn get(&self, row: usize, col: usize) -> T {
        self.data[row * self.cols + col]
    }

    /// Contiguous view of one row.
    ///
    /// # Panics
    ///
    /// Panics if `row >= rows`.
    pub fn row(&self, row: usize) -> &[T] {
        let start = row * self.cols;
        &self.data[start..start + self.cols]
    }

    /// Gather one (strided) column into `buf`, replacing its contents.
    ///
    /// # Panics
    ///
    /// Panics if `col >= cols` or the matrix has zero columns.
    pub fn gather_column(&self, col: usize, buf: &mut Vec<T>) {
        assert!(col < self.cols);
        buf.clear();
        buf.extend(self.data.iter().skip(col).step_by(self.cols).copied());
    }

    /// Number of independent slices along `axis`.
    pub fn num_slices(&self, axis: Axis) -> usize {
        match axis {
            Axis::Rows => self.rows,
            Axis::Columns => self.cols,
        }
    }

    /// Length of each slice along `axis`.
    pub fn slice_len(&self, axis: Axis) -> usize {
        match axis {
            Axis::Rows => self.cols,
            Axis::Columns => self.rows,
        }
    }
}
