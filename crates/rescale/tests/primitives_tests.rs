#![cfg(feature = "dev")]
//! Tests for the primitive layer.
//!
//! These tests verify the matrix container, the axis metadata helpers, and
//! the NaN-greatest argsort used by the rank transform.
//!
//! ## Test Organization
//!
//! 1. **Matrix** - construction, accessors, and column gathering
//! 2. **Sorting** - argsort ordering, stability, and NaN placement

use core::cmp::Ordering;

use rescale::internals::primitives::matrix::{Axis, Matrix};
use rescale::internals::primitives::sorting::{argsort, compare_nan_greatest};

// ============================================================================
// Matrix Tests
// ============================================================================

/// Test construction and basic accessors.
#[test]
fn test_matrix_accessors() {
    let m = Matrix::from_vec(vec![1.0f64, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3).unwrap();

    assert_eq!(m.shape(), (2, 3));
    assert_eq!(m.row(0), &[1.0, 2.0, 3.0]);
    assert_eq!(m.row(1), &[4.0, 5.0, 6.0]);
    assert_eq!(m.get(1, 2), 6.0);
    assert!(!m.is_empty());
}

/// Test that construction rejects a buffer of the wrong length.
#[test]
fn test_matrix_rejects_wrong_length() {
    assert!(Matrix::from_vec(vec![1.0f64, 2.0], 2, 2).is_err());
}

/// Test gathering a strided column into a reused buffer.
#[test]
fn test_matrix_gather_column() {
    let m = Matrix::from_vec(vec![1.0f64, 2.0, 3.0, 4.0, 5.0, 6.0], 3, 2).unwrap();
    let mut buf = vec![0.0; 8]; // stale contents must be replaced

    m.gather_column(0, &mut buf);
    assert_eq!(buf, vec![1.0, 3.0, 5.0]);

    m.gather_column(1, &mut buf);
    assert_eq!(buf, vec![2.0, 4.0, 6.0]);
}

/// Test slice metadata along both axes.
#[test]
fn test_matrix_axis_metadata() {
    let m = Matrix::from_vec(vec![0.0f64; 12], 3, 4).unwrap();

    assert_eq!(m.num_slices(Axis::Columns), 4);
    assert_eq!(m.slice_len(Axis::Columns), 3);
    assert_eq!(m.num_slices(Axis::Rows), 3);
    assert_eq!(m.slice_len(Axis::Rows), 4);
}

/// Test that the default axis is columns.
#[test]
fn test_default_axis_is_columns() {
    assert_eq!(Axis::default(), Axis::Columns);
}

// ============================================================================
// Sorting Tests
// ============================================================================

/// Test argsort on unsorted finite values.
#[test]
fn test_argsort_finite() {
    assert_eq!(argsort(&[3.0f64, 1.0, 2.0]), vec![1, 2, 0]);
}

/// Test that argsort is stable for equal values.
#[test]
fn test_argsort_stable_on_ties() {
    assert_eq!(argsort(&[2.0f64, 1.0, 2.0, 2.0]), vec![1, 0, 2, 3]);
}

/// Test that NaNs sort after all finite values, keeping insertion order.
#[test]
fn test_argsort_nan_at_end() {
    let order = argsort(&[f64::NAN, 1.0, f64::NAN, 0.0]);
    assert_eq!(order, vec![3, 1, 0, 2]);
}

/// Test the total-order comparator on NaN combinations.
#[test]
fn test_compare_nan_greatest() {
    assert_eq!(compare_nan_greatest(1.0f64, 2.0), Ordering::Less);
    assert_eq!(compare_nan_greatest(f64::NAN, f64::INFINITY), Ordering::Greater);
    assert_eq!(compare_nan_greatest(f64::INFINITY, f64::NAN), Ordering::Less);
    assert_eq!(compare_nan_greatest(f64::NAN, f64::NAN), Ordering::Equal);
}
