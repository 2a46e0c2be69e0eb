#![cfg(feature = "dev")]
//! Tests for the min-max kernel.
//!
//! These tests verify the per-slice min-max scaling kernel directly,
//! without the validation and axis handling of the public API.
//!
//! ## Test Organization
//!
//! 1. **Basic Computation** - interval mapping for simple inputs
//! 2. **Edge Cases** - constant, single-element, and contaminated slices

use approx::assert_relative_eq;

use rescale::internals::algorithms::minmax::min_max_scale_slice;

fn run(src: &[f64], lo: f64, hi: f64) -> Vec<f64> {
    let mut dst = vec![0.0; src.len()];
    min_max_scale_slice(src, lo, hi, &mut dst);
    dst
}

// ============================================================================
// Basic Computation Tests
// ============================================================================

/// Test mapping onto the unit interval.
#[test]
fn test_minmax_unit_interval() {
    assert_eq!(run(&[2.0, 4.0, 6.0], 0.0, 1.0), vec![0.0, 0.5, 1.0]);
}

/// Test mapping onto a shifted, widened interval.
#[test]
fn test_minmax_shifted_interval() {
    let scaled = run(&[0.0, 1.0, 2.0], 10.0, 30.0);
    assert_relative_eq!(scaled[0], 10.0, epsilon = 1e-12);
    assert_relative_eq!(scaled[1], 20.0, epsilon = 1e-12);
    assert_relative_eq!(scaled[2], 30.0, epsilon = 1e-12);
}

/// Test that unsorted input maps extremes correctly.
#[test]
fn test_minmax_unsorted_input() {
    let scaled = run(&[5.0, -5.0, 0.0], 0.0, 1.0);
    assert_relative_eq!(scaled[0], 1.0, epsilon = 1e-12);
    assert_relative_eq!(scaled[1], 0.0, epsilon = 1e-12);
    assert_relative_eq!(scaled[2], 0.5, epsilon = 1e-12);
}

/// Test monotonicity: ordering of inputs is preserved by the mapping.
#[test]
fn test_minmax_monotone() {
    let src = [0.1, 0.7, 0.2, 0.9, 0.4];
    let scaled = run(&src, -3.0, 3.0);

    for i in 0..src.len() {
        for j in 0..src.len() {
            assert_eq!(src[i] < src[j], scaled[i] < scaled[j]);
        }
    }
}

// ============================================================================
// Edge Case Tests
// ============================================================================

/// Test the zero-range guard: constant slices collapse to `lo`.
#[test]
fn test_minmax_constant_slice() {
    assert_eq!(run(&[3.0, 3.0, 3.0], 2.0, 8.0), vec![2.0, 2.0, 2.0]);
}

/// Test a single-element slice.
#[test]
fn test_minmax_single_element() {
    assert_eq!(run(&[7.0], 0.0, 1.0), vec![0.0]);
}

/// Test that a NaN poisons the extrema and the output.
#[test]
fn test_minmax_nan_contamination() {
    let scaled = run(&[1.0, f64::NAN, 3.0], 0.0, 1.0);
    assert!(scaled.iter().all(|v| v.is_nan()));
}
