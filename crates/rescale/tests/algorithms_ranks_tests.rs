#![cfg(feature = "dev")]
//! Tests for the average-rank kernel.
//!
//! These tests verify tie resolution, NaN ordering, and the rank-sum
//! invariant of the per-slice rank kernel.
//!
//! ## Test Organization
//!
//! 1. **Basic Computation** - ranks for distinct and tied values
//! 2. **NaN Ordering** - NaN-greatest placement and NaN tie groups
//! 3. **Invariants** - rank sums and tie-order independence

use approx::assert_relative_eq;

use rescale::internals::algorithms::ranks::rank_slice;

fn run(src: &[f64]) -> Vec<f64> {
    let mut dst = vec![0.0; src.len()];
    rank_slice(src, &mut dst);
    dst
}

// ============================================================================
// Basic Computation Tests
// ============================================================================

/// Test ranks of distinct values.
#[test]
fn test_rank_distinct() {
    assert_eq!(run(&[30.0, 10.0, 20.0]), vec![3.0, 1.0, 2.0]);
}

/// Test a single tie pair sharing the average of ranks 2 and 3.
#[test]
fn test_rank_tie_pair() {
    assert_eq!(run(&[10.0, 20.0, 20.0, 30.0]), vec![1.0, 2.5, 2.5, 4.0]);
}

/// Test a tie run of three values spanning ranks 2..4.
#[test]
fn test_rank_tie_run() {
    // Ranks 2, 3, 4 average to 3.
    assert_eq!(run(&[1.0, 5.0, 5.0, 5.0, 9.0]), vec![1.0, 3.0, 3.0, 3.0, 5.0]);
}

/// Test an all-equal slice: every element gets the midpoint rank.
#[test]
fn test_rank_all_equal() {
    // Ranks 1..4 average to 2.5.
    assert_eq!(run(&[4.0, 4.0, 4.0, 4.0]), vec![2.5; 4]);
}

/// Test a single-element slice.
#[test]
fn test_rank_single_element() {
    assert_eq!(run(&[0.0]), vec![1.0]);
}

/// Test ranks with negative values.
#[test]
fn test_rank_negative_values() {
    assert_eq!(run(&[-1.0, -3.0, 0.0, -2.0]), vec![3.0, 1.0, 4.0, 2.0]);
}

// ============================================================================
// NaN Ordering Tests
// ============================================================================

/// Test that a NaN receives the top rank.
#[test]
fn test_rank_nan_is_greatest() {
    assert_eq!(run(&[3.0, f64::NAN, 1.0]), vec![2.0, 3.0, 1.0]);
}

/// Test that multiple NaNs form an averaged tie group at the top.
#[test]
fn test_rank_nan_tie_group() {
    // NaNs occupy ranks 3 and 4, averaging to 3.5.
    assert_eq!(
        run(&[f64::NAN, 2.0, f64::NAN, 1.0]),
        vec![3.5, 2.0, 3.5, 1.0]
    );
}

/// Test that NaN outranks positive infinity.
#[test]
fn test_rank_nan_above_infinity() {
    assert_eq!(run(&[f64::INFINITY, f64::NAN, 0.0]), vec![2.0, 3.0, 1.0]);
}

// ============================================================================
// Invariant Tests
// ============================================================================

/// Test that rank sums equal n(n+1)/2 for heavily tied data.
#[test]
fn test_rank_sum_invariant() {
    let src = [2.0, 2.0, 2.0, 1.0, 1.0, 3.0, 3.0, 3.0, 3.0];
    let ranks = run(&src);
    let n = src.len() as f64;
    assert_relative_eq!(ranks.iter().sum::<f64>(), n * (n + 1.0) / 2.0, epsilon = 1e-12);
}

/// Test that the position of tied elements does not change their rank.
#[test]
fn test_rank_tie_order_independence() {
    let a = run(&[7.0, 1.0, 7.0, 2.0]);
    let b = run(&[7.0, 7.0, 1.0, 2.0]);

    // Both 7.0s get 3.5 in either arrangement.
    assert_eq!(a, vec![3.5, 1.0, 3.5, 2.0]);
    assert_eq!(b, vec![3.5, 3.5, 1.0, 2.0]);
}
