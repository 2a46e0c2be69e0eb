//! fastRescale Parallel Transform Examples
//!
//! This example demonstrates features specific to `fastRescale`:
//! - Parallel execution using `rayon`
//! - Sequential fallback
//! - `ndarray` integration
//! - Row-wise transforms
//! - Rank transformation at scale

use fastRescale::prelude::*;
use ndarray::{Array1, Array2};
use std::time::Instant;

fn main() -> Result<(), RescaleError> {
    println!("{}", "=".repeat(80));
    println!("fastRescale Parallel Transform Examples");
    println!("{}", "=".repeat(80));
    println!();

    example_1_parallel_column_scaling()?;
    example_2_sequential_fallback()?;
    example_3_ndarray_integration()?;
    example_4_row_wise_min_max()?;
    example_5_parallel_ranking()?;

    Ok(())
}

/// Example 1: Parallel Column Scaling
/// Demonstrates the default parallel execution mode
fn example_1_parallel_column_scaling() -> Result<(), RescaleError> {
    println!("Example 1: Parallel Column Scaling");
    println!("{}", "-".repeat(80));

    // Generate a wide synthetic dataset: 10K observations x 64 variables
    let (rows, cols) = (10_000, 64);
    let data: Vec<f64> = (0..rows * cols)
        .map(|i| ((i % 977) as f64 * 0.37).sin() * (1.0 + (i / cols) as f64 * 0.001))
        .collect();
    let m = Matrix::from_vec(data, rows, cols)?;

    let start = Instant::now();
    let z = StandardScale::new()
        .axis(Columns) // Scale each variable independently (default)
        .parallel(true) // Enable parallel execution (default)
        .build()?
        .transform_matrix(&m)?;
    let duration = start.elapsed();

    println!("Scaled {} x {} matrix in {:?}", rows, cols, duration);
    println!("Execution mode: Parallel");
    println!("First scaled row: {:?}", &z.row(0)[..4.min(cols)]);

    println!();
    Ok(())
}

/// Example 2: Sequential Fallback
/// Demonstrates explicitly disabling parallelism
fn example_2_sequential_fallback() -> Result<(), RescaleError> {
    println!("Example 2: Sequential Fallback");
    println!("{}", "-".repeat(80));

    let (rows, cols) = (10_000, 64);
    let data: Vec<f64> = (0..rows * cols).map(|i| (i % 113) as f64).collect();
    let m = Matrix::from_vec(data, rows, cols)?;

    let start = Instant::now();
    let _z = StandardScale::new()
        .parallel(false) // Disable parallel execution
        .build()?
        .transform_matrix(&m)?;
    let duration = start.elapsed();

    println!("Scaled {} x {} matrix in {:?}", rows, cols, duration);
    println!("Execution mode: Sequential");
    // Note: Sequential might be slower for wide matrices

    println!();
    Ok(())
}

/// Example 3: NdArray Integration
/// Demonstrates direct usage with ndarray types
fn example_3_ndarray_integration() -> Result<(), RescaleError> {
    println!("Example 3: NdArray Integration");
    println!("{}", "-".repeat(80));

    // 1-D input: any contiguous ndarray works directly
    let x = Array1::from_vec((0..100).map(|i| i as f64 * 0.1).collect());
    let scaled = MinMaxScale::new().build()?.transform(&x)?;
    println!("1-D min-max: first 5 values: {:?}", &scaled[..5]);

    // 2-D input: transform_array returns an Array2 of the same shape
    let a = Array2::from_shape_fn((50, 3), |(r, c)| (r as f64) * (c as f64 + 1.0));
    let z = StandardScale::new().build()?.transform_array(&a)?;
    println!("2-D z-score: output shape {:?}", z.dim());

    println!();
    Ok(())
}

/// Example 4: Row-Wise Min-Max Scaling
/// Demonstrates scaling each observation instead of each variable
fn example_4_row_wise_min_max() -> Result<(), RescaleError> {
    println!("Example 4: Row-Wise Min-Max Scaling");
    println!("{}", "-".repeat(80));

    let m = Matrix::from_vec(vec![1.0, 2.0, 3.0, 10.0, 20.0, 30.0], 2, 3)?;

    let scaled = MinMaxScale::new()
        .axis(Rows) // Each row maps onto the target interval
        .interval(-1.0, 1.0)
        .build()?
        .transform_matrix(&m)?;

    println!("Row 0 scaled into [-1, 1]: {:?}", scaled.row(0));
    println!("Row 1 scaled into [-1, 1]: {:?}", scaled.row(1));

    println!();
    Ok(())
}

/// Example 5: Parallel Rank Transformation
/// Demonstrates average ranks over many columns at once
fn example_5_parallel_ranking() -> Result<(), RescaleError> {
    println!("Example 5: Parallel Rank Transformation");
    println!("{}", "-".repeat(80));

    let (rows, cols) = (5_000, 32);
    let data: Vec<f64> = (0..rows * cols).map(|i| ((i * 31) % 101) as f64).collect();
    let m = Matrix::from_vec(data, rows, cols)?;

    let start = Instant::now();
    let ranks = RankData::new().parallel(true).build()?.transform_matrix(&m)?;
    let duration = start.elapsed();

    // Each column's ranks sum to n(n+1)/2 regardless of ties
    let expected = rows as f64 * (rows as f64 + 1.0) / 2.0;
    let mut col0_sum = 0.0;
    for r in 0..rows {
        col0_sum += ranks.get(r, 0);
    }

    println!("Ranked {} x {} matrix in {:?}", rows, cols, duration);
    println!("Column 0 rank sum: {} (expected {})", col0_sum, expected);

    println!();
    Ok(())
}
