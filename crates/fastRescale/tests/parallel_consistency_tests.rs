//! Tests that parallel execution matches sequential execution exactly.
//!
//! The slices along an axis are independent and each one is transformed by
//! the same kernel either way, so parallel output must be bit-identical to
//! sequential output for every transform and axis.

use fastRescale::prelude::*;

/// Build a deterministic test matrix with ties and varied magnitudes.
fn test_matrix(rows: usize, cols: usize) -> Matrix<f64> {
    let data: Vec<f64> = (0..rows * cols)
        .map(|i| (((i * 31) % 97) as f64 - 48.0) * 0.25)
        .collect();
    Matrix::from_vec(data, rows, cols).unwrap()
}

/// Test z-score consistency along columns.
#[test]
fn test_standard_scale_columns_consistency() {
    let m = test_matrix(200, 17);

    let par = StandardScale::new()
        .axis(Columns)
        .parallel(true)
        .build()
        .unwrap()
        .transform_matrix(&m)
        .unwrap();
    let seq = StandardScale::new()
        .axis(Columns)
        .parallel(false)
        .build()
        .unwrap()
        .transform_matrix(&m)
        .unwrap();

    assert_eq!(par.as_slice(), seq.as_slice());
}

/// Test z-score consistency along rows.
#[test]
fn test_standard_scale_rows_consistency() {
    let m = test_matrix(64, 33);

    let par = StandardScale::new()
        .axis(Rows)
        .parallel(true)
        .build()
        .unwrap()
        .transform_matrix(&m)
        .unwrap();
    let seq = StandardScale::new()
        .axis(Rows)
        .parallel(false)
        .build()
        .unwrap()
        .transform_matrix(&m)
        .unwrap();

    assert_eq!(par.as_slice(), seq.as_slice());
}

/// Test min-max consistency with a custom interval.
#[test]
fn test_min_max_consistency() {
    let m = test_matrix(150, 12);

    let par = MinMaxScale::new()
        .interval(-5.0, 5.0)
        .parallel(true)
        .build()
        .unwrap()
        .transform_matrix(&m)
        .unwrap();
    let seq = MinMaxScale::new()
        .interval(-5.0, 5.0)
        .parallel(false)
        .build()
        .unwrap()
        .transform_matrix(&m)
        .unwrap();

    assert_eq!(par.as_slice(), seq.as_slice());
}

/// Test rank consistency on heavily tied data.
#[test]
fn test_rank_consistency_with_ties() {
    // Modulo generator produces many repeated values per column.
    let data: Vec<f64> = (0..300 * 9).map(|i| ((i * 7) % 13) as f64).collect();
    let m = Matrix::from_vec(data, 300, 9).unwrap();

    let par = RankData::new()
        .parallel(true)
        .build()
        .unwrap()
        .transform_matrix(&m)
        .unwrap();
    let seq = RankData::new()
        .parallel(false)
        .build()
        .unwrap()
        .transform_matrix(&m)
        .unwrap();

    assert_eq!(par.as_slice(), seq.as_slice());
}

/// Test consistency when the data contains NaN.
#[test]
fn test_consistency_with_nan() {
    let mut data: Vec<f64> = (0..100 * 5).map(|i| i as f64).collect();
    data[7] = f64::NAN;
    data[250] = f64::NAN;
    let m = Matrix::from_vec(data, 100, 5).unwrap();

    let par = RankData::new()
        .parallel(true)
        .build()
        .unwrap()
        .transform_matrix(&m)
        .unwrap();
    let seq = RankData::new()
        .parallel(false)
        .build()
        .unwrap()
        .transform_matrix(&m)
        .unwrap();

    // Ranks stay finite even for NaN input, so exact comparison is safe.
    assert_eq!(par.as_slice(), seq.as_slice());
}

/// Test consistency for f32 data.
#[test]
fn test_consistency_f32() {
    let data: Vec<f32> = (0..80 * 6).map(|i| ((i * 13) % 29) as f32 * 0.5).collect();
    let m = Matrix::from_vec(data, 80, 6).unwrap();

    let par = StandardScale::new()
        .parallel(true)
        .build()
        .unwrap()
        .transform_matrix(&m)
        .unwrap();
    let seq = StandardScale::new()
        .parallel(false)
        .build()
        .unwrap()
        .transform_matrix(&m)
        .unwrap();

    assert_eq!(par.as_slice(), seq.as_slice());
}

/// Test that a single-column matrix works in parallel mode.
#[test]
fn test_parallel_single_column() {
    let m = Matrix::from_vec(vec![3.0, 1.0, 2.0], 3, 1).unwrap();

    let ranks = RankData::new()
        .parallel(true)
        .build()
        .unwrap()
        .transform_matrix(&m)
        .unwrap();

    assert_eq!(ranks.as_slice(), &[3.0, 1.0, 2.0]);
}
