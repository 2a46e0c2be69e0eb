//! Tests that the prelude exports the complete public surface.

use rescale::prelude::*;

/// Test that every prelude item is usable in one pass.
#[test]
fn test_prelude_surface() {
    let x = vec![1.0f64, 2.0, 3.0];

    let _z: Vec<f64> = standard_scale(&x).unwrap();
    let _s: Vec<f64> = min_max_scale(&x).unwrap();
    let _b: Vec<f64> = min_max_scale_between(&x, -1.0, 1.0).unwrap();
    let _r: Vec<f64> = rank_data(&x).unwrap();

    let m: Matrix<f64> = Matrix::from_vec(x, 3, 1).unwrap();
    let _ = StandardScale::new().axis(Columns).build().unwrap().transform_matrix(&m).unwrap();
    let _ = MinMaxScale::new().axis(Rows).build().unwrap().transform_matrix(&m).unwrap();
    let _ = RankData::new().build().unwrap().transform_matrix(&m).unwrap();

    let err: RescaleError = standard_scale::<f64>(&[]).unwrap_err();
    assert_eq!(err, RescaleError::EmptyInput);
}
