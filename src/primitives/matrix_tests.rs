pub(crate) use super::*;

#[test]
fn test_from_vec() {
    let m = Matrix::from_vec(2, 3, vec![1.0_f64, 2.0, 3.0, 4.0, 5.0, 6.0])
        .expect("test data has correct dimensions: 2*3=6 elements");
    assert_eq!(m.shape(), (2, 3));
    assert_eq!(m.get(0, 0), 1.0);
    assert_eq!(m.get(1, 2), 6.0);
}

#[test]
fn test_from_vec_error() {
    let result = Matrix::from_vec(2, 3, vec![1.0_f64, 2.0, 3.0]);
    assert!(matches!(result, Err(CfError::DimensionMismatch { .. })));
}

#[test]
fn test_from_rows() {
    let m = Matrix::from_rows(vec![vec![Some(5.0), None], vec![None, Some(2.0)]])
        .expect("rectangular rows");
    assert_eq!(m.shape(), (2, 2));
    assert_eq!(m.get(0, 0), Some(5.0));
    assert_eq!(m.get(0, 1), None);
    assert_eq!(m.row(1), &[None, Some(2.0)]);
}

#[test]
fn test_from_rows_ragged_is_rejected() {
    let err = Matrix::from_rows(vec![vec![1.0_f64, 2.0], vec![3.0], vec![4.0, 5.0]])
        .expect_err("ragged rows must fail");
    let msg = err.to_string();
    assert!(msg.contains("row 1"), "unexpected message: {msg}");
}

#[test]
fn test_from_rows_empty_and_zero_width() {
    let empty: Matrix<f64> = Matrix::from_rows(Vec::new()).expect("no rows is valid");
    assert_eq!(empty.shape(), (0, 0));
    assert!(empty.is_empty());

    let narrow: Matrix<f64> =
        Matrix::from_rows(vec![Vec::new(), Vec::new()]).expect("zero-width rows are valid");
    assert_eq!(narrow.shape(), (2, 0));
    assert!(narrow.is_empty());
    assert!(narrow.row(1).is_empty());
    assert_eq!(narrow.rows().count(), 2);
}

#[test]
fn test_set_and_column() {
    let mut m = Matrix::<f64>::zeros(2, 2);
    m.set(1, 0, 3.5);
    assert_eq!(m.column(0), vec![0.0, 3.5]);
    assert_eq!(m.to_rows(), vec![vec![0.0, 0.0], vec![3.5, 0.0]]);
}

#[test]
fn test_map_keeps_shape() {
    let m = Matrix::from_rows(vec![vec![Some(1.0), None, Some(3.0)]]).expect("single row");
    let observed = m.map(|cell| cell.is_some());
    assert_eq!(observed.shape(), (1, 3));
    assert_eq!(observed.row(0), &[true, false, true]);
}

#[test]
fn test_is_symmetric() {
    let sym = Matrix::from_vec(2, 2, vec![0.0, 0.5, 0.5, 0.0]).expect("2x2");
    assert!(sym.is_symmetric());
    let asym = Matrix::from_vec(2, 2, vec![0.0, 0.5, 0.4, 0.0]).expect("2x2");
    assert!(!asym.is_symmetric());
    let wide = Matrix::<f64>::zeros(1, 2);
    assert!(!wide.is_symmetric());
}

#[test]
#[should_panic(expected = "out of bounds")]
fn test_get_column_out_of_bounds_panics() {
    let m = Matrix::<f64>::zeros(2, 2);
    let _ = m.get(0, 2);
}

#[test]
fn test_serde_nested_rows() {
    let m = Matrix::from_rows(vec![vec![Some(4.0), None]]).expect("single row");
    let json = serde_json::to_string(&m).expect("serialize");
    assert_eq!(json, "[[4.0,null]]");
    let back: Matrix<Option<f64>> = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, m);
}

#[test]
fn test_serde_rejects_ragged() {
    let result: std::result::Result<Matrix<f64>, _> = serde_json::from_str("[[1.0],[1.0,2.0]]");
    assert!(result.is_err());
}

#[test]
#[should_panic(expected = "row 2 out of bounds")]
fn test_get_row_out_of_bounds_panics() {
    let m = Matrix::<f64>::zeros(2, 2);
    let _ = m.get(2, 0);
}

#[test]
#[should_panic(expected = "row 3 out of bounds")]
fn test_set_row_out_of_bounds_panics() {
    let mut m = Matrix::<f64>::zeros(2, 2);
    m.set(3, 1, 1.0);
}
