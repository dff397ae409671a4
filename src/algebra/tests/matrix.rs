#![allow(non_snake_case)]
use crate::algebra::*;
use itertools::iproduct;

fn test_matrix_3x3() -> Matrix<f64> {
    // A =
    //[ 4.0  -1.0   0.0]
    //[-1.0   4.0  -1.0]
    //[ 0.0  -1.0   4.0]
    Matrix::from_rows(vec![
        vec![4., -1., 0.],
        vec![-1., 4., -1.],
        vec![0., -1., 4.],
    ])
    .unwrap()
}

#[test]
fn test_from_rows_is_column_major() {
    let A = Matrix::from_rows(vec![vec![1., 2.], vec![3., 4.]]).unwrap();
    assert_eq!(A.data, vec![1., 3., 2., 4.]);
    assert_eq!(A[(0, 1)], 2.);
    assert_eq!(A[(1, 0)], 3.);
    assert_eq!(A.row(1), vec![3., 4.]);
}

#[test]
fn test_from_rows_errors() {
    assert_eq!(
        Matrix::<f64>::from_rows(vec![]).unwrap_err(),
        MatrixError::Empty
    );
    assert_eq!(
        Matrix::from_rows(vec![vec![1., 2.], vec![3.]]).unwrap_err(),
        MatrixError::RaggedRow {
            row: 1,
            found: 1,
            expected: 2
        }
    );
}

#[test]
fn test_from_fn_and_identity() {
    let I = Matrix::<f64>::identity(3, &());
    for (r, c) in iproduct!(0..3, 0..3) {
        assert_eq!(I[(r, c)], if r == c { 1. } else { 0. });
    }
    let B = Matrix::from_fn((2, 3), |r, c| (10 * r + c) as f64);
    assert_eq!(B.size(), (2, 3));
    assert_eq!(B[(1, 2)], 12.);
    assert!(!B.is_square());
}

#[test]
fn test_new_from_slice() {
    assert!(Matrix::new_from_slice((2, 2), &[1., 2., 3.]).is_err());
    let A = Matrix::new_from_slice((2, 2), &[1., 2., 3., 4.]).unwrap();
    assert_eq!(A[(1, 0)], 2.);
}

#[test]
fn test_structure_checks() {
    let mut A = test_matrix_3x3();
    assert!(A.is_symmetric());
    assert!(A.is_tridiagonal());
    A[(0, 2)] = 1.;
    assert!(!A.is_symmetric());
    assert!(!A.is_tridiagonal());
}

#[test]
fn test_mul_vec() {
    let A = test_matrix_3x3();
    let y = A.mul_vec(&[1., 2., 3.]).unwrap();
    assert_eq!(y, vec![2., 4., 10.]);
    assert!(A.mul_vec(&[1., 2.]).is_err());
}

#[test]
fn test_try_map_reports_position() {
    let A = test_matrix_3x3();
    let r: Result<Matrix<f64>, (usize, usize)> =
        A.try_map(|pos, &v| if v > 3. && pos.0 == 1 { Err(pos) } else { Ok(v) });
    assert_eq!(r.unwrap_err(), (1, 1));

    let p = Precision::new(64).unwrap();
    let M = A
        .try_map(|_, &v| MpReal::from_f64(v, p))
        .unwrap();
    assert_eq!(M[(2, 1)].to_f64(), -1.);
}
