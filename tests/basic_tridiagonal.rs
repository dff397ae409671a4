#![allow(non_snake_case)]

use crout::{algebra::*, solver::*};

fn second_difference(n: usize) -> Matrix<f64> {
    tridiagonal_matrix(&vec![-1.; n - 1], &vec![2.; n], &vec![-1.; n - 1]).unwrap()
}

#[test]
fn test_tridiagonal_scenario() {
    let A = Matrix::from_rows(vec![
        vec![2., -1., 0.],
        vec![-1., 2., -1.],
        vec![0., -1., 2.],
    ])
    .unwrap();
    assert_eq!(A, second_difference(3));

    let r = solve_crout_tridiagonal(&A, &[1., 0., 1.], &SolverSettings::default()).unwrap();
    assert_eq!(r.status, SolveStatus::Solved);
    for xi in &r.x {
        assert!((xi - 1.).abs() <= 1e-14);
    }
}

#[test]
fn test_tridiagonal_large() {
    let n = 200;
    let A = second_difference(n);
    let xref: Vec<f64> = (0..n).map(|i| ((i + 1) as f64).sqrt()).collect();
    let b = A.mul_vec(&xref).unwrap();

    let r = solve_crout_tridiagonal(&A, &b, &SolverSettings::default()).unwrap();
    assert!(r.is_solved());
    let res = residual(&A, &r.x, &b).unwrap();
    assert!(res.iter().all(|ri| ri.abs() <= 1e-8));
}

#[test]
fn test_tridiagonal_all_domains_agree() {
    let p = Precision::new(128).unwrap();
    let A = second_difference(5);
    let b = [1., 2., 3., 2., 1.];

    let xf = solve_crout_tridiagonal(&A, &b, &SolverSettings::default())
        .unwrap()
        .x;

    let Am = A.try_map(|_, v| MpReal::from_f64(*v, p)).unwrap();
    let bm: Vec<_> = b.iter().map(|v| MpReal::from_f64(*v, p).unwrap()).collect();
    let xm = solve_crout_tridiagonal(&Am, &bm, &SolverSettings::default())
        .unwrap()
        .x;

    let Ai = A.try_map(|_, v| Interval::from_f64(*v, p)).unwrap();
    let bi: Vec<_> = b.iter().map(|v| Interval::from_f64(*v, p).unwrap()).collect();
    let xi = solve_crout_tridiagonal(&Ai, &bi, &SolverSettings::default())
        .unwrap()
        .x;

    for k in 0..5 {
        assert!((xm[k].to_f64() - xf[k]).abs() <= 1e-13);
        assert!(xi[k].contains(&xm[k]));
    }
}

#[test]
fn test_tridiagonal_pivot_failure_reported() {
    let A = tridiagonal_matrix(&[1., 1.], &[2., 0.5, 4.], &[1., 1.]).unwrap();
    // l[1] = 0.5 - 1 * 0.5 = 0
    let r = solve_crout_tridiagonal(&A, &[1., 1., 1.], &SolverSettings::default()).unwrap();
    assert_eq!(r.status, SolveStatus::PivotFailure(2));
    assert_eq!(r.x, vec![0.; 3]);

    // the dense solver stops at the same step
    assert!(matches!(
        solve_crout(&A, &[1., 1., 1.]),
        Err(SolverError::ZeroPivot { step: 2 })
    ));
}

#[test]
fn test_tridiagonal_dimension_checks() {
    let A = second_difference(3);
    assert!(matches!(
        solve_crout_tridiagonal(&A, &[1., 1.], &SolverSettings::default()),
        Err(SolverError::DimensionMismatch { .. })
    ));
}
