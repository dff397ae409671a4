use crate::algebra::*;
use crate::solver::*;

fn mat(rows: &[&[f64]]) -> Matrix<f64> {
    Matrix::from_rows(rows.iter().map(|r| r.to_vec()).collect()).unwrap()
}

fn prec() -> Precision {
    Precision::new(160).unwrap()
}

fn mp(v: f64) -> MpReal {
    MpReal::from_f64(v, prec()).unwrap()
}

fn dist(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y).abs())
        .fold(0.0, f64::max)
}

#[test]
fn test_diagonal_system_all_domains() {
    let a = mat(&[&[4., 0.], &[0., 9.]]);
    let b = [8., 27.];

    assert_eq!(solve_crout(&a, &b).unwrap(), vec![2., 3.]);
    let r = solve_crout_symmetric(&a, &b, &SolverSettings::default()).unwrap();
    assert_eq!(r, SolveResult::solved(vec![2., 3.]));

    let am = a.try_map(|_, v| MpReal::from_f64(*v, prec())).unwrap();
    let bm: Vec<_> = b.iter().map(|v| mp(*v)).collect();
    let x = solve_crout(&am, &bm).unwrap();
    assert_eq!(x, vec![mp(2.), mp(3.)]);

    let ai = a.try_map(|_, v| Interval::from_f64(*v, prec())).unwrap();
    let bi: Vec<_> = b.iter().map(|v| Interval::from_f64(*v, prec()).unwrap()).collect();
    let r = solve_crout_symmetric(&ai, &bi, &SolverSettings::default()).unwrap();
    assert!(r.is_solved());
    assert!(r.x[0].contains(&mp(2.)));
    assert!(r.x[1].contains(&mp(3.)));
}

#[test]
fn test_general_zero_pivot_is_error() {
    let a = mat(&[&[0., 1.], &[1., 0.]]);
    assert!(matches!(
        solve_crout(&a, &[1., 1.]),
        Err(SolverError::ZeroPivot { step: 1 })
    ));

    // singular, second pivot cancels exactly
    let a = mat(&[&[1., 1.], &[1., 1.]]);
    assert!(matches!(
        solve_crout(&a, &[1., 2.]),
        Err(SolverError::ZeroPivot { step: 2 })
    ));
}

#[test]
fn test_symmetric_pivot_failure() {
    let settings = SolverSettings::default();

    let a = mat(&[&[0., 1.], &[1., 0.]]);
    let r = solve_crout_symmetric(&a, &[1., 1.], &settings).unwrap();
    assert_eq!(r.status, SolveStatus::PivotFailure(1));
    assert_eq!(r.x, vec![0., 0.]);

    let a = mat(&[&[1., 1.], &[1., 1.]]);
    let r = solve_crout_symmetric(&a, &[1., 1.], &settings).unwrap();
    assert_eq!(r.status.failed_step(), Some(2));

    // negative pivot: general solver succeeds, symmetric one refuses
    let a = mat(&[&[-4., 0.], &[0., 9.]]);
    assert_eq!(solve_crout(&a, &[8., 27.]).unwrap(), vec![-2., 3.]);
    let r = solve_crout_symmetric(&a, &[8., 27.], &settings).unwrap();
    assert_eq!(r.status, SolveStatus::PivotFailure(1));

    // negligible pivot
    let a = mat(&[&[1e-25, 0.], &[0., 1.]]);
    assert!(solve_crout(&a, &[1., 1.]).is_ok());
    let r = solve_crout_symmetric(&a, &[1., 1.], &settings).unwrap();
    assert_eq!(r.status, SolveStatus::PivotFailure(1));

    // ... unless the tolerance allows it
    let loose = SolverSettingsBuilder::default()
        .pivot_tolerance(0.0)
        .build()
        .unwrap();
    assert!(solve_crout_symmetric(&a, &[1., 1.], &loose)
        .unwrap()
        .is_solved());
}

#[test]
fn test_reconstruction_diagonally_dominant() {
    let a = mat(&[
        &[10., 1., 2., 0.],
        &[3., 12., -1., 2.],
        &[0., 2., 9., 1.],
        &[1., -2., 3., 15.],
    ]);
    let xref = [1., -2., 0.5, 3.];
    let b = a.mul_vec(&xref).unwrap();

    let x = solve_crout(&a, &b).unwrap();
    assert!(dist(&x, &xref) <= 1e-12);
    let res = residual(&a, &x, &b).unwrap();
    assert!(res.iter().all(|r| r.abs() <= 1e-12));
}

#[test]
fn test_spd_reconstruction() {
    let a = mat(&[&[4., 1., 0.5], &[1., 3., 0.25], &[0.5, 0.25, 2.]]);
    assert!(a.is_symmetric());
    let b = [1., 2., 3.];
    let r = solve_crout_symmetric(&a, &b, &SolverSettings::default()).unwrap();
    assert!(r.is_solved());
    let x = solve_crout(&a, &b).unwrap();
    assert!(dist(&r.x, &x) <= 1e-15);
}

#[test]
fn test_mpreal_exact_solution() {
    let rows = vec![vec![mp(2.), mp(1.)], vec![mp(1.), mp(3.)]];
    let a = Matrix::from_rows(rows).unwrap();
    let b = [mp(3.), mp(4.)];
    let x = solve_crout(&a, &b).unwrap();
    assert_eq!(x, vec![mp(1.), mp(1.)]);
    let res = residual(&a, &x, &b).unwrap();
    assert!(res.iter().all(MpReal::is_zero));
}

#[test]
fn test_interval_residual_encloses_zero() {
    let p = prec();
    let a = Matrix::from_fn((3, 3), |r, c| {
        let v = 1.0 / (r + c + 1) as f64 + if r == c { 1.0 } else { 0.0 };
        Interval::from_f64(v, p).unwrap()
    });
    let b: Vec<_> = (0..3).map(|i| Interval::point(MpReal::from_i64(i + 1, p))).collect();

    let x = solve_crout(&a, &b).unwrap();
    let res = residual(&a, &x, &b).unwrap();
    assert!(res.iter().all(Interval::contains_zero));
}

#[test]
fn test_interval_pivot_containing_zero_is_error() {
    let p = prec();
    let wide = Interval::new(MpReal::from_i64(-1, p), MpReal::from_i64(1, p)).unwrap();
    let one = Interval::one(p);
    let a = Matrix::from_rows(vec![vec![wide, one.clone()], vec![one.clone(), one.clone()]])
        .unwrap();
    let b = [one.clone(), one];
    assert!(matches!(
        solve_crout(&a, &b),
        Err(SolverError::Arithmetic(
            ArithmeticError::DivisionByZeroInterval
        ))
    ));
    // not positive, so the symmetric solver reports a pivot failure
    let r = solve_crout_symmetric(&a, &b, &SolverSettings::default()).unwrap();
    assert_eq!(r.status, SolveStatus::PivotFailure(1));
}

#[test]
fn test_inputs_not_mutated_and_idempotent() {
    let a = mat(&[&[5., 2.], &[2., 6.]]);
    let b = vec![1., -1.];
    let (a0, b0) = (a.clone(), b.clone());

    let x1 = solve_crout(&a, &b).unwrap();
    let x2 = solve_crout(&a, &b).unwrap();
    assert_eq!(x1, x2);
    assert_eq!(a, a0);
    assert_eq!(b, b0);
}

#[test]
fn test_dimension_checks() {
    let a = Matrix::new_from_slice((2, 3), &[1.; 6]).unwrap();
    assert!(matches!(
        solve_crout(&a, &[1., 1.]),
        Err(SolverError::NotSquare { rows: 2, cols: 3 })
    ));

    let empty = Matrix::<f64> {
        m: 0,
        n: 0,
        data: vec![],
    };
    assert!(matches!(
        solve_crout(&empty, &[]),
        Err(SolverError::NotSquare { .. })
    ));

    let a = mat(&[&[1., 0.], &[0., 1.]]);
    assert!(matches!(
        solve_crout_symmetric(&a, &[1.], &SolverSettings::default()),
        Err(SolverError::DimensionMismatch {
            expected: 2,
            found: 1
        })
    ));
    assert!(residual(&a, &[1., 1.], &[1.]).is_err());
}
