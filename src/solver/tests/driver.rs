use crate::algebra::*;
use crate::io::ConfigurablePrintTarget;
use crate::solver::*;

fn verbose_solver() -> CroutSolver {
    let settings = SolverSettingsBuilder::default()
        .verbose(true)
        .build()
        .unwrap();
    let mut solver = CroutSolver::new(settings).unwrap();
    solver.print_to_buffer();
    solver
}

#[test]
fn test_dispatch() {
    let a: Matrix<f64> = Matrix::from_rows(vec![vec![2., -1.], vec![-1., 2.]]).unwrap();
    let b = [1., 1.];
    let mut solver = CroutSolver::new(SolverSettings::default()).unwrap();
    for f in [
        Factorization::General,
        Factorization::Symmetric,
        Factorization::Tridiagonal,
    ] {
        let r = solver.solve(f, &a, &b).unwrap();
        assert_eq!(r.status, SolveStatus::Solved);
        assert!(r.x.iter().all(|x| (x - 1.0_f64).abs() <= 1e-15), "{f}");
    }
}

#[test]
fn test_new_rejects_bad_settings() {
    let settings = SolverSettings {
        pivot_tolerance: -1.,
        ..SolverSettings::default()
    };
    assert!(matches!(
        CroutSolver::new(settings),
        Err(SolverError::Settings(_))
    ));
}

#[test]
fn test_verbose_trace() {
    let mut solver = verbose_solver();
    let a = Matrix::from_rows(vec![vec![0., 1.], vec![1., 0.]]).unwrap();

    let r = solver.solve(Factorization::Symmetric, &a, &[1., 1.]).unwrap();
    assert_eq!(r.status, SolveStatus::PivotFailure(1));

    let trace = solver.get_print_buffer().unwrap();
    assert!(trace.contains("factorization = symmetric, domain = f64"));
    assert!(trace.contains("size          = 2 x 2"));
    assert!(trace.contains("pivot tol     = 1.0e-20"));
    assert!(trace.contains("status        = pivot failure at step 1"));

    solver.print_to_buffer();
    assert!(solver.solve(Factorization::General, &a, &[1., 1.]).is_err());
    let trace = solver.get_print_buffer().unwrap();
    assert!(trace.contains("status        = error (zero pivot at step 1)"));
}

#[test]
fn test_quiet_by_default() {
    let mut solver = CroutSolver::new(SolverSettings::default()).unwrap();
    solver.print_to_buffer();
    let p = Precision::new(64).unwrap();
    let a: Matrix<MpReal> = Matrix::identity(2, &p);
    let b = vec![MpReal::one(p); 2];
    let r: SolveResult<MpReal> = solver.solve(Factorization::General, &a, &b).unwrap();
    assert_eq!(r.x, b);
    assert_eq!(solver.get_print_buffer().unwrap(), "");
}
