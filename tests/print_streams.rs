use crout::{algebra::*, io::ConfigurablePrintTarget, solver::*};

fn test_print_solver() -> (CroutSolver, Matrix<f64>, Vec<f64>) {
    let a = Matrix::identity(2, &());
    let b = vec![1., 2.];
    let settings = SolverSettingsBuilder::default()
        .verbose(true)
        .build()
        .unwrap();
    (CroutSolver::new(settings).unwrap(), a, b)
}

#[test]
fn test_print_to_stdout() {
    let (mut solver, a, b) = test_print_solver();
    solver.print_to_stdout();
    solver.solve(Factorization::General, &a, &b).unwrap();
}

#[test]
fn test_print_to_buffer() {
    let (mut solver, a, b) = test_print_solver();
    solver.print_to_buffer();
    solver.solve(Factorization::General, &a, &b).unwrap();
    let result = solver.get_print_buffer().unwrap();
    assert!(result.contains("crout v"));
    assert!(result.contains("status        = solved"));
}

#[test]
fn test_print_to_file() {
    use std::io::{Read, Seek};

    let (mut solver, a, b) = test_print_solver();
    let file = tempfile::NamedTempFile::new().unwrap();
    let mut file2 = file.reopen().unwrap();
    solver.print_to_file(file.into_file());
    solver.solve(Factorization::Tridiagonal, &a, &b).unwrap();

    file2.seek(std::io::SeekFrom::Start(0)).unwrap();
    let mut result = String::new();
    file2.read_to_string(&mut result).unwrap();
    assert!(result.contains("factorization = tridiagonal"));
}

#[test]
fn test_print_to_stream() {
    use std::io::{Read, Seek};

    let (mut solver, a, b) = test_print_solver();
    let file = tempfile::NamedTempFile::new().unwrap();
    let mut file2 = file.reopen().unwrap();
    let stream = Box::new(file.into_file());

    solver.print_to_stream(stream);
    solver.solve(Factorization::Symmetric, &a, &b).unwrap();

    file2.seek(std::io::SeekFrom::Start(0)).unwrap();
    let mut result = String::new();
    file2.read_to_string(&mut result).unwrap();
    assert!(result.contains("factorization = symmetric"));
}

#[test]
fn test_print_to_sink() {
    let (mut solver, a, b) = test_print_solver();
    solver.print_to_sink();
    solver.solve(Factorization::General, &a, &b).unwrap();
    // no output
    assert!(solver.get_print_buffer().is_err());
}
