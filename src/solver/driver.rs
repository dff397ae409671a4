use super::{
    solve_crout, solve_crout_symmetric, solve_crout_tridiagonal, SolveResult, SolverError,
    SolverSettings,
};
use crate::algebra::{Matrix, Scalar};
use crate::codec::exp_str_reformat;
use crate::io::{ConfigurablePrintTarget, PrintTarget};
use std::fs::File;
use std::io::Write;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Selects one of the three Crout procedures.
#[derive(PartialEq, Eq, Clone, Debug, Copy, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Factorization {
    /// Dense matrix, exact zero pivot is an error
    #[default]
    General,
    /// Symmetric positive definite matrix, pivots checked
    Symmetric,
    /// Tridiagonal matrix, Thomas elimination
    Tridiagonal,
}

impl std::fmt::Display for Factorization {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = match self {
            Factorization::General => "general",
            Factorization::Symmetric => "symmetric",
            Factorization::Tridiagonal => "tridiagonal",
        };
        write!(f, "{name}")
    }
}

/// Solver object holding settings and the destination of its trace.
///
/// ```
/// use crout::algebra::Matrix;
/// use crout::solver::*;
///
/// let a = Matrix::from_rows(vec![vec![4.0, 0.0], vec![0.0, 9.0]]).unwrap();
/// let mut solver = CroutSolver::new(SolverSettings::default()).unwrap();
/// let result = solver.solve(Factorization::Symmetric, &a, &[8.0, 27.0]).unwrap();
/// assert_eq!(result.status, SolveStatus::Solved);
/// assert_eq!(result.x, vec![2.0, 3.0]);
/// ```
#[derive(Debug)]
pub struct CroutSolver {
    pub settings: SolverSettings,
    output: PrintTarget,
}

impl CroutSolver {
    pub fn new(settings: SolverSettings) -> Result<Self, SolverError> {
        settings.validate()?;
        Ok(Self {
            settings,
            output: PrintTarget::default(),
        })
    }

    /// Solves `Ax = b` with the selected procedure.
    ///
    /// A successful general solve is reported as
    /// [`SolveStatus::Solved`](super::SolveStatus::Solved); its zero pivot
    /// remains an error.
    pub fn solve<T: Scalar>(
        &mut self,
        factorization: Factorization,
        a: &Matrix<T>,
        b: &[T],
    ) -> Result<SolveResult<T>, SolverError> {
        self.print_configuration::<T>(factorization, a.size())?;

        let result = match factorization {
            Factorization::General => solve_crout(a, b).map(SolveResult::solved),
            Factorization::Symmetric => solve_crout_symmetric(a, b, &self.settings),
            Factorization::Tridiagonal => solve_crout_tridiagonal(a, b, &self.settings),
        };

        match &result {
            Ok(r) => self.print_status(&r.status.to_string())?,
            Err(e) => self.print_status(&format!("error ({e})"))?,
        }
        result
    }

    fn print_configuration<T: Scalar>(
        &mut self,
        factorization: Factorization,
        size: (usize, usize),
    ) -> std::io::Result<()> {
        if !self.settings.verbose {
            return Ok(());
        }
        let tol = exp_str_reformat(&format!("{:.1e}", self.settings.pivot_tolerance), 'e', 2);
        let out = &mut self.output;
        writeln!(out, "-------------------------------------------------------------")?;
        writeln!(out, "           crout v{}: dense and tridiagonal LU solver", crate::VERSION)?;
        writeln!(out, "-------------------------------------------------------------")?;
        writeln!(out, "factorization = {factorization}, domain = {}", T::DOMAIN)?;
        writeln!(out, "size          = {} x {}", size.0, size.1)?;
        writeln!(out, "pivot tol     = {tol}")?;
        out.flush()
    }

    fn print_status(&mut self, status: &str) -> std::io::Result<()> {
        if !self.settings.verbose {
            return Ok(());
        }
        writeln!(self.output, "status        = {status}")?;
        self.output.flush()
    }
}

impl ConfigurablePrintTarget for CroutSolver {
    fn print_to_stdout(&mut self) {
        self.output.print_to_stdout();
    }

    fn print_to_file(&mut self, file: File) {
        self.output.print_to_file(file);
    }

    fn print_to_stream(&mut self, stream: Box<dyn Write + Send + Sync>) {
        self.output.print_to_stream(stream);
    }

    fn print_to_sink(&mut self) {
        self.output.print_to_sink();
    }

    fn print_to_buffer(&mut self) {
        self.output.print_to_buffer();
    }

    fn get_print_buffer(&mut self) -> std::io::Result<String> {
        self.output.get_print_buffer()
    }
}
