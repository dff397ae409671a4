use super::SettingsError;
use crate::algebra::{ArithmeticError, MatrixError};
use crate::codec::ParseError;
use thiserror::Error;

/// Error type returned by the solvers and the text front end.
///
/// Pivot failures of the symmetric and tridiagonal solvers are not
/// errors; they are reported through
/// [`SolveStatus`](crate::solver::SolveStatus).
#[derive(Error, Debug)]
pub enum SolverError {
    /// Coefficient matrix is empty or not square
    #[error("coefficient matrix must be square and non-empty, found {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },
    /// Right hand side length differs from the matrix dimension
    #[error("right hand side has length {found}, expected {expected}")]
    DimensionMismatch { expected: usize, found: usize },
    /// Exact zero pivot in the general solver
    #[error("zero pivot at step {step}")]
    ZeroPivot { step: usize },
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),
    #[error(transparent)]
    Matrix(#[from] MatrixError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
    /// Unparsable matrix cell, 0-based position
    #[error("matrix cell at row {}, column {}: {source}", .row + 1, .col + 1)]
    Cell {
        row: usize,
        col: usize,
        #[source]
        source: ParseError,
    },
    /// Unparsable right hand side cell, 0-based position
    #[error("right hand side cell at row {}: {source}", .row + 1)]
    RhsCell {
        row: usize,
        #[source]
        source: ParseError,
    },
    /// Failure writing solver trace output
    #[error("failed to write solver output")]
    Io(#[from] std::io::Error),
}
