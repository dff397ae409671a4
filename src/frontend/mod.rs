//! Text in, text out.
//!
//! A host program that collects the coefficients of `Ax = b` as decimal
//! text (one string per cell) hands them over as a [`TextSystem`].
//! [`solve_text`] parses the cells in the selected [`ScalarDomain`], runs
//! the selected [`Factorization`] and returns a [`SolveReport`] that
//! renders one line per unknown.
//!
//! ```
//! use crout::codec::CodecSettings;
//! use crout::frontend::*;
//! use crout::solver::{Factorization, SolverSettings};
//!
//! let system = TextSystem::new(
//!     vec![vec!["4", "0"], vec!["0", "9"]],
//!     vec!["8", "27"],
//! );
//! let report = solve_text(
//!     &system,
//!     ScalarDomain::Float,
//!     Factorization::Symmetric,
//!     &SolverSettings::default(),
//!     &CodecSettings::default(),
//! )
//! .unwrap();
//! assert_eq!(report.to_string(), "x[1] = 2.000000\nx[2] = 3.000000\n");
//! ```

use crate::algebra::{Interval, Matrix, MpReal, Scalar};
use crate::codec::{CodecSettings, TextCodec};
use crate::solver::{CroutSolver, Factorization, SolveResult, SolveStatus, SolverError, SolverSettings};
use enum_dispatch::*;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "serde")]
mod json;
#[cfg(feature = "serde")]
pub use json::*;

/// Linear system as a grid of decimal text cells.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TextSystem {
    /// rows of the coefficient matrix
    pub matrix: Vec<Vec<String>>,
    /// right hand side, one cell per row
    pub rhs: Vec<String>,
}

impl TextSystem {
    pub fn new<S: Into<String>>(matrix: Vec<Vec<S>>, rhs: Vec<S>) -> Self {
        Self {
            matrix: matrix
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
            rhs: rhs.into_iter().map(Into::into).collect(),
        }
    }

    /// Parses every cell as a `T`.  Errors name the offending cell.
    pub fn parse<T: TextCodec>(
        &self,
        settings: &CodecSettings,
    ) -> Result<(Matrix<T>, Vec<T>), SolverError> {
        // cells are parsed in reading order, so the first bad one is reported
        let rows = self
            .matrix
            .iter()
            .enumerate()
            .map(|(row, cols)| {
                cols.iter()
                    .enumerate()
                    .map(|(col, text)| {
                        T::parse_text(text, settings)
                            .map_err(|source| SolverError::Cell { row, col, source })
                    })
                    .collect::<Result<Vec<T>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        let a = Matrix::from_rows(rows)?;
        if self.rhs.len() != a.nrows() {
            return Err(SolverError::DimensionMismatch {
                expected: a.nrows(),
                found: self.rhs.len(),
            });
        }

        let b = self
            .rhs
            .iter()
            .enumerate()
            .map(|(row, text)| {
                T::parse_text(text, settings).map_err(|source| SolverError::RhsCell { row, source })
            })
            .collect::<Result<Vec<T>, _>>()?;
        Ok((a, b))
    }
}

/// Number domain in which a [`TextSystem`] is solved.
#[derive(PartialEq, Eq, Clone, Debug, Copy, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ScalarDomain {
    /// native `f64`
    #[default]
    Float,
    /// [`MpReal`] at the configured precision
    Precision,
    /// [`Interval`] enclosures at the configured precision
    Interval,
}

impl std::fmt::Display for ScalarDomain {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = match self {
            ScalarDomain::Float => "float",
            ScalarDomain::Precision => "precision",
            ScalarDomain::Interval => "interval",
        };
        write!(f, "{name}")
    }
}

impl FromStr for ScalarDomain {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "float" | "f64" | "double" => Ok(ScalarDomain::Float),
            "precision" | "mpreal" => Ok(ScalarDomain::Precision),
            "interval" => Ok(ScalarDomain::Interval),
            _ => Err(format!("unknown scalar domain {s:?}")),
        }
    }
}

pub type FloatSolution = SolveResult<f64>;
pub type PrecisionSolution = SolveResult<MpReal>;
pub type IntervalSolution = SolveResult<Interval>;

/// Rendering of a solution in any domain.
#[enum_dispatch]
pub trait RenderSolution {
    fn solve_status(&self) -> SolveStatus;

    /// One `x[i] = ...` line per unknown, 1-based.
    fn render_lines(&self, settings: &CodecSettings) -> Vec<String>;
}

impl<T> RenderSolution for SolveResult<T>
where
    T: Scalar + TextCodec,
{
    fn solve_status(&self) -> SolveStatus {
        self.status
    }

    fn render_lines(&self, settings: &CodecSettings) -> Vec<String> {
        self.x
            .iter()
            .enumerate()
            .map(|(i, xi)| format!("x[{}] = {}", i + 1, xi.format_text(settings)))
            .collect()
    }
}

/// Solution in the domain it was computed in.
#[enum_dispatch(RenderSolution)]
#[derive(Debug, Clone, PartialEq)]
pub enum DomainSolution {
    Float(FloatSolution),
    Precision(PrecisionSolution),
    Interval(IntervalSolution),
}

impl DomainSolution {
    pub fn domain(&self) -> ScalarDomain {
        match self {
            DomainSolution::Float(_) => ScalarDomain::Float,
            DomainSolution::Precision(_) => ScalarDomain::Precision,
            DomainSolution::Interval(_) => ScalarDomain::Interval,
        }
    }
}

/// Result of [`solve_text`], ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct SolveReport {
    pub factorization: Factorization,
    pub solution: DomainSolution,
    codec: CodecSettings,
}

impl SolveReport {
    pub fn status(&self) -> SolveStatus {
        self.solution.solve_status()
    }

    /// Display lines: the solution, or a single line naming the failed
    /// pivot step.
    pub fn lines(&self) -> Vec<String> {
        match self.status() {
            SolveStatus::Solved => self.solution.render_lines(&self.codec),
            SolveStatus::PivotFailure(step) => {
                vec![format!("singular system: zero pivot at step {step}")]
            }
        }
    }
}

impl std::fmt::Display for SolveReport {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for line in self.lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

fn solve_in<T>(
    solver: &mut CroutSolver,
    system: &TextSystem,
    factorization: Factorization,
    codec: &CodecSettings,
) -> Result<SolveResult<T>, SolverError>
where
    T: Scalar + TextCodec,
{
    let (a, b) = system.parse::<T>(codec)?;
    solver.solve(factorization, &a, &b)
}

/// Parses `system` in `domain`, solves it and wraps the result for
/// display.
///
/// Malformed cells, inconsistent dimensions, an exact zero pivot in the
/// general solver and arithmetic failures are errors.  Pivot failures of
/// the symmetric and tridiagonal solvers are reported in the
/// [`SolveReport`].
pub fn solve_text(
    system: &TextSystem,
    domain: ScalarDomain,
    factorization: Factorization,
    settings: &SolverSettings,
    codec: &CodecSettings,
) -> Result<SolveReport, SolverError> {
    codec.validate()?;
    let mut solver = CroutSolver::new(settings.clone())?;

    let solution: DomainSolution = match domain {
        ScalarDomain::Float => solve_in::<f64>(&mut solver, system, factorization, codec)?.into(),
        ScalarDomain::Precision => {
            solve_in::<MpReal>(&mut solver, system, factorization, codec)?.into()
        }
        ScalarDomain::Interval => {
            solve_in::<Interval>(&mut solver, system, factorization, codec)?.into()
        }
    };

    Ok(SolveReport {
        factorization,
        solution,
        codec: codec.clone(),
    })
}

/// Message for a failed [`solve_text`] call, for display next to the
/// report of successful calls.
pub fn render_error(error: &SolverError) -> String {
    match error {
        SolverError::ZeroPivot { step } => {
            format!("singular system: zero pivot at step {step}")
        }
        e => format!("error: {e}"),
    }
}
