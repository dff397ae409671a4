use crate::algebra::Scalar;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Status of a solve at termination

#[derive(PartialEq, Eq, Clone, Debug, Copy, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SolveStatus {
    /// Factorization and substitution completed.
    #[default]
    Solved,
    /// A pivot was negligible (or not positive, for the symmetric
    /// solver) at the given 1-based elimination step.
    PivotFailure(usize),
}

impl SolveStatus {
    pub fn is_solved(&self) -> bool {
        matches!(self, SolveStatus::Solved)
    }

    /// 1-based step of a pivot failure, if any.
    pub fn failed_step(&self) -> Option<usize> {
        match self {
            SolveStatus::Solved => None,
            SolveStatus::PivotFailure(step) => Some(*step),
        }
    }
}

impl std::fmt::Display for SolveStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            SolveStatus::Solved => write!(f, "solved"),
            SolveStatus::PivotFailure(step) => write!(f, "pivot failure at step {step}"),
        }
    }
}

/// Solution vector and termination status.  On a pivot failure the
/// solution is zero filled.
#[derive(Debug, Clone, PartialEq)]
pub struct SolveResult<T> {
    pub x: Vec<T>,
    pub status: SolveStatus,
}

impl<T: Scalar> SolveResult<T> {
    pub(crate) fn solved(x: Vec<T>) -> Self {
        Self {
            x,
            status: SolveStatus::Solved,
        }
    }

    pub(crate) fn pivot_failure(n: usize, step: usize, ctx: &T::Context) -> Self {
        Self {
            x: vec![T::zero(ctx); n],
            status: SolveStatus::PivotFailure(step),
        }
    }

    pub fn is_solved(&self) -> bool {
        self.status.is_solved()
    }
}
