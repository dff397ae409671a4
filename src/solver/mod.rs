//! Crout LU solvers for dense and tridiagonal systems.
//!
//! Three procedures are provided, each generic over the
//! [`Scalar`](crate::algebra::Scalar) domain:
//!
//! * [`solve_crout`] for general dense matrices.  An exactly zero pivot is
//!   a hard [`SolverError::ZeroPivot`] error.
//! * [`solve_crout_symmetric`] for symmetric positive definite matrices.
//!   A negligible or non-positive pivot is reported as
//!   [`SolveStatus::PivotFailure`].
//! * [`solve_crout_tridiagonal`] for tridiagonal matrices in O(n).
//!
//! None of them pivot, and none of them mutate their inputs.  The
//! [`CroutSolver`] object selects a procedure by [`Factorization`] and
//! optionally traces its work to a configurable print target.

mod crout;
mod driver;
mod error;
mod settings;
mod status;
mod tridiagonal;

pub use crout::{residual, solve_crout, solve_crout_symmetric};
pub use driver::*;
pub use error::*;
pub use settings::*;
pub use status::*;
pub use tridiagonal::*;

//configure tests of internals
#[cfg(test)]
mod tests;
