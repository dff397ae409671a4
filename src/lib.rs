//! __crout__ solves small linear systems
//!
//! $$
//! Ax = b
//! $$
//!
//! by Crout LU factorization, in which $A = LU$ with $L$ lower triangular and
//! $U$ unit upper triangular.  The solvers are generic over the number
//! domain and come with three of them:
//!
//! * native floating point (`f64`, `f32`),
//! * [`MpReal`](algebra::MpReal), software binary floats of any
//!   [`Precision`](algebra::Precision) with explicit rounding modes,
//! * [`Interval`](algebra::Interval), validated enclosures with outward
//!   rounding, so that the computed solution is guaranteed to contain the
//!   exact solution of the system given by the interval midpoints.
//!
//! ## Solvers
//!
//! * [`solve_crout`](solver::solve_crout): general dense matrices.  No
//!   pivoting is performed and an exactly zero pivot is an error.
//! * [`solve_crout_symmetric`](solver::solve_crout_symmetric): symmetric
//!   positive definite matrices.  Negligible or non-positive pivots are
//!   reported as [`SolveStatus::PivotFailure`](solver::SolveStatus) with
//!   the 1-based elimination step.
//! * [`solve_crout_tridiagonal`](solver::solve_crout_tridiagonal):
//!   tridiagonal matrices in O(n).
//!
//! ## Text input and output
//!
//! The [`codec`] module reads decimal literals exactly before rounding them
//! into a domain, and prints values in fixed or scientific notation.  The
//! [`frontend`] module builds on it to solve a system given as a grid of
//! text cells and to render the solution.
//!
//! ## Working precision
//!
//! Precision is always passed explicitly.  The default used by
//! [`CodecSettings`](codec::CodecSettings) is 256 bits, or the value of the
//! `CROUT_PRECISION_BITS` environment variable at the time the default is
//! first requested.
//!
//! # License
//!
//! Licensed under Apache License, Version 2.0.

pub(crate) const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod algebra;
pub mod codec;
pub mod frontend;
pub mod io;
pub mod solver;
