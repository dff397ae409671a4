//! Dense Crout factorization `A = LU` with unit diagonal `U`.

use super::{SolveResult, SolverError, SolverSettings};
use crate::algebra::{Matrix, Scalar};

/// Outcome of the factorization loop.
enum Factors<T> {
    /// Compact storage: `L` on and below the diagonal, the strictly upper
    /// part of the unit upper triangular `U` above it.
    Complete(Matrix<T>),
    /// Pivot rejected at the given 1-based step.
    Rejected(usize),
}

/// Checks that `a` is a non-empty square matrix matching `b`, and
/// returns its dimension.
pub(crate) fn check_dimensions<T>(a: &Matrix<T>, b: &[T]) -> Result<usize, SolverError> {
    let (m, n) = a.size();
    if m != n || n == 0 {
        return Err(SolverError::NotSquare { rows: m, cols: n });
    }
    if b.len() != n {
        return Err(SolverError::DimensionMismatch {
            expected: n,
            found: b.len(),
        });
    }
    Ok(n)
}

// Column by column Crout elimination.  `accept` is called on each pivot
// `L[j][j]` as soon as it is known and may stop the factorization.
fn factor<T: Scalar>(
    a: &Matrix<T>,
    mut accept: impl FnMut(&T, usize) -> Result<bool, SolverError>,
) -> Result<Factors<T>, SolverError> {
    let n = a.nrows();
    let ctx = a[(0, 0)].context();
    let mut lu: Matrix<T> = Matrix::zeros((n, n), &ctx);

    for j in 0..n {
        // column j of L
        for i in j..n {
            let mut s = a[(i, j)].clone();
            for k in 0..j {
                s = s - lu[(i, k)].clone() * lu[(k, j)].clone();
            }
            lu[(i, j)] = s;
        }

        if !accept(&lu[(j, j)], j + 1)? {
            return Ok(Factors::Rejected(j + 1));
        }

        // row j of U
        for i in (j + 1)..n {
            let mut s = a[(j, i)].clone();
            for k in 0..j {
                s = s - lu[(j, k)].clone() * lu[(k, i)].clone();
            }
            lu[(j, i)] = s.checked_div(&lu[(j, j)])?;
        }
    }
    Ok(Factors::Complete(lu))
}

// Solves `Ly = b` then `Ux = y` on compact factors.
fn substitute<T: Scalar>(lu: &Matrix<T>, b: &[T]) -> Result<Vec<T>, SolverError> {
    let n = lu.nrows();

    let mut y: Vec<T> = Vec::with_capacity(n);
    for i in 0..n {
        let mut s = b[i].clone();
        for (k, yk) in y.iter().enumerate() {
            s = s - lu[(i, k)].clone() * yk.clone();
        }
        y.push(s.checked_div(&lu[(i, i)])?);
    }

    let mut x = y;
    for i in (0..n).rev() {
        let mut s = x[i].clone();
        for k in (i + 1)..n {
            s = s - lu[(i, k)].clone() * x[k].clone();
        }
        x[i] = s;
    }
    Ok(x)
}

/// Solves `Ax = b` by Crout factorization without pivoting.
///
/// An exactly zero pivot is a hard [`SolverError::ZeroPivot`] error.
/// Pivots that are merely tiny are accepted, so the result of an
/// ill-conditioned system may be inaccurate.
pub fn solve_crout<T: Scalar>(a: &Matrix<T>, b: &[T]) -> Result<Vec<T>, SolverError> {
    check_dimensions(a, b)?;
    let accept = |pivot: &T, step: usize| -> Result<bool, SolverError> {
        if pivot.is_zero() {
            Err(SolverError::ZeroPivot { step })
        } else {
            Ok(true)
        }
    };
    match factor(a, accept)? {
        Factors::Complete(lu) => substitute(&lu, b),
        Factors::Rejected(step) => Err(SolverError::ZeroPivot { step }),
    }
}

/// Solves `Ax = b` for a symmetric positive definite `A`.
///
/// Each pivot must be positive and not negligible with respect to
/// `settings.pivot_tolerance`.  Otherwise the result carries
/// [`SolveStatus::PivotFailure`](super::SolveStatus::PivotFailure) and a
/// zero solution.  Symmetry of `A` is assumed, not checked.
pub fn solve_crout_symmetric<T: Scalar>(
    a: &Matrix<T>,
    b: &[T],
    settings: &SolverSettings,
) -> Result<SolveResult<T>, SolverError> {
    let n = check_dimensions(a, b)?;
    let eps = settings.pivot_tolerance;
    let accept = |pivot: &T, _step: usize| -> Result<bool, SolverError> {
        Ok(pivot.is_positive() && !pivot.is_negligible(eps))
    };
    match factor(a, accept)? {
        Factors::Complete(lu) => Ok(SolveResult::solved(substitute(&lu, b)?)),
        Factors::Rejected(step) => Ok(SolveResult::pivot_failure(
            n,
            step,
            &a[(0, 0)].context(),
        )),
    }
}

/// Residual `A·x − b`.
pub fn residual<T: Scalar>(a: &Matrix<T>, x: &[T], b: &[T]) -> Result<Vec<T>, SolverError> {
    if b.len() != a.nrows() {
        return Err(SolverError::DimensionMismatch {
            expected: a.nrows(),
            found: b.len(),
        });
    }
    let ax = a.mul_vec(x)?;
    Ok(ax
        .into_iter()
        .zip(b.iter())
        .map(|(axi, bi)| axi - bi.clone())
        .collect())
}
