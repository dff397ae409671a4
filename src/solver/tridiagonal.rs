use super::crout::check_dimensions;
use super::{SolveResult, SolverError, SolverSettings};
use crate::algebra::{Matrix, Scalar};
use itertools::izip;

/// Solves `Ax = b` for a tridiagonal `A` in O(n) time.
///
/// Only the sub, main and super diagonals of `A` are read; every other
/// entry is ignored.  A diagonal factor `l[i]` that is negligible with
/// respect to `settings.pivot_tolerance` yields
/// [`SolveStatus::PivotFailure`](super::SolveStatus::PivotFailure) at step
/// `i + 1` and a zero solution.
pub fn solve_crout_tridiagonal<T: Scalar>(
    a: &Matrix<T>,
    b: &[T],
    settings: &SolverSettings,
) -> Result<SolveResult<T>, SolverError> {
    let n = check_dimensions(a, b)?;
    let eps = settings.pivot_tolerance;
    let ctx = a[(0, 0)].context();

    // sub[0] and sup[n-1] are outside the matrix and never used
    let mut sub = Vec::with_capacity(n);
    let mut diag = Vec::with_capacity(n);
    let mut sup = Vec::with_capacity(n);
    for i in 0..n {
        sub.push(if i > 0 { a[(i, i - 1)].clone() } else { T::zero(&ctx) });
        diag.push(a[(i, i)].clone());
        sup.push(if i + 1 < n { a[(i, i + 1)].clone() } else { T::zero(&ctx) });
    }

    // forward elimination, u[i] = c[i] / l[i]
    let mut u: Vec<T> = Vec::with_capacity(n - 1);
    let mut y: Vec<T> = Vec::with_capacity(n);
    for (i, (ai, di, ci, bi)) in izip!(&sub, &diag, &sup, b).enumerate() {
        let (li, rhs) = match i {
            0 => (di.clone(), bi.clone()),
            _ => (
                di.clone() - ai.clone() * u[i - 1].clone(),
                bi.clone() - ai.clone() * y[i - 1].clone(),
            ),
        };
        if li.is_negligible(eps) {
            return Ok(SolveResult::pivot_failure(n, i + 1, &ctx));
        }
        if i + 1 < n {
            u.push(ci.checked_div(&li)?);
        }
        y.push(rhs.checked_div(&li)?);
    }

    // back substitution
    let mut x = y;
    for i in (0..n - 1).rev() {
        x[i] = x[i].clone() - u[i].clone() * x[i + 1].clone();
    }
    Ok(SolveResult::solved(x))
}

/// Builds the tridiagonal matrix with sub diagonal `sub`, main diagonal
/// `diag` and super diagonal `sup`.
pub fn tridiagonal_matrix<T: Scalar>(
    sub: &[T],
    diag: &[T],
    sup: &[T],
) -> Result<Matrix<T>, SolverError> {
    let n = diag.len();
    if n == 0 {
        return Err(SolverError::NotSquare { rows: 0, cols: 0 });
    }
    if sub.len() + 1 != n || sup.len() + 1 != n {
        return Err(SolverError::DimensionMismatch {
            expected: n - 1,
            found: if sub.len() + 1 != n { sub.len() } else { sup.len() },
        });
    }
    let ctx = diag[0].context();
    let mut a: Matrix<T> = Matrix::zeros((n, n), &ctx);
    for (i, d) in diag.iter().enumerate() {
        a[(i, i)] = d.clone();
    }
    for (i, (s, c)) in sub.iter().zip(sup).enumerate() {
        a[(i + 1, i)] = s.clone();
        a[(i, i + 1)] = c.clone();
    }
    Ok(a)
}
