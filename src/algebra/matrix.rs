use super::{MatrixError, Scalar};
use std::ops::{Index, IndexMut};

/// Dense matrix in column major format.
///
/// Entries are addressed by `(row, col)` tuples.  The shape is fixed at
/// construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    /// number of rows
    pub m: usize,
    /// number of columns
    pub n: usize,
    /// vector of data in column major format
    pub data: Vec<T>,
}

impl<T> Matrix<T> {
    /// Matrix with entries `f(row, col)`.
    pub fn from_fn(size: (usize, usize), mut f: impl FnMut(usize, usize) -> T) -> Self {
        let (m, n) = size;
        let mut data = Vec::with_capacity(m * n);
        for c in 0..n {
            for r in 0..m {
                data.push(f(r, c));
            }
        }
        Self { m, n, data }
    }

    /// Matrix from a vector of rows.  All rows must have the same
    /// nonzero length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, MatrixError> {
        let m = rows.len();
        let n = rows.first().map_or(0, |r| r.len());
        if m == 0 || n == 0 {
            return Err(MatrixError::Empty);
        }
        for (row, r) in rows.iter().enumerate() {
            if r.len() != n {
                return Err(MatrixError::RaggedRow {
                    row,
                    found: r.len(),
                    expected: n,
                });
            }
        }

        // transpose into column major storage
        let mut iters: Vec<_> = rows.into_iter().map(|r| r.into_iter()).collect();
        let mut data = Vec::with_capacity(m * n);
        for _ in 0..n {
            for it in iters.iter_mut() {
                // lengths were checked above
                if let Some(v) = it.next() {
                    data.push(v);
                }
            }
        }
        Ok(Self { m, n, data })
    }

    /// Matrix from column major data.
    pub fn new_from_slice(size: (usize, usize), src: &[T]) -> Result<Self, MatrixError>
    where
        T: Clone,
    {
        let (m, n) = size;
        if m * n != src.len() {
            return Err(MatrixError::IncompatibleDimension);
        }
        Ok(Self {
            m,
            n,
            data: src.to_vec(),
        })
    }

    #[inline]
    fn index_linear(&self, idx: (usize, usize)) -> usize {
        idx.0 + self.m * idx.1
    }

    pub fn nrows(&self) -> usize {
        self.m
    }

    pub fn ncols(&self) -> usize {
        self.n
    }

    pub fn size(&self) -> (usize, usize) {
        (self.m, self.n)
    }

    pub fn is_square(&self) -> bool {
        self.m == self.n
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn col_slice(&self, col: usize) -> &[T] {
        assert!(col < self.n);
        &self.data[(col * self.m)..(col + 1) * self.m]
    }

    /// Copy of row `row` as a vector.
    pub fn row(&self, row: usize) -> Vec<T>
    where
        T: Clone,
    {
        (0..self.n).map(|c| self[(row, c)].clone()).collect()
    }

    /// Elementwise conversion, stopping at the first error.  The error
    /// callback receives the failing `(row, col)` position.
    pub fn try_map<U, E>(
        &self,
        mut f: impl FnMut((usize, usize), &T) -> Result<U, E>,
    ) -> Result<Matrix<U>, E> {
        let mut data = Vec::with_capacity(self.data.len());
        for c in 0..self.n {
            for r in 0..self.m {
                data.push(f((r, c), &self[(r, c)])?);
            }
        }
        Ok(Matrix {
            m: self.m,
            n: self.n,
            data,
        })
    }
}

impl<T: Scalar> Matrix<T> {
    pub fn zeros(size: (usize, usize), ctx: &T::Context) -> Self {
        let (m, n) = size;
        Self {
            m,
            n,
            data: vec![T::zero(ctx); m * n],
        }
    }

    pub fn identity(n: usize, ctx: &T::Context) -> Self {
        Self::from_fn((n, n), |r, c| if r == c { T::one(ctx) } else { T::zero(ctx) })
    }

    /// True if `self[(r,c)] == self[(c,r)]` everywhere.
    pub fn is_symmetric(&self) -> bool {
        if !self.is_square() {
            return false;
        }
        for c in 0..self.n {
            for r in (c + 1)..self.m {
                if self[(r, c)] != self[(c, r)] {
                    return false;
                }
            }
        }
        true
    }

    /// True if every entry outside the three central diagonals is exactly zero.
    pub fn is_tridiagonal(&self) -> bool {
        for c in 0..self.n {
            for r in 0..self.m {
                if r.abs_diff(c) > 1 && !self[(r, c)].is_zero() {
                    return false;
                }
            }
        }
        true
    }

    /// Matrix-vector product `self * x`.
    pub fn mul_vec(&self, x: &[T]) -> Result<Vec<T>, MatrixError> {
        if x.len() != self.n || self.is_empty() {
            return Err(MatrixError::IncompatibleDimension);
        }
        let ctx = self.data[0].context();
        let mut y = vec![T::zero(&ctx); self.m];
        for (c, xc) in x.iter().enumerate() {
            for (yr, a) in y.iter_mut().zip(self.col_slice(c)) {
                *yr = yr.clone() + a.clone() * xc.clone();
            }
        }
        Ok(y)
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;
    fn index(&self, idx: (usize, usize)) -> &Self::Output {
        &self.data[self.index_linear(idx)]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, idx: (usize, usize)) -> &mut Self::Output {
        let lidx = self.index_linear(idx);
        &mut self.data[lidx]
    }
}

impl<T> std::fmt::Display for Matrix<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f)?;
        for i in 0..self.m {
            write!(f, "[ ")?;
            for j in 0..self.n {
                write!(f, " {}", self[(i, j)])?;
            }
            writeln!(f, "]")?;
        }
        writeln!(f)?;
        Ok(())
    }
}
