//! Dense matrix implementation for small floating-point systems.
//!
//! The elimination checks only ever solve systems whose size is the number
//! of free variables on a box face, so everything here is dense, row-major,
//! and allocation-light.

use std::ops::{Index, IndexMut};

use num_traits::Float;

/// Dense matrix stored in row-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseMatrix<T> {
    /// Matrix entries in row-major order.
    data: Vec<T>,
    /// Number of rows.
    num_rows: usize,
    /// Number of columns.
    num_cols: usize,
}

impl<T: Float> DenseMatrix<T> {
    /// Creates a new matrix filled with zeros.
    #[must_use]
    pub fn zeros(num_rows: usize, num_cols: usize) -> Self {
        Self {
            data: vec![T::zero(); num_rows * num_cols],
            num_rows,
            num_cols,
        }
    }

    /// Creates a matrix from a 2D vector.
    #[must_use]
    pub fn from_rows(rows: Vec<Vec<T>>) -> Self {
        if rows.is_empty() {
            return Self::zeros(0, 0);
        }
        let num_rows = rows.len();
        let num_cols = rows[0].len();
        let data: Vec<T> = rows.into_iter().flatten().collect();
        assert_eq!(data.len(), num_rows * num_cols);
        Self {
            data,
            num_rows,
            num_cols,
        }
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Checks if the matrix is square.
    #[must_use]
    pub fn is_square(&self) -> bool {
        self.num_rows == self.num_cols
    }

    /// Returns a slice of the specified row.
    #[must_use]
    pub fn row(&self, row: usize) -> &[T] {
        let start = row * self.num_cols;
        &self.data[start..start + self.num_cols]
    }

    /// Returns the main diagonal.
    #[must_use]
    pub fn diagonal(&self) -> Vec<T> {
        (0..self.num_rows.min(self.num_cols))
            .map(|i| self[(i, i)])
            .collect()
    }

    /// Extracts the submatrix with the given rows and columns, in order.
    #[must_use]
    pub fn submatrix(&self, rows: &[usize], cols: &[usize]) -> Self {
        let mut data = Vec::with_capacity(rows.len() * cols.len());
        for &r in rows {
            for &c in cols {
                data.push(self[(r, c)]);
            }
        }
        Self {
            data,
            num_rows: rows.len(),
            num_cols: cols.len(),
        }
    }

    /// Swaps two rows in-place.
    pub fn swap_rows(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        let i_start = i * self.num_cols;
        let j_start = j * self.num_cols;
        for k in 0..self.num_cols {
            self.data.swap(i_start + k, j_start + k);
        }
    }

    /// LU factorization with partial pivoting, `PA = LU`.
    ///
    /// Returns `None` for non-square matrices and when elimination meets an
    /// exactly zero pivot. Any nonzero pivot is accepted, however small, so
    /// a nearly singular system still yields its (possibly large) solution.
    #[must_use]
    pub fn lu(&self) -> Option<Lu<T>> {
        if !self.is_square() {
            return None;
        }
        let n = self.num_rows;
        let mut m = self.clone();
        let mut perm: Vec<usize> = (0..n).collect();

        for col in 0..n {
            let mut best = col;
            for row in col + 1..n {
                if m[(row, col)].abs() > m[(best, col)].abs() {
                    best = row;
                }
            }
            if m[(best, col)] == T::zero() {
                return None;
            }
            if best != col {
                m.swap_rows(col, best);
                perm.swap(col, best);
            }

            let pivot = m[(col, col)];
            for row in col + 1..n {
                let factor = m[(row, col)] / pivot;
                m[(row, col)] = factor;
                for k in col + 1..n {
                    let val = m[(col, k)] * factor;
                    m[(row, k)] = m[(row, k)] - val;
                }
            }
        }

        Some(Lu { factors: m, perm })
    }
}

/// An LU factorization produced by [`DenseMatrix::lu`].
///
/// `L` (unit lower triangular) and `U` share one matrix; `perm[i]` is the
/// original row now stored in row `i`.
#[derive(Debug, Clone)]
pub struct Lu<T> {
    factors: DenseMatrix<T>,
    perm: Vec<usize>,
}

impl<T: Float> Lu<T> {
    /// Dimension of the factored matrix.
    #[must_use]
    pub fn dim(&self) -> usize {
        self.factors.num_rows
    }

    /// Solves `Ax = b` by forward then back substitution.
    #[must_use]
    pub fn solve(&self, b: &[T]) -> Vec<T> {
        let n = self.dim();
        assert_eq!(b.len(), n);

        // Forward substitution on the permuted right-hand side
        let mut y: Vec<T> = self.perm.iter().map(|&p| b[p]).collect();
        for i in 0..n {
            let mut sum = y[i];
            for k in 0..i {
                sum = sum - self.factors[(i, k)] * y[k];
            }
            y[i] = sum;
        }

        // Back substitution
        for i in (0..n).rev() {
            let mut sum = y[i];
            for k in i + 1..n {
                sum = sum - self.factors[(i, k)] * y[k];
            }
            y[i] = sum / self.factors[(i, i)];
        }

        y
    }
}

impl<T> Index<(usize, usize)> for DenseMatrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.data[row * self.num_cols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for DenseMatrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.data[row * self.num_cols + col]
    }
}
