//! Dense matrix storage
//!
//! Row-major dense matrix used as the augmented matrix `[A | b]`: the last
//! column holds the right-hand side of each equation.

use crate::error::{Result, SolveError};
use crate::rational::Rational;

/// Dense matrix in row-major order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> Matrix<T> {
    /// Create a matrix from a flat vector (row-major order)
    pub fn from_flat(data: Vec<T>, rows: usize, cols: usize) -> Result<Self> {
        if cols == 0 {
            return Err(SolveError::NoColumns);
        }
        let expected = rows * cols;
        if data.len() != expected {
            return Err(SolveError::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Create a matrix from nested rows, which must all have the same length
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let cols = rows.first().map(Vec::len).ok_or(SolveError::NoColumns)?;
        if cols == 0 {
            return Err(SolveError::NoColumns);
        }

        let n_rows = rows.len();
        let mut data = Vec::with_capacity(n_rows * cols);
        for (row, entries) in rows.into_iter().enumerate() {
            if entries.len() != cols {
                return Err(SolveError::RaggedRow {
                    row,
                    expected: cols,
                    actual: entries.len(),
                });
            }
            data.extend(entries);
        }
        Ok(Self {
            data,
            rows: n_rows,
            cols,
        })
    }

    /// Get matrix dimensions
    pub fn dims(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Get number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Get number of columns (unknowns plus the right-hand side)
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Access element at (i, j)
    pub fn get(&self, i: usize, j: usize) -> &T {
        &self.data[i * self.cols + j]
    }

    /// Mutable access to element at (i, j)
    pub fn get_mut(&mut self, i: usize, j: usize) -> &mut T {
        &mut self.data[i * self.cols + j]
    }

    /// Get underlying data as slice
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consume and return underlying data
    pub fn into_data(self) -> Vec<T> {
        self.data
    }

    /// Get a row as a slice
    pub fn row(&self, i: usize) -> &[T] {
        let start = i * self.cols;
        &self.data[start..start + self.cols]
    }

    /// Get a row as a mutable slice
    pub fn row_mut(&mut self, i: usize) -> &mut [T] {
        let start = i * self.cols;
        &mut self.data[start..start + self.cols]
    }

    /// Iterate over rows
    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> {
        self.data.chunks_exact(self.cols)
    }

    /// Exchange rows `a` and `b`
    pub fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        let (lo, hi) = (a.min(b), a.max(b));
        let (head, tail) = self.data.split_at_mut(hi * self.cols);
        head[lo * self.cols..(lo + 1) * self.cols].swap_with_slice(&mut tail[..self.cols]);
    }

    /// Apply `f` to every entry, keeping the shape
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Matrix<U> {
        Matrix {
            data: self.data.iter().map(f).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }
}

impl<T: Clone> Matrix<T> {
    /// Copy out as nested rows
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.iter_rows().map(<[T]>::to_vec).collect()
    }
}

impl Matrix<Rational> {
    /// Create a zero rational matrix
    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        Self::from_flat(vec![Rational::ZERO; rows * cols], rows, cols)
    }

    /// Lift an integer matrix into exact rationals
    pub fn from_integers(matrix: &Matrix<i64>) -> Self {
        matrix.map(|&v| Rational::from_int(v))
    }
}
