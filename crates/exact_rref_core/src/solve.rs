//! Exact row reduction of augmented linear systems
//!
//! Reduces `[A | b]` to reduced row-echelon form in place using exact
//! [`Rational`] arithmetic:
//!
//! 1. Consistency pre-check: a row `0 = c` with `c != 0` rejects the system.
//! 2. Forward elimination with pivot selection, detecting contradictions as
//!    rows collapse.
//! 3. Back-reduction so every pivot column holds a single `1`.
//!
//! Inconsistent systems are a normal outcome (`Ok(false)`); arithmetic
//! failures propagate as errors.

use crate::error::{RationalError, Result, SolveError};
use crate::integer;
use crate::matrix::Matrix;
use crate::rational::Rational;
use tracing::{debug, trace};

/// Configuration for the exact solver
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Take the first pivot candidate equal to exactly one before falling
    /// back to the first non-zero candidate. Unit pivots keep the pivot row
    /// free of new fractions.
    pub prefer_unit_pivot: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            prefer_unit_pivot: true,
        }
    }
}

/// Exact Gauss-Jordan solver over fixed-width rationals
#[derive(Debug, Clone, Default)]
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Solve `[A | b]` in place
    ///
    /// # Returns
    /// * `Ok(true)` - consistent; `matrix` is in reduced row-echelon form
    /// * `Ok(false)` - inconsistent; `matrix` contents are unspecified
    /// * `Err(_)` - arithmetic failure; `matrix` contents are unspecified
    pub fn solve(&self, matrix: &mut Matrix<Rational>) -> Result<bool> {
        if !is_consistent(matrix) {
            debug!("pre-check found a zero row with non-zero right-hand side");
            return Ok(false);
        }

        if !self.eliminate(matrix)? {
            return Ok(false);
        }

        reduce(matrix)?;
        Ok(true)
    }

    /// Solve an integer system, replacing each row with an equivalent
    /// integer equation
    ///
    /// Each solved row is multiplied by the lcm of its denominators, which
    /// keeps the ratio between the pivot coefficient and the right-hand side.
    /// The caller's matrix is only written when the system is consistent and
    /// every scaled entry fits in `i64`.
    pub fn solve_integer(&self, matrix: &mut Matrix<i64>) -> Result<bool> {
        let mut fractions = Matrix::<Rational>::from_integers(matrix);
        if !self.solve(&mut fractions)? {
            return Ok(false);
        }

        let mut scaled = Vec::with_capacity(fractions.as_slice().len());
        for row in fractions.iter_rows() {
            let denominators: Vec<i64> = row.iter().map(Rational::denominator).collect();
            let scale = integer::lcm_all(&denominators)?;
            for entry in row {
                let value = entry
                    .numerator()
                    .checked_mul(scale / entry.denominator())
                    .ok_or(RationalError::ArithmeticOverflow)?;
                scaled.push(value);
            }
        }

        let (rows, cols) = matrix.dims();
        *matrix = Matrix::from_flat(scaled, rows, cols)?;
        Ok(true)
    }

    /// Solve and read back the solution, mapping an inconsistent system to
    /// [`SolveError::Inconsistent`]
    pub fn solve_system(&self, mut matrix: Matrix<Rational>) -> Result<Solution> {
        if !self.solve(&mut matrix)? {
            return Err(SolveError::Inconsistent);
        }
        Solution::from_reduced(&matrix)
    }

    /// Forward elimination to row-echelon form with unit pivots
    ///
    /// Returns `Ok(false)` as soon as a row collapses to `0 = c`, `c != 0`.
    fn eliminate(&self, matrix: &mut Matrix<Rational>) -> Result<bool> {
        let (rows, cols) = matrix.dims();
        let rhs = cols - 1;
        let (mut row, mut col) = (0, 0);

        while row < rows && col < rhs {
            let Some(found) = self.find_pivot(matrix, row, col) else {
                trace!(col, "no pivot, column is free");
                col += 1;
                continue;
            };

            if found != row {
                trace!(from = found, to = row, "swapping pivot row");
                matrix.swap_rows(found, row);
            }

            let scale = *matrix.get(row, col);
            let pivot_row = matrix.row_mut(row);
            pivot_row[col] = Rational::ONE;
            for entry in &mut pivot_row[col + 1..] {
                *entry = entry.checked_div(scale)?;
            }
            let pivot_row = pivot_row.to_vec();

            for below in row + 1..rows {
                let factor = *matrix.get(below, col);
                if factor.is_zero() {
                    continue;
                }

                let target = matrix.row_mut(below);
                target[col] = Rational::ZERO;
                subtract_scaled(&mut target[col + 1..], &pivot_row[col + 1..], factor)?;

                if is_contradiction(target) {
                    debug!(row = below, pivot_col = col, "elimination produced 0 = c");
                    return Ok(false);
                }
            }

            row += 1;
            col += 1;
        }

        Ok(true)
    }

    /// Row index of the pivot for `col`, scanning from `start` downward
    fn find_pivot(&self, matrix: &Matrix<Rational>, start: usize, col: usize) -> Option<usize> {
        let mut first_non_zero = None;
        for row in start..matrix.rows() {
            let value = matrix.get(row, col);
            if value.is_zero() {
                continue;
            }
            if !self.config.prefer_unit_pivot || value.is_one() {
                return Some(row);
            }
            first_non_zero.get_or_insert(row);
        }
        first_non_zero
    }
}

/// Check that no row reads `0 = c` with `c != 0`
///
/// An all-zero row, right-hand side included, is a redundant equation and
/// does not make the system inconsistent.
pub fn is_consistent(matrix: &Matrix<Rational>) -> bool {
    !matrix.iter_rows().any(is_contradiction)
}

/// Solve with the default configuration
pub fn solve(matrix: &mut Matrix<Rational>) -> Result<bool> {
    Solver::default().solve(matrix)
}

/// Solve an integer system with the default configuration
pub fn solve_integer(matrix: &mut Matrix<i64>) -> Result<bool> {
    Solver::default().solve_integer(matrix)
}

/// Back-reduction of an echelon matrix with unit pivots
fn reduce(matrix: &mut Matrix<Rational>) -> Result<()> {
    let (rows, cols) = matrix.dims();
    let rhs = cols - 1;
    let mut lead = 0;

    for row in 0..rows {
        let Some(pivot) = (lead..rhs).find(|&c| !matrix.get(row, c).is_zero()) else {
            continue;
        };
        let pivot_row = matrix.row(row).to_vec();

        for above in 0..row {
            let factor = *matrix.get(above, pivot);
            if factor.is_zero() {
                continue;
            }

            let target = matrix.row_mut(above);
            target[pivot] = Rational::ZERO;
            subtract_scaled(&mut target[pivot + 1..], &pivot_row[pivot + 1..], factor)?;
        }

        lead = pivot + 1;
    }

    Ok(())
}

/// `target -= factor * source`, entrywise
fn subtract_scaled(target: &mut [Rational], source: &[Rational], factor: Rational) -> Result<()> {
    for (t, &s) in target.iter_mut().zip(source) {
        *t = t.checked_sub(factor.checked_mul(s)?)?;
    }
    Ok(())
}

/// All coefficients zero but the right-hand side is not
fn is_contradiction(row: &[Rational]) -> bool {
    match row.split_last() {
        Some((rhs, coefficients)) => !rhs.is_zero() && coefficients.iter().all(Rational::is_zero),
        None => false,
    }
}

/// Solution read from a matrix in reduced row-echelon form
///
/// Values of pivot unknowns are given with every free unknown set to zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    values: Vec<Option<Rational>>,
    pivot_columns: Vec<usize>,
    free_columns: Vec<usize>,
}

impl Solution {
    /// Read the solution of a reduced augmented matrix
    pub fn from_reduced(matrix: &Matrix<Rational>) -> Result<Self> {
        let unknowns = matrix.cols() - 1;
        let mut values = vec![None; unknowns];
        let mut pivot_columns = Vec::new();

        for row in matrix.iter_rows() {
            let (rhs, coefficients) = row.split_last().ok_or(SolveError::NoColumns)?;
            if let Some(col) = coefficients.iter().position(|c| !c.is_zero()) {
                values[col] = Some(rhs.checked_div(coefficients[col])?);
                pivot_columns.push(col);
            }
        }

        let free_columns = (0..unknowns).filter(|c| values[*c].is_none()).collect();
        Ok(Self {
            values,
            pivot_columns,
            free_columns,
        })
    }

    /// Per-unknown values, `None` for free unknowns
    pub fn values(&self) -> &[Option<Rational>] {
        &self.values
    }

    pub fn value(&self, unknown: usize) -> Option<Rational> {
        self.values.get(unknown).copied().flatten()
    }

    pub fn pivot_columns(&self) -> &[usize] {
        &self.pivot_columns
    }

    pub fn free_columns(&self) -> &[usize] {
        &self.free_columns
    }

    pub fn rank(&self) -> usize {
        self.pivot_columns.len()
    }

    /// True when every unknown is determined
    pub fn is_unique(&self) -> bool {
        self.free_columns.is_empty()
    }
}
