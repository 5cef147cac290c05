//! Exact Row Reduction Core Library
//!
//! Loss-free Gauss-Jordan elimination over fixed-width fractions.
//!
//! # Overview
//!
//! An augmented matrix `[A | b]` of [`Rational`] entries is reduced in place
//! to reduced row-echelon form. Inconsistent systems are reported as a normal
//! outcome; overflow of the `i64` numerator or denominator is reported as an
//! error instead of wrapping.
//!
//! # Key Components
//!
//! - [`integer`] - Overflow-checked gcd / lcm
//! - [`rational`] - Exact rational number type
//! - [`matrix`] - Dense matrix storage
//! - [`solve`] - Elimination, back-reduction and the integer adapter
//!
//! # Example
//!
//! ```
//! use exact_rref_core::{solve_integer, Matrix};
//!
//! // 2x = 4, 3y = 9
//! let mut m = Matrix::from_rows(vec![vec![2, 0, 4], vec![0, 3, 9]]).unwrap();
//! assert!(solve_integer(&mut m).unwrap());
//! assert_eq!(m.to_rows(), vec![vec![1, 0, 2], vec![0, 1, 3]]);
//! ```

pub mod error;
pub mod integer;
pub mod matrix;
pub mod rational;
pub mod solve;

#[cfg(test)]
mod proptests;

pub use error::{RationalError, Result, SolveError};
pub use matrix::Matrix;
pub use rational::Rational;
pub use solve::{is_consistent, solve, solve_integer, Solution, Solver, SolverConfig};
