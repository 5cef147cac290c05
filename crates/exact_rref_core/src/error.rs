//! Error types for exact row reduction

use thiserror::Error;

/// Failures of exact fraction arithmetic
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RationalError {
    #[error("division by a zero-valued rational")]
    DivisionByZero,

    #[error("fixed-width integer overflow in rational arithmetic")]
    ArithmeticOverflow,

    #[error("cannot parse rational from {0:?}")]
    Parse(String),
}

/// Failures of the linear solver
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// The system has no solution
    #[error("linear system is inconsistent")]
    Inconsistent,

    #[error(transparent)]
    Arithmetic(#[from] RationalError),

    #[error("augmented matrix needs at least one column")]
    NoColumns,

    #[error("row {row} has {actual} entries, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("matrix data size mismatch: expected {expected}, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, SolveError>;
