use thiserror::Error;

/// Error type returned by scalar and interval arithmetic.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArithmeticError {
    /// Division by an exact zero
    #[error("Division by zero")]
    DivisionByZero,
    /// Division by an interval whose enclosure contains zero
    #[error("Division by an interval containing zero")]
    DivisionByZeroInterval,
    /// Interval constructed with lower > upper
    #[error("Invalid interval: lower endpoint {lower} exceeds upper endpoint {upper}")]
    InvertedInterval { lower: String, upper: String },
    /// A native floating point operation produced Inf or NaN
    #[error("Non-finite floating point value")]
    NonFinite,
    /// Working precision outside the supported range
    #[error("Invalid precision of {0} bits")]
    InvalidPrecision(u32),
}

/// Error type returned by dense matrix assembly operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// Matrix has no rows or no columns
    #[error("Matrix is empty")]
    Empty,
    /// Row lengths differ
    #[error("Row {row} has {found} entries, expected {expected}")]
    RaggedRow {
        row: usize,
        found: usize,
        expected: usize,
    },
    /// Data length does not match the requested shape
    #[error("Matrix dimension fields and/or array lengths are incompatible")]
    IncompatibleDimension,
}
