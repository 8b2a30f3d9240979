//! Error types for Matriz operations.
//!
//! Provides rich error context for library consumers.

use std::fmt;

/// Main error type for Matriz operations.
///
/// Provides detailed context about failures including empty inputs, shape
/// mismatches and out-of-range access.
///
/// Two violations of the container contract never reach this enum because
/// they cannot be expressed in the first place: indices are `usize`, so a
/// non-integer index is a type error, and no mutating methods or `IndexMut`
/// impls exist, so writes to a built container do not compile.
///
/// # Examples
///
/// ```
/// use matriz::error::MatrizError;
///
/// let err = MatrizError::ShapeMismatch {
///     expected: 3,
///     actual: 2,
/// };
/// assert!(err.to_string().contains("shape mismatch"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatrizError {
    /// Vector or matrix constructed from zero elements/rows, or an order
    /// statistic requested over zero values.
    EmptyInput,

    /// Matrix rows of unequal length at construction.
    ShapeMismatch {
        /// Column count of the first row
        expected: usize,
        /// Column count of the offending row
        actual: usize,
    },

    /// Square-matrix construction where row count != column count.
    NotSquare {
        /// Row count found
        rows: usize,
        /// Column count found
        cols: usize,
    },

    /// Positional access outside `[0, len)`.
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Logical length of the container
        len: usize,
    },

    /// Operation not supported by this container form.
    UnsupportedOperation {
        /// Description of the rejected operation
        operation: &'static str,
    },

    /// Mean or variance computed over zero elements. Only an empty lazy
    /// vector can reach this; the dense constructors reject empty input.
    DivisionByZero,
}

impl fmt::Display for MatrizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrizError::EmptyInput => {
                write!(f, "Container cannot be empty")
            }
            MatrizError::ShapeMismatch { expected, actual } => {
                write!(
                    f,
                    "Row shape mismatch: expected {expected} elements, got {actual}"
                )
            }
            MatrizError::NotSquare { rows, cols } => {
                write!(f, "Not a square matrix: {rows} rows x {cols} columns")
            }
            MatrizError::IndexOutOfRange { index, len } => {
                write!(f, "Index {index} out of range for length {len}")
            }
            MatrizError::UnsupportedOperation { operation } => {
                write!(f, "Unsupported operation: {operation}")
            }
            MatrizError::DivisionByZero => {
                write!(f, "Division by zero over an empty sequence")
            }
        }
    }
}

impl std::error::Error for MatrizError {}

/// Convenience result type for Matriz operations.
pub type Result<T> = std::result::Result<T, MatrizError>;
