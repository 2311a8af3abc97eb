use std::error::Error;
use std::fmt;

/// Failure conditions for vector and matrix operations.
#[derive(Debug, Clone, PartialEq)]
pub enum LinalgError {
    /// Operand shapes are incompatible for `op`.
    DimensionMismatch {
        op: &'static str,
        expected: String,
        found: String,
    },
    /// Determinant (or another square-only operation) on a non-square matrix.
    NotSquare { rows: usize, cols: usize },
    /// Index outside `0..len`.
    OutOfBounds { index: usize, len: usize },
    /// Input does not describe a valid vector or rectangular matrix.
    Construction(String),
    /// Mathematically undefined result, e.g. normalizing a zero vector.
    InvalidOperation(String),
}

impl LinalgError {
    pub(crate) fn mismatch(
        op: &'static str,
        expected: impl fmt::Display,
        found: impl fmt::Display,
    ) -> Self {
        LinalgError::DimensionMismatch {
            op,
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }
}

impl fmt::Display for LinalgError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LinalgError::DimensionMismatch {
                op,
                expected,
                found,
            } => write!(
                f,
                "dimension mismatch in {}: expected {}, found {}",
                op, expected, found
            ),
            LinalgError::NotSquare { rows, cols } => {
                write!(f, "matrix must be square, got {}x{}", rows, cols)
            }
            LinalgError::OutOfBounds { index, len } => {
                write!(f, "index {} out of bounds for length {}", index, len)
            }
            LinalgError::Construction(msg) => write!(f, "invalid construction: {}", msg),
            LinalgError::InvalidOperation(msg) => write!(f, "invalid operation: {}", msg),
        }
    }
}

impl Error for LinalgError {}
