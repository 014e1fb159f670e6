//! Error types for lineal operations.
//!
//! Provides rich error context for library consumers.

use std::fmt;

/// Main error type for lineal operations.
///
/// Provides detailed context about failures including dimension mismatches,
/// division by zero, out-of-range indices, and singular matrices.
///
/// # Examples
///
/// ```
/// use lineal::error::LinealError;
///
/// let err = LinealError::DimensionMismatch {
///     expected: "2x3".to_string(),
///     actual: "3x2".to_string(),
/// };
/// assert!(err.to_string().contains("dimension mismatch"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinealError {
    /// Matrix/vector dimensions don't match for the operation.
    DimensionMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// Division by a zero scalar or zero magnitude.
    DivisionByZero {
        /// Operation that attempted the division
        operation: String,
    },

    /// Row or column index outside the valid range.
    IndexOutOfRange {
        /// Index requested
        index: usize,
        /// Number of valid positions
        len: usize,
    },

    /// Matrix is singular (non-invertible).
    SingularMatrix {
        /// Determinant value (zero or within tolerance of zero)
        det: String,
    },
}

impl fmt::Display for LinealError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinealError::DimensionMismatch { expected, actual } => {
                write!(
                    f,
                    "Matrix dimension mismatch: expected {expected}, got {actual}"
                )
            }
            LinealError::DivisionByZero { operation } => {
                write!(f, "Division by zero in {operation}")
            }
            LinealError::IndexOutOfRange { index, len } => {
                write!(f, "Index {index} out of range (len={len})")
            }
            LinealError::SingularMatrix { det } => {
                write!(
                    f,
                    "Singular matrix detected: determinant = {det}, cannot invert"
                )
            }
        }
    }
}

impl std::error::Error for LinealError {}

impl LinealError {
    /// Create a dimension mismatch error from two (rows, cols) shapes.
    #[must_use]
    pub fn shape_mismatch(expected: (usize, usize), actual: (usize, usize)) -> Self {
        Self::DimensionMismatch {
            expected: format!("{}x{}", expected.0, expected.1),
            actual: format!("{}x{}", actual.0, actual.1),
        }
    }

    /// Create a division by zero error with operation context.
    #[must_use]
    pub fn division_by_zero(operation: &str) -> Self {
        Self::DivisionByZero {
            operation: operation.to_string(),
        }
    }

    /// Create an index out of range error.
    #[must_use]
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    /// Create a singular matrix error carrying the offending determinant.
    #[must_use]
    pub fn singular_matrix(det: impl fmt::Display) -> Self {
        Self::SingularMatrix {
            det: det.to_string(),
        }
    }
}

#[allow(clippy::cmp_owned)]
impl PartialEq<&str> for LinealError {
    fn eq(&self, other: &&str) -> bool {
        self.to_string() == *other
    }
}

#[allow(clippy::cmp_owned)]
impl PartialEq<LinealError> for &str {
    fn eq(&self, other: &LinealError) -> bool {
        *self == other.to_string()
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, LinealError>;
