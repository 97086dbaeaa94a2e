use std::error::Error;
use std::fmt;

/// Which matrix axis an index referred to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Row,
    Column,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Axis::Row => write!(f, "row"),
            Axis::Column => write!(f, "column"),
        }
    }
}

/// Error type for vector and matrix operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinalgError {
    /// A reduction was asked to fold zero vectors.
    EmptyInput { operation: &'static str },
    /// Two vectors of different lengths were combined under the strict policy.
    LengthMismatch { left: usize, right: usize },
    /// Row or column index past the end of the matrix.
    IndexOutOfRange { axis: Axis, index: usize, len: usize },
    /// Flat buffer length does not match `rows * cols`.
    ShapeMismatch { rows: usize, cols: usize, len: usize },
    /// A row's length differs from the first row's.
    RaggedRows { row: usize, expected: usize, found: usize },
    /// A count could not be converted to the element type.
    NotRepresentable { value: usize },
}

impl fmt::Display for LinalgError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LinalgError::EmptyInput { operation } => {
                write!(f, "{} requires at least one vector", operation)
            }
            LinalgError::LengthMismatch { left, right } => write!(
                f,
                "vectors must have equal length (got {} and {})",
                left, right
            ),
            LinalgError::IndexOutOfRange { axis, index, len } => write!(
                f,
                "{} index {} out of range for {} {}s",
                axis, index, len, axis
            ),
            LinalgError::ShapeMismatch { rows, cols, len } => write!(
                f,
                "invalid shape ({}, {}) for buffer of length {}",
                rows, cols, len
            ),
            LinalgError::RaggedRows {
                row,
                expected,
                found,
            } => write!(
                f,
                "row {} has length {} but expected {}",
                row, found, expected
            ),
            LinalgError::NotRepresentable { value } => {
                write!(f, "{} cannot be represented in the element type", value)
            }
        }
    }
}

impl Error for LinalgError {}
