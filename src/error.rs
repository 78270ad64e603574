use std::error::Error;
use std::fmt;

/// Errors raised by `Matrix2D` construction and arithmetic.
#[derive(Debug, Clone, PartialEq)]
pub enum MatrixError {
    /// Malformed constructor input: empty outer or inner sequence, ragged rows,
    /// or a flat buffer whose length does not match the requested shape.
    Shape { reason: String },
    /// Element-wise operation between matrices of different shapes.
    ShapeMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },
    /// The right-hand operand is neither a number nor a nested sequence / matrix.
    /// Carries the stringified operand.
    UnsupportedOperand(String),
    /// Integer division by zero (or overflow) at the first offending cell.
    Division { row: usize, col: usize },
}

impl MatrixError {
    pub(crate) fn shape(reason: impl Into<String>) -> Self {
        MatrixError::Shape {
            reason: reason.into(),
        }
    }

    pub fn is_shape(&self) -> bool {
        matches!(self, MatrixError::Shape { .. })
    }

    pub fn is_shape_mismatch(&self) -> bool {
        matches!(self, MatrixError::ShapeMismatch { .. })
    }

    pub fn is_unsupported_operand(&self) -> bool {
        matches!(self, MatrixError::UnsupportedOperand(_))
    }

    pub fn is_division(&self) -> bool {
        matches!(self, MatrixError::Division { .. })
    }
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixError::Shape { reason } => {
                write!(f, "Matrix2D constructor: wrong shape ({})", reason)
            }
            MatrixError::ShapeMismatch { left, right } => write!(
                f,
                "matrices do not have the same shape: ({}, {}) vs ({}, {})",
                left.0, left.1, right.0, right.1
            ),
            MatrixError::UnsupportedOperand(operand) => {
                write!(f, "operation not available between Matrix2D and {}", operand)
            }
            MatrixError::Division { row, col } => write!(
                f,
                "division by zero or overflow at cell ({}, {})",
                row, col
            ),
        }
    }
}

impl Error for MatrixError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_operand_message_names_operand() {
        let err = MatrixError::UnsupportedOperand("[object Object]".to_string());
        assert_eq!(
            err.to_string(),
            "operation not available between Matrix2D and [object Object]"
        );
    }

    #[test]
    fn shape_mismatch_message_lists_both_shapes() {
        let err = MatrixError::ShapeMismatch {
            left: (2, 1),
            right: (2, 2),
        };
        assert_eq!(
            err.to_string(),
            "matrices do not have the same shape: (2, 1) vs (2, 2)"
        );
        assert!(err.is_shape_mismatch());
        assert!(!err.is_shape());
        assert!(!err.is_unsupported_operand());
    }

    #[test]
    fn division_message_names_cell() {
        let err = MatrixError::Division { row: 1, col: 0 };
        assert_eq!(err.to_string(), "division by zero or overflow at cell (1, 0)");
        assert!(err.is_division());
    }
}
