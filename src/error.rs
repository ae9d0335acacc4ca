use core::fmt;

/// Operation that rejected a pair of operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Element-wise matrix addition.
    Add,
    /// Matrix product.
    Multiply,
    /// Vector dot product.
    Dot,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Add => write!(f, "addition"),
            Operation::Multiply => write!(f, "multiplication"),
            Operation::Dot => write!(f, "dot product"),
        }
    }
}

/// Broad class of a [`LinalgError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed container: empty, empty row, ragged, wrong flat length, or
    /// a shape too large to address.
    Shape,
    /// An element is not a real number (NaN or infinite).
    ElementType,
    /// Operands are individually valid but incompatible with each other.
    DimensionMismatch,
    /// A nonzero magnitude was required.
    ZeroVector,
}

/// Errors from matrix and vector construction and arithmetic.
///
/// Vectors report their dimensions as `1 x n` row shapes and their element
/// positions with `row = 0`.
///
/// ```
/// use vecmat::{ErrorKind, LinalgError, Matrix};
///
/// let ragged = Matrix::from_rows(&[vec![1.0_f64, 2.0], vec![3.0]]);
/// assert_eq!(
///     ragged.unwrap_err(),
///     LinalgError::Ragged { row: 1, expected: 2, got: 1 },
/// );
///
/// let a = Matrix::from_rows(&[[1.0_f64, 2.0, 3.0]]).unwrap();
/// let b = Matrix::from_rows(&[[1.0_f64], [2.0]]).unwrap();
/// assert_eq!(a.try_matmul(&b).unwrap_err().kind(), ErrorKind::DimensionMismatch);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinalgError {
    /// No rows, or no elements at all.
    Empty,
    /// Row `row` has no elements.
    EmptyRow { row: usize },
    /// Row `row` has `got` elements while row 0 has `expected`.
    Ragged {
        row: usize,
        expected: usize,
        got: usize,
    },
    /// Flat buffer of `got` elements for a shape needing `expected`.
    LengthMismatch { expected: usize, got: usize },
    /// `nrows x ncols` elements would not fit in one allocation.
    TooLarge { nrows: usize, ncols: usize },
    /// Element at `(row, col)` is NaN or infinite.
    NonFinite { row: usize, col: usize },
    /// Operand shapes `lhs` and `rhs` are incompatible for `op`.
    DimensionMismatch {
        op: Operation,
        lhs: (usize, usize),
        rhs: (usize, usize),
    },
    /// Angle or direction requested for a vector of zero magnitude.
    ZeroVector,
}

impl LinalgError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            LinalgError::Empty
            | LinalgError::EmptyRow { .. }
            | LinalgError::Ragged { .. }
            | LinalgError::LengthMismatch { .. }
            | LinalgError::TooLarge { .. } => ErrorKind::Shape,
            LinalgError::NonFinite { .. } => ErrorKind::ElementType,
            LinalgError::DimensionMismatch { .. } => ErrorKind::DimensionMismatch,
            LinalgError::ZeroVector => ErrorKind::ZeroVector,
        }
    }
}

impl fmt::Display for LinalgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinalgError::Empty => write!(f, "empty matrix or vector"),
            LinalgError::EmptyRow { row } => write!(f, "row {} is empty", row),
            LinalgError::Ragged { row, expected, got } => write!(
                f,
                "ragged rows: row {} has {} elements, expected {}",
                row, got, expected
            ),
            LinalgError::LengthMismatch { expected, got } => write!(
                f,
                "data length {} does not match shape of {} elements",
                got, expected
            ),
            LinalgError::TooLarge { nrows, ncols } => {
                write!(f, "shape {}x{} is too large to allocate", nrows, ncols)
            }
            LinalgError::NonFinite { row, col } => {
                write!(f, "non-finite element at ({}, {})", row, col)
            }
            LinalgError::DimensionMismatch { op, lhs, rhs } => write!(
                f,
                "dimension mismatch in {}: {}x{} and {}x{}",
                op, lhs.0, lhs.1, rhs.0, rhs.1
            ),
            LinalgError::ZeroVector => write!(f, "vector has zero magnitude"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LinalgError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn kinds() {
        assert_eq!(LinalgError::Empty.kind(), ErrorKind::Shape);
        assert_eq!(LinalgError::EmptyRow { row: 2 }.kind(), ErrorKind::Shape);
        assert_eq!(
            LinalgError::Ragged { row: 1, expected: 3, got: 2 }.kind(),
            ErrorKind::Shape
        );
        assert_eq!(
            LinalgError::LengthMismatch { expected: 4, got: 3 }.kind(),
            ErrorKind::Shape
        );
        assert_eq!(
            LinalgError::TooLarge { nrows: usize::MAX, ncols: 2 }.kind(),
            ErrorKind::Shape
        );
        assert_eq!(
            LinalgError::NonFinite { row: 0, col: 1 }.kind(),
            ErrorKind::ElementType
        );
        assert_eq!(LinalgError::ZeroVector.kind(), ErrorKind::ZeroVector);
    }

    #[test]
    fn display_dimension_mismatch() {
        let err = LinalgError::DimensionMismatch {
            op: Operation::Multiply,
            lhs: (1, 3),
            rhs: (2, 1),
        };
        assert_eq!(err.kind(), ErrorKind::DimensionMismatch);
        assert_eq!(
            err.to_string(),
            "dimension mismatch in multiplication: 1x3 and 2x1"
        );
    }

    #[test]
    fn display_shape() {
        let err = LinalgError::Ragged { row: 1, expected: 2, got: 1 };
        assert!(err.to_string().contains("row 1 has 1 elements"));
        assert_eq!(LinalgError::EmptyRow { row: 0 }.to_string(), "row 0 is empty");
        assert_eq!(
            LinalgError::TooLarge { nrows: 4, ncols: 5 }.to_string(),
            "shape 4x5 is too large to allocate"
        );
    }

    #[cfg(feature = "std")]
    #[test]
    fn boxed_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(LinalgError::ZeroVector);
        assert_eq!(err.to_string(), "vector has zero magnitude");
    }
}
