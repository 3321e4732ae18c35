use thiserror::Error;

// Unified error type for ewise

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EwiseError {
    #[error("index {index} out of bounds for vector of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
    #[error("index ({row}, {col}) out of bounds for {nrows}x{ncols} matrix")]
    MatrixIndexOutOfBounds {
        row: usize,
        col: usize,
        nrows: usize,
        ncols: usize,
    },
    #[error("length mismatch: destination has {found}, expression has {expected}")]
    LengthMismatch { expected: usize, found: usize },
    #[error("shape mismatch: destination is {found:?}, expression is {expected:?}")]
    ShapeMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },
}
