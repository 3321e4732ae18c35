//! Core expression traits for ewise.
//!
//! An expression is anything that can be read element by element without
//! owning a materialized copy of its data: a `Vec`, a `faer::Mat`, a sparse
//! matrix, or a lazy functor expression wrapping any of those.

use crate::error::EwiseError;

/// Kind tag carried by one-dimensional expressions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VectorKind;

/// Kind tag carried by two-dimensional expressions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatrixKind;

/// Preferred traversal order of a matrix expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    RowMajor,
    ColumnMajor,
}

/// Common base of vector and matrix expressions.
pub trait Expression {
    /// Scalar type of a single element.
    type Elem: Copy;
    /// Either [`VectorKind`] or [`MatrixKind`].
    type Kind;
}

/// Read-only vector expression.
pub trait VecExpr: Expression<Kind = VectorKind> {
    /// Current length.
    fn size(&self) -> usize;
    /// Element `i`. Out-of-range behaviour is the container's own (std and
    /// faer containers panic).
    fn elem(&self, i: usize) -> Self::Elem;
    /// Whether the underlying storage is sparse.
    fn is_sparse(&self) -> bool {
        false
    }
    /// Bounds-checked read.
    fn try_elem(&self, i: usize) -> Result<Self::Elem, EwiseError> {
        let len = self.size();
        if i < len {
            Ok(self.elem(i))
        } else {
            Err(EwiseError::IndexOutOfBounds { index: i, len })
        }
    }
}

/// Read-only matrix expression.
pub trait MatExpr: Expression<Kind = MatrixKind> {
    /// Number of rows (`size1`).
    fn nrows(&self) -> usize;
    /// Number of columns (`size2`).
    fn ncols(&self) -> usize;
    /// Element at `(row, col)`.
    fn elem(&self, row: usize, col: usize) -> Self::Elem;
    /// Storage order generic algorithms should iterate in.
    fn orientation(&self) -> Orientation {
        Orientation::ColumnMajor
    }
    fn is_sparse(&self) -> bool {
        false
    }
    fn shape(&self) -> (usize, usize) {
        (self.nrows(), self.ncols())
    }
    /// Bounds-checked read.
    fn try_elem(&self, row: usize, col: usize) -> Result<Self::Elem, EwiseError> {
        let (nrows, ncols) = self.shape();
        if row < nrows && col < ncols {
            Ok(self.elem(row, col))
        } else {
            Err(EwiseError::MatrixIndexOutOfBounds { row, col, nrows, ncols })
        }
    }
}

// A borrowed expression is an expression; the borrow checker keeps the proxy
// from outliving its operand.
impl<E: Expression + ?Sized> Expression for &E {
    type Elem = E::Elem;
    type Kind = E::Kind;
}

impl<E: VecExpr + ?Sized> VecExpr for &E {
    #[inline]
    fn size(&self) -> usize {
        (**self).size()
    }
    #[inline]
    fn elem(&self, i: usize) -> Self::Elem {
        (**self).elem(i)
    }
    fn is_sparse(&self) -> bool {
        (**self).is_sparse()
    }
}

impl<E: MatExpr + ?Sized> MatExpr for &E {
    #[inline]
    fn nrows(&self) -> usize {
        (**self).nrows()
    }
    #[inline]
    fn ncols(&self) -> usize {
        (**self).ncols()
    }
    #[inline]
    fn elem(&self, row: usize, col: usize) -> Self::Elem {
        (**self).elem(row, col)
    }
    fn orientation(&self) -> Orientation {
        (**self).orientation()
    }
    fn is_sparse(&self) -> bool {
        (**self).is_sparse()
    }
}
