//! Expression implementations for std and faer containers.
//!
//! This module lets the usual concrete containers take part in lazy
//! composition: `Vec<T>` and slices, `faer::Col`/`faer::ColRef` as vector
//! expressions, and `faer::Mat`/`faer::MatRef` as column-major matrix
//! expressions. Reads go straight through the container's own indexing, so an
//! out-of-range index panics exactly as it would on the container.
//!
//! # References
//! - [faer crate documentation](https://docs.rs/faer)

use crate::core::traits::{Expression, MatExpr, MatrixKind, Orientation, VecExpr, VectorKind};
use faer::{Col, ColRef, Mat, MatRef};

impl<T: Copy> Expression for Vec<T> {
    type Elem = T;
    type Kind = VectorKind;
}

/// A `Vec<T>` is a dense vector expression.
impl<T: Copy> VecExpr for Vec<T> {
    #[inline]
    fn size(&self) -> usize {
        self.len()
    }
    #[inline]
    fn elem(&self, i: usize) -> T {
        self[i]
    }
}

impl<T: Copy> Expression for [T] {
    type Elem = T;
    type Kind = VectorKind;
}

impl<T: Copy> VecExpr for [T] {
    #[inline]
    fn size(&self) -> usize {
        self.len()
    }
    #[inline]
    fn elem(&self, i: usize) -> T {
        self[i]
    }
}

impl<T: Copy> Expression for Col<T> {
    type Elem = T;
    type Kind = VectorKind;
}

/// A faer column vector is a dense vector expression.
impl<T: Copy> VecExpr for Col<T> {
    #[inline]
    fn size(&self) -> usize {
        Col::nrows(self)
    }
    #[inline]
    fn elem(&self, i: usize) -> T {
        self[i]
    }
}

impl<'a, T: Copy> Expression for ColRef<'a, T> {
    type Elem = T;
    type Kind = VectorKind;
}

impl<'a, T: Copy> VecExpr for ColRef<'a, T> {
    #[inline]
    fn size(&self) -> usize {
        (*self).nrows()
    }
    #[inline]
    fn elem(&self, i: usize) -> T {
        self[i]
    }
}

impl<T: Copy> Expression for Mat<T> {
    type Elem = T;
    type Kind = MatrixKind;
}

/// faer stores dense matrices column-major.
impl<T: Copy> MatExpr for Mat<T> {
    #[inline]
    fn nrows(&self) -> usize {
        Mat::nrows(self)
    }
    #[inline]
    fn ncols(&self) -> usize {
        Mat::ncols(self)
    }
    #[inline]
    fn elem(&self, row: usize, col: usize) -> T {
        self[(row, col)]
    }
    fn orientation(&self) -> Orientation {
        Orientation::ColumnMajor
    }
}

impl<'a, T: Copy> Expression for MatRef<'a, T> {
    type Elem = T;
    type Kind = MatrixKind;
}

/// A matrix view reports row-major orientation when its row stride is the
/// contiguous one (e.g. a transposed `Mat`).
impl<'a, T: Copy> MatExpr for MatRef<'a, T> {
    #[inline]
    fn nrows(&self) -> usize {
        (*self).nrows()
    }
    #[inline]
    fn ncols(&self) -> usize {
        (*self).ncols()
    }
    #[inline]
    fn elem(&self, row: usize, col: usize) -> T {
        self[(row, col)]
    }
    fn orientation(&self) -> Orientation {
        if (*self).col_stride() == 1 && (*self).row_stride() != 1 {
            Orientation::RowMajor
        } else {
            Orientation::ColumnMajor
        }
    }
}
