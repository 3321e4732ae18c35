// Sparse operands (CSR matrix, compressed vector)

use crate::core::traits::{Expression, MatExpr, MatrixKind, Orientation, VecExpr, VectorKind};
use faer::sparse::{
    SymbolicSparseRowMat,    // owning symbolic CSR alias
    SparseRowMat,            // owning numeric CSR alias
};
use num_traits::Zero;

/// Row-compressed sparse matrix. Entries outside the pattern read as zero.
pub struct CsrMatrix<T> {
    inner: SparseRowMat<usize, T>,
}

impl<T: Copy> CsrMatrix<T> {
    /// Build a CSR from raw row-ptr, col-idx, and values.
    ///
    /// Column indices within each row must be sorted and unique.
    pub fn from_csr(
        nrows: usize,
        ncols: usize,
        row_ptr: Vec<usize>,
        col_idx: Vec<usize>,
        values: Vec<T>,
    ) -> Self {
        // second argument `None` means "no separate row_nnz"
        let symbolic = SymbolicSparseRowMat::new_checked(
            nrows,
            ncols,
            row_ptr,
            None,
            col_idx,
        );
        let inner = SparseRowMat::new(symbolic, values);
        Self { inner }
    }

    /// Number of stored entries.
    pub fn nnz(&self) -> usize {
        self.inner.val().len()
    }

    /// Stored value at `(row, col)`, if it is part of the pattern.
    pub fn stored(&self, row: usize, col: usize) -> Option<T> {
        let symbolic = self.inner.symbolic();
        let row_ptr = symbolic.row_ptr();
        let start = row_ptr[row];
        let end = row_ptr[row + 1];
        let cols = &symbolic.col_idx()[start..end];
        cols.binary_search(&col)
            .ok()
            .map(|k| self.inner.val()[start + k])
    }
}

impl<T: Copy + Zero> Expression for CsrMatrix<T> {
    type Elem = T;
    type Kind = MatrixKind;
}

impl<T: Copy + Zero> MatExpr for CsrMatrix<T> {
    fn nrows(&self) -> usize {
        self.inner.nrows()
    }
    fn ncols(&self) -> usize {
        self.inner.ncols()
    }
    fn elem(&self, row: usize, col: usize) -> T {
        assert!(
            row < self.inner.nrows() && col < self.inner.ncols(),
            "index ({row}, {col}) out of bounds for {}x{} sparse matrix",
            self.inner.nrows(),
            self.inner.ncols()
        );
        self.stored(row, col).unwrap_or_else(T::zero)
    }
    fn orientation(&self) -> Orientation {
        Orientation::RowMajor
    }
    fn is_sparse(&self) -> bool {
        true
    }
}

/// Compressed sparse vector: sorted indices plus values.
#[derive(Clone, Debug, PartialEq)]
pub struct SparseVec<T> {
    len: usize,
    indices: Vec<usize>,
    values: Vec<T>,
}

impl<T: Copy> SparseVec<T> {
    /// Build from `(index, value)` pairs. Pairs are sorted; a repeated index
    /// keeps its last value.
    ///
    /// # Panics
    /// If an index is `>= len`.
    pub fn from_pairs(len: usize, pairs: impl IntoIterator<Item = (usize, T)>) -> Self {
        let mut pairs: Vec<(usize, T)> = pairs.into_iter().collect();
        for &(i, _) in &pairs {
            assert!(i < len, "sparse index {i} out of bounds for length {len}");
        }
        pairs.sort_by_key(|&(i, _)| i);
        let mut indices: Vec<usize> = Vec::with_capacity(pairs.len());
        let mut values: Vec<T> = Vec::with_capacity(pairs.len());
        for (i, v) in pairs {
            if indices.last() == Some(&i) {
                if let Some(last) = values.last_mut() {
                    *last = v;
                }
            } else {
                indices.push(i);
                values.push(v);
            }
        }
        Self { len, indices, values }
    }

    pub fn nnz(&self) -> usize {
        self.indices.len()
    }

    /// Grow or shrink the logical length. Stored entries beyond the new
    /// length are dropped.
    pub fn resize(&mut self, len: usize) {
        let keep = self.indices.partition_point(|&i| i < len);
        self.indices.truncate(keep);
        self.values.truncate(keep);
        self.len = len;
    }

    /// Store `value` at `index`, replacing any existing entry.
    pub fn insert(&mut self, index: usize, value: T) {
        assert!(index < self.len, "sparse index {index} out of bounds for length {}", self.len);
        match self.indices.binary_search(&index) {
            Ok(k) => self.values[k] = value,
            Err(k) => {
                self.indices.insert(k, index);
                self.values.insert(k, value);
            }
        }
    }
}

impl<T: Copy + Zero> Expression for SparseVec<T> {
    type Elem = T;
    type Kind = VectorKind;
}

impl<T: Copy + Zero> VecExpr for SparseVec<T> {
    fn size(&self) -> usize {
        self.len
    }
    fn elem(&self, i: usize) -> T {
        assert!(i < self.len, "index {i} out of bounds for sparse vector of length {}", self.len);
        match self.indices.binary_search(&i) {
            Ok(k) => self.values[k],
            Err(_) => T::zero(),
        }
    }
    fn is_sparse(&self) -> bool {
        true
    }
}
