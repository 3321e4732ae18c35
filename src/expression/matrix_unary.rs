//! Matrix flavor of the unary-functor expression.

use crate::core::scalar::UnaryFn;
use crate::core::traits::{Expression, MatExpr, MatrixKind, Orientation};

/// `f(expr)` over a matrix expression. Shape, orientation and sparsity are
/// forwarded from the operand unchanged; only element values differ.
#[derive(Clone, Copy, Debug)]
pub struct MatUnary<E, F> {
    expr: E,
    f: F,
}

impl<E, F> MatUnary<E, F> {
    pub fn new(expr: E, f: F) -> Self {
        Self { expr, f }
    }

    pub fn expr(&self) -> &E {
        &self.expr
    }

    pub fn functor(&self) -> &F {
        &self.f
    }

    pub fn into_parts(self) -> (E, F) {
        (self.expr, self.f)
    }
}

impl<E, F> Expression for MatUnary<E, F>
where
    E: MatExpr,
    F: UnaryFn<E::Elem>,
    F::Output: Copy,
{
    type Elem = F::Output;
    type Kind = MatrixKind;
}

impl<E, F> MatExpr for MatUnary<E, F>
where
    E: MatExpr,
    F: UnaryFn<E::Elem>,
    F::Output: Copy,
{
    #[inline]
    fn nrows(&self) -> usize {
        self.expr.nrows()
    }

    #[inline]
    fn ncols(&self) -> usize {
        self.expr.ncols()
    }

    #[inline]
    fn elem(&self, row: usize, col: usize) -> F::Output {
        self.f.invoke(self.expr.elem(row, col))
    }

    fn orientation(&self) -> Orientation {
        self.expr.orientation()
    }

    fn is_sparse(&self) -> bool {
        self.expr.is_sparse()
    }
}
