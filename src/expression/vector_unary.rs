//! Vector flavor of the unary-functor expression.

use crate::core::scalar::UnaryFn;
use crate::core::traits::{Expression, VecExpr, VectorKind};

/// `f(expr)` evaluated lazily, element by element.
///
/// Holds the operand (by value, or by reference when built from `&v`) and the
/// callable by value. The length is never cached: `size()` asks the operand
/// every time.
#[derive(Clone, Copy, Debug)]
pub struct VecUnary<E, F> {
    expr: E,
    f: F,
}

impl<E, F> VecUnary<E, F> {
    pub fn new(expr: E, f: F) -> Self {
        Self { expr, f }
    }

    /// Wrapped operand.
    pub fn expr(&self) -> &E {
        &self.expr
    }

    /// Bound callable.
    pub fn functor(&self) -> &F {
        &self.f
    }

    pub fn into_parts(self) -> (E, F) {
        (self.expr, self.f)
    }
}

impl<E, F> Expression for VecUnary<E, F>
where
    E: VecExpr,
    F: UnaryFn<E::Elem>,
    F::Output: Copy,
{
    type Elem = F::Output;
    type Kind = VectorKind;
}

impl<E, F> VecExpr for VecUnary<E, F>
where
    E: VecExpr,
    F: UnaryFn<E::Elem>,
    F::Output: Copy,
{
    #[inline]
    fn size(&self) -> usize {
        self.expr.size()
    }

    #[inline]
    fn elem(&self, i: usize) -> F::Output {
        self.f.invoke(self.expr.elem(i))
    }

    fn is_sparse(&self) -> bool {
        self.expr.is_sparse()
    }
}
