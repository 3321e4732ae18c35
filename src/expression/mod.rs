//! Lazy unary-functor expressions.
//!
//! [`apply`] wraps any vector or matrix expression together with a unary
//! callable and returns a proxy that evaluates the callable at each index on
//! demand. The proxy is a [`VecUnary`] for vector operands and a
//! [`MatUnary`] for matrix operands; the choice is made from the operand's
//! `Expression::Kind`, so one generic entry point covers both shapes.
//!
//! Nothing is computed when the proxy is built. Elements are produced only by
//! `elem` reads, typically issued by the materialization routines in
//! `utils::materialize`.

pub mod matrix_unary;
pub mod vector_unary;

pub use matrix_unary::MatUnary;
pub use vector_unary::VecUnary;

use crate::core::scalar::UnaryFn;
use crate::core::traits::{Expression, MatExpr, MatrixKind, VecExpr, VectorKind};

/// Picks the functor-expression flavor for an operand kind.
pub trait Wrap<E, F> {
    type Output;
    fn wrap(expr: E, f: F) -> Self::Output;
}

impl<E, F> Wrap<E, F> for VectorKind
where
    E: VecExpr,
    F: UnaryFn<E::Elem>,
    F::Output: Copy,
{
    type Output = VecUnary<E, F>;

    #[inline]
    fn wrap(expr: E, f: F) -> VecUnary<E, F> {
        VecUnary::new(expr, f)
    }
}

impl<E, F> Wrap<E, F> for MatrixKind
where
    E: MatExpr,
    F: UnaryFn<E::Elem>,
    F::Output: Copy,
{
    type Output = MatUnary<E, F>;

    #[inline]
    fn wrap(expr: E, f: F) -> MatUnary<E, F> {
        MatUnary::new(expr, f)
    }
}

/// Expression type produced by applying `F` elementwise to `E`.
pub type Mapped<E, F> = <<E as Expression>::Kind as Wrap<E, F>>::Output;

/// Apply `f` lazily to every element of `expr`.
///
/// Pass `&x` to borrow an operand, or `x` to move it into the proxy.
pub fn apply<E, F>(expr: E, f: F) -> Mapped<E, F>
where
    E: Expression,
    E::Kind: Wrap<E, F>,
{
    log::trace!(
        "wrapping {} in a lazy unary functor",
        std::any::type_name::<E>()
    );
    <E::Kind as Wrap<E, F>>::wrap(expr, f)
}
