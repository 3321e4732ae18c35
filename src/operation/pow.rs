//! Elementwise power with an explicit exponent.

use crate::core::scalar::{RealOf, Scalar, UnaryFn};
use crate::core::traits::Expression;
use crate::expression::{Mapped, Wrap, apply};

/// `x -> x^exponent`, with the exponent stored by value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PowFn<S: Scalar> {
    exponent: S::Real,
}

impl<S: Scalar> PowFn<S> {
    pub fn new(exponent: S::Real) -> Self {
        Self { exponent }
    }

    pub fn exponent(&self) -> S::Real {
        self.exponent
    }
}

impl<S: Scalar> UnaryFn<S> for PowFn<S> {
    type Output = S;

    #[inline]
    fn invoke(&self, x: S) -> S {
        x.powf(self.exponent)
    }
}

/// Raises every element of a vector or matrix expression to `exponent`.
///
/// The result scalar equals the operand's scalar. Domain errors (a negative
/// real base with a fractional exponent, overflow) surface as `NaN`/`inf`
/// exactly as the underlying `powf` produces them.
pub fn pow<E>(expr: E, exponent: RealOf<E::Elem>) -> Mapped<E, PowFn<E::Elem>>
where
    E: Expression,
    E::Elem: Scalar,
    E::Kind: Wrap<E, PowFn<E::Elem>>,
{
    apply(expr, PowFn::new(exponent))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::traits::VecExpr;

    #[test]
    fn squares_and_roots() {
        let v = vec![2.0f64, 3.0, 9.0];
        assert_eq!(pow(&v, 2.0).elem(1), 9.0);
        assert_eq!(pow(&v, 0.5).elem(2), 3.0);
        assert_eq!(pow(&v, 0.0).elem(0), 1.0);
    }

    #[test]
    fn negative_base_fractional_exponent_is_nan() {
        let v = vec![-8.0f64];
        assert!(pow(&v, 1.0 / 3.0).elem(0).is_nan());
    }
}
