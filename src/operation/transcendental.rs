//! Square root, exponential and natural logarithm.

use crate::core::scalar::Scalar;
use crate::core::traits::Expression;
use crate::expression::{Mapped, Wrap, apply};
use crate::operation::IdentityFn;

/// Elementwise square root. Negative real elements give `NaN`; use a
/// complex operand for the principal complex root.
pub fn sqrt<E>(expr: E) -> Mapped<E, IdentityFn<E::Elem>>
where
    E: Expression,
    E::Elem: Scalar,
    E::Kind: Wrap<E, IdentityFn<E::Elem>>,
{
    let f: IdentityFn<E::Elem> = <E::Elem as Scalar>::sqrt;
    apply(expr, f)
}

/// Elementwise `e^x`.
pub fn exp<E>(expr: E) -> Mapped<E, IdentityFn<E::Elem>>
where
    E: Expression,
    E::Elem: Scalar,
    E::Kind: Wrap<E, IdentityFn<E::Elem>>,
{
    let f: IdentityFn<E::Elem> = <E::Elem as Scalar>::exp;
    apply(expr, f)
}

/// Elementwise natural logarithm.
pub fn ln<E>(expr: E) -> Mapped<E, IdentityFn<E::Elem>>
where
    E: Expression,
    E::Elem: Scalar,
    E::Kind: Wrap<E, IdentityFn<E::Elem>>,
{
    let f: IdentityFn<E::Elem> = <E::Elem as Scalar>::ln;
    apply(expr, f)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::traits::VecExpr;
    use num_complex::Complex64;

    #[test]
    fn exp_then_ln_round_trips() {
        let v = vec![0.5f64, 1.0, 2.0];
        let e = ln(exp(&v));
        for i in 0..v.len() {
            assert!((e.elem(i) - v[i]).abs() < 1e-12);
        }
    }

    #[test]
    fn sqrt_of_negative_real_is_nan_but_complex_is_not() {
        let r = vec![-4.0f64];
        assert!(sqrt(&r).elem(0).is_nan());
        let c = vec![Complex64::new(-4.0, 0.0)];
        let z = sqrt(&c).elem(0);
        assert!(z.re.abs() < 1e-12);
        assert!((z.im - 2.0).abs() < 1e-12);
    }
}
