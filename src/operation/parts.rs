//! Real part, imaginary part, phase and conjugate.

use crate::core::scalar::Scalar;
use crate::core::traits::Expression;
use crate::expression::{Mapped, Wrap, apply};
use crate::operation::{DeriveFn, IdentityFn};

/// Elementwise real part.
pub fn real<E>(expr: E) -> Mapped<E, DeriveFn<E::Elem>>
where
    E: Expression,
    E::Elem: Scalar,
    E::Kind: Wrap<E, DeriveFn<E::Elem>>,
{
    let f: DeriveFn<E::Elem> = <E::Elem as Scalar>::re;
    apply(expr, f)
}

/// Elementwise imaginary part (zeros for a real operand).
pub fn imag<E>(expr: E) -> Mapped<E, DeriveFn<E::Elem>>
where
    E: Expression,
    E::Elem: Scalar,
    E::Kind: Wrap<E, DeriveFn<E::Elem>>,
{
    let f: DeriveFn<E::Elem> = <E::Elem as Scalar>::im;
    apply(expr, f)
}

/// Elementwise phase angle in `(-pi, pi]`.
pub fn arg<E>(expr: E) -> Mapped<E, DeriveFn<E::Elem>>
where
    E: Expression,
    E::Elem: Scalar,
    E::Kind: Wrap<E, DeriveFn<E::Elem>>,
{
    let f: DeriveFn<E::Elem> = <E::Elem as Scalar>::arg;
    apply(expr, f)
}

pub fn conj<E>(expr: E) -> Mapped<E, IdentityFn<E::Elem>>
where
    E: Expression,
    E::Elem: Scalar,
    E::Kind: Wrap<E, IdentityFn<E::Elem>>,
{
    let f: IdentityFn<E::Elem> = <E::Elem as Scalar>::conj;
    apply(expr, f)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::traits::VecExpr;
    use num_complex::Complex64;

    #[test]
    fn complex_parts() {
        let v = vec![Complex64::new(1.0, -2.0), Complex64::new(0.0, 1.0)];
        assert_eq!(real(&v).elem(0), 1.0);
        assert_eq!(imag(&v).elem(0), -2.0);
        assert_eq!(conj(&v).elem(0), Complex64::new(1.0, 2.0));
        assert!((arg(&v).elem(1) - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn real_operand_parts() {
        let v = vec![-3.0f64, 4.0];
        assert_eq!(real(&v).elem(0), -3.0);
        assert_eq!(imag(&v).elem(1), 0.0);
        assert_eq!(conj(&v).elem(1), 4.0);
    }
}
