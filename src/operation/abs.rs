//! Elementwise absolute value.

use crate::core::scalar::Scalar;
use crate::core::traits::Expression;
use crate::expression::{Mapped, Wrap, apply};
use crate::operation::DeriveFn;

/// Applies `|x|` to every element of a vector or matrix expression.
///
/// The result scalar is the operand's real counterpart: `abs` of a
/// `Complex<f64>` expression yields an `f64` expression (the modulus), and
/// `abs` of an `f64` expression stays `f64`.
///
/// # Examples
///
/// ```
/// use ewise::{abs, to_vec};
/// use num_complex::Complex64;
///
/// let v = vec![Complex64::new(3.0, 4.0), Complex64::new(0.0, -2.0)];
/// let m: Vec<f64> = to_vec(abs(&v));
/// assert_eq!(m, vec![5.0, 2.0]);
/// ```
pub fn abs<E>(expr: E) -> Mapped<E, DeriveFn<E::Elem>>
where
    E: Expression,
    E::Elem: Scalar,
    E::Kind: Wrap<E, DeriveFn<E::Elem>>,
{
    let f: DeriveFn<E::Elem> = <E::Elem as Scalar>::modulus;
    apply(expr, f)
}
