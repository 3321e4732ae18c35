//! Elementwise base-2 exponential.

use crate::core::scalar::Scalar;
use crate::core::traits::Expression;
use crate::expression::{Mapped, Wrap, apply};
use crate::operation::IdentityFn;

/// Applies `2^x` to every element of a vector or matrix expression.
///
/// Real elements use `exp2`. Complex elements `a+bi` map to
/// `2^a (cos(b ln 2) + i sin(b ln 2))`. The result scalar equals the operand's.
///
/// # Examples
///
/// ```
/// use ewise::{pow2, to_vec};
///
/// let v = vec![0.0f64, 1.0, 10.0];
/// assert_eq!(to_vec(pow2(&v)), vec![1.0, 2.0, 1024.0]);
/// ```
pub fn pow2<E>(expr: E) -> Mapped<E, IdentityFn<E::Elem>>
where
    E: Expression,
    E::Elem: Scalar,
    E::Kind: Wrap<E, IdentityFn<E::Elem>>,
{
    let f: IdentityFn<E::Elem> = <E::Elem as Scalar>::exp2;
    apply(expr, f)
}
