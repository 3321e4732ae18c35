//! Elementwise operation entry points.
//!
//! Every operation is one generic function covering vector and matrix
//! expressions alike. It resolves the result scalar from the operand's
//! element type, binds the matching kernel from the [`Scalar`](crate::core::scalar::Scalar) registry as a
//! plain function pointer of that exact signature, and returns the lazy
//! proxy built by [`apply`](crate::expression::apply).
//!
//! Two signature families exist:
//! - derive: `S -> RealOf<S>` ([`abs`], [`real`], [`imag`], [`arg`])
//! - identity: `S -> S` ([`pow`], [`pow2`], [`conj`], [`sqrt`], [`exp`], [`ln`])

use crate::core::scalar::RealOf;

pub mod abs;
pub mod parts;
pub mod pow;
pub mod pow2;
pub mod transcendental;

pub use abs::abs;
pub use parts::{arg, conj, imag, real};
pub use pow::{PowFn, pow};
pub use pow2::pow2;
pub use transcendental::{exp, ln, sqrt};

/// Bound kernel of a derive-style operation.
pub type DeriveFn<S> = fn(S) -> RealOf<S>;

/// Bound kernel of an identity-style operation.
pub type IdentityFn<S> = fn(S) -> S;

