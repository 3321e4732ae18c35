//! Core traits: expressions, scalars and the standard container wrappers.

pub mod scalar;
pub mod traits;
pub mod wrappers;

pub use scalar::{RealOf, RealScalar, ResultOf, Scalar, UnaryFn};
pub use traits::{Expression, MatExpr, MatrixKind, Orientation, VecExpr, VectorKind};
