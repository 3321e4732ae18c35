//! ewise: lazy elementwise functions over faer vectors and matrices
//!
//! This crate lets `f(expr)` stand for "apply `f` to every element of `expr`"
//! without evaluating anything up front. Operands may be dense (`Vec`, slices,
//! `faer::Col`, `faer::Mat`), sparse (`SparseVec`, `CsrMatrix`) or other lazy
//! expressions; the returned proxy reads its operand live and computes each
//! element only when it is read or materialized.
//!
//! ```
//! use ewise::{abs, pow2, to_mat};
//! use faer::Mat;
//!
//! let a = Mat::from_fn(2, 3, |i, j| (3 * i + j + 1) as f64);
//! let r = to_mat(abs(pow2(&a)));
//! assert_eq!(r[(1, 2)], 64.0);
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod expression;
pub mod matrix;
pub mod operation;
pub mod utils;

// Re-exports for convenience
pub use crate::config::*;
pub use crate::core::*;
pub use crate::error::*;
pub use crate::expression::*;
pub use crate::matrix::*;
pub use crate::operation::*;
pub use crate::utils::*;
