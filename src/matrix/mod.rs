//! Matrix module: sparse operand types.
//!
//! Dense operands are plain `faer::Mat`/`faer::Col` (see `core::wrappers`).

pub mod sparse;
pub use sparse::{CsrMatrix, SparseVec};
