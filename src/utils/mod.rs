//! Utilities: materializing lazy expressions into concrete containers.

pub mod materialize;
pub use materialize::{assign_mat, assign_vec, sweep, to_col, to_mat, to_mat_with, to_vec};
