//! Configuration for materializing expressions into concrete containers.

pub mod options;
pub use options::{AssignMode, AssignOptions};
