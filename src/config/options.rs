//! Options controlling how an expression is assigned into a container.
//!
//! Assignment is the point where a lazy expression is finally evaluated. The
//! `AssignOptions` struct selects whether the destination may be resized to
//! the expression's shape, and in which order matrix elements are visited.

use bitflags::bitflags;
use crate::core::traits::Orientation;

bitflags! {
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct AssignMode: u32 {
        const RESIZE        = 0b0001; // reshape destination to the expression
        const ROW_SWEEP     = 0b0010;
        const COLUMN_SWEEP  = 0b0100;
        const NATURAL_SWEEP = Self::ROW_SWEEP.bits() | Self::COLUMN_SWEEP.bits();
    }
}

/// Assignment behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssignOptions {
    /// Resize and sweep flags.
    pub mode: AssignMode,
}

impl AssignOptions {
    pub fn new(mode: AssignMode) -> Self {
        Self { mode }
    }

    /// Strict assignment: the destination must already have the right shape.
    pub fn strict() -> Self {
        Self::new(AssignMode::NATURAL_SWEEP)
    }

    pub fn resizes(&self) -> bool {
        self.mode.contains(AssignMode::RESIZE)
    }

    /// Traversal order to use for an expression reporting `natural`.
    ///
    /// With both sweep bits (or neither) set the expression's own orientation
    /// wins; otherwise the single requested sweep is forced.
    pub fn sweep_for(&self, natural: Orientation) -> Orientation {
        let row = self.mode.contains(AssignMode::ROW_SWEEP);
        let col = self.mode.contains(AssignMode::COLUMN_SWEEP);
        match (row, col) {
            (true, false) => Orientation::RowMajor,
            (false, true) => Orientation::ColumnMajor,
            _ => natural,
        }
    }
}

impl Default for AssignOptions {
    fn default() -> Self {
        Self::new(AssignMode::RESIZE | AssignMode::NATURAL_SWEEP)
    }
}
