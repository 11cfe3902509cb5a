//! Parameters of a PVS run.

use crate::float_types::Real;
use crate::superleaf::DepthAreaCondition;

/// Tunables of the SuperLeaf clustering plus the dry-run switch.
///
/// Coarser clustering (smaller depth, larger area) is faster and yields a
/// PVS that is a superset of the finer one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PvsConfig {
    /// Depth below the root at which subtrees are collapsed. `u32::MAX` is unbounded.
    pub max_recursion_depth: u32,
    /// Subtrees with less face area are collapsed. Never negative.
    pub min_subtree_faces_area: Real,
    /// Stop after building the SuperLeaves.
    pub only_super_leaves: bool,
}

impl Default for PvsConfig {
    fn default() -> Self {
        Self {
            max_recursion_depth: u32::MAX,
            min_subtree_faces_area: 0.0,
            only_super_leaves: false,
        }
    }
}

impl PvsConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn max_recursion_depth(mut self, depth: u32) -> Self {
        self.max_recursion_depth = depth;
        self
    }

    /// Negative (and NaN) areas are clamped to zero.
    pub fn min_subtree_faces_area(mut self, area: Real) -> Self {
        self.min_subtree_faces_area = if area > 0.0 { area } else { 0.0 };
        self
    }

    pub const fn only_super_leaves(mut self, only: bool) -> Self {
        self.only_super_leaves = only;
        self
    }

    /// The SuperLeaf collapse condition for these parameters.
    pub const fn condition(&self) -> DepthAreaCondition {
        DepthAreaCondition {
            max_recursion_depth: self.max_recursion_depth,
            min_subtree_faces_area: self.min_subtree_faces_area,
        }
    }
}
