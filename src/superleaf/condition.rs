//! Strategies deciding where the SuperLeaf builder stops descending.

use crate::bsp::{BspTree, Child};
use crate::float_types::Real;

/// Trait for deciding whether a whole subtree becomes one SuperLeaf
pub trait SuperLeafCondition {
    /// `true` if the subtree rooted at `node`, found at `depth` below the
    /// root, is to be merged into a single SuperLeaf.
    fn should_collapse(&self, tree: &BspTree, node: Child, depth: u32) -> bool;
}

/// Default condition: collapse below a depth budget or when the subtree
/// carries too little face area to be worth subdividing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepthAreaCondition {
    pub max_recursion_depth: u32,
    pub min_subtree_faces_area: Real,
}

impl Default for DepthAreaCondition {
    fn default() -> Self {
        Self {
            max_recursion_depth: u32::MAX,
            min_subtree_faces_area: 0.0,
        }
    }
}

impl SuperLeafCondition for DepthAreaCondition {
    fn should_collapse(&self, tree: &BspTree, node: Child, depth: u32) -> bool {
        if depth > self.max_recursion_depth {
            return true;
        }
        // No area can be below a non-positive minimum, so skip the walk.
        self.min_subtree_faces_area > 0.0
            && tree.subtree_faces_area(node) < self.min_subtree_faces_area
    }
}
