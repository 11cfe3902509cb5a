//! Traits defining the visibility propagation for dependency inversion

use crate::pvs::matrix::BitMatrix;
use crate::superleaf::SuperLeaf;

/// Computes the SuperLeaf-level PVS from SuperLeaves with neighbour lists.
pub trait PropagationOps {
    /// Row `m` of the result holds everything potentially visible from
    /// SuperLeaf `m`. The result is not necessarily symmetric.
    fn propagate(&self, super_leaves: &[SuperLeaf]) -> BitMatrix;
}
