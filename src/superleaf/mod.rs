//! SuperLeaves: clusters of BSP leaves that the visibility propagation works on.
//!
//! Clustering trades precision for speed. Every leaf of the tree ends up in
//! exactly one SuperLeaf; with an unbounded depth budget and no area limit,
//! every SuperLeaf holds exactly one leaf.

pub mod condition;

pub use condition::{DepthAreaCondition, SuperLeafCondition};

use crate::aabb::Aabb;
use crate::bsp::{BspTree, Child};
use crate::geometry::Polygon;
use log::{debug, info};

/// A directed adjacency: the neighbouring SuperLeaf and the part of its portal
/// that borders this one. The sub-portal faces in the direction of travel.
#[derive(Debug, Clone, PartialEq)]
pub struct Neighbour {
    pub super_leaf: usize,
    pub sub_portal: Polygon,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SuperLeaf {
    /// Leaf indices, in depth-first order of the tree.
    pub leaf_set: Vec<usize>,
    /// Union of the portals of all leaves in `leaf_set`. Portals between two
    /// leaves of the same SuperLeaf are kept.
    pub portals: Vec<Polygon>,
    pub bounds: Aabb,
    /// Filled in by [`crate::adjacency::build_adjacency`].
    pub neighbours: Vec<Neighbour>,
}

impl SuperLeaf {
    /// Merge `leaf_set` (non-empty) into one SuperLeaf without neighbours.
    pub fn from_leaves(tree: &BspTree, leaf_set: Vec<usize>) -> Self {
        let first = &tree.leaves[leaf_set[0]];
        let mut bounds = first.bounds;
        let mut portals = Vec::new();
        for &l in &leaf_set {
            let leaf = &tree.leaves[l];
            bounds.insert_box(&leaf.bounds);
            portals.extend(leaf.portals.iter().cloned());
        }
        Self {
            leaf_set,
            portals,
            bounds,
            neighbours: Vec::new(),
        }
    }

    /// Bounding box of all neighbour sub-portals.
    pub fn portal_bounds(&self) -> Option<Aabb> {
        self.neighbours
            .iter()
            .filter_map(|n| n.sub_portal.bounding_box())
            .reduce(|a, b| a.union(&b))
    }
}

/// Partition the leaves of `tree` into SuperLeaves.
///
/// The root is never collapsed. Below it, a leaf child always becomes a
/// SuperLeaf of its own, a node child either becomes one SuperLeaf for its
/// whole subtree (when `condition` says so) or is descended into.
///
/// The tree must be valid, see [`BspTree::validate`].
pub fn build_super_leaves<C: SuperLeafCondition + ?Sized>(tree: &BspTree, condition: &C) -> Vec<SuperLeaf> {
    let mut super_leaves = Vec::new();

    match tree.root() {
        Child::Leaf(l) => super_leaves.push(SuperLeaf::from_leaves(tree, vec![l])),
        Child::Node(root) => {
            // (child, depth of the child); back is pushed first so the front
            // subtree is emitted first.
            let node = &tree.nodes[root];
            let mut stack = vec![(node.back, 1u32), (node.front, 1u32)];

            while let Some((child, depth)) = stack.pop() {
                match child {
                    Child::Leaf(l) => super_leaves.push(SuperLeaf::from_leaves(tree, vec![l])),
                    Child::Node(n) if condition.should_collapse(tree, child, depth) => {
                        let leaf_set = tree.leaves_under(child);
                        debug!("collapsing node {} at depth {} ({} leaves)", n, depth, leaf_set.len());
                        super_leaves.push(SuperLeaf::from_leaves(tree, leaf_set));
                    },
                    Child::Node(n) => {
                        let node = &tree.nodes[n];
                        let next = depth.saturating_add(1);
                        stack.push((node.back, next));
                        stack.push((node.front, next));
                    },
                }
            }
        },
    }

    info!(
        "created {} super leaves from {} leaves",
        super_leaves.len(),
        tree.leaf_count()
    );
    super_leaves
}
