//! The portalized [BSP](https://en.wikipedia.org/wiki/Binary_space_partitioning)
//! tree consumed by the PVS computation.
//!
//! The tree is stored as two arenas: `nodes[0]` is the root, children are
//! tagged indices into either arena. A tree without nodes consists of exactly
//! one leaf.

pub mod node;

pub use node::{Child, Leaf, Node};

use crate::errors::TreeError;
use crate::float_types::Real;
use crate::geometry::Polygon;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BspTree {
    pub nodes: Vec<Node>,
    pub leaves: Vec<Leaf>,
    pub faces: Vec<Polygon>,
}

impl BspTree {
    pub const fn new(nodes: Vec<Node>, leaves: Vec<Leaf>, faces: Vec<Polygon>) -> Self {
        Self {
            nodes,
            leaves,
            faces,
        }
    }

    /// The root of the tree: node 0, or leaf 0 for a tree without nodes.
    pub fn root(&self) -> Child {
        if self.nodes.is_empty() {
            Child::Leaf(0)
        } else {
            Child::Node(0)
        }
    }

    pub fn leaf_count(&self) -> usize {
        self.leaves.len()
    }

    pub fn inner_leaf_count(&self) -> usize {
        self.leaves.iter().filter(|l| l.is_inner).count()
    }

    /// Checks that every child index is in range, every leaf is reachable
    /// exactly once from the root, and every face index is in range.
    pub fn validate(&self) -> Result<(), TreeError> {
        if self.leaves.is_empty() {
            return Err(TreeError::NoLeaves);
        }
        if self.nodes.is_empty() && self.leaves.len() != 1 {
            return Err(TreeError::RootlessLeaves(self.leaves.len()));
        }

        for (leaf, l) in self.leaves.iter().enumerate() {
            if let Some(&face) = l.face_set.iter().find(|&&f| f >= self.faces.len()) {
                return Err(TreeError::FaceOutOfRange {
                    leaf,
                    face,
                    count: self.faces.len(),
                });
            }
        }

        let mut seen_nodes = vec![false; self.nodes.len()];
        let mut seen_leaves = vec![false; self.leaves.len()];
        let mut stack = vec![self.root()];

        while let Some(child) = stack.pop() {
            match child {
                Child::Leaf(l) => {
                    if std::mem::replace(&mut seen_leaves[l], true) {
                        return Err(TreeError::SharedLeaf(l));
                    }
                },
                Child::Node(n) => {
                    if std::mem::replace(&mut seen_nodes[n], true) {
                        return Err(TreeError::SharedNode(n));
                    }
                    for c in self.nodes[n].children() {
                        match c {
                            Child::Node(i) if i >= self.nodes.len() => {
                                return Err(TreeError::NodeOutOfRange {
                                    node: n,
                                    child: i,
                                    count: self.nodes.len(),
                                });
                            },
                            Child::Leaf(i) if i >= self.leaves.len() => {
                                return Err(TreeError::LeafOutOfRange {
                                    node: n,
                                    child: i,
                                    count: self.leaves.len(),
                                });
                            },
                            _ => stack.push(c),
                        }
                    }
                },
            }
        }

        match seen_leaves.iter().position(|seen| !seen) {
            Some(leaf) => Err(TreeError::UnreachableLeaf(leaf)),
            None => Ok(()),
        }
    }

    /// All leaves below `child` in depth-first order, front before back.
    pub fn leaves_under(&self, child: Child) -> Vec<usize> {
        let mut out = Vec::new();
        let mut stack = vec![child];
        while let Some(c) = stack.pop() {
            match c {
                Child::Leaf(l) => out.push(l),
                Child::Node(n) => {
                    let node = &self.nodes[n];
                    stack.push(node.back);
                    stack.push(node.front);
                },
            }
        }
        out
    }

    /// Sum of the face areas of all leaves below `child`.
    ///
    /// A face listed by several leaves is counted once per leaf.
    pub fn subtree_faces_area(&self, child: Child) -> Real {
        self.leaves_under(child)
            .into_iter()
            .flat_map(|l| self.leaves[l].face_set.iter())
            .map(|&f| self.faces[f].area())
            .sum()
    }
}
