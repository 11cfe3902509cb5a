//! Nodes and leaves of a portalized BSP tree.

use crate::aabb::Aabb;
use crate::geometry::Polygon;
use serde::{Deserialize, Serialize};

/// Reference from a node to one of its two children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Child {
    Leaf(usize),
    Node(usize),
}

/// An inner node of the tree. The splitting plane itself is not needed once
/// the leaves and their portals are built, so it is not stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub front: Child,
    pub back: Child,
}

impl Node {
    pub const fn new(front: Child, back: Child) -> Self {
        Self { front, back }
    }

    /// Both children, front first.
    pub const fn children(&self) -> [Child; 2] {
        [self.front, self.back]
    }
}

/// A convex terminal region of the tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Leaf {
    pub bounds: Aabb,

    /// Portal polygons on the boundary of this leaf. They face into the leaf.
    pub portals: Vec<Polygon>,

    /// Indices into [`super::BspTree::faces`]. A face may be listed by
    /// several leaves.
    pub face_set: Vec<usize>,

    /// Only inner leaves take part in the final PVS. Outer (void) leaves may
    /// still carry portals.
    pub is_inner: bool,
}

impl Leaf {
    pub const fn new(bounds: Aabb, portals: Vec<Polygon>, is_inner: bool) -> Self {
        Self {
            bounds,
            portals,
            face_set: Vec::new(),
            is_inner,
        }
    }

    pub fn with_faces(mut self, face_set: Vec<usize>) -> Self {
        self.face_set = face_set;
        self
    }
}
