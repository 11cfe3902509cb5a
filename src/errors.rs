//! Validation, tree and world errors

use crate::float_types::Real;
use nalgebra::Point3;
use std::fmt::Display;

/// All the possible validation issues of a convex polygon
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// (TooFewPoints) A polygon has fewer than three vertices
    TooFewPoints(usize),
    /// (InvalidCoordinate) The coordinate has a NaN or infinite
    InvalidCoordinate(Point3<Real>),
    /// (DegeneratePlane) The plane normal is not of unit length
    DegeneratePlane,
    /// (OffPlane) A vertex is farther than the rounding epsilon from the plane
    OffPlane { point: Point3<Real>, distance: Real },
    /// (RepeatedPoint) Two vertices are closer than the minimum vertex distance
    RepeatedPoint(Point3<Real>),
    /// (NotConvex) A vertex is not strictly inside the plane of an edge
    NotConvex(Point3<Real>),
    /// (WrongOrientation) The winding disagrees with the plane normal
    WrongOrientation,
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::TooFewPoints(n) => write!(f, "(TooFewPoints) A polygon needs at least 3 vertices, got {}", n),
            ValidationError::InvalidCoordinate(opoint) => write!(f, "(InvalidCoordinate) The coordinate ({}) has a NaN or infinite", opoint),
            ValidationError::DegeneratePlane => write!(f, "(DegeneratePlane) The plane normal is not of unit length"),
            ValidationError::OffPlane { point, distance } => write!(f, "(OffPlane) Vertex {} is {} away from the polygon plane", point, distance),
            ValidationError::RepeatedPoint(opoint) => write!(f, "(RepeatedPoint) Two vertices are closer than the minimum distance at: {}", opoint),
            ValidationError::NotConvex(opoint) => write!(f, "(NotConvex) The polygon is not strictly convex at: {}", opoint),
            ValidationError::WrongOrientation => write!(f, "(WrongOrientation) The vertex winding disagrees with the plane normal"),
        }
    }
}

/// A BSP tree that violates the structural preconditions of the PVS computation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    #[error("the tree has no leaves")]
    NoLeaves,
    #[error("a tree without nodes must hold exactly one leaf, found {0}")]
    RootlessLeaves(usize),
    #[error("node {node} refers to node {child}, but there are only {count} nodes")]
    NodeOutOfRange { node: usize, child: usize, count: usize },
    #[error("node {node} refers to leaf {child}, but there are only {count} leaves")]
    LeafOutOfRange { node: usize, child: usize, count: usize },
    #[error("node {0} is reachable more than once from the root")]
    SharedNode(usize),
    #[error("leaf {0} is reachable more than once from the root")]
    SharedLeaf(usize),
    #[error("leaf {0} is not reachable from the root")]
    UnreachableLeaf(usize),
    #[error("leaf {leaf} refers to face {face}, but there are only {count} faces")]
    FaceOutOfRange { leaf: usize, face: usize, count: usize },
}

/// Errors of the world storage collaborator.
#[derive(Debug, thiserror::Error)]
pub enum WorldError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("world encoding error: {0}")]
    Codec(#[from] bincode::Error),
    #[error("not a world file (magic {0:?})")]
    BadMagic([u8; 4]),
    #[error("unsupported world file version {0}")]
    UnsupportedVersion(u32),
    #[error("malformed BSP tree: {0}")]
    Tree(#[from] TreeError),
}
