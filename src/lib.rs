//! Offline **Potentially Visible Set (PVS)** computation over portalized
//! [BSP](bsp) trees.
//!
//! Given the leaves of a BSP tree and the portal polygons connecting them, the
//! crate determines for every leaf which other leaves can possibly be seen from
//! it, and packs the result into a bit matrix for a renderer to cull with.
//!
//! The computation runs in four steps:
//! 1. [`superleaf`]: leaves are clustered into SuperLeaves under a depth and
//!    face area budget,
//! 2. [`adjacency`]: neighbouring SuperLeaves and their shared sub-portals are found,
//! 3. [`pvs`]: a shrinking frustum is flooded through the portal graph from
//!    every SuperLeaf,
//! 4. [`assemble`]: the SuperLeaf visibility is expanded to a symmetric leaf PVS.
//!
//! [`pipeline::run`] performs all of them.
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//! - **parallel**: use rayon to propagate visibility from all SuperLeaves concurrently

#![forbid(unsafe_code)]

pub mod aabb;
pub mod adjacency;
pub mod assemble;
pub mod bsp;
pub mod config;
pub mod errors;
pub mod float_types;
pub mod geometry;
pub mod pipeline;
pub mod pvs;
pub mod superleaf;
pub mod world;

#[cfg(any(
    all(feature = "f64", feature = "f32"),
    not(any(feature = "f64", feature = "f32"))
))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use bsp::{BspTree, Child, Leaf, Node};
pub use config::PvsConfig;
pub use geometry::{Plane, Polygon, Side};
pub use pipeline::{PvsOutcome, PvsReport};
pub use pvs::BitMatrix;
pub use superleaf::{Neighbour, SuperLeaf};
pub use world::World;
