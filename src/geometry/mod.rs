//! Geometry kernel: thick planes and convex polygons.

pub mod plane;
pub mod polygon;

pub use plane::{Plane, Side};
pub use polygon::Polygon;
