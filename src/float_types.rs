// Our Real scalar type:
#[cfg(feature = "f32")]
pub type Real = f32;
#[cfg(feature = "f64")]
pub type Real = f64;

/// Half thickness of a plane: points closer than this to a plane are "on" it.
///
/// World units are millimetres, so this is 2 mm. Portals that come out of the
/// BSP compiler are only accurate to about this amount, and every side test in
/// the crate uses it.
pub const ROUND_EPSILON: Real = 2.0;

/// Minimum distance two vertices of a valid polygon must keep from each other.
///
/// Kept well above [`ROUND_EPSILON`]: polygons whose structural size is on the
/// order of the rounding error break the side tests in subtle ways.
pub const MIN_VERTEX_DIST: Real = 10.0;
