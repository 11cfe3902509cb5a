//! Separating-plane frusta between two portals and clipping against them.
//!
//! Portals here face in the direction of travel: a sight line passes through
//! the light source first, then through the hole in front of it.

use crate::float_types::Real;
use crate::geometry::{Plane, Polygon, Side};

/// The planes bounding every line through a point of `light_source` and a
/// point of `hole`.
///
/// Each plane passes through an edge of one portal and a vertex of the other,
/// and is oriented such that `hole` is in front and `light_source` behind it.
/// The empty frustum means that no valid arrangement exists: the hole must lie
/// in front of the light source plane, and the light source behind the hole
/// plane.
pub fn find_frustum(light_source: &Polygon, hole: &Polygon, eps: Real) -> Vec<Plane> {
    if hole.what_side_simple(&light_source.plane, eps) != Side::Front {
        return Vec::new();
    }
    if light_source.what_side_simple(&hole.plane, eps) != Side::Back {
        return Vec::new();
    }

    let mut frustum = Vec::new();

    // Planes through an edge of the hole and a vertex of the light source.
    for (v2, v3) in edges(hole) {
        for v1 in &light_source.vertices {
            let Some(plane) = Plane::from_points(v2, v3, v1, eps) else {
                continue;
            };
            let plane = match hole.what_side_simple(&plane, eps) {
                Side::Front => plane,
                Side::Back => plane.mirrored(),
                _ => continue,
            };
            if matches!(
                light_source.what_side_simple(&plane, eps),
                Side::Back | Side::InIdentical | Side::InMirrored
            ) {
                frustum.push(plane);
                break;
            }
        }
    }

    // Planes through an edge of the light source and a vertex of the hole.
    for (v2, v3) in edges(light_source) {
        for v1 in &hole.vertices {
            let Some(plane) = Plane::from_points(v2, v3, v1, eps) else {
                continue;
            };
            let plane = match light_source.what_side_simple(&plane, eps) {
                Side::Back => plane,
                Side::Front => plane.mirrored(),
                _ => continue,
            };
            if matches!(
                hole.what_side_simple(&plane, eps),
                Side::Front | Side::InIdentical | Side::InMirrored
            ) {
                frustum.push(plane);
                break;
            }
        }
    }

    frustum
}

/// Clip `polygon` to the front of every frustum plane.
///
/// `None` if the polygon is entirely behind (or in) one of the planes.
pub fn clip_to_front(polygon: &Polygon, frustum: &[Plane], eps: Real) -> Option<Polygon> {
    clip(polygon, frustum, eps, Side::Front)
}

/// Clip `polygon` to the back of every frustum plane.
pub fn clip_to_back(polygon: &Polygon, frustum: &[Plane], eps: Real) -> Option<Polygon> {
    clip(polygon, frustum, eps, Side::Back)
}

fn clip(polygon: &Polygon, frustum: &[Plane], eps: Real, keep: Side) -> Option<Polygon> {
    let mut fragment = polygon.clone();
    for plane in frustum {
        match fragment.what_side_simple(plane, eps) {
            Side::Both => {
                let (front, back) = fragment.split(plane, eps);
                fragment = if keep == Side::Front { front? } else { back? };
            },
            side if side == keep => {},
            _ => return None,
        }
    }
    Some(fragment)
}

fn edges(polygon: &Polygon) -> impl Iterator<Item = (&nalgebra::Point3<Real>, &nalgebra::Point3<Real>)> {
    polygon
        .vertices
        .iter()
        .zip(polygon.vertices.iter().cycle().skip(1))
}
