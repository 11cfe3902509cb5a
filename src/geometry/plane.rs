//! Oriented planes in Hesse normal form and the side codes used to classify
//! polygons against them.

use crate::float_types::Real;
use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

// Point classification flags, OR-ed together over the vertices of a polygon.
pub const ON: u8 = 1;
pub const FRONT: u8 = 2;
pub const BACK: u8 = 4;

/// Where a polygon lies with respect to a plane.
///
/// The `...AndOn` variants report that some vertices are within the plane
/// thickness in addition to the base answer. A polygon whose vertices are *all*
/// within the plane thickness is either [`Side::InIdentical`] or
/// [`Side::InMirrored`], depending on whether its own normal agrees with the
/// plane normal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Empty,
    Front,
    FrontAndOn,
    Back,
    BackAndOn,
    Both,
    BothAndOn,
    InIdentical,
    InMirrored,
}

impl Side {
    /// Builds the side code from OR-ed point flags. `same_orientation` decides
    /// between `InIdentical` and `InMirrored` when only [`ON`] is set.
    pub const fn from_flags(flags: u8, same_orientation: bool) -> Self {
        match flags {
            0 => Side::Empty,
            ON => {
                if same_orientation {
                    Side::InIdentical
                } else {
                    Side::InMirrored
                }
            },
            FRONT => Side::Front,
            3 => Side::FrontAndOn,
            BACK => Side::Back,
            5 => Side::BackAndOn,
            6 => Side::Both,
            _ => Side::BothAndOn,
        }
    }

    /// Folds the `...AndOn` answers into their base answer.
    pub const fn simple(self) -> Self {
        match self {
            Side::FrontAndOn => Side::Front,
            Side::BackAndOn => Side::Back,
            Side::BothAndOn => Side::Both,
            other => other,
        }
    }

    /// `true` for polygons lying entirely within the plane thickness.
    pub const fn is_coplanar(self) -> bool {
        matches!(self, Side::InIdentical | Side::InMirrored)
    }
}

/// A plane `normal · p = dist` with unit normal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Plane {
    pub normal: Vector3<Real>,
    pub dist: Real,
}

impl Plane {
    /// Create a new plane from a (not necessarily unit) normal and the distance
    /// from the origin measured along the normalized normal.
    pub fn from_normal(normal: Vector3<Real>, dist: Real) -> Self {
        Plane {
            normal: normal.normalize(),
            dist,
        }
    }

    /// The plane through `a`, `b` and `c` whose normal is `(b - a) × (c - a)`.
    ///
    /// Returns `None` when that cross product is shorter than `eps`, i.e. the
    /// three points are (nearly) collinear.
    pub fn from_points(
        a: &Point3<Real>,
        b: &Point3<Real>,
        c: &Point3<Real>,
        eps: Real,
    ) -> Option<Self> {
        let normal = (b - a).cross(&(c - a));
        let len = normal.norm();
        if !(len >= eps) {
            return None;
        }
        let normal = normal / len;
        Some(Plane {
            normal,
            dist: normal.dot(&a.coords),
        })
    }

    pub const fn normal(&self) -> Vector3<Real> {
        self.normal
    }

    pub const fn offset(&self) -> Real {
        self.dist
    }

    /// Signed distance of `p` from the plane, positive on the front side.
    #[inline]
    pub fn distance(&self, p: &Point3<Real>) -> Real {
        self.normal.dot(&p.coords) - self.dist
    }

    /// Classify a point into one of [`ON`], [`FRONT`] or [`BACK`].
    #[inline]
    pub fn classify_point(&self, p: &Point3<Real>, eps: Real) -> u8 {
        let d = self.distance(p);
        if d > eps {
            FRONT
        } else if d < -eps {
            BACK
        } else {
            ON
        }
    }

    /// Return a flipped copy of this plane
    pub fn mirrored(&self) -> Self {
        Plane {
            normal: -self.normal,
            dist: -self.dist,
        }
    }

    /// Intersection of the segment `a`-`b` with the plane.
    ///
    /// The caller guarantees that `a` and `b` are on opposite sides; the
    /// parameter is clamped so the result never leaves the segment.
    pub fn intersection(&self, a: &Point3<Real>, b: &Point3<Real>) -> Point3<Real> {
        let da = self.distance(a);
        let db = self.distance(b);
        let denom = da - db;
        if denom == 0.0 {
            return *a;
        }
        let t = (da / denom).clamp(0.0, 1.0);
        a + (b - a) * t
    }

    /// `true` if the normal is (roughly) of unit length.
    pub fn is_valid(&self) -> bool {
        let len = self.normal.norm();
        len.is_finite() && (len - 1.0).abs() < 0.001 && self.dist.is_finite()
    }
}
