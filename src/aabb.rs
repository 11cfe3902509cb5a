//! Axis-aligned bounding boxes of leaves, SuperLeaves and portals.

use crate::float_types::Real;
use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub mins: Point3<Real>,
    pub maxs: Point3<Real>,
}

impl Aabb {
    #[inline]
    pub const fn new(mins: Point3<Real>, maxs: Point3<Real>) -> Self {
        Self { mins, maxs }
    }

    /// Smallest box containing all `points`, or `None` for an empty set.
    pub fn from_points<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Point3<Real>>,
    {
        let mut iter = points.into_iter();
        let first = *iter.next()?;
        let mut aabb = Self::new(first, first);
        for p in iter {
            aabb.insert(p);
        }
        Some(aabb)
    }

    /// Grow the box so that it contains `p`.
    #[inline]
    pub fn insert(&mut self, p: &Point3<Real>) {
        self.mins = self.mins.inf(p);
        self.maxs = self.maxs.sup(p);
    }

    /// Grow the box so that it contains `other`.
    #[inline]
    pub fn insert_box(&mut self, other: &Self) {
        self.insert(&other.mins);
        self.insert(&other.maxs);
    }

    pub fn union(&self, other: &Self) -> Self {
        let mut merged = *self;
        merged.insert_box(other);
        merged
    }

    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        self.maxs.x >= other.mins.x
            && self.mins.x <= other.maxs.x
            && self.maxs.y >= other.mins.y
            && self.mins.y <= other.maxs.y
            && self.maxs.z >= other.mins.z
            && self.mins.z <= other.maxs.z
    }

    /// The box grown by `eps` on every side (shrunk for negative `eps`).
    #[inline]
    pub fn epsilon_box(&self, eps: Real) -> Self {
        let e = Vector3::repeat(eps);
        Self::new(self.mins - e, self.maxs + e)
    }
}
