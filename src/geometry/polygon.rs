//! Convex polygons with an explicit supporting plane.
//!
//! Properties of a valid [`Polygon`]:
//! 1. it is convex and has at least three vertices,
//! 2. all vertices lie within the rounding epsilon of `plane`,
//! 3. the vertices are in clockwise order as seen from the front half-space
//!    (that is, looking against the plane normal),
//! 4. no two vertices are closer than the minimum vertex distance.
//!
//! All clipping operations return new polygons and never produce a vertex
//! outside of the polygon they started from.

use crate::aabb::Aabb;
use crate::errors::ValidationError;
use crate::float_types::{MIN_VERTEX_DIST, ROUND_EPSILON, Real};
use crate::geometry::plane::{Plane, Side};
use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    pub vertices: Vec<Point3<Real>>,
    pub plane: Plane,
}

impl Polygon {
    /// Create a polygon from vertices and a plane that is already known to fit.
    pub const fn new(vertices: Vec<Point3<Real>>, plane: Plane) -> Self {
        Polygon { vertices, plane }
    }

    /// Create a polygon from clockwise (as seen from the front) vertices,
    /// deriving the plane with Newell's method.
    ///
    /// Returns `None` for fewer than three points or a zero-area outline.
    pub fn from_points(vertices: Vec<Point3<Real>>) -> Option<Self> {
        if vertices.len() < 3 {
            return None;
        }

        // Newell's normal follows the right-hand rule, i.e. it points to the
        // side from which the outline appears counter-clockwise.
        let newell = vertices
            .iter()
            .zip(vertices.iter().cycle().skip(1))
            .fold(Vector3::zeros(), |acc, (curr, next)| acc + curr.coords.cross(&next.coords));
        let len = newell.norm();
        if !(len > Real::EPSILON) {
            return None;
        }

        let normal = -newell / len;
        let centroid = centroid(&vertices);
        let plane = Plane {
            normal,
            dist: normal.dot(&centroid.coords),
        };
        Some(Polygon { vertices, plane })
    }

    /// Like [`Polygon::from_points`], but accepts either winding and returns
    /// the polygon whose normal points into the half-space of `facing`.
    pub fn from_points_facing(vertices: Vec<Point3<Real>>, facing: &Vector3<Real>) -> Option<Self> {
        let polygon = Self::from_points(vertices)?;
        if polygon.plane.normal.dot(facing) < 0.0 {
            Some(polygon.mirrored())
        } else {
            Some(polygon)
        }
    }

    /// Returns a mirrored copy of this polygon, with reversed plane and reversed order.
    pub fn mirrored(&self) -> Self {
        Polygon {
            vertices: self.vertices.iter().rev().copied().collect(),
            plane: self.plane.mirrored(),
        }
    }

    pub fn centroid(&self) -> Point3<Real> {
        centroid(&self.vertices)
    }

    /// Area of the polygon.
    pub fn area(&self) -> Real {
        if self.vertices.len() < 3 {
            return 0.0;
        }
        let sum = self
            .vertices
            .iter()
            .zip(self.vertices.iter().cycle().skip(1))
            .fold(Vector3::zeros(), |acc, (curr, next)| acc + curr.coords.cross(&next.coords));
        (self.plane.normal.dot(&sum) / 2.0).abs()
    }

    pub fn bounding_box(&self) -> Option<Aabb> {
        Aabb::from_points(&self.vertices)
    }

    /// Determines on what side of `plane` this polygon is.
    pub fn what_side(&self, plane: &Plane, eps: Real) -> Side {
        let flags = self
            .vertices
            .iter()
            .fold(0u8, |acc, v| acc | plane.classify_point(v, eps));
        Side::from_flags(flags, self.plane.normal.dot(&plane.normal) > 0.0)
    }

    /// Like [`Polygon::what_side`], with the `...AndOn` answers folded away.
    pub fn what_side_simple(&self, plane: &Plane, eps: Real) -> Side {
        self.what_side(plane, eps).simple()
    }

    /// The plane that contains edge `(i, i + 1)`, is orthogonal to the polygon
    /// plane and faces the polygon interior.
    ///
    /// `None` if the edge is shorter than `eps`.
    pub fn edge_plane(&self, i: usize, eps: Real) -> Option<Plane> {
        let n = self.vertices.len();
        let a = self.vertices[i];
        let b = self.vertices[(i + 1) % n];
        let normal = (b - a).cross(&self.plane.normal);
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

    /// Splits the polygon along `split_plane` into `(front, back)`.
    ///
    /// Vertices within `eps` of the plane are shared by both halves where they
    /// border a crossing. A half that ends up with fewer than three vertices is
    /// `None`. Beware of sharp wedges: cutting off the tip can produce halves
    /// whose new vertices nearly coincide, so results are not guaranteed to
    /// pass [`Polygon::validate`].
    pub fn split(&self, split_plane: &Plane, eps: Real) -> (Option<Polygon>, Option<Polygon>) {
        let Some(&first_last) = self.vertices.last() else {
            return (None, None);
        };

        let mut front: Vec<Point3<Real>> = Vec::with_capacity(self.vertices.len() + 1);
        let mut back: Vec<Point3<Real>> = Vec::with_capacity(self.vertices.len() + 1);

        let mut last = first_last;
        let mut last_dist = split_plane.distance(&last);

        for &this in &self.vertices {
            let this_dist = split_plane.distance(&this);

            if this_dist > eps {
                if last_dist < -eps {
                    let x = split_plane.intersection(&last, &this);
                    push_distinct(&mut back, x);
                    push_distinct(&mut front, x);
                } else if last_dist <= eps {
                    push_distinct(&mut front, last);
                }
                push_distinct(&mut front, this);
            } else if this_dist < -eps {
                if last_dist > eps {
                    let x = split_plane.intersection(&last, &this);
                    push_distinct(&mut front, x);
                    push_distinct(&mut back, x);
                } else if last_dist >= -eps {
                    push_distinct(&mut back, last);
                }
                push_distinct(&mut back, this);
            } else if last_dist > eps {
                push_distinct(&mut front, this);
            } else if last_dist < -eps {
                push_distinct(&mut back, this);
            }

            last = this;
            last_dist = this_dist;
        }

        let wrap = |mut verts: Vec<Point3<Real>>| {
            if verts.len() > 1 && verts.first() == verts.last() {
                verts.pop();
            }
            (verts.len() >= 3).then(|| Polygon::new(verts, self.plane))
        };
        (wrap(front), wrap(back))
    }

    /// Determines whether this polygon overlaps `other`, which must lie in the
    /// same or the mirrored plane.
    ///
    /// With `report_touches == false` an overlap must have positive area;
    /// polygons that merely share an edge (within `eps`) do not overlap.
    /// Polygons with an edge shorter than `eps` never overlap anything.
    pub fn overlaps(&self, other: &Polygon, report_touches: bool, eps: Real) -> bool {
        if !other.what_side(&self.plane, eps).is_coplanar() {
            return false;
        }
        separated_by_edges(self, other, report_touches, eps)
            && separated_by_edges(other, self, report_touches, eps)
    }

    /// Determines whether this polygon entirely encloses `other` (in the same
    /// or mirrored plane).
    pub fn encloses(&self, other: &Polygon, may_touch_edges: bool, eps: Real) -> bool {
        if !other.what_side(&self.plane, eps).is_coplanar() {
            return false;
        }
        (0..self.vertices.len()).all(|i| {
            let Some(edge) = self.edge_plane(i, eps) else {
                return false;
            };
            match other.what_side(&edge, eps) {
                Side::Front => true,
                Side::FrontAndOn => may_touch_edges,
                _ => false,
            }
        })
    }

    /// Cuts this polygon along the edge planes of `splitter`.
    ///
    /// The pieces outside of `splitter` come first; the last entry is the piece
    /// inside of it (when the two overlap), or an unchanged copy of this polygon
    /// when no edge plane crosses it.
    pub fn chopped_up_along(&self, splitter: &Polygon, eps: Real) -> Vec<Polygon> {
        let mut fragment = self.clone();
        let mut pieces = Vec::new();

        for i in 0..splitter.vertices.len() {
            let Some(edge) = splitter.edge_plane(i, eps) else {
                continue;
            };
            if fragment.what_side_simple(&edge, eps) != Side::Both {
                continue;
            }
            let (inside, outside) = fragment.split(&edge, eps);
            if let Some(outside) = outside {
                pieces.push(outside);
            }
            if let Some(inside) = inside {
                fragment = inside;
            }
        }

        pieces.push(fragment);
        pieces
    }

    /// The fragment of this polygon that lies within the extent of `splitter`.
    pub fn clip_against(&self, splitter: &Polygon, eps: Real) -> Polygon {
        let mut pieces = self.chopped_up_along(splitter, eps);
        match pieces.pop() {
            Some(inside) => inside,
            None => self.clone(),
        }
    }

    /// Checks all invariants listed in the module documentation.
    pub fn validate(&self, eps: Real, min_vertex_dist: Real) -> Result<(), ValidationError> {
        let n = self.vertices.len();
        if n < 3 {
            return Err(ValidationError::TooFewPoints(n));
        }
        if let Some(bad) = self
            .vertices
            .iter()
            .find(|v| !v.iter().all(|c| c.is_finite()))
        {
            return Err(ValidationError::InvalidCoordinate(*bad));
        }
        if !self.plane.is_valid() {
            return Err(ValidationError::DegeneratePlane);
        }

        for v in &self.vertices {
            let distance = self.plane.distance(v);
            if distance.abs() > eps {
                return Err(ValidationError::OffPlane { point: *v, distance });
            }
        }

        // All pairs, not only neighbours: a rhombus with nearly coincident tips
        // passes the convexity test below but is still degenerate.
        for i in 0..n {
            for j in i + 1..n {
                if (self.vertices[i] - self.vertices[j]).norm() < min_vertex_dist {
                    return Err(ValidationError::RepeatedPoint(self.vertices[j]));
                }
            }
        }

        let winding = (self.vertices[1] - self.vertices[0]).cross(&(self.vertices[2] - self.vertices[1]));
        if winding.norm() == 0.0 || -winding.normalize().dot(&self.plane.normal) <= 0.0 {
            return Err(ValidationError::WrongOrientation);
        }

        for i in 0..n {
            let next = (i + 1) % n;
            let Some(edge) = self.edge_plane(i, 1e-5) else {
                return Err(ValidationError::RepeatedPoint(self.vertices[i]));
            };
            for (k, v) in self.vertices.iter().enumerate() {
                if k != i && k != next && edge.distance(v) < eps {
                    return Err(ValidationError::NotConvex(*v));
                }
            }
        }

        Ok(())
    }

    /// [`Polygon::validate`] with the crate-wide tolerances.
    pub fn is_valid(&self) -> bool {
        self.validate(ROUND_EPSILON, MIN_VERTEX_DIST).is_ok()
    }
}

/// `true` unless `poly` lies entirely behind one of the edge planes of `base`.
fn separated_by_edges(base: &Polygon, poly: &Polygon, report_touches: bool, eps: Real) -> bool {
    for i in 0..base.vertices.len() {
        let Some(edge) = base.edge_plane(i, eps) else {
            return false;
        };
        match poly.what_side(&edge, eps) {
            Side::Back => return false,
            Side::BackAndOn if !report_touches => return false,
            _ => {},
        }
    }
    true
}

fn push_distinct(verts: &mut Vec<Point3<Real>>, p: Point3<Real>) {
    if verts.last() != Some(&p) {
        verts.push(p);
    }
}

fn centroid(vertices: &[Point3<Real>]) -> Point3<Real> {
    let sum = vertices
        .iter()
        .fold(Vector3::zeros(), |acc: Vector3<Real>, v| acc + v.coords);
    Point3::from(sum / vertices.len().max(1) as Real)
}
