//! Neighbour relations between SuperLeaves.
//!
//! This is the only place where polygon overlap is tested. Overlap tests are
//! fragile for nearly touching portals ("sharp wedges"), so the propagator
//! downstream only ever splits and classifies the sub-portals found here.

use crate::aabb::Aabb;
use crate::float_types::{ROUND_EPSILON, Real};
use crate::geometry::Side;
use crate::superleaf::{Neighbour, SuperLeaf};
use log::{debug, info};

/// Fill in the neighbour lists of all `super_leaves`, replacing any previous
/// lists.
///
/// `B` becomes a neighbour of `A` once for every pair of portals `Pa` of `A`
/// and `Pb` of `B` that lie in mirrored planes and overlap with positive area.
/// The sub-portal is the part of `Pb` within `Pa`. `A → B` and `B → A` are
/// computed independently.
pub fn build_adjacency(super_leaves: &mut [SuperLeaf]) {
    build_adjacency_with_eps(super_leaves, ROUND_EPSILON)
}

pub fn build_adjacency_with_eps(super_leaves: &mut [SuperLeaf], eps: Real) {
    let lists: Vec<Vec<Neighbour>> = (0..super_leaves.len())
        .map(|a| {
            let mut neighbours = Vec::new();
            for (b, other) in super_leaves.iter().enumerate() {
                if a == b || !may_touch(&super_leaves[a].bounds, &other.bounds, eps) {
                    continue;
                }
                for pa in &super_leaves[a].portals {
                    for pb in &other.portals {
                        if pb.what_side(&pa.plane, eps) != Side::InMirrored {
                            continue;
                        }
                        if !pa.overlaps(pb, false, eps) {
                            continue;
                        }
                        let sub_portal = pb.clip_against(pa, eps);
                        debug_assert!(
                            pa.encloses(&sub_portal, true, eps),
                            "sub-portal of {a} -> {b} leaks out of its portal"
                        );
                        neighbours.push(Neighbour {
                            super_leaf: b,
                            sub_portal,
                        });
                    }
                }
            }
            neighbours
        })
        .collect();

    for (sl, list) in super_leaves.iter_mut().zip(lists) {
        sl.neighbours = list;
    }

    for (i, sl) in super_leaves.iter().enumerate() {
        match sl.portal_bounds() {
            Some(bb) => debug!(
                "super leaf {i}: {} neighbours, portals within {:?} .. {:?}",
                sl.neighbours.len(),
                bb.mins,
                bb.maxs
            ),
            None => debug!("super leaf {i}: no neighbours"),
        }
    }

    info!(
        "adjacency graph: {} super leaves, {} neighbour entries",
        super_leaves.len(),
        neighbour_count(super_leaves)
    );
}

/// Broad phase: only `a` is grown by `eps`.
#[inline]
fn may_touch(a: &Aabb, b: &Aabb, eps: Real) -> bool {
    a.epsilon_box(eps).intersects(b)
}

/// Total number of directed neighbour entries.
pub fn neighbour_count(super_leaves: &[SuperLeaf]) -> usize {
    super_leaves.iter().map(|sl| sl.neighbours.len()).sum()
}
