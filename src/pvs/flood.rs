//! Recursive flood of a shrinking frustum through the neighbour graph.

use crate::float_types::Real;
use crate::pvs::frustum::{clip_to_back, clip_to_front, find_frustum};
use crate::geometry::Polygon;
use crate::superleaf::SuperLeaf;
use log::{debug, info};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Computes the row of `master` in the SuperLeaf PVS.
///
/// The master sees itself and its direct neighbours. Everything further away
/// must be reachable by a chain of portals that a single line can stab, which
/// is tracked by clipping the portals against the frustum between the master
/// portal and the portal last entered.
pub fn master_row(super_leaves: &[SuperLeaf], master: usize, eps: Real) -> Vec<bool> {
    let mut row = vec![false; super_leaves.len()];
    row[master] = true;

    for n in &super_leaves[master].neighbours {
        row[n.super_leaf] = true;

        for n2 in &super_leaves[n.super_leaf].neighbours {
            if n.sub_portal.what_side(&n2.sub_portal.plane, eps).is_coplanar() {
                continue;
            }
            find_visible(
                super_leaves,
                &mut row,
                eps,
                n2.super_leaf,
                &n.sub_portal,
                &n2.sub_portal,
            );
        }
    }

    row
}

/// Marks `current` as visible and continues through its neighbours.
///
/// `master_portal` is what remains of the master's own portal, `entering` the
/// portal through which `current` was entered.
fn find_visible(
    super_leaves: &[SuperLeaf],
    row: &mut [bool],
    eps: Real,
    current: usize,
    master_portal: &Polygon,
    entering: &Polygon,
) {
    row[current] = true;

    let frustum = find_frustum(master_portal, entering, eps);
    if frustum.is_empty() {
        return;
    }

    for next in &super_leaves[current].neighbours {
        if next.sub_portal.what_side(&entering.plane, eps).is_coplanar() {
            continue;
        }

        let Some(next_portal) = clip_to_front(&next.sub_portal, &frustum, eps) else {
            continue;
        };

        let back_frustum = find_frustum(entering, &next_portal, eps);
        if back_frustum.is_empty() {
            continue;
        }

        let Some(master_portal) = clip_to_back(master_portal, &back_frustum, eps) else {
            continue;
        };

        find_visible(
            super_leaves,
            row,
            eps,
            next.super_leaf,
            &master_portal,
            &next_portal,
        );
    }
}

/// Progress over all masters, shared between worker threads.
pub(crate) struct Progress {
    total: usize,
    done: AtomicUsize,
}

impl Progress {
    pub(crate) const fn new(total: usize) -> Self {
        Self {
            total,
            done: AtomicUsize::new(0),
        }
    }

    /// Logs one finished master: every master at `debug`, every 10 % at `info`.
    pub(crate) fn master_done(&self, master: usize, visible: usize) {
        let done = self.done.fetch_add(1, Ordering::Relaxed) + 1;
        debug!("master {} sees {} super leaves", master, visible);

        let step = (self.total / 10).max(1);
        if done % step == 0 || done == self.total {
            info!(
                "visibility propagation: {:.0}% ({}/{})",
                done as Real * 100.0 / self.total as Real,
                done,
                self.total
            );
        }
    }
}
