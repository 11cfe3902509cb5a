//! The whole PVS computation: SuperLeaves, adjacency, propagation, assembly.

use crate::adjacency::{build_adjacency, neighbour_count};
use crate::assemble::{assemble_pvs, checksum};
use crate::bsp::BspTree;
use crate::config::PvsConfig;
use crate::errors::TreeError;
use crate::float_types::Real;
use crate::pvs::{BitMatrix, PropagationOps, default_propagator};
use crate::superleaf::{SuperLeaf, build_super_leaves};
use log::info;
use std::fmt;

/// Diagnostics of a completed run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PvsReport {
    pub super_leaf_count: usize,
    pub leaf_count: usize,
    pub neighbour_count: usize,
    /// Average number of SuperLeaves seen by each SuperLeaf before propagation
    /// (itself and its direct neighbours).
    pub trivial_visibility: Real,
    /// Average number of SuperLeaves seen by each SuperLeaf after propagation.
    pub final_visibility: Real,
    /// Size of the packed leaf PVS.
    pub size_bytes: usize,
    pub checksum: u64,
}

impl fmt::Display for PvsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} super leaves ({} leaves), {} neighbours, visibility {:.2} trivial / {:.2} final, {} bytes, checksum {}",
            self.super_leaf_count,
            self.leaf_count,
            self.neighbour_count,
            self.trivial_visibility,
            self.final_visibility,
            self.size_bytes,
            self.checksum
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PvsOutcome {
    /// Dry run: only the SuperLeaves were built.
    SuperLeavesOnly { count: usize },
    Computed { pvs: BitMatrix, report: PvsReport },
}

/// Runs the computation with the propagator selected by the crate features.
pub fn run(tree: &BspTree, config: &PvsConfig) -> Result<PvsOutcome, TreeError> {
    run_with(tree, config, &default_propagator())
}

/// Runs the computation with the given propagator.
///
/// The tree is validated first; geometric degeneracies during the run are
/// never errors.
pub fn run_with<P: PropagationOps + ?Sized>(
    tree: &BspTree,
    config: &PvsConfig,
    ops: &P,
) -> Result<PvsOutcome, TreeError> {
    tree.validate()?;

    let mut super_leaves = build_super_leaves(tree, &config.condition());
    if config.only_super_leaves {
        return Ok(PvsOutcome::SuperLeavesOnly {
            count: super_leaves.len(),
        });
    }

    build_adjacency(&mut super_leaves);
    let trivial = trivial_visibility(&super_leaves);
    info!("trivial visibility: {:.2}", trivial);

    let sl_pvs = ops.propagate(&super_leaves);
    info!("final visibility: {:.2}", sl_pvs.average_visibility());

    let pvs = assemble_pvs(&super_leaves, &sl_pvs, &tree.leaves);
    let report = PvsReport {
        super_leaf_count: super_leaves.len(),
        leaf_count: tree.leaf_count(),
        neighbour_count: neighbour_count(&super_leaves),
        trivial_visibility: trivial,
        final_visibility: sl_pvs.average_visibility(),
        size_bytes: pvs.size_bytes(),
        checksum: checksum(pvs.words()),
    };
    info!("{}", report);

    Ok(PvsOutcome::Computed { pvs, report })
}

/// Average number of distinct SuperLeaves in "self plus direct neighbours".
pub fn trivial_visibility(super_leaves: &[SuperLeaf]) -> Real {
    if super_leaves.is_empty() {
        return 0.0;
    }
    let mut direct = BitMatrix::new(super_leaves.len());
    for (m, sl) in super_leaves.iter().enumerate() {
        direct.set(m, m);
        for n in &sl.neighbours {
            direct.set(m, n.super_leaf);
        }
    }
    direct.average_visibility()
}
