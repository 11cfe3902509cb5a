//! Parallel implementation of the visibility propagation

use rayon::prelude::*;

use crate::float_types::{ROUND_EPSILON, Real};
use crate::pvs::flood::{Progress, master_row};
use crate::pvs::matrix::BitMatrix;
use crate::pvs::traits::PropagationOps;
use crate::superleaf::SuperLeaf;

/// Parallel implementation of the visibility propagation.
///
/// Every master is an independent task that only reads the neighbour graph.
/// The rows are merged into the matrix afterwards, in master order, so the
/// result is identical to [`crate::pvs::SerialPropagator`].
#[derive(Debug, Clone, Copy)]
pub struct ParallelPropagator {
    eps: Real,
}

impl ParallelPropagator {
    pub const fn new() -> Self {
        Self::with_epsilon(ROUND_EPSILON)
    }

    pub const fn with_epsilon(eps: Real) -> Self {
        Self { eps }
    }
}

impl Default for ParallelPropagator {
    fn default() -> Self {
        Self::new()
    }
}

impl PropagationOps for ParallelPropagator {
    fn propagate(&self, super_leaves: &[SuperLeaf]) -> BitMatrix {
        let progress = Progress::new(super_leaves.len());

        let rows: Vec<Vec<bool>> = (0..super_leaves.len())
            .into_par_iter()
            .map(|master| {
                let row = master_row(super_leaves, master, self.eps);
                progress.master_done(master, row.iter().filter(|v| **v).count());
                row
            })
            .collect();

        let mut pvs = BitMatrix::new(super_leaves.len());
        for (master, row) in rows.iter().enumerate() {
            pvs.set_row(master, row);
        }
        pvs
    }
}
