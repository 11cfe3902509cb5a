//! Serial implementation of the visibility propagation

use crate::float_types::{ROUND_EPSILON, Real};
use crate::pvs::flood::{Progress, master_row};
use crate::pvs::matrix::BitMatrix;
use crate::pvs::traits::PropagationOps;
use crate::superleaf::SuperLeaf;

/// Serial implementation of the visibility propagation, one master after another
#[derive(Debug, Clone, Copy)]
pub struct SerialPropagator {
    eps: Real,
}

impl SerialPropagator {
    pub const fn new() -> Self {
        Self::with_epsilon(ROUND_EPSILON)
    }

    pub const fn with_epsilon(eps: Real) -> Self {
        Self { eps }
    }
}

impl Default for SerialPropagator {
    fn default() -> Self {
        Self::new()
    }
}

impl PropagationOps for SerialPropagator {
    fn propagate(&self, super_leaves: &[SuperLeaf]) -> BitMatrix {
        let mut pvs = BitMatrix::new(super_leaves.len());
        let progress = Progress::new(super_leaves.len());

        for master in 0..super_leaves.len() {
            let row = master_row(super_leaves, master, self.eps);
            pvs.set_row(master, &row);
            progress.master_done(master, row.iter().filter(|v| **v).count());
        }

        pvs
    }
}
