//! Expansion of the SuperLeaf PVS to the final leaf PVS.

use crate::bsp::Leaf;
use crate::pvs::BitMatrix;
use crate::superleaf::SuperLeaf;

/// Builds the leaf-level PVS from the SuperLeaf-level one.
///
/// A pair of SuperLeaves counts as visible only if both directions are set in
/// `sl_pvs`. Every pair of inner leaves of two mutually visible SuperLeaves
/// (including a SuperLeaf with itself) is then marked visible; outer leaves
/// never see or are seen by anything. The result is symmetric.
pub fn assemble_pvs(super_leaves: &[SuperLeaf], sl_pvs: &BitMatrix, leaves: &[Leaf]) -> BitMatrix {
    let mut pvs = BitMatrix::new(leaves.len());

    let inner: Vec<Vec<usize>> = super_leaves
        .iter()
        .map(|sl| {
            sl.leaf_set
                .iter()
                .copied()
                .filter(|&l| leaves[l].is_inner)
                .collect()
        })
        .collect();

    for a in 0..super_leaves.len() {
        for b in a..super_leaves.len() {
            if !(sl_pvs.get(a, b) && sl_pvs.get(b, a)) {
                continue;
            }
            for &la in &inner[a] {
                for &lb in &inner[b] {
                    pvs.set(la, lb);
                    pvs.set(lb, la);
                }
            }
        }
    }

    pvs
}

/// Sum of all bytes of the packed words, for comparing runs.
pub fn checksum(words: &[u32]) -> u64 {
    words
        .iter()
        .flat_map(|w| w.to_le_bytes())
        .map(u64::from)
        .sum()
}
