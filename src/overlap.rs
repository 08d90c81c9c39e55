//! Pairwise suffix/prefix overlap scoring and the sparse overlap graph.

use log::trace;
use sprs::{CsMat, TriMat};

use crate::fragment::Fragment;

/// Length of the longest suffix of `from` that equals a prefix of `to`.
///
/// Candidate lengths are checked from `min(len(from), len(to))` downwards,
/// so the first hit is the longest one; 0 when nothing matches.
pub fn overlap_len(from: &str, to: &str) -> usize {
    let from = from.as_bytes();
    let to = to.as_bytes();
    let longest = from.len().min(to.len());
    for span in (1..=longest).rev() {
        if from[from.len() - span..] == to[..span] {
            return span;
        }
    }
    0
}

/// One ordered pair in the overlap graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlapEntry {
    pub from: usize,
    pub to: usize,
    pub overlap: usize,
}

/// Sparse all-pairs overlap graph over a fragment set.
///
/// Only positive overlaps are stored; a pair absent from the matrix overlaps
/// by zero. The graph is rebuilt from scratch after merges since a merged
/// fragment is a new entity with new affixes.
#[derive(Debug, Clone)]
pub struct OverlapGraph {
    matrix: CsMat<usize>,
}

impl OverlapGraph {
    /// Score every ordered pair of distinct fragments.
    pub fn build(fragments: &[Fragment]) -> Self {
        let n = fragments.len();
        let mut triplets = TriMat::new((n, n));
        for (i, from) in fragments.iter().enumerate() {
            for (j, to) in fragments.iter().enumerate() {
                if i == j {
                    continue;
                }
                let span = overlap_len(from.text(), to.text());
                if span > 0 {
                    triplets.add_triplet(i, j, span);
                }
            }
        }
        let matrix = triplets.to_csr();
        trace!(
            "overlap graph: {} fragments, {} positive pairs",
            n,
            matrix.nnz()
        );
        Self { matrix }
    }

    /// Number of fragments the graph was built over.
    pub fn len(&self) -> usize {
        self.matrix.rows()
    }

    pub fn is_empty(&self) -> bool {
        self.matrix.rows() == 0
    }

    /// Overlap for the ordered pair, zero when the entry is absent.
    pub fn get(&self, from: usize, to: usize) -> usize {
        self.matrix.get(from, to).copied().unwrap_or(0)
    }

    /// Positive entries in row-major order, ascending `(from, to)`.
    pub fn entries(&self) -> Vec<OverlapEntry> {
        let mut entries = Vec::with_capacity(self.matrix.nnz());
        for (from, row) in self.matrix.outer_iterator().enumerate() {
            for (to, &overlap) in row.iter() {
                entries.push(OverlapEntry { from, to, overlap });
            }
        }
        entries
    }

    /// Strongest entry, ties resolved by row-major enumeration order.
    /// `None` when no pair overlaps.
    pub fn max_entry(&self) -> Option<OverlapEntry> {
        let mut best: Option<OverlapEntry> = None;
        for entry in self.entries() {
            match best {
                Some(current) if entry.overlap <= current.overlap => {}
                _ => best = Some(entry),
            }
        }
        best
    }
}
