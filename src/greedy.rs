//! Greedy pairwise merging: repeatedly fuse the best-overlapping pair.

use log::debug;

use crate::fragment::Fragment;
use crate::overlap::OverlapGraph;
use crate::solver::SolveError;

/// Pair-selection policy for the greedy loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// Maximum overlap; ties fall to the first pair in row-major order.
    Plain,
    /// Maximum overlap; ties broken by minimum combined length, then by the
    /// lexicographically smallest text pair, independent of input order.
    TieBreak,
}

/// Merge until a single fragment remains; `n - 1` rounds.
///
/// The fragment set must already be substring-free, which guarantees every
/// merge strictly shrinks the set. See [`crate::solver::solve`] for the
/// validating entry point.
pub fn merge(fragments: &[Fragment], policy: Policy) -> Result<Fragment, SolveError> {
    if fragments.is_empty() {
        return Err(SolveError::EmptyInstance);
    }
    let mut live: Vec<Fragment> = fragments.to_vec();
    while live.len() > 1 {
        let graph = OverlapGraph::build(&live);
        let (from, to, span) = match policy {
            Policy::Plain => select_plain(&graph),
            Policy::TieBreak => select_tie_break(&live, &graph),
        };
        debug!(
            "merging fragment {} into {} with overlap {}",
            live[to].id(),
            live[from].id(),
            span
        );
        let merged = live[from].merge(&live[to], span);
        live[from] = merged;
        live.remove(to);
    }
    Ok(live.remove(0))
}

/// First strongest pair in row-major order; `(0, 1)` with no overlap when
/// nothing overlaps at all.
fn select_plain(graph: &OverlapGraph) -> (usize, usize, usize) {
    match graph.max_entry() {
        Some(entry) => (entry.from, entry.to, entry.overlap),
        None => (0, 1, 0),
    }
}

/// Strongest pair under the deterministic secondary ordering: smallest
/// combined length first, then the lexicographically smallest text pair.
///
/// Texts stay pairwise distinct on substring-free instances, so the ordering
/// is total and the chosen pair does not depend on input order.
fn select_tie_break(live: &[Fragment], graph: &OverlapGraph) -> (usize, usize, usize) {
    let mut best: Option<(usize, usize, usize)> = None;
    let mut best_key: (usize, &str, &str) = (usize::MAX, "", "");
    for entry in graph.entries() {
        let key = (
            live[entry.from].len() + live[entry.to].len(),
            live[entry.from].text(),
            live[entry.to].text(),
        );
        let better = match best {
            None => true,
            Some((_, _, span)) => entry.overlap > span || (entry.overlap == span && key < best_key),
        };
        if better {
            best = Some((entry.from, entry.to, entry.overlap));
            best_key = key;
        }
    }
    if let Some(found) = best {
        return found;
    }
    // Nothing overlaps; pick the zero-overlap pair under the same secondary
    // ordering.
    let mut pick = (0, 1, 0);
    let mut pick_key: (usize, &str, &str) = (usize::MAX, "", "");
    for from in 0..live.len() {
        for to in 0..live.len() {
            if from == to {
                continue;
            }
            let key = (
                live[from].len() + live[to].len(),
                live[from].text(),
                live[to].text(),
            );
            if key < pick_key {
                pick_key = key;
                pick = (from, to, 0);
            }
        }
    }
    pick
}
