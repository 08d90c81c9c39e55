//! Fast path for instances whose cycle cover is already one chain.

use log::debug;

use crate::cycle_cover;
use crate::fragment::Fragment;
use crate::hierarchical;
use crate::overlap::OverlapGraph;
use crate::solver::SolveError;

/// Merge an instance whose cycle cover is a single acyclic path.
///
/// The structure check is strict: a full cycle or more than one chain fails
/// with [`SolveError::NotAChain`], and the caller decides whether to fall
/// back to [`hierarchical::merge`]. On the happy path the merge is one
/// splice over the total text length.
pub fn compress(fragments: &[Fragment]) -> Result<Fragment, SolveError> {
    if fragments.is_empty() {
        return Err(SolveError::EmptyInstance);
    }
    let graph = OverlapGraph::build(fragments);
    let forest = cycle_cover::build(&graph);
    if forest.is_full_cycle() {
        debug!("chain check failed: the cover closes a full cycle");
        return Err(SolveError::NotAChain);
    }
    let chains = forest.chains();
    if chains.len() != 1 {
        debug!("chain check failed: {} disjoint chains", chains.len());
        return Err(SolveError::NotAChain);
    }
    Ok(hierarchical::splice(fragments, &chains[0], &graph))
}
