//! Linearisation of the cycle cover into a single merge order.

use log::debug;

use crate::cycle_cover::{self, PathForest};
use crate::fragment::Fragment;
use crate::overlap::OverlapGraph;
use crate::solver::SolveError;

/// Merge the whole fragment set along its cycle cover.
///
/// Builds the overlap graph, covers it with paths, linearises the forest
/// and splices the fragments in that order.
pub fn merge(fragments: &[Fragment]) -> Result<Fragment, SolveError> {
    if fragments.is_empty() {
        return Err(SolveError::EmptyInstance);
    }
    let graph = OverlapGraph::build(fragments);
    let forest = cycle_cover::build(&graph);
    let order = linearise(&forest, &graph);
    Ok(splice(fragments, &order, &graph))
}

/// Flatten the forest into one total merge order.
///
/// A full cycle is first cut at its weakest edge. Disjoint chains are then
/// joined greedily on tail-to-head overlap, smallest indices winning ties;
/// chains that share nothing are concatenated outright.
pub(crate) fn linearise(forest: &PathForest, graph: &OverlapGraph) -> Vec<usize> {
    let mut chains = if forest.is_full_cycle() {
        vec![break_cycle(forest, graph)]
    } else {
        forest.chains()
    };

    while chains.len() > 1 {
        let mut best: Option<(usize, usize, usize)> = None;
        let mut best_key = (usize::MAX, usize::MAX);
        for a in 0..chains.len() {
            for b in 0..chains.len() {
                if a == b {
                    continue;
                }
                let tail = *chains[a].last().expect("chains are never empty");
                let head = chains[b][0];
                let span = graph.get(tail, head);
                let key = (tail, head);
                let better = match best {
                    None => true,
                    Some((_, _, best_span)) => {
                        span > best_span || (span == best_span && key < best_key)
                    }
                };
                if better {
                    best = Some((a, b, span));
                    best_key = key;
                }
            }
        }
        let (a, b, span) = best.unwrap_or((0, 1, 0));
        debug!(
            "joining chain {:?} after {:?} with overlap {span}",
            chains[b], chains[a]
        );
        let appended = chains.remove(b);
        let a = if b < a { a - 1 } else { a };
        chains[a].extend(appended);
    }

    chains.pop().unwrap_or_default()
}

/// Cut a full cycle at its weakest edge; ties fall to the smallest source
/// index. The edge's target becomes the head of the resulting path.
fn break_cycle(forest: &PathForest, graph: &OverlapGraph) -> Vec<usize> {
    let n = forest.len();
    let mut cut = (0usize, 0usize, usize::MAX);
    for from in 0..n {
        if let Some(to) = forest.successor(from) {
            let span = graph.get(from, to);
            if span < cut.2 {
                cut = (from, to, span);
            }
        }
    }
    debug!("breaking cycle at {} -> {} with overlap {}", cut.0, cut.1, cut.2);

    let mut order = Vec::with_capacity(n);
    let mut current = cut.1;
    for _ in 0..n {
        order.push(current);
        current = forest.successor(current).unwrap_or(current);
    }
    order
}

/// Splice the fragments in `order`, dropping each step's overlap. One linear
/// pass over the total text length.
pub(crate) fn splice(fragments: &[Fragment], order: &[usize], graph: &OverlapGraph) -> Fragment {
    let capacity = fragments.iter().map(Fragment::len).sum();
    let mut text = String::with_capacity(capacity);
    let mut sources = Vec::with_capacity(fragments.len());
    text.push_str(fragments[order[0]].text());
    sources.extend_from_slice(fragments[order[0]].sources());
    for step in order.windows(2) {
        let next = &fragments[step[1]];
        let span = graph.get(step[0], step[1]);
        text.push_str(&next.text()[span..]);
        sources.extend_from_slice(next.sources());
    }
    Fragment::from_parts(text, sources)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fragments(strings: &[&str]) -> Vec<Fragment> {
        let owned: Vec<String> = strings.iter().map(|s| s.to_string()).collect();
        Fragment::from_strings(&owned)
    }

    #[test]
    fn merges_single_chain_without_joins() {
        let merged = merge(&fragments(&["AGCT", "CTAG", "TAGG"])).unwrap();
        assert_eq!(merged.text(), "AGCTAGG");
        assert_eq!(merged.sources(), &[0, 1, 2]);
    }

    #[test]
    fn reconstructs_source_text_from_windows() {
        let merged = merge(&fragments(&[
            "AAAA", "AAAC", "AACG", "ACGT", "CGTT", "GTTT", "TTTT",
        ]))
        .unwrap();
        assert_eq!(merged.text(), "AAAACGTTTT");
    }

    #[test]
    fn breaks_a_full_cycle_at_the_weakest_edge() {
        // All three edges carry overlap one; the cut falls on 0 -> 1, making
        // fragment 1 the head of the path.
        let merged = merge(&fragments(&["ab", "bc", "ca"])).unwrap();
        assert_eq!(merged.text(), "bcab");
        assert_eq!(merged.sources(), &[1, 2, 0]);
    }

    #[test]
    fn joins_disjoint_chains_by_concatenation() {
        let merged = merge(&fragments(&["AAAA", "GGGG"])).unwrap();
        assert_eq!(merged.text(), "AAAAGGGG");
    }

    #[test]
    fn joins_leftover_chains_in_index_order() {
        // The closing edge of the ab/bc/ca triangle is refused, leaving two
        // chains with no tail-to-head overlap between them; they concatenate
        // smallest indices first.
        let merged = merge(&fragments(&["ab", "bc", "ca", "xy", "yz"])).unwrap();
        assert_eq!(merged.text(), "abcaxyz");
        assert_eq!(merged.sources(), &[0, 1, 2, 3, 4]);
    }

    #[test]
    fn single_fragment_passes_through() {
        let merged = merge(&fragments(&["ACGT"])).unwrap();
        assert_eq!(merged.text(), "ACGT");
    }

    #[test]
    fn empty_set_is_rejected() {
        assert_eq!(merge(&[]), Err(SolveError::EmptyInstance));
    }
}
