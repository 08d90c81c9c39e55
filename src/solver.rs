//! Validated entry point dispatching to the merge strategies.

use log::info;
use thiserror::Error;

use crate::chain;
use crate::fragment::Fragment;
use crate::greedy::{self, Policy};
use crate::hierarchical;

/// Errors surfaced when solving an instance.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// No fragments were supplied.
    #[error("empty instance: nothing to merge")]
    EmptyInstance,
    /// The instance is not substring-free; the offending pair is reported by
    /// instance index.
    #[error("fragment {contained} is contained in fragment {container}")]
    DuplicateOrSubstring { contained: usize, container: usize },
    /// The overlap structure is not a single acyclic chain.
    #[error("overlap structure is not a single chain")]
    NotAChain,
}

/// Strategy selector for [`solve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    /// Best-pair greedy merging with enumeration-order ties.
    Greedy,
    /// Greedy merging with the order-independent tie-break.
    TieBreakGreedy,
    /// Cycle-cover construction followed by forest linearisation.
    Hierarchical,
    /// Single-pass compression, failing off-structure with `NotAChain`.
    Chain,
}

/// A computed superstring together with the order the inputs were spliced in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Superstring {
    /// The merged text; every input fragment appears as a substring.
    pub sequence: String,
    /// Instance indices in splice order, a permutation of `0..n`.
    pub merge_order: Vec<usize>,
}

impl Superstring {
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    fn from_fragment(fragment: Fragment) -> Self {
        let (sequence, merge_order) = fragment.into_parts();
        Self {
            sequence,
            merge_order,
        }
    }
}

/// Reject instances that are empty or not substring-free.
///
/// A contained fragment would overlap its container over its full length and
/// merging would no longer shrink the set, so such instances are refused
/// outright rather than silently filtered. [`crate::instance::substring_free`]
/// is the preparation step that makes arbitrary string sets acceptable here.
pub fn validate(strings: &[String]) -> Result<(), SolveError> {
    if strings.is_empty() {
        return Err(SolveError::EmptyInstance);
    }
    for (i, a) in strings.iter().enumerate() {
        for (j, b) in strings.iter().enumerate() {
            if i == j {
                continue;
            }
            let strictly_shorter = a.len() < b.len();
            let duplicate_later = a.len() == b.len() && i > j;
            if (strictly_shorter || duplicate_later) && b.contains(a.as_str()) {
                return Err(SolveError::DuplicateOrSubstring {
                    contained: i,
                    container: j,
                });
            }
        }
    }
    Ok(())
}

/// Validate an instance and run the selected algorithm.
///
/// `Algorithm::Chain` surfaces [`SolveError::NotAChain`] unchanged so the
/// caller can fall back to [`Algorithm::Hierarchical`] when the instance
/// turns out not to be one chain.
pub fn solve(strings: &[String], algorithm: Algorithm) -> Result<Superstring, SolveError> {
    validate(strings)?;
    let fragments = Fragment::from_strings(strings);
    let merged = match algorithm {
        Algorithm::Greedy => greedy::merge(&fragments, Policy::Plain)?,
        Algorithm::TieBreakGreedy => greedy::merge(&fragments, Policy::TieBreak)?,
        Algorithm::Hierarchical => hierarchical::merge(&fragments)?,
        Algorithm::Chain => chain::compress(&fragments)?,
    };
    info!(
        "{algorithm:?} merged {} fragments into {} characters",
        strings.len(),
        merged.len()
    );
    Ok(Superstring::from_fragment(merged))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instance(strings: &[&str]) -> Vec<String> {
        strings.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn rejects_empty_instances() {
        for algorithm in [
            Algorithm::Greedy,
            Algorithm::TieBreakGreedy,
            Algorithm::Hierarchical,
            Algorithm::Chain,
        ] {
            assert_eq!(solve(&[], algorithm), Err(SolveError::EmptyInstance));
        }
    }

    #[test]
    fn rejects_duplicate_fragments() {
        let err = validate(&instance(&["ACGT", "TTAA", "ACGT"])).unwrap_err();
        assert_eq!(
            err,
            SolveError::DuplicateOrSubstring {
                contained: 2,
                container: 0
            }
        );
    }

    #[test]
    fn rejects_contained_fragments() {
        let err = validate(&instance(&["ACGTACGT", "GTAC"])).unwrap_err();
        assert_eq!(
            err,
            SolveError::DuplicateOrSubstring {
                contained: 1,
                container: 0
            }
        );
    }

    #[test]
    fn accepts_substring_free_instances() {
        assert!(validate(&instance(&["AGCT", "CTAG", "TAGG"])).is_ok());
    }

    #[test]
    fn dispatches_every_algorithm() {
        let strings = instance(&["AGCT", "CTAG", "TAGG"]);
        for algorithm in [
            Algorithm::Greedy,
            Algorithm::TieBreakGreedy,
            Algorithm::Hierarchical,
            Algorithm::Chain,
        ] {
            let superstring = solve(&strings, algorithm).unwrap();
            assert_eq!(superstring.sequence, "AGCTAGG", "{algorithm:?}");
            assert_eq!(superstring.len(), 7);
        }
    }

    #[test]
    fn merge_order_is_a_permutation_of_the_instance() {
        let strings = instance(&["AGCT", "CTAG", "TAGG"]);
        let superstring = solve(&strings, Algorithm::Hierarchical).unwrap();
        let mut order = superstring.merge_order.clone();
        order.sort_unstable();
        assert_eq!(order, vec![0, 1, 2]);
    }

    #[test]
    fn chain_error_passes_through() {
        let strings = instance(&["AAAA", "GGGG"]);
        assert_eq!(
            solve(&strings, Algorithm::Chain),
            Err(SolveError::NotAChain)
        );
        // The documented fallback still solves the instance.
        let fallback = solve(&strings, Algorithm::Hierarchical).unwrap();
        assert_eq!(fallback.len(), 8);
    }
}
