//! Greedy cycle-cover relaxation over the overlap graph.

use log::debug;

use crate::overlap::OverlapGraph;

/// Successor and predecessor maps forming disjoint simple paths.
///
/// The builder admits at most one cycle, and only when it spans the whole
/// fragment set; the hierarchical merger breaks it before linearisation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathForest {
    succ: Vec<Option<usize>>,
    pred: Vec<Option<usize>>,
}

impl PathForest {
    pub fn len(&self) -> usize {
        self.succ.len()
    }

    pub fn is_empty(&self) -> bool {
        self.succ.is_empty()
    }

    pub fn successor(&self, id: usize) -> Option<usize> {
        self.succ[id]
    }

    pub fn predecessor(&self, id: usize) -> Option<usize> {
        self.pred[id]
    }

    /// True when every fragment has both neighbours, i.e. the selected edges
    /// close one cycle over the whole set.
    pub fn is_full_cycle(&self) -> bool {
        !self.succ.is_empty() && self.succ.iter().all(Option::is_some)
    }

    /// Chains in head order: each starts at a fragment without a predecessor
    /// and follows successors to its tail. Empty when the forest is a cycle.
    pub fn chains(&self) -> Vec<Vec<usize>> {
        let mut chains = Vec::new();
        for head in 0..self.succ.len() {
            if self.pred[head].is_some() {
                continue;
            }
            let mut chain = vec![head];
            let mut current = head;
            while let Some(next) = self.succ[current] {
                chain.push(next);
                current = next;
            }
            chains.push(chain);
        }
        chains
    }
}

/// Select forest edges greedily: strongest overlaps first, at most one
/// successor and one predecessor per fragment, refusing every cycle that
/// would close over a strict subset of the fragments.
pub fn build(graph: &OverlapGraph) -> PathForest {
    let n = graph.len();
    let mut entries = graph.entries();
    let candidates = entries.len();
    entries.sort_by(|a, b| {
        b.overlap
            .cmp(&a.overlap)
            .then(a.from.cmp(&b.from))
            .then(a.to.cmp(&b.to))
    });

    let mut succ = vec![None; n];
    let mut pred = vec![None; n];
    let mut components = DisjointSets::new(n);
    let mut accepted = 0usize;

    for entry in entries {
        if succ[entry.from].is_some() || pred[entry.to].is_some() {
            continue;
        }
        if components.joined(entry.from, entry.to) && components.size_of(entry.from) < n {
            // Both endpoints already sit on the same path; the edge would
            // close a cycle over a strict subset.
            continue;
        }
        succ[entry.from] = Some(entry.to);
        pred[entry.to] = Some(entry.from);
        components.union(entry.from, entry.to);
        accepted += 1;
        if accepted == n {
            // The nth edge can only be the one closing the full cycle.
            break;
        }
    }

    debug!("cycle cover accepted {accepted} of {candidates} candidate edges");
    PathForest { succ, pred }
}

struct DisjointSets {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl DisjointSets {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
        }
    }

    fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    fn joined(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }

    fn size_of(&mut self, x: usize) -> usize {
        let root = self.find(x);
        self.size[root]
    }

    fn union(&mut self, a: usize, b: usize) {
        let (mut root_a, mut root_b) = (self.find(a), self.find(b));
        if root_a == root_b {
            return;
        }
        if self.size[root_a] < self.size[root_b] {
            std::mem::swap(&mut root_a, &mut root_b);
        }
        self.parent[root_b] = root_a;
        self.size[root_a] += self.size[root_b];
    }
}
