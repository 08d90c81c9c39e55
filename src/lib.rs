//! Shortest common superstring approximation heuristics.
//!
//! Four polynomial-time strategies over one shared overlap model: plain
//! greedy pair merging, greedy with an order-independent tie-break,
//! cycle-cover based hierarchical merging, and a single-pass compressor for
//! instances that already form one chain.

pub mod chain;
pub mod cycle_cover;
pub mod fragment;
pub mod greedy;
pub mod hierarchical;
pub mod instance;
pub mod overlap;
pub mod solver;

pub use cycle_cover::PathForest;
pub use fragment::Fragment;
pub use greedy::Policy;
pub use overlap::{overlap_len, OverlapEntry, OverlapGraph};
pub use solver::{solve, validate, Algorithm, SolveError, Superstring};
