//! Constructive heuristics for building an initial closed tour.
//!
//! - [`insertion()`] — Greedy global-minimum insertion from a pair or single-node seed, O(n³)

mod insertion;

pub use insertion::{insertion, InsertionSeed};
