//! # u-tour
//!
//! Symmetric TSP tour engine over TSPLIB `EUC_2D` and `GEO` instances:
//! greedy insertion construction refined by 2-opt or a single-exchange
//! Lin-Kernighan variant.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Node, Instance, Tour, SolutionReport)
//! - [`distance`] — TSPLIB metrics and the dense distance matrix
//! - [`constructive`] — Insertion heuristic (pair or single-node seed)
//! - [`local_search`] — 2-opt, Lin-Kernighan-style exchange, refinement engine
//! - [`solver`] — Configurable end-to-end pipeline
//! - [`error`] — Error taxonomy for invalid input

pub mod constructive;
pub mod distance;
pub mod error;
pub mod local_search;
pub mod models;
pub mod solver;

pub use error::{TourError, TourResult};
