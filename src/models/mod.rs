//! Domain model types for the tour engine.
//!
//! Provides nodes, the validated problem instance, closed tours, and the
//! solution report returned by the solver.

mod instance;
mod node;
mod solution;
mod tour;

pub use instance::Instance;
pub use node::Node;
pub use solution::SolutionReport;
pub use tour::Tour;

/// Integer edge weight and tour cost.
pub type Cost = i64;
