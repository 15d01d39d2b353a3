//! Distance metrics and the dense distance matrix.
//!
//! The matrix is computed once per instance and shared read-only by
//! construction and local search.

mod matrix;
mod metric;

pub use matrix::DistanceMatrix;
pub use metric::{Metric, EARTH_RADIUS, GEO_PI};
