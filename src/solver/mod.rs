//! End-to-end tour pipeline: distance matrix, insertion, local search, report.
//!
//! Everything runs synchronously on the calling thread. The matrix is built
//! once and borrowed by every later phase; the tour is owned by whichever
//! phase is running.

mod config;

pub use config::SolverConfig;

use crate::constructive::insertion;
use crate::distance::DistanceMatrix;
use crate::error::TourResult;
use crate::local_search::{refine, RefinementStats};
use crate::models::{Instance, SolutionReport};

/// Solves an instance with the given configuration.
///
/// # Examples
///
/// ```
/// use u_tour::distance::Metric;
/// use u_tour::models::Instance;
/// use u_tour::solver::{solve, SolverConfig};
///
/// let instance = Instance::from_coords(
///     Metric::Euclidean,
///     &[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)],
/// ).unwrap();
/// let report = solve(&instance, &SolverConfig::default()).unwrap();
/// assert_eq!(report.total_cost(), 4);
/// assert_eq!(report.tour().len(), 4);
/// ```
pub fn solve(instance: &Instance, config: &SolverConfig) -> TourResult<SolutionReport> {
    let distances = DistanceMatrix::build(instance);
    solve_with_matrix(&distances, config)
}

/// Solves using a prebuilt distance matrix.
pub fn solve_with_matrix(
    distances: &DistanceMatrix,
    config: &SolverConfig,
) -> TourResult<SolutionReport> {
    let (mut tour, initial_cost) = insertion(distances, config.construction)?;
    let mut cost = initial_cost;

    let stats = match config.refinement {
        Some(mv) => refine(&mut tour, &mut cost, distances, mv),
        None => RefinementStats::default(),
    };

    log::info!(
        "tour over {} nodes: initial cost {}, final cost {}, {} passes, {} moves",
        distances.dimension(),
        initial_cost,
        cost,
        stats.passes,
        stats.moves
    );

    Ok(SolutionReport::assemble(
        tour,
        cost,
        initial_cost,
        distances,
        config.construction,
        config.refinement,
        stats,
    ))
}
