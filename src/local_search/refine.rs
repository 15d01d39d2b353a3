//! Refinement engine dispatching over the available move generators.

use serde::{Deserialize, Serialize};

use crate::distance::DistanceMatrix;
use crate::models::{Cost, Tour};

use super::{lin_kernighan_lite, two_opt};

/// Edge-exchange move used by [`refine()`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefinementMove {
    /// 2-opt, first improvement, keeps scanning after each move.
    #[default]
    TwoOpt,
    /// Single-exchange Lin-Kernighan variant, restarts after each move.
    LinKernighanLite,
}

/// Counters collected during one refinement run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefinementStats {
    /// Full scans over the tour, including the final non-improving one.
    pub passes: usize,
    /// Accepted improving moves.
    pub moves: usize,
}

/// Improves `tour` in place with the given move until convergence.
///
/// `cost` must hold the tour's current cost and is kept in sync with the
/// tour after every accepted move.
///
/// # Examples
///
/// ```
/// use u_tour::distance::{DistanceMatrix, Metric};
/// use u_tour::models::{Instance, Tour};
/// use u_tour::local_search::{refine, RefinementMove};
///
/// let instance = Instance::from_coords(
///     Metric::Euclidean,
///     &[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)],
/// ).unwrap();
/// let dm = DistanceMatrix::build(&instance);
///
/// let mut tour = Tour::from_closed(vec![1, 3, 2, 4, 1]);
/// let mut cost = tour.cost(&dm);
/// refine(&mut tour, &mut cost, &dm, RefinementMove::TwoOpt);
/// assert_eq!(cost, 6);
/// ```
pub fn refine(
    tour: &mut Tour,
    cost: &mut Cost,
    distances: &DistanceMatrix,
    mv: RefinementMove,
) -> RefinementStats {
    refine_observed(tour, cost, distances, mv, |_| {})
}

/// Like [`refine()`], calling `on_move` with the new cost after every accepted move.
pub fn refine_observed<F: FnMut(Cost)>(
    tour: &mut Tour,
    cost: &mut Cost,
    distances: &DistanceMatrix,
    mv: RefinementMove,
    mut on_move: F,
) -> RefinementStats {
    match mv {
        RefinementMove::TwoOpt => two_opt(tour, cost, distances, &mut on_move),
        RefinementMove::LinKernighanLite => {
            lin_kernighan_lite(tour, cost, distances, &mut on_move)
        }
    }
}
