//! Solution report.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constructive::InsertionSeed;
use crate::distance::DistanceMatrix;
use crate::local_search::{RefinementMove, RefinementStats};

use super::{Cost, Tour};

/// The final result handed back to the caller.
///
/// # Examples
///
/// ```
/// use u_tour::distance::{DistanceMatrix, Metric};
/// use u_tour::models::{Instance, SolutionReport, Tour};
/// use u_tour::constructive::InsertionSeed;
/// use u_tour::local_search::RefinementStats;
///
/// let instance = Instance::from_coords(Metric::Euclidean, &[(0.0, 0.0), (3.0, 4.0)]).unwrap();
/// let dm = DistanceMatrix::build(&instance);
/// let tour = Tour::pair(1, 2);
/// let report = SolutionReport::assemble(tour, 10, 10, &dm, InsertionSeed::Pair, None, RefinementStats::default());
/// assert_eq!(report.total_cost(), 10);
/// assert_eq!(report.heaviest_edge(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolutionReport {
    tour: Tour,
    total_cost: Cost,
    heaviest_edge: Cost,
    initial_cost: Cost,
    construction: InsertionSeed,
    refinement: Option<RefinementMove>,
    stats: RefinementStats,
}

impl SolutionReport {
    /// Builds the report for a finished tour.
    ///
    /// `total_cost` is the incrementally tracked cost; only the heaviest edge
    /// is recomputed here, by one scan over the tour.
    pub fn assemble(
        tour: Tour,
        total_cost: Cost,
        initial_cost: Cost,
        distances: &DistanceMatrix,
        construction: InsertionSeed,
        refinement: Option<RefinementMove>,
        stats: RefinementStats,
    ) -> Self {
        let heaviest_edge = tour.heaviest_edge(distances);
        Self {
            tour,
            total_cost,
            heaviest_edge,
            initial_cost,
            construction,
            refinement,
            stats,
        }
    }

    /// Final closed tour.
    pub fn tour(&self) -> &Tour {
        &self.tour
    }

    /// Consumes the report, returning the tour.
    pub fn into_tour(self) -> Tour {
        self.tour
    }

    /// Total cost of the final tour.
    pub fn total_cost(&self) -> Cost {
        self.total_cost
    }

    /// Heaviest single edge of the final tour.
    pub fn heaviest_edge(&self) -> Cost {
        self.heaviest_edge
    }

    /// Cost of the tour right after construction.
    pub fn initial_cost(&self) -> Cost {
        self.initial_cost
    }

    /// Cost removed by local search.
    pub fn improvement(&self) -> Cost {
        self.initial_cost - self.total_cost
    }

    /// Seed used by the insertion constructor.
    pub fn construction(&self) -> InsertionSeed {
        self.construction
    }

    /// Move generator used for refinement, if any.
    pub fn refinement(&self) -> Option<RefinementMove> {
        self.refinement
    }

    /// Local search statistics.
    pub fn stats(&self) -> &RefinementStats {
        &self.stats
    }
}

impl fmt::Display for SolutionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.tour)?;
        write!(f, "{}", self.total_cost)
    }
}
