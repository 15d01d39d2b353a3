//! Greedy insertion constructive heuristic.
//!
//! # Algorithm
//!
//! Starting from a seed cycle, repeatedly evaluates every unvisited node `v`
//! against every edge `(c[i], c[i+1])` of the current cycle:
//!
//! ```text
//! delta = d(c[i], v) + d(v, c[i+1]) - d(c[i], c[i+1])
//! ```
//!
//! and inserts the globally cheapest `(v, i)` pair. The selection is over all
//! unvisited nodes at once rather than "pick the nearest node, then its best
//! position", so it behaves as cheapest insertion whichever seed is used.
//! Ties go to the lowest node id, then the earliest position.
//!
//! # Complexity
//!
//! O(n · |cycle|) per insertion, O(n³) overall.
//!
//! # Reference
//!
//! Rosenkrantz, D.J., Stearns, R.E. & Lewis, P.M. (1977). "An Analysis of
//! Several Heuristics for the Traveling Salesman Problem", *SIAM Journal on
//! Computing* 6(3), 563-581.

use serde::{Deserialize, Serialize};

use crate::distance::DistanceMatrix;
use crate::error::{TourError, TourResult};
use crate::models::{Cost, Tour};

/// Initial cycle for [`insertion()`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsertionSeed {
    /// "Nearest insertion": seed with nodes 1 and 2, cycle `[1, 2, 1]`.
    /// Falls back to `[1, 1]` for a single-node instance.
    #[default]
    Pair,
    /// "Cheapest insertion": seed with node 1 alone, cycle `[1, 1]`.
    Single,
}

impl InsertionSeed {
    fn seed_tour(&self, dimension: usize) -> Tour {
        match self {
            InsertionSeed::Pair if dimension >= 2 => Tour::pair(1, 2),
            _ => Tour::single(1),
        }
    }
}

/// Builds a closed tour over every node of `distances` by greedy insertion.
///
/// Returns the tour and its total cost.
///
/// # Errors
///
/// Returns [`TourError::MalformedDimension`] for an empty matrix, and
/// [`TourError::IncompleteNodeSet`] if a scan finds no node to place while
/// the cycle is still incomplete.
///
/// # Examples
///
/// ```
/// use u_tour::distance::{DistanceMatrix, Metric};
/// use u_tour::models::Instance;
/// use u_tour::constructive::{insertion, InsertionSeed};
///
/// let instance = Instance::from_coords(
///     Metric::Euclidean,
///     &[(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0)],
/// ).unwrap();
/// let dm = DistanceMatrix::build(&instance);
///
/// let (tour, cost) = insertion(&dm, InsertionSeed::Pair).unwrap();
/// assert!(tour.is_valid(4));
/// assert_eq!(cost, 40);
/// ```
pub fn insertion(distances: &DistanceMatrix, seed: InsertionSeed) -> TourResult<(Tour, Cost)> {
    let n = distances.dimension();
    if n == 0 {
        return Err(TourError::MalformedDimension(n.to_string()));
    }

    let mut tour = seed.seed_tour(n);
    let mut visited = vec![false; n + 1];
    for &v in tour.sequence() {
        visited[v] = true;
    }

    while tour.len() < n {
        // (delta, node, insert position)
        let mut best: Option<(Cost, usize, usize)> = None;
        for v in 1..=n {
            if visited[v] {
                continue;
            }
            for (i, (a, b)) in tour.edges().enumerate() {
                let delta = distances.get(a, v) + distances.get(v, b) - distances.get(a, b);
                if best.is_none_or(|(d, _, _)| delta < d) {
                    best = Some((delta, v, i + 1));
                }
            }
        }

        let Some((_, v, position)) = best else {
            return Err(TourError::IncompleteNodeSet {
                dimension: n,
                found: tour.len(),
            });
        };
        tour.insert(position, v);
        visited[v] = true;
    }

    let cost = tour.cost(distances);
    log::debug!("{seed:?} insertion built tour over {n} nodes, cost {cost}");
    Ok((tour, cost))
}
