//! 2-opt improvement over a closed tour.
//!
//! # Algorithm
//!
//! For each pair of positions `1 <= i < j < n`, compare the edges
//! `(t[i-1], t[i])` and `(t[j], t[j+1])` against the edges obtained by
//! reversing `t[i..=j]`:
//!
//! ```text
//! delta = d(t[i-1], t[j]) + d(t[i], t[j+1]) - d(t[i-1], t[i]) - d(t[j], t[j+1])
//! ```
//!
//! If delta < 0, reverse the segment immediately and keep scanning the same
//! pass. Passes repeat until one applies no move. Position 0 and the closing
//! copy at `n` are never moved.
//!
//! # Complexity
//!
//! O(n²) per pass, no cap on the number of passes.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use crate::distance::DistanceMatrix;
use crate::models::{Cost, Tour};

use super::RefinementStats;

/// Applies 2-opt to `tour` in place until no improving move remains.
///
/// `cost` must hold the current tour cost on entry and is updated by the
/// exact delta of every accepted move. `on_move` is called with the new cost
/// after each move.
///
/// # Examples
///
/// ```
/// use u_tour::distance::{DistanceMatrix, Metric};
/// use u_tour::models::{Instance, Tour};
/// use u_tour::local_search::two_opt;
///
/// let instance = Instance::from_coords(
///     Metric::Euclidean,
///     &[(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0)],
/// ).unwrap();
/// let dm = DistanceMatrix::build(&instance);
///
/// // 1 -> 3 -> 2 -> 4 crosses itself.
/// let mut tour = Tour::from_closed(vec![1, 3, 2, 4, 1]);
/// let mut cost = tour.cost(&dm);
/// assert_eq!(cost, 48);
///
/// let stats = two_opt(&mut tour, &mut cost, &dm, &mut |_| {});
/// assert_eq!(cost, 40);
/// assert_eq!(cost, tour.cost(&dm));
/// assert!(stats.moves > 0);
/// ```
pub fn two_opt<F: FnMut(Cost)>(
    tour: &mut Tour,
    cost: &mut Cost,
    distances: &DistanceMatrix,
    on_move: &mut F,
) -> RefinementStats {
    let n = tour.len();
    let t = tour.sequence_mut();
    let mut stats = RefinementStats::default();

    loop {
        stats.passes += 1;
        let mut pass_moves = 0;

        for i in 1..n.saturating_sub(1) {
            for j in i + 1..n {
                let current = distances.get(t[i - 1], t[i]) + distances.get(t[j], t[j + 1]);
                let candidate = distances.get(t[i - 1], t[j]) + distances.get(t[i], t[j + 1]);

                if candidate < current {
                    t[i..=j].reverse();
                    *cost += candidate - current;
                    pass_moves += 1;
                    on_move(*cost);
                }
            }
        }

        stats.moves += pass_moves;
        log::debug!(
            "2-opt pass {}: {} moves, cost {}",
            stats.passes,
            pass_moves,
            *cost
        );
        if pass_moves == 0 {
            break;
        }
    }

    stats
}
