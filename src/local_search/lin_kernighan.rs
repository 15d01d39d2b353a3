//! Single-exchange Lin-Kernighan-style improvement.
//!
//! # Algorithm
//!
//! For an anchor position `t1` and a second position `t2 >= t1 + 2`, the
//! edges `(t[t1], t[t1+1])` and `(t[t2], t[t2+1])` are replaced by
//! `(t[t1], t[t2])` and `(t[t1+1], t[t2+1])`:
//!
//! ```text
//! gain = d(t[t1], t[t1+1]) + d(t[t2], t[t2+1]) - d(t[t1], t[t2]) - d(t[t1+1], t[t2+1])
//! ```
//!
//! The closed layout makes `t[n]` the wrap-around successor of `t[n-1]`. If
//! gain > 0, reverse `t[t1+1..=t2]` and restart the scan from the first
//! anchor. Stops when a full scan finds no positive gain.
//!
//! Only one exchange is tried per step: there is no sequential gain
//! criterion, no variable depth and no backtracking, so this is a
//! first-improvement 2-exchange with restart rather than full Lin-Kernighan.
//!
//! # Reference
//!
//! Lin, S. & Kernighan, B.W. (1973). "An Effective Heuristic Algorithm for
//! the Traveling-Salesman Problem", *Operations Research* 21(2), 498-516.

use crate::distance::DistanceMatrix;
use crate::models::{Cost, Tour};

use super::RefinementStats;

/// Applies the single-exchange move to `tour` in place until convergence.
///
/// `cost` is decreased by the gain of every accepted exchange; `on_move` is
/// called with the new cost after each one. Each scan, including the
/// restarts after an accepted exchange, counts as one pass.
///
/// # Examples
///
/// ```
/// use u_tour::distance::{DistanceMatrix, Metric};
/// use u_tour::models::{Instance, Tour};
/// use u_tour::local_search::lin_kernighan_lite;
///
/// let instance = Instance::from_coords(
///     Metric::Euclidean,
///     &[(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0)],
/// ).unwrap();
/// let dm = DistanceMatrix::build(&instance);
///
/// let mut tour = Tour::from_closed(vec![1, 3, 2, 4, 1]);
/// let mut cost = tour.cost(&dm);
/// let stats = lin_kernighan_lite(&mut tour, &mut cost, &dm, &mut |_| {});
/// assert_eq!(cost, 40);
/// assert_eq!(stats.moves, 1);
/// ```
pub fn lin_kernighan_lite<F: FnMut(Cost)>(
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
        let mut improved = false;

        'scan: for t1 in 0..n {
            for t2 in t1 + 2..n {
                let gain = distances.get(t[t1], t[t1 + 1]) + distances.get(t[t2], t[t2 + 1])
                    - distances.get(t[t1], t[t2])
                    - distances.get(t[t1 + 1], t[t2 + 1]);

                if gain > 0 {
                    t[t1 + 1..=t2].reverse();
                    *cost -= gain;
                    stats.moves += 1;
                    improved = true;
                    on_move(*cost);
                    log::trace!("exchange at ({t1}, {t2}), gain {gain}, cost {}", *cost);
                    break 'scan;
                }
            }
        }

        if !improved {
            break;
        }
    }

    log::debug!(
        "lin-kernighan converged after {} scans, {} moves, cost {}",
        stats.passes,
        stats.moves,
        *cost
    );
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::Metric;
    use crate::local_search::two_opt;
    use crate::models::Instance;

    fn matrix(coords: &[(f64, f64)]) -> DistanceMatrix {
        DistanceMatrix::build(&Instance::from_coords(Metric::Euclidean, coords).expect("valid"))
    }

    fn octagon() -> DistanceMatrix {
        matrix(&[
            (0.0, 0.0),
            (10.0, 10.0),
            (0.0, 10.0),
            (10.0, 0.0),
            (5.0, 12.0),
            (5.0, -2.0),
            (12.0, 5.0),
            (-2.0, 5.0),
        ])
    }

    #[test]
    fn test_lk_uncrosses_square() {
        let dm = matrix(&[(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0)]);
        let mut tour = Tour::from_closed(vec![1, 3, 2, 4, 1]);
        let mut cost = tour.cost(&dm);
        let stats = lin_kernighan_lite(&mut tour, &mut cost, &dm, &mut |_| {});
        assert_eq!(tour.sequence(), &[1, 2, 3, 4, 1]);
        assert_eq!(cost, 40);
        assert_eq!(stats.moves, 1);
        assert_eq!(stats.passes, 2);
    }

    #[test]
    fn test_lk_cost_tracks_ground_truth() {
        let dm = octagon();
        let mut tour = Tour::from_closed(vec![1, 2, 3, 4, 5, 6, 7, 8, 1]);
        let initial = tour.cost(&dm);
        let mut cost = initial;
        let mut trace = Vec::new();
        let stats = lin_kernighan_lite(&mut tour, &mut cost, &dm, &mut |c| trace.push(c));

        assert!(stats.moves > 0);
        assert_eq!(stats.passes, stats.moves + 1);
        assert_eq!(cost, tour.cost(&dm));
        assert!(cost < initial);
        assert!(trace.windows(2).all(|w| w[1] < w[0]));
        assert!(tour.is_valid(8));
        assert_eq!(tour.sequence()[0], 1);
    }

    #[test]
    fn test_lk_converged_is_two_opt_stable() {
        // Every positive-gain exchange is also an improving 2-opt move, so a
        // converged tour leaves 2-opt nothing to do.
        let dm = octagon();
        let mut tour = Tour::from_closed(vec![1, 5, 2, 6, 3, 7, 4, 8, 1]);
        let mut cost = tour.cost(&dm);
        lin_kernighan_lite(&mut tour, &mut cost, &dm, &mut |_| {});

        let before = tour.clone();
        let stats = two_opt(&mut tour, &mut cost, &dm, &mut |_| {});
        assert_eq!(stats.moves, 0);
        assert_eq!(tour, before);
    }

    #[test]
    fn test_lk_small_tours() {
        let dm = matrix(&[(0.0, 0.0), (4.0, 0.0), (0.0, 3.0)]);
        for seq in [vec![1, 1], vec![1, 2, 1], vec![1, 2, 3, 1]] {
            let mut tour = Tour::from_closed(seq.clone());
            let mut cost = tour.cost(&dm);
            let stats = lin_kernighan_lite(&mut tour, &mut cost, &dm, &mut |_| {});
            assert_eq!(tour.sequence(), seq.as_slice());
            assert_eq!(stats.moves, 0);
            assert_eq!(stats.passes, 1);
        }
    }
}
