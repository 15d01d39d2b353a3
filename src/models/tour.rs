//! Closed tour type.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::distance::DistanceMatrix;

use super::Cost;

/// A closed Hamiltonian cycle stored as `[v0, v1, ..., v(n-1), v0]`.
///
/// The last entry repeats the first, so a tour over `n` nodes has `n + 1`
/// entries and its edges are `(t[i], t[i + 1])` for `i in 0..n`.
///
/// # Examples
///
/// ```
/// use u_tour::models::Tour;
///
/// let tour = Tour::from_closed(vec![1, 3, 2, 1]);
/// assert_eq!(tour.len(), 3);
/// assert_eq!(tour.edges().collect::<Vec<_>>(), vec![(1, 3), (3, 2), (2, 1)]);
/// assert!(tour.is_valid(3));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tour {
    sequence: Vec<usize>,
}

impl Tour {
    /// Wraps an already closed sequence (first entry repeated at the end).
    pub fn from_closed(sequence: Vec<usize>) -> Self {
        Self { sequence }
    }

    /// Degenerate single-node cycle `[v, v]`.
    pub fn single(v: usize) -> Self {
        Self {
            sequence: vec![v, v],
        }
    }

    /// Two-node cycle `[a, b, a]`.
    pub fn pair(a: usize, b: usize) -> Self {
        Self {
            sequence: vec![a, b, a],
        }
    }

    /// Closed sequence including the repeated start.
    pub fn sequence(&self) -> &[usize] {
        &self.sequence
    }

    /// Consumes the tour, returning the closed sequence.
    pub fn into_sequence(self) -> Vec<usize> {
        self.sequence
    }

    pub(crate) fn sequence_mut(&mut self) -> &mut [usize] {
        &mut self.sequence
    }

    /// Number of distinct nodes (= number of edges).
    pub fn len(&self) -> usize {
        self.sequence.len().saturating_sub(1)
    }

    /// Returns `true` if the tour visits no node.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Inserts `node` at `position`, between `t[position - 1]` and `t[position]`.
    pub(crate) fn insert(&mut self, position: usize, node: usize) {
        self.sequence.insert(position, node);
    }

    /// Iterates over the tour's edges in order, closing edge included.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.sequence.windows(2).map(|w| (w[0], w[1]))
    }

    /// Sum of edge weights along the tour.
    pub fn cost(&self, distances: &DistanceMatrix) -> Cost {
        self.edges().map(|(a, b)| distances.get(a, b)).sum()
    }

    /// Weight of the heaviest edge, or 0 for an edgeless tour.
    pub fn heaviest_edge(&self, distances: &DistanceMatrix) -> Cost {
        self.edges()
            .map(|(a, b)| distances.get(a, b))
            .max()
            .unwrap_or(0)
    }

    /// Returns `true` if the tour is closed and visits every node of
    /// `1..=dimension` exactly once.
    pub fn is_valid(&self, dimension: usize) -> bool {
        if self.sequence.len() != dimension + 1 || self.sequence.first() != self.sequence.last()
        {
            return false;
        }
        let mut seen = vec![false; dimension + 1];
        for &v in &self.sequence[..dimension] {
            if v == 0 || v > dimension || seen[v] {
                return false;
            }
            seen[v] = true;
        }
        true
    }
}

impl fmt::Display for Tour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.sequence.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_matrix() -> DistanceMatrix {
        // Nodes on a line at 0, 1, 3.
        DistanceMatrix::from_rows(&[vec![0, 1, 3], vec![1, 0, 2], vec![3, 2, 0]]).expect("valid")
    }

    #[test]
    fn test_single_and_pair() {
        let t = Tour::single(1);
        assert_eq!(t.sequence(), &[1, 1]);
        assert_eq!(t.len(), 1);
        assert!(t.is_valid(1));

        let t = Tour::pair(1, 2);
        assert_eq!(t.sequence(), &[1, 2, 1]);
        assert_eq!(t.len(), 2);
        assert!(t.is_valid(2));
    }

    #[test]
    fn test_cost_and_heaviest() {
        let dm = line_matrix();
        let t = Tour::from_closed(vec![1, 2, 3, 1]);
        assert_eq!(t.cost(&dm), 6);
        assert_eq!(t.heaviest_edge(&dm), 3);
        assert_eq!(Tour::single(1).cost(&dm), 0);
        assert_eq!(Tour::single(1).heaviest_edge(&dm), 0);
    }

    #[test]
    fn test_insert() {
        let mut t = Tour::pair(1, 2);
        t.insert(1, 3);
        assert_eq!(t.sequence(), &[1, 3, 2, 1]);
    }

    #[test]
    fn test_is_valid_rejects() {
        assert!(!Tour::from_closed(vec![1, 2, 3]).is_valid(3));
        assert!(!Tour::from_closed(vec![1, 2, 2, 1]).is_valid(3));
        assert!(!Tour::from_closed(vec![1, 2, 3, 2]).is_valid(3));
        assert!(!Tour::from_closed(vec![1, 4, 3, 1]).is_valid(3));
        assert!(!Tour::from_closed(vec![0, 2, 1, 0]).is_valid(3));
        assert!(Tour::from_closed(vec![2, 3, 1, 2]).is_valid(3));
    }

    #[test]
    fn test_display() {
        assert_eq!(Tour::from_closed(vec![1, 3, 2, 1]).to_string(), "1 3 2 1");
    }
}
