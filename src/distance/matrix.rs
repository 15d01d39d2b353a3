//! Dense distance matrix.

use crate::error::{TourError, TourResult};
use crate::models::{Cost, Instance};

/// A dense symmetric integer distance matrix indexed by node id.
///
/// Side length is `dimension + 1`; row and column 0 are unused so that node
/// ids (which start at 1) index the table directly.
///
/// # Examples
///
/// ```
/// use u_tour::distance::{DistanceMatrix, Metric};
/// use u_tour::models::Instance;
///
/// let instance = Instance::from_coords(Metric::Euclidean, &[(0.0, 0.0), (3.0, 4.0), (0.0, 8.0)]).unwrap();
/// let dm = DistanceMatrix::build(&instance);
/// assert_eq!(dm.get(1, 2), 5);
/// assert_eq!(dm.get(3, 1), 8);
/// assert_eq!(dm.dimension(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMatrix {
    data: Vec<Cost>,
    side: usize,
}

impl DistanceMatrix {
    /// Creates a matrix for `dimension` nodes, initialized to zero.
    fn zeroed(dimension: usize) -> Self {
        let side = dimension + 1;
        Self {
            data: vec![0; side * side],
            side,
        }
    }

    /// Computes the matrix for an instance under its metric.
    ///
    /// Only the upper triangle is evaluated; the lower one is mirrored.
    pub fn build(instance: &Instance) -> Self {
        let metric = instance.metric();
        let nodes = instance.nodes();
        let mut dm = Self::zeroed(instance.dimension());
        for (a, na) in nodes.iter().enumerate() {
            for nb in &nodes[a + 1..] {
                let d = metric.distance(na, nb);
                dm.set(na.id(), nb.id(), d);
                dm.set(nb.id(), na.id(), d);
            }
        }
        log::debug!(
            "built {} distance matrix for {} nodes",
            metric,
            instance.dimension()
        );
        dm
    }

    /// Creates a matrix from explicit rows, where `rows[i][j]` is the
    /// distance between nodes `i + 1` and `j + 1`.
    ///
    /// Rows must form a non-empty square, symmetric table with a zero
    /// diagonal and no negative entries.
    pub fn from_rows(rows: &[Vec<Cost>]) -> TourResult<Self> {
        let n = rows.len();
        if n == 0 {
            return Err(TourError::MalformedDimension("0".into()));
        }
        let mut dm = Self::zeroed(n);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(TourError::invalid_matrix(format!(
                    "row {} has {} entries, expected {n}",
                    i + 1,
                    row.len()
                )));
            }
            for (j, &d) in row.iter().enumerate() {
                if d < 0 {
                    return Err(TourError::invalid_matrix(format!(
                        "negative distance {d} at ({}, {})",
                        i + 1,
                        j + 1
                    )));
                }
                if i == j && d != 0 {
                    return Err(TourError::invalid_matrix(format!(
                        "non-zero diagonal at node {}",
                        i + 1
                    )));
                }
                dm.set(i + 1, j + 1, d);
            }
        }
        if !dm.is_symmetric() {
            return Err(TourError::invalid_matrix("table is not symmetric"));
        }
        Ok(dm)
    }

    /// Returns the distance between nodes `from` and `to`.
    ///
    /// # Panics
    ///
    /// Panics if either id exceeds [`dimension`](Self::dimension).
    #[inline]
    pub fn get(&self, from: usize, to: usize) -> Cost {
        self.data[from * self.side + to]
    }

    fn set(&mut self, from: usize, to: usize, distance: Cost) {
        self.data[from * self.side + to] = distance;
    }

    /// Number of nodes covered by this matrix.
    pub fn dimension(&self) -> usize {
        self.side - 1
    }

    /// Returns `true` if `get(i, j) == get(j, i)` for every pair of nodes.
    pub fn is_symmetric(&self) -> bool {
        let n = self.dimension();
        (1..=n).all(|i| (i + 1..=n).all(|j| self.get(i, j) == self.get(j, i)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::Metric;
    use crate::models::Node;

    fn sample_instance() -> Instance {
        Instance::from_coords(Metric::Euclidean, &[(0.0, 0.0), (3.0, 4.0), (0.0, 8.0)])
            .expect("valid")
    }

    #[test]
    fn test_build_euclidean() {
        let dm = DistanceMatrix::build(&sample_instance());
        assert_eq!(dm.dimension(), 3);
        assert_eq!(dm.get(1, 2), 5);
        assert_eq!(dm.get(1, 3), 8);
        assert_eq!(dm.get(2, 3), 5);
        assert_eq!(dm.get(1, 1), 0);
    }

    #[test]
    fn test_symmetric_zero_diagonal() {
        let dm = DistanceMatrix::build(&sample_instance());
        assert!(dm.is_symmetric());
        for i in 1..=dm.dimension() {
            assert_eq!(dm.get(i, i), 0);
        }
    }

    #[test]
    fn test_build_uses_ids_not_input_order() {
        let nodes = vec![
            Node::new(3, 0.0, 8.0),
            Node::new(1, 0.0, 0.0),
            Node::new(2, 3.0, 4.0),
        ];
        let instance = Instance::new(3, Metric::Euclidean, nodes).expect("valid");
        let dm = DistanceMatrix::build(&instance);
        assert_eq!(dm, DistanceMatrix::build(&sample_instance()));
    }

    #[test]
    fn test_build_geo_duplicates() {
        let instance =
            Instance::from_coords(Metric::Geographic, &[(16.47, 96.10), (16.47, 96.10)])
                .expect("valid");
        let dm = DistanceMatrix::build(&instance);
        assert_eq!(dm.get(1, 2), 1);
        assert_eq!(dm.get(2, 1), 1);
        assert_eq!(dm.get(1, 1), 0);
    }

    #[test]
    fn test_single_node() {
        let instance = Instance::from_coords(Metric::Euclidean, &[(5.0, 5.0)]).expect("valid");
        let dm = DistanceMatrix::build(&instance);
        assert_eq!(dm.dimension(), 1);
        assert_eq!(dm.get(1, 1), 0);
    }

    #[test]
    fn test_from_rows() {
        let dm = DistanceMatrix::from_rows(&[vec![0, 5], vec![5, 0]]).expect("valid");
        assert_eq!(dm.dimension(), 2);
        assert_eq!(dm.get(1, 2), 5);
        assert_eq!(dm.get(2, 1), 5);
    }

    #[test]
    fn test_from_rows_invalid() {
        assert!(matches!(
            DistanceMatrix::from_rows(&[]),
            Err(TourError::MalformedDimension(_))
        ));
        assert!(matches!(
            DistanceMatrix::from_rows(&[vec![0, 1], vec![1]]),
            Err(TourError::InvalidMatrix(_))
        ));
        assert!(matches!(
            DistanceMatrix::from_rows(&[vec![0, 1], vec![2, 0]]),
            Err(TourError::InvalidMatrix(_))
        ));
        assert!(matches!(
            DistanceMatrix::from_rows(&[vec![1, 1], vec![1, 0]]),
            Err(TourError::InvalidMatrix(_))
        ));
        assert!(matches!(
            DistanceMatrix::from_rows(&[vec![0, -1], vec![-1, 0]]),
            Err(TourError::InvalidMatrix(_))
        ));
    }
}
