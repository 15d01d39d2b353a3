//! Validated problem instance.

use crate::distance::Metric;
use crate::error::{TourError, TourResult};

use super::Node;

/// An immutable symmetric TSP instance: a node arena plus its metric.
///
/// Nodes are stored in id order so that `nodes()[k].id() == k + 1`. Every id
/// in `1..=dimension` is present exactly once; gaps and duplicates are
/// rejected at construction.
///
/// # Examples
///
/// ```
/// use u_tour::distance::Metric;
/// use u_tour::models::{Instance, Node};
///
/// let nodes = vec![Node::new(2, 1.0, 0.0), Node::new(1, 0.0, 0.0)];
/// let instance = Instance::new(2, Metric::Euclidean, nodes).unwrap();
/// assert_eq!(instance.dimension(), 2);
/// assert_eq!(instance.node(1).x(), 0.0);
///
/// // Node 2 is missing.
/// assert!(Instance::new(2, Metric::Euclidean, vec![Node::new(1, 0.0, 0.0)]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Instance {
    metric: Metric,
    nodes: Vec<Node>,
}

impl Instance {
    /// Creates an instance from a declared dimension and its nodes.
    ///
    /// Nodes may be given in any order.
    pub fn new(dimension: usize, metric: Metric, nodes: Vec<Node>) -> TourResult<Self> {
        if dimension == 0 {
            return Err(TourError::MalformedDimension(dimension.to_string()));
        }

        let mut slots: Vec<Option<Node>> = vec![None; dimension];
        for node in nodes {
            let id = node.id();
            if id == 0 || id > dimension {
                return Err(TourError::NodeOutOfRange { id, dimension });
            }
            if !node.is_finite() {
                return Err(TourError::NonFiniteCoordinate(id));
            }
            let slot = &mut slots[id - 1];
            if slot.is_some() {
                return Err(TourError::DuplicateNode(id));
            }
            *slot = Some(node);
        }

        let found = slots.iter().filter(|s| s.is_some()).count();
        if found < dimension {
            return Err(TourError::IncompleteNodeSet { dimension, found });
        }

        Ok(Self {
            metric,
            nodes: slots.into_iter().flatten().collect(),
        })
    }

    /// Creates an instance from coordinates, numbering nodes `1..=n` in order.
    pub fn from_coords(metric: Metric, coords: &[(f64, f64)]) -> TourResult<Self> {
        let nodes = coords
            .iter()
            .enumerate()
            .map(|(i, &(x, y))| Node::new(i + 1, x, y))
            .collect();
        Self::new(coords.len(), metric, nodes)
    }

    /// Parses a `DIMENSION` value, rejecting zero and non-integers.
    pub fn parse_dimension(value: &str) -> TourResult<usize> {
        match value.trim().parse::<usize>() {
            Ok(d) if d > 0 => Ok(d),
            _ => Err(TourError::MalformedDimension(value.trim().to_string())),
        }
    }

    /// Number of nodes.
    pub fn dimension(&self) -> usize {
        self.nodes.len()
    }

    /// Edge weight type.
    pub fn metric(&self) -> Metric {
        self.metric
    }

    /// All nodes in id order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Node with the given id.
    ///
    /// # Panics
    ///
    /// Panics if `id` is outside `1..=dimension`.
    pub fn node(&self, id: usize) -> &Node {
        &self.nodes[id - 1]
    }
}
