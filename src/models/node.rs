//! Node type.

/// A node of a TSP instance.
///
/// Coordinates are planar `x`/`y` under [`Metric::Euclidean`], or latitude
/// and longitude in packed `DDD.MM` form under [`Metric::Geographic`].
///
/// [`Metric::Euclidean`]: crate::distance::Metric::Euclidean
/// [`Metric::Geographic`]: crate::distance::Metric::Geographic
///
/// # Examples
///
/// ```
/// use u_tour::models::Node;
///
/// let n = Node::new(1, 41.0, 49.0);
/// assert_eq!(n.id(), 1);
/// assert_eq!(n.x(), 41.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node {
    id: usize,
    x: f64,
    y: f64,
}

impl Node {
    /// Creates a new node.
    pub fn new(id: usize, x: f64, y: f64) -> Self {
        Self { id, x, y }
    }

    /// Node identifier (1-based).
    pub fn id(&self) -> usize {
        self.id
    }

    /// First coordinate (x, or latitude).
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Second coordinate (y, or longitude).
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Returns `true` if both coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}
