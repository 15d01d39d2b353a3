//! Error types for tour construction.
//!
//! Every variant is a precondition failure of the caller's input. Once an
//! [`Instance`](crate::models::Instance) and its
//! [`DistanceMatrix`](crate::distance::DistanceMatrix) exist, the engine
//! itself has no failure modes.

use thiserror::Error;

/// Result type alias for tour engine operations.
pub type TourResult<T> = Result<T, TourError>;

/// Unified error type for the tour engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TourError {
    /// Edge weight type other than `EUC_2D` or `GEO`.
    #[error("unsupported edge weight type '{0}'")]
    UnsupportedMetric(String),

    /// Dimension is zero or cannot be parsed.
    #[error("malformed dimension '{0}'")]
    MalformedDimension(String),

    /// Fewer nodes than the declared dimension, or a node that can never be placed.
    #[error("incomplete node set: dimension {dimension}, found {found}")]
    IncompleteNodeSet {
        /// Declared number of nodes.
        dimension: usize,
        /// Number of nodes actually available.
        found: usize,
    },

    /// Node identifier outside `1..=dimension`.
    #[error("node id {id} outside 1..={dimension}")]
    NodeOutOfRange {
        /// Offending identifier.
        id: usize,
        /// Declared number of nodes.
        dimension: usize,
    },

    /// The same node identifier appears twice.
    #[error("duplicate node id {0}")]
    DuplicateNode(usize),

    /// A coordinate is NaN or infinite.
    #[error("non-finite coordinate on node {0}")]
    NonFiniteCoordinate(usize),

    /// An explicit distance table is not square, symmetric, or zero on the diagonal.
    #[error("invalid distance matrix: {0}")]
    InvalidMatrix(String),
}

impl TourError {
    /// Builds an [`TourError::InvalidMatrix`] from any message.
    pub fn invalid_matrix(message: impl Into<String>) -> Self {
        Self::InvalidMatrix(message.into())
    }
}
