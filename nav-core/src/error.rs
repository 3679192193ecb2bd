//! Error types for nav-core.

use thiserror::Error;

/// Result type alias for graph store operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Errors returned by [`GraphStore`](crate::GraphStore) mutations and loading.
///
/// Every failing operation leaves the store exactly as it was before the call.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    /// A location with this name is already in the graph.
    #[error("Location already exists: {name}")]
    DuplicateNode {
        /// Name that was being added.
        name: String,
    },

    /// A referenced location is not in the graph.
    #[error("Unknown location: {name}")]
    UnknownNode {
        /// Name that could not be found.
        name: String,
    },

    /// Edge weight is not in `(0, MAX_DISTANCE]` (this includes NaN and
    /// infinities).
    #[error("Invalid distance {weight}: must be positive and at most 1e12")]
    InvalidWeight {
        /// Rejected weight.
        weight: f64,
    },

    /// Both endpoints of an edge are the same location.
    #[error("Cannot connect location '{name}' to itself")]
    SelfLoop {
        /// The repeated endpoint.
        name: String,
    },

    /// A loaded adjacency map violates a graph invariant.
    #[error("Invalid graph snapshot: {reason}")]
    InvalidSnapshot {
        /// First violation found.
        reason: String,
    },
}

impl GraphError {
    /// Stable machine-readable code for this error kind.
    pub fn code(&self) -> &'static str {
        match self {
            GraphError::DuplicateNode { .. } => "DuplicateNode",
            GraphError::UnknownNode { .. } => "UnknownNode",
            GraphError::InvalidWeight { .. } => "InvalidWeight",
            GraphError::SelfLoop { .. } => "SelfLoop",
            GraphError::InvalidSnapshot { .. } => "InvalidSnapshot",
        }
    }
}
