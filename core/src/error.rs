//! Error types for graph mutation and the graph algorithms.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, GraphError>;

/// Why an edge insertion or weight lookup was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeFault {
    MissingSource,
    MissingTarget,
    NegativeWeight(i64),
    WeightOutOfRange(i64),
}

impl std::fmt::Display for EdgeFault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EdgeFault::MissingSource => write!(f, "source vertex is not in the graph"),
            EdgeFault::MissingTarget => write!(f, "target vertex is not in the graph"),
            EdgeFault::NegativeWeight(weight) => write!(f, "negative weight {}", weight),
            EdgeFault::WeightOutOfRange(weight) => {
                write!(f, "weight {} exceeds {}", weight, u32::MAX)
            }
        }
    }
}

/// Errors reported by [`crate::WeightedGraph`].
///
/// Vertices are rendered with their `Debug` form so the error type stays
/// independent of the vertex type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("vertex {vertex} is already in the graph")]
    DuplicateVertex { vertex: String },

    #[error("invalid edge {from} -> {to}: {reason}")]
    InvalidEdge {
        from: String,
        to: String,
        reason: EdgeFault,
    },

    #[error("traversal endpoint {vertex} is not in the graph")]
    UnknownTraversalEndpoint { vertex: String },

    #[error("no path from {from} to {to}")]
    UnreachablePath { from: String, to: String },
}

impl GraphError {
    pub(crate) fn duplicate_vertex<V: std::fmt::Debug>(vertex: &V) -> Self {
        GraphError::DuplicateVertex {
            vertex: format!("{:?}", vertex),
        }
    }

    pub(crate) fn invalid_edge<V: std::fmt::Debug>(from: &V, to: &V, reason: EdgeFault) -> Self {
        GraphError::InvalidEdge {
            from: format!("{:?}", from),
            to: format!("{:?}", to),
            reason,
        }
    }

    pub(crate) fn unknown_endpoint<V: std::fmt::Debug>(vertex: &V) -> Self {
        GraphError::UnknownTraversalEndpoint {
            vertex: format!("{:?}", vertex),
        }
    }

    pub(crate) fn unreachable_path<V: std::fmt::Debug>(from: &V, to: &V) -> Self {
        GraphError::UnreachablePath {
            from: format!("{:?}", from),
            to: format!("{:?}", to),
        }
    }
}
