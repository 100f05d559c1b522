//! Error types for the adjacency-graph library.

use thiserror::Error;

use super::VertexId;

/// All errors that can occur in the adjacency-graph library.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Vertex id is not in `[0, vertex_count)`.
    #[error("Vertex ID {id} out of range (vertex count {vertex_count})")]
    VertexOutOfRange { id: VertexId, vertex_count: usize },

    /// No edge from source to target in the source's adjacency sequence.
    #[error("No edge from {from} to {to}")]
    NoSuchEdge { from: VertexId, to: VertexId },

    /// A visitor hook returned false.
    #[error("Traversal aborted by visitor at vertex {0}")]
    VisitorAbort(VertexId),

    /// Malformed `S:T[:LABEL]` edge argument.
    #[error("Invalid edge spec: {0}")]
    InvalidEdgeSpec(String),
}

/// Convenience result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
