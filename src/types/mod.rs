//! Shared data types for the adjacency-graph library.

pub mod error;
pub mod info;

pub use error::{GraphError, GraphResult};
pub use info::{DefaultEdgeInfo, DefaultGraphInfo, DefaultVertexInfo};

/// Dense vertex identifier in `[0, vertex_num())`.
pub type VertexId = usize;

/// Outgoing edges of one vertex, in insertion order.
pub type AdjacencySeq<E> = Vec<(VertexId, E)>;

/// Full adjacency structure, indexed by source vertex id.
pub type AdjacencyData<E> = Vec<AdjacencySeq<E>>;
