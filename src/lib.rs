//! adjacency-graph: a directed adjacency-list graph with visitor-driven
//! breadth-first and depth-first traversal.
//!
//! Vertices, edges and the graph itself each carry a caller-supplied payload.
//! Traversals report every event to a visitor, which can stop the walk at
//! any point by returning `false` from a hook.

pub mod cli;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{BfsVisitor, DfsVisitor, DirectedGraph, GraphBuilder, OrderRecorder, VisitState};
pub use types::{
    AdjacencyData, AdjacencySeq, DefaultEdgeInfo, DefaultGraphInfo, DefaultVertexInfo, GraphError,
    GraphResult, VertexId,
};
