//! Fluent API for building DirectedGraph instances.

use crate::types::{GraphResult, VertexId};

use super::DirectedGraph;

/// Fluent builder for constructing a DirectedGraph.
///
/// Edges are validated when [`build`](Self::build) is called, so they may be
/// declared before the vertices they reference.
pub struct GraphBuilder<E, V, G> {
    info: G,
    vertices: Vec<V>,
    edges: Vec<(VertexId, VertexId, E)>,
}

impl<E, V, G: Default> GraphBuilder<E, V, G> {
    /// Create a new builder with a default graph payload.
    pub fn new() -> Self {
        Self::with_info(G::default())
    }
}

impl<E, V, G: Default> Default for GraphBuilder<E, V, G> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E, V, G> GraphBuilder<E, V, G> {
    /// Create a new builder carrying a graph payload.
    pub fn with_info(info: G) -> Self {
        Self {
            info,
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Add a vertex. Vertices are numbered in the order they are added.
    pub fn vertex(mut self, info: V) -> Self {
        self.vertices.push(info);
        self
    }

    /// Add an edge.
    pub fn edge(mut self, source: VertexId, target: VertexId, info: E) -> Self {
        self.edges.push((source, target, info));
        self
    }

    /// Build the graph, failing on the first edge with an out-of-range endpoint.
    pub fn build(self) -> GraphResult<DirectedGraph<E, V, G>> {
        let mut graph = DirectedGraph::from_vertices(self.vertices, self.info);
        for (source, target, info) in self.edges {
            graph.add_edge(source, target, info)?;
        }
        Ok(graph)
    }
}

impl<E, V: Default, G> GraphBuilder<E, V, G> {
    /// Add `count` vertices with default payloads.
    pub fn vertices(mut self, count: usize) -> Self {
        self.vertices
            .extend(std::iter::repeat_with(V::default).take(count));
        self
    }
}

impl<E: Default, V, G> GraphBuilder<E, V, G> {
    /// Add an edge with a default payload.
    pub fn link(self, source: VertexId, target: VertexId) -> Self {
        self.edge(source, target, E::default())
    }
}
