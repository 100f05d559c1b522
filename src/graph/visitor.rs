//! Visitor hooks called by the traversal engine.
//!
//! Every hook returns `true` to continue. Returning `false` aborts the whole
//! traversal at once; no further hook of any kind is called.

use crate::types::VertexId;

use super::DirectedGraph;

/// Hooks for breadth-first traversal.
pub trait BfsVisitor<E, V, G> {
    /// Called once per vertex, in id order, before a whole-graph traversal
    /// starts walking. Single-source searches never call it.
    fn initialize_vertex(&mut self, _vertex: VertexId, _graph: &DirectedGraph<E, V, G>) -> bool {
        true
    }

    /// Called when a vertex is taken off the queue.
    fn discover_vertex(&mut self, _vertex: VertexId, _graph: &DirectedGraph<E, V, G>) -> bool {
        true
    }

    /// Called for every outgoing edge of the vertex being scanned, in stored
    /// order, whether or not the target was already seen.
    fn examine_edge(
        &mut self,
        _source: VertexId,
        _target: VertexId,
        _info: &E,
        _graph: &DirectedGraph<E, V, G>,
    ) -> bool {
        true
    }

    /// Called once all outgoing edges of a vertex have been examined.
    fn finish_vertex(&mut self, _vertex: VertexId, _graph: &DirectedGraph<E, V, G>) -> bool {
        true
    }
}

/// Hooks for depth-first traversal.
pub trait DfsVisitor<E, V, G> {
    /// Called once per vertex, in id order, before a whole-graph traversal
    /// starts walking. Single-source searches never call it.
    fn initialize_vertex(&mut self, _vertex: VertexId, _graph: &DirectedGraph<E, V, G>) -> bool {
        true
    }

    /// Called when a vertex is first entered (unvisited -> in progress).
    fn discover_vertex(&mut self, _vertex: VertexId, _graph: &DirectedGraph<E, V, G>) -> bool {
        true
    }

    /// Called for every outgoing edge, in stored order, before deciding
    /// whether to descend into the target.
    fn examine_edge(
        &mut self,
        _source: VertexId,
        _target: VertexId,
        _info: &E,
        _graph: &DirectedGraph<E, V, G>,
    ) -> bool {
        true
    }

    /// Called when every outgoing edge has been explored (in progress -> finished).
    fn finish_vertex(&mut self, _vertex: VertexId, _graph: &DirectedGraph<E, V, G>) -> bool {
        true
    }
}

/// Visitor that records the order of every event it sees.
///
/// Works for both traversal kinds. An optional limit makes it refuse to
/// discover more than that many vertices, which aborts the traversal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderRecorder {
    /// Vertices passed to `initialize_vertex`.
    pub initialized: Vec<VertexId>,
    /// Discovery order.
    pub discovered: Vec<VertexId>,
    /// Finish order.
    pub finished: Vec<VertexId>,
    /// Examined edges as `(source, target)`.
    pub examined: Vec<(VertexId, VertexId)>,
    discover_limit: Option<usize>,
}

impl OrderRecorder {
    /// Create a recorder with no discovery limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Abort once more than `limit` vertices would be discovered.
    pub fn with_discover_limit(limit: usize) -> Self {
        Self {
            discover_limit: Some(limit),
            ..Self::default()
        }
    }

    fn record_discovery(&mut self, vertex: VertexId) -> bool {
        if let Some(limit) = self.discover_limit {
            if self.discovered.len() >= limit {
                return false;
            }
        }
        self.discovered.push(vertex);
        true
    }
}

impl<E, V, G> BfsVisitor<E, V, G> for OrderRecorder {
    fn initialize_vertex(&mut self, vertex: VertexId, _graph: &DirectedGraph<E, V, G>) -> bool {
        self.initialized.push(vertex);
        true
    }

    fn discover_vertex(&mut self, vertex: VertexId, _graph: &DirectedGraph<E, V, G>) -> bool {
        self.record_discovery(vertex)
    }

    fn examine_edge(
        &mut self,
        source: VertexId,
        target: VertexId,
        _info: &E,
        _graph: &DirectedGraph<E, V, G>,
    ) -> bool {
        self.examined.push((source, target));
        true
    }

    fn finish_vertex(&mut self, vertex: VertexId, _graph: &DirectedGraph<E, V, G>) -> bool {
        self.finished.push(vertex);
        true
    }
}

impl<E, V, G> DfsVisitor<E, V, G> for OrderRecorder {
    fn initialize_vertex(&mut self, vertex: VertexId, _graph: &DirectedGraph<E, V, G>) -> bool {
        self.initialized.push(vertex);
        true
    }

    fn discover_vertex(&mut self, vertex: VertexId, _graph: &DirectedGraph<E, V, G>) -> bool {
        self.record_discovery(vertex)
    }

    fn examine_edge(
        &mut self,
        source: VertexId,
        target: VertexId,
        _info: &E,
        _graph: &DirectedGraph<E, V, G>,
    ) -> bool {
        self.examined.push((source, target));
        true
    }

    fn finish_vertex(&mut self, vertex: VertexId, _graph: &DirectedGraph<E, V, G>) -> bool {
        self.finished.push(vertex);
        true
    }
}
