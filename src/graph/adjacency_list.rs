//! Directed graph stored as per-vertex adjacency sequences.

use crate::types::{
    AdjacencyData, AdjacencySeq, DefaultEdgeInfo, DefaultGraphInfo, DefaultVertexInfo, GraphError,
    GraphResult, VertexId,
};

/// A directed graph with payloads on vertices, edges and the graph itself.
///
/// Vertex ids are dense: they always cover `[0, vertex_num())`. Removing a
/// vertex relabels every higher id down by one, so ids handed out earlier
/// may refer to a different vertex afterwards.
///
/// Parallel edges are allowed. Edge lookups and updates address the first
/// matching entry in the source's adjacency sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectedGraph<E = DefaultEdgeInfo, V = DefaultVertexInfo, G = DefaultGraphInfo> {
    /// Outgoing edges, indexed by source id, in insertion order.
    adjacency: AdjacencyData<E>,
    /// Vertex payloads, indexed by id.
    vertices: Vec<V>,
    /// Graph-level payload.
    info: G,
    /// Total number of entries across all adjacency sequences.
    edge_count: usize,
}

impl<E, V, G> DirectedGraph<E, V, G> {
    /// Create an empty graph carrying `info`.
    pub fn new(info: G) -> Self {
        Self {
            adjacency: Vec::new(),
            vertices: Vec::new(),
            info,
            edge_count: 0,
        }
    }

    /// Create a graph whose vertices carry the given payloads, in order.
    pub fn from_vertices(vertices: impl IntoIterator<Item = V>, info: G) -> Self {
        let vertices: Vec<V> = vertices.into_iter().collect();
        let adjacency = std::iter::repeat_with(Vec::new)
            .take(vertices.len())
            .collect();
        Self {
            adjacency,
            vertices,
            info,
            edge_count: 0,
        }
    }

    /// Number of vertices.
    pub fn vertex_num(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges, counting parallel edges separately.
    pub fn edge_num(&self) -> usize {
        self.edge_count
    }

    /// Whether `id` names a vertex.
    pub fn contains_vertex(&self, id: VertexId) -> bool {
        id < self.vertices.len()
    }

    /// Graph-level payload.
    pub fn graph_info(&self) -> &G {
        &self.info
    }

    /// Graph-level payload (mutable).
    pub fn graph_info_mut(&mut self) -> &mut G {
        &mut self.info
    }

    /// All vertex payloads, indexed by id.
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    /// Outgoing edges of `id` in stored order.
    pub fn neighbors(&self, id: VertexId) -> Option<&[(VertexId, E)]> {
        self.adjacency.get(id).map(Vec::as_slice)
    }

    /// Append a vertex and return its id.
    pub fn add_vertex(&mut self, info: V) -> VertexId {
        let id = self.vertices.len();
        self.vertices.push(info);
        self.adjacency.push(Vec::new());
        log::trace!("added vertex {}", id);
        id
    }

    /// Remove a vertex together with every edge entering or leaving it.
    ///
    /// Every vertex with a higher id is relabeled to `id - 1`, and all
    /// adjacency entries are rewritten to match. Runs in O(V + E).
    pub fn remove_vertex(&mut self, id: VertexId) -> GraphResult<V> {
        self.check_vertex(id)?;

        let outgoing = self.adjacency.remove(id);
        let removed = self.vertices.remove(id);
        let mut dropped = outgoing.len();

        for seq in &mut self.adjacency {
            let before = seq.len();
            seq.retain(|(target, _)| *target != id);
            dropped += before - seq.len();
            for (target, _) in seq.iter_mut() {
                if *target > id {
                    *target -= 1;
                }
            }
        }

        self.edge_count -= dropped;
        log::trace!("removed vertex {} and {} incident edges", id, dropped);
        Ok(removed)
    }

    /// Append a `source -> target` edge. Parallel edges are kept.
    pub fn add_edge(&mut self, source: VertexId, target: VertexId, info: E) -> GraphResult<()> {
        self.check_vertex(source)?;
        self.check_vertex(target)?;

        self.adjacency[source].push((target, info));
        self.edge_count += 1;
        log::trace!("added edge {} -> {}", source, target);
        Ok(())
    }

    /// Remove the first `source -> target` edge and return its payload.
    pub fn remove_edge(&mut self, source: VertexId, target: VertexId) -> GraphResult<E> {
        let pos = self.edge_position(source, target)?;
        let (_, info) = self.adjacency[source].remove(pos);
        self.edge_count -= 1;
        log::trace!("removed edge {} -> {}", source, target);
        Ok(info)
    }

    /// Payload of vertex `id`.
    pub fn get_vertex(&self, id: VertexId) -> Option<&V> {
        self.vertices.get(id)
    }

    /// Payload of vertex `id` (mutable).
    pub fn vertex_mut(&mut self, id: VertexId) -> Option<&mut V> {
        self.vertices.get_mut(id)
    }

    /// Overwrite the payload of vertex `id`, returning the previous one.
    pub fn put_vertex(&mut self, id: VertexId, info: V) -> GraphResult<V> {
        self.check_vertex(id)?;
        Ok(std::mem::replace(&mut self.vertices[id], info))
    }

    /// Payload of the first `source -> target` edge.
    pub fn get_edge(&self, source: VertexId, target: VertexId) -> Option<&E> {
        if !self.contains_vertex(target) {
            return None;
        }
        self.adjacency
            .get(source)?
            .iter()
            .find(|(t, _)| *t == target)
            .map(|(_, info)| info)
    }

    /// Overwrite the payload of the first `source -> target` edge.
    ///
    /// Never creates an edge; returns the previous payload.
    pub fn put_edge(&mut self, source: VertexId, target: VertexId, info: E) -> GraphResult<E> {
        let pos = self.edge_position(source, target)?;
        Ok(std::mem::replace(&mut self.adjacency[source][pos].1, info))
    }

    fn check_vertex(&self, id: VertexId) -> GraphResult<()> {
        if self.contains_vertex(id) {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfRange {
                id,
                vertex_count: self.vertices.len(),
            })
        }
    }

    /// Index of the first `source -> target` entry in `source`'s sequence.
    fn edge_position(&self, source: VertexId, target: VertexId) -> GraphResult<usize> {
        self.check_vertex(source)?;
        self.check_vertex(target)?;
        self.adjacency[source]
            .iter()
            .position(|(t, _)| *t == target)
            .ok_or(GraphError::NoSuchEdge {
                from: source,
                to: target,
            })
    }
}

impl<E: Clone, V, G> DirectedGraph<E, V, G> {
    /// Snapshot of the adjacency structure. Changes to the copy never reach
    /// the graph.
    pub fn data(&self) -> AdjacencyData<E> {
        self.adjacency.clone()
    }

    /// Snapshot of one vertex's outgoing edges.
    pub fn adjacency_of(&self, id: VertexId) -> Option<AdjacencySeq<E>> {
        self.adjacency.get(id).cloned()
    }
}

impl<E, V: Default, G> DirectedGraph<E, V, G> {
    /// Create a graph with `vertex_count` default-payload vertices and no edges.
    pub fn with_vertices(vertex_count: usize, info: G) -> Self {
        Self::from_vertices(std::iter::repeat_with(V::default).take(vertex_count), info)
    }
}

impl<E, V: Clone + Default, G> DirectedGraph<E, V, G> {
    /// `(found, payload)` for vertex `id`, with a default payload when absent.
    pub fn vertex_or_default(&self, id: VertexId) -> (bool, V) {
        match self.get_vertex(id) {
            Some(info) => (true, info.clone()),
            None => (false, V::default()),
        }
    }
}

impl<E: Clone + Default, V, G> DirectedGraph<E, V, G> {
    /// `(found, payload)` for the first `source -> target` edge, with a
    /// default payload when absent.
    pub fn edge_or_default(&self, source: VertexId, target: VertexId) -> (bool, E) {
        match self.get_edge(source, target) {
            Some(info) => (true, info.clone()),
            None => (false, E::default()),
        }
    }
}

impl<E, V, G: Default> Default for DirectedGraph<E, V, G> {
    fn default() -> Self {
        Self::new(G::default())
    }
}
