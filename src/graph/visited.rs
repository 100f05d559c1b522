//! Per-traversal visitation markers.
//!
//! Each traversal call owns one marker buffer sized to the vertex count.
//! The buffer is dropped on every exit path, aborts included.

use crate::types::VertexId;

/// Depth-first state of a single vertex.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VisitState {
    /// Never touched.
    #[default]
    Unvisited,
    /// Entered, outgoing edges still being explored.
    InProgress,
    /// All outgoing edges explored.
    Finished,
}

/// Boolean visited flags for breadth-first traversal.
#[derive(Debug, Clone)]
pub struct VisitedSet {
    flags: Vec<bool>,
}

impl VisitedSet {
    /// Create flags for `vertex_count` vertices, all unvisited.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            flags: vec![false; vertex_count],
        }
    }

    /// Mark `vertex` visited. Returns `true` only the first time.
    pub fn visit(&mut self, vertex: VertexId) -> bool {
        match self.flags.get_mut(vertex) {
            Some(flag) if !*flag => {
                *flag = true;
                true
            }
            _ => false,
        }
    }

    /// Whether `vertex` has been marked. Out-of-range ids never are.
    pub fn is_visited(&self, vertex: VertexId) -> bool {
        self.flags.get(vertex).copied().unwrap_or(false)
    }
}

/// Three-valued marks for depth-first traversal.
#[derive(Debug, Clone)]
pub struct VisitStates {
    states: Vec<VisitState>,
}

impl VisitStates {
    /// Create states for `vertex_count` vertices, all `Unvisited`.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            states: vec![VisitState::Unvisited; vertex_count],
        }
    }

    /// Current state of `vertex`; `Unvisited` for out-of-range ids.
    pub fn state(&self, vertex: VertexId) -> VisitState {
        self.states.get(vertex).copied().unwrap_or_default()
    }

    /// Move `vertex` to `state`. Only forward transitions are legal.
    pub fn set(&mut self, vertex: VertexId, state: VisitState) {
        if let Some(slot) = self.states.get_mut(vertex) {
            debug_assert!(
                matches!(
                    (*slot, state),
                    (VisitState::Unvisited, VisitState::InProgress)
                        | (VisitState::InProgress, VisitState::Finished)
                ),
                "illegal transition {:?} -> {:?} for vertex {}",
                slot,
                state,
                vertex
            );
            *slot = state;
        }
    }
}
