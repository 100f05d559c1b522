//! Default payload types for vertices, edges and the graph itself.
//!
//! The container never looks inside its payloads; it only needs them to be
//! `Clone` (and `Default` where a default-filled slot is created).

/// Payload attached to a vertex when the caller supplies none.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DefaultVertexInfo;

/// Payload attached to an edge when the caller supplies none.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DefaultEdgeInfo;

/// Graph-level payload when the caller supplies none.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DefaultGraphInfo;
