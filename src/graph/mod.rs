//! In-memory directed graph and its traversal engine.

pub mod adjacency_list;
pub mod builder;
pub mod traversal;
pub mod visited;
pub mod visitor;

pub use adjacency_list::DirectedGraph;
pub use builder::GraphBuilder;
pub use visited::{VisitState, VisitStates, VisitedSet};
pub use visitor::{BfsVisitor, DfsVisitor, OrderRecorder};
