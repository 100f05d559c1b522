//! Breadth-first and depth-first traversal driven by visitors.
//!
//! Traversals borrow the graph immutably, so a visitor cannot change the
//! adjacency sequences being walked. Neighbors are explored in stored order,
//! which makes the visit order deterministic.

use std::collections::VecDeque;

use crate::types::{GraphError, GraphResult, VertexId};

use super::visited::{VisitState, VisitStates, VisitedSet};
use super::visitor::{BfsVisitor, DfsVisitor};
use super::DirectedGraph;

fn aborted(kind: &str, vertex: VertexId) -> GraphError {
    log::debug!("{} aborted by visitor at vertex {}", kind, vertex);
    GraphError::VisitorAbort(vertex)
}

impl<E, V, G> DirectedGraph<E, V, G> {
    /// Breadth-first walk over the whole graph.
    ///
    /// Calls `initialize_vertex` for every id in ascending order first, then
    /// starts a search from each still-unvisited id in ascending order, so
    /// every vertex is discovered exactly once.
    pub fn breadth_first_traverse<B>(&self, visitor: &mut B) -> GraphResult<()>
    where
        B: BfsVisitor<E, V, G>,
    {
        log::debug!("bfs traverse over {} vertices", self.vertex_num());
        for id in 0..self.vertex_num() {
            if !visitor.initialize_vertex(id, self) {
                return Err(aborted("bfs", id));
            }
        }

        let mut visited = VisitedSet::new(self.vertex_num());
        for id in 0..self.vertex_num() {
            if !visited.is_visited(id) {
                self.bfs_from(id, &mut visited, visitor)?;
            }
        }
        log::debug!("bfs traverse complete");
        Ok(())
    }

    /// Breadth-first search from `start` only.
    ///
    /// Does not call `initialize_vertex`; callers that need it must run it
    /// themselves.
    pub fn breadth_first_search<B>(&self, start: VertexId, visitor: &mut B) -> GraphResult<()>
    where
        B: BfsVisitor<E, V, G>,
    {
        self.check_start(start)?;
        log::debug!("bfs search from vertex {}", start);
        let mut visited = VisitedSet::new(self.vertex_num());
        self.bfs_from(start, &mut visited, visitor)
    }

    /// Depth-first walk over the whole graph.
    ///
    /// Same rooting rules as [`breadth_first_traverse`](Self::breadth_first_traverse).
    pub fn depth_first_traverse<D>(&self, visitor: &mut D) -> GraphResult<()>
    where
        D: DfsVisitor<E, V, G>,
    {
        log::debug!("dfs traverse over {} vertices", self.vertex_num());
        for id in 0..self.vertex_num() {
            if !visitor.initialize_vertex(id, self) {
                return Err(aborted("dfs", id));
            }
        }

        let mut states = VisitStates::new(self.vertex_num());
        for id in 0..self.vertex_num() {
            if states.state(id) == VisitState::Unvisited {
                self.dfs_from(id, &mut states, visitor)?;
            }
        }
        log::debug!("dfs traverse complete");
        Ok(())
    }

    /// Depth-first search from `start` only. Does not call `initialize_vertex`.
    pub fn depth_first_search<D>(&self, start: VertexId, visitor: &mut D) -> GraphResult<()>
    where
        D: DfsVisitor<E, V, G>,
    {
        self.check_start(start)?;
        log::debug!("dfs search from vertex {}", start);
        let mut states = VisitStates::new(self.vertex_num());
        self.dfs_from(start, &mut states, visitor)
    }

    fn check_start(&self, start: VertexId) -> GraphResult<()> {
        if self.contains_vertex(start) {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfRange {
                id: start,
                vertex_count: self.vertex_num(),
            })
        }
    }

    /// Vertices are marked on enqueue so none is queued twice.
    fn bfs_from<B>(
        &self,
        start: VertexId,
        visited: &mut VisitedSet,
        visitor: &mut B,
    ) -> GraphResult<()>
    where
        B: BfsVisitor<E, V, G>,
    {
        let mut queue = VecDeque::new();
        visited.visit(start);
        queue.push_back(start);

        while let Some(vertex) = queue.pop_front() {
            if !visitor.discover_vertex(vertex, self) {
                return Err(aborted("bfs", vertex));
            }
            for (target, info) in self.neighbors(vertex).unwrap_or_default() {
                if !visitor.examine_edge(vertex, *target, info, self) {
                    return Err(aborted("bfs", vertex));
                }
                if visited.visit(*target) {
                    queue.push_back(*target);
                }
            }
            if !visitor.finish_vertex(vertex, self) {
                return Err(aborted("bfs", vertex));
            }
        }
        Ok(())
    }

    /// Iterative DFS. Each stack frame is a vertex and the index of the next
    /// outgoing edge to explore, which reproduces the recursive order.
    fn dfs_from<D>(
        &self,
        start: VertexId,
        states: &mut VisitStates,
        visitor: &mut D,
    ) -> GraphResult<()>
    where
        D: DfsVisitor<E, V, G>,
    {
        states.set(start, VisitState::InProgress);
        if !visitor.discover_vertex(start, self) {
            return Err(aborted("dfs", start));
        }
        let mut stack: Vec<(VertexId, usize)> = vec![(start, 0)];

        while let Some(frame) = stack.last_mut() {
            let vertex = frame.0;
            let next = self.neighbors(vertex).and_then(|edges| edges.get(frame.1));

            match next {
                Some((target, info)) => {
                    frame.1 += 1;
                    let target = *target;
                    if !visitor.examine_edge(vertex, target, info, self) {
                        return Err(aborted("dfs", vertex));
                    }
                    if states.state(target) == VisitState::Unvisited {
                        states.set(target, VisitState::InProgress);
                        if !visitor.discover_vertex(target, self) {
                            return Err(aborted("dfs", target));
                        }
                        stack.push((target, 0));
                    }
                }
                None => {
                    stack.pop();
                    states.set(vertex, VisitState::Finished);
                    if !visitor.finish_vertex(vertex, self) {
                        return Err(aborted("dfs", vertex));
                    }
                }
            }
        }
        Ok(())
    }
}
