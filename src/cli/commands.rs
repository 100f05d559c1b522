//! CLI command implementations.

use serde::Serialize;

use crate::graph::{DirectedGraph, OrderRecorder};
use crate::types::{DefaultGraphInfo, DefaultVertexInfo, GraphError, GraphResult, VertexId};

/// Graph assembled from command-line flags; edges carry their label.
pub type CliGraph = DirectedGraph<String, DefaultVertexInfo, DefaultGraphInfo>;

/// Which traversal a command runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TraversalKind {
    Bfs,
    Dfs,
}

impl TraversalKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bfs => "bfs",
            Self::Dfs => "dfs",
        }
    }
}

/// Counts and adjacency of a graph, as printed by `info`.
#[derive(Debug, Clone, Serialize)]
pub struct GraphSummary {
    pub vertices: usize,
    pub edges: usize,
    pub adjacency: Vec<Vec<VertexId>>,
}

/// Result of a traversal, as printed by `bfs` / `dfs`.
#[derive(Debug, Clone, Serialize)]
pub struct TraversalReport {
    pub kind: TraversalKind,
    /// `None` for a whole-graph traversal.
    pub start: Option<VertexId>,
    pub discovered: Vec<VertexId>,
    pub finished: Vec<VertexId>,
    pub examined_edges: usize,
}

/// Parse an `S:T` or `S:T:LABEL` edge argument.
pub fn parse_edge_spec(spec: &str) -> GraphResult<(VertexId, VertexId, String)> {
    let mut parts = spec.splitn(3, ':');
    let mut endpoint = || -> GraphResult<VertexId> {
        parts
            .next()
            .map(str::trim)
            .and_then(|s| s.parse().ok())
            .ok_or_else(|| GraphError::InvalidEdgeSpec(spec.to_string()))
    };
    let source = endpoint()?;
    let target = endpoint()?;
    let label = parts.next().unwrap_or_default().to_string();
    Ok((source, target, label))
}

/// Build a graph of `vertices` vertices from edge arguments, in order.
pub fn build_graph(vertices: usize, edges: &[String]) -> GraphResult<CliGraph> {
    let mut graph = CliGraph::with_vertices(vertices, DefaultGraphInfo);
    for spec in edges {
        let (source, target, label) = parse_edge_spec(spec)?;
        graph.add_edge(source, target, label)?;
    }
    log::debug!(
        "built graph with {} vertices and {} edges",
        graph.vertex_num(),
        graph.edge_num()
    );
    Ok(graph)
}

/// Summarize a graph.
pub fn summarize(graph: &CliGraph) -> GraphSummary {
    let adjacency = (0..graph.vertex_num())
        .map(|id| {
            graph
                .neighbors(id)
                .unwrap_or_default()
                .iter()
                .map(|(target, _)| *target)
                .collect()
        })
        .collect();
    GraphSummary {
        vertices: graph.vertex_num(),
        edges: graph.edge_num(),
        adjacency,
    }
}

/// Run a traversal and collect its visit order.
///
/// `limit` caps the number of discovered vertices; exceeding it aborts the
/// traversal with [`GraphError::VisitorAbort`].
pub fn run_traversal(
    graph: &CliGraph,
    kind: TraversalKind,
    start: Option<VertexId>,
    limit: Option<usize>,
) -> GraphResult<TraversalReport> {
    let mut recorder = match limit {
        Some(limit) => OrderRecorder::with_discover_limit(limit),
        None => OrderRecorder::new(),
    };

    match (kind, start) {
        (TraversalKind::Bfs, None) => graph.breadth_first_traverse(&mut recorder)?,
        (TraversalKind::Bfs, Some(s)) => graph.breadth_first_search(s, &mut recorder)?,
        (TraversalKind::Dfs, None) => graph.depth_first_traverse(&mut recorder)?,
        (TraversalKind::Dfs, Some(s)) => graph.depth_first_search(s, &mut recorder)?,
    }

    Ok(TraversalReport {
        kind,
        start,
        discovered: recorder.discovered,
        finished: recorder.finished,
        examined_edges: recorder.examined.len(),
    })
}

fn join_ids(ids: &[VertexId]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Print vertex and edge counts plus every adjacency sequence.
pub fn cmd_info(graph: &CliGraph, json: bool) -> GraphResult<()> {
    let summary = summarize(graph);
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&summary).unwrap_or_default()
        );
    } else {
        println!("Vertices: {}", summary.vertices);
        println!("Edges: {}", summary.edges);
        for (id, targets) in summary.adjacency.iter().enumerate() {
            println!("  {} -> [{}]", id, join_ids(targets));
        }
    }
    Ok(())
}

/// Print the outgoing edges of one vertex.
pub fn cmd_neighbors(graph: &CliGraph, vertex: VertexId, json: bool) -> GraphResult<()> {
    let edges = graph
        .neighbors(vertex)
        .ok_or(GraphError::VertexOutOfRange {
            id: vertex,
            vertex_count: graph.vertex_num(),
        })?;

    if json {
        let out: Vec<serde_json::Value> = edges
            .iter()
            .map(|(target, label)| serde_json::json!({"target": target, "label": label}))
            .collect();
        println!("{}", serde_json::to_string_pretty(&out).unwrap_or_default());
    } else {
        for (target, label) in edges {
            if label.is_empty() {
                println!("{} -> {}", vertex, target);
            } else {
                println!("{} -> {} ({})", vertex, target, label);
            }
        }
    }
    Ok(())
}

/// Run a traversal and print its discovery and finish orders.
pub fn cmd_traverse(
    graph: &CliGraph,
    kind: TraversalKind,
    start: Option<VertexId>,
    limit: Option<usize>,
    json: bool,
) -> GraphResult<()> {
    let report = run_traversal(graph, kind, start, limit)?;
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).unwrap_or_default()
        );
    } else {
        match report.start {
            Some(s) => println!("{} from vertex {}", kind.name(), s),
            None => println!("{} over whole graph", kind.name()),
        }
        println!("Discovered: {}", join_ids(&report.discovered));
        println!("Finished: {}", join_ids(&report.finished));
        println!("Edges examined: {}", report.examined_edges);
    }
    Ok(())
}
