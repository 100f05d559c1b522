//! CLI entry point for the `adjg` command-line tool.

use std::process;

use clap::{Args, Parser, Subcommand};

use adjacency_graph::cli::commands::{self, TraversalKind};
use adjacency_graph::GraphError;

#[derive(Parser)]
#[command(
    name = "adjg",
    about = "Build a directed graph from flags and walk it breadth- or depth-first"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text", global = true)]
    format: String,

    /// Enable debug logging
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct GraphArgs {
    /// Number of vertices (ids 0..N)
    #[arg(long, default_value = "0")]
    vertices: usize,
    /// Edge as SOURCE:TARGET or SOURCE:TARGET:LABEL (repeatable)
    #[arg(long = "edge")]
    edges: Vec<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show vertex/edge counts and adjacency sequences
    Info {
        #[command(flatten)]
        graph: GraphArgs,
    },
    /// List outgoing edges of a vertex
    Neighbors {
        /// Vertex ID
        vertex: usize,
        #[command(flatten)]
        graph: GraphArgs,
    },
    /// Breadth-first traversal (whole graph unless --start is given)
    Bfs {
        /// Start vertex for a single-source search
        #[arg(long)]
        start: Option<usize>,
        /// Abort after discovering this many vertices
        #[arg(long)]
        limit: Option<usize>,
        #[command(flatten)]
        graph: GraphArgs,
    },
    /// Depth-first traversal (whole graph unless --start is given)
    Dfs {
        /// Start vertex for a single-source search
        #[arg(long)]
        start: Option<usize>,
        /// Abort after discovering this many vertices
        #[arg(long)]
        limit: Option<usize>,
        #[command(flatten)]
        graph: GraphArgs,
    },
}

fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Info { graph } => commands::build_graph(graph.vertices, &graph.edges)
            .and_then(|g| commands::cmd_info(&g, json)),
        Commands::Neighbors { vertex, graph } => {
            commands::build_graph(graph.vertices, &graph.edges)
                .and_then(|g| commands::cmd_neighbors(&g, vertex, json))
        }
        Commands::Bfs {
            start,
            limit,
            graph,
        } => commands::build_graph(graph.vertices, &graph.edges)
            .and_then(|g| commands::cmd_traverse(&g, TraversalKind::Bfs, start, limit, json)),
        Commands::Dfs {
            start,
            limit,
            graph,
        } => commands::build_graph(graph.vertices, &graph.edges)
            .and_then(|g| commands::cmd_traverse(&g, TraversalKind::Dfs, start, limit, json)),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::InvalidEdgeSpec(_) => 3,
            GraphError::VertexOutOfRange { .. } | GraphError::NoSuchEdge { .. } => 4,
            GraphError::VisitorAbort(_) => 5,
        };
        process::exit(code);
    }
}
