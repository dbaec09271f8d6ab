//! CLI entry point for the `adjg` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use adjgraph::cli::commands;
use adjgraph::graph::{NeighborScan, TraversalOrder};
use adjgraph::GraphError;

#[derive(Parser)]
#[command(
    name = "adjg",
    about = "adjg — build undirected graphs and run DFS/BFS over them"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the built-in nine-vertex sample graph to a file
    Sample {
        /// Path to the graph file to write
        file: PathBuf,
    },
    /// Create a new empty graph file
    Create {
        /// Path to the graph file to create
        file: PathBuf,
    },
    /// Add a vertex to a graph file
    AddVertex {
        /// Path to the graph file
        file: PathBuf,
        /// Vertex label
        label: String,
    },
    /// Add an undirected edge to a graph file
    AddEdge {
        /// Path to the graph file
        file: PathBuf,
        /// First endpoint ID
        from: usize,
        /// Second endpoint ID
        to: usize,
    },
    /// Show vertex and edge lists
    Info {
        /// Graph file (defaults to the sample graph)
        #[arg(long)]
        graph: Option<PathBuf>,
    },
    /// Look up the weight of an edge
    Weight {
        /// Graph file (defaults to the sample graph)
        #[arg(long)]
        graph: Option<PathBuf>,
        /// Row vertex ID
        i: usize,
        /// Column vertex ID
        j: usize,
    },
    /// Depth-first traversal from a vertex
    Dfs {
        /// Graph file (defaults to the sample graph)
        #[arg(long)]
        graph: Option<PathBuf>,
        /// Starting vertex ID
        start: usize,
        /// Neighbor scan: forward or all
        #[arg(long, default_value = "forward")]
        scan: String,
    },
    /// Breadth-first traversal from a vertex
    Bfs {
        /// Graph file (defaults to the sample graph)
        #[arg(long)]
        graph: Option<PathBuf>,
        /// Starting vertex ID
        start: usize,
        /// Neighbor scan: forward or all
        #[arg(long, default_value = "forward")]
        scan: String,
    },
    /// Print the graph as a JSON description
    Export {
        /// Graph file (defaults to the sample graph)
        #[arg(long)]
        graph: Option<PathBuf>,
        /// Pretty-print JSON
        #[arg(long)]
        pretty: bool,
    },
}

fn parse_scan(scan: &str) -> NeighborScan {
    match NeighborScan::from_name(scan) {
        Some(scan) => scan,
        None => {
            eprintln!("Invalid scan mode: {}", scan);
            process::exit(3);
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    if cli.verbose {
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::init();
    }

    let result = match cli.command {
        Commands::Sample { file } => commands::cmd_sample(&file),
        Commands::Create { file } => commands::cmd_create(&file),
        Commands::AddVertex { file, label } => commands::cmd_add_vertex(&file, &label, json),
        Commands::AddEdge { file, from, to } => commands::cmd_add_edge(&file, from, to, json),
        Commands::Info { graph } => commands::cmd_info(graph.as_deref(), json),
        Commands::Weight { graph, i, j } => commands::cmd_weight(graph.as_deref(), i, j, json),
        Commands::Dfs { graph, start, scan } => commands::cmd_traverse(
            graph.as_deref(),
            start,
            TraversalOrder::DepthFirst,
            parse_scan(&scan),
            json,
        ),
        Commands::Bfs { graph, start, scan } => commands::cmd_traverse(
            graph.as_deref(),
            start,
            TraversalOrder::BreadthFirst,
            parse_scan(&scan),
            json,
        ),
        Commands::Export { graph, pretty } => commands::cmd_export(graph.as_deref(), pretty),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::Io(_) => 1,
            GraphError::Json(_) => 2,
            GraphError::InvalidVertexId(_) | GraphError::InvalidEdge { .. } => 4,
        };
        process::exit(code);
    }
}
