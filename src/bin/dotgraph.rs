//! CLI entry point for the `dotgraph` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use dotgraph::cli::commands;
use dotgraph::graph::Algorithm;

#[derive(Parser)]
#[command(
    name = "dotgraph",
    about = "dotgraph CLI — directed graphs with DOT import/export and path search"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new empty graph file
    New {
        /// Path to the graph file to create
        file: PathBuf,
    },
    /// Display information about a graph file
    Info {
        /// Path to the graph file
        file: PathBuf,
    },
    /// List all node labels
    Nodes {
        /// Path to the graph file
        file: PathBuf,
    },
    /// List edges, optionally restricted to one source node
    Edges {
        /// Path to the graph file
        file: PathBuf,
        /// Only list outgoing edges of this node
        #[arg(long)]
        node: Option<String>,
    },
    /// Add one or more nodes
    AddNode {
        /// Path to the graph file
        file: PathBuf,
        /// Node labels to add
        #[arg(required = true)]
        labels: Vec<String>,
    },
    /// Add an edge, creating either endpoint if missing
    AddEdge {
        /// Path to the graph file
        file: PathBuf,
        /// Source node label
        source: String,
        /// Destination node label
        target: String,
    },
    /// Remove one or more nodes and all their incident edges
    RemoveNode {
        /// Path to the graph file
        file: PathBuf,
        /// Node labels to remove
        #[arg(required = true)]
        labels: Vec<String>,
    },
    /// Remove an edge
    RemoveEdge {
        /// Path to the graph file
        file: PathBuf,
        /// Source node label
        source: String,
        /// Destination node label
        target: String,
    },
    /// Search for a path between two nodes
    Path {
        /// Path to the graph file
        file: PathBuf,
        /// Source node label
        source: String,
        /// Destination node label
        target: String,
        /// Search algorithm: bfs or dfs
        #[arg(long, default_value = "bfs")]
        algorithm: String,
    },
    /// Render the graph to an image via Graphviz
    Render {
        /// Path to the graph file
        file: PathBuf,
        /// Path of the image to produce
        output: PathBuf,
        /// Renderer output format (png, svg, ...)
        #[arg(long, default_value = "png")]
        image_format: String,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let result = match cli.command {
        Commands::New { file } => commands::cmd_new(&file),
        Commands::Info { file } => commands::cmd_info(&file, json),
        Commands::Nodes { file } => commands::cmd_nodes(&file, json),
        Commands::Edges { file, node } => commands::cmd_edges(&file, node.as_deref(), json),
        Commands::AddNode { file, labels } => commands::cmd_add_node(&file, &labels, json),
        Commands::AddEdge {
            file,
            source,
            target,
        } => commands::cmd_add_edge(&file, &source, &target, json),
        Commands::RemoveNode { file, labels } => commands::cmd_remove_node(&file, &labels, json),
        Commands::RemoveEdge {
            file,
            source,
            target,
        } => commands::cmd_remove_edge(&file, &source, &target, json),
        Commands::Path {
            file,
            source,
            target,
            algorithm,
        } => {
            let algo = match Algorithm::from_name(&algorithm) {
                Some(algo) => algo,
                None => {
                    eprintln!("Invalid algorithm: {}", algorithm);
                    process::exit(3);
                }
            };
            commands::cmd_path(&file, &source, &target, algo, json)
        }
        Commands::Render {
            file,
            output,
            image_format,
        } => commands::cmd_render(&file, &output, &image_format),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            dotgraph::GraphError::Io(_) => 1,
            dotgraph::GraphError::RenderFailed(_) => 2,
            dotgraph::GraphError::NodeNotFound(_) | dotgraph::GraphError::EdgeNotFound { .. } => 4,
        };
        process::exit(code);
    }
}
