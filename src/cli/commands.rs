//! CLI command implementations.
//!
//! Each command is a full round over the graph file: read it, act on
//! the in-memory graph, and (for mutations) write it back.

use std::path::Path;

use crate::format::{render_to_file, DotReader, DotWriter};
use crate::graph::{search, Algorithm, DotGraph};
use crate::types::GraphResult;

/// Create a new empty graph file.
pub fn cmd_new(path: &Path) -> GraphResult<()> {
    let graph = DotGraph::new();
    DotWriter::write_to_file(&graph, path)?;
    println!("Created {}", path.display());
    Ok(())
}

/// Display information about a graph file.
pub fn cmd_info(path: &Path, json: bool) -> GraphResult<()> {
    let graph = DotReader::read_from_file(path)?;

    if json {
        let info = serde_json::json!({
            "file": path.display().to_string(),
            "nodes": graph.node_count(),
            "edges": graph.edge_count(),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("File: {}", path.display());
        println!("Nodes: {}", graph.node_count());
        println!("Edges: {}", graph.edge_count());
    }
    Ok(())
}

/// List all node labels.
pub fn cmd_nodes(path: &Path, json: bool) -> GraphResult<()> {
    let graph = DotReader::read_from_file(path)?;
    let mut labels: Vec<&str> = graph.nodes().collect();
    labels.sort_unstable();

    if json {
        println!(
            "{}",
            serde_json::to_string(&labels).unwrap_or_default()
        );
    } else {
        for label in labels {
            println!("{}", label);
        }
    }
    Ok(())
}

/// List edges, optionally restricted to one source node.
pub fn cmd_edges(path: &Path, node: Option<&str>, json: bool) -> GraphResult<()> {
    let graph = DotReader::read_from_file(path)?;
    let edges: Vec<(&str, &str)> = match node {
        Some(label) => graph
            .edges_from(label)
            .iter()
            .map(|target| (label, target.as_str()))
            .collect(),
        None => {
            let mut all: Vec<(&str, &str)> = graph.edges().collect();
            all.sort_unstable();
            all
        }
    };

    if json {
        println!(
            "{}",
            serde_json::to_string(&edges).unwrap_or_default()
        );
    } else {
        for (source, target) in edges {
            println!("{} -> {}", source, target);
        }
    }
    Ok(())
}

/// Add one or more nodes.
pub fn cmd_add_node(path: &Path, labels: &[String], json: bool) -> GraphResult<()> {
    let mut graph = DotReader::read_from_file(path)?;
    graph.add_nodes(labels.iter().cloned());
    DotWriter::write_to_file(&graph, path)?;

    if json {
        println!("{}", serde_json::json!({"added": labels}));
    } else {
        println!("Added {} node(s) to {}", labels.len(), path.display());
    }
    Ok(())
}

/// Add an edge, creating either endpoint if missing.
pub fn cmd_add_edge(path: &Path, source: &str, target: &str, json: bool) -> GraphResult<()> {
    let mut graph = DotReader::read_from_file(path)?;
    graph.add_edge(source, target);
    DotWriter::write_to_file(&graph, path)?;

    if json {
        println!(
            "{}",
            serde_json::json!({"source": source, "target": target})
        );
    } else {
        println!("Added edge {} -> {}", source, target);
    }
    Ok(())
}

/// Remove one or more nodes and all their incident edges.
/// Fails on the first unknown label; the file is only written back on
/// full success.
pub fn cmd_remove_node(path: &Path, labels: &[String], json: bool) -> GraphResult<()> {
    let mut graph = DotReader::read_from_file(path)?;
    graph.remove_nodes(labels.iter().map(String::as_str))?;
    DotWriter::write_to_file(&graph, path)?;

    if json {
        println!("{}", serde_json::json!({"removed": labels}));
    } else {
        println!("Removed {} node(s) from {}", labels.len(), path.display());
    }
    Ok(())
}

/// Remove an edge.
pub fn cmd_remove_edge(path: &Path, source: &str, target: &str, json: bool) -> GraphResult<()> {
    let mut graph = DotReader::read_from_file(path)?;
    graph.remove_edge(source, target)?;
    DotWriter::write_to_file(&graph, path)?;

    if json {
        println!(
            "{}",
            serde_json::json!({"source": source, "target": target})
        );
    } else {
        println!("Removed edge {} -> {}", source, target);
    }
    Ok(())
}

/// Search for a path between two nodes. "No path" is a normal outcome,
/// not an error.
pub fn cmd_path(
    path: &Path,
    source: &str,
    target: &str,
    algorithm: Algorithm,
    json: bool,
) -> GraphResult<()> {
    let graph = DotReader::read_from_file(path)?;

    match search(&graph, source, target, algorithm) {
        Some(found) => {
            if json {
                println!(
                    "{}",
                    serde_json::json!({
                        "found": true,
                        "algorithm": algorithm.name(),
                        "path": found.nodes(),
                        "edges": found.edge_count(),
                    })
                );
            } else {
                println!("{}", found);
            }
        }
        None => {
            if json {
                println!("{}", serde_json::json!({"found": false}));
            } else {
                println!("No path from {} to {}", source, target);
            }
        }
    }
    Ok(())
}

/// Render the graph to an image via Graphviz.
pub fn cmd_render(path: &Path, output: &Path, format: &str) -> GraphResult<()> {
    let graph = DotReader::read_from_file(path)?;
    render_to_file(&graph, output, format)?;
    println!("Rendered {} to {}", path.display(), output.display());
    Ok(())
}
