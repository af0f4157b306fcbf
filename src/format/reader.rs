//! Reads DOT-style graph description files into an in-memory graph.

use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::graph::DotGraph;
use crate::types::error::GraphResult;

/// Reader for the line-oriented DOT subset.
pub struct DotReader;

impl DotReader {
    /// Read a graph description file into a DotGraph.
    pub fn read_from_file(path: &Path) -> GraphResult<DotGraph> {
        let file = std::fs::File::open(path)?;
        Self::read_from(BufReader::new(file))
    }

    /// Read from any buffered reader into a DotGraph.
    ///
    /// Two line shapes carry meaning: a line containing `->` declares
    /// an edge (text before the marker is the source, text after it is
    /// the destination, with one trailing `;` stripped), and a line
    /// containing `[label=` declares a standalone node (text before the
    /// bracket is the label). Every other line — the `digraph G {`
    /// wrapper, the closing brace, anything else — is ignored.
    pub fn read_from(reader: impl BufRead) -> GraphResult<DotGraph> {
        let mut graph = DotGraph::new();
        for line in reader.lines() {
            let line = line?;
            if let Some((source, target)) = line.split_once("->") {
                let source = source.trim();
                let target = target.trim().trim_end_matches(';').trim();
                graph.add_edge(source, target);
            } else if line.contains("[label=") {
                if let Some((label, _)) = line.split_once('[') {
                    graph.add_node(label.trim());
                }
            }
        }
        log::debug!(
            "parsed graph: {} nodes, {} edges",
            graph.node_count(),
            graph.edge_count()
        );
        Ok(graph)
    }
}
