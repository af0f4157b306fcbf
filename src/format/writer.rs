//! Writes graphs out as DOT-style graph description files.

use std::collections::HashSet;
use std::io::Write;
use std::path::Path;

use crate::graph::DotGraph;
use crate::types::error::GraphResult;

/// Writer for the line-oriented DOT subset.
pub struct DotWriter;

impl DotWriter {
    /// Write a graph description file.
    pub fn write_to_file(graph: &DotGraph, path: &Path) -> GraphResult<()> {
        let file = std::fs::File::create(path)?;
        let mut writer = std::io::BufWriter::new(file);
        Self::write_to(graph, &mut writer)
    }

    /// Write to any writer.
    ///
    /// Sources are emitted in sorted order so identical graphs always
    /// produce identical bytes; destinations keep their adjacency
    /// order. Isolated nodes get a standalone `[label=...]` declaration
    /// so a round-trip through the reader reproduces the full node set,
    /// not just the nodes touched by edges.
    pub fn write_to(graph: &DotGraph, writer: &mut impl Write) -> GraphResult<()> {
        writeln!(writer, "digraph G {{")?;

        let mut sources: Vec<&str> = graph.nodes().collect();
        sources.sort_unstable();

        let has_incoming: HashSet<&str> = graph.edges().map(|(_, target)| target).collect();
        for label in &sources {
            if graph.edges_from(label).is_empty() && !has_incoming.contains(label) {
                writeln!(writer, "    {label} [label=\"{label}\"];")?;
            }
        }

        for source in &sources {
            for target in graph.edges_from(source) {
                writeln!(writer, "    {source} -> {target};")?;
            }
        }

        writeln!(writer, "}}")?;
        Ok(())
    }
}
