//! Renders graphs to image files via the external Graphviz `dot` tool.

use std::path::Path;
use std::process::Command;

use tempfile::NamedTempFile;

use crate::graph::DotGraph;
use crate::types::error::{GraphError, GraphResult};

use super::writer::DotWriter;

/// Render a graph to an image file.
///
/// `format` is handed to the renderer as its `-T` output format (e.g.
/// "png", "svg"). The graph is first written to a temporary DOT file,
/// then `dot` is invoked on it and awaited. A missing executable
/// surfaces as an IO error; a non-zero exit as [`GraphError::RenderFailed`].
pub fn render_to_file(graph: &DotGraph, output: &Path, format: &str) -> GraphResult<()> {
    let dot_file = NamedTempFile::new()?;
    DotWriter::write_to_file(graph, dot_file.path())?;

    let status = Command::new("dot")
        .arg(format!("-T{format}"))
        .arg(dot_file.path())
        .arg("-o")
        .arg(output)
        .status()?;

    if !status.success() {
        return Err(GraphError::RenderFailed(status));
    }
    log::debug!("rendered {} as {}", output.display(), format);
    Ok(())
}
