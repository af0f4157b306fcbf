//! Path results produced by graph searches.

use std::fmt;

use serde::Serialize;

/// An ordered sequence of node labels from a search source to its
/// destination, both endpoints included, with no repeated label.
///
/// A path always holds at least one label: a search whose source equals
/// its destination yields the single-element path `[source]`, and "no
/// path" is represented by the absence of a `NodePath`, never by an
/// empty one. Labels are copied out of the graph, so the graph may be
/// mutated freely after a search without invalidating its result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodePath {
    nodes: Vec<String>,
}

impl NodePath {
    /// The labels along the path, source first.
    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    /// Number of nodes on the path.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the path holds no labels. Searches never produce an
    /// empty path.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of edges traversed (one less than the node count).
    pub fn edge_count(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }
}

impl From<Vec<String>> for NodePath {
    fn from(nodes: Vec<String>) -> Self {
        Self { nodes }
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.nodes.join(" -> "))
    }
}
