//! Core graph structure — labeled nodes with ordered adjacency lists.

use std::collections::HashMap;

use crate::types::{GraphError, GraphResult};

/// The core in-memory directed graph, keyed by node label.
///
/// Every label that appears as an edge endpoint is also a node: adding
/// an edge implicitly creates both endpoints. Each adjacency list is
/// duplicate-free and keeps its destinations in insertion order, so
/// traversals and serialized output are deterministic for identical
/// input. The map is exclusively owned; nothing outside this type holds
/// references into the adjacency lists.
#[derive(Debug, Clone, Default)]
pub struct DotGraph {
    /// Outgoing edges, grouped by source label.
    adjacency: HashMap<String, Vec<String>>,
}

impl DotGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            adjacency: HashMap::new(),
        }
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Whether `label` is present as a node.
    pub fn contains_node(&self, label: &str) -> bool {
        self.adjacency.contains_key(label)
    }

    /// All node labels, in no particular order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(String::as_str)
    }

    /// Outgoing destinations for `label`, in insertion order.
    /// An unknown label yields an empty slice — absence and "no
    /// outgoing edges" are observably identical.
    pub fn edges_from(&self, label: &str) -> &[String] {
        self.adjacency.get(label).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All edges as `(source, target)` pairs, grouped by source.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> {
        self.adjacency.iter().flat_map(|(source, targets)| {
            targets
                .iter()
                .map(move |target| (source.as_str(), target.as_str()))
        })
    }

    /// Add a node. No-op if the label is already present.
    pub fn add_node(&mut self, label: impl Into<String>) {
        self.adjacency.entry(label.into()).or_default();
    }

    /// Add every label in `labels` as a node.
    pub fn add_nodes<I, S>(&mut self, labels: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for label in labels {
            self.add_node(label);
        }
    }

    /// Add a directed edge, creating either endpoint if missing.
    /// Re-adding an existing edge is a no-op; self-loops are allowed.
    pub fn add_edge(&mut self, source: impl Into<String>, target: impl Into<String>) {
        let source = source.into();
        let target = target.into();
        self.adjacency.entry(target.clone()).or_default();
        let targets = self.adjacency.entry(source).or_default();
        if !targets.contains(&target) {
            targets.push(target);
        }
    }

    /// Remove a node and every edge incident to it, outgoing and
    /// incoming. Other nodes keep their identities; only their
    /// adjacency lists change.
    pub fn remove_node(&mut self, label: &str) -> GraphResult<()> {
        if self.adjacency.remove(label).is_none() {
            return Err(GraphError::NodeNotFound(label.to_string()));
        }
        for targets in self.adjacency.values_mut() {
            targets.retain(|target| target != label);
        }
        Ok(())
    }

    /// Remove the nodes in order, failing on the first unknown label.
    /// Removals already applied are not rolled back.
    pub fn remove_nodes<'a, I>(&mut self, labels: I) -> GraphResult<()>
    where
        I: IntoIterator<Item = &'a str>,
    {
        for label in labels {
            self.remove_node(label)?;
        }
        Ok(())
    }

    /// Remove the edge from `source` to `target`. An unknown source and
    /// an absent edge surface identically.
    pub fn remove_edge(&mut self, source: &str, target: &str) -> GraphResult<()> {
        if let Some(targets) = self.adjacency.get_mut(source) {
            if let Some(index) = targets.iter().position(|t| t == target) {
                targets.remove(index);
                return Ok(());
            }
        }
        Err(GraphError::EdgeNotFound {
            source: source.to_string(),
            target: target.to_string(),
        })
    }
}
