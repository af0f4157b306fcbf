//! Path search algorithms (BFS and DFS).

use std::collections::{HashSet, VecDeque};

use crate::types::NodePath;

use super::DotGraph;

/// Search strategy for [`search`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    /// Explore level by level; the result has the fewest edges of any
    /// path between the endpoints.
    BreadthFirst,
    /// Follow one neighbor chain to exhaustion before backtracking;
    /// the result is a path, not necessarily the shortest.
    DepthFirst,
}

impl Algorithm {
    /// Parse a CLI token into an algorithm.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "bfs" => Some(Self::BreadthFirst),
            "dfs" => Some(Self::DepthFirst),
            _ => None,
        }
    }

    /// The CLI token for this algorithm.
    pub fn name(&self) -> &'static str {
        match self {
            Self::BreadthFirst => "bfs",
            Self::DepthFirst => "dfs",
        }
    }
}

/// Search for a path from `source` to `target`.
///
/// Returns `None` when either endpoint is not a node in the graph or no
/// path exists — both are normal query outcomes, not errors. A known
/// `source` equal to `target` yields the single-node path `[source]`.
/// Neighbors are explored in adjacency insertion order, so the result
/// is deterministic for identical graphs. All bookkeeping is local to
/// the call; nothing persists across searches.
pub fn search(
    graph: &DotGraph,
    source: &str,
    target: &str,
    algorithm: Algorithm,
) -> Option<NodePath> {
    if !graph.contains_node(source) || !graph.contains_node(target) {
        return None;
    }
    log::debug!("{} search: {} -> {}", algorithm.name(), source, target);
    match algorithm {
        Algorithm::BreadthFirst => bfs_search(graph, source, target),
        Algorithm::DepthFirst => dfs_search(graph, source, target),
    }
}

/// BFS over a queue of partial paths. Nodes are marked visited when
/// enqueued, not when dequeued, so each node enters the queue at most
/// once and the search terminates on cyclic graphs.
fn bfs_search<'a>(graph: &'a DotGraph, source: &'a str, target: &str) -> Option<NodePath> {
    let mut visited: HashSet<&str> = HashSet::new();
    let mut queue: VecDeque<Vec<&str>> = VecDeque::new();

    visited.insert(source);
    queue.push_back(vec![source]);

    while let Some(path) = queue.pop_front() {
        let last = *path.last()?;
        if last == target {
            return Some(to_node_path(&path));
        }
        for neighbor in graph.edges_from(last) {
            if visited.insert(neighbor) {
                let mut extended = path.clone();
                extended.push(neighbor);
                queue.push_back(extended);
            }
        }
    }
    None
}

/// DFS entry point; the recursion depth is bounded by the graph
/// diameter.
fn dfs_search<'a>(graph: &'a DotGraph, source: &'a str, target: &str) -> Option<NodePath> {
    let mut visited: HashSet<&str> = HashSet::new();
    let mut path: Vec<&str> = Vec::new();
    if dfs_visit(graph, source, target, &mut visited, &mut path) {
        Some(to_node_path(&path))
    } else {
        None
    }
}

/// Marks `current` visited on entry (cycle safety), descends into each
/// unvisited neighbor in adjacency order, and pops `current` off the
/// path again when no neighbor chain reaches the target.
fn dfs_visit<'a>(
    graph: &'a DotGraph,
    current: &'a str,
    target: &str,
    visited: &mut HashSet<&'a str>,
    path: &mut Vec<&'a str>,
) -> bool {
    visited.insert(current);
    path.push(current);

    if current == target {
        return true;
    }

    for neighbor in graph.edges_from(current) {
        if !visited.contains(neighbor.as_str())
            && dfs_visit(graph, neighbor, target, visited, path)
        {
            return true;
        }
    }

    path.pop();
    false
}

fn to_node_path(labels: &[&str]) -> NodePath {
    NodePath::from(labels.iter().map(|label| label.to_string()).collect::<Vec<_>>())
}
