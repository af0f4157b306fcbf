//! dotgraph — in-memory directed graph with DOT import/export and path search.
//!
//! Nodes are identified by string labels; edges are directed and
//! unweighted. Adjacency lists keep insertion order, so traversals and
//! serialized output are deterministic for identical input. Path search
//! between two labels runs breadth-first (fewest edges) or depth-first
//! (any discoverable path).

pub mod cli;
pub mod format;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use format::{render_to_file, DotReader, DotWriter};
pub use graph::{search, Algorithm, DotGraph};
pub use types::{GraphError, GraphResult, NodePath};
