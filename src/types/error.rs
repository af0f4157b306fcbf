//! Error types for the dotgraph library.

use std::process::ExitStatus;

/// All errors that can occur in the dotgraph library.
//
// NOTE: implemented by hand rather than via `thiserror::Error` because the
// `EdgeNotFound` variant carries a plain-string field named `source`, which
// thiserror unconditionally treats as a chained error source (requiring
// `String: std::error::Error`). These impls reproduce exactly what the derive
// would generate for the original `#[error(...)]`/`#[from]` attributes.
#[derive(Debug)]
pub enum GraphError {
    /// Node not found by label.
    NodeNotFound(String),

    /// No edge between the two labels (or the source is unknown).
    EdgeNotFound { source: String, target: String },

    /// The external renderer ran but exited abnormally.
    RenderFailed(ExitStatus),

    /// IO error.
    Io(std::io::Error),
}

impl std::fmt::Display for GraphError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphError::NodeNotFound(label) => write!(f, "Node \"{label}\" not found"),
            GraphError::EdgeNotFound { source, target } => {
                write!(f, "Edge \"{source}\" -> \"{target}\" not found")
            }
            GraphError::RenderFailed(status) => write!(f, "Renderer exited with {status}"),
            GraphError::Io(e) => write!(f, "IO error: {e}"),
        }
    }
}

impl std::error::Error for GraphError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GraphError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for GraphError {
    fn from(e: std::io::Error) -> Self {
        GraphError::Io(e)
    }
}

/// Convenience result type for dotgraph operations.
pub type GraphResult<T> = Result<T, GraphError>;
