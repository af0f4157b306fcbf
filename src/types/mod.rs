//! All data types for the dotgraph library.

pub mod error;
pub mod path;

pub use error::{GraphError, GraphResult};
pub use path::NodePath;
