//! Reading, writing, and rendering the textual graph format.

pub mod reader;
pub mod render;
pub mod writer;

pub use reader::DotReader;
pub use render::render_to_file;
pub use writer::DotWriter;
