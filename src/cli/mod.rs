//! Command implementations backing the `dotgraph` binary.

pub mod commands;
