//! # topsort - dependency ordering
//!
//! Builds a directed graph from delimiter-separated text and orders its
//! nodes with either a Kahn-style topological classifier or a postorder
//! depth-first classifier.

pub mod cli;
pub mod cli_handlers;
pub mod config;
pub mod error;
pub mod graph;
pub mod output;
pub mod source;

// Re-export commonly used types
pub use config::Separators;
pub use error::{Error, Result};
pub use graph::{Algorithm, CyclePath, Graph};
