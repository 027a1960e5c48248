//! Error types for graph construction and ordering.

use crate::config::SeparatorKind;
use crate::graph::CyclePath;
use std::io;

/// Result type alias for topsort operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error enum for parsing and sorting.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A pair token has an empty source or target.
    #[error("line {line_number}: malformed pair {token:?} in {line:?}")]
    Parse {
        line_number: usize,
        line: String,
        token: String,
    },

    /// The graph cannot be linearised.
    #[error("cycle detected: {cycle}", cycle = path.format())]
    Cycle {
        path: CyclePath,
        unresolved: Vec<String>,
    },

    /// A separator was configured as the empty string.
    #[error("{0} separator is empty")]
    EmptySeparator(SeparatorKind),

    /// The line source failed.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Build a cycle error from a closed path and the nodes left unplaced.
    pub fn cycle(path: CyclePath, unresolved: Vec<String>) -> Self {
        Error::Cycle { path, unresolved }
    }
}
