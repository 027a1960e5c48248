//! Separator configuration for the input grammar.

use crate::error::{Error, Result};
use std::fmt;

/// Default separator between the two labels of an edge.
pub const DEFAULT_EDGE_SEP: &str = "-";

/// Default separator between pair tokens on a line.
pub const DEFAULT_PAIR_SEP: &str = ",";

/// Which separator a configuration error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeparatorKind {
    Edge,
    Pair,
}

impl fmt::Display for SeparatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeparatorKind::Edge => write!(f, "edge"),
            SeparatorKind::Pair => write!(f, "pair"),
        }
    }
}

/// The pair of delimiters used to decode a line.
///
/// `pair` splits a line into tokens, `edge` splits a token into
/// source and target at its first occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Separators {
    pub edge: String,
    pub pair: String,
}

impl Separators {
    /// Create validated separators.
    pub fn new(edge: impl Into<String>, pair: impl Into<String>) -> Result<Self> {
        let separators = Self {
            edge: edge.into(),
            pair: pair.into(),
        };
        separators.validate()?;
        Ok(separators)
    }

    /// Fail if either separator is empty.
    pub fn validate(&self) -> Result<()> {
        if self.pair.is_empty() {
            return Err(Error::EmptySeparator(SeparatorKind::Pair));
        }
        if self.edge.is_empty() {
            return Err(Error::EmptySeparator(SeparatorKind::Edge));
        }
        Ok(())
    }
}

impl Default for Separators {
    fn default() -> Self {
        Self {
            edge: DEFAULT_EDGE_SEP.to_string(),
            pair: DEFAULT_PAIR_SEP.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_separators() {
        let seps = Separators::default();
        assert_eq!(seps.edge, "-");
        assert_eq!(seps.pair, ",");
        assert!(seps.validate().is_ok());
    }

    #[test]
    fn test_empty_edge_separator() {
        let err = Separators::new("", ",").unwrap_err();
        assert!(matches!(err, Error::EmptySeparator(SeparatorKind::Edge)));
    }

    #[test]
    fn test_empty_pair_separator() {
        let err = Separators::new("->", "").unwrap_err();
        assert!(matches!(err, Error::EmptySeparator(SeparatorKind::Pair)));
    }

    #[test]
    fn test_multi_char_separators() {
        let seps = Separators::new("->", "; ").unwrap();
        assert_eq!(seps.edge, "->");
        assert_eq!(seps.pair, "; ");
    }
}
