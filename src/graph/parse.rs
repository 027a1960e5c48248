//! Line parser: decodes `token(pairSep token)*` lines into graph edges.

use super::Graph;
use crate::config::Separators;
use crate::error::{Error, Result};
use tracing::{debug, trace};

/// Feed every line produced by `next_line` into `graph`.
///
/// `next_line` yields `Ok(Some(line))` per line and `Ok(None)` at end of
/// input. Separators are validated before the first line is requested.
/// Tokens are used verbatim; no whitespace is trimmed.
pub fn parse_lines<F>(
    graph: &mut Graph,
    separators: &Separators,
    mut next_line: F,
) -> Result<()>
where
    F: FnMut() -> Result<Option<String>>,
{
    separators.validate()?;

    let mut line_number = 0;
    while let Some(line) = next_line()? {
        line_number += 1;
        trace!(line_number, line = %line, "parsing line");
        parse_line(graph, separators, line_number, &line)?;
    }

    debug!(
        lines = line_number,
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "finished parsing source"
    );
    Ok(())
}

/// Decode a single line. Blank lines and empty tokens are skipped.
fn parse_line(
    graph: &mut Graph,
    separators: &Separators,
    line_number: usize,
    line: &str,
) -> Result<()> {
    for token in line.split(separators.pair.as_str()).filter(|t| !t.is_empty()) {
        match token.split_once(separators.edge.as_str()) {
            None => {
                graph.ensure_node(token);
            }
            Some((source, target)) if !source.is_empty() && !target.is_empty() => {
                graph.add_edge(source, target);
            }
            Some(_) => {
                return Err(Error::Parse {
                    line_number,
                    line: line.to_string(),
                    token: token.to_string(),
                });
            }
        }
    }
    Ok(())
}
