use crate::cli::Cli;
use crate::config::Separators;
use crate::graph::{parse_lines, Graph};
use crate::output::write_order;
use crate::source::ReaderLines;
use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path;
use tracing::debug;

/// Name that selects stdin as an input.
pub const STDIN: &str = "-";

/// Resolve the inputs to read: stdin when none are given, otherwise each
/// distinct input once, in first-mention order.
pub fn resolve_inputs(files: &[String]) -> Result<Vec<String>> {
    if files.is_empty() {
        return Ok(vec![STDIN.to_string()]);
    }

    let mut seen = HashSet::new();
    let mut inputs = Vec::new();
    for file in files {
        let name = if file == STDIN {
            file.clone()
        } else {
            path::absolute(file)
                .with_context(|| format!("get absolute path of {file:?}"))?
                .to_string_lossy()
                .into_owned()
        };
        if seen.insert(name.clone()) {
            inputs.push(name);
        }
    }
    Ok(inputs)
}

/// Parse one input into `graph`.
pub fn read_input(graph: &mut Graph, separators: &Separators, name: &str) -> Result<()> {
    debug!(input = name, "reading input");
    let result = if name == STDIN {
        let mut lines = ReaderLines::new(io::stdin().lock());
        parse_lines(graph, separators, || lines.next_line())
    } else {
        let file = File::open(name).with_context(|| format!("read from {name:?} failed"))?;
        let mut lines = ReaderLines::new(BufReader::new(file));
        parse_lines(graph, separators, || lines.next_line())
    };
    result.with_context(|| format!("read from {name:?} failed"))
}

/// Handle a sort invocation, writing the ordering to `out`.
pub fn handle_sort<W: Write>(cli: &Cli, out: &mut W) -> Result<()> {
    let separators = Separators::new(cli.edge_sep.as_str(), cli.pair_sep.as_str())?;

    let mut graph = Graph::new();
    for name in resolve_inputs(&cli.files)? {
        read_input(&mut graph, &separators, &name)?;
    }

    let algorithm = cli.algorithm();
    let mut order = graph
        .sort(algorithm)
        .with_context(|| format!("{algorithm} classifier failed"))?;
    if cli.reverse {
        order.reverse();
    }

    write_order(out, cli.format, algorithm, &order)?;
    Ok(())
}
