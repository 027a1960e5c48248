//! Output formatting for the CLI.

use crate::error::Result;
use crate::graph::Algorithm;
use clap::ValueEnum;
use serde::Serialize;
use std::io::{self, Write};

/// How the ordering is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// One label per line.
    Text,
    /// A single JSON object with the algorithm and the order.
    Json,
}

#[derive(Serialize)]
struct Report<'a> {
    algorithm: Algorithm,
    order: &'a [String],
}

/// Write `order` to `out` in the requested format.
pub fn write_order<W: Write>(
    out: &mut W,
    format: Format,
    algorithm: Algorithm,
    order: &[String],
) -> Result<()> {
    match format {
        Format::Text => {
            for label in order {
                writeln!(out, "{label}")?;
            }
        }
        Format::Json => {
            let report = Report { algorithm, order };
            serde_json::to_writer(&mut *out, &report).map_err(io::Error::from)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}
