use crate::config::{DEFAULT_EDGE_SEP, DEFAULT_PAIR_SEP};
use crate::graph::Algorithm;
use crate::output::Format;
use clap::Parser;

const LONG_ABOUT: &str = "\
Topological sorting algorithms, mainly intended for dependency calculation.

Each input line holds pairs separated by the pair separator. A pair is either
a single label or `source<edge-sep>target`. With the top sort classifier every
source is printed before its targets; the depth-first classifier prints every
target before its sources.

EXAMPLES
  $ echo \"A-B,B-C,B-D,E-D,F\" | topsort
  $ echo \"A-B:B-C:B-D:E-D:F\" | topsort -p :
  $ topsort pairs.txt
  $ echo \"A-B\" | topsort pairs1.txt pairs2.txt - pairs3.txt";

#[derive(Parser, Debug)]
#[command(name = "topsort")]
#[command(about = "Topological sorting algorithms")]
#[command(long_about = LONG_ABOUT)]
#[command(version)]
pub struct Cli {
    /// Input files, read in order. `-` is stdin; stdin is used when none are given.
    pub files: Vec<String>,

    /// Use the topological (Kahn) classifier instead of depth-first
    #[arg(short = 'T', long)]
    pub top_sort: bool,

    /// Separator between pairs on a line
    #[arg(short, long, default_value = DEFAULT_PAIR_SEP, allow_hyphen_values = true)]
    pub pair_sep: String,

    /// Separator between the two labels of an edge
    #[arg(short, long, default_value = DEFAULT_EDGE_SEP, allow_hyphen_values = true)]
    pub edge_sep: String,

    /// Print the result in reverse order
    #[arg(short, long)]
    pub reverse: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,
}

impl Cli {
    pub fn algorithm(&self) -> Algorithm {
        if self.top_sort {
            Algorithm::TopSort
        } else {
            Algorithm::DepthFirst
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["topsort"]).unwrap();
        assert!(cli.files.is_empty());
        assert_eq!(cli.pair_sep, ",");
        assert_eq!(cli.edge_sep, "-");
        assert_eq!(cli.algorithm(), Algorithm::DepthFirst);
        assert_eq!(cli.format, Format::Text);
        assert!(!cli.reverse);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from([
            "topsort", "-T", "-p", ":", "-e", "->", "-r", "--format", "json", "a.txt", "-",
        ])
        .unwrap();
        assert_eq!(cli.algorithm(), Algorithm::TopSort);
        assert_eq!(cli.pair_sep, ":");
        assert_eq!(cli.edge_sep, "->");
        assert!(cli.reverse);
        assert_eq!(cli.format, Format::Json);
        assert_eq!(cli.files, vec!["a.txt", "-"]);
    }
}
