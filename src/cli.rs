/// Command-line driver around the bounded comparator
use crate::escape::decode_operand;
use anyhow::{Context, Result};
use boundcmp_runtime::{compare_n, compare_n_ordering};
use clap::Parser;
use std::cmp::Ordering;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "boundcmp")]
#[command(about = "Compare at most N bytes of two strings, C strncmp style", long_about = None)]
pub struct Cli {
    /// Left operand; accepts \0, \\, \n, \t, \r and \xHH escapes
    #[arg(requires = "right")]
    pub left: Option<String>,

    /// Right operand; same escapes as LEFT
    pub right: Option<String>,

    /// Maximum number of bytes to inspect (default: longer operand plus its terminator)
    pub bound: Option<usize>,

    /// Also print the ordering name
    #[arg(long)]
    pub ordering: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Comparison {
    pub result: i32,
    pub ordering: Ordering,
    pub bound: usize,
}

/// The call the program has always made when given nothing to compare.
pub fn demo_comparison() -> Comparison {
    compare_bytes(b"fred", b"bob", 5)
}

pub fn compare_operands(left: &str, right: &str, bound: Option<usize>) -> Result<Comparison> {
    let left = decode_operand(left).context("failed to decode left operand")?;
    let right = decode_operand(right).context("failed to decode right operand")?;
    let bound = bound.unwrap_or_else(|| left.len().max(right.len()) + 1);

    debug!(?left, ?right, bound, "decoded operands");
    Ok(compare_bytes(&left, &right, bound))
}

fn compare_bytes(left: &[u8], right: &[u8], bound: usize) -> Comparison {
    let result = compare_n(left, right, bound);
    let ordering = compare_n_ordering(left, right, bound);
    info!(result, ?ordering, bound, "compared");
    Comparison { result, ordering, bound }
}

pub fn run(cli: &Cli) -> Result<Comparison> {
    match (&cli.left, &cli.right) {
        (Some(left), Some(right)) => compare_operands(left, right, cli.bound),
        _ => Ok(demo_comparison()),
    }
}

/// `--verbose` forces debug output; otherwise `RUST_LOG` wins, falling back to info.
pub fn log_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    }
}

/// The line printed on stdout.
pub fn render(comparison: &Comparison, ordering: bool) -> String {
    if ordering {
        format!("{} {:?}", comparison.result, comparison.ordering)
    } else {
        comparison.result.to_string()
    }
}
