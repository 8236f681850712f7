mod cli;
mod escape;

use anyhow::Result;
use clap::Parser;
use cli::{log_filter, render, run, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(cli.verbose))
        .with_writer(std::io::stderr)
        .init();

    let comparison = run(&cli)?;
    println!("{}", render(&comparison, cli.ordering));

    Ok(())
}
