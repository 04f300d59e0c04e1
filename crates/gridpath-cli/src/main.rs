//! `gridpath`: grid pathfinding from the command line.
//!
//! Reads a JSON path request, runs the named search strategy, and prints
//! the path, the visited trace and the search time as JSON. Set `RUST_LOG`
//! (e.g. `RUST_LOG=debug`) for diagnostics on stderr.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{Compare, List, Run};

/// Grid pathfinding with five search strategies
#[derive(Parser)]
#[command(name = "gridpath")]
#[command(about = "Grid pathfinding with five search strategies", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run a path request and print the JSON response
    Run(Run),

    /// Run every strategy on one request and compare them
    Compare(Compare),

    /// List the available strategies
    List(List),
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Command::Run(cmd) => cmd.execute(),
        Command::Compare(cmd) => cmd.execute(),
        Command::List(cmd) => cmd.execute(),
    }
}
