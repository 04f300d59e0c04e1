//! Run every strategy on the same request and tabulate the results.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use gridpath_search::Strategy;

/// Run all strategies on one request and print a summary table
#[derive(Parser, Debug)]
pub struct Compare {
    /// Request file (JSON). Reads stdin when omitted.
    #[arg(short, long)]
    pub request: Option<PathBuf>,
}

impl Compare {
    pub fn execute(self) -> Result<()> {
        let req = super::load_request(self.request.as_deref())?;
        let job = req.validate()?;

        println!(
            "{:<10} {:>6} {:>8} {:>8}",
            "strategy", "moves", "visited", "time_ms"
        );
        for st in Strategy::ALL {
            let resp = job.run_with(st);
            let moves = match resp.result().cost() {
                Some(n) => n.to_string(),
                None => "-".to_string(),
            };
            println!(
                "{:<10} {:>6} {:>8} {:>8}",
                st.name(),
                moves,
                resp.visited.len(),
                resp.time_ms
            );
        }
        Ok(())
    }
}
