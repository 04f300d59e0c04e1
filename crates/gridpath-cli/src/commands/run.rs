//! Run one search and print the response as JSON.

use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use gridpath_cli::{Board, TraceCursor};

/// Run a path request and print the JSON response
#[derive(Parser, Debug)]
pub struct Run {
    /// Request file (JSON). Reads stdin when omitted.
    #[arg(short, long)]
    pub request: Option<PathBuf>,

    /// Strategy to use instead of the request's `algorithm` field
    #[arg(short, long)]
    pub algorithm: Option<String>,

    /// Draw the finished search on stderr
    #[arg(long)]
    pub render: bool,

    /// Play the search back frame by frame on stderr
    #[arg(long, conflicts_with = "render")]
    pub animate: bool,

    /// Delay between animation frames, in milliseconds
    #[arg(long, default_value_t = 50)]
    pub delay_ms: u64,

    /// Pretty-print the JSON response
    #[arg(long)]
    pub pretty: bool,
}

impl Run {
    pub fn execute(self) -> Result<()> {
        let mut req = super::load_request(self.request.as_deref())?;
        if let Some(name) = self.algorithm {
            req.algorithm = name;
        }
        let job = req.validate()?;

        let resp = job.run();
        log::info!(
            "{} on {}: {} cells visited, path of {} cells in {} ms",
            req.algorithm,
            job.size,
            resp.visited.len(),
            resp.path.len(),
            resp.time_ms
        );

        if self.render || self.animate {
            let res = resp.result();
            let board = Board::from_job(&job);
            let mut cursor = TraceCursor::new(&res);
            if self.animate {
                let delay = Duration::from_millis(self.delay_ms);
                for frame in cursor.frames() {
                    eprintln!("{}", board.render(&frame));
                    thread::sleep(delay);
                }
            } else {
                while cursor.next_step() {}
                eprintln!("{}", board.render(&cursor.frame()));
            }
        }

        let json = if self.pretty {
            serde_json::to_string_pretty(&resp)
        } else {
            serde_json::to_string(&resp)
        }
        .context("failed to encode response")?;
        println!("{json}");
        Ok(())
    }
}
