//! Subcommands of the `gridpath` binary.
//!
//! Each command is a separate module with its own arguments and an
//! `execute` method.

mod compare;
mod list;
mod run;

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use gridpath_cli::PathRequest;

pub use compare::Compare;
pub use list::List;
pub use run::Run;

/// Read a request from `path`, or from stdin if no path is given.
fn load_request(path: Option<&Path>) -> Result<PathRequest> {
    let text = match path {
        Some(p) => std::fs::read_to_string(p)
            .with_context(|| format!("failed to read request from {}", p.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read request from stdin")?;
            buf
        }
    };
    Ok(PathRequest::from_json(&text)?)
}
