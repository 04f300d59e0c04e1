//! Path requests and responses.
//!
//! A request is a JSON object; every field is optional:
//!
//! ```json
//! {
//!   "rows": 10,
//!   "cols": 10,
//!   "start": [0, 0],
//!   "end": [9, 9],
//!   "obstacles": ["3,4", "3,5"],
//!   "algorithm": "dijkstra"
//! }
//! ```
//!
//! `end` defaults to the bottom-right corner. The response carries the
//! path, the visited trace and the search time in whole milliseconds.

use std::collections::HashSet;
use std::time::{Duration, Instant};

use gridpath_core::{Cell, GridSize, ParseCellError};
use gridpath_search::{SearchResult, Strategy};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const DEFAULT_SIZE: i32 = 10;
const DEFAULT_ALGORITHM: &str = "dijkstra";

/// Largest grid a request may ask for, in cells.
pub const MAX_CELLS: i64 = 1 << 22;

/// Errors from decoding or validating a [`PathRequest`].
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("malformed request")]
    Json(#[from] serde_json::Error),

    #[error("grid must be at least 1x1, got {rows}x{cols}")]
    InvalidSize { rows: i32, cols: i32 },

    #[error("grid of {rows}x{cols} exceeds the limit of {max} cells", max = MAX_CELLS)]
    TooLarge { rows: i32, cols: i32 },

    #[error("{which} cell {cell} is outside the {size} grid")]
    OutOfBounds {
        which: &'static str,
        cell: Cell,
        size: GridSize,
    },

    #[error("invalid obstacle")]
    Obstacle(#[from] ParseCellError),
}

/// A path request as sent by a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathRequest {
    #[serde(default = "default_size")]
    pub rows: i32,
    #[serde(default = "default_size")]
    pub cols: i32,
    #[serde(default)]
    pub start: Option<Cell>,
    #[serde(default)]
    pub end: Option<Cell>,
    /// Blocked cells in `"row,col"` form.
    #[serde(default)]
    pub obstacles: Vec<String>,
    #[serde(default = "default_algorithm")]
    pub algorithm: String,
}

fn default_size() -> i32 {
    DEFAULT_SIZE
}

fn default_algorithm() -> String {
    DEFAULT_ALGORITHM.to_string()
}

impl Default for PathRequest {
    fn default() -> Self {
        Self {
            rows: DEFAULT_SIZE,
            cols: DEFAULT_SIZE,
            start: None,
            end: None,
            obstacles: Vec::new(),
            algorithm: default_algorithm(),
        }
    }
}

impl PathRequest {
    /// Decode a request from JSON. Blank input yields the default request.
    pub fn from_json(text: &str) -> Result<Self, RequestError> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(text)?)
    }

    /// Check the request and resolve its defaults.
    ///
    /// Grids above [`MAX_CELLS`] are rejected. Obstacles outside the grid
    /// are dropped. An unknown algorithm name is
    /// not an error: the resulting [`Job`] simply has no strategy.
    pub fn validate(&self) -> Result<Job, RequestError> {
        if self.rows <= 0 || self.cols <= 0 {
            return Err(RequestError::InvalidSize {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if i64::from(self.rows) * i64::from(self.cols) > MAX_CELLS {
            return Err(RequestError::TooLarge {
                rows: self.rows,
                cols: self.cols,
            });
        }
        let size = GridSize::new(self.rows, self.cols);
        let start = self.start.unwrap_or(Cell::ORIGIN);
        let end = self
            .end
            .unwrap_or_else(|| Cell::new(self.rows - 1, self.cols - 1));
        for (which, cell) in [("start", start), ("end", end)] {
            if !size.contains(cell) {
                return Err(RequestError::OutOfBounds { which, cell, size });
            }
        }

        let mut obstacles = HashSet::with_capacity(self.obstacles.len());
        for s in &self.obstacles {
            let c: Cell = s.parse()?;
            if size.contains(c) {
                obstacles.insert(c);
            } else {
                log::debug!("dropping obstacle {c} outside the {size} grid");
            }
        }

        let strategy = match self.algorithm.parse::<Strategy>() {
            Ok(st) => Some(st),
            Err(e) => {
                log::warn!("{e}; returning an empty result");
                None
            }
        };

        Ok(Job {
            size,
            start,
            end,
            obstacles,
            strategy,
        })
    }
}

/// A validated request, ready to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub size: GridSize,
    pub start: Cell,
    pub end: Cell,
    pub obstacles: HashSet<Cell>,
    /// `None` when the request named an unknown algorithm.
    pub strategy: Option<Strategy>,
}

impl Job {
    /// Run the requested strategy, or produce an empty response if the
    /// strategy name was not recognised.
    pub fn run(&self) -> PathResponse {
        let t0 = Instant::now();
        let res = match self.strategy {
            Some(st) => self.search(st),
            None => SearchResult::default(),
        };
        PathResponse::new(res, t0.elapsed())
    }

    /// Run `strategy` regardless of what the request asked for.
    pub fn run_with(&self, strategy: Strategy) -> PathResponse {
        let t0 = Instant::now();
        let res = self.search(strategy);
        PathResponse::new(res, t0.elapsed())
    }

    fn search(&self, strategy: Strategy) -> SearchResult {
        gridpath_search::search(strategy, self.size, self.start, self.end, &self.obstacles)
    }
}

/// The answer to a [`PathRequest`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathResponse {
    pub path: Vec<Cell>,
    pub visited: Vec<Cell>,
    /// Search time rounded to whole milliseconds, never below 1.
    pub time_ms: u64,
}

impl PathResponse {
    fn new(res: SearchResult, elapsed: Duration) -> Self {
        let (path, visited) = res.into_parts();
        Self {
            path,
            visited,
            time_ms: whole_millis(elapsed),
        }
    }

    /// The search result without timing.
    pub fn result(&self) -> SearchResult {
        SearchResult {
            path: self.path.clone(),
            visited: self.visited.clone(),
        }
    }
}

fn whole_millis(d: Duration) -> u64 {
    let ms = (d.as_nanos() as f64 / 1_000_000.0).round() as u64;
    ms.max(1)
}
