//! Plain-text grid drawing.
//!
//! | Glyph | Meaning |
//! |---|---|
//! | `A` | start |
//! | `B` | goal |
//! | `#` | obstacle |
//! | `*` | path |
//! | `@` | cell being expanded |
//! | `o` | expanded cell |
//! | `.` | untouched cell |

use std::collections::HashSet;

use gridpath_core::{Cell, GridSize, Obstacles};

use crate::request::Job;
use crate::trace::Frame;

/// The static part of a picture: grid size, endpoints and walls.
#[derive(Debug, Clone, Copy)]
pub struct Board<'a> {
    size: GridSize,
    start: Cell,
    end: Cell,
    obstacles: &'a HashSet<Cell>,
}

impl<'a> Board<'a> {
    pub fn new(size: GridSize, start: Cell, end: Cell, obstacles: &'a HashSet<Cell>) -> Self {
        Self {
            size,
            start,
            end,
            obstacles,
        }
    }

    pub fn from_job(job: &'a Job) -> Self {
        Self::new(job.size, job.start, job.end, &job.obstacles)
    }

    /// Draw `frame` on the board, one line per row, each line ending in `\n`.
    pub fn render(&self, frame: &Frame<'_>) -> String {
        let visited: HashSet<Cell> = frame.visited.iter().copied().collect();
        let path: HashSet<Cell> = frame.path.iter().copied().collect();
        let current = frame.current();

        let cols = self.size.cols.max(0) as usize;
        let mut out = String::with_capacity(self.size.len() + self.size.rows.max(0) as usize);
        for c in self.size.iter() {
            let glyph = if c == self.start {
                'A'
            } else if c == self.end {
                'B'
            } else if self.obstacles.is_blocked(c) {
                '#'
            } else if path.contains(&c) {
                '*'
            } else if current == Some(c) {
                '@'
            } else if visited.contains(&c) {
                'o'
            } else {
                '.'
            };
            out.push(glyph);
            if c.col as usize + 1 == cols {
                out.push('\n');
            }
        }
        out
    }
}
