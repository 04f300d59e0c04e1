//! Step-through playback of a finished search.
//!
//! A [`TraceCursor`] walks the visited trace of a [`SearchResult`] one cell
//! at a time, forwards or backwards. Frame `i` shows the first `i` expanded
//! cells; one extra frame at the end reveals the path.

use gridpath_core::Cell;
use gridpath_search::SearchResult;

/// What to draw at one playback step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame<'a> {
    /// Cells expanded so far, oldest first.
    pub visited: &'a [Cell],
    /// The path, once revealed. Empty until the last frame, and on the
    /// last frame too when no path was found.
    pub path: &'a [Cell],
    /// Whether this is the last frame of the playback.
    pub done: bool,
}

impl Frame<'_> {
    /// The most recently expanded cell, while the search is still running.
    pub fn current(&self) -> Option<Cell> {
        if self.done {
            None
        } else {
            self.visited.last().copied()
        }
    }
}

/// Cursor over the frames of a [`SearchResult`].
#[derive(Debug, Clone)]
pub struct TraceCursor<'a> {
    result: &'a SearchResult,
    step: usize,
}

impl<'a> TraceCursor<'a> {
    pub fn new(result: &'a SearchResult) -> Self {
        Self { result, step: 0 }
    }

    /// Number of frames: the empty grid, one per expanded cell, and the
    /// final frame with the path.
    pub fn len(&self) -> usize {
        self.result.visited.len() + 2
    }

    /// Always false; there is at least the empty and the final frame.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Index of the current frame.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Whether the cursor is on the final frame.
    pub fn is_done(&self) -> bool {
        self.step + 1 == self.len()
    }

    /// Advance one frame. Returns `false` if already on the final frame.
    pub fn next_step(&mut self) -> bool {
        if self.is_done() {
            return false;
        }
        self.step += 1;
        true
    }

    /// Go back one frame. Returns `false` if already on the first frame.
    pub fn previous_step(&mut self) -> bool {
        if self.step == 0 {
            return false;
        }
        self.step -= 1;
        true
    }

    /// Return to the first frame.
    pub fn reset(&mut self) {
        self.step = 0;
    }

    /// The current frame.
    pub fn frame(&self) -> Frame<'a> {
        let visited = &self.result.visited;
        if self.is_done() {
            Frame {
                visited,
                path: &self.result.path,
                done: true,
            }
        } else {
            Frame {
                visited: &visited[..self.step],
                path: &[],
                done: false,
            }
        }
    }

    /// All frames from the current one to the end, advancing the cursor.
    pub fn frames(&mut self) -> impl Iterator<Item = Frame<'a>> + '_ {
        let mut first = true;
        std::iter::from_fn(move || {
            if first {
                first = false;
                return Some(self.frame());
            }
            self.next_step().then(|| self.frame())
        })
    }
}
