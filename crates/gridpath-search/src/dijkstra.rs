use gridpath_core::{Cell, GridSize, Obstacles};

use crate::SearchResult;
use crate::engine::search;
use crate::strategy::Strategy;

/// Uniform-cost search from `start` to `end`.
///
/// Cells are expanded in order of accumulated distance, ties broken by
/// `(row, col)`. Returns a shortest path.
pub fn dijkstra<O: Obstacles + ?Sized>(
    size: GridSize,
    start: Cell,
    end: Cell,
    obstacles: &O,
) -> SearchResult {
    search(Strategy::Dijkstra, size, start, end, obstacles)
}
