use gridpath_core::{Cell, GridSize, Obstacles};

use crate::SearchResult;
use crate::engine::search;
use crate::strategy::Strategy;

/// Greedy best-first search from `start` to `end`.
///
/// Always expands the cell closest to the goal by Manhattan distance,
/// ignoring the cost already paid. Fast on open maps, but the path is not
/// guaranteed to be a shortest one.
pub fn greedy<O: Obstacles + ?Sized>(
    size: GridSize,
    start: Cell,
    end: Cell,
    obstacles: &O,
) -> SearchResult {
    search(Strategy::Greedy, size, start, end, obstacles)
}
