use gridpath_core::{Cell, GridSize, Obstacles};

use crate::SearchResult;
use crate::engine::search;
use crate::strategy::Strategy;

/// Depth-first search from `start` to `end`.
///
/// Neighbours are pushed up, down, left, right, so the right-hand neighbour
/// is explored first. The returned path is whichever one the search hits
/// first and is usually not a shortest path.
pub fn dfs<O: Obstacles + ?Sized>(
    size: GridSize,
    start: Cell,
    end: Cell,
    obstacles: &O,
) -> SearchResult {
    search(Strategy::Dfs, size, start, end, obstacles)
}
