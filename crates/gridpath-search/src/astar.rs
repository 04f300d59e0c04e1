use gridpath_core::{Cell, GridSize, Obstacles};

use crate::SearchResult;
use crate::engine::search;
use crate::strategy::Strategy;

/// A\* search from `start` to `end` with the Manhattan heuristic.
///
/// Cells are expanded in order of `g + h`, ties broken by lower `g`, then
/// by `(row, col)`. The heuristic is consistent on a 4-connected unit-cost
/// grid, so the path is a shortest one.
pub fn astar<O: Obstacles + ?Sized>(
    size: GridSize,
    start: Cell,
    end: Cell,
    obstacles: &O,
) -> SearchResult {
    search(Strategy::Astar, size, start, end, obstacles)
}
