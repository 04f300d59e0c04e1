use gridpath_core::{Cell, GridSize, Obstacles};

use crate::SearchResult;
use crate::engine::search;
use crate::strategy::Strategy;

/// Breadth-first search from `start` to `end`.
///
/// Each cell is enqueued at most once, the first time it is seen. Every
/// dequeued cell is expanded, including a blocked start. Returns a path
/// with the fewest moves.
pub fn bfs<O: Obstacles + ?Sized>(
    size: GridSize,
    start: Cell,
    end: Cell,
    obstacles: &O,
) -> SearchResult {
    search(Strategy::Bfs, size, start, end, obstacles)
}
