use gridpath_core::{Cell, GridSize, Obstacles};

use crate::distance::manhattan;
use crate::frontier::{Entry, Frontier};
use crate::result::SearchResult;
use crate::strategy::{Admission, Strategy};

/// Sentinel distance for cells not reached yet. Larger than any path length.
pub const UNREACHABLE: i32 = i32::MAX;

const NO_PARENT: usize = usize::MAX;

/// Run `strategy` from `start` to `end` on a `size` grid.
///
/// `start` and `end` must lie inside the grid; they may be obstacles. If
/// either is out of bounds, nothing is searched and an empty result is
/// returned.
pub fn search<O: Obstacles + ?Sized>(
    strategy: Strategy,
    size: GridSize,
    start: Cell,
    end: Cell,
    obstacles: &O,
) -> SearchResult {
    let (Some(start_idx), Some(goal_idx)) = (size.index(start), size.index(end)) else {
        log::warn!("{strategy}: start {start} or goal {end} outside {size} grid, not searching");
        return SearchResult::default();
    };

    let res = Search::new(strategy, size, end, obstacles).run(start_idx, goal_idx);

    log::debug!(
        "{strategy}: {start} -> {end} on {size}, expanded {} cells, path {}",
        res.visited.len(),
        match res.cost() {
            Some(c) => format!("of {c} steps"),
            None => "not found".to_string(),
        }
    );
    res
}

/// Per-call search state. Dropped when the search returns.
struct Search<'a, O: ?Sized> {
    strategy: Strategy,
    size: GridSize,
    goal: Cell,
    obstacles: &'a O,
    // Best known distance, used by relaxing strategies.
    dist: Vec<i32>,
    // Discovered flag, used by seen-once strategies.
    seen: Vec<bool>,
    finalized: Vec<bool>,
    parent: Vec<usize>,
    visited: Vec<Cell>,
}

impl<'a, O: Obstacles + ?Sized> Search<'a, O> {
    fn new(strategy: Strategy, size: GridSize, goal: Cell, obstacles: &'a O) -> Self {
        let len = size.len();
        let relax = strategy.admission() == Admission::Relax;
        Self {
            strategy,
            size,
            goal,
            obstacles,
            dist: if relax { vec![UNREACHABLE; len] } else { Vec::new() },
            seen: if relax { Vec::new() } else { vec![false; len] },
            finalized: vec![false; len],
            parent: vec![NO_PARENT; len],
            visited: Vec::new(),
        }
    }

    fn run(mut self, start_idx: usize, goal_idx: usize) -> SearchResult {
        let start = self.size.cell(start_idx);
        let mut open = Frontier::new(self.strategy.frontier());

        match self.strategy.admission() {
            Admission::Relax => self.dist[start_idx] = 0,
            Admission::SeenOnce | Admission::SeenOnceSkip => self.seen[start_idx] = true,
        }
        open.push(
            self.key(start, 0),
            Entry {
                cell: start,
                idx: start_idx,
                g: 0,
            },
        );

        let found = 'search: loop {
            let Some(current) = open.pop() else {
                break 'search false;
            };
            let ci = current.idx;

            // The goal is checked before it can be finalized, so it never
            // shows up in the trace.
            if ci == goal_idx {
                break 'search true;
            }
            if self.rejects(current) {
                continue;
            }

            self.finalized[ci] = true;
            self.visited.push(current.cell);

            let g = current.g + 1;
            for np in current.cell.neighbors_4() {
                let Some(ni) = self.size.index(np) else {
                    continue;
                };
                if self.obstacles.is_blocked(np) {
                    continue;
                }
                match self.strategy.admission() {
                    Admission::Relax => {
                        if self.finalized[ni] || self.dist[ni] <= g {
                            continue;
                        }
                        self.dist[ni] = g;
                    }
                    Admission::SeenOnce | Admission::SeenOnceSkip => {
                        if self.seen[ni] {
                            continue;
                        }
                        self.seen[ni] = true;
                    }
                }
                self.parent[ni] = ci;
                open.push(
                    self.key(np, g),
                    Entry {
                        cell: np,
                        idx: ni,
                        g,
                    },
                );
            }
        };

        let path = if found {
            self.reconstruct(goal_idx)
        } else {
            Vec::new()
        };
        SearchResult {
            path,
            visited: self.visited,
        }
    }

    /// Whether a popped entry is dropped instead of expanded.
    #[inline]
    fn rejects(&self, e: Entry) -> bool {
        match self.strategy.admission() {
            Admission::Relax | Admission::SeenOnceSkip => {
                self.finalized[e.idx] || self.obstacles.is_blocked(e.cell)
            }
            Admission::SeenOnce => false,
        }
    }

    #[inline]
    fn key(&self, c: Cell, g: i32) -> (i32, i32) {
        let h = if self.strategy.uses_heuristic() {
            manhattan(c, self.goal)
        } else {
            0
        };
        self.strategy.key(g, h)
    }

    fn reconstruct(&self, goal_idx: usize) -> Vec<Cell> {
        let mut path = Vec::new();
        let mut ci = goal_idx;
        while ci != NO_PARENT {
            path.push(self.size.cell(ci));
            ci = self.parent[ci];
        }
        path.reverse();
        path
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::testutil::{OPEN as NONE, assert_valid_path, blocked, cells};

    #[test]
    fn start_equals_goal() {
        let size = GridSize::new(3, 3);
        let c = Cell::new(1, 1);
        for st in Strategy::ALL {
            let res = search(st, size, c, c, NONE);
            assert_eq!(res.path, vec![c], "{st}");
            assert!(res.visited.is_empty(), "{st}");
        }
    }

    #[test]
    fn start_equals_goal_on_obstacle() {
        let size = GridSize::new(3, 3);
        let c = Cell::new(1, 1);
        let obs = blocked(&[(1, 1)]);
        for st in Strategy::ALL {
            let res = search(st, size, c, c, &obs);
            assert_eq!(res.path, vec![c], "{st}");
            assert!(res.visited.is_empty(), "{st}");
        }
    }

    #[test]
    fn walled_in_start() {
        let size = GridSize::new(3, 3);
        let obs = blocked(&[(0, 1), (1, 0)]);
        let start = Cell::new(0, 0);
        for st in Strategy::ALL {
            let res = search(st, size, start, Cell::new(2, 2), &obs);
            assert!(res.path.is_empty(), "{st}");
            assert_eq!(res.visited, vec![start], "{st}");
        }
    }

    #[test]
    fn wall_splits_grid() {
        let size = GridSize::new(3, 3);
        let obs = blocked(&[(0, 1), (1, 1), (2, 1)]);
        for st in Strategy::ALL {
            let res = search(st, size, Cell::new(0, 0), Cell::new(0, 2), &obs);
            assert!(res.path.is_empty(), "{st}");
            // Every cell of the left column gets expanded before giving up.
            let expanded: BTreeSet<_> = res.visited.iter().copied().collect();
            assert_eq!(
                expanded,
                cells(&[(0, 0), (1, 0), (2, 0)]).into_iter().collect(),
                "{st}"
            );
        }
    }

    #[test]
    fn open_grid_path_lengths() {
        let size = GridSize::new(3, 3);
        let (start, end) = (Cell::new(0, 0), Cell::new(2, 2));
        for st in Strategy::ALL {
            let res = search(st, size, start, end, NONE);
            assert_valid_path(&res, size, start, end, NONE);
            if st.is_optimal() {
                assert_eq!(res.path.len(), 5, "{st}");
                assert_eq!(res.cost(), Some(4), "{st}");
            } else {
                assert!(res.path.len() >= 5, "{st}");
            }
        }
    }

    #[test]
    fn blocked_start_admission_differs() {
        let size = GridSize::new(1, 3);
        let obs = blocked(&[(0, 0)]);
        let (start, end) = (Cell::new(0, 0), Cell::new(0, 2));
        for st in Strategy::ALL {
            let res = search(st, size, start, end, &obs);
            if st == Strategy::Bfs {
                assert_eq!(res.path, cells(&[(0, 0), (0, 1), (0, 2)]));
                assert_eq!(res.visited, cells(&[(0, 0), (0, 1)]));
            } else {
                assert!(res.path.is_empty(), "{st}");
                assert!(res.visited.is_empty(), "{st}");
            }
        }
    }

    #[test]
    fn blocked_goal_is_unreachable() {
        let size = GridSize::new(2, 2);
        let obs = blocked(&[(1, 1)]);
        for st in Strategy::ALL {
            let res = search(st, size, Cell::new(0, 0), Cell::new(1, 1), &obs);
            assert!(res.path.is_empty(), "{st}");
            assert_eq!(res.visited.len(), 3, "{st}");
        }
    }

    #[test]
    fn out_of_bounds_is_empty() {
        let size = GridSize::new(3, 3);
        for st in Strategy::ALL {
            let res = search(st, size, Cell::new(0, 0), Cell::new(3, 0), NONE);
            assert_eq!(res, SearchResult::default(), "{st}");
            let res = search(st, size, Cell::new(-1, 0), Cell::new(0, 0), NONE);
            assert_eq!(res, SearchResult::default(), "{st}");
        }
    }

    #[test]
    fn deterministic() {
        let size = GridSize::new(8, 9);
        let obs = blocked(&[(1, 1), (1, 2), (1, 3), (3, 5), (4, 5), (5, 5), (6, 2)]);
        let (start, end) = (Cell::new(0, 0), Cell::new(7, 8));
        for st in Strategy::ALL {
            let a = search(st, size, start, end, &obs);
            let b = search(st, size, start, end, &obs);
            assert_eq!(a, b, "{st}");
            assert_valid_path(&a, size, start, end, &obs);
        }
    }

    #[test]
    fn optimal_strategies_agree_on_length() {
        let size = GridSize::new(10, 10);
        let obs = blocked(&[
            (0, 3),
            (1, 3),
            (2, 3),
            (3, 3),
            (4, 3),
            (5, 3),
            (6, 3),
            (8, 3),
            (9, 3),
            (2, 6),
            (3, 6),
            (4, 6),
            (5, 6),
            (6, 6),
            (7, 6),
            (8, 6),
            (9, 6),
        ]);
        let (start, end) = (Cell::new(0, 0), Cell::new(9, 9));
        let bfs = search(Strategy::Bfs, size, start, end, &obs);
        let dij = search(Strategy::Dijkstra, size, start, end, &obs);
        let ast = search(Strategy::Astar, size, start, end, &obs);
        assert!(bfs.is_found());
        assert_eq!(ast.cost(), bfs.cost());
        assert_eq!(dij.cost(), bfs.cost());
        // Down to the gap at (7, 3), up over the second wall, down to the goal.
        assert_eq!(bfs.cost(), Some(30));
    }

    #[test]
    fn obstacle_collections_are_interchangeable() {
        let size = GridSize::new(4, 4);
        let walls = cells(&[(1, 0), (1, 1), (1, 2), (3, 1), (2, 3)]);
        let hs = blocked(&[(1, 0), (1, 1), (1, 2), (3, 1), (2, 3)]);
        let bs: BTreeSet<Cell> = walls.iter().copied().collect();
        let (start, end) = (Cell::new(0, 0), Cell::new(3, 0));
        for st in Strategy::ALL {
            let a = search(st, size, start, end, &walls);
            let b = search(st, size, start, end, &hs);
            let c = search(st, size, start, end, &bs);
            assert_eq!(a, b, "{st}");
            assert_eq!(a, c, "{st}");
        }
    }
}
