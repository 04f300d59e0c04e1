//! Search strategies for obstacle grids.
//!
//! Every strategy takes grid dimensions, a start cell, a goal cell and an
//! obstacle set, and returns a [`SearchResult`]: the path from start to goal
//! (empty if unreachable) plus the ordered trace of cells the search
//! expanded. The trace order is part of the output and is reproducible.
//!
//! | Strategy | Function | Frontier | Shortest path |
//! |---|---|---|---|
//! | Uniform-cost | [`dijkstra`] | min-heap on `g` | yes |
//! | A\* | [`astar`] | min-heap on `(g + h, g)` | yes |
//! | Breadth-first | [`bfs`] | FIFO queue | yes |
//! | Depth-first | [`dfs`] | LIFO stack | no |
//! | Greedy best-first | [`greedy`] | min-heap on `h` | no |
//!
//! `h` is the [`manhattan`] distance to the goal. Movement is 4-directional
//! with unit cost; neighbours are generated up, down, left, right.
//!
//! All five functions are thin wrappers over [`search`], which runs a single
//! loop parameterised by [`Strategy`]. Each call allocates its own frontier
//! and per-cell maps and shares nothing with other calls, so independent
//! searches may run on different threads.
//!
//! # Admission policies
//!
//! The strategies do not agree on when a popped cell is accepted:
//!
//! - Dijkstra and A\* relax through a distance map and drop a popped cell
//!   that is already finalized or blocked.
//! - BFS marks cells seen when enqueued and accepts every popped cell.
//! - DFS and greedy mark cells seen when pushed and drop a popped cell that
//!   is blocked or already finalized.
//!
//! The difference is observable only when the start cell is itself an
//! obstacle: BFS still expands it, the others produce an empty trace.

mod astar;
mod bfs;
mod dfs;
mod dijkstra;
mod distance;
mod engine;
mod frontier;
mod greedy;
mod result;
mod strategy;

pub use astar::astar;
pub use bfs::bfs;
pub use dfs::dfs;
pub use dijkstra::dijkstra;
pub use distance::manhattan;
pub use engine::{UNREACHABLE, search};
pub use greedy::greedy;
pub use result::SearchResult;
pub use strategy::{Strategy, UnknownStrategy};

pub use gridpath_core::{Cell, GridSize, Obstacles};
