//! **gridpath-core** — value types shared by the gridpath crates.
//!
//! This crate provides the geometry primitives the search engine works on:
//! [`Cell`] coordinates, [`GridSize`] dimensions with bounds checks and flat
//! indexing, and the [`Obstacles`] lookup trait that lets callers keep their
//! blocked cells in whatever collection suits them.

pub mod geom;
pub mod obstacles;

pub use geom::{Cell, GridSize, GridSizeIter, ParseCellError};
pub use obstacles::Obstacles;
