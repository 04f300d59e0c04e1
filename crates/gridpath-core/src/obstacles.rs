//! The [`Obstacles`] lookup trait.

use std::collections::{BTreeSet, HashSet};
use std::hash::BuildHasher;

use crate::geom::Cell;

/// A set of blocked cells.
///
/// Searches only ever ask whether a single cell is blocked, so any
/// collection with a membership test can serve as the obstacle set.
pub trait Obstacles {
    /// Whether `c` is excluded from traversal.
    fn is_blocked(&self, c: Cell) -> bool;
}

impl<S: BuildHasher> Obstacles for HashSet<Cell, S> {
    #[inline]
    fn is_blocked(&self, c: Cell) -> bool {
        self.contains(&c)
    }
}

impl Obstacles for BTreeSet<Cell> {
    #[inline]
    fn is_blocked(&self, c: Cell) -> bool {
        self.contains(&c)
    }
}

/// Linear scan; fine for the handful of walls a test or demo uses.
impl Obstacles for [Cell] {
    #[inline]
    fn is_blocked(&self, c: Cell) -> bool {
        self.contains(&c)
    }
}

impl Obstacles for Vec<Cell> {
    #[inline]
    fn is_blocked(&self, c: Cell) -> bool {
        self.as_slice().is_blocked(c)
    }
}

impl<T: Obstacles + ?Sized> Obstacles for &T {
    #[inline]
    fn is_blocked(&self, c: Cell) -> bool {
        (**self).is_blocked(c)
    }
}
