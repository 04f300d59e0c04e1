use gridpath_core::Cell;

/// Manhattan (L1) distance between two cells.
///
/// This is the exact step count on an open 4-connected grid, so it never
/// overestimates and is consistent for unit edge costs.
#[inline]
pub fn manhattan(a: Cell, b: Cell) -> i32 {
    (a.row - b.row).abs() + (a.col - b.col).abs()
}
