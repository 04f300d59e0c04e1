//! Geometry primitives: [`Cell`] and [`GridSize`].
//!
//! Coordinates are `(row, col)` pairs, 0-indexed from the top-left corner.
//! Rows grow down, columns grow right.

use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Cell
// ---------------------------------------------------------------------------

/// A grid coordinate.
///
/// Cells order lexicographically by `(row, col)`. Search frontiers rely on
/// this order as their last tie-break, so it must not change.
///
/// With the `serde` feature a cell is encoded as a `[row, col]` pair.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "(i32, i32)", into = "(i32, i32)"))]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    /// Top-left corner (0, 0).
    pub const ORIGIN: Self = Self { row: 0, col: 0 };

    /// Create a new cell.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a cell shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// The four orthogonal neighbours in the order up, down, left, right.
    ///
    /// Depth-first and breadth-first traces depend on this order.
    #[inline]
    pub const fn neighbors_4(self) -> [Cell; 4] {
        [
            self.shift(-1, 0),
            self.shift(1, 0),
            self.shift(0, -1),
            self.shift(0, 1),
        ]
    }

    /// Whether `other` is exactly one orthogonal step away.
    #[inline]
    pub fn is_adjacent(self, other: Cell) -> bool {
        (self.row - other.row).abs() + (self.col - other.col).abs() == 1
    }
}

impl From<(i32, i32)> for Cell {
    #[inline]
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl From<Cell> for (i32, i32) {
    #[inline]
    fn from(c: Cell) -> Self {
        (c.row, c.col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Parses the `"row,col"` wire form. Whitespace around either number is
/// accepted.
impl FromStr for Cell {
    type Err = ParseCellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((r, c)) = s.split_once(',') else {
            return Err(ParseCellError::MissingSeparator(s.to_string()));
        };
        let row = r
            .trim()
            .parse()
            .map_err(|_| ParseCellError::InvalidNumber(s.to_string()))?;
        let col = c
            .trim()
            .parse()
            .map_err(|_| ParseCellError::InvalidNumber(s.to_string()))?;
        Ok(Self::new(row, col))
    }
}

/// Errors that can occur when parsing a [`Cell`] from `"row,col"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseCellError {
    /// No comma between the two coordinates.
    MissingSeparator(String),
    /// One of the coordinates is not an integer.
    InvalidNumber(String),
}

impl fmt::Display for ParseCellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSeparator(s) => write!(f, "cell \u{201c}{s}\u{201d}: expected \"row,col\""),
            Self::InvalidNumber(s) => write!(f, "cell \u{201c}{s}\u{201d}: coordinates must be integers"),
        }
    }
}

impl std::error::Error for ParseCellError {}

// ---------------------------------------------------------------------------
// GridSize
// ---------------------------------------------------------------------------

/// Dimensions of a rectangular grid covering `[0, rows) × [0, cols)`.
///
/// Non-positive dimensions describe an empty grid that contains no cells.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridSize {
    pub rows: i32,
    pub cols: i32,
}

impl GridSize {
    /// Create new grid dimensions.
    #[inline]
    pub const fn new(rows: i32, cols: i32) -> Self {
        Self { rows, cols }
    }

    /// Total number of cells.
    #[inline]
    pub fn len(self) -> usize {
        if self.is_empty() {
            return 0;
        }
        (self.rows as usize) * (self.cols as usize)
    }

    /// Whether the grid has zero or negative area.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.rows <= 0 || self.cols <= 0
    }

    /// Whether `c` is inside the grid.
    #[inline]
    pub fn contains(self, c: Cell) -> bool {
        c.row >= 0 && c.row < self.rows && c.col >= 0 && c.col < self.cols
    }

    /// Row-major flat index of `c`, or `None` if out of bounds.
    #[inline]
    pub fn index(self, c: Cell) -> Option<usize> {
        if !self.contains(c) {
            return None;
        }
        Some(c.row as usize * self.cols as usize + c.col as usize)
    }

    /// Convert a flat index back to a [`Cell`].
    ///
    /// The index must come from [`index`](Self::index) on the same grid.
    #[inline]
    pub fn cell(self, idx: usize) -> Cell {
        let cols = self.cols.max(1) as usize;
        Cell::new((idx / cols) as i32, (idx % cols) as i32)
    }

    /// Row-major iterator over every cell of the grid.
    #[inline]
    pub fn iter(self) -> GridSizeIter {
        GridSizeIter {
            size: self,
            cur: Cell::ORIGIN,
        }
    }
}

impl IntoIterator for GridSize {
    type Item = Cell;
    type IntoIter = GridSizeIter;
    #[inline]
    fn into_iter(self) -> GridSizeIter {
        self.iter()
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// Row-major iterator over the cells of a [`GridSize`].
#[derive(Clone, Debug)]
pub struct GridSizeIter {
    size: GridSize,
    cur: Cell,
}

impl Iterator for GridSizeIter {
    type Item = Cell;

    fn next(&mut self) -> Option<Cell> {
        if self.size.is_empty() || self.cur.row >= self.size.rows {
            return None;
        }
        let c = self.cur;
        self.cur.col += 1;
        if self.cur.col >= self.size.cols {
            self.cur.col = 0;
            self.cur.row += 1;
        }
        Some(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_order_is_row_major() {
        let mut cells = vec![Cell::new(1, 0), Cell::new(0, 2), Cell::new(0, 1)];
        cells.sort();
        assert_eq!(cells, vec![Cell::new(0, 1), Cell::new(0, 2), Cell::new(1, 0)]);
    }

    #[test]
    fn neighbors_order() {
        let n = Cell::new(5, 5).neighbors_4();
        assert_eq!(
            n,
            [Cell::new(4, 5), Cell::new(6, 5), Cell::new(5, 4), Cell::new(5, 6)]
        );
        assert!(n.iter().all(|&c| c.is_adjacent(Cell::new(5, 5))));
        assert!(!Cell::new(0, 0).is_adjacent(Cell::new(1, 1)));
        assert!(!Cell::new(0, 0).is_adjacent(Cell::new(0, 0)));
    }

    #[test]
    fn parse_cell() {
        assert_eq!("3,4".parse::<Cell>(), Ok(Cell::new(3, 4)));
        assert_eq!(" 3 , 4 ".parse::<Cell>(), Ok(Cell::new(3, 4)));
        assert!(matches!(
            "34".parse::<Cell>(),
            Err(ParseCellError::MissingSeparator(_))
        ));
        assert!(matches!(
            "a,4".parse::<Cell>(),
            Err(ParseCellError::InvalidNumber(_))
        ));
    }

    #[test]
    fn display() {
        assert_eq!(Cell::new(2, 7).to_string(), "(2, 7)");
        assert_eq!(GridSize::new(3, 4).to_string(), "3x4");
    }

    #[test]
    fn grid_contains_and_len() {
        let g = GridSize::new(3, 4);
        assert_eq!(g.len(), 12);
        assert!(g.contains(Cell::new(2, 3)));
        assert!(!g.contains(Cell::new(3, 0)));
        assert!(!g.contains(Cell::new(0, 4)));
        assert!(!g.contains(Cell::new(-1, 0)));
        assert_eq!(GridSize::new(0, 5).len(), 0);
        assert_eq!(GridSize::new(-2, 5).len(), 0);
    }

    #[test]
    fn index_round_trip() {
        let g = GridSize::new(3, 4);
        for (i, c) in g.iter().enumerate() {
            assert_eq!(g.index(c), Some(i));
            assert_eq!(g.cell(i), c);
        }
        assert_eq!(g.index(Cell::new(0, 4)), None);
    }

    #[test]
    fn iter_row_major() {
        let cells: Vec<_> = GridSize::new(2, 2).into_iter().collect();
        assert_eq!(
            cells,
            vec![Cell::new(0, 0), Cell::new(0, 1), Cell::new(1, 0), Cell::new(1, 1)]
        );
        assert_eq!(GridSize::new(0, 3).iter().count(), 0);
    }
}
