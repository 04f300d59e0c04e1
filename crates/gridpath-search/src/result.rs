use gridpath_core::Cell;

/// Output of a search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    /// Cells from start to goal, both included. Empty if the goal was not
    /// reached.
    pub path: Vec<Cell>,
    /// Cells in the order they were expanded. The goal itself is never
    /// expanded and so never appears here.
    pub visited: Vec<Cell>,
}

impl SearchResult {
    /// Whether a path to the goal was found.
    #[inline]
    pub fn is_found(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of moves along the path, or `None` if no path was found.
    #[inline]
    pub fn cost(&self) -> Option<usize> {
        self.path.len().checked_sub(1)
    }

    /// Split into `(path, visited)`.
    #[inline]
    pub fn into_parts(self) -> (Vec<Cell>, Vec<Cell>) {
        (self.path, self.visited)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cost_counts_moves() {
        let res = SearchResult {
            path: vec![Cell::new(0, 0), Cell::new(0, 1), Cell::new(1, 1)],
            visited: vec![Cell::new(0, 0), Cell::new(0, 1)],
        };
        assert!(res.is_found());
        assert_eq!(res.cost(), Some(2));
        let (path, visited) = res.into_parts();
        assert_eq!(path.len(), 3);
        assert_eq!(visited.len(), 2);
    }

    #[test]
    fn empty_result() {
        let res = SearchResult::default();
        assert!(!res.is_found());
        assert_eq!(res.cost(), None);
    }
}
