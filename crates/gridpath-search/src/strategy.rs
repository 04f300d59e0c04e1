use std::fmt;
use std::str::FromStr;

/// The search strategy to run.
///
/// Besides naming an algorithm, a strategy decides the three things the
/// shared search loop needs to know: which frontier to use, how heap entries
/// are keyed, and how popped and discovered cells are admitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Strategy {
    /// Uniform-cost search.
    Dijkstra,
    /// A\* with the Manhattan heuristic.
    Astar,
    /// Breadth-first search.
    Bfs,
    /// Depth-first search.
    Dfs,
    /// Greedy best-first search on the Manhattan heuristic alone.
    Greedy,
}

/// Frontier data structure backing a strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FrontierKind {
    Heap,
    Fifo,
    Lifo,
}

/// How the search loop decides which cells enter and leave the frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Admission {
    /// Distance map relaxation. A neighbour is pushed whenever its distance
    /// strictly improves; a popped cell is dropped if finalized or blocked.
    Relax,
    /// One-shot seen set. A neighbour is pushed once; every popped cell is
    /// accepted.
    SeenOnce,
    /// One-shot seen set, and a popped cell is dropped if blocked or
    /// finalized.
    SeenOnceSkip,
}

impl Strategy {
    /// All strategies, in presentation order.
    pub const ALL: [Strategy; 5] = [
        Strategy::Dijkstra,
        Strategy::Astar,
        Strategy::Bfs,
        Strategy::Dfs,
        Strategy::Greedy,
    ];

    /// Lowercase wire name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Self::Dijkstra => "dijkstra",
            Self::Astar => "astar",
            Self::Bfs => "bfs",
            Self::Dfs => "dfs",
            Self::Greedy => "greedy",
        }
    }

    /// One-sentence summary of how the strategy explores the grid.
    pub const fn description(self) -> &'static str {
        match self {
            Self::Dijkstra => {
                "Expands the cell with the lowest cost so far; always finds a shortest path."
            }
            Self::Astar => {
                "Expands the cell with the lowest cost so far plus estimated cost to the goal; \
                 finds a shortest path because the estimate never overshoots."
            }
            Self::Bfs => {
                "Expands cells ring by ring outward from the start; finds a path with the fewest moves."
            }
            Self::Dfs => {
                "Follows one branch as far as it goes before backtracking; the path can be long."
            }
            Self::Greedy => {
                "Expands the cell that looks closest to the goal, ignoring the cost so far; \
                 fast, but the path can be long."
            }
        }
    }

    /// Whether the strategy always returns a minimum-length path.
    pub const fn is_optimal(self) -> bool {
        matches!(self, Self::Dijkstra | Self::Astar | Self::Bfs)
    }

    pub(crate) const fn frontier(self) -> FrontierKind {
        match self {
            Self::Dijkstra | Self::Astar | Self::Greedy => FrontierKind::Heap,
            Self::Bfs => FrontierKind::Fifo,
            Self::Dfs => FrontierKind::Lifo,
        }
    }

    pub(crate) const fn admission(self) -> Admission {
        match self {
            Self::Dijkstra | Self::Astar => Admission::Relax,
            Self::Bfs => Admission::SeenOnce,
            Self::Dfs | Self::Greedy => Admission::SeenOnceSkip,
        }
    }

    /// Heap key for a cell reached at cost `g` with heuristic `h`.
    ///
    /// Keys compare lexicographically and the cell breaks remaining ties.
    /// Only meaningful for heap-backed strategies.
    #[inline]
    pub(crate) const fn key(self, g: i32, h: i32) -> (i32, i32) {
        match self {
            Self::Astar => (g + h, g),
            Self::Greedy => (h, 0),
            Self::Dijkstra | Self::Bfs | Self::Dfs => (g, 0),
        }
    }

    /// Whether [`key`](Self::key) reads the heuristic.
    #[inline]
    pub(crate) const fn uses_heuristic(self) -> bool {
        matches!(self, Self::Astar | Self::Greedy)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|st| st.name() == s)
            .ok_or_else(|| UnknownStrategy(s.to_string()))
    }
}

/// Returned when parsing a name that matches no [`Strategy`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStrategy(pub String);

impl fmt::Display for UnknownStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown search strategy \u{201c}{}\u{201d} (expected one of dijkstra, astar, bfs, dfs, greedy)",
            self.0
        )
    }
}

impl std::error::Error for UnknownStrategy {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for st in Strategy::ALL {
            assert_eq!(st.to_string().parse::<Strategy>(), Ok(st));
        }
    }

    #[test]
    fn unknown_name() {
        let err = "bellman-ford".parse::<Strategy>().unwrap_err();
        assert_eq!(err, UnknownStrategy("bellman-ford".into()));
        assert!(err.to_string().contains("bellman-ford"));
        // Names are case sensitive.
        assert!("BFS".parse::<Strategy>().is_err());
    }

    #[test]
    fn capability_table() {
        use Admission::*;
        use FrontierKind::*;
        let table: Vec<_> = Strategy::ALL
            .iter()
            .map(|s| (s.frontier(), s.admission()))
            .collect();
        assert_eq!(
            table,
            vec![
                (Heap, Relax),
                (Heap, Relax),
                (Fifo, SeenOnce),
                (Lifo, SeenOnceSkip),
                (Heap, SeenOnceSkip),
            ]
        );
    }

    #[test]
    fn keys() {
        assert_eq!(Strategy::Dijkstra.key(3, 9), (3, 0));
        assert_eq!(Strategy::Astar.key(3, 9), (12, 3));
        assert_eq!(Strategy::Greedy.key(3, 9), (9, 0));
    }

    #[test]
    fn optimality() {
        let optimal: Vec<_> = Strategy::ALL.into_iter().filter(|s| s.is_optimal()).collect();
        assert_eq!(optimal, vec![Strategy::Dijkstra, Strategy::Astar, Strategy::Bfs]);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn wire_names_match_display() {
        for st in Strategy::ALL {
            let json = serde_json::to_string(&st).unwrap();
            assert_eq!(json, format!("\"{st}\""));
            let back: Strategy = serde_json::from_str(&json).unwrap();
            assert_eq!(back, st);
        }
    }
}
