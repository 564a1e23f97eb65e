use std::fmt;
use std::str::FromStr;

use crate::algorithms::heuristic;
use crate::maze::Position;

use super::types::SearchError;

/// The four interchangeable search strategies.
///
/// Each one is a frontier policy plus a key function; the traversal loop
/// itself is shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// breadth-first, FIFO frontier
    Bfs,
    /// depth-first, LIFO frontier
    Dfs,
    /// A*, priority = steps + Manhattan estimate
    AStar,
    /// greedy best-first, priority = Manhattan estimate
    Greedy,
}

impl Algorithm {
    pub fn all() -> impl Iterator<Item = Self> {
        [Self::Bfs, Self::Dfs, Self::AStar, Self::Greedy].into_iter()
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Bfs => "BFS",
            Self::Dfs => "DFS",
            Self::AStar => "A*",
            Self::Greedy => "Greedy Best-First",
        }
    }

    /// whether the returned path is guaranteed shortest
    pub fn is_optimal(&self) -> bool {
        matches!(self, Self::Bfs | Self::AStar)
    }

    /// frontier key for an entry that reached `position` in `steps` moves
    pub(crate) fn priority(&self, steps: usize, position: Position, goal: Position) -> usize {
        match self {
            Self::Bfs | Self::Dfs => 0,
            Self::AStar => steps + heuristic::manhattan(position, goal),
            Self::Greedy => heuristic::manhattan(position, goal),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SearchError;

    /// accepts the short names and the menu numbers 1-4
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1" | "bfs" => Ok(Self::Bfs),
            "2" | "dfs" => Ok(Self::Dfs),
            "3" | "astar" | "a-star" | "a*" => Ok(Self::AStar),
            "4" | "greedy" | "gbfs" => Ok(Self::Greedy),
            _ => Err(SearchError::UnknownAlgorithm(s.trim().to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_and_menu_numbers() {
        assert_eq!("1".parse::<Algorithm>(), Ok(Algorithm::Bfs));
        assert_eq!(" DFS ".parse::<Algorithm>(), Ok(Algorithm::Dfs));
        assert_eq!("a-star".parse::<Algorithm>(), Ok(Algorithm::AStar));
        assert_eq!("4".parse::<Algorithm>(), Ok(Algorithm::Greedy));
    }

    #[test]
    fn unknown_selection_is_an_error() {
        assert_eq!(
            "5".parse::<Algorithm>(),
            Err(SearchError::UnknownAlgorithm("5".to_string()))
        );
        assert!("".parse::<Algorithm>().is_err());
    }

    #[test]
    fn priorities_per_policy() {
        let goal = Position::new(4, 4);
        let here = Position::new(1, 2);
        assert_eq!(Algorithm::Bfs.priority(3, here, goal), 0);
        assert_eq!(Algorithm::Dfs.priority(3, here, goal), 0);
        assert_eq!(Algorithm::AStar.priority(3, here, goal), 8);
        assert_eq!(Algorithm::Greedy.priority(3, here, goal), 5);
    }

    #[test]
    fn all_lists_each_variant_once() {
        let all: Vec<_> = Algorithm::all().collect();
        assert_eq!(
            all,
            vec![Algorithm::Bfs, Algorithm::Dfs, Algorithm::AStar, Algorithm::Greedy]
        );
    }
}
