use std::collections::HashSet;
use std::fmt;
use std::time::Duration;

use crate::maze::{Path, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    Goal,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Start => "start",
            Self::Goal => "goal",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointProblem {
    OutOfBounds,
    Blocked,
}

impl fmt::Display for EndpointProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::OutOfBounds => "outside the grid",
            Self::Blocked => "on a blocked cell",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("invalid {role} {position}: {reason}")]
    InvalidEndpoint {
        role: Endpoint,
        position: Position,
        reason: EndpointProblem,
    },

    #[error("unknown algorithm {0:?} (expected bfs, dfs, astar, greedy or 1-4)")]
    UnknownAlgorithm(String),
}

/// Result of a completed search. Unreachable goals are a normal outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Found(Path),
    NotFound,
}

impl Outcome {
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Found(path) => Some(path),
            Self::NotFound => None,
        }
    }

    pub fn into_path(self) -> Option<Path> {
        match self {
            Self::Found(path) => Some(path),
            Self::NotFound => None,
        }
    }
}

/// Outcome plus the bookkeeping of the search that produced it.
#[derive(Debug, Clone)]
pub struct SearchReport {
    pub outcome: Outcome,
    /// cells expanded during the search; the goal is never in here
    pub visited: HashSet<Position>,
    /// total frontier pushes, start included
    pub pushed: usize,
    pub planning_time: Duration,
}

impl SearchReport {
    pub fn expanded(&self) -> usize {
        self.visited.len()
    }

    pub fn steps(&self) -> Option<usize> {
        self.outcome.path().map(Path::steps)
    }
}
