use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use log::LevelFilter;
use maze_solver::{Algorithm, Position, Reconstruction};

#[derive(Parser, Debug)]
#[command(name = "maze-solver")]
#[command(about = "Grid route finder with multiple search strategies")]
pub struct Args {
    /// Sets the logger's verbosity level
    #[arg(short, long, value_name = "VERBOSITY", default_value_t = LevelFilter::Info)]
    pub verbosity: LevelFilter,

    /// Grid file to load (one row per line, 0/. free, 1/# blocked); built-in demo maze if omitted
    #[arg(short, long, value_name = "FILE")]
    pub grid: Option<PathBuf>,

    /// Start cell as ROW,COL
    #[arg(short, long, value_name = "ROW,COL", default_value = "0,0")]
    pub start: Position,

    /// Goal cell as ROW,COL (defaults to the bottom-right corner)
    #[arg(short = 'e', long, value_name = "ROW,COL")]
    pub goal: Option<Position>,

    /// How the path is rebuilt once the goal is reached
    #[arg(short, long, value_enum, default_value_t = PathTracking::Carried)]
    pub reconstruction: PathTracking,

    /// Disable colored grid output
    #[arg(long)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run a single search and draw the result
    Solve {
        /// Search algorithm to use; prompts with a menu if omitted
        #[arg(value_enum)]
        algorithm: Option<PathfindingAlgorithm>,
    },

    /// Run every algorithm on the same grid and compare them
    Benchmark,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PathfindingAlgorithm {
    /// Breadth-First Search
    #[value(name = "bfs")]
    #[allow(clippy::upper_case_acronyms)]
    BFS,

    /// Depth-First Search
    #[value(name = "dfs")]
    #[allow(clippy::upper_case_acronyms)]
    DFS,

    /// A* algorithm with Manhattan distance heuristic
    #[value(name = "astar", alias = "a-star")]
    AStar,

    /// Greedy Best-First Search with Manhattan distance heuristic
    #[value(name = "greedy")]
    Greedy,
}

impl From<PathfindingAlgorithm> for Algorithm {
    fn from(algorithm: PathfindingAlgorithm) -> Self {
        match algorithm {
            PathfindingAlgorithm::BFS => Self::Bfs,
            PathfindingAlgorithm::DFS => Self::Dfs,
            PathfindingAlgorithm::AStar => Self::AStar,
            PathfindingAlgorithm::Greedy => Self::Greedy,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PathTracking {
    /// Every frontier entry carries its full path
    Carried,

    /// Walk a predecessor map back from the goal
    Predecessors,
}

impl From<PathTracking> for Reconstruction {
    fn from(tracking: PathTracking) -> Self {
        match tracking {
            PathTracking::Carried => Self::CarriedPath,
            PathTracking::Predecessors => Self::Predecessors,
        }
    }
}
