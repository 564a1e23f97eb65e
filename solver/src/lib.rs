//! Grid route finding with four interchangeable strategies: breadth-first,
//! depth-first, A* and greedy best-first.
//!
//! ```
//! use maze_solver::{Algorithm, Grid, Position, search};
//!
//! let grid: Grid = "00\n00".parse().unwrap();
//! let path = search(&grid, Position::new(0, 0), Position::new(1, 1), Algorithm::Bfs)
//!     .unwrap()
//!     .into_path()
//!     .unwrap();
//! assert_eq!(path.steps(), 2);
//! ```

pub mod algorithms;
pub mod maze;
pub mod render;

pub use algorithms::pathfinding::{
    Algorithm, Endpoint, EndpointProblem, Outcome, Reconstruction, SearchError, SearchReport,
    search, search_with,
};
pub use maze::{Cell, Grid, GridError, MoveDirection, Path, Position};
