pub mod frontier;
pub mod heuristic;
pub mod pathfinding;
