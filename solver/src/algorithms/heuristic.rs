use crate::maze::Position;

/// Manhattan distance between two cells.
///
/// Admissible and consistent for 4-directional unit-cost moves, which A*
/// needs to stay optimal.
pub fn manhattan(a: Position, b: Position) -> usize {
    a.manhattan_distance(b)
}
