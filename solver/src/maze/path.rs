use std::fmt;

use super::{direction::MoveDirection, grid::Grid, position::Position};

/// Ordered cells from start to goal, both inclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path(Vec<Position>);

impl Path {
    pub(crate) fn new(cells: Vec<Position>) -> Self {
        debug_assert!(!cells.is_empty());
        Self(cells)
    }

    pub fn cells(&self) -> &[Position] {
        &self.0
    }

    pub fn start(&self) -> Position {
        self.0[0]
    }

    pub fn goal(&self) -> Position {
        self.0[self.0.len() - 1]
    }

    /// number of edges, one less than the number of cells
    pub fn steps(&self) -> usize {
        self.0.len() - 1
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }

    pub fn directions(&self) -> Vec<MoveDirection> {
        self.0
            .windows(2)
            .filter_map(|pair| pair[0].direction_to(pair[1]))
            .collect()
    }

    /// every cell free and every consecutive pair 4-adjacent
    pub fn is_valid_on(&self, grid: &Grid) -> bool {
        self.0.iter().all(|&p| grid.is_free(p))
            && self
                .0
                .windows(2)
                .all(|pair| pair[0].direction_to(pair[1]).is_some())
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, pos) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{pos}")?;
        }
        Ok(())
    }
}
