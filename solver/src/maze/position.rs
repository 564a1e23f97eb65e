use std::fmt;
use std::str::FromStr;

use super::direction::MoveDirection;

/// a (row, col) coordinate on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn to_index(self, width: usize) -> usize {
        self.row * width + self.col
    }

    pub fn from_index(index: usize, width: usize) -> Self {
        Self::new(index / width, index % width)
    }

    pub fn manhattan_distance(self, other: Self) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    pub fn move_in_direction(
        self,
        direction: MoveDirection,
        bounds: (usize, usize),
    ) -> Option<Self> {
        let (height, width) = bounds;
        match direction {
            MoveDirection::Up if self.row > 0 => Some(Self::new(self.row - 1, self.col)),
            MoveDirection::Down if self.row + 1 < height => Some(Self::new(self.row + 1, self.col)),
            MoveDirection::Left if self.col > 0 => Some(Self::new(self.row, self.col - 1)),
            MoveDirection::Right if self.col + 1 < width => Some(Self::new(self.row, self.col + 1)),
            _ => None,
        }
    }

    /// in-bounds neighbors in `MoveDirection::ALL` order, occupancy ignored
    pub fn neighbors(self, bounds: (usize, usize)) -> Vec<(Self, MoveDirection)> {
        MoveDirection::ALL
            .into_iter()
            .filter_map(|dir| self.move_in_direction(dir, bounds).map(|pos| (pos, dir)))
            .collect()
    }

    /// direction of a single step from `self` to `other`, if they are adjacent
    pub fn direction_to(self, other: Self) -> Option<MoveDirection> {
        if self.col == other.col {
            if other.row + 1 == self.row {
                return Some(MoveDirection::Up);
            }
            if self.row + 1 == other.row {
                return Some(MoveDirection::Down);
            }
        } else if self.row == other.row {
            if other.col + 1 == self.col {
                return Some(MoveDirection::Left);
            }
            if self.col + 1 == other.col {
                return Some(MoveDirection::Right);
            }
        }
        None
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid position {0:?}: expected ROW,COL")]
pub struct ParsePositionError(String);

impl FromStr for Position {
    type Err = ParsePositionError;

    /// accepts `r,c` with optional surrounding parentheses and spaces
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParsePositionError(s.to_string());
        let inner = s.trim().trim_start_matches('(').trim_end_matches(')');
        let (row, col) = inner.split_once(',').ok_or_else(err)?;
        let row = row.trim().parse().map_err(|_| err())?;
        let col = col.trim().parse().map_err(|_| err())?;
        Ok(Self::new(row, col))
    }
}
