use std::str::FromStr;

use super::{cell::Cell, direction::MoveDirection, position::Position};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("grid has no cells")]
    Empty,

    #[error("malformed grid: row {row} has {found} cells, expected {expected}")]
    Malformed {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("grid dimensions {height}x{width} overflow the cell count")]
    TooLarge { height: usize, width: usize },

    #[error("grid size mismatch: expected {expected} cells, got {found}")]
    SizeMismatch { expected: usize, found: usize },

    #[error("invalid cell {symbol:?} at ({row}, {col})")]
    InvalidCell { row: usize, col: usize, symbol: char },
}

/// Rectangular, immutable occupancy map.
///
/// Cells are stored row-major. Dimensions are fixed at construction and
/// both are at least one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    width: usize,
    height: usize,
}

impl Grid {
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);

        if height == 0 || width == 0 {
            return Err(GridError::Empty);
        }

        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != width)
        {
            return Err(GridError::Malformed {
                row,
                expected: width,
                found,
            });
        }

        Ok(Self {
            cells: rows.into_iter().flatten().collect(),
            width,
            height,
        })
    }

    pub fn from_flattened(cells: Vec<Cell>, height: usize, width: usize) -> Result<Self, GridError> {
        if height == 0 || width == 0 {
            return Err(GridError::Empty);
        }

        let expected = height
            .checked_mul(width)
            .ok_or(GridError::TooLarge { height, width })?;

        if cells.len() != expected {
            return Err(GridError::SizeMismatch {
                expected,
                found: cells.len(),
            });
        }

        Ok(Self {
            cells,
            width,
            height,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn bounds(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.height && pos.col < self.width
    }

    pub fn get(&self, pos: Position) -> Option<Cell> {
        if self.contains(pos) {
            Some(self.cells[pos.to_index(self.width)])
        } else {
            None
        }
    }

    /// false when out of bounds or blocked
    pub fn is_free(&self, pos: Position) -> bool {
        self.get(pos).is_some_and(Cell::is_walkable)
    }

    /// Free, in-bounds cells adjacent to `pos`, in `MoveDirection::ALL` order.
    ///
    /// The order never changes between calls; search tie-breaking relies on it.
    pub fn neighbors(&self, pos: Position) -> Vec<(Position, MoveDirection)> {
        pos.neighbors(self.bounds())
            .into_iter()
            .filter(|(p, _)| self.is_free(*p))
            .collect()
    }

    pub fn free_cells(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_walkable())
            .map(|(idx, _)| Position::from_index(idx, self.width))
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width)
    }
}

impl FromStr for Grid {
    type Err = GridError;

    /// One row per line; `0`/`.` is free, `1`/`#` is blocked. Whitespace
    /// inside a row and blank lines are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .lines()
            .filter(|line| !line.trim().is_empty())
            .enumerate()
            .map(|(row, line)| {
                line.chars()
                    .filter(|c| !c.is_whitespace())
                    .enumerate()
                    .map(|(col, symbol)| {
                        Cell::from_symbol(symbol).ok_or(GridError::InvalidCell { row, col, symbol })
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_rows(rows)
    }
}
