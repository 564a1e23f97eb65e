/// occupancy state of a single grid square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Free,
    Blocked,
}

impl Cell {
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            '0' | '.' => Some(Self::Free),
            '1' | '#' => Some(Self::Blocked),
            _ => None,
        }
    }

    pub fn is_walkable(self) -> bool {
        matches!(self, Self::Free)
    }
}
