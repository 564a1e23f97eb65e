mod cell;
mod direction;
mod grid;
mod path;
mod position;

pub use cell::Cell;
pub use direction::MoveDirection;
pub use grid::{Grid, GridError};
pub use path::Path;
pub use position::{ParsePositionError, Position};
