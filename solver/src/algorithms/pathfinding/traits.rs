use crate::maze::{Path, Position};

/// Bookkeeping that turns a finished search back into a [`Path`].
///
/// Each frontier entry carries a `Trail`. The search calls [`record`] exactly
/// once per cell, when that cell is first expanded, and [`finish`] with the
/// trail of the entry that reached the goal.
///
/// [`record`]: PathTracker::record
/// [`finish`]: PathTracker::finish
pub trait PathTracker {
    type Trail;

    fn root(&mut self, start: Position) -> Self::Trail;

    fn extend(&mut self, trail: &Self::Trail, from: Position, to: Position) -> Self::Trail;

    fn record(&mut self, position: Position, trail: &Self::Trail);

    fn finish(self, goal: Position, trail: Self::Trail) -> Path;
}
