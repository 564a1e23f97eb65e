use std::collections::HashMap;

use crate::maze::{Path, Position};

use super::traits::PathTracker;

/// how a search rebuilds its path once the goal is popped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reconstruction {
    /// every frontier entry owns its full path so far
    #[default]
    CarriedPath,
    /// entries hold only their parent; a predecessor map is walked back from the goal
    Predecessors,
}

pub struct CarriedPath;

impl PathTracker for CarriedPath {
    type Trail = Vec<Position>;

    fn root(&mut self, start: Position) -> Self::Trail {
        vec![start]
    }

    fn extend(&mut self, trail: &Self::Trail, _from: Position, to: Position) -> Self::Trail {
        let mut next = Vec::with_capacity(trail.len() + 1);
        next.extend_from_slice(trail);
        next.push(to);
        next
    }

    fn record(&mut self, _position: Position, _trail: &Self::Trail) {}

    fn finish(self, _goal: Position, trail: Self::Trail) -> Path {
        Path::new(trail)
    }
}

#[derive(Default)]
pub struct Predecessors {
    came_from: HashMap<Position, Position>,
}

impl PathTracker for Predecessors {
    type Trail = Option<Position>;

    fn root(&mut self, _start: Position) -> Self::Trail {
        None
    }

    fn extend(&mut self, _trail: &Self::Trail, from: Position, _to: Position) -> Self::Trail {
        Some(from)
    }

    fn record(&mut self, position: Position, trail: &Self::Trail) {
        // only reached on first expansion, so later parents never overwrite
        if let Some(parent) = *trail {
            self.came_from.entry(position).or_insert(parent);
        }
    }

    fn finish(self, goal: Position, trail: Self::Trail) -> Path {
        let mut cells = vec![goal];
        let mut current = trail;

        while let Some(prev) = current {
            cells.push(prev);
            current = self.came_from.get(&prev).copied();
        }

        cells.reverse();
        Path::new(cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(row: usize, col: usize) -> Position {
        Position::new(row, col)
    }

    #[test]
    fn carried_path_appends_each_step() {
        let mut tracker = CarriedPath;
        let root = tracker.root(p(0, 0));
        let one = tracker.extend(&root, p(0, 0), p(0, 1));
        let two = tracker.extend(&one, p(0, 1), p(1, 1));
        assert_eq!(root, vec![p(0, 0)]);
        assert_eq!(tracker.finish(p(1, 1), two).cells(), &[p(0, 0), p(0, 1), p(1, 1)]);
    }

    #[test]
    fn predecessors_walk_back_to_start() {
        let mut tracker = Predecessors::default();
        let root = tracker.root(p(0, 0));
        tracker.record(p(0, 0), &root);
        let one = tracker.extend(&root, p(0, 0), p(0, 1));
        tracker.record(p(0, 1), &one);
        let two = tracker.extend(&one, p(0, 1), p(1, 1));

        assert_eq!(tracker.finish(p(1, 1), two).cells(), &[p(0, 0), p(0, 1), p(1, 1)]);
    }

    #[test]
    fn predecessors_keep_first_recorded_parent() {
        let mut tracker = Predecessors::default();
        tracker.record(p(1, 1), &Some(p(0, 1)));
        tracker.record(p(1, 1), &Some(p(1, 0)));
        tracker.record(p(0, 1), &Some(p(0, 0)));

        let path = tracker.finish(p(2, 1), Some(p(1, 1)));
        assert_eq!(path.cells(), &[p(0, 0), p(0, 1), p(1, 1), p(2, 1)]);
    }

    #[test]
    fn start_equal_to_goal_is_single_cell() {
        let mut tracker = Predecessors::default();
        let root = tracker.root(p(3, 3));
        assert_eq!(tracker.finish(p(3, 3), root).cells(), &[p(3, 3)]);
    }
}
