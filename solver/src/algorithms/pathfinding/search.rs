use std::collections::HashSet;
use std::time::Instant;

use crate::algorithms::frontier::{Fifo, Frontier, Lifo, Priority};
use crate::maze::{Grid, Position};

use super::algorithm::Algorithm;
use super::reconstruction::{CarriedPath, Predecessors, Reconstruction};
use super::traits::PathTracker;
use super::types::{Endpoint, EndpointProblem, Outcome, SearchError, SearchReport};

struct Entry<T> {
    position: Position,
    steps: usize,
    trail: T,
}

/// Find a route from `start` to `goal` with the chosen strategy.
pub fn search(
    grid: &Grid,
    start: Position,
    goal: Position,
    algorithm: Algorithm,
) -> Result<Outcome, SearchError> {
    search_with(grid, start, goal, algorithm, Reconstruction::default()).map(|r| r.outcome)
}

/// Like [`search`], with an explicit reconstruction strategy and the full report.
///
/// Fails before any traversal when either endpoint is out of bounds or blocked.
pub fn search_with(
    grid: &Grid,
    start: Position,
    goal: Position,
    algorithm: Algorithm,
    reconstruction: Reconstruction,
) -> Result<SearchReport, SearchError> {
    check_endpoint(grid, Endpoint::Start, start)?;
    check_endpoint(grid, Endpoint::Goal, goal)?;

    log::debug!("{} search {} -> {} ({:?})", algorithm, start, goal, reconstruction);

    let report = match reconstruction {
        Reconstruction::CarriedPath => dispatch(grid, start, goal, algorithm, CarriedPath),
        Reconstruction::Predecessors => {
            dispatch(grid, start, goal, algorithm, Predecessors::default())
        }
    };

    match &report.outcome {
        Outcome::Found(path) => log::debug!(
            "{} found {} steps, expanded {} cells, pushed {} entries in {:?}",
            algorithm,
            path.steps(),
            report.expanded(),
            report.pushed,
            report.planning_time
        ),
        Outcome::NotFound => log::debug!(
            "{} exhausted frontier after expanding {} cells",
            algorithm,
            report.expanded()
        ),
    }

    Ok(report)
}

fn check_endpoint(grid: &Grid, role: Endpoint, position: Position) -> Result<(), SearchError> {
    let reason = if !grid.contains(position) {
        EndpointProblem::OutOfBounds
    } else if !grid.is_free(position) {
        EndpointProblem::Blocked
    } else {
        return Ok(());
    };

    Err(SearchError::InvalidEndpoint {
        role,
        position,
        reason,
    })
}

fn dispatch<R: PathTracker>(
    grid: &Grid,
    start: Position,
    goal: Position,
    algorithm: Algorithm,
    tracker: R,
) -> SearchReport {
    match algorithm {
        Algorithm::Bfs => traverse(grid, start, goal, algorithm, Fifo::new(), tracker),
        Algorithm::Dfs => traverse(grid, start, goal, algorithm, Lifo::new(), tracker),
        Algorithm::AStar | Algorithm::Greedy => {
            traverse(grid, start, goal, algorithm, Priority::new(), tracker)
        }
    }
}

/// The single traversal loop behind every strategy.
///
/// Neighbors are pushed without checking the visited set; duplicates are
/// dropped when popped, so only the first pop of a cell expands it.
fn traverse<F, R>(
    grid: &Grid,
    start: Position,
    goal: Position,
    algorithm: Algorithm,
    mut frontier: F,
    mut tracker: R,
) -> SearchReport
where
    F: Frontier<Entry<R::Trail>>,
    R: PathTracker,
{
    let planning_start = Instant::now();
    let mut visited: HashSet<Position> = HashSet::new();

    let root = tracker.root(start);
    frontier.push(
        algorithm.priority(0, start, goal),
        Entry {
            position: start,
            steps: 0,
            trail: root,
        },
    );
    let mut pushed = 1;

    let outcome = loop {
        let Some(Entry {
            position,
            steps,
            trail,
        }) = frontier.pop()
        else {
            break Outcome::NotFound;
        };

        if position == goal {
            break Outcome::Found(tracker.finish(goal, trail));
        }

        if !visited.insert(position) {
            continue;
        }

        tracker.record(position, &trail);
        log::trace!("expanding {} at depth {}", position, steps);

        for (neighbor, _) in grid.neighbors(position) {
            let next = Entry {
                position: neighbor,
                steps: steps + 1,
                trail: tracker.extend(&trail, position, neighbor),
            };
            frontier.push(algorithm.priority(steps + 1, neighbor, goal), next);
            pushed += 1;
        }
    };

    SearchReport {
        outcome,
        visited,
        pushed,
        planning_time: planning_start.elapsed(),
    }
}
