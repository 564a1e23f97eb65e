use std::collections::{HashMap, HashSet, VecDeque};

use maze_solver::{
    Algorithm, Endpoint, EndpointProblem, Grid, GridError, Outcome, Position, Reconstruction,
    SearchError, SearchReport, search, search_with,
};

const STRATEGIES: [Reconstruction; 2] = [Reconstruction::CarriedPath, Reconstruction::Predecessors];

const GRIDS: [&str; 5] = [
    "0 1 0 0 0 0
     0 1 0 1 1 0
     0 0 0 1 0 0
     0 1 0 0 0 0
     0 1 0 1 1 0
     0 0 0 0 0 0",
    "0000000
     0111110
     0000010
     1111010
     0000000",
    "00000
     00000
     00000
     00000",
    "0010
     0010
     1110
     0000",
    "0",
];

fn grid(s: &str) -> Grid {
    s.parse().expect("fixture grid should parse")
}

fn p(row: usize, col: usize) -> Position {
    Position::new(row, col)
}

/// reference distances from `start`, computed without the crate's search
fn distances(grid: &Grid, start: Position) -> HashMap<Position, usize> {
    let mut dist = HashMap::from([(start, 0)]);
    let mut queue = VecDeque::from([start]);

    while let Some(current) = queue.pop_front() {
        let d = dist[&current];
        for (next, _) in grid.neighbors(current) {
            if !dist.contains_key(&next) {
                dist.insert(next, d + 1);
                queue.push_back(next);
            }
        }
    }

    dist
}

fn report(
    grid: &Grid,
    start: Position,
    goal: Position,
    algorithm: Algorithm,
    reconstruction: Reconstruction,
) -> SearchReport {
    search_with(grid, start, goal, algorithm, reconstruction).expect("endpoints are free")
}

#[test]
fn every_pair_on_every_fixture() {
    for text in GRIDS {
        let g = grid(text);
        let cells: Vec<_> = g.free_cells().collect();

        for &start in &cells {
            let reference = distances(&g, start);
            let component: HashSet<_> = reference.keys().copied().collect();

            for &goal in &cells {
                for algorithm in Algorithm::all() {
                    let reports: Vec<_> = STRATEGIES
                        .iter()
                        .map(|&r| report(&g, start, goal, algorithm, r))
                        .collect();
                    assert_eq!(
                        reports[0].outcome, reports[1].outcome,
                        "{algorithm} {start}->{goal}: reconstructions disagree"
                    );

                    for rep in &reports {
                        match (&rep.outcome, reference.get(&goal)) {
                            (Outcome::Found(path), Some(&shortest)) => {
                                assert!(path.is_valid_on(&g), "{algorithm} invalid path");
                                assert_eq!(path.start(), start);
                                assert_eq!(path.goal(), goal);
                                if algorithm.is_optimal() {
                                    assert_eq!(
                                        path.steps(),
                                        shortest,
                                        "{algorithm} {start}->{goal} not shortest"
                                    );
                                } else {
                                    assert!(path.steps() >= shortest);
                                }
                            }
                            (Outcome::NotFound, None) => {
                                assert_eq!(
                                    rep.visited, component,
                                    "{algorithm} should exhaust the start's component"
                                );
                            }
                            (outcome, expected) => panic!(
                                "{algorithm} {start}->{goal}: got {outcome:?}, reference {expected:?}"
                            ),
                        }
                    }
                }
            }
        }
    }
}

#[test]
fn two_by_two_open_grid() {
    let g = grid("00\n00");
    let path = search(&g, p(0, 0), p(1, 1), Algorithm::Bfs)
        .unwrap()
        .into_path()
        .unwrap();
    assert_eq!(path.cells().len(), 3);
    assert_eq!(path.steps(), 2);
}

#[test]
fn blocked_goal_is_rejected_before_searching() {
    let g = grid("00\n01");
    for algorithm in Algorithm::all() {
        for reconstruction in STRATEGIES {
            let err = search_with(&g, p(0, 0), p(1, 1), algorithm, reconstruction).unwrap_err();
            assert_eq!(
                err,
                SearchError::InvalidEndpoint {
                    role: Endpoint::Goal,
                    position: p(1, 1),
                    reason: EndpointProblem::Blocked,
                }
            );
        }
    }
    assert_eq!(
        search(&g, p(0, 0), p(1, 1), Algorithm::Bfs)
            .unwrap_err()
            .to_string(),
        "invalid goal (1, 1): on a blocked cell"
    );
}

#[test]
fn enclosed_cell_is_its_own_path() {
    let g = grid("111\n101\n111");
    for algorithm in Algorithm::all() {
        for reconstruction in STRATEGIES {
            let rep = report(&g, p(1, 1), p(1, 1), algorithm, reconstruction);
            let path = rep.outcome.path().expect("start is the goal");
            assert_eq!(path.cells(), &[p(1, 1)]);
            assert_eq!(rep.expanded(), 0);
        }
    }
}

#[test]
fn results_are_deterministic() {
    let g = grid(GRIDS[1]);
    for algorithm in Algorithm::all() {
        for reconstruction in STRATEGIES {
            let first = report(&g, p(2, 0), p(2, 6), algorithm, reconstruction);
            let second = report(&g, p(2, 0), p(2, 6), algorithm, reconstruction);
            assert_eq!(first.outcome, second.outcome);
            assert_eq!(first.visited, second.visited);
            assert_eq!(first.pushed, second.pushed);
        }
    }
}

#[test]
fn ragged_grid_is_malformed() {
    assert!(matches!(
        "000\n00\n000".parse::<Grid>(),
        Err(GridError::Malformed {
            row: 1,
            expected: 3,
            found: 2
        })
    ));
}
