mod cli;
mod logging;

use std::io::{self, BufRead, Write};
use std::path::Path as FsPath;

use clap::Parser;
use eyre::{Result, WrapErr};
use log::{debug, info, warn};

use cli::{Args, Command};
use logging::Logger;
use maze_solver::{
    Algorithm, Grid, Outcome, Position, Reconstruction, SearchReport, render::render, search_with,
};

const DEMO_MAZE: &str = "\
0 1 0 0 0 0
0 1 0 1 1 0
0 0 0 1 0 0
0 1 0 0 0 0
0 1 0 1 1 0
0 0 0 0 0 0
";

struct Run {
    grid: Grid,
    start: Position,
    goal: Position,
    reconstruction: Reconstruction,
    colored: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    Logger::init(args.verbosity);

    let grid = load_grid(args.grid.as_deref())?;
    let goal = args
        .goal
        .unwrap_or(Position::new(grid.height() - 1, grid.width() - 1));

    debug!(
        "{}x{} grid: {} -> {}",
        grid.height(),
        grid.width(),
        args.start,
        goal
    );

    let run = Run {
        grid,
        start: args.start,
        goal,
        reconstruction: args.reconstruction.into(),
        colored: !args.no_color,
    };

    match args.command {
        Command::Solve { algorithm } => {
            let algorithm = match algorithm {
                Some(algorithm) => algorithm.into(),
                None => prompt_algorithm()?,
            };
            run_solver(&run, algorithm)
        }
        Command::Benchmark => run_benchmark(&run),
    }
}

fn load_grid(path: Option<&FsPath>) -> Result<Grid> {
    let Some(path) = path else {
        debug!("using built-in demo maze");
        return Ok(DEMO_MAZE.parse::<Grid>()?);
    };

    info!("loading grid: {}", path.display());
    let text = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read grid file {}", path.display()))?;

    text.parse::<Grid>()
        .wrap_err_with(|| format!("failed to parse grid file {}", path.display()))
}

fn prompt_algorithm() -> Result<Algorithm> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "Select the maze-solving algorithm:")?;
    for (i, algorithm) in Algorithm::all().enumerate() {
        writeln!(stdout, "{}. {}", i + 1, algorithm.name())?;
    }
    write!(stdout, "Enter your choice (1-4): ")?;
    stdout.flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;

    Ok(line.parse::<Algorithm>()?)
}

fn solve(run: &Run, algorithm: Algorithm) -> Result<SearchReport> {
    Ok(search_with(
        &run.grid,
        run.start,
        run.goal,
        algorithm,
        run.reconstruction,
    )?)
}

fn run_solver(run: &Run, algorithm: Algorithm) -> Result<()> {
    info!("solving with {}", algorithm.name());

    let report = solve(run, algorithm)?;
    print_result(&report);

    let path = report.outcome.path();
    if let Some(path) = path {
        debug!("path: {}", path);
        let moves: Vec<_> = path.directions().iter().map(|d| d.as_str()).collect();
        debug!("moves: {}", moves.join(", "));
    }
    print!("{}", render(&run.grid, path, run.colored));

    Ok(())
}

fn run_benchmark(run: &Run) -> Result<()> {
    info!("benchmarking all algorithms");

    let mut completed_results = Vec::new();

    for algorithm in Algorithm::all() {
        info!("testing {}", algorithm.name());
        let report = solve(run, algorithm)?;
        print_result(&report);
        completed_results.push((algorithm.name(), report));
    }

    print_benchmark_summary(&completed_results);
    Ok(())
}

// ========== Utilities ==========

fn print_result(report: &SearchReport) {
    match &report.outcome {
        Outcome::Found(path) => info!(
            "found a {} step path in {:?}",
            path.steps(),
            report.planning_time
        ),
        Outcome::NotFound => warn!("no path found ({} cells explored)", report.expanded()),
    }
    debug!("expanded: {}", report.expanded());
    debug!("pushed: {}", report.pushed);
}

fn print_benchmark_summary(results: &[(&str, SearchReport)]) {
    info!("\nbenchmark results:");
    info!(
        "{:<20} {:>8}  {:>10}  {:>12}",
        "algorithm", "steps", "expanded", "plan"
    );
    info!("{:-<56}", "");

    for (name, report) in results {
        let steps = report
            .steps()
            .map_or_else(|| "-".to_string(), |s| s.to_string());
        info!(
            "{:<20} {:>8}  {:>10}  {:>12?}",
            name,
            steps,
            report.expanded(),
            report.planning_time,
        );
    }

    if let Some((name, steps)) = results
        .iter()
        .filter_map(|(name, r)| r.steps().map(|s| (name, s)))
        .min_by_key(|&(_, s)| s)
    {
        info!("\nshortest: {} ({} steps)", name, steps);
    }

    if let Some((name, report)) = results.iter().min_by_key(|(_, r)| r.planning_time) {
        info!("fastest: {} ({:?})", name, report.planning_time);
    }
}
