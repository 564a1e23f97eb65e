use colored::Colorize;

use crate::maze::{Cell, Grid, Path, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Glyph {
    Wall,
    Open,
    Route,
    Start,
    Goal,
}

impl Glyph {
    fn symbol(self) -> &'static str {
        match self {
            Self::Wall => "#",
            Self::Open => ".",
            Self::Route => "*",
            Self::Start => "S",
            Self::Goal => "G",
        }
    }

    fn paint(self) -> String {
        let symbol = self.symbol();
        match self {
            Self::Wall => symbol.bright_black().to_string(),
            Self::Open => symbol.white().to_string(),
            Self::Route => symbol.cyan().bold().to_string(),
            Self::Start => symbol.green().bold().to_string(),
            Self::Goal => symbol.red().bold().to_string(),
        }
    }
}

/// Draw the grid one text line per row, overlaying `path` when given.
pub fn render(grid: &Grid, path: Option<&Path>, colored: bool) -> String {
    let mut out = String::with_capacity(grid.height() * (grid.width() * 2 + 1));

    for (row, cells) in grid.rows().enumerate() {
        for (col, &cell) in cells.iter().enumerate() {
            let glyph = glyph_at(Position::new(row, col), cell, path);
            if col > 0 {
                out.push(' ');
            }
            if colored {
                out.push_str(&glyph.paint());
            } else {
                out.push_str(glyph.symbol());
            }
        }
        out.push('\n');
    }

    out
}

fn glyph_at(pos: Position, cell: Cell, path: Option<&Path>) -> Glyph {
    match path {
        Some(path) if path.start() == pos => Glyph::Start,
        Some(path) if path.goal() == pos => Glyph::Goal,
        Some(path) if path.contains(pos) => Glyph::Route,
        _ if cell == Cell::Blocked => Glyph::Wall,
        _ => Glyph::Open,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::pathfinding::{Algorithm, search};

    #[test]
    fn plain_grid_without_path() {
        let grid: Grid = "01\n00".parse().unwrap();
        assert_eq!(render(&grid, None, false), ". #\n. .\n");
    }

    #[test]
    fn overlays_path_markers() {
        let grid: Grid = "010\n000".parse().unwrap();
        let path = search(&grid, Position::new(0, 0), Position::new(0, 2), Algorithm::Bfs)
            .unwrap()
            .into_path()
            .unwrap();
        assert_eq!(render(&grid, Some(&path), false), "S # G\n* * *\n");
    }

    #[test]
    fn colored_output_keeps_symbols() {
        let grid: Grid = "0".parse().unwrap();
        let out = render(&grid, None, true);
        assert!(out.contains('.'));
        assert!(out.ends_with('\n'));
    }
}
