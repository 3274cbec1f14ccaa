use core::fmt;

use itertools::Itertools;

use crate::backtrace::WavePath;
use crate::coord::Coord;
use crate::grid::{CellState, WaveGrid};

/// A single cell as drawn on screen. Path cells show as `*` unless they are barriers.
#[derive(Clone, Copy)]
struct Glyph {
    state: CellState,
    on_path: bool,
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.state {
            CellState::Barrier => f.write_str("X"),
            _ if self.on_path => f.write_str("*"),
            CellState::Empty => f.write_str("."),
            CellState::Labeled(distance) => write!(f, "{}", distance),
        }
    }
}

/// One line per row: `X` for barriers, `.` for unlabeled cells, otherwise the label.
impl fmt::Display for WaveGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..self.rows() {
            let glyphs = self.row(row).iter().map(|&state| Glyph {
                state,
                on_path: false,
            });
            writeln!(f, "{}", glyphs.format(" "))?;
        }
        Ok(())
    }
}

/// Renders a grid with the cells of a path drawn as `*`.
pub struct PathOverlay<'a> {
    pub grid: &'a WaveGrid,
    pub path: &'a WavePath,
}

impl WaveGrid {
    pub fn with_path<'a>(&'a self, path: &'a WavePath) -> PathOverlay<'a> {
        PathOverlay { grid: self, path }
    }
}

impl fmt::Display for PathOverlay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..self.grid.rows() {
            let glyphs = self.grid.row(row).iter().enumerate().map(|(col, &state)| Glyph {
                state,
                on_path: self.path.contains(&Coord::new(row, col as i32)),
            });
            writeln!(f, "{}", glyphs.format(" "))?;
        }
        Ok(())
    }
}
