use grid_util::grid::{Grid, SimpleGrid};
use grid_util::point::Point;
use itertools::iproduct;
use log::{debug, warn};

use crate::coord::Coord;
use crate::error::WaveError;

/// State of a single grid cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellState {
    /// Traversable and not reached by the most recent propagation.
    #[default]
    Empty,
    /// Impassable until explicitly unmarked.
    Barrier,
    /// Reached in `distance - 1` steps from the propagation source, which itself carries 1.
    Labeled(u32),
}

impl CellState {
    pub fn label(self) -> Option<u32> {
        match self {
            CellState::Labeled(distance) => Some(distance),
            _ => None,
        }
    }
    pub fn is_barrier(self) -> bool {
        self == CellState::Barrier
    }
}

/// [WaveGrid] is a fixed-size [SimpleGrid] of [CellState]s addressed by `(row, col)`, with rows
/// along `y`. Propagation labels are stored directly in the cells, so a labeled cell is exactly a
/// cell that has been visited.
#[derive(Clone, Debug)]
pub struct WaveGrid {
    cells: SimpleGrid<CellState>,
}

impl PartialEq for WaveGrid {
    fn eq(&self, other: &WaveGrid) -> bool {
        self.cells.width == other.cells.width
            && self.cells.height == other.cells.height
            && self.cells.values == other.cells.values
    }
}
impl Eq for WaveGrid {}

impl WaveGrid {
    /// Allocates a `rows x cols` grid with every cell [CellState::Empty].
    pub fn new(rows: i32, cols: i32) -> Result<WaveGrid, WaveError> {
        if rows <= 0 || cols <= 0 {
            return Err(WaveError::InvalidDimensions { rows, cols });
        }
        debug!("Allocating {}x{} grid", rows, cols);
        Ok(WaveGrid {
            cells: SimpleGrid::new(cols as usize, rows as usize, CellState::Empty),
        })
    }

    /// Builds a grid and marks every coordinate in `barriers`. Fails on the first barrier
    /// outside the grid.
    pub fn with_barriers<I>(rows: i32, cols: i32, barriers: I) -> Result<WaveGrid, WaveError>
    where
        I: IntoIterator<Item = Coord>,
    {
        let mut grid = WaveGrid::new(rows, cols)?;
        for coord in barriers {
            grid.mark_barrier(coord)?;
        }
        Ok(grid)
    }

    pub fn rows(&self) -> i32 {
        self.cells.height() as i32
    }
    pub fn cols(&self) -> i32 {
        self.cells.width() as i32
    }
    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.cells.values.len()
    }
    pub fn is_empty(&self) -> bool {
        self.cells.values.is_empty()
    }

    pub fn in_bounds(&self, coord: Coord) -> bool {
        self.cells.point_in_bounds(coord.into())
    }

    /// The backing [Point] of `coord`, or [WaveError::OutOfBounds].
    fn checked_point(&self, coord: Coord) -> Result<Point, WaveError> {
        let point = Point::from(coord);
        if self.cells.point_in_bounds(point) {
            Ok(point)
        } else {
            Err(WaveError::OutOfBounds {
                coord,
                rows: self.rows(),
                cols: self.cols(),
            })
        }
    }

    pub fn get(&self, coord: Coord) -> Result<CellState, WaveError> {
        self.checked_point(coord).map(|p| self.cells.get_point(p))
    }

    /// The label at `coord`, or [None] if it is unlabeled, a barrier or out of bounds.
    pub fn label(&self, coord: Coord) -> Option<u32> {
        self.get(coord).ok().and_then(CellState::label)
    }

    pub fn is_barrier(&self, coord: Coord) -> bool {
        matches!(self.get(coord), Ok(CellState::Barrier))
    }

    /// Whether a wave may enter `coord`: in bounds and not a barrier.
    pub fn is_passable(&self, coord: Coord) -> bool {
        matches!(self.get(coord), Ok(state) if !state.is_barrier())
    }

    pub fn mark_barrier(&mut self, coord: Coord) -> Result<(), WaveError> {
        match self.checked_point(coord) {
            Ok(p) => {
                self.cells.set_point(p, CellState::Barrier);
                Ok(())
            }
            Err(err) => {
                warn!("Ignoring barrier: {}", err);
                Err(err)
            }
        }
    }

    /// Turns a barrier back into an empty cell. Cells that are not barriers are left alone.
    pub fn unmark_barrier(&mut self, coord: Coord) -> Result<(), WaveError> {
        let p = self.checked_point(coord)?;
        if self.cells.get_point(p).is_barrier() {
            self.cells.set_point(p, CellState::Empty);
        }
        Ok(())
    }

    /// Overwrites the cell with [CellState::Labeled]. Labels start at 1 and barriers keep their
    /// state; both are rejected without touching the grid.
    pub fn set_label(&mut self, coord: Coord, distance: u32) -> Result<(), WaveError> {
        let p = self.checked_point(coord)?;
        if distance == 0 {
            return Err(WaveError::ZeroLabel { coord });
        }
        if self.cells.get_point(p).is_barrier() {
            return Err(WaveError::LabelOnBarrier { coord });
        }
        self.cells.set_point(p, CellState::Labeled(distance));
        Ok(())
    }

    /// Clears every label back to [CellState::Empty]. Barriers are preserved.
    pub fn reset_labels(&mut self) {
        for cell in self.cells.values.iter_mut() {
            if let CellState::Labeled(_) = cell {
                *cell = CellState::Empty;
            }
        }
    }

    pub fn labeled_count(&self) -> usize {
        self.cells
            .values
            .iter()
            .filter(|c| c.label().is_some())
            .count()
    }

    pub fn barrier_count(&self) -> usize {
        self.cells.values.iter().filter(|c| c.is_barrier()).count()
    }

    /// All coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        iproduct!(0..self.rows(), 0..self.cols()).map(|(row, col)| Coord::new(row, col))
    }

    /// Every cell with its coordinate, in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, CellState)> + '_ {
        self.coords().zip(self.cells.values.iter().copied())
    }

    /// The cells of a single row, left to right. Empty if `row` is out of range.
    pub fn row(&self, row: i32) -> &[CellState] {
        if row < 0 || row >= self.rows() {
            return &[];
        }
        let start = self.cells.get_ix(0, row as usize);
        &self.cells.values[start..start + self.cells.width()]
    }
}
