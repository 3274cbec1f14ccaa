//! # wave_pathfinding
//!
//! Wave propagation on a 4-connected grid, also known as
//! [Lee's algorithm](https://en.wikipedia.org/wiki/Lee_algorithm). A breadth-first wave spreads
//! from a source cell and labels every cell it reaches with its step distance (the source itself
//! carries 1). Cells marked as barriers are never entered. The wave can be given a budget, the
//! number of cells it may label before it stops, which cuts off the last layers early.
//!
//! Once a grid is labeled, a shortest path to any labeled cell is recovered by walking downhill
//! over the labels, one decrement per step, back to the source.
//!
//! ```
//! use wave_pathfinding::{reconstruct, propagate_all, Coord, WaveGrid};
//!
//! let mut grid = WaveGrid::with_barriers(3, 3, [Coord::new(1, 1)]).unwrap();
//! propagate_all(&mut grid, Coord::new(0, 0)).unwrap();
//! let path = reconstruct(&grid, Coord::new(2, 2)).unwrap();
//! assert_eq!(path.len(), 5);
//! ```
pub mod backtrace;
pub mod coord;
pub mod error;
pub mod grid;
pub mod propagate;
pub mod render;
pub mod session;

pub use backtrace::{reconstruct, PathReconstructor, TraceOutcome, WavePath};
pub use coord::{Coord, CARDINALS};
pub use error::WaveError;
pub use grid_util::direction::Direction;
pub use grid::{CellState, WaveGrid};
pub use propagate::{propagate, propagate_all, Propagation, WavePropagator};
pub use render::PathOverlay;
pub use session::WaveSession;

/// Neighbour discovery order used by [WavePropagator::default]: next row, previous row, next
/// column, previous column.
pub const PROPAGATION_ORDER: [Direction; 4] = [
    Direction::NORTH,
    Direction::SOUTH,
    Direction::EAST,
    Direction::WEST,
];

/// Tie-break priority used by [PathReconstructor::default]: previous row, next row, previous
/// column, next column.
pub const BACKTRACE_ORDER: [Direction; 4] = [
    Direction::SOUTH,
    Direction::NORTH,
    Direction::WEST,
    Direction::EAST,
];

/// Budget that never stops a propagation early.
pub const UNBOUNDED: usize = usize::MAX;
