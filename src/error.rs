use grid_util::direction::Direction;
use thiserror::Error;

use crate::coord::Coord;

/// Recoverable failures of grid operations. None of these leave the grid in a modified state.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum WaveError {
    #[error("invalid grid dimensions {rows}x{cols}: both must be positive")]
    InvalidDimensions { rows: i32, cols: i32 },
    #[error("{coord} lies outside the {rows}x{cols} grid")]
    OutOfBounds { coord: Coord, rows: i32, cols: i32 },
    #[error("cannot propagate from {start}: out of bounds or a barrier")]
    InvalidStart { start: Coord },
    #[error("label at {coord} must be positive")]
    ZeroLabel { coord: Coord },
    #[error("cannot label barrier at {coord}")]
    LabelOnBarrier { coord: Coord },
    #[error("neighbour order {order:?} is not a permutation of the four cardinal directions")]
    InvalidOrder { order: [Direction; 4] },
}
