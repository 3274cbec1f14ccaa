use core::fmt;

use grid_util::direction::Direction;
use grid_util::point::Point;
use itertools::Itertools;

use crate::error::WaveError;

/// The four cardinal moves. With rows mapped to `y`, [Direction::NORTH] steps to the next row
/// and [Direction::EAST] to the next column.
pub const CARDINALS: [Direction; 4] = [
    Direction::NORTH,
    Direction::SOUTH,
    Direction::EAST,
    Direction::WEST,
];

/// Whether `dir` is one of the four moves of a 4-connected grid.
pub fn is_cardinal(dir: Direction) -> bool {
    dir != Direction::NONE && !dir.diagonal()
}

/// Accepts `order` if it lists each of the four [CARDINALS] exactly once.
pub fn checked_order(order: [Direction; 4]) -> Result<[Direction; 4], WaveError> {
    if order.iter().all(|d| is_cardinal(*d)) && order.iter().all_unique() {
        Ok(order)
    } else {
        Err(WaveError::InvalidOrder { order })
    }
}

/// A cell position on a [WaveGrid](crate::grid::WaveGrid), addressed as `(row, col)`.
/// Converts to a [Point] with `x = col` and `y = row`, which is how the backing grid is indexed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    pub const fn new(row: i32, col: i32) -> Coord {
        Coord { row, col }
    }

    /// The neighbouring coordinate one step in `dir`. May lie outside any grid.
    pub fn step(&self, dir: Direction) -> Coord {
        Coord::from(Point::from(*self) + dir)
    }

    /// The neighbourhood in the given order.
    pub fn neighbours(&self, order: &[Direction; 4]) -> [Coord; 4] {
        order.map(|dir| self.step(dir))
    }

    pub fn manhattan_distance(&self, other: &Coord) -> i32 {
        Point::from(*self).manhattan_distance(&Point::from(*other))
    }

    /// Whether `other` is exactly one cardinal step away.
    pub fn is_adjacent(&self, other: &Coord) -> bool {
        self.manhattan_distance(other) == 1
    }
}

impl From<Coord> for Point {
    fn from(coord: Coord) -> Point {
        Point::new(coord.col, coord.row)
    }
}

impl From<Point> for Coord {
    fn from(point: Point) -> Coord {
        Coord::new(point.y, point.x)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((row, col): (i32, i32)) -> Coord {
        Coord::new(row, col)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
