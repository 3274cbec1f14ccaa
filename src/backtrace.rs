//! Recovers a shortest path by walking propagation labels downhill from a target back to the
//! source.
use fxhash::FxBuildHasher;
use grid_util::direction::Direction;
use indexmap::IndexSet;
use itertools::Itertools;
use log::{debug, warn};

use crate::coord::{checked_order, Coord};
use crate::error::WaveError;
use crate::grid::WaveGrid;
use crate::BACKTRACE_ORDER;

type FxIndexSet<K> = IndexSet<K, FxBuildHasher>;

/// How a backtrace ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TraceOutcome {
    /// The walk reached the source (label 1).
    Complete,
    /// The target carries no label; the path is empty.
    Unreachable,
    /// No neighbour of `at` carries `label - 1`. The path holds what was walked up to `at`.
    InconsistentLabeling { at: Coord, label: u32 },
}

/// A path produced by [PathReconstructor], ordered from source to target. Keeps insertion order
/// while answering membership queries in constant time.
#[derive(Clone, Debug)]
pub struct WavePath {
    cells: FxIndexSet<Coord>,
    outcome: TraceOutcome,
}

impl WavePath {
    fn unreachable() -> WavePath {
        WavePath {
            cells: FxIndexSet::default(),
            outcome: TraceOutcome::Unreachable,
        }
    }

    pub fn outcome(&self) -> TraceOutcome {
        self.outcome
    }
    pub fn is_complete(&self) -> bool {
        self.outcome == TraceOutcome::Complete
    }
    pub fn len(&self) -> usize {
        self.cells.len()
    }
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
    /// Number of moves along the path.
    pub fn steps(&self) -> usize {
        self.len().saturating_sub(1)
    }
    pub fn contains(&self, coord: &Coord) -> bool {
        self.cells.contains(coord)
    }
    /// First cell. For a complete path this is the propagation source.
    pub fn source(&self) -> Option<Coord> {
        self.cells.first().copied()
    }
    pub fn target(&self) -> Option<Coord> {
        self.cells.last().copied()
    }
    pub fn iter(&self) -> impl Iterator<Item = &Coord> + '_ {
        self.cells.iter()
    }
    pub fn to_vec(&self) -> Vec<Coord> {
        self.cells.iter().copied().collect()
    }
    /// Whether every consecutive pair of cells is 4-adjacent.
    pub fn is_contiguous(&self) -> bool {
        self.cells
            .iter()
            .tuple_windows()
            .all(|(a, b)| a.is_adjacent(b))
    }
}

impl<'a> IntoIterator for &'a WavePath {
    type Item = &'a Coord;
    type IntoIter = indexmap::set::Iter<'a, Coord>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

/// Walks the labels of a propagated [WaveGrid] to recover one shortest path.
#[derive(Clone, Debug)]
pub struct PathReconstructor {
    /// Priority among neighbours that all carry the next lower label. The first match wins, so
    /// this picks one path among several equally short ones.
    order: [Direction; 4],
}

impl Default for PathReconstructor {
    fn default() -> PathReconstructor {
        PathReconstructor {
            order: BACKTRACE_ORDER,
        }
    }
}

impl PathReconstructor {
    /// Fails with [WaveError::InvalidOrder] unless `order` lists each cardinal direction once.
    pub fn new(order: [Direction; 4]) -> Result<PathReconstructor, WaveError> {
        Ok(PathReconstructor {
            order: checked_order(order)?,
        })
    }

    pub fn order(&self) -> [Direction; 4] {
        self.order
    }

    /// The neighbour of `coord` with exactly `label`, first in priority order.
    fn previous(&self, grid: &WaveGrid, coord: Coord, label: u32) -> Option<Coord> {
        coord
            .neighbours(&self.order)
            .into_iter()
            .find(|n| grid.label(*n) == Some(label))
    }

    /// Reconstructs a path from the source of the last propagation to `target`. An unlabeled
    /// target gives an empty [TraceOutcome::Unreachable] path; a gap in the labels stops the
    /// walk early and is reported through [TraceOutcome::InconsistentLabeling].
    pub fn reconstruct(&self, grid: &WaveGrid, target: Coord) -> Result<WavePath, WaveError> {
        let Some(mut label) = grid.get(target)?.label() else {
            debug!("{} carries no label, no path", target);
            return Ok(WavePath::unreachable());
        };
        let mut current = target;
        let mut walked = vec![current];
        let mut outcome = TraceOutcome::Complete;
        while label > 1 {
            match self.previous(grid, current, label - 1) {
                Some(prev) => {
                    current = prev;
                    label -= 1;
                    walked.push(current);
                }
                None => {
                    warn!(
                        "Inconsistent labeling: no neighbour of {} carries {}",
                        current,
                        label - 1
                    );
                    outcome = TraceOutcome::InconsistentLabeling { at: current, label };
                    break;
                }
            }
        }
        debug!("Backtraced {} cells to {}", walked.len(), target);
        Ok(WavePath {
            cells: walked.into_iter().rev().collect(),
            outcome,
        })
    }
}

/// Reconstructs with the default tie-break order.
pub fn reconstruct(grid: &WaveGrid, target: Coord) -> Result<WavePath, WaveError> {
    PathReconstructor::default().reconstruct(grid, target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::propagate::propagate_all;

    #[test]
    fn path_descends_one_label_per_step() {
        // |S  |
        // | # |
        // |  G|
        let mut grid = WaveGrid::with_barriers(3, 3, [Coord::new(1, 1)]).unwrap();
        propagate_all(&mut grid, Coord::new(0, 0)).unwrap();
        let path = reconstruct(&grid, Coord::new(2, 2)).unwrap();
        assert!(path.is_complete());
        assert_eq!(path.len(), 5);
        assert_eq!(path.source(), Some(Coord::new(0, 0)));
        assert_eq!(path.target(), Some(Coord::new(2, 2)));
        assert!(path.is_contiguous());
        let labels = path
            .iter()
            .map(|c| grid.label(*c).unwrap())
            .collect::<Vec<_>>();
        assert_eq!(labels, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn ties_follow_priority_order() {
        let mut grid = WaveGrid::new(3, 3).unwrap();
        propagate_all(&mut grid, Coord::new(0, 0)).unwrap();
        // Up before left: climb the last column first.
        let path = reconstruct(&grid, Coord::new(2, 2)).unwrap();
        assert_eq!(
            path.to_vec(),
            vec![
                Coord::new(0, 0),
                Coord::new(0, 1),
                Coord::new(0, 2),
                Coord::new(1, 2),
                Coord::new(2, 2)
            ]
        );
        // West before south: leave the source down the first column.
        let left_first = PathReconstructor::new([
            Direction::WEST,
            Direction::SOUTH,
            Direction::NORTH,
            Direction::EAST,
        ])
        .unwrap();
        let path = left_first.reconstruct(&grid, Coord::new(2, 2)).unwrap();
        assert_eq!(path.to_vec()[1], Coord::new(1, 0));
        assert!(PathReconstructor::new([Direction::NORTH; 4]).is_err());
    }

    #[test]
    fn unlabeled_target_gives_empty_path() {
        let mut grid =
            WaveGrid::with_barriers(2, 3, [Coord::new(0, 1), Coord::new(1, 1)]).unwrap();
        propagate_all(&mut grid, Coord::new(0, 0)).unwrap();
        for target in [Coord::new(0, 2), Coord::new(0, 1)] {
            let path = reconstruct(&grid, target).unwrap();
            assert!(path.is_empty());
            assert_eq!(path.outcome(), TraceOutcome::Unreachable);
        }
    }

    #[test]
    fn source_alone_is_a_single_cell_path() {
        let mut grid = WaveGrid::new(2, 2).unwrap();
        propagate_all(&mut grid, Coord::new(1, 1)).unwrap();
        let path = reconstruct(&grid, Coord::new(1, 1)).unwrap();
        assert!(path.is_complete());
        assert_eq!(path.to_vec(), vec![Coord::new(1, 1)]);
        assert_eq!(path.steps(), 0);
    }

    #[test]
    fn out_of_bounds_target_is_an_error() {
        let grid = WaveGrid::new(2, 2).unwrap();
        assert!(matches!(
            reconstruct(&grid, Coord::new(2, 0)),
            Err(WaveError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn gap_in_labels_returns_partial_path() {
        let mut grid = WaveGrid::new(1, 5).unwrap();
        grid.set_label(Coord::new(0, 0), 1).unwrap();
        grid.set_label(Coord::new(0, 2), 3).unwrap();
        grid.set_label(Coord::new(0, 3), 4).unwrap();
        grid.set_label(Coord::new(0, 4), 5).unwrap();
        let path = reconstruct(&grid, Coord::new(0, 4)).unwrap();
        assert_eq!(
            path.outcome(),
            TraceOutcome::InconsistentLabeling {
                at: Coord::new(0, 2),
                label: 3
            }
        );
        assert_eq!(
            path.to_vec(),
            vec![Coord::new(0, 2), Coord::new(0, 3), Coord::new(0, 4)]
        );
    }
}
