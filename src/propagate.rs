//! Budgeted wave propagation: layered breadth-first labeling from a single source.
use std::collections::VecDeque;

use grid_util::direction::Direction;
use log::{debug, info};

use crate::coord::{checked_order, Coord};
use crate::error::WaveError;
use crate::grid::{CellState, WaveGrid};
use crate::{PROPAGATION_ORDER, UNBOUNDED};

/// Summary of a single propagation run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Propagation {
    pub source: Coord,
    /// Number of cells that received a label.
    pub labeled: usize,
    /// Largest label handed out, 0 if nothing was labeled.
    pub max_label: u32,
    /// [true] if no labeled cell has an unlabeled passable neighbour left. This includes a budget
    /// that ran out exactly as the reachable region was covered.
    pub exhausted: bool,
}

/// Labels a [WaveGrid] in place with step distances from a source cell.
#[derive(Clone, Debug)]
pub struct WavePropagator {
    /// Order in which the neighbours of a dequeued cell are discovered. Affects which cells of
    /// the last layer get labeled when the budget cuts a run short, never the labels themselves.
    order: [Direction; 4],
}

impl Default for WavePropagator {
    fn default() -> WavePropagator {
        WavePropagator {
            order: PROPAGATION_ORDER,
        }
    }
}

impl WavePropagator {
    /// Fails with [WaveError::InvalidOrder] unless `order` lists each cardinal direction once.
    pub fn new(order: [Direction; 4]) -> Result<WavePropagator, WaveError> {
        Ok(WavePropagator {
            order: checked_order(order)?,
        })
    }

    pub fn order(&self) -> [Direction; 4] {
        self.order
    }

    /// Labels `source` with 1 and every cell reachable from it with one more than the cell it
    /// was discovered from, until `max_labeled_count` cells carry a label or nothing reachable is
    /// left. Labels from earlier runs are cleared first.
    ///
    /// Returns [WaveError::InvalidStart] without touching the grid if `source` is out of bounds
    /// or a barrier.
    pub fn propagate(
        &self,
        grid: &mut WaveGrid,
        source: Coord,
        max_labeled_count: usize,
    ) -> Result<Propagation, WaveError> {
        if !grid.is_passable(source) {
            return Err(WaveError::InvalidStart { start: source });
        }
        grid.reset_labels();
        debug!(
            "Propagating from {} with budget {}",
            source, max_labeled_count
        );
        let mut result = Propagation {
            source,
            labeled: 0,
            max_label: 0,
            exhausted: false,
        };
        if max_labeled_count == 0 {
            return Ok(result);
        }

        let mut frontier = VecDeque::new();
        grid.set_label(source, 1)?;
        frontier.push_back((source, 1));
        result.labeled = 1;
        result.max_label = 1;

        while result.labeled < max_labeled_count {
            let Some((current, label)) = frontier.pop_front() else {
                break;
            };
            for next in current.neighbours(&self.order) {
                if grid.get(next) != Ok(CellState::Empty) {
                    continue;
                }
                if result.labeled >= max_labeled_count {
                    // Budget spent before this cell was fully expanded.
                    frontier.push_front((current, label));
                    break;
                }
                grid.set_label(next, label + 1)?;
                frontier.push_back((next, label + 1));
                result.labeled += 1;
                result.max_label = label + 1;
            }
        }
        result.exhausted = self.frontier_closed(grid, &frontier);

        if result.exhausted {
            debug!(
                "Wave from {} covered the reachable region: {} cells, max label {}",
                source, result.labeled, result.max_label
            );
        } else {
            info!(
                "Wave from {} stopped by budget after {} cells at label {}",
                source, result.labeled, result.max_label
            );
        }
        Ok(result)
    }

    /// Whether none of the queued cells still has an unlabeled passable neighbour, i.e. the budget
    /// was hit exactly when the reachable region ran out.
    fn frontier_closed(&self, grid: &WaveGrid, frontier: &VecDeque<(Coord, u32)>) -> bool {
        frontier.iter().all(|(cell, _)| {
            cell.neighbours(&self.order)
                .iter()
                .all(|n| grid.get(*n) != Ok(CellState::Empty))
        })
    }
}

/// Propagates with the default neighbour order.
pub fn propagate(
    grid: &mut WaveGrid,
    source: Coord,
    max_labeled_count: usize,
) -> Result<Propagation, WaveError> {
    WavePropagator::default().propagate(grid, source, max_labeled_count)
}

/// Propagates over the whole reachable region.
pub fn propagate_all(grid: &mut WaveGrid, source: Coord) -> Result<Propagation, WaveError> {
    propagate(grid, source, UNBOUNDED)
}
