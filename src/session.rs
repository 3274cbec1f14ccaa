use log::debug;

use crate::backtrace::{PathReconstructor, WavePath};
use crate::coord::Coord;
use crate::error::WaveError;
use crate::grid::{CellState, WaveGrid};
use crate::propagate::{Propagation, WavePropagator};

/// [WaveSession] bundles a [WaveGrid] with a propagator, a reconstructor and the most recent
/// path, covering the full build/propagate/reset/backtrace cycle behind one owner.
#[derive(Clone, Debug)]
pub struct WaveSession {
    grid: WaveGrid,
    pub propagator: WavePropagator,
    pub reconstructor: PathReconstructor,
    last_propagation: Option<Propagation>,
    path: Option<WavePath>,
}

impl WaveSession {
    pub fn new(rows: i32, cols: i32) -> Result<WaveSession, WaveError> {
        Ok(WaveSession::from_grid(WaveGrid::new(rows, cols)?))
    }

    pub fn from_grid(grid: WaveGrid) -> WaveSession {
        WaveSession {
            grid,
            propagator: WavePropagator::default(),
            reconstructor: PathReconstructor::default(),
            last_propagation: None,
            path: None,
        }
    }

    pub fn grid(&self) -> &WaveGrid {
        &self.grid
    }

    pub fn mark_barrier(&mut self, coord: Coord) -> Result<(), WaveError> {
        self.grid.mark_barrier(coord)
    }

    pub fn unmark_barrier(&mut self, coord: Coord) -> Result<(), WaveError> {
        self.grid.unmark_barrier(coord)
    }

    /// Runs a propagation. Any stored path is dropped since it no longer matches the labels.
    pub fn propagate(&mut self, source: Coord, budget: usize) -> Result<Propagation, WaveError> {
        let result = self.propagator.propagate(&mut self.grid, source, budget)?;
        self.path = None;
        self.last_propagation = Some(result);
        Ok(result)
    }

    /// Clears labels and the stored path, keeping barriers.
    pub fn reset(&mut self) {
        debug!("Resetting session labels");
        self.grid.reset_labels();
        self.last_propagation = None;
        self.path = None;
    }

    /// Reconstructs and stores the path to `target`.
    pub fn backtrace(&mut self, target: Coord) -> Result<&WavePath, WaveError> {
        let path = self.reconstructor.reconstruct(&self.grid, target)?;
        Ok(self.path.insert(path))
    }

    pub fn cell(&self, coord: Coord) -> Result<CellState, WaveError> {
        self.grid.get(coord)
    }

    /// Whether `coord` lies on the most recently reconstructed path.
    pub fn is_on_path(&self, coord: Coord) -> bool {
        self.path.as_ref().is_some_and(|p| p.contains(&coord))
    }

    pub fn path(&self) -> Option<&WavePath> {
        self.path.as_ref()
    }

    pub fn last_propagation(&self) -> Option<&Propagation> {
        self.last_propagation.as_ref()
    }
}
