//! Observation for [`CoverageEnv`](crate::CoverageEnv).
use crate::{CellState, Grid};
use coverage_core::Obs;

/// Row-major codes of the cell states, each in `0..4`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridObs {
    cells: Vec<u8>,
}

impl GridObs {
    /// Codes of the cells.
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Number of cells in the given state.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&c| c == state.code()).count()
    }
}

impl From<&Grid> for GridObs {
    fn from(grid: &Grid) -> Self {
        Self {
            cells: grid.codes(),
        }
    }
}

impl From<GridObs> for Vec<u8> {
    fn from(obs: GridObs) -> Self {
        obs.cells
    }
}

impl From<GridObs> for Vec<i64> {
    fn from(obs: GridObs) -> Self {
        obs.cells.into_iter().map(i64::from).collect()
    }
}

impl Obs for GridObs {
    fn len(&self) -> usize {
        self.cells.len()
    }
}
