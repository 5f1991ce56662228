//! Cell states and the mutable grid of an episode.
use crate::{GridError, Layout};
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;

/// State of a cell, encoded as a small integer in observations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum CellState {
    /// Not yet visited, not a wall.
    Unexplored = 0,

    /// Previously visited by the agent, now vacated.
    Explored = 1,

    /// Impassable.
    Wall = 2,

    /// Currently occupied by the agent.
    Agent = 3,
}

impl CellState {
    /// The number of cell states.
    pub const N_STATES: usize = 4;

    /// Code of the state in observations.
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for CellState {
    type Error = GridError;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(Self::Unexplored),
            1 => Ok(Self::Explored),
            2 => Ok(Self::Wall),
            3 => Ok(Self::Agent),
            _ => Err(GridError::InvalidLayoutError(format!(
                "unknown cell code {}",
                v
            ))),
        }
    }
}

/// A square grid of [`CellState`]s stored in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<CellState>,
}

impl Grid {
    /// Grid at the start of an episode: walls and the agent at the start cell.
    pub fn from_layout(layout: &Layout) -> Self {
        let size = layout.size();
        let mut cells = vec![CellState::Unexplored; size * size];
        for &ix in layout.walls() {
            cells[ix] = CellState::Wall;
        }
        cells[layout.start()] = CellState::Agent;
        Self { size, cells }
    }

    /// The number of cells along an axis.
    pub fn size(&self) -> usize {
        self.size
    }

    /// The number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`, a layout has at least one cell.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Row-major index of `(row, col)`.
    pub fn index_of(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    /// `(row, col)` of a row-major index.
    pub fn coords_of(&self, ix: usize) -> (usize, usize) {
        (ix / self.size, ix % self.size)
    }

    /// Index of the cell `(row + dr, col + dc)`, `None` if it is off the grid.
    pub fn offset(&self, ix: usize, (dr, dc): (isize, isize)) -> Option<usize> {
        let (row, col) = self.coords_of(ix);
        let row = row as isize + dr;
        let col = col as isize + dc;
        let size = self.size as isize;
        if (0..size).contains(&row) && (0..size).contains(&col) {
            Some(self.index_of(row as usize, col as usize))
        } else {
            None
        }
    }

    /// State of the cell at a row-major index.
    pub fn get(&self, ix: usize) -> CellState {
        self.cells[ix]
    }

    /// State of the cell at `(row, col)`.
    pub fn get_rc(&self, row: usize, col: usize) -> CellState {
        self.cells[self.index_of(row, col)]
    }

    pub(crate) fn set(&mut self, ix: usize, state: CellState) {
        self.cells[ix] = state;
    }

    /// The number of cells in the given state.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&s| s == state).count()
    }

    /// Cell states in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = CellState> + '_ {
        self.cells.iter().copied()
    }

    /// Codes of the cell states in row-major order.
    pub fn codes(&self) -> Vec<u8> {
        self.cells.iter().map(|s| s.code()).collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_reference_grid() {
        let grid = Grid::from_layout(&Layout::reference());
        assert_eq!(grid.codes(), vec![3, 0, 0, 0, 2, 0, 0, 0, 0]);
        assert_eq!(grid.count(CellState::Agent), 1);
        assert_eq!(grid.get_rc(1, 1), CellState::Wall);
    }

    #[test]
    fn test_offset_bounds() {
        let grid = Grid::from_layout(&Layout::reference());
        assert_eq!(grid.coords_of(5), (1, 2));
        assert_eq!(grid.offset(0, (0, -1)), None);
        assert_eq!(grid.offset(0, (-1, 0)), None);
        assert_eq!(grid.offset(2, (0, 1)), None);
        assert_eq!(grid.offset(6, (1, 0)), None);
        assert_eq!(grid.offset(0, (1, 0)), Some(3));
        assert_eq!(grid.offset(4, (0, 1)), Some(5));
    }

    #[test]
    fn test_cell_codes() {
        for code in 0..CellState::N_STATES as u8 {
            assert_eq!(CellState::try_from(code).unwrap().code(), code);
        }
        assert!(CellState::try_from(4).is_err());
    }
}
