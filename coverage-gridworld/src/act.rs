//! Action for [`CoverageEnv`](crate::CoverageEnv).
use crate::GridError;
use coverage_core::{registry::DiscreteAct, Act};
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;

/// One of the five moves of the agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum GridAct {
    /// Move one column to the left.
    Left = 0,

    /// Move one row down.
    Down = 1,

    /// Move one column to the right.
    Right = 2,

    /// Move one row up.
    Up = 3,

    /// Stay in place.
    Stay = 4,
}

impl GridAct {
    /// The number of actions.
    pub const N: usize = 5;

    /// All actions ordered by their index.
    pub const ALL: [GridAct; 5] = [
        GridAct::Left,
        GridAct::Down,
        GridAct::Right,
        GridAct::Up,
        GridAct::Stay,
    ];

    /// Index of the action.
    pub fn index(self) -> u8 {
        self as u8
    }

    /// `(row, col)` offset of the move, `None` for [`GridAct::Stay`].
    pub fn delta(self) -> Option<(isize, isize)> {
        match self {
            GridAct::Left => Some((0, -1)),
            GridAct::Down => Some((1, 0)),
            GridAct::Right => Some((0, 1)),
            GridAct::Up => Some((-1, 0)),
            GridAct::Stay => None,
        }
    }
}

impl Act for GridAct {
    fn len(&self) -> usize {
        1
    }
}

impl DiscreteAct for GridAct {
    const N_ACTS: usize = GridAct::N;
}

impl TryFrom<i64> for GridAct {
    type Error = GridError;

    fn try_from(v: i64) -> Result<Self, Self::Error> {
        if (0..Self::N as i64).contains(&v) {
            Ok(Self::ALL[v as usize])
        } else {
            Err(GridError::InvalidActionError(v))
        }
    }
}

impl TryFrom<u8> for GridAct {
    type Error = GridError;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        Self::try_from(v as i64)
    }
}

impl From<GridAct> for u8 {
    fn from(act: GridAct) -> Self {
        act.index()
    }
}
