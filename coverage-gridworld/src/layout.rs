//! Static arrangement of walls and the start cell.
//!
//! A [`Layout`] is immutable once built; every reset of the environment
//! derives a fresh [`Grid`](crate::Grid) from it. Layouts can be written in
//! three ways:
//!
//! ```rust
//! use coverage_gridworld::Layout;
//!
//! let a = Layout::new(3, 0, vec![4]).unwrap();
//! let b = Layout::from_rows(&["A..", ".#.", "..."]).unwrap();
//! let c = Layout::from_schematic(&[vec![3, 0, 0], vec![0, 2, 0], vec![0, 0, 0]]).unwrap();
//!
//! assert_eq!(a, b);
//! assert_eq!(b, c);
//! assert_eq!(a.coverable_cells(), 8);
//! ```
//!
//! In YAML configurations either the index form or the text form is accepted:
//!
//! ```yaml
//! layout:
//!   rows:
//!     - "A.."
//!     - ".#."
//!     - "..."
//! ```
use crate::GridError;
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "LayoutRepr")]
/// Walls and start cell of a square grid.
pub struct Layout {
    size: usize,
    start: usize,
    walls: Vec<usize>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LayoutRepr {
    Rows {
        rows: Vec<String>,
    },
    Indices {
        size: usize,
        start: usize,
        #[serde(default)]
        walls: Vec<usize>,
    },
}

impl TryFrom<LayoutRepr> for Layout {
    type Error = GridError;

    fn try_from(repr: LayoutRepr) -> Result<Self, Self::Error> {
        match repr {
            LayoutRepr::Rows { rows } => Self::from_rows(&rows),
            LayoutRepr::Indices { size, start, walls } => Self::new(size, start, walls),
        }
    }
}

impl Layout {
    /// Builds a layout from row-major indices.
    ///
    /// Duplicate walls are merged. Fails if the grid is empty or too large to
    /// index, if an index is off the grid, or if the start cell is a wall.
    pub fn new(size: usize, start: usize, mut walls: Vec<usize>) -> Result<Self, GridError> {
        if size == 0 {
            return Err(GridError::InvalidLayoutError(
                "grid size must be positive".to_string(),
            ));
        }
        let n_cells = size.checked_mul(size).ok_or_else(|| {
            GridError::InvalidLayoutError(format!("{}x{} grid has too many cells", size, size))
        })?;
        if start >= n_cells {
            return Err(GridError::InvalidLayoutError(format!(
                "start cell {} is off a {}x{} grid",
                start, size, size
            )));
        }
        if let Some(w) = walls.iter().find(|&&w| w >= n_cells) {
            return Err(GridError::InvalidLayoutError(format!(
                "wall {} is off a {}x{} grid",
                w, size, size
            )));
        }
        walls.sort_unstable();
        walls.dedup();
        if walls.binary_search(&start).is_ok() {
            return Err(GridError::InvalidLayoutError(format!(
                "start cell {} is a wall",
                start
            )));
        }

        Ok(Self { size, start, walls })
    }

    /// The 3x3 layout with the agent in the top-left corner and a wall in the center.
    pub fn reference() -> Self {
        Self {
            size: 3,
            start: 0,
            walls: vec![4],
        }
    }

    /// Builds a layout from text rows.
    ///
    /// `.` is a free cell, `#` a wall and `A` the start cell of the agent.
    /// There must be exactly one `A` and as many rows as columns.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, GridError> {
        let size = rows.len();
        let mut start = None;
        let mut walls = vec![];

        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.chars().count() != size {
                return Err(GridError::InvalidLayoutError(format!(
                    "row {} has {} cells, expected {}",
                    r,
                    row.chars().count(),
                    size
                )));
            }
            for (c, ch) in row.chars().enumerate() {
                let ix = r * size + c;
                match ch {
                    '.' => {}
                    '#' => walls.push(ix),
                    'A' if start.is_none() => start = Some(ix),
                    'A' => {
                        return Err(GridError::InvalidLayoutError(
                            "more than one start cell".to_string(),
                        ))
                    }
                    _ => {
                        return Err(GridError::InvalidLayoutError(format!(
                            "unknown cell symbol {:?}",
                            ch
                        )))
                    }
                }
            }
        }

        let start = start
            .ok_or_else(|| GridError::InvalidLayoutError("no start cell".to_string()))?;
        Self::new(size, start, walls)
    }

    /// Builds a layout from a matrix of cell codes.
    ///
    /// `0` and `1` are free cells, `2` is a wall and `3` the start cell.
    pub fn from_schematic(schematic: &[Vec<u8>]) -> Result<Self, GridError> {
        let rows = schematic
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&code| match code {
                        0 | 1 => Ok('.'),
                        2 => Ok('#'),
                        3 => Ok('A'),
                        _ => Err(GridError::InvalidLayoutError(format!(
                            "unknown cell code {}",
                            code
                        ))),
                    })
                    .collect::<Result<String, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_rows(&rows)
    }

    /// The number of cells along an axis.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Row-major index of the start cell.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Sorted row-major indices of the walls.
    pub fn walls(&self) -> &[usize] {
        &self.walls
    }

    /// Returns `true` if the cell at `ix` is a wall.
    pub fn is_wall(&self, ix: usize) -> bool {
        self.walls.binary_search(&ix).is_ok()
    }

    /// The number of non-wall cells.
    pub fn coverable_cells(&self) -> usize {
        self.size * self.size - self.walls.len()
    }

    /// Text form of the layout, the inverse of [`Layout::from_rows`].
    pub fn to_rows(&self) -> Vec<String> {
        (0..self.size)
            .map(|r| {
                (0..self.size)
                    .map(|c| {
                        let ix = r * self.size + c;
                        if ix == self.start {
                            'A'
                        } else if self.is_wall(ix) {
                            '#'
                        } else {
                            '.'
                        }
                    })
                    .collect()
            })
            .collect()
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::reference()
    }
}
