//! Colors of the tiles.
use crate::CellState;
use serde::{Deserialize, Serialize};

/// An RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Black.
    pub const BLACK: Rgb = Rgb(0, 0, 0);

    /// White.
    pub const WHITE: Rgb = Rgb(255, 255, 255);

    /// Brown.
    pub const BROWN: Rgb = Rgb(101, 67, 33);

    /// Grey.
    pub const GREY: Rgb = Rgb(160, 161, 161);

    /// Packs the color into the `0RGB` format of window framebuffers.
    pub fn to_u32(self) -> u32 {
        (self.0 as u32) << 16 | (self.1 as u32) << 8 | self.2 as u32
    }

    /// Inverse of [`Rgb::to_u32`].
    pub fn from_u32(v: u32) -> Self {
        Self((v >> 16) as u8, (v >> 8) as u8, v as u8)
    }
}

/// Mapping from cell states to colors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Fill of unexplored cells.
    pub unexplored: Rgb,

    /// Fill of explored cells.
    pub explored: Rgb,

    /// Fill of walls.
    pub wall: Rgb,

    /// Marker of the agent.
    pub agent: Rgb,

    /// Background under the agent marker.
    pub agent_background: Rgb,

    /// Border of explored tiles.
    pub explored_border: Rgb,

    /// Border of all other tiles.
    pub border: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            unexplored: Rgb::BLACK,
            explored: Rgb::WHITE,
            wall: Rgb::BROWN,
            agent: Rgb::GREY,
            agent_background: Rgb::WHITE,
            explored_border: Rgb::BLACK,
            border: Rgb::WHITE,
        }
    }
}

impl Palette {
    /// Fill color of a tile.
    pub fn fill(&self, state: CellState) -> Rgb {
        match state {
            CellState::Unexplored => self.unexplored,
            CellState::Explored => self.explored,
            CellState::Wall => self.wall,
            CellState::Agent => self.agent_background,
        }
    }

    /// Border color of a tile.
    pub fn border(&self, state: CellState) -> Rgb {
        match state {
            CellState::Explored => self.explored_border,
            _ => self.border,
        }
    }
}
