//! Visual projection of the grid.
//!
//! The environment only depends on the [`Renderer`] trait. [`TileRenderer`]
//! draws tiles into a window, [`NullRenderer`] draws nothing and is meant for
//! headless runs and tests.
mod clock;
mod frame;
mod palette;
mod tile;
mod window;
use crate::Grid;
use anyhow::Result;
pub use clock::FrameClock;
pub use frame::Frame;
pub use palette::{Palette, Rgb};
pub use tile::TileRenderer;

/// Read-only state given to a [`Renderer`].
#[derive(Debug, Clone, Copy)]
pub struct GridView<'a> {
    /// Cell states.
    pub grid: &'a Grid,

    /// Row-major index of the agent.
    pub agent_pos: usize,
}

/// Draws grid states.
pub trait Renderer {
    /// Draws the given state.
    fn render(&mut self, view: &GridView) -> Result<()>;

    /// Releases presentation resources. Must be safe to call repeatedly.
    fn close(&mut self);
}

/// A renderer without any output.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _view: &GridView) -> Result<()> {
        Ok(())
    }

    fn close(&mut self) {}
}
