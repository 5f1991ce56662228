//! Tiled rendering of the grid.
use super::{window::Surface, Frame, FrameClock, GridView, Palette, Renderer};
use anyhow::Result;
use log::info;

const TILE_PIXELS: usize = 64;
const MAX_WINDOW_PIXELS: usize = 512;

/// Draws each cell as a bordered tile and shows the frame in a window.
///
/// The window and the frame clock are acquired on the first call of
/// [`Renderer::render`] and released by [`Renderer::close`]. Tiles of explored
/// cells have a dark border, the agent is drawn as an ellipse on a light tile.
pub struct TileRenderer {
    title: String,
    palette: Palette,
    fps: u32,
    tile_size: usize,
    frame: Frame,
    surface: Option<Surface>,
    clock: Option<FrameClock>,
}

impl TileRenderer {
    /// Creates a renderer for a grid of `grid_size x grid_size` cells.
    ///
    /// The window is at most 512 pixels wide unless the grid has more cells
    /// per row, in which case every tile is a single pixel.
    pub fn new(grid_size: usize, palette: Palette, fps: u32) -> Self {
        let grid_size = grid_size.max(1);
        let window_size = TILE_PIXELS
            .saturating_mul(grid_size)
            .min(MAX_WINDOW_PIXELS)
            .max(grid_size);
        Self {
            title: "coverage gridworld".to_string(),
            palette,
            fps,
            tile_size: window_size / grid_size,
            frame: Frame::new(window_size, window_size),
            surface: None,
            clock: None,
        }
    }

    /// Sets the window title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Width and height of a tile in pixels.
    pub fn tile_size(&self) -> usize {
        self.tile_size
    }

    /// The last painted frame.
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Returns `true` while a window is open.
    pub fn is_open(&self) -> bool {
        self.surface.is_some()
    }

    /// Paints the tiles of the grid into the frame without presenting it.
    pub fn paint(&mut self, view: &GridView) -> &Frame {
        let t = self.tile_size;
        let inner = (t * 99 / 100).max(1);
        let grid = view.grid;

        // Margin left when the window is not a multiple of the tile size
        self.frame.clear(self.palette.border);
        for (ix, state) in grid.iter().enumerate() {
            let (row, col) = grid.coords_of(ix);
            let (x, y) = (col * t, row * t);

            self.frame
                .fill_rect(x, y, t, t, self.palette.border(state));
            if ix == view.agent_pos {
                self.frame
                    .fill_rect(x, y, inner, inner, self.palette.agent_background);
                self.frame.fill_ellipse(x, y, inner, inner, self.palette.agent);
            } else {
                self.frame.fill_rect(x, y, inner, inner, self.palette.fill(state));
            }
        }

        &self.frame
    }
}

impl Renderer for TileRenderer {
    fn render(&mut self, view: &GridView) -> Result<()> {
        if self.surface.is_none() {
            let surface = Surface::open(&self.title, self.frame.width(), self.frame.height())?;
            info!(
                "Opened window {:?} ({}x{})",
                self.title,
                self.frame.width(),
                self.frame.height()
            );
            self.surface = Some(surface);
        }

        self.paint(view);

        if let Some(surface) = self.surface.as_mut() {
            surface.present(&self.frame)?;
        }
        let fps = self.fps;
        self.clock.get_or_insert_with(|| FrameClock::new(fps)).tick();

        Ok(())
    }

    fn close(&mut self) {
        if self.surface.take().is_some() {
            info!("Closed window {:?}", self.title);
        }
        self.clock = None;
    }
}
