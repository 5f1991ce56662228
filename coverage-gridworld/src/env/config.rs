//! Configuration of [`CoverageEnv`](super::CoverageEnv).
use crate::{Layout, Palette};
use anyhow::Result;
use coverage_core::util::{load_yaml, save_yaml};
use serde::{Deserialize, Serialize};
use std::{fmt, path::Path, str::FromStr};

/// Whether the environment draws its state in a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// Draw after every reset and step, throttled to the configured frame rate.
    Interactive,

    /// Never draw.
    #[serde(rename = "none")]
    Disabled,
}

impl Default for RenderMode {
    fn default() -> Self {
        Self::Disabled
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Interactive => write!(f, "interactive"),
            Self::Disabled => write!(f, "none"),
        }
    }
}

impl FromStr for RenderMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "interactive" | "human" => Ok(Self::Interactive),
            "none" => Ok(Self::Disabled),
            _ => Err(anyhow::anyhow!(
                "Unknown render mode {:?}, expected \"interactive\" or \"none\"",
                s
            )),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
/// Configurations of [`CoverageEnv`](super::CoverageEnv).
///
/// All fields have defaults, so a YAML file only needs the values that differ:
///
/// ```yaml
/// layout:
///   rows: ["A...", ".#..", "..#.", "...."]
/// step_budget: 100
/// truncate_on_budget: true
/// ```
pub struct GridEnvConfig {
    pub(super) layout: Layout,
    pub(super) step_budget: usize,
    pub(super) render_mode: RenderMode,
    pub(super) render_fps: u32,
    pub(super) palette: Palette,
    pub(super) truncate_on_budget: bool,
    pub(super) allow_step_after_done: bool,
}

impl Default for GridEnvConfig {
    fn default() -> Self {
        Self {
            layout: Layout::reference(),
            step_budget: 500,
            render_mode: RenderMode::Disabled,
            render_fps: 10,
            palette: Palette::default(),
            truncate_on_budget: false,
            allow_step_after_done: false,
        }
    }
}

impl GridEnvConfig {
    /// Sets the layout.
    pub fn layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    /// Sets the number of steps available in an episode.
    pub fn step_budget(mut self, v: usize) -> Self {
        self.step_budget = v;
        self
    }

    /// Sets the render mode.
    pub fn render_mode(mut self, v: RenderMode) -> Self {
        self.render_mode = v;
        self
    }

    /// Sets the frame rate of interactive rendering.
    pub fn render_fps(mut self, v: u32) -> Self {
        self.render_fps = v;
        self
    }

    /// Sets the colors of the tiles.
    pub fn palette(mut self, v: Palette) -> Self {
        self.palette = v;
        self
    }

    /// If `true`, an episode is truncated when the step budget runs out.
    pub fn truncate_on_budget(mut self, v: bool) -> Self {
        self.truncate_on_budget = v;
        self
    }

    /// If `true`, steps after the end of an episode are accepted.
    pub fn allow_step_after_done(mut self, v: bool) -> Self {
        self.allow_step_after_done = v;
        self
    }

    /// Returns the layout.
    pub fn get_layout(&self) -> &Layout {
        &self.layout
    }

    /// Returns the render mode.
    pub fn get_render_mode(&self) -> RenderMode {
        self.render_mode
    }

    /// Returns the step budget.
    pub fn get_step_budget(&self) -> usize {
        self.step_budget
    }

    /// Returns `true` if steps after the end of an episode are accepted.
    pub fn get_allow_step_after_done(&self) -> bool {
        self.allow_step_after_done
    }

    /// Loads a configuration from a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        load_yaml(path)
    }

    /// Saves the configuration to a YAML file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        save_yaml(self, path)
    }
}
