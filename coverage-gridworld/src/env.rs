//! The coverage simulation.
mod config;
use crate::{
    render::{GridView, NullRenderer, Renderer, TileRenderer},
    CellState, Grid, GridAct, GridError, GridObs, Layout,
};
use anyhow::Result;
pub use config::{GridEnvConfig, RenderMode};
use coverage_core::{record::Record, Env, Step};
use log::{debug, error, info, trace};

/// Phase of the current episode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EpisodePhase {
    /// No episode was started since the environment was built.
    Uninitialized,

    /// The agent is moving.
    Active,

    /// Every coverable cell was visited.
    Terminal,

    /// The step budget ran out, only with `truncate_on_budget`.
    Truncated,
}

/// An agent covering every non-wall cell of a square grid.
///
/// Moving onto an unexplored cell yields a reward of `1`. Moves into a wall or
/// off the grid, and [`GridAct::Stay`], leave the state unchanged. The episode
/// terminates when every non-wall cell has been visited.
///
/// ```rust
/// use coverage_core::Env as _;
/// use coverage_gridworld::{CoverageEnv, GridAct, GridEnvConfig};
///
/// let mut env = CoverageEnv::build(&GridEnvConfig::default(), 0).unwrap();
/// let (obs, _) = env.reset().unwrap();
/// assert_eq!(obs.cells(), &[3, 0, 0, 0, 2, 0, 0, 0, 0]);
///
/// let (step, _) = env.step(&GridAct::Right).unwrap();
/// assert_eq!(step.reward, 1.0);
/// assert_eq!(step.obs.cells(), &[1, 3, 0, 0, 2, 0, 0, 0, 0]);
/// ```
pub struct CoverageEnv {
    config: GridEnvConfig,

    // Cell states of the current episode
    grid: Grid,

    // Row-major index of the agent
    agent_pos: usize,

    // Cells visited in the current episode, including the current one
    total_covered_cells: usize,

    // Non-wall cells of the layout
    coverable_cells: usize,

    steps_remaining: usize,

    phase: EpisodePhase,

    renderer: Box<dyn Renderer>,

    // Cleared when an automatic render fails
    auto_render: bool,
}

impl CoverageEnv {
    /// Builds an environment drawing with the given renderer.
    ///
    /// The render mode of `config` still decides whether rendering is allowed.
    pub fn with_renderer(config: &GridEnvConfig, renderer: Box<dyn Renderer>) -> Self {
        let layout = &config.layout;
        info!(
            "Build coverage gridworld: {}x{}, {} coverable cells, render mode {}",
            layout.size(),
            layout.size(),
            layout.coverable_cells(),
            config.render_mode
        );

        Self {
            config: config.clone(),
            grid: Grid::from_layout(layout),
            agent_pos: layout.start(),
            total_covered_cells: 1,
            coverable_cells: layout.coverable_cells(),
            steps_remaining: config.step_budget,
            phase: EpisodePhase::Uninitialized,
            renderer,
            auto_render: config.render_mode == RenderMode::Interactive,
        }
    }

    /// Returns the phase of the current episode.
    pub fn phase(&self) -> EpisodePhase {
        self.phase
    }

    /// Returns the row-major index of the agent.
    pub fn agent_pos(&self) -> usize {
        self.agent_pos
    }

    /// Returns `(row, col)` of the agent.
    pub fn agent_coords(&self) -> (usize, usize) {
        self.grid.coords_of(self.agent_pos)
    }

    /// Returns the number of cells visited in the current episode.
    pub fn total_covered_cells(&self) -> usize {
        self.total_covered_cells
    }

    /// Returns the number of non-wall cells.
    pub fn coverable_cells(&self) -> usize {
        self.coverable_cells
    }

    /// Returns the remaining step budget.
    pub fn steps_remaining(&self) -> usize {
        self.steps_remaining
    }

    /// Returns the cell states.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the layout.
    pub fn layout(&self) -> &Layout {
        &self.config.layout
    }

    /// Returns the configuration.
    pub fn config(&self) -> &GridEnvConfig {
        &self.config
    }

    /// Returns the current observation.
    pub fn observation(&self) -> GridObs {
        GridObs::from(&self.grid)
    }

    /// Moves the agent. Returns `true` if an unexplored cell was entered.
    fn move_agent(&mut self, act: GridAct) -> bool {
        let target = match act
            .delta()
            .and_then(|delta| self.grid.offset(self.agent_pos, delta))
        {
            Some(target) => target,
            None => return false,
        };

        match self.grid.get(target) {
            CellState::Wall => false,
            prior => {
                self.grid.set(self.agent_pos, CellState::Explored);
                self.grid.set(target, CellState::Agent);
                self.agent_pos = target;
                if prior == CellState::Unexplored {
                    self.total_covered_cells += 1;
                    true
                } else {
                    false
                }
            }
        }
    }

    fn auto_render(&mut self) {
        if !self.auto_render {
            return;
        }
        let view = GridView {
            grid: &self.grid,
            agent_pos: self.agent_pos,
        };
        if let Err(e) = self.renderer.render(&view) {
            error!("{}; automatic rendering is disabled", e);
            self.auto_render = false;
        }
    }
}

impl Env for CoverageEnv {
    type Config = GridEnvConfig;
    type Obs = GridObs;
    type Act = GridAct;
    type Info = ();

    /// Builds the environment; the seed is unused as the dynamics are deterministic.
    fn build(config: &Self::Config, _seed: i64) -> Result<Self> {
        let renderer: Box<dyn Renderer> = match config.render_mode {
            RenderMode::Interactive => {
                let size = config.layout.size();
                Box::new(
                    TileRenderer::new(size, config.palette.clone(), config.render_fps)
                        .title(format!("coverage gridworld {}x{}", size, size)),
                )
            }
            RenderMode::Disabled => Box::new(NullRenderer),
        };
        Ok(Self::with_renderer(config, renderer))
    }

    fn reset(&mut self) -> Result<(Self::Obs, Record)> {
        let layout = &self.config.layout;
        self.grid = Grid::from_layout(layout);
        self.agent_pos = layout.start();
        self.total_covered_cells = 1;
        self.coverable_cells = layout.coverable_cells();
        self.steps_remaining = self.config.step_budget;
        self.phase = EpisodePhase::Active;
        debug!(
            "Reset: agent at {:?}, {} cells to cover",
            self.agent_coords(),
            self.coverable_cells
        );

        self.auto_render();
        Ok((self.observation(), Record::empty()))
    }

    fn reset_with_index(&mut self, ix: usize) -> Result<Self::Obs> {
        debug!("Reset for evaluation episode {}", ix);
        let (obs, _) = self.reset()?;
        Ok(obs)
    }

    fn step(&mut self, act: &Self::Act) -> Result<(Step<Self>, Record)> {
        match self.phase {
            EpisodePhase::Active => {}
            EpisodePhase::Terminal | EpisodePhase::Truncated
                if self.config.allow_step_after_done => {}
            phase => return Err(GridError::InvalidStateError(phase).into()),
        }

        self.steps_remaining = self.steps_remaining.saturating_sub(1);
        let newly_covered = self.move_agent(*act);
        let reward = if newly_covered { 1.0 } else { 0.0 };
        let is_terminated = self.total_covered_cells == self.coverable_cells;
        let is_truncated =
            self.config.truncate_on_budget && !is_terminated && self.steps_remaining == 0;

        trace!(
            "{:?} -> agent at {:?}, reward {}, covered {}/{}",
            act,
            self.agent_coords(),
            reward,
            self.total_covered_cells,
            self.coverable_cells
        );

        if is_terminated {
            if self.phase != EpisodePhase::Terminal {
                info!(
                    "Covered all {} cells, {} steps remaining",
                    self.coverable_cells, self.steps_remaining
                );
            }
            self.phase = EpisodePhase::Terminal;
        } else if is_truncated {
            if self.phase != EpisodePhase::Truncated {
                info!(
                    "Step budget exhausted, covered {}/{} cells",
                    self.total_covered_cells, self.coverable_cells
                );
            }
            self.phase = EpisodePhase::Truncated;
        }

        self.auto_render();
        let step = Step::new(
            self.observation(),
            *act,
            reward,
            is_terminated,
            is_truncated,
            (),
        );
        Ok((step, Record::empty()))
    }

    fn render(&mut self) -> Result<()> {
        match self.config.render_mode {
            RenderMode::Interactive => {
                let view = GridView {
                    grid: &self.grid,
                    agent_pos: self.agent_pos,
                };
                self.renderer.render(&view)
            }
            mode => Err(GridError::UnsupportedRenderModeError(mode).into()),
        }
    }

    fn close(&mut self) {
        self.renderer.close();
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::{cell::RefCell, rc::Rc};

    /// Counts frames and fails on demand.
    struct CountingRenderer {
        frames: Rc<RefCell<Vec<Vec<u8>>>>,
        fail: bool,
        closed: Rc<RefCell<usize>>,
    }

    impl Renderer for CountingRenderer {
        fn render(&mut self, view: &GridView) -> Result<()> {
            if self.fail {
                return Err(GridError::RenderDependencyUnavailableError("no display".into()).into());
            }
            self.frames.borrow_mut().push(view.grid.codes());
            Ok(())
        }

        fn close(&mut self) {
            *self.closed.borrow_mut() += 1;
        }
    }

    fn counting_env(
        mode: RenderMode,
        fail: bool,
    ) -> (CoverageEnv, Rc<RefCell<Vec<Vec<u8>>>>, Rc<RefCell<usize>>) {
        let frames = Rc::new(RefCell::new(vec![]));
        let closed = Rc::new(RefCell::new(0));
        let renderer = CountingRenderer {
            frames: frames.clone(),
            fail,
            closed: closed.clone(),
        };
        let config = GridEnvConfig::default().render_mode(mode);
        let env = CoverageEnv::with_renderer(&config, Box::new(renderer));
        (env, frames, closed)
    }

    #[test]
    fn test_step_before_reset() {
        let mut env = CoverageEnv::build(&GridEnvConfig::default(), 0).unwrap();
        let err = env.step(&GridAct::Down).err().unwrap();
        assert_eq!(
            err.downcast_ref::<GridError>(),
            Some(&GridError::InvalidStateError(EpisodePhase::Uninitialized))
        );
        assert_eq!(env.phase(), EpisodePhase::Uninitialized);
    }

    #[test]
    fn test_auto_render_on_reset_and_step() {
        let (mut env, frames, _) = counting_env(RenderMode::Interactive, false);
        env.reset().unwrap();
        env.step(&GridAct::Down).unwrap();
        env.render().unwrap();
        let frames = frames.borrow();
        assert_eq!(frames.len(), 3);
        assert_eq!(frames[1], vec![1, 0, 0, 3, 2, 0, 0, 0, 0]);
    }

    #[test]
    fn test_failed_auto_render_keeps_state() {
        let (mut env, frames, _) = counting_env(RenderMode::Interactive, true);
        env.reset().unwrap();
        let (step, _) = env.step(&GridAct::Right).unwrap();
        assert_eq!(step.reward, 1.0);
        assert_eq!(env.total_covered_cells(), 2);
        assert!(frames.borrow().is_empty());
        assert!(env.render().is_err());
        assert_eq!(env.agent_pos(), 1);
    }

    #[test]
    fn test_render_disabled_mode() {
        let (mut env, frames, closed) = counting_env(RenderMode::Disabled, false);
        env.reset().unwrap();
        let before = env.observation();
        let err = env.render().unwrap_err();
        assert_eq!(
            err.downcast_ref::<GridError>(),
            Some(&GridError::UnsupportedRenderModeError(RenderMode::Disabled))
        );
        assert_eq!(env.observation(), before);
        assert!(frames.borrow().is_empty());

        env.close();
        env.close();
        assert_eq!(*closed.borrow(), 2);
    }
}
