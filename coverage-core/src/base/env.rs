//! Environment.
use super::{Act, Info, Obs, Step};
use crate::record::Record;
use anyhow::Result;

/// Represents an environment, typically an MDP.
///
/// The lifecycle is `build`, then `reset`, then `step` until the returned
/// [`Step`] is done. `render` and `close` are optional for headless
/// environments and do nothing by default.
pub trait Env {
    /// Configurations.
    type Config: Clone;

    /// Observation of the environment.
    type Obs: Obs;

    /// Action of the environment.
    type Act: Act;

    /// Information in the [`Step`] object.
    type Info: Info;

    /// Builds an environment with a given random seed.
    fn build(config: &Self::Config, seed: i64) -> Result<Self>
    where
        Self: Sized;

    /// Performs an environment step.
    ///
    /// The returned [`Record`] is metadata of the transition.
    fn step(&mut self, a: &Self::Act) -> Result<(Step<Self>, Record)>
    where
        Self: Sized;

    /// Resets the environment and returns the initial observation with metadata.
    fn reset(&mut self) -> Result<(Self::Obs, Record)>;

    /// Resets the environment with a given index.
    ///
    /// The index is used in an arbitrary way, e.g. as a random seed for
    /// evaluation episodes. The default implementation ignores it.
    fn reset_with_index(&mut self, _ix: usize) -> Result<Self::Obs> {
        let (obs, _) = self.reset()?;
        Ok(obs)
    }

    /// Performs an environment step and resets the environment if the episode ends.
    ///
    /// The initial observation of the next episode is stored in [`Step::init_obs`].
    fn step_with_reset(&mut self, a: &Self::Act) -> Result<(Step<Self>, Record)>
    where
        Self: Sized,
    {
        let (mut step, record) = self.step(a)?;
        if step.is_done() {
            let (init_obs, _) = self.reset()?;
            step.init_obs = Some(init_obs);
        }
        Ok((step, record))
    }

    /// Renders the current state.
    fn render(&mut self) -> Result<()> {
        Ok(())
    }

    /// Releases resources held by the environment.
    fn close(&mut self) {}
}
