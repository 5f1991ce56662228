#![warn(missing_docs)]
//! A gridworld where the agent has to visit every cell while avoiding walls.
//!
//! The agent earns a reward of `1` for every cell it enters for the first
//! time, and the episode terminates once all non-wall cells were visited.
//! Observations are the row-major cell states ([`CellState`]), actions are
//! the four moves and staying in place ([`GridAct`]).
//!
//! Here is an example of running the reference 3x3 layout with a fixed
//! action sequence.
//!
//! ```rust
//! use anyhow::Result;
//! use coverage_core::{Env as _, Policy};
//! use coverage_gridworld::{CoverageEnv, GridAct, GridEnvConfig, ScriptedPolicy};
//!
//! fn main() -> Result<()> {
//!     let config = GridEnvConfig::default();
//!     let mut env = CoverageEnv::build(&config, 0)?;
//!     let mut policy = ScriptedPolicy::from_indices(&[1, 1, 2, 2, 3, 3, 0])?;
//!
//!     let (mut obs, _) = env.reset()?;
//!     let mut total_reward = 0.0;
//!     loop {
//!         let (step, _) = env.step(&policy.sample(&obs))?;
//!         total_reward += step.reward;
//!         if step.is_done() {
//!             break;
//!         }
//!         obs = step.obs;
//!     }
//!
//!     assert_eq!(total_reward, 7.0);
//!     assert_eq!(env.total_covered_cells(), env.coverable_cells());
//!     env.close();
//!     Ok(())
//! }
//! ```
//!
//! Environments can also be created by id, without naming their type:
//!
//! ```rust
//! use coverage_core::registry::MakeOptions;
//!
//! let registry = coverage_gridworld::registry().unwrap();
//! let mut env = registry.make("simple-coverage", &MakeOptions::default()).unwrap();
//! let (obs, _) = env.reset().unwrap();
//! assert_eq!(obs.len(), 9);
//! ```
//!
//! Interactive rendering draws into a window and needs the `window` feature.
mod act;
mod env;
mod error;
mod grid;
mod layout;
mod obs;
mod policy;
mod registry;
pub mod render;
pub use act::GridAct;
pub use env::{CoverageEnv, EpisodePhase, GridEnvConfig, RenderMode};
pub use error::GridError;
pub use grid::{CellState, Grid};
pub use layout::Layout;
pub use obs::GridObs;
pub use policy::{RandomPolicy, RandomPolicyConfig, ScriptedPolicy, ScriptedPolicyConfig};
pub use registry::{register_envs, registry, SIMPLE_COVERAGE, SIMPLE_COVERAGE_COMPLETE};
pub use render::{Palette, Renderer};
