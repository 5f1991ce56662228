//! Policies acting on an environment.
use super::Env;
use crate::util::load_yaml;
use anyhow::Result;
use serde::de::DeserializeOwned;
use std::path::Path;

/// Maps observations of an environment to actions.
pub trait Policy<E: Env> {
    /// Chooses an action for the given observation.
    fn sample(&mut self, obs: &E::Obs) -> E::Act;

    /// Clears per-episode state.
    ///
    /// Drivers call this before the first step of every episode.
    fn reset(&mut self) {}
}

/// A policy built from a serializable configuration.
pub trait Configurable<E: Env> {
    /// Configuration.
    type Config: Clone + DeserializeOwned;

    /// Builds the policy, failing if the configuration is inconsistent with `E`.
    fn build(config: Self::Config) -> Result<Self>
    where
        Self: Sized;

    /// Builds the policy from the configuration in a YAML file.
    fn build_from_path(path: impl AsRef<Path>) -> Result<Self>
    where
        Self: Sized,
    {
        Self::build(load_yaml(path)?)
    }
}
