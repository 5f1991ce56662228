//! Policies without learning, used by demos and tests.
use crate::{CoverageEnv, GridAct, GridObs};
use anyhow::Result;
use coverage_core::{Configurable, Policy};
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
/// Configuration of [`RandomPolicy`].
pub struct RandomPolicyConfig {
    /// Seed of the random number generator, a random seed if `None`.
    pub seed: Option<u64>,
}

/// Samples actions uniformly.
pub struct RandomPolicy {
    rng: fastrand::Rng,
}

impl Policy<CoverageEnv> for RandomPolicy {
    fn sample(&mut self, _: &GridObs) -> GridAct {
        GridAct::ALL[self.rng.usize(..GridAct::N)]
    }
}

impl Configurable<CoverageEnv> for RandomPolicy {
    type Config = RandomPolicyConfig;

    fn build(config: Self::Config) -> Result<Self> {
        let rng = match config.seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        };
        Ok(Self { rng })
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
/// Configuration of [`ScriptedPolicy`].
pub struct ScriptedPolicyConfig {
    /// Action indices in the order they are taken, `0..=4` for
    /// left, down, right, up and stay.
    pub actions: Vec<i64>,
}

/// Replays a fixed sequence of actions, then stays in place.
pub struct ScriptedPolicy {
    actions: Vec<GridAct>,
    next: usize,
}

impl ScriptedPolicy {
    /// Builds the policy from action indices.
    pub fn from_indices(ixs: &[i64]) -> Result<Self> {
        <Self as Configurable<CoverageEnv>>::build(ScriptedPolicyConfig {
            actions: ixs.to_vec(),
        })
    }

    /// Returns `true` after the last scripted action was sampled.
    pub fn is_exhausted(&self) -> bool {
        self.next >= self.actions.len()
    }
}

impl Policy<CoverageEnv> for ScriptedPolicy {
    fn sample(&mut self, _: &GridObs) -> GridAct {
        match self.actions.get(self.next) {
            Some(&act) => {
                self.next += 1;
                act
            }
            None => GridAct::Stay,
        }
    }

    /// Restarts the script.
    fn reset(&mut self) {
        self.next = 0;
    }
}

impl Configurable<CoverageEnv> for ScriptedPolicy {
    type Config = ScriptedPolicyConfig;

    fn build(config: Self::Config) -> Result<Self> {
        let actions = config
            .actions
            .into_iter()
            .map(<GridAct as TryFrom<i64>>::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { actions, next: 0 })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{GridEnvConfig, GridError};
    use coverage_core::Env;

    #[test]
    fn test_scripted_then_stay() {
        let mut env = CoverageEnv::build(&GridEnvConfig::default(), 0).unwrap();
        let (obs, _) = env.reset().unwrap();
        let mut policy = ScriptedPolicy::from_indices(&[1, 2]).unwrap();
        assert_eq!(policy.sample(&obs), GridAct::Down);
        assert_eq!(policy.sample(&obs), GridAct::Right);
        assert!(policy.is_exhausted());
        assert_eq!(policy.sample(&obs), GridAct::Stay);
        policy.reset();
        assert_eq!(policy.sample(&obs), GridAct::Down);

        let err = ScriptedPolicy::from_indices(&[0, 9]).err().unwrap();
        assert_eq!(
            err.downcast_ref::<GridError>(),
            Some(&GridError::InvalidActionError(9))
        );
    }

    #[test]
    fn test_random_policy_is_seeded() {
        let obs = CoverageEnv::build(&GridEnvConfig::default(), 0)
            .unwrap()
            .observation();
        let config = RandomPolicyConfig { seed: Some(42) };
        let mut p1 = <RandomPolicy as Configurable<CoverageEnv>>::build(config.clone()).unwrap();
        let mut p2 = <RandomPolicy as Configurable<CoverageEnv>>::build(config).unwrap();
        let a1 = (0..20).map(|_| p1.sample(&obs)).collect::<Vec<_>>();
        let a2 = (0..20).map(|_| p2.sample(&obs)).collect::<Vec<_>>();
        assert_eq!(a1, a2);
    }
}
