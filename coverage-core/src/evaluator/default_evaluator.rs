//! Default implementation of the [`Evaluator`] trait.
//!
//! Runs a fixed number of episodes and reports the average return.
use super::Evaluator;
use crate::{
    record::{Record, RecordValue},
    Env, Policy,
};
use anyhow::Result;
use log::{debug, info};

/// Runs a fixed number of episodes and averages their returns.
///
/// Every episode is cut after `max_steps` steps, so that a policy which never
/// reaches a terminal state does not block the evaluation. The policy is
/// [reset](Policy::reset) before every episode.
///
/// The returned [`Record`] has the following keys:
///
/// * `"Episode return"` - average return over episodes.
/// * `"Episode length"` - average number of steps per episode.
/// * `"Done episodes"` - number of episodes ended by the environment.
///
/// ```ignore
/// let config = EnvConfig::default();
/// let mut evaluator = DefaultEvaluator::new(&config, 42, 10)?;
/// let record = evaluator.evaluate(&mut policy)?;
/// println!("Average return: {}", record.get_scalar("Episode return")?);
/// ```
pub struct DefaultEvaluator<E: Env> {
    /// The number of episodes to run during evaluation.
    n_episodes: usize,

    /// Maximum number of steps in an episode.
    max_steps: usize,

    /// The environment instance used for evaluation.
    env: E,
}

impl<E: Env> Evaluator<E> for DefaultEvaluator<E> {
    fn evaluate<P>(&mut self, policy: &mut P) -> Result<Record>
    where
        P: Policy<E>,
    {
        let mut r_total = 0f32;
        let mut len_total = 0usize;
        let mut n_done = 0i64;

        for ix in 0..self.n_episodes {
            let mut prev_obs = self.env.reset_with_index(ix)?;
            policy.reset();
            let mut r_episode = 0f32;
            let mut n_steps = 0;

            while n_steps < self.max_steps {
                let act = policy.sample(&prev_obs);
                let (step, _) = self.env.step(&act)?;
                r_episode += step.reward;
                n_steps += 1;
                if step.is_done() {
                    n_done += 1;
                    break;
                }
                prev_obs = step.obs;
            }

            debug!(
                "Episode {}: {} steps, return = {}",
                ix, n_steps, r_episode
            );
            r_total += r_episode;
            len_total += n_steps;
        }

        let n = self.n_episodes.max(1) as f32;
        info!(
            "Evaluated {} episodes, average return = {}",
            self.n_episodes,
            r_total / n
        );

        Ok(Record::from_slice(&[
            ("Episode return", RecordValue::Scalar(r_total / n)),
            ("Episode length", RecordValue::Scalar(len_total as f32 / n)),
            ("Done episodes", RecordValue::Integer(n_done)),
        ]))
    }
}

impl<E: Env> DefaultEvaluator<E> {
    /// Constructs a new [`DefaultEvaluator`].
    ///
    /// * `config` - Configuration for the environment
    /// * `seed` - Random seed for environment initialization
    /// * `n_episodes` - Number of episodes to run during evaluation
    pub fn new(config: &E::Config, seed: i64, n_episodes: usize) -> Result<Self> {
        Ok(Self {
            n_episodes,
            max_steps: 1000,
            env: E::build(config, seed)?,
        })
    }

    /// Sets the maximum number of steps in an episode.
    pub fn max_steps(mut self, v: usize) -> Self {
        self.max_steps = v;
        self
    }

    /// Closes the environment used for evaluation.
    pub fn close(&mut self) {
        self.env.close();
    }
}
