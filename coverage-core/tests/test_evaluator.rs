use anyhow::{bail, Result};
use coverage_core::{
    record::Record, Act, Configurable, DefaultEvaluator, Env, Evaluator, Obs, Policy, Step,
};
use serde::Deserialize;
use std::io::Write;
use tempdir::TempDir;
use test_log::test;

#[derive(Clone, Debug)]
struct PosObs(i64);

impl Obs for PosObs {
    fn len(&self) -> usize {
        1
    }
}

#[derive(Clone, Debug)]
struct StepAct(i64);

impl Act for StepAct {
    fn len(&self) -> usize {
        1
    }
}

/// A walk on a line which terminates at `goal`, rewarding every step forward.
struct LineEnv {
    goal: i64,
    pos: i64,
}

impl Env for LineEnv {
    type Config = i64;
    type Obs = PosObs;
    type Act = StepAct;
    type Info = ();

    fn build(config: &Self::Config, _seed: i64) -> Result<Self> {
        Ok(Self {
            goal: *config,
            pos: 0,
        })
    }

    fn step(&mut self, a: &Self::Act) -> Result<(Step<Self>, Record)> {
        self.pos += a.0;
        let reward = if a.0 > 0 { 1.0 } else { 0.0 };
        let step = Step::new(
            PosObs(self.pos),
            a.clone(),
            reward,
            self.pos >= self.goal,
            false,
            (),
        );
        Ok((step, Record::empty()))
    }

    fn reset(&mut self) -> Result<(Self::Obs, Record)> {
        self.pos = 0;
        Ok((PosObs(0), Record::empty()))
    }
}

#[derive(Clone, Deserialize)]
struct ConstPolicyConfig {
    stride: i64,
}

struct ConstPolicy {
    stride: i64,
}

impl Policy<LineEnv> for ConstPolicy {
    fn sample(&mut self, _: &PosObs) -> StepAct {
        StepAct(self.stride)
    }
}

impl Configurable<LineEnv> for ConstPolicy {
    type Config = ConstPolicyConfig;

    fn build(config: Self::Config) -> Result<Self> {
        if config.stride < 0 {
            bail!("stride must not be negative, got {}", config.stride);
        }
        Ok(Self {
            stride: config.stride,
        })
    }
}

#[test]
fn test_average_return() -> Result<()> {
    let mut evaluator = DefaultEvaluator::<LineEnv>::new(&4, 0, 3)?;
    let mut policy = ConstPolicy { stride: 1 };
    let record = evaluator.evaluate(&mut policy)?;

    assert_eq!(record.get_scalar("Episode return")?, 4.0);
    assert_eq!(record.get_scalar("Episode length")?, 4.0);
    assert_eq!(record.get_integer("Done episodes")?, 3);
    Ok(())
}

#[test]
fn test_max_steps_cuts_episodes() -> Result<()> {
    let mut evaluator = DefaultEvaluator::<LineEnv>::new(&4, 0, 2)?.max_steps(10);
    let mut policy = ConstPolicy { stride: 0 };
    let record = evaluator.evaluate(&mut policy)?;

    assert_eq!(record.get_scalar("Episode return")?, 0.0);
    assert_eq!(record.get_scalar("Episode length")?, 10.0);
    assert_eq!(record.get_integer("Done episodes")?, 0);
    Ok(())
}

#[test]
fn test_step_with_reset() -> Result<()> {
    let mut env = LineEnv::build(&1, 0)?;
    env.reset()?;
    let (step, _) = env.step_with_reset(&StepAct(1))?;
    assert!(step.is_done());
    assert_eq!(step.obs.0, 1);
    assert_eq!(step.init_obs.map(|o| o.0), Some(0));
    Ok(())
}

#[test]
fn test_policy_from_yaml() -> Result<()> {
    let dir = TempDir::new("coverage_core")?;
    let path = dir.path().join("policy.yaml");
    let mut file = std::fs::File::create(&path)?;
    writeln!(file, "stride: 2")?;

    let mut policy = <ConstPolicy as Configurable<LineEnv>>::build_from_path(&path)?;
    assert_eq!(policy.sample(&PosObs(0)).0, 2);

    let path = dir.path().join("bad_policy.yaml");
    std::fs::write(&path, "stride: -1\n")?;
    assert!(<ConstPolicy as Configurable<LineEnv>>::build_from_path(&path).is_err());
    assert!(
        <ConstPolicy as Configurable<LineEnv>>::build_from_path(dir.path().join("missing.yaml"))
            .is_err()
    );
    Ok(())
}

struct EpisodeCountingPolicy {
    n_resets: usize,
}

impl Policy<LineEnv> for EpisodeCountingPolicy {
    fn sample(&mut self, _: &PosObs) -> StepAct {
        StepAct(1)
    }

    fn reset(&mut self) {
        self.n_resets += 1;
    }
}

#[test]
fn test_policy_reset_every_episode() -> Result<()> {
    let mut evaluator = DefaultEvaluator::<LineEnv>::new(&2, 0, 5)?;
    let mut policy = EpisodeCountingPolicy { n_resets: 0 };
    evaluator.evaluate(&mut policy)?;
    assert_eq!(policy.n_resets, 5);
    Ok(())
}
