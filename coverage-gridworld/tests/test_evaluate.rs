use anyhow::Result;
use coverage_core::{Configurable, DefaultEvaluator, Evaluator};
use coverage_gridworld::{
    CoverageEnv, GridEnvConfig, GridError, RandomPolicy, RandomPolicyConfig, ScriptedPolicy,
    ScriptedPolicyConfig,
};
use std::io::Write;
use tempdir::TempDir;
use test_log::test;

#[test]
fn test_evaluate_random_policy() -> Result<()> {
    let config = GridEnvConfig::default();
    let mut evaluator = DefaultEvaluator::<CoverageEnv>::new(&config, 0, 3)?.max_steps(2000);
    let mut policy = <RandomPolicy as Configurable<CoverageEnv>>::build(RandomPolicyConfig {
        seed: Some(7),
    })?;
    let record = evaluator.evaluate(&mut policy)?;

    // A random walk covers the eight cells of the reference layout well within the limit
    assert_eq!(record.get_integer("Done episodes")?, 3);
    assert_eq!(record.get_scalar("Episode return")?, 7.0);
    Ok(())
}

#[test]
fn test_evaluate_scripted_policy_from_yaml() -> Result<()> {
    let dir = TempDir::new("coverage_gridworld")?;
    let path = dir.path().join("policy.yaml");
    let mut file = std::fs::File::create(&path)?;
    // Down, down, right, right, up, up, left
    writeln!(file, "actions: [1, 1, 2, 2, 3, 3, 0]")?;

    let mut policy = <ScriptedPolicy as Configurable<CoverageEnv>>::build_from_path(&path)?;
    let mut evaluator = DefaultEvaluator::<CoverageEnv>::new(&GridEnvConfig::default(), 0, 2)?;
    let record = evaluator.evaluate(&mut policy)?;

    // The script restarts with every episode
    assert_eq!(record.get_scalar("Episode return")?, 7.0);
    assert_eq!(record.get_scalar("Episode length")?, 7.0);
    assert_eq!(record.get_integer("Done episodes")?, 2);
    Ok(())
}

#[test]
fn test_scripted_policy_rejects_unknown_actions() -> Result<()> {
    let dir = TempDir::new("coverage_gridworld")?;
    let path = dir.path().join("policy.yaml");
    std::fs::write(&path, "actions: [0, 1, 5]\n")?;

    let err = <ScriptedPolicy as Configurable<CoverageEnv>>::build_from_path(&path)
        .err()
        .unwrap();
    assert_eq!(
        err.downcast_ref::<GridError>(),
        Some(&GridError::InvalidActionError(5))
    );

    let config = ScriptedPolicyConfig {
        actions: vec![-1],
    };
    assert!(<ScriptedPolicy as Configurable<CoverageEnv>>::build(config).is_err());
    Ok(())
}
