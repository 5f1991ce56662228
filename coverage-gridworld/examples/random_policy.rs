use anyhow::Result;
use clap::Parser;
use coverage_core::registry::MakeOptions;
use coverage_gridworld::SIMPLE_COVERAGE;
use log::info;

/// Runs a uniformly random policy on an environment looked up by id.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Id of the environment.
    #[arg(long, default_value = SIMPLE_COVERAGE)]
    env: String,

    /// Render mode, "interactive" or "none".
    #[arg(long, default_value = "none")]
    render_mode: String,

    /// Number of episodes.
    #[arg(long, default_value_t = 5)]
    n_episodes: usize,

    /// Maximum number of steps in an episode.
    #[arg(long, default_value_t = 500)]
    max_steps: usize,

    /// Random seed.
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    fastrand::seed(args.seed);

    let registry = coverage_gridworld::registry()?;
    let options = MakeOptions::default()
        .render_mode(args.render_mode.as_str())
        .seed(args.seed as i64);
    let mut env = registry.make(&args.env, &options)?;
    let n_acts = env.n_acts();

    for episode in 0..args.n_episodes {
        env.reset()?;
        let mut total_reward = 0.0;
        let mut n_steps = 0;

        while n_steps < args.max_steps {
            let step = env.step(fastrand::usize(..n_acts) as i64)?;
            total_reward += step.reward;
            n_steps += 1;
            if step.is_done() {
                break;
            }
        }
        info!(
            "Episode {}: {} steps, total reward = {}",
            episode, n_steps, total_reward
        );
    }

    env.close();
    Ok(())
}
