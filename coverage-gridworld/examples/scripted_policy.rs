use anyhow::Result;
use clap::Parser;
use coverage_core::{Configurable, Env as _, Policy};
use coverage_gridworld::{
    render::{GridView, TileRenderer},
    CoverageEnv, GridEnvConfig, RenderMode, ScriptedPolicy,
};
use log::info;
use std::{path::PathBuf, thread, time::Duration};

/// Replays a fixed action sequence on the reference layout.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// YAML file with the environment configuration.
    #[arg(long)]
    config: Option<PathBuf>,

    /// YAML file with the action sequence of the policy.
    #[arg(long)]
    policy: Option<PathBuf>,

    /// Draw the grid in a window.
    #[arg(long)]
    render: bool,

    /// Write the final state as a PNG image.
    #[arg(long)]
    snapshot: Option<PathBuf>,

    /// Pause between steps in milliseconds.
    #[arg(long, default_value_t = 0)]
    wait: u64,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => GridEnvConfig::load(path)?,
        None => GridEnvConfig::default().allow_step_after_done(true),
    };
    let config = if args.render {
        config.render_mode(RenderMode::Interactive)
    } else {
        config
    };
    info!(
        "{}x{} grid, step budget {}, render mode {}",
        config.get_layout().size(),
        config.get_layout().size(),
        config.get_step_budget(),
        config.get_render_mode()
    );
    let mut policy = match &args.policy {
        Some(path) => <ScriptedPolicy as Configurable<CoverageEnv>>::build_from_path(path)?,
        None => ScriptedPolicy::from_indices(&[0, 1, 4, 1, 2, 3, 2, 3, 3, 3, 3, 0])?,
    };

    let mut env = CoverageEnv::build(&config, 0)?;
    let (mut obs, _) = env.reset()?;
    let mut total_reward = 0.0;

    while !policy.is_exhausted() {
        let act = policy.sample(&obs);
        let (step, _) = env.step(&act)?;
        total_reward += step.reward;
        info!(
            "{:?}: reward = {}, covered {}/{}",
            act,
            step.reward,
            env.total_covered_cells(),
            env.coverable_cells()
        );
        thread::sleep(Duration::from_millis(args.wait));
        if step.is_done() && !config.get_allow_step_after_done() {
            break;
        }
        obs = step.obs;
    }
    info!("Total reward: {}", total_reward);

    if let Some(path) = &args.snapshot {
        let mut renderer = TileRenderer::new(env.layout().size(), Default::default(), 0);
        let view = GridView {
            grid: env.grid(),
            agent_pos: env.agent_pos(),
        };
        renderer.paint(&view).save_png(path)?;
        info!("Saved the final state to {:?}", path);
    }

    env.close();
    Ok(())
}
