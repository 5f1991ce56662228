//! Registration of the coverage environments by string id.
//!
//! `"standard"` and `"complete"` are accepted as short names of
//! [`SIMPLE_COVERAGE`] and [`SIMPLE_COVERAGE_COMPLETE`].
use crate::{CoverageEnv, GridEnvConfig, Layout, RenderMode};
use anyhow::Result;
use coverage_core::{
    registry::{DynEnv, EnvRegistry, MakeOptions},
    Env,
};

/// Id of the environment on the 3x3 reference layout.
pub const SIMPLE_COVERAGE: &str = "simple-coverage";

/// Id of the environment on the 3x3 reference layout accepting steps after the episode ended.
pub const SIMPLE_COVERAGE_COMPLETE: &str = "simple-coverage-complete";

fn make(config: GridEnvConfig, options: &MakeOptions) -> Result<Box<dyn DynEnv>> {
    let config = match &options.render_mode {
        Some(mode) => config.render_mode(mode.parse::<RenderMode>()?),
        None => config,
    };
    let env: Box<dyn DynEnv> = Box::new(CoverageEnv::build(&config, options.seed)?);
    Ok(env)
}

fn make_standard(options: &MakeOptions) -> Result<Box<dyn DynEnv>> {
    make(GridEnvConfig::default().layout(Layout::reference()), options)
}

fn make_complete(options: &MakeOptions) -> Result<Box<dyn DynEnv>> {
    make(
        GridEnvConfig::default()
            .layout(Layout::reference())
            .allow_step_after_done(true),
        options,
    )
}

type Ctor = fn(&MakeOptions) -> Result<Box<dyn DynEnv>>;

/// Ids, short names and constructors of the environments.
const ENVS: [(&str, &str, Ctor); 2] = [
    (SIMPLE_COVERAGE, "standard", make_standard),
    (SIMPLE_COVERAGE_COMPLETE, "complete", make_complete),
];

/// Registers the coverage environments under their ids and short names.
pub fn register_envs(registry: &mut EnvRegistry) -> Result<()> {
    for &(id, alias, ctor) in ENVS.iter() {
        registry.register(id, ctor)?;
        registry.register(alias, ctor)?;
    }
    Ok(())
}

/// Returns a registry with the coverage environments.
pub fn registry() -> Result<EnvRegistry> {
    let mut registry = EnvRegistry::new();
    register_envs(&mut registry)?;
    Ok(registry)
}
