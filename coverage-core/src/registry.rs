//! Lookup of environments by string id.
//!
//! A driver that does not know the concrete type of an environment obtains a
//! boxed [`DynEnv`] from an [`EnvRegistry`] by its id:
//!
//! ```ignore
//! let registry = coverage_gridworld::registry()?;
//! let mut env = registry.make("simple-coverage", &MakeOptions::default())?;
//! let (obs, _) = env.reset()?;
//! let step = env.step(1)?;
//! ```
//!
//! The registry is populated explicitly by the crates providing environments;
//! there is no process-global registration.
use crate::{error::CoreError, record::Record, Act, Env};
use anyhow::Result;
use log::trace;
use std::{collections::BTreeMap, convert::TryFrom};

/// Actions taken from a finite set indexed by `0..N_ACTS`.
pub trait DiscreteAct: Act + TryFrom<i64> {
    /// The number of actions.
    const N_ACTS: usize;
}

/// A transition of a [`DynEnv`] with observation and action flattened to integers.
#[derive(Debug, Clone, PartialEq)]
pub struct DynStep {
    /// Observation after the action was applied.
    pub obs: Vec<i64>,

    /// Reward.
    pub reward: f32,

    /// Flag denoting if the episode is terminated.
    pub is_terminated: bool,

    /// Flag denoting if the episode is truncated.
    pub is_truncated: bool,

    /// Metadata of the transition.
    pub info: Record,
}

impl DynStep {
    /// Terminated or truncated.
    pub fn is_done(&self) -> bool {
        self.is_terminated || self.is_truncated
    }
}

/// Object-safe view of an [`Env`] with integer observations and actions.
///
/// Implemented for every [`Env`] whose observation converts into `Vec<i64>`
/// and whose action is a [`DiscreteAct`].
pub trait DynEnv {
    /// Resets the environment.
    fn reset(&mut self) -> Result<(Vec<i64>, Record)>;

    /// Performs an environment step with the action of the given index.
    fn step(&mut self, act: i64) -> Result<DynStep>;

    /// Renders the current state.
    fn render(&mut self) -> Result<()>;

    /// Releases resources held by the environment.
    fn close(&mut self);

    /// The number of actions.
    fn n_acts(&self) -> usize;
}

impl<E> DynEnv for E
where
    E: Env,
    E::Obs: Into<Vec<i64>>,
    E::Act: DiscreteAct,
    <E::Act as TryFrom<i64>>::Error: Into<anyhow::Error>,
{
    fn reset(&mut self) -> Result<(Vec<i64>, Record)> {
        let (obs, record) = Env::reset(self)?;
        Ok((obs.into(), record))
    }

    fn step(&mut self, act: i64) -> Result<DynStep> {
        let act = match <E::Act as TryFrom<i64>>::try_from(act) {
            Ok(act) => act,
            Err(e) => return Err(e.into()),
        };
        let (step, info) = Env::step(self, &act)?;
        Ok(DynStep {
            obs: step.obs.into(),
            reward: step.reward,
            is_terminated: step.is_terminated,
            is_truncated: step.is_truncated,
            info,
        })
    }

    fn render(&mut self) -> Result<()> {
        Env::render(self)
    }

    fn close(&mut self) {
        Env::close(self)
    }

    fn n_acts(&self) -> usize {
        <E::Act as DiscreteAct>::N_ACTS
    }
}

/// Options passed to the constructor of a registered environment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MakeOptions {
    /// Render mode requested by the driver, `None` for the environment's default.
    pub render_mode: Option<String>,

    /// Random seed.
    pub seed: i64,
}

impl MakeOptions {
    /// Sets the render mode.
    pub fn render_mode(mut self, v: impl Into<String>) -> Self {
        self.render_mode = Some(v.into());
        self
    }

    /// Sets the random seed.
    pub fn seed(mut self, v: i64) -> Self {
        self.seed = v;
        self
    }
}

type Ctor<T> = Box<dyn Fn(&MakeOptions) -> Result<Box<T>>>;

/// A mapping from string ids to environment constructors.
pub struct EnvRegistry<T: ?Sized = dyn DynEnv> {
    ctors: BTreeMap<String, Ctor<T>>,
}

impl<T: ?Sized> Default for EnvRegistry<T> {
    fn default() -> Self {
        Self {
            ctors: BTreeMap::new(),
        }
    }
}

impl<T: ?Sized> EnvRegistry<T> {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a constructor under `id`.
    ///
    /// Fails with [`CoreError::DuplicateEnvIdError`] if `id` is taken.
    pub fn register<F>(&mut self, id: impl Into<String>, ctor: F) -> Result<()>
    where
        F: Fn(&MakeOptions) -> Result<Box<T>> + 'static,
    {
        let id = id.into();
        if self.ctors.contains_key(&id) {
            return Err(CoreError::DuplicateEnvIdError(id).into());
        }
        trace!("Register environment {}", id);
        self.ctors.insert(id, Box::new(ctor));
        Ok(())
    }

    /// Constructs the environment registered under `id`.
    ///
    /// Fails with [`CoreError::UnknownEnvIdError`] if nothing is registered
    /// under `id`, otherwise propagates the error of the constructor.
    pub fn make(&self, id: &str, options: &MakeOptions) -> Result<Box<T>> {
        match self.ctors.get(id) {
            Some(ctor) => ctor(options),
            None => Err(CoreError::UnknownEnvIdError(id.to_string()).into()),
        }
    }

    /// Returns `true` if an environment is registered under `id`.
    pub fn contains(&self, id: &str) -> bool {
        self.ctors.contains_key(id)
    }

    /// Registered ids in lexicographic order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.ctors.keys().map(|k| k.as_str())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{Obs, Step};
    use anyhow::anyhow;

    #[derive(Clone, Debug)]
    struct CountObs(i64);

    impl Obs for CountObs {
        fn len(&self) -> usize {
            1
        }
    }

    impl From<CountObs> for Vec<i64> {
        fn from(obs: CountObs) -> Self {
            vec![obs.0]
        }
    }

    #[derive(Clone, Debug)]
    struct CountAct(i64);

    impl Act for CountAct {
        fn len(&self) -> usize {
            1
        }
    }

    impl TryFrom<i64> for CountAct {
        type Error = anyhow::Error;

        fn try_from(v: i64) -> Result<Self> {
            if (0..2).contains(&v) {
                Ok(Self(v))
            } else {
                Err(anyhow!("invalid action {}", v))
            }
        }
    }

    impl DiscreteAct for CountAct {
        const N_ACTS: usize = 2;
    }

    /// Terminates when the counter reaches `limit`.
    struct CountEnv {
        limit: i64,
        count: i64,
    }

    impl Env for CountEnv {
        type Config = i64;
        type Obs = CountObs;
        type Act = CountAct;
        type Info = ();

        fn build(config: &Self::Config, _seed: i64) -> Result<Self> {
            Ok(Self {
                limit: *config,
                count: 0,
            })
        }

        fn step(&mut self, a: &Self::Act) -> Result<(Step<Self>, Record)> {
            self.count += a.0;
            let step = Step::new(
                CountObs(self.count),
                a.clone(),
                a.0 as f32,
                self.count >= self.limit,
                false,
                (),
            );
            Ok((step, Record::empty()))
        }

        fn reset(&mut self) -> Result<(Self::Obs, Record)> {
            self.count = 0;
            Ok((CountObs(0), Record::empty()))
        }
    }

    fn registry() -> EnvRegistry {
        let mut registry = EnvRegistry::new();
        registry
            .register("count-2", |options: &MakeOptions| {
                let env = CountEnv::build(&2, options.seed)?;
                Ok(Box::new(env) as Box<dyn DynEnv>)
            })
            .unwrap();
        registry
    }

    #[test]
    fn test_make_and_run() {
        let registry = registry();
        let mut env = registry.make("count-2", &MakeOptions::default()).unwrap();
        assert_eq!(env.n_acts(), 2);
        assert_eq!(env.reset().unwrap().0, vec![0]);
        let step = env.step(1).unwrap();
        assert_eq!(step.obs, vec![1]);
        assert!(!step.is_done());
        let step = env.step(1).unwrap();
        assert!(step.is_terminated);
        assert!(env.step(5).is_err());
        env.render().unwrap();
        env.close();
    }

    #[test]
    fn test_unknown_and_duplicate_ids() {
        let mut registry = registry();
        let err = registry
            .make("missing", &MakeOptions::default())
            .err()
            .unwrap();
        assert_eq!(
            err.downcast_ref::<CoreError>(),
            Some(&CoreError::UnknownEnvIdError("missing".to_string()))
        );

        let err = registry
            .register("count-2", |_: &MakeOptions| {
                Ok(Box::new(CountEnv::build(&3, 0)?) as Box<dyn DynEnv>)
            })
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CoreError>(),
            Some(CoreError::DuplicateEnvIdError(_))
        ));
        assert_eq!(registry.ids().collect::<Vec<_>>(), vec!["count-2"]);
        assert!(registry.contains("count-2"));
    }
}
