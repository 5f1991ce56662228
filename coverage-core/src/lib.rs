#![warn(missing_docs)]
//! Core abstractions of the coverage gridworld environment.
//!
//! An environment ([`Env`]) emits observations ([`Obs`]) and consumes actions
//! ([`Act`]) chosen by a [`Policy`]. Every interaction step produces a [`Step`]
//! together with a metadata [`Record`](record::Record).
//! Environments can be constructed by string id through an
//! [`EnvRegistry`](registry::EnvRegistry).
pub mod error;
pub mod record;
pub mod registry;
pub mod util;

mod base;
pub use base::{Act, Configurable, Env, Info, Obs, Policy, Step};

mod evaluator;
pub use evaluator::{DefaultEvaluator, Evaluator};
