//! Errors of the coverage gridworld.
use crate::{EpisodePhase, RenderMode};
use thiserror::Error;

/// Errors of the coverage gridworld.
///
/// Moves into a wall or off the grid are not errors; they are no-op transitions.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GridError {
    /// Rendering was requested in a mode that does not draw anything.
    #[error("Unsupported render mode: {0:?}, rendering requires the interactive mode")]
    UnsupportedRenderModeError(RenderMode),

    /// The presentation subsystem is not available.
    #[error("Render dependency unavailable: {0}")]
    RenderDependencyUnavailableError(String),

    /// An action index outside of `0..=4`.
    #[error("Invalid action: {0}, expected an integer in 0..=4")]
    InvalidActionError(i64),

    /// A step was requested while no episode is running.
    #[error("Invalid state: cannot step in phase {0:?}, call reset first")]
    InvalidStateError(EpisodePhase),

    /// An inconsistent layout.
    #[error("Invalid layout: {0}")]
    InvalidLayoutError(String),
}
