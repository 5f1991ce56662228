//! Errors in the library.
use thiserror::Error;

/// Errors in the library.
#[derive(Error, Debug, PartialEq)]
pub enum CoreError {
    /// Record key error.
    #[error("Record key error: {0}")]
    RecordKeyError(String),

    /// Record value type error.
    #[error("Record value type error: {0}")]
    RecordValueTypeError(String),

    /// No environment is registered under the given id.
    #[error("Unknown environment id: {0}")]
    UnknownEnvIdError(String),

    /// An environment is already registered under the given id.
    #[error("Environment id already registered: {0}")]
    DuplicateEnvIdError(String),
}
