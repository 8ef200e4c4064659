//! Error types for the mount roulette

use thiserror::Error;

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, RouletteError>;

/// Errors raised by validation, the command path and config loading.
///
/// Selection itself never fails: an empty candidate set is reported as `None`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouletteError {
    #[error("Mount group \"{0}\" not found.")]
    GroupNotFound(String),

    #[error("A group named \"{0}\" already exists.")]
    DuplicateGroupName(String),

    #[error("Please provide a name.")]
    EmptyGroupName,

    #[error("Please specify a mount group")]
    MissingGroupArgument,

    #[error("Cannot delete the last remaining group.")]
    LastGroup,

    #[error("Unable to summon mount from group \"{0}\".")]
    NoMountAvailable(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(String),
}

impl From<std::io::Error> for RouletteError {
    fn from(e: std::io::Error) -> Self {
        RouletteError::Io(e.to_string())
    }
}
