use std::error::Error as StdError;

use thiserror::Error;

/// Voicetrim's crate-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Voicetrim's crate-wide error type.
///
/// This is intentionally decoupled from `anyhow` so downstream libraries aren't forced to
/// adopt `anyhow` in their own public APIs.
#[derive(Debug, Error)]
pub enum Error {
    /// Detection options failed validation (zero sample rate, bad threshold, ...).
    #[error("invalid options: {0}")]
    InvalidOptions(String),

    /// The audio buffer cannot be segmented with the given options.
    #[error("invalid audio input: {0}")]
    InvalidAudio(String),

    #[error("{0}")]
    Message(String),

    #[error(transparent)]
    Other(#[from] Box<dyn StdError + Send + Sync>),
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Self::Message(format!("{err:#}"))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Other(Box::new(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Other(Box::new(err))
    }
}
