//! The module contains the errors the assist client can throw.
use thiserror::Error;

/// Assist custom errors.
#[derive(Error, Debug)]
pub enum AssistError {
    /// No api key configured; raised at client construction, never after a
    /// request went out.
    #[error("missing assist api key")]
    MissingApiKey,
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    #[error("Generation failed: {0}")]
    Generation(String),
}
