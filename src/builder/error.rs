//! Build errors for the calculator builder.

use thiserror::Error;

/// Errors that can occur when building a calculator or loading its config.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Reset display {0:?} must be empty or \"0\"")]
    InvalidResetDisplay(String),

    #[error("Config document could not be parsed: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}
